//! A character walking around, steered by quaternions.
//!
//! This is the logic behind the `walk` and `hemisphere` binaries.

use crate::quaternion::Quaternion;
use crate::slerp::slerp;
use auto_args::AutoArgs;
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use vector3d::Vector3d;

/// The parameters of the walk demo.
///
/// These parameters are normally set via command-line arguments.
#[derive(Debug, AutoArgs, Clone)]
pub struct WalkParams {
    /// The number of steps taken along the half circle (default 10000).
    pub steps: Option<usize>,
    /// The length of a single step (default 0.0314).
    pub step_size: Option<f64>,
    /// How far to turn left at each turn, in degrees (default 90).
    pub turn_degrees: Option<f64>,
    /// Save the final state here (yaml, json or cbor).
    pub save_as: Option<PathBuf>,
}

impl Default for WalkParams {
    fn default() -> Self {
        WalkParams {
            steps: None,
            step_size: None,
            turn_degrees: None,
            save_as: None,
        }
    }
}

impl WalkParams {
    /// The number of steps along the half circle.
    pub fn steps(&self) -> usize {
        self.steps.unwrap_or(10000)
    }
    /// The length of each step.
    pub fn step_size(&self) -> f64 {
        self.step_size.unwrap_or(0.0314)
    }
    /// A single left turn, about the z axis.
    pub fn turn(&self) -> Quaternion {
        Quaternion::from_z_rotation(self.turn_degrees.unwrap_or(90.0).to_radians())
    }
}

/// Somebody with a position and a heading.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Walker {
    /// Where we are.
    pub position: Vector3d<f64>,
    /// Which way we face.  The identity faces along the x axis.
    pub orientation: Quaternion,
}

impl Default for Walker {
    fn default() -> Self {
        Walker::new()
    }
}

impl Walker {
    /// A walker at the origin, facing along x.
    pub fn new() -> Self {
        Walker {
            position: Vector3d::new(0.0, 0.0, 0.0),
            orientation: Quaternion::identity(),
        }
    }

    /// Apply `rotation` on top of the current orientation.
    pub fn turn(&mut self, rotation: Quaternion) {
        self.orientation = rotation * self.orientation;
    }

    /// Move by `forward`, given in the walker's own frame.
    pub fn step(&mut self, forward: Vector3d<f64>) {
        self.position = self.position + self.orientation.rotate(forward);
    }

    /// Take `steps` steps of length `step_size`, turning smoothly from
    /// `start` to `end` on the way.
    pub fn walk_arc(&mut self, start: Quaternion, end: Quaternion, steps: usize, step_size: f64) {
        let forward = Vector3d::new(step_size, 0.0, 0.0);
        for i in 0..steps {
            let t = i as f64 / steps as f64;
            self.orientation = slerp(start, end, t);
            self.step(forward);
        }
    }
}

impl Display for Walker {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        writeln!(
            f,
            "Character position:    ({:8.3}, {:8.3}, {:8.3})",
            self.position.x, self.position.y, self.position.z
        )?;
        write!(f, "Character orientation: {}", self.orientation)
    }
}

/// Turn left once and walk two units forward.
pub fn basic_walk(turn: Quaternion) -> Walker {
    let mut walker = Walker::new();
    walker.turn(turn);
    walker.step(Vector3d::new(2.0, 0.0, 0.0));
    walker
}

/// Walk a half circle, turning smoothly from the current heading to the
/// heading two turns further on.
pub fn half_circle(walker: &mut Walker, turn: Quaternion, steps: usize, step_size: f64) {
    let start = walker.orientation;
    walker.turn(turn);
    let end = turn * walker.orientation;
    walker.walk_arc(start, end, steps, step_size);
}

/// The basic walk followed by the half circle.
pub fn run_walk(params: &WalkParams) -> Walker {
    let mut walker = basic_walk(params.turn());
    half_circle(&mut walker, params.turn(), params.steps(), params.step_size());
    walker
}

/// Orientations of a hemisphere of sensors, as Euler angles in degrees
/// `(roll, pitch, yaw)` together with the matching quaternion.
///
/// Eight sensors look around the horizon, four look up at 45° between
/// them, and one looks straight up.
pub fn hemisphere_layout() -> Vec<(Vector3d<f64>, Quaternion)> {
    let mut angles = Vec::new();
    for i in 0..2 {
        for j in 0..8 {
            if i > 0 && j % 2 == 0 {
                continue;
            }
            angles.push(Vector3d::new(0.0, 45.0 * i as f64, 45.0 * j as f64));
        }
    }
    angles.push(Vector3d::new(0.0, 90.0, 90.0));
    angles
        .into_iter()
        .map(|deg| {
            let rad = Vector3d::new(deg.x.to_radians(), deg.y.to_radians(), deg.z.to_radians());
            (deg, Quaternion::from_euler_zyx(rad))
        })
        .collect()
}

#[test]
fn basic_walk_turns_left() {
    let walker = basic_walk(WalkParams::default().turn());
    assert!((walker.position.x - 0.0).abs() < 1e-12);
    assert!((walker.position.y - 2.0).abs() < 1e-12);
    assert!((walker.position.z - 0.0).abs() < 1e-12);
    assert_eq!(walker.orientation, Quaternion::new(0.7071, 0.0, 0.0, 0.7071));
}

#[test]
fn walk_arc_without_steps_stays_put() {
    let mut walker = Walker::new();
    walker.walk_arc(Quaternion::identity(), Quaternion::from_z_rotation(1.0), 0, 1.0);
    assert_eq!(walker.position, Vector3d::new(0.0, 0.0, 0.0));
}

#[test]
fn hemisphere_has_thirteen_sensors() {
    let layout = hemisphere_layout();
    assert_eq!(layout.len(), 13);
    for (deg, q) in layout.iter() {
        assert!((q.norm() - 1.0).abs() < 1e-12, "{:?}", deg);
    }
    let (top, q) = layout[12];
    assert_eq!(top, Vector3d::new(0.0, 90.0, 90.0));
    // straight up, so pitch hits gimbal lock
    assert!((q.to_euler_zyx().y - 90f64.to_radians()).abs() < 1e-4);
}

#[cfg(test)]
fn takes_command_line<A: AutoArgs>() -> bool {
    true
}

#[test]
fn walk_params_come_from_the_command_line() {
    assert!(takes_command_line::<WalkParams>());
    let params = WalkParams::default();
    assert_eq!(params.steps(), 10000);
    assert_eq!(params.step_size(), 0.0314);
    assert_eq!(params.turn(), Quaternion::from_z_rotation(std::f64::consts::PI / 2.0));
}

#[test]
fn walker_display() {
    let walker = Walker {
        position: Vector3d::new(0.0, 2.0, -12.5),
        orientation: Quaternion::from_z_rotation(std::f64::consts::PI / 2.0),
    };
    assert_eq!(
        format!("{}", walker),
        "Character position:    (   0.000,    2.000,  -12.500)\n\
         Character orientation: (0.707, 0.000, 0.000, 0.707)"
    );
}
