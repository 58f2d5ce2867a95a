extern crate quatrot;
extern crate vector3d;

use std::f64::consts::PI;

use quatrot::checkpoint;
use quatrot::walk::{basic_walk, half_circle, run_walk, WalkParams, Walker};
use quatrot::{slerp, Quaternion};
use vector3d::Vector3d;

fn assert_near(a: Vector3d<f64>, b: Vector3d<f64>, tolerance: f64) {
    println!("{:?} vs {:?}", a, b);
    assert!((a.x - b.x).abs() < tolerance);
    assert!((a.y - b.y).abs() < tolerance);
    assert!((a.z - b.z).abs() < tolerance);
}

#[test]
fn turn_left_and_move() {
    let walker = basic_walk(Quaternion::from_z_rotation(PI / 2.0));
    assert_near(walker.position, Vector3d::new(0.0, 2.0, 0.0), 1e-12);
}

#[test]
fn half_circle_ends_on_the_far_side() {
    let walker = run_walk(&WalkParams::default());
    assert_near(walker.position, Vector3d::new(-199.8986, 2.0314, 0.0), 1e-3);
    // the last step is taken just short of facing right
    let facing = walker.orientation.rotate(Vector3d::new(1.0, 0.0, 0.0));
    assert_near(facing, Vector3d::new(0.0, -1.0, 0.0), 1e-3);
}

#[test]
fn half_circle_with_fewer_steps() {
    let params = WalkParams {
        steps: Some(4),
        step_size: Some(1.0),
        ..WalkParams::default()
    };
    let turn = params.turn();
    let mut walker = basic_walk(turn);
    half_circle(&mut walker, turn, params.steps(), params.step_size());
    // headings of 90, 135, 180 and 225 degrees
    let h = 0.5_f64.sqrt();
    let expected = Vector3d::new(0.0 - h - 1.0 - h, 2.0 + 1.0 + h + 0.0 - h, 0.0);
    assert_near(walker.position, expected, 1e-9);
}

#[test]
fn run_walk_continues_from_the_basic_walk() {
    let params = WalkParams {
        steps: Some(50),
        turn_degrees: Some(60.0),
        ..WalkParams::default()
    };
    let mut by_hand = basic_walk(params.turn());
    half_circle(&mut by_hand, params.turn(), params.steps(), params.step_size());
    let walker = run_walk(&params);
    assert_near(walker.position, by_hand.position, 1e-12);
    assert_eq!(walker.orientation, by_hand.orientation);
}

#[test]
fn turning_composes_on_the_left() {
    let mut walker = Walker::new();
    walker.turn(Quaternion::from_x_rotation(PI / 2.0));
    walker.turn(Quaternion::from_z_rotation(PI / 2.0));
    let expected = Quaternion::from_z_rotation(PI / 2.0) * Quaternion::from_x_rotation(PI / 2.0);
    assert_eq!(walker.orientation, expected);
    walker.step(Vector3d::new(0.0, 1.0, 0.0));
    // y goes to z under the x turn, and z stays put under the z turn
    assert_near(walker.position, Vector3d::new(0.0, 0.0, 1.0), 1e-12);
}

#[test]
fn slerp_heading_is_constant_speed() {
    let start = Quaternion::from_z_rotation(PI / 2.0);
    let end = Quaternion::from_z_rotation(3.0 * PI / 2.0);
    for i in 0..=10 {
        let t = i as f64 / 10.0;
        let facing = slerp(start, end, t).rotate(Vector3d::new(1.0, 0.0, 0.0));
        let heading = PI / 2.0 + PI * t;
        assert_near(facing, Vector3d::new(heading.cos(), heading.sin(), 0.0), 1e-9);
    }
}

#[test]
fn walker_checkpoints() {
    let tempd = tempfile::TempDir::new().unwrap();
    let walker = basic_walk(Quaternion::from_euler_zyx(Vector3d::new(0.1, 0.2, 0.3)));
    for name in &["walker.yaml", "walker.json", "walker.cbor"] {
        let path = tempd.path().join(name);
        checkpoint::save(&path, &walker).unwrap();
        let back: Walker = checkpoint::load(&path).unwrap();
        assert_near(back.position, walker.position, 1e-12);
        assert_eq!(back.orientation, walker.orientation);
    }
    let e = checkpoint::save(tempd.path().join("walker.txt"), &walker).unwrap_err();
    assert_eq!(e.kind(), std::io::ErrorKind::InvalidInput);
}
