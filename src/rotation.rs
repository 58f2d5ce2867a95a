//! 3D rotations expressed as quaternions.
//!
//! Conversions to and from axis-angle and Euler-angle form, and
//! application of a rotation to a vector.

use crate::quaternion::Quaternion;
use rand::Rng;
use vector3d::Vector3d;

impl Quaternion {
    /// The rotation by `angle` radians about `axis`.
    ///
    /// The axis must already be a unit vector.  It is not normalized
    /// here, and a longer or shorter axis gives a quaternion that is
    /// not a rotation.
    pub fn from_axis_angle(axis: Vector3d<f64>, angle: f64) -> Self {
        let (s, c) = (angle / 2.0).sin_cos();
        Quaternion { w: c, v: axis * s }
    }

    /// The rotation by `angle` radians about the x axis.
    pub fn from_x_rotation(angle: f64) -> Self {
        Quaternion::from_axis_angle(Vector3d::new(1.0, 0.0, 0.0), angle)
    }

    /// The rotation by `angle` radians about the y axis.
    pub fn from_y_rotation(angle: f64) -> Self {
        Quaternion::from_axis_angle(Vector3d::new(0.0, 1.0, 0.0), angle)
    }

    /// The rotation by `angle` radians about the z axis.
    pub fn from_z_rotation(angle: f64) -> Self {
        Quaternion::from_axis_angle(Vector3d::new(0.0, 0.0, 1.0), angle)
    }

    /// The rotation described by Euler angles in the ZYX convention.
    ///
    /// The angles are stored as `(roll, pitch, yaw)`, i.e. the rotation
    /// about x in `euler.x`, about y in `euler.y` and about z in
    /// `euler.z`, all in radians.
    pub fn from_euler_zyx(euler: Vector3d<f64>) -> Self {
        let (sr, cr) = (euler.x / 2.0).sin_cos();
        let (sp, cp) = (euler.y / 2.0).sin_cos();
        let (sy, cy) = (euler.z / 2.0).sin_cos();
        Quaternion::new(
            cy * cr * cp + sy * sr * sp,
            cy * sr * cp - sy * cr * sp,
            cy * cr * sp + sy * sr * cp,
            sy * cr * cp - cy * sr * sp,
        )
    }

    /// The angle in radians and the axis of this rotation.
    ///
    /// A rotation by zero (or by a multiple of a full turn) has no
    /// meaningful axis, in which case the x axis is returned.
    pub fn to_axis_angle(self) -> (f64, Vector3d<f64>) {
        let angle = 2.0 * self.w.acos();
        let d = (1.0 - self.w * self.w).sqrt();
        if d != 0.0 {
            (angle, Vector3d::new(self.v.x / d, self.v.y / d, self.v.z / d))
        } else {
            (angle, Vector3d::new(1.0, 0.0, 0.0))
        }
    }

    /// The Euler angles `(roll, pitch, yaw)` of this rotation, in the
    /// same layout [`Quaternion::from_euler_zyx`] accepts.
    ///
    /// At a pitch of ±90° (gimbal lock) roll and yaw are not unique.  The
    /// pitch is clamped there rather than becoming NaN.
    pub fn to_euler_zyx(self) -> Vector3d<f64> {
        let w = self.w;
        let Vector3d { x, y, z } = self.v;
        let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
        let pitch = (2.0 * (w * y - z * x)).max(-1.0).min(1.0).asin();
        let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));
        Vector3d::new(roll, pitch, yaw)
    }

    /// Rotate `v`.  This is `q v q*` written out, which assumes that `q`
    /// is a unit quaternion; otherwise `v` also gets scaled.
    pub fn rotate(self, v: Vector3d<f64>) -> Vector3d<f64> {
        let w = self.w;
        let Vector3d { x, y, z } = self.v;
        let (ww, xx, yy, zz) = (w * w, x * x, y * y, z * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        Vector3d::new(
            ww * v.x + 2.0 * wy * v.z - 2.0 * wz * v.y + xx * v.x + 2.0 * xy * v.y
                + 2.0 * xz * v.z
                - zz * v.x
                - yy * v.x,
            2.0 * xy * v.x + yy * v.y + 2.0 * yz * v.z + 2.0 * wz * v.x - zz * v.y
                + ww * v.y
                - 2.0 * wx * v.z
                - xx * v.y,
            2.0 * xz * v.x + 2.0 * yz * v.y + zz * v.z - 2.0 * wy * v.x - yy * v.z
                + 2.0 * wx * v.y
                - xx * v.z
                + ww * v.z,
        )
    }
}

impl std::ops::Mul<Vector3d<f64>> for Quaternion {
    type Output = Vector3d<f64>;
    fn mul(self, v: Vector3d<f64>) -> Vector3d<f64> {
        self.rotate(v)
    }
}

/// Generate a uniformly distributed random rotation.
pub fn random_rotation<R: Rng + ?Sized>(rng: &mut R) -> Quaternion {
    // Shoemake, Graphics Gems III
    let theta1: f64 = rng.gen_range(0.0, std::f64::consts::TAU);
    let theta2: f64 = rng.gen_range(0.0, std::f64::consts::TAU);
    let (x1, y1) = theta1.sin_cos();
    let (x2, y2) = theta2.sin_cos();
    let u: f64 = rng.gen();
    let u1 = u.sqrt();
    let u2 = (1.0 - u).sqrt();
    Quaternion::new(u2 * y2, u1 * x1, u1 * y1, u2 * x2)
}

#[cfg(test)]
use std::f64::consts::PI;

#[cfg(test)]
fn assert_close(description: &str, a: f64, b: f64) {
    assert!(
        (a - b).abs() <= crate::EPSILON,
        "{}: {} != {}",
        description,
        a,
        b
    );
}

#[cfg(test)]
fn assert_close_vec(description: &str, a: Vector3d<f64>, b: Vector3d<f64>) {
    assert_close(description, a.x, b.x);
    assert_close(description, a.y, b.y);
    assert_close(description, a.z, b.z);
}

#[cfg(test)]
fn degrees(d: f64) -> f64 {
    d / 180.0 * PI
}

#[test]
fn axis_angle_quarter_turn() {
    let q = Quaternion::from_axis_angle(Vector3d::new(1.0, 0.0, 0.0), PI / 2.0);
    assert_eq!(q, Quaternion::new(0.7071, 0.7071, 0.0, 0.0));
}

#[test]
fn per_axis_quarter_turns() {
    assert_eq!(
        Quaternion::from_x_rotation(PI / 2.0),
        Quaternion::new(0.7071, 0.7071, 0.0, 0.0)
    );
    assert_eq!(
        Quaternion::from_y_rotation(PI / 2.0),
        Quaternion::new(0.7071, 0.0, 0.7071, 0.0)
    );
    assert_eq!(
        Quaternion::from_z_rotation(PI / 2.0),
        Quaternion::new(0.7071, 0.0, 0.0, 0.7071)
    );
}

#[test]
fn axis_angle_is_not_normalized() {
    let q = Quaternion::from_axis_angle(Vector3d::new(2.0, 0.0, 0.0), PI / 2.0);
    assert!(q.norm() > 1.5);
}

#[test]
fn to_axis_angle_quarter_turn() {
    let (angle, axis) = Quaternion::new(0.7071, 0.7071, 0.0, 0.0).to_axis_angle();
    assert_close("angle", angle, PI / 2.0);
    assert_close_vec("axis", axis, Vector3d::new(1.0, 0.0, 0.0));
}

#[test]
fn to_axis_angle_without_rotation() {
    let (angle, axis) = Quaternion::identity().to_axis_angle();
    assert_eq!(angle, 0.0);
    assert_eq!(axis, Vector3d::new(1.0, 0.0, 0.0));
}

#[test]
fn to_axis_angle_full_turn() {
    let (angle, axis) = Quaternion::new(-1.0, 0.0, 0.0, 0.0).to_axis_angle();
    assert_close("angle", angle, 2.0 * PI);
    assert_eq!(axis, Vector3d::new(1.0, 0.0, 0.0));

    let full_turn = Quaternion::from_z_rotation(2.0 * PI);
    assert_eq!(full_turn.w, -1.0);
    let (angle, axis) = full_turn.to_axis_angle();
    assert_close("angle", angle, 2.0 * PI);
    assert_eq!(axis, Vector3d::new(1.0, 0.0, 0.0));
}

#[test]
fn axis_angle_round_trip() {
    let axis = Vector3d::new(0.802, 0.267, -0.534);
    let (angle, back) = Quaternion::from_axis_angle(axis, 1.11).to_axis_angle();
    assert_close("angle", angle, 1.11);
    assert_close_vec("axis", back, axis);
}

#[test]
fn euler_known_quaternion() {
    let euler = Vector3d::new(degrees(165.0), degrees(63.0), degrees(122.0));
    let q = Quaternion::from_euler_zyx(euler);
    assert_eq!(q, Quaternion::new(0.5070333, 0.3501829, 0.7724199, -0.1538071));
    assert_close_vec("euler", q.to_euler_zyx(), euler);
}

#[test]
fn euler_single_axes() {
    let roll = Quaternion::from_euler_zyx(Vector3d::new(0.3, 0.0, 0.0));
    assert_eq!(roll, Quaternion::from_x_rotation(0.3));
    let pitch = Quaternion::from_euler_zyx(Vector3d::new(0.0, 0.3, 0.0));
    assert_eq!(pitch, Quaternion::from_y_rotation(0.3));
    let yaw = Quaternion::from_euler_zyx(Vector3d::new(0.0, 0.0, 0.3));
    assert_eq!(yaw, Quaternion::from_z_rotation(0.3));
}

#[test]
fn euler_applies_roll_then_pitch_then_yaw() {
    let euler = Vector3d::new(0.4, -0.7, 1.3);
    let composed = Quaternion::from_z_rotation(euler.z)
        * Quaternion::from_y_rotation(euler.y)
        * Quaternion::from_x_rotation(euler.x);
    assert_eq!(Quaternion::from_euler_zyx(euler), composed);
}

#[test]
fn euler_gimbal_lock_is_clamped() {
    let locked = Quaternion::from_euler_zyx(Vector3d::new(0.3, PI / 2.0, 0.2));
    let euler = locked.to_euler_zyx();
    assert_close("pitch", euler.y, PI / 2.0);
    assert!(euler.x.is_finite() && euler.z.is_finite());

    // slightly too long, so the asin argument exceeds one
    let q = Quaternion::from_y_rotation(PI / 2.0);
    let long = Quaternion::new(q.w * 1.001, q.v.x, q.v.y * 1.001, q.v.z);
    let euler = long.to_euler_zyx();
    assert!(!euler.y.is_nan());
    assert_close("clamped pitch", euler.y, PI / 2.0);
}

#[test]
fn rotate_with_identity() {
    let v = Vector3d::new(1.5, -2.0, 7.25);
    assert_eq!(Quaternion::identity().rotate(v), v);
}

#[test]
fn rotate_known_vector() {
    let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
    assert_close_vec(
        "rotated",
        q.rotate(Vector3d::new(1.0, 0.0, 0.0)),
        Vector3d::new(0.0, 1.0, 0.0),
    );
    assert_close_vec(
        "rotated with *",
        q * Vector3d::new(0.0, 1.0, 0.0),
        Vector3d::new(0.0, 0.0, 1.0),
    );
}

#[test]
fn rotate_full_turn_in_steps() {
    let q = Quaternion::from_z_rotation(degrees(30.0));
    let mut position = Vector3d::new(10.0, 0.0, 0.0);
    for i in 0..12 {
        position = q.rotate(position);
        if i == 2 {
            assert_close_vec("quarter turn", position, Vector3d::new(0.0, 10.0, 0.0));
        }
    }
    assert_close_vec("full turn", position, Vector3d::new(10.0, 0.0, 0.0));
}

#[test]
fn random_rotations() {
    use rand::SeedableRng;
    let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(7);
    let v = Vector3d::new(0.3, -1.2, 2.0);
    for _ in 0..1000 {
        let q = random_rotation(&mut rng);
        assert_close("norm", q.norm(), 1.0);

        let rotated = q.rotate(v);
        assert_close("length", rotated.norm2(), v.norm2());
        assert_close_vec("undo", q.conjugate().rotate(rotated), v);

        // the closed form agrees with q v q*
        let pure = Quaternion { w: 0.0, v };
        let sandwich = q * pure * q.conjugate();
        assert_close("sandwich w", sandwich.w, 0.0);
        assert_close_vec("sandwich", sandwich.v, rotated);

        let (angle, axis) = q.to_axis_angle();
        assert_eq!(Quaternion::from_axis_angle(axis, angle), q);
    }
}

#[test]
fn random_euler_round_trip() {
    use rand::SeedableRng;
    let mut rng = rand_xoshiro::Xoshiro256StarStar::seed_from_u64(11);
    for _ in 0..1000 {
        let euler = Vector3d::new(
            rng.gen_range(-3.0, 3.0),
            rng.gen_range(-1.5, 1.5),
            rng.gen_range(-3.0, 3.0),
        );
        let back = Quaternion::from_euler_zyx(euler).to_euler_zyx();
        assert_close_vec("euler", back, euler);
    }
}
