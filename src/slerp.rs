//! Spherical linear interpolation.

use crate::quaternion::{Quaternion, EPSILON};

/// Interpolate between `a` and `b` at constant angular velocity.
///
/// `t = 0` gives `a` and `t = 1` gives `b`.  Values of `t` outside
/// `[0, 1]` extrapolate along the same arc.  Two degenerate cases are
/// handled without dividing by zero:
///
/// * if `a` and `b` are identical or exactly opposite, `a` is returned
///   whatever `t` is;
/// * if they are so close to (or opposite) each other that the sine of
///   the half angle is below [`EPSILON`], the plain average is returned.
pub fn slerp(a: Quaternion, b: Quaternion, t: f64) -> Quaternion {
    let cos_half_theta = a.dot(b);
    if cos_half_theta.abs() >= 1.0 {
        return a;
    }
    let half_theta = cos_half_theta.acos();
    let sin_half_theta = (1.0 - cos_half_theta * cos_half_theta).sqrt();
    if sin_half_theta.abs() < EPSILON {
        return Quaternion {
            w: (a.w + b.w) * 0.5,
            v: (a.v + b.v) * 0.5,
        };
    }
    let ratio_a = ((1.0 - t) * half_theta).sin() / sin_half_theta;
    let ratio_b = (t * half_theta).sin() / sin_half_theta;
    Quaternion {
        w: a.w * ratio_a + b.w * ratio_b,
        v: a.v * ratio_a + b.v * ratio_b,
    }
}

impl Quaternion {
    /// Spherical linear interpolation from `self` towards `other`.  See
    /// [`slerp`].
    pub fn slerp(self, other: Quaternion, t: f64) -> Quaternion {
        slerp(self, other, t)
    }
}

#[cfg(test)]
fn example_pair() -> (Quaternion, Quaternion) {
    (
        Quaternion::new(0.6532815, -0.270598, 0.270598, 0.6532815),
        Quaternion::new(0.5, 0.5, 0.5, 0.5),
    )
}

#[test]
fn slerp_end_points() {
    let (a, b) = example_pair();
    assert_eq!(slerp(a, b, 0.0), a);
    assert_eq!(slerp(a, b, 1.0), b);
}

#[test]
fn slerp_known_value() {
    let (a, b) = example_pair();
    assert_eq!(
        slerp(a, b, 0.62),
        Quaternion::new(0.6119266, 0.2206944, 0.4498729, 0.6119266)
    );
    assert_eq!(a.slerp(b, 0.62), slerp(a, b, 0.62));
}

#[test]
fn slerp_halfway_between_rotations() {
    use std::f64::consts::PI;
    let a = Quaternion::identity();
    let b = Quaternion::from_z_rotation(PI / 2.0);
    assert_eq!(slerp(a, b, 0.5), Quaternion::from_z_rotation(PI / 4.0));
    let q = slerp(a, b, 0.3);
    assert!((q.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn slerp_extrapolates() {
    use std::f64::consts::PI;
    let a = Quaternion::identity();
    let b = Quaternion::from_z_rotation(PI / 2.0);
    assert_eq!(slerp(a, b, 2.0), Quaternion::from_z_rotation(PI));
    assert_eq!(slerp(a, b, -1.0), Quaternion::from_z_rotation(-PI / 2.0));
}

#[test]
fn slerp_identical_returns_first() {
    let (a, _) = example_pair();
    let a = a.normalize();
    let q = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    for &t in &[0.0, 0.25, 0.5, 1.0, 3.0] {
        let s = slerp(q, q, t);
        assert_eq!((s.w, s.v.x, s.v.y, s.v.z), (1.0, 0.0, 0.0, 0.0));
        assert_eq!(slerp(a, a, t), a);
    }
}

#[test]
fn slerp_opposite_returns_first() {
    let a = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    let b = Quaternion::new(-1.0, 0.0, 0.0, 0.0);
    let s = slerp(a, b, 0.7);
    assert_eq!((s.w, s.v.x, s.v.y, s.v.z), (1.0, 0.0, 0.0, 0.0));
}

#[test]
fn slerp_nearly_identical_averages() {
    let delta: f64 = 5e-5;
    let a = Quaternion::identity();
    let b = Quaternion::new(delta.cos(), delta.sin(), 0.0, 0.0);
    assert!(a.dot(b) < 1.0);
    let s = slerp(a, b, 0.9);
    assert_eq!(s.w, (a.w + b.w) * 0.5);
    assert_eq!(s.v.x, (a.v.x + b.v.x) * 0.5);
}

#[test]
fn slerp_nearly_opposite_averages() {
    let delta: f64 = 5e-5;
    let a = Quaternion::identity();
    let b = Quaternion::new(-delta.cos(), -delta.sin(), 0.0, 0.0);
    let s = slerp(a, b, 0.2);
    assert_eq!(s.w, (a.w + b.w) * 0.5);
    assert_eq!(s.v.x, (a.v.x + b.v.x) * 0.5);
    assert!(s.norm() < 1e-4);
}
