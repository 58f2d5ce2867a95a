//! Quaternion type and its algebra.

use std::fmt::{Display, Formatter, Result};
use vector3d::Vector3d;

/// The tolerance used when comparing quaternions, and when deciding that
/// two quaternions are too far apart to interpolate between.
pub const EPSILON: f64 = 1e-4;

/// A quaternion `w + v.x i + v.y j + v.z k`.
///
/// A quaternion of unit norm represents a 3D rotation.  Nothing here
/// enforces unit norm; use [`Quaternion::normalize`] when you need it.
///
/// Equality is approximate: two quaternions compare equal when every
/// component differs by at most [`EPSILON`].  This means `==` is not
/// transitive close to the threshold, and that `q` and `-q` compare
/// unequal even though they describe the same rotation.
#[derive(Copy, Clone, Debug, Serialize, Deserialize)]
pub struct Quaternion {
    /// The scalar part.
    pub w: f64,
    /// The vector part.
    pub v: Vector3d<f64>,
}

impl Quaternion {
    /// A quaternion with the given components.
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Quaternion {
            w,
            v: Vector3d::new(x, y, z),
        }
    }

    /// The identity, which represents no rotation at all.
    pub fn identity() -> Self {
        Quaternion::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Check whether each component is within [`EPSILON`] of `other`.
    pub fn approx_eq(&self, other: &Quaternion) -> bool {
        (self.w - other.w).abs() <= EPSILON
            && (self.v.x - other.v.x).abs() <= EPSILON
            && (self.v.y - other.v.y).abs() <= EPSILON
            && (self.v.z - other.v.z).abs() <= EPSILON
    }

    /// The conjugate `(w, -v)`.
    pub fn conjugate(self) -> Self {
        Quaternion::new(self.w, -self.v.x, -self.v.y, -self.v.z)
    }

    /// The four-dimensional dot product.
    pub fn dot(self, other: Self) -> f64 {
        self.w * other.w + self.v.dot(other.v)
    }

    /// The Euclidean norm, which is 1 for a rotation.
    pub fn norm(self) -> f64 {
        (self.w * self.w + self.v.norm2()).sqrt()
    }

    /// Scale to unit norm.
    ///
    /// The zero quaternion has no direction, and normalizing it gives
    /// NaN components.  Callers are responsible for not doing that.
    pub fn normalize(self) -> Self {
        let n = self.norm();
        Quaternion::new(self.w / n, self.v.x / n, self.v.y / n, self.v.z / n)
    }
}

impl PartialEq for Quaternion {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::identity()
    }
}

impl Display for Quaternion {
    /// Writes `(w, x, y, z)` with three decimals unless a precision is
    /// given.
    fn fmt(&self, f: &mut Formatter) -> Result {
        let prec = f.precision().unwrap_or(3);
        write!(
            f,
            "({:.*}, {:.*}, {:.*}, {:.*})",
            prec, self.w, prec, self.v.x, prec, self.v.y, prec, self.v.z
        )
    }
}

/// The Hamilton product.  For rotations, `a * b` applies `b` first and
/// then `a`.
impl std::ops::Mul for Quaternion {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let a = self.w;
        let b = self.v.x;
        let c = self.v.y;
        let d = self.v.z;
        let e = rhs.w;
        let f = rhs.v.x;
        let g = rhs.v.y;
        let h = rhs.v.z;
        Quaternion::new(
            a * e - b * f - c * g - d * h,
            b * e + a * f + c * h - d * g,
            a * g - b * h + c * e + d * f,
            a * h + b * g - c * f + d * e,
        )
    }
}

impl std::ops::MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

#[test]
fn new_sets_components() {
    let q = Quaternion::new(5.1, 4.2, 3.3, 2.4);
    assert_eq!(q.w, 5.1);
    assert_eq!(q.v.x, 4.2);
    assert_eq!(q.v.y, 3.3);
    assert_eq!(q.v.z, 2.4);
}

#[test]
fn identity_is_one() {
    let q = Quaternion::identity();
    assert_eq!((q.w, q.v.x, q.v.y, q.v.z), (1.0, 0.0, 0.0, 0.0));
    assert_eq!(q.norm(), 1.0);
}

#[test]
fn approximate_equality() {
    let q1 = Quaternion::new(5.1, 4.2, 3.3, 2.4);
    let q2 = Quaternion::new(5.1, 4.2, 3.3, 2.4);
    let q3 = Quaternion::new(5.1, 4.2 + EPSILON / 2.0, 3.3, 2.4);
    let q4 = Quaternion::new(9.1, 4.2, 3.3, 2.4);
    let q5 = Quaternion::new(5.1, 4.2, 9.3, 2.4);
    assert!(q1.approx_eq(&q1));
    assert!(q1.approx_eq(&q2));
    assert!(q1.approx_eq(&q3));
    assert!(!q1.approx_eq(&q4));
    assert!(!q1.approx_eq(&q5));
    assert_eq!(q1, q3);
    assert_ne!(q1, q4);
}

#[test]
fn equality_is_not_transitive() {
    let a = Quaternion::new(1.0, 0.0, 0.0, 0.0);
    let b = Quaternion::new(1.0 + 0.75 * EPSILON, 0.0, 0.0, 0.0);
    let c = Quaternion::new(1.0 + 1.5 * EPSILON, 0.0, 0.0, 0.0);
    assert_eq!(a, b);
    assert_eq!(b, c);
    assert_ne!(a, c);
}

#[test]
fn negated_rotation_is_not_equal() {
    let q = Quaternion::new(0.5, 0.5, 0.5, 0.5);
    let minus_q = Quaternion::new(-0.5, -0.5, -0.5, -0.5);
    assert_ne!(q, minus_q);
}

#[test]
fn display_uses_three_decimals() {
    let q = Quaternion::new(0.70710678, 0.0, -0.5, 1.0);
    assert_eq!(format!("{}", q), "(0.707, 0.000, -0.500, 1.000)");
    assert_eq!(format!("{:.1}", q), "(0.7, 0.0, -0.5, 1.0)");
}

#[test]
fn conjugate_negates_vector() {
    let q = Quaternion::new(5.1, 4.2, 3.3, 2.4);
    let c = q.conjugate();
    assert_eq!(c.w, q.w);
    assert_eq!(c.v.x, -q.v.x);
    assert_eq!(c.v.y, -q.v.y);
    assert_eq!(c.v.z, -q.v.z);
    let cc = c.conjugate();
    assert_eq!((cc.w, cc.v.x, cc.v.y, cc.v.z), (q.w, q.v.x, q.v.y, q.v.z));
}

#[test]
fn norm_of_rotation_is_one() {
    let q = Quaternion::new(0.7071, 0.7071, 0.0, 0.0);
    assert!((q.norm() - 1.0).abs() <= EPSILON);
    assert!((Quaternion::identity().norm() - 1.0).abs() <= EPSILON);
}

#[test]
fn normalize_gives_unit_norm() {
    let q = Quaternion::new(4.0, 5.0, 6.0, 7.0);
    assert!((q.norm() - 126.0_f64.sqrt()).abs() < 1e-12);
    let n = q.normalize();
    assert!((n.norm() - 1.0).abs() < 1e-12);
    assert!((n.w * 126.0_f64.sqrt() - 4.0).abs() < 1e-12);
}

#[test]
fn normalize_zero_is_not_finite() {
    let q = Quaternion::new(0.0, 0.0, 0.0, 0.0).normalize();
    assert!(!q.w.is_finite());
    assert!(!q.v.x.is_finite());
}

#[test]
fn multiply_examples() {
    // from the MathWorks quatmultiply documentation
    let q1 = Quaternion::new(1.0, 0.0, 1.0, 0.0);
    let q2 = Quaternion::new(1.0, 0.5, 0.5, 0.75);
    assert_eq!(q1 * q2, Quaternion::new(0.5, 1.25, 1.5, 0.25));
    assert_eq!(q1 * q1, Quaternion::new(0.0, 0.0, 2.0, 0.0));
    let q3 = Quaternion::new(2.0, 1.0, 0.1, 0.1);
    assert_eq!(q1 * q3, Quaternion::new(1.9, 1.1, 2.1, -0.9));
}

#[test]
fn multiply_is_not_commutative() {
    let q1 = Quaternion::new(1.0, 0.0, 1.0, 0.0);
    let q2 = Quaternion::new(1.0, 0.5, 0.5, 0.75);
    assert_ne!(q1 * q2, q2 * q1);
}

#[test]
fn multiply_by_identity() {
    let q = Quaternion::new(5.1, 4.2, 3.3, 2.4);
    assert_eq!(Quaternion::identity() * q, q);
    assert_eq!(q * Quaternion::identity(), q);
}

#[test]
fn multiply_assign_reads_before_writing() {
    let mut q = Quaternion::new(1.0, 0.0, 1.0, 0.0);
    q *= q;
    assert_eq!(q, Quaternion::new(0.0, 0.0, 2.0, 0.0));
}
