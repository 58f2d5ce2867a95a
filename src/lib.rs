//! Quaternions for 3D rotations.
//!
//! The core is the [`Quaternion`](quaternion::Quaternion) value type and
//! its algebra, the conversions in [`rotation`] and spherical linear
//! interpolation in [`slerp`].  The [`walk`] and [`checkpoint`] modules
//! hold the pieces shared by the demo binaries.

#![cfg_attr(feature = "strict", deny(warnings))]
#![deny(missing_docs)]

#[macro_use]
extern crate serde_derive;

pub mod checkpoint;
pub mod quaternion;
pub mod rotation;
pub mod slerp;
pub mod walk;

pub use crate::quaternion::{Quaternion, EPSILON};
pub use crate::slerp::slerp;
