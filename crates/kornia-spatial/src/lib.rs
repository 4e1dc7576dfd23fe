#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! # Kornia Spatial
//!
//! This crate implements the elementary actions of spatial (6D) vector algebra that sit
//! underneath recursive rigid body dynamics algorithms: moving motions (twists) and
//! forces (wrenches) between frames, and differentiating them along a velocity.
//!
//! | Operation | Motions | Forces |
//! |-----------|---------|--------|
//! | rigid transform `m` | adjoint `Ad_m` | coadjoint `Ad*_m` |
//! | inverse transform `m^-1` | `Ad_m^-1` | `Ad*_m^-1` |
//! | velocity `v` | bracket `v x X` | dual bracket `v x* X` |
//!
//! Single vectors implement [`Se3Action`] and [`MotionAction`]. Sets of vectors (the
//! columns of a Jacobian, a motion subspace, ...) go through [`motion_set`] and
//! [`force_set`].
//!
//! Spatial vectors are stored `[linear; angular]`.
//!
//! ## Example
//!
//! ```rust
//! use glam::{DMat3, DVec3};
//! use kornia_spatial::{motion_set, Motion, SE3F64};
//!
//! // frame i sits one meter along x of frame j
//! let j_m_i = SE3F64::new(DMat3::IDENTITY, DVec3::X);
//!
//! // a unit spin about z, expressed in frame i
//! let jacobian_i = [Motion::from_angular(DVec3::Z), Motion::from_linear(DVec3::Y)];
//! let mut jacobian_j = [Motion::ZERO; 2];
//! motion_set::se3_action(&j_m_i, &jacobian_i, &mut jacobian_j);
//!
//! assert_eq!(jacobian_j[0].linear, DVec3::new(0.0, -1.0, 0.0));
//! assert_eq!(jacobian_j[0].angular, DVec3::Z);
//! ```

/// Traits for the actions on single spatial vectors.
pub mod action;

/// Error types for the set actions.
pub mod error;

/// Spatial force vectors.
pub mod force;

/// Spatial motion vectors.
pub mod motion;

/// Actions on sets of spatial vectors.
pub mod set;

/// Rigid transforms consumed by the actions.
pub mod transform;

pub use action::{MotionAction, Se3Action};
pub use error::SpatialError;
pub use force::Force;
pub use motion::Motion;
pub use set::{force_set, motion_set, SpatialSet};
pub use transform::{RigidTransform, SE3F64};
