//! # Rigid transforms acting on spatial vectors
//!
//! The spatial actions only need two things from a rigid transform `m = (R, p)`:
//! the rotation matrix `R` and the translation `p`. [`RigidTransform`] is that
//! interface. Any SE(3) representation can plug into the actions by implementing it;
//! [`SE3F64`] and [`glam::DAffine3`] do so out of the box.
//!
//! The convention is the usual frame change: if `m` maps frame `i` to frame `j`,
//! then `R` is the orientation of `i` expressed in `j` and `p` is the origin of `i`
//! expressed in `j`.

use glam::{DAffine3, DMat3, DQuat, DVec3};
use rand::Rng;

/// The rotation and translation of a rigid transform, as consumed by the spatial actions.
///
/// The rotation is expected to be orthonormal. This is not validated.
pub trait RigidTransform {
    /// The 3x3 rotation matrix `R`.
    fn rotation(&self) -> DMat3;

    /// The translation vector `p`.
    fn translation(&self) -> DVec3;
}

/// Skew-symmetric matrix `[v]x` such that `[v]x * w == v.cross(w)`.
#[inline]
pub fn skew(v: DVec3) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(0.0, v.z, -v.y),
        DVec3::new(-v.z, 0.0, v.x),
        DVec3::new(v.y, -v.x, 0.0),
    )
}

/// A 3D rigid body transform stored as a rotation matrix and a translation (double precision).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SE3F64 {
    /// Rotation matrix.
    pub r: DMat3,
    /// Translation vector.
    pub t: DVec3,
}

impl SE3F64 {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        r: DMat3::IDENTITY,
        t: DVec3::ZERO,
    };

    /// Create a new transform from a rotation matrix and a translation.
    /// NOTE: the rotation should be orthonormal
    #[inline]
    pub fn new(rotation: DMat3, translation: DVec3) -> Self {
        Self {
            r: rotation,
            t: translation,
        }
    }

    /// Create a new transform from a quaternion and a translation.
    /// NOTE: quaternion should be normalized
    pub fn from_quaternion(quat: DQuat, translation: DVec3) -> Self {
        Self::new(DMat3::from_quat(quat), translation)
    }

    /// Create a new transform rotating `angle` radians about `axis`, then translating.
    pub fn from_axis_angle(axis: DVec3, angle: f64, translation: DVec3) -> Self {
        Self::from_quaternion(DQuat::from_axis_angle(axis.normalize(), angle), translation)
    }

    /// Uniformly random rotation with a translation drawn from `[-1, 1)^3`.
    pub fn from_random() -> Self {
        let mut rng = rand::rng();

        let r1: f64 = rng.random();
        let r2: f64 = rng.random();
        let r3: f64 = rng.random();

        // Shoemake's method for uniform unit quaternions
        let one_minus_r1_sqrt = (1.0 - r1).sqrt();
        let r1_sqrt = r1.sqrt();

        let w = one_minus_r1_sqrt * (2.0 * std::f64::consts::PI * r2).cos();
        let x = one_minus_r1_sqrt * (2.0 * std::f64::consts::PI * r2).sin();
        let y = r1_sqrt * (2.0 * std::f64::consts::PI * r3).cos();
        let z = r1_sqrt * (2.0 * std::f64::consts::PI * r3).sin();

        let translation = DVec3::new(
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
            rng.random_range(-1.0..1.0),
        );

        Self::from_quaternion(DQuat::from_xyzw(x, y, z, w).normalize(), translation)
    }

    /// The inverse transform `(R^T, -R^T p)`.
    pub fn inverse(&self) -> Self {
        let r_inv = self.r.transpose();
        Self {
            r: r_inv,
            t: -(r_inv * self.t),
        }
    }

    /// The 6x6 motion action matrix (adjoint), row-major, in `[linear; angular]` order.
    ///
    /// ```text
    /// | R   [p]x R |
    /// | 0   R      |
    /// ```
    pub fn action_matrix(&self) -> [[f64; 6]; 6] {
        let px_r = skew(self.t) * self.r;
        blocks_to_array(&self.r, &px_r, &DMat3::ZERO, &self.r)
    }

    /// The 6x6 force action matrix (coadjoint), row-major, in `[linear; angular]` order.
    ///
    /// ```text
    /// | R        0 |
    /// | [p]x R   R |
    /// ```
    pub fn dual_action_matrix(&self) -> [[f64; 6]; 6] {
        let px_r = skew(self.t) * self.r;
        blocks_to_array(&self.r, &DMat3::ZERO, &px_r, &self.r)
    }
}

fn blocks_to_array(
    upper_left: &DMat3,
    upper_right: &DMat3,
    lower_left: &DMat3,
    lower_right: &DMat3,
) -> [[f64; 6]; 6] {
    let mut out = [[0.0; 6]; 6];
    for i in 0..3 {
        for j in 0..3 {
            // glam is column-major: col(j)[i] is row i, column j
            out[i][j] = upper_left.col(j)[i];
            out[i][j + 3] = upper_right.col(j)[i];
            out[i + 3][j] = lower_left.col(j)[i];
            out[i + 3][j + 3] = lower_right.col(j)[i];
        }
    }
    out
}

impl RigidTransform for SE3F64 {
    #[inline]
    fn rotation(&self) -> DMat3 {
        self.r
    }

    #[inline]
    fn translation(&self) -> DVec3 {
        self.t
    }
}

impl RigidTransform for DAffine3 {
    #[inline]
    fn rotation(&self) -> DMat3 {
        self.matrix3
    }

    #[inline]
    fn translation(&self) -> DVec3 {
        self.translation
    }
}

impl std::ops::Mul<SE3F64> for SE3F64 {
    type Output = SE3F64;

    #[inline]
    fn mul(self, rhs: SE3F64) -> Self::Output {
        Self {
            r: self.r * rhs.r,
            t: self.t + self.r * rhs.t,
        }
    }
}

impl std::ops::Mul<DVec3> for SE3F64 {
    type Output = DVec3;

    #[inline]
    fn mul(self, rhs: DVec3) -> Self::Output {
        self.r * rhs + self.t
    }
}
