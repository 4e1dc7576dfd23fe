//! # Spatial force vectors
//!
//! A [`Force`] is an element of se(3)*, the dual of the motion space: a linear force and
//! a torque, stacked as `[linear; angular]`.
//!
//! Forces transform with the coadjoint action, the dual of the motion action:
//!
//! ```text
//! f' = R f
//! n' = p x f' + R n
//! ```
//!
//! so that the power `f . v + n . w` is the same in every frame.

use glam::DVec3;
use rand::Rng;

use crate::{
    action::{MotionAction, Se3Action},
    transform::RigidTransform,
    Motion,
};

/// A spatial force vector (wrench): linear force and torque.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Force {
    /// Linear force.
    pub linear: DVec3,
    /// Torque.
    pub angular: DVec3,
}

impl Force {
    /// The zero force.
    pub const ZERO: Self = Self {
        linear: DVec3::ZERO,
        angular: DVec3::ZERO,
    };

    /// Create a force from its linear and angular parts.
    #[inline]
    pub const fn new(linear: DVec3, angular: DVec3) -> Self {
        Self { linear, angular }
    }

    /// Pure linear force.
    #[inline]
    pub const fn from_linear(linear: DVec3) -> Self {
        Self::new(linear, DVec3::ZERO)
    }

    /// Pure torque.
    #[inline]
    pub const fn from_angular(angular: DVec3) -> Self {
        Self::new(DVec3::ZERO, angular)
    }

    /// Create a force from `[fx, fy, fz, nx, ny, nz]`.
    #[inline]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self {
            linear: DVec3::new(arr[0], arr[1], arr[2]),
            angular: DVec3::new(arr[3], arr[4], arr[5]),
        }
    }

    /// Convert to `[fx, fy, fz, nx, ny, nz]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 6] {
        let l = self.linear;
        let a = self.angular;
        [l.x, l.y, l.z, a.x, a.y, a.z]
    }

    /// Force with every coordinate drawn from `[-1, 1)`.
    pub fn from_random() -> Self {
        let mut rng = rand::rng();
        let mut arr = [0.0; 6];
        arr.iter_mut().for_each(|x| *x = rng.random_range(-1.0..1.0));
        Self::from_array(arr)
    }

    /// Power pairing with a motion: `f . v + n . w`.
    #[inline]
    pub fn dot(&self, v: &Motion) -> f64 {
        self.linear.dot(v.linear) + self.angular.dot(v.angular)
    }
}

impl Se3Action for Force {
    #[inline]
    fn se3_action<T: RigidTransform + ?Sized>(&self, m: &T) -> Self {
        let r = m.rotation();
        let linear = r * self.linear;
        let angular = m.translation().cross(linear) + r * self.angular;
        Self { linear, angular }
    }

    #[inline]
    fn se3_action_inverse<T: RigidTransform + ?Sized>(&self, m: &T) -> Self {
        let r_t = m.rotation().transpose();
        let s = self.angular - m.translation().cross(self.linear);
        Self {
            linear: r_t * self.linear,
            angular: r_t * s,
        }
    }
}

impl MotionAction for Force {
    #[inline]
    fn motion_action(&self, v: &Motion) -> Self {
        v.cross_force(self)
    }
}

impl std::ops::Add for Force {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.linear + rhs.linear, self.angular + rhs.angular)
    }
}

impl std::ops::Sub for Force {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.linear - rhs.linear, self.angular - rhs.angular)
    }
}

impl std::ops::Neg for Force {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.linear, -self.angular)
    }
}

impl std::ops::Mul<f64> for Force {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.linear * rhs, self.angular * rhs)
    }
}

impl From<[f64; 6]> for Force {
    #[inline]
    fn from(arr: [f64; 6]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Force> for [f64; 6] {
    #[inline]
    fn from(f: Force) -> Self {
        f.to_array()
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Force {
    type Epsilon = f64;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        <f64 as approx::AbsDiffEq>::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(a, b, epsilon))
    }
}

#[cfg(feature = "approx")]
impl approx::RelativeEq for Force {
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        <f64 as approx::RelativeEq>::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.to_array()
            .iter()
            .zip(other.to_array().iter())
            .all(|(a, b)| approx::RelativeEq::relative_eq(a, b, epsilon, max_relative))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SE3F64;
    use approx::assert_relative_eq;

    const EPSILON: f64 = 1e-12;

    fn assert_force_eq(a: &Force, b: &Force, epsilon: f64) {
        let (a, b) = (a.to_array(), b.to_array());
        for i in 0..6 {
            assert_relative_eq!(a[i], b[i], epsilon = epsilon);
        }
    }

    #[test]
    fn test_lever_arm() {
        // a unit force along y applied one meter along x yields a unit torque about z
        let m = SE3F64::new(glam::DMat3::IDENTITY, DVec3::X);
        let f = Force::from_linear(DVec3::Y);
        assert_force_eq(
            &f.se3_action(&m),
            &Force::new(DVec3::Y, DVec3::Z),
            EPSILON,
        );
    }

    #[test]
    fn test_se3_action_matches_matrix() {
        let m = SE3F64::from_random();
        let f = Force::from_random();
        let ad_star = m.dual_action_matrix();
        let arr = f.to_array();
        let f_j = f.se3_action(&m).to_array();
        for i in 0..6 {
            let expected: f64 = (0..6).map(|j| ad_star[i][j] * arr[j]).sum();
            assert_relative_eq!(f_j[i], expected, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_se3_action_inverse_matches_inverse_transform() {
        for _ in 0..10 {
            let m = SE3F64::from_random();
            let f = Force::from_random();
            assert_force_eq(
                &f.se3_action_inverse(&m),
                &f.se3_action(&m.inverse()),
                EPSILON,
            );
        }
    }

    #[test]
    fn test_power_invariance() {
        for _ in 0..10 {
            let m = SE3F64::from_random();
            let f = Force::from_random();
            let v = Motion::from_random();
            let power = f.dot(&v);
            assert_relative_eq!(
                f.se3_action(&m).dot(&v.se3_action(&m)),
                power,
                epsilon = EPSILON
            );
            assert_relative_eq!(
                f.se3_action_inverse(&m).dot(&v.se3_action_inverse(&m)),
                power,
                epsilon = EPSILON
            );
            assert_relative_eq!(v.dot(&f), power, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_dual_bracket() {
        // <v x* f, w> = -<f, v x w>
        let v = Motion::from_random();
        let w = Motion::from_random();
        let f = Force::from_random();
        assert_relative_eq!(
            f.motion_action(&v).dot(&w),
            -f.dot(&w.motion_action(&v)),
            epsilon = EPSILON
        );
    }

    #[test]
    fn test_from_array() {
        let f: Force = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0].into();
        assert_eq!(f.linear, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(f.angular, DVec3::new(4.0, 5.0, 6.0));
        let arr: [f64; 6] = f.into();
        assert_eq!(arr, [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
