//! # Spatial motion vectors
//!
//! A [`Motion`] is an element of se(3), the Lie algebra of SE(3): a linear velocity and
//! an angular velocity, stacked as `[linear; angular]`.
//!
//! Under a frame change `m = (R, p)` a motion transforms with the adjoint action:
//!
//! ```text
//! w' = R w
//! v' = p x w' + R v
//! ```

use glam::DVec3;
use rand::Rng;

use crate::{
    action::{MotionAction, Se3Action},
    transform::RigidTransform,
    Force,
};

/// A spatial motion vector (twist): linear and angular velocity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Motion {
    /// Linear velocity.
    pub linear: DVec3,
    /// Angular velocity.
    pub angular: DVec3,
}

impl Motion {
    /// The zero motion.
    pub const ZERO: Self = Self {
        linear: DVec3::ZERO,
        angular: DVec3::ZERO,
    };

    /// Create a motion from its linear and angular parts.
    #[inline]
    pub const fn new(linear: DVec3, angular: DVec3) -> Self {
        Self { linear, angular }
    }

    /// Pure translation velocity.
    #[inline]
    pub const fn from_linear(linear: DVec3) -> Self {
        Self::new(linear, DVec3::ZERO)
    }

    /// Pure angular velocity.
    #[inline]
    pub const fn from_angular(angular: DVec3) -> Self {
        Self::new(DVec3::ZERO, angular)
    }

    /// Create a motion from `[vx, vy, vz, wx, wy, wz]`.
    #[inline]
    pub fn from_array(arr: [f64; 6]) -> Self {
        Self {
            linear: DVec3::new(arr[0], arr[1], arr[2]),
            angular: DVec3::new(arr[3], arr[4], arr[5]),
        }
    }

    /// Convert to `[vx, vy, vz, wx, wy, wz]`.
    #[inline]
    pub fn to_array(&self) -> [f64; 6] {
        let l = self.linear;
        let a = self.angular;
        [l.x, l.y, l.z, a.x, a.y, a.z]
    }

    /// Motion with every coordinate drawn from `[-1, 1)`.
    pub fn from_random() -> Self {
        let mut rng = rand::rng();
        let mut arr = [0.0; 6];
        arr.iter_mut().for_each(|x| *x = rng.random_range(-1.0..1.0));
        Self::from_array(arr)
    }

    /// Lie bracket `self x other` (spatial cross product on motions).
    #[inline]
    pub fn cross(&self, other: &Motion) -> Motion {
        Motion {
            linear: self.angular.cross(other.linear) + self.linear.cross(other.angular),
            angular: self.angular.cross(other.angular),
        }
    }

    /// Dual bracket `self x* f` (spatial cross product on forces).
    #[inline]
    pub fn cross_force(&self, f: &Force) -> Force {
        Force {
            linear: self.angular.cross(f.linear),
            angular: self.angular.cross(f.angular) + self.linear.cross(f.linear),
        }
    }

    /// Power developed by the force `f` along this motion.
    #[inline]
    pub fn dot(&self, f: &Force) -> f64 {
        f.dot(self)
    }
}

impl Se3Action for Motion {
    #[inline]
    fn se3_action<T: RigidTransform + ?Sized>(&self, m: &T) -> Self {
        let r = m.rotation();
        let angular = r * self.angular;
        let linear = m.translation().cross(angular) + r * self.linear;
        Self { linear, angular }
    }

    #[inline]
    fn se3_action_inverse<T: RigidTransform + ?Sized>(&self, m: &T) -> Self {
        let r_t = m.rotation().transpose();
        // both halves of the input are consumed before the output is formed
        let t = self.linear - m.translation().cross(self.angular);
        Self {
            linear: r_t * t,
            angular: r_t * self.angular,
        }
    }
}

impl MotionAction for Motion {
    #[inline]
    fn motion_action(&self, v: &Motion) -> Self {
        v.cross(self)
    }
}

impl std::ops::Add for Motion {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.linear + rhs.linear, self.angular + rhs.angular)
    }
}

impl std::ops::Sub for Motion {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.linear - rhs.linear, self.angular - rhs.angular)
    }
}

impl std::ops::Neg for Motion {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self::new(-self.linear, -self.angular)
    }
}

impl std::ops::Mul<f64> for Motion {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Self::new(self.linear * rhs, self.angular * rhs)
    }
}

impl From<[f64; 6]> for Motion {
    #[inline]
    fn from(arr: [f64; 6]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Motion> for [f64; 6] {
    #[inline]
    fn from(v: Motion) -> Self {
        v.to_array()
    }
}

#[cfg(feature = "approx")]
impl approx::AbsDiffEq for Motion {
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
impl approx::RelativeEq for Motion {
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

    fn assert_motion_eq(a: &Motion, b: &Motion, epsilon: f64) {
        let (a, b) = (a.to_array(), b.to_array());
        for i in 0..6 {
            assert_relative_eq!(a[i], b[i], epsilon = epsilon);
        }
    }

    #[test]
    fn test_from_array() {
        let v = Motion::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(v.linear, DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(v.angular, DVec3::new(4.0, 5.0, 6.0));
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_se3_action_offset_spin() {
        let m = SE3F64::new(glam::DMat3::IDENTITY, DVec3::new(1.0, 0.0, 0.0));
        let v = Motion::from_angular(DVec3::Z);
        let v_j = v.se3_action(&m);
        assert_motion_eq(
            &v_j,
            &Motion::new(DVec3::new(0.0, -1.0, 0.0), DVec3::new(0.0, 0.0, 1.0)),
            EPSILON,
        );
    }

    #[test]
    fn test_se3_action_matches_matrix() {
        let m = SE3F64::from_random();
        let v = Motion::from_random();
        let ad = m.action_matrix();
        let arr = v.to_array();
        let expected: Vec<f64> = ad
            .iter()
            .map(|row| row.iter().zip(arr.iter()).map(|(a, b)| a * b).sum())
            .collect();
        let v_j = v.se3_action(&m).to_array();
        for i in 0..6 {
            assert_relative_eq!(v_j[i], expected[i], epsilon = EPSILON);
        }
    }

    #[test]
    fn test_se3_action_inverse_matches_inverse_transform() {
        for _ in 0..10 {
            let m = SE3F64::from_random();
            let v = Motion::from_random();
            assert_motion_eq(
                &v.se3_action_inverse(&m),
                &v.se3_action(&m.inverse()),
                EPSILON,
            );
        }
    }

    #[test]
    fn test_bracket_antisymmetric() {
        let v = Motion::from_random();
        let w = Motion::from_random();
        assert_motion_eq(&v.cross(&v), &Motion::ZERO, EPSILON);
        assert_motion_eq(&v.cross(&w), &(-w.cross(&v)), EPSILON);
        assert_motion_eq(&w.motion_action(&v), &v.cross(&w), EPSILON);
    }

    #[test]
    fn test_bracket_jacobi() {
        let a = Motion::from_random();
        let b = Motion::from_random();
        let c = Motion::from_random();
        let sum = a.cross(&b.cross(&c)) + b.cross(&c.cross(&a)) + c.cross(&a.cross(&b));
        assert_motion_eq(&sum, &Motion::ZERO, EPSILON);
    }

    #[test]
    fn test_ops() {
        let a = Motion::from_array([1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b = Motion::from_array([6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!((a + b).to_array(), [7.0; 6]);
        assert_eq!(a - a, Motion::ZERO);
        assert_eq!((a * 2.0).to_array(), [2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
        assert_eq!(-(-a), a);
    }
}
