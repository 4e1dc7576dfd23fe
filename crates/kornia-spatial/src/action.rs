use crate::{transform::RigidTransform, Motion};

/// Action of a rigid transform on a spatial vector.
///
/// For motions this is the adjoint action `Ad_m`, for forces the coadjoint action
/// `Ad*_m`. Both are chosen so that the power pairing between a force and a motion is
/// preserved when both are moved by the same transform.
pub trait Se3Action: Sized {
    /// Express `self`, given in frame `i`, in frame `j`, where `m` maps `i` to `j`.
    fn se3_action<T: RigidTransform + ?Sized>(&self, m: &T) -> Self;

    /// Action of `m^-1`, computed without inverting `m`.
    fn se3_action_inverse<T: RigidTransform + ?Sized>(&self, m: &T) -> Self;
}

/// Infinitesimal action of a spatial velocity on a spatial vector.
///
/// Returns the derivative of `self` under the flow of `v`: the Lie bracket `v x self`
/// for motions and its dual `v x* self` for forces.
pub trait MotionAction: Sized {
    /// Derivative of `self` under the velocity `v`.
    fn motion_action(&self, v: &Motion) -> Self;
}
