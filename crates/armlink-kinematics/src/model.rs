//! The [`KinematicModel`] trait.
//!
//! The adapter never knows which device it wraps; it only holds a model
//! fetched from the wrapped arm at construction time and calls
//! [`KinematicModel::transform`] with validated joint vectors.  Models can be
//! swapped (hardware-supplied, simulated, mocked) without touching the
//! dispatch logic.

use armlink_types::{ArmError, JointVector, Pose};

/// A forward-kinematics model: joint-position vector → end-effector pose.
///
/// # Contract
///
/// * `dof` – the number of joint values the model expects.
/// * `transform` – deterministic for a fixed model: the same input always
///   yields the same [`Pose`].  Must reject a vector whose length differs
///   from `dof` with [`ArmError::JointCount`].
///
/// Implementations must be `Send + Sync`; the adapter shares one model
/// reference across concurrent callers and never mutates it after
/// construction.
pub trait KinematicModel: Send + Sync {
    /// Degree-of-freedom count this model expects.
    fn dof(&self) -> usize;

    /// Evaluate forward kinematics for the given joint vector.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::JointCount`] when the vector length does not match
    /// [`dof`][Self::dof], or [`ArmError::Kinematics`] when the model rejects
    /// the configuration for any other reason.
    fn transform(&self, joints: &JointVector) -> Result<Pose, ArmError>;
}
