//! Serial-chain forward kinematics.
//!
//! A [`SerialChainModel`] describes a serial arm as an ordered list of
//! [`Link`]s.  Each link carries a fixed rigid-body transform from the
//! previous joint frame to its own joint frame, plus the unit axis its
//! revolute joint rotates about.  Evaluating the model composes, link by
//! link, the fixed offset followed by the joint rotation; the accumulated
//! transform at the end of the chain is the end-effector pose.
//!
//! # Example
//!
//! ```rust
//! use armlink_kinematics::chain::SerialChainModel;
//! use armlink_kinematics::model::KinematicModel;
//! use armlink_types::{JointVector, Vec3};
//!
//! let model = SerialChainModel::builder()
//!     .revolute(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 1.0))
//!     .build();
//!
//! let pose = model.transform(&JointVector::new(vec![0.0])).unwrap();
//! assert!((pose.position.x - 1.0).abs() < 1e-9);
//! ```

use armlink_types::{ArmError, JointVector, Pose, Quaternion, Vec3};
use tracing::trace;

use crate::model::KinematicModel;

// ────────────────────────────────────────────────────────────────────────────
// Rigid transform
// ────────────────────────────────────────────────────────────────────────────

/// A rigid-body 3-D transform: translation followed by rotation.
///
/// Represents the pose of frame B relative to frame A: to convert a point
/// expressed in frame B into frame A, rotate it by `rotation` then add
/// `translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    pub rotation: Quaternion,
}

impl Transform {
    /// Create a transform from a translation and rotation.
    pub fn new(translation: Vec3, rotation: Quaternion) -> Self {
        Self {
            translation,
            rotation,
        }
    }

    /// The identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self::new(Vec3::zero(), Quaternion::identity())
    }

    /// A pure rotation.
    pub fn rotation(rotation: Quaternion) -> Self {
        Self::new(Vec3::zero(), rotation)
    }

    /// Compose two transforms: `self` applied first, then `other`.
    ///
    /// If `self` = T_A_B and `other` = T_B_C, the result is T_A_C.
    pub fn compose(self, other: Self) -> Self {
        let translated = self.translation.add(self.rotation.rotate(other.translation));
        let rotated = self.rotation.mul(other.rotation);
        Self::new(translated, rotated)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Serial chain
// ────────────────────────────────────────────────────────────────────────────

/// One link of a serial chain: the fixed transform from the previous joint
/// frame to this joint's frame, and the unit axis the joint rotates about
/// (expressed in the joint's local frame).
#[derive(Debug, Clone, Copy)]
pub struct Link {
    offset: Transform,
    axis: Vec3,
}

/// A serial revolute-joint arm model.
///
/// One joint value per link; the degree-of-freedom count equals the link
/// count.  With every joint at zero the end-effector orientation is the
/// product of the fixed link rotations (identity when every offset is a pure
/// translation).
pub struct SerialChainModel {
    links: Vec<Link>,
}

impl SerialChainModel {
    /// Start building a chain.
    pub fn builder() -> SerialChainBuilder {
        SerialChainBuilder { links: Vec::new() }
    }

    /// A generic six-axis arm used by the simulator and tests: unit-length
    /// links along the base Z and reach X directions with the conventional
    /// Z-Y-Y-X-Y-X axis layout.  Maps the zero joint vector to the identity
    /// orientation.
    pub fn six_axis() -> Self {
        let z = Vec3::new(0.0, 0.0, 1.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let x = Vec3::new(1.0, 0.0, 0.0);
        Self::builder()
            .revolute(Vec3::new(0.0, 0.0, 0.4), z)
            .revolute(Vec3::new(0.0, 0.0, 0.3), y)
            .revolute(Vec3::new(0.0, 0.0, 0.5), y)
            .revolute(Vec3::new(0.4, 0.0, 0.0), x)
            .revolute(Vec3::new(0.3, 0.0, 0.0), y)
            .revolute(Vec3::new(0.1, 0.0, 0.0), x)
            .build()
    }
}

impl KinematicModel for SerialChainModel {
    fn dof(&self) -> usize {
        self.links.len()
    }

    fn transform(&self, joints: &JointVector) -> Result<Pose, ArmError> {
        if joints.len() != self.dof() {
            return Err(ArmError::JointCount {
                expected: self.dof(),
                actual: joints.len(),
            });
        }

        let mut acc = Transform::identity();
        for (link, angle) in self.links.iter().zip(joints.iter()) {
            acc = acc
                .compose(link.offset)
                .compose(Transform::rotation(Quaternion::from_axis_angle(
                    link.axis, *angle,
                )));
        }
        trace!(links = self.links.len(), "serial chain evaluated");

        Ok(Pose::new(acc.translation, acc.rotation))
    }
}

/// Builder for [`SerialChainModel`].
pub struct SerialChainBuilder {
    links: Vec<Link>,
}

impl SerialChainBuilder {
    /// Append a revolute joint at `offset` from the previous joint frame,
    /// rotating about the unit `axis` in its local frame.
    pub fn revolute(mut self, offset: Vec3, axis: Vec3) -> Self {
        self.links.push(Link {
            offset: Transform::new(offset, Quaternion::identity()),
            axis,
        });
        self
    }

    /// Finish the chain.
    pub fn build(self) -> SerialChainModel {
        SerialChainModel { links: self.links }
    }
}
