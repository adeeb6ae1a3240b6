//! [`SimArm`] – in-process arm for CI, demos, and tests.
//!
//! Implements [`Arm`] on top of a [`SerialChainModel`] so the full adapter
//! stack runs in headless tests and CI pipelines without a physical robot.

use std::sync::Arc;

use armlink_kinematics::chain::SerialChainModel;
use armlink_kinematics::model::KinematicModel;
use armlink_types::ArmError;

use crate::arm::Arm;

/// A simulated arm backed by a serial-chain kinematic model.  The model
/// fetch always succeeds.
pub struct SimArm {
    name: String,
    model: Arc<SerialChainModel>,
}

impl SimArm {
    /// A six-axis simulated arm with the generic
    /// [`SerialChainModel::six_axis`] geometry.
    pub fn six_axis(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            model: Arc::new(SerialChainModel::six_axis()),
        })
    }
}

impl Arm for SimArm {
    fn name(&self) -> &str {
        &self.name
    }

    fn kinematics(&self) -> Result<Arc<dyn KinematicModel>, ArmError> {
        Ok(self.model.clone() as Arc<dyn KinematicModel>)
    }
}
