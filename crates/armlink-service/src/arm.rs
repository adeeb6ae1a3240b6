//! The [`Arm`] trait – the wrapped device as the adapter sees it.
//!
//! The adapter needs exactly one capability from the device it wraps: hand
//! over a forward-kinematics model once at construction time.  Drivers,
//! simulators, and test doubles implement this trait and register themselves
//! with [`Dependencies`][crate::deps::Dependencies].

use std::sync::Arc;

use armlink_kinematics::model::KinematicModel;
use armlink_types::ArmError;

/// A wrapped robotic-arm resource.
///
/// Every arm has a stable string name so the host's dependency table can
/// route the adapter's declared dependency to the correct device.
pub trait Arm: Send + Sync {
    /// Stable resource name, e.g. `"ur5-left"` or `"sim-arm"`.
    fn name(&self) -> &str;

    /// Hand over this arm's forward-kinematics model.
    ///
    /// Called once during adapter construction; the adapter holds the
    /// returned model read-only for its whole lifetime.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::Kinematics`] when the device cannot produce a
    /// model (e.g. its frame description is unavailable).
    fn kinematics(&self) -> Result<Arc<dyn KinematicModel>, ArmError>;
}

impl std::fmt::Debug for dyn Arm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Arm").field("name", &self.name()).finish()
    }
}
