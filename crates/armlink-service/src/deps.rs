//! [`Dependencies`] – host-supplied resource table.
//!
//! The host resolves the names a component declares in
//! [`Config::validate`][crate::config::Config::validate] and hands the
//! resolved resources to the constructor through this table.  Resolution is
//! by stable resource name; a missing entry is a construction-time error,
//! never a silent fallback.

use std::collections::HashMap;
use std::sync::Arc;

use armlink_types::ArmError;

use crate::arm::Arm;

/// Resolved resources available to a component constructor.
#[derive(Default)]
pub struct Dependencies {
    arms: HashMap<String, Arc<dyn Arm>>,
}

impl Dependencies {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an arm resource under its own name.  Any previously
    /// registered arm with the same name is replaced.
    pub fn insert_arm(&mut self, arm: Arc<dyn Arm>) {
        self.arms.insert(arm.name().to_string(), arm);
    }

    /// Look up an arm by resource name.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::MissingDependency`] when no arm with that name
    /// was registered.
    pub fn arm(&self, name: &str) -> Result<Arc<dyn Arm>, ArmError> {
        self.arms
            .get(name)
            .cloned()
            .ok_or_else(|| ArmError::MissingDependency {
                name: name.to_string(),
            })
    }
}
