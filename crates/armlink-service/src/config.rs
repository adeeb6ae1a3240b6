//! Construction configuration for the arm adapter.

use armlink_types::ArmError;
use serde::{Deserialize, Serialize};

/// Configuration record binding the adapter to one wrapped arm.
///
/// The only required field is the name of the arm resource to wrap; the host
/// resolves that name through [`Dependencies`][crate::deps::Dependencies]
/// before construction proceeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Name of the arm resource this adapter wraps.
    pub arm: String,
}

impl Config {
    /// Validate the configuration and return the resource names this
    /// component depends on, so the host can resolve and inject them.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::FieldRequired`] when `arm` is empty.  Validation
    /// runs before any dependency resolution is attempted.
    pub fn validate(&self) -> Result<Vec<String>, ArmError> {
        if self.arm.is_empty() {
            return Err(ArmError::FieldRequired {
                field: "arm".to_string(),
            });
        }
        Ok(vec![self.arm.clone()])
    }
}
