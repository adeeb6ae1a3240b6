//! Typed decoding of untyped command maps.
//!
//! The command channel carries a JSON object mapping operation names to
//! arbitrary payloads.  [`Request::from_command`] decodes that map once at
//! the boundary; everything past this point operates on strongly-typed
//! values only.

use armlink_types::{ArmError, JointVector};
use serde_json::{Map, Value};

/// Key of the only operation this adapter recognizes.
pub const TRANSFORM_KEY: &str = "transform";

/// A decoded command request.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    /// Evaluate forward kinematics for the given joint vector.
    Transform(JointVector),
}

impl Request {
    /// Decode a raw command map.
    ///
    /// The `"transform"` payload must be an array whose every element is a
    /// number; elements are converted in order.  A request containing no
    /// recognized operation key fails with [`ArmError::NoValidCommand`] –
    /// unknown keys are never silently accepted.
    ///
    /// # Errors
    ///
    /// [`ArmError::InvalidPayload`] when the payload is not an array,
    /// [`ArmError::NotANumber`] naming the first offending index, or
    /// [`ArmError::NoValidCommand`] when no recognized key is present.
    pub fn from_command(cmd: &Map<String, Value>) -> Result<Self, ArmError> {
        if let Some(value) = cmd.get(TRANSFORM_KEY) {
            let entries = value.as_array().ok_or_else(|| {
                ArmError::InvalidPayload(format!(
                    "'{TRANSFORM_KEY}' payload must be an array of joint positions"
                ))
            })?;

            let mut joints = Vec::with_capacity(entries.len());
            for (index, entry) in entries.iter().enumerate() {
                let value = entry
                    .as_f64()
                    .ok_or(ArmError::NotANumber { index })?;
                joints.push(value);
            }
            return Ok(Request::Transform(JointVector::new(joints)));
        }

        Err(ArmError::NoValidCommand)
    }
}
