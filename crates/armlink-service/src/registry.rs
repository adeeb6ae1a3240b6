//! [`ModelRegistry`] – model-name → constructor lookup table.
//!
//! Host frameworks discover components by a namespaced model triplet and
//! call the registered constructor with a validated config and the resolved
//! dependency table.  Registration happens once at process start; the table
//! is plain data, so hosts that need their own wiring can build one from
//! scratch instead of using [`ModelRegistry::with_builtin`].

use std::collections::HashMap;

use armlink_types::ArmError;

use crate::config::Config;
use crate::deps::Dependencies;
use crate::service::ArmService;

/// Model triplet the arm adapter registers under.
pub const ARM_MODEL: &str = "armlink:service:arm";

/// Constructor signature every registered model must satisfy.
pub type Constructor = fn(&Config, &Dependencies) -> Result<ArmService, ArmError>;

/// Lookup table from model triplet to component constructor.
#[derive(Default)]
pub struct ModelRegistry {
    constructors: HashMap<String, Constructor>,
}

impl ModelRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry pre-populated with every model this crate ships:
    /// currently just [`ARM_MODEL`] → [`ArmService::new`].
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry.register(ARM_MODEL, ArmService::new);
        registry
    }

    /// Register a constructor.  Any previously registered constructor for
    /// the same model is replaced.
    pub fn register(&mut self, model: &str, constructor: Constructor) {
        self.constructors.insert(model.to_string(), constructor);
    }

    /// Construct a component of the given model.
    ///
    /// # Errors
    ///
    /// Returns [`ArmError::ModelNotRegistered`] for an unknown model, or
    /// whatever the constructor itself fails with.
    pub fn construct(
        &self,
        model: &str,
        cfg: &Config,
        deps: &Dependencies,
    ) -> Result<ArmService, ArmError> {
        let constructor =
            self.constructors
                .get(model)
                .ok_or_else(|| ArmError::ModelNotRegistered {
                    model: model.to_string(),
                })?;
        constructor(cfg, deps)
    }
}
