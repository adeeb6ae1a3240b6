//! `armlink-kinematics` – forward-kinematics evaluation.
//!
//! Turns a joint-position vector into the spatial pose of an end effector.
//!
//! # Modules
//!
//! - [`model`] – [`KinematicModel`][model::KinematicModel]: the trait through
//!   which the adapter evaluates forward kinematics, whatever the underlying
//!   device supplies.
//! - [`chain`] – [`SerialChainModel`][chain::SerialChainModel]: a concrete
//!   model for serial revolute-joint arms, built from chained rigid-body
//!   transforms.

pub mod chain;
pub mod model;
