//! `armlink-service` – the arm adapter component.
//!
//! Wraps an underlying robotic-arm device behind the [`Arm`][arm::Arm] trait
//! and exposes its forward kinematics through a generic, map-shaped command
//! channel.  Everything else an arm can do (motion, joint queries, stop,
//! geometry) is deliberately answered "unimplemented" – this component is a
//! kinematics adapter, not a driver.
//!
//! # Modules
//!
//! - [`config`] – construction configuration and dependency declaration.
//! - [`arm`] – the [`Arm`][arm::Arm] trait the wrapped device implements.
//! - [`deps`] – [`Dependencies`][deps::Dependencies]: host-supplied resource
//!   lookup the component resolves its arm from.
//! - [`request`] – typed decoding of untyped command maps.
//! - [`service`] – [`ArmService`][service::ArmService]: the dispatcher.
//! - [`registry`] – [`ModelRegistry`][registry::ModelRegistry]: model-name →
//!   constructor lookup table for host wiring.
//! - [`sim`] – [`SimArm`][sim::SimArm]: in-process arm for CI and demos.

pub mod arm;
pub mod config;
pub mod deps;
pub mod registry;
pub mod request;
pub mod service;
pub mod sim;

pub use arm::Arm;
pub use config::Config;
pub use deps::Dependencies;
pub use registry::{ARM_MODEL, ModelRegistry};
pub use service::{ArmService, POSE_KEY};
