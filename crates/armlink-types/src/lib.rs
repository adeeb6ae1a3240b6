//! `armlink-types` – shared domain types for the ArmLink adapter stack.
//!
//! Everything the other crates exchange lives here: joint vectors, spatial
//! primitives ([`Vec3`], [`Quaternion`]), the [`Pose`] returned by forward
//! kinematics, and the global [`ArmError`] enum that spans configuration,
//! dependency-resolution, payload-validation, and kinematics failures.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ────────────────────────────────────────────────────────────────────────────
// Joint vector
// ────────────────────────────────────────────────────────────────────────────

/// An ordered list of per-joint position values, in device-defined joint
/// order (radians for revolute joints).
///
/// The vector carries no length guarantee of its own; the bound kinematic
/// model enforces its degree-of-freedom count at evaluation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointVector(Vec<f64>);

impl JointVector {
    /// Wrap a raw value list.
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of joint values.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` when the vector holds no values.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the underlying values in joint order.
    pub fn values(&self) -> &[f64] {
        &self.0
    }

    /// Iterate over the values in joint order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }
}

impl From<Vec<f64>> for JointVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Spatial primitives
// ────────────────────────────────────────────────────────────────────────────

/// A 3-D translation vector (metres).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Create a new vector.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// A unit quaternion representing a 3-D rotation (w, x, y, z convention).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Quaternion {
    /// Create a quaternion.  The caller is responsible for providing a unit
    /// quaternion (|q| = 1).
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation (no rotation).
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Rotation of `angle_rad` radians about the given unit axis.
    pub fn from_axis_angle(axis: Vec3, angle_rad: f64) -> Self {
        let half = angle_rad * 0.5;
        let s = half.sin();
        Self::new(half.cos(), axis.x * s, axis.y * s, axis.z * s)
    }

    /// Hamilton product: compose two rotations.
    pub fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }

    /// Conjugate (== inverse for a unit quaternion).
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Rotate a vector by this quaternion: p' = q * p * q*.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        // Express v as a pure quaternion.
        let p = Self::new(0.0, v.x, v.y, v.z);
        let rotated = self.mul(p).mul(self.conjugate());
        Vec3::new(rotated.x, rotated.y, rotated.z)
    }
}

/// The spatial pose of an end effector: a position plus an orientation.
///
/// Returned by value from forward-kinematics evaluation; immutable once
/// produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quaternion,
}

impl Pose {
    /// Create a pose from a position and an orientation.
    pub fn new(position: Vec3, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// The identity pose (origin, no rotation).
    pub fn identity() -> Self {
        Self::new(Vec3::zero(), Quaternion::identity())
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

/// Global error type spanning construction, command validation, and
/// kinematics evaluation failures.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ArmError {
    #[error("config validation: required field '{field}' is missing or empty")]
    FieldRequired { field: String },

    #[error("dependency '{name}' is not available")]
    MissingDependency { name: String },

    #[error("model '{model}' is not registered")]
    ModelNotRegistered { model: String },

    #[error("invalid command payload: {0}")]
    InvalidPayload(String),

    #[error("joint position at index {index} must be a number")]
    NotANumber { index: usize },

    #[error("expected {expected} joint positions, got {actual}")]
    JointCount { expected: usize, actual: usize },

    #[error("kinematics evaluation failed: {0}")]
    Kinematics(String),

    #[error("no valid command submitted")]
    NoValidCommand,

    #[error("{0} is not implemented")]
    Unimplemented(String),

    #[error("service is closed")]
    Closed,
}
