//! [`ArmService`] – the adapter component and its command dispatcher.
//!
//! One instance binds to one wrapped arm: construction resolves the arm from
//! the host's dependency table, fetches its forward-kinematics model, and
//! keeps that model read-only for the component's lifetime.  The only
//! functioning command is `"transform"`; the rest of the arm-control surface
//! answers [`ArmError::Unimplemented`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use armlink_kinematics::model::KinematicModel;
use armlink_types::{ArmError, JointVector, Pose};
use serde_json::{Map, Value};
use tracing::{debug, error};

use crate::config::Config;
use crate::deps::Dependencies;
use crate::request::Request;

/// Response key under which the computed pose is returned.
pub const POSE_KEY: &str = "pose";

/// The arm adapter component.
///
/// Construction is atomic: every step (config validation, arm resolution,
/// model fetch) must succeed or no component is returned.  After
/// construction the held model reference is never replaced.
pub struct ArmService {
    name: String,
    model: Arc<dyn KinematicModel>,
    // Serializes dispatch: at most one do_command body runs at a time.
    dispatch_lock: Mutex<()>,
    closed: AtomicBool,
}

impl std::fmt::Debug for ArmService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ArmService")
            .field("name", &self.name)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl ArmService {
    /// Build an adapter bound to the arm named in `cfg`.
    ///
    /// # Errors
    ///
    /// [`ArmError::FieldRequired`] when the config names no arm (checked
    /// before any resolution), [`ArmError::MissingDependency`] when the arm
    /// is not in `deps`, and any error the arm reports while handing over
    /// its kinematic model.  A failure at any step aborts construction.
    pub fn new(cfg: &Config, deps: &Dependencies) -> Result<Self, ArmError> {
        cfg.validate()?;
        let arm = deps.arm(&cfg.arm)?;
        let model = arm.kinematics()?;
        debug!(arm = arm.name(), dof = model.dof(), "arm adapter bound");

        Ok(Self {
            name: arm.name().to_string(),
            model,
            dispatch_lock: Mutex::new(()),
            closed: AtomicBool::new(false),
        })
    }

    /// Name of the wrapped arm resource.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Degree-of-freedom count of the bound model, i.e. the joint count a
    /// `"transform"` payload must carry.
    pub fn dof(&self) -> usize {
        self.model.dof()
    }

    /// Dispatch a map-shaped command request.
    ///
    /// Exactly one dispatch executes at a time per instance; concurrent
    /// callers block until the lock is free.  On success the response maps
    /// [`POSE_KEY`] to the computed pose.
    ///
    /// # Errors
    ///
    /// Payload-shape, element-type, and joint-count failures from decoding;
    /// [`ArmError::NoValidCommand`] when no recognized key is present;
    /// [`ArmError::Closed`] after [`close`][Self::close]; and any model
    /// evaluation failure, propagated with its cause after being logged.
    pub fn do_command(&self, cmd: &Map<String, Value>) -> Result<Map<String, Value>, ArmError> {
        let _guard = self
            .dispatch_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if self.closed.load(Ordering::SeqCst) {
            return Err(ArmError::Closed);
        }

        match Request::from_command(cmd)? {
            Request::Transform(joints) => {
                let expected = self.model.dof();
                if joints.len() != expected {
                    return Err(ArmError::JointCount {
                        expected,
                        actual: joints.len(),
                    });
                }

                let pose = self.model.transform(&joints).map_err(|err| {
                    error!(arm = %self.name, %err, "forward kinematics evaluation failed");
                    err
                })?;

                let mut resp = Map::new();
                resp.insert(
                    POSE_KEY.to_string(),
                    serde_json::to_value(pose).map_err(|err| {
                        ArmError::InvalidPayload(format!("failed to encode pose: {err}"))
                    })?,
                );
                Ok(resp)
            }
        }
    }

    /// Shut the component down.
    ///
    /// Idempotent and infallible; safe to call any number of times,
    /// including before the first dispatch.  Dispatches issued after close
    /// fail with [`ArmError::Closed`].  No hardware action is taken – the
    /// wrapped arm owns physical stop semantics.
    pub fn close(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            debug!(arm = %self.name, "arm adapter closed");
        }
    }

    // ------------------------------------------------------------------
    // Stubbed arm-control surface
    // ------------------------------------------------------------------

    /// Not implemented: this adapter never commands motion.
    pub fn move_to_joint_positions(&self, _target: &JointVector) -> Result<(), ArmError> {
        Err(ArmError::Unimplemented(
            "move_to_joint_positions".to_string(),
        ))
    }

    /// Not implemented: the wrapped arm owns its joint state.
    pub fn joint_positions(&self) -> Result<JointVector, ArmError> {
        Err(ArmError::Unimplemented("joint_positions".to_string()))
    }

    /// Not implemented: query the wrapped arm directly for live pose.
    pub fn end_position(&self) -> Result<Pose, ArmError> {
        Err(ArmError::Unimplemented("end_position".to_string()))
    }

    /// Not implemented: the wrapped arm owns stop semantics.
    pub fn stop(&self) -> Result<(), ArmError> {
        Err(ArmError::Unimplemented("stop".to_string()))
    }

    /// Not implemented.
    pub fn is_moving(&self) -> Result<bool, ArmError> {
        Err(ArmError::Unimplemented("is_moving".to_string()))
    }

    /// Not implemented: geometry lives with the wrapped arm.
    pub fn geometries(&self) -> Result<Vec<Pose>, ArmError> {
        Err(ArmError::Unimplemented("geometries".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arm::Arm;
    use crate::sim::SimArm;
    use serde_json::json;
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    // ------------------------------------------------------------------
    // Test doubles
    // ------------------------------------------------------------------

    /// Model whose position echoes the first three joints, with a call
    /// counter so tests can assert it was never invoked.
    struct CountingModel {
        calls: AtomicUsize,
    }

    impl CountingModel {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }
    }

    impl KinematicModel for CountingModel {
        fn dof(&self) -> usize {
            6
        }

        fn transform(&self, joints: &JointVector) -> Result<Pose, ArmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if joints.len() != self.dof() {
                return Err(ArmError::JointCount {
                    expected: self.dof(),
                    actual: joints.len(),
                });
            }
            let v = joints.values();
            Ok(Pose::new(
                armlink_types::Vec3::new(v[0], v[1], v[2]),
                armlink_types::Quaternion::identity(),
            ))
        }
    }

    struct CountingArm {
        model: Arc<CountingModel>,
    }

    impl Arm for CountingArm {
        fn name(&self) -> &str {
            "counting-arm"
        }

        fn kinematics(&self) -> Result<Arc<dyn KinematicModel>, ArmError> {
            Ok(self.model.clone())
        }
    }

    /// Arm whose model fetch always fails, for atomic-construction tests.
    struct BrokenArm;

    impl Arm for BrokenArm {
        fn name(&self) -> &str {
            "broken-arm"
        }

        fn kinematics(&self) -> Result<Arc<dyn KinematicModel>, ArmError> {
            Err(ArmError::Kinematics("frame description unavailable".to_string()))
        }
    }

    fn counting_service() -> (ArmService, Arc<CountingModel>) {
        let model = CountingModel::new();
        let mut deps = Dependencies::new();
        deps.insert_arm(Arc::new(CountingArm {
            model: model.clone(),
        }));
        let cfg = Config {
            arm: "counting-arm".to_string(),
        };
        (ArmService::new(&cfg, &deps).unwrap(), model)
    }

    fn cmd(value: serde_json::Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    #[test]
    fn construction_fails_on_empty_arm_name_before_resolution() {
        let deps = Dependencies::new();
        let cfg = Config { arm: String::new() };
        // An empty table would also fail resolution; the field-required
        // error proves validation ran first.
        assert_eq!(
            ArmService::new(&cfg, &deps).unwrap_err(),
            ArmError::FieldRequired {
                field: "arm".to_string()
            }
        );
    }

    #[test]
    fn construction_fails_on_unresolvable_arm() {
        let deps = Dependencies::new();
        let cfg = Config {
            arm: "ghost".to_string(),
        };
        assert_eq!(
            ArmService::new(&cfg, &deps).unwrap_err(),
            ArmError::MissingDependency {
                name: "ghost".to_string()
            }
        );
    }

    #[test]
    fn construction_fails_when_model_fetch_fails() {
        let mut deps = Dependencies::new();
        deps.insert_arm(Arc::new(BrokenArm));
        let cfg = Config {
            arm: "broken-arm".to_string(),
        };
        assert!(matches!(
            ArmService::new(&cfg, &deps).unwrap_err(),
            ArmError::Kinematics(_)
        ));
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    #[test]
    fn transform_returns_pose_under_the_documented_key() {
        let (service, _) = counting_service();
        let resp = service
            .do_command(&cmd(json!({"transform": [1.0, 2.0, 3.0, 0.0, 0.0, 0.0]})))
            .unwrap();

        let pose = &resp[POSE_KEY];
        assert!((pose["position"]["x"].as_f64().unwrap() - 1.0).abs() < 1e-12);
        assert!((pose["position"]["y"].as_f64().unwrap() - 2.0).abs() < 1e-12);
        assert!((pose["orientation"]["w"].as_f64().unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn transform_is_deterministic_for_fixed_model() {
        let (service, _) = counting_service();
        let request = cmd(json!({"transform": [0.5, -0.5, 0.25, 0.0, 0.0, 0.0]}));
        let a = service.do_command(&request).unwrap();
        let b = service.do_command(&request).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_vector_maps_to_identity_pose() {
        let mut deps = Dependencies::new();
        deps.insert_arm(SimArm::six_axis("sim-arm"));
        let cfg = Config {
            arm: "sim-arm".to_string(),
        };
        let service = ArmService::new(&cfg, &deps).unwrap();

        let resp = service
            .do_command(&cmd(json!({"transform": [0, 0, 0, 0, 0, 0]})))
            .unwrap();
        let orientation = &resp[POSE_KEY]["orientation"];
        assert!((orientation["w"].as_f64().unwrap() - 1.0).abs() < 1e-9);
        assert!(orientation["x"].as_f64().unwrap().abs() < 1e-9);
        assert!(orientation["y"].as_f64().unwrap().abs() < 1e-9);
        assert!(orientation["z"].as_f64().unwrap().abs() < 1e-9);
    }

    #[test]
    fn non_array_payload_never_reaches_the_model() {
        let (service, model) = counting_service();
        let err = service
            .do_command(&cmd(json!({"transform": "not joints"})))
            .unwrap_err();
        assert!(matches!(err, ArmError::InvalidPayload(_)));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn non_numeric_element_error_names_the_index() {
        let (service, model) = counting_service();
        let err = service
            .do_command(&cmd(json!({"transform": [0.0, 1.0, null, 3.0, 4.0, 5.0]})))
            .unwrap_err();
        assert_eq!(err, ArmError::NotANumber { index: 2 });
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn wrong_count_error_states_expected_and_actual() {
        let (service, model) = counting_service();
        let err = service
            .do_command(&cmd(json!({"transform": [0.0, 0.0]})))
            .unwrap_err();
        assert_eq!(
            err,
            ArmError::JointCount {
                expected: 6,
                actual: 2
            }
        );
        // The dispatcher rejects before delegating.
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn unrecognized_commands_are_an_explicit_error() {
        let (service, _) = counting_service();
        assert_eq!(
            service.do_command(&Map::new()).unwrap_err(),
            ArmError::NoValidCommand
        );
        assert_eq!(
            service
                .do_command(&cmd(json!({"wave": "hello"})))
                .unwrap_err(),
            ArmError::NoValidCommand
        );
    }

    #[test]
    fn validation_failure_leaves_the_service_usable() {
        let (service, _) = counting_service();
        service
            .do_command(&cmd(json!({"transform": "bad"})))
            .unwrap_err();
        service
            .do_command(&cmd(json!({"transform": [0, 0, 0, 0, 0, 0]})))
            .unwrap();
    }

    // ------------------------------------------------------------------
    // Concurrency
    // ------------------------------------------------------------------

    #[test]
    fn concurrent_dispatches_each_see_their_own_input() {
        let (service, _) = counting_service();
        let service = Arc::new(service);

        let handles: Vec<_> = (0..16)
            .map(|i| {
                let service = service.clone();
                thread::spawn(move || {
                    let x = i as f64;
                    let resp = service
                        .do_command(&cmd(json!({"transform": [x, 0.0, 0.0, 0.0, 0.0, 0.0]})))
                        .unwrap();
                    (x, resp)
                })
            })
            .collect();

        for handle in handles {
            let (x, resp) = handle.join().unwrap();
            let got = resp[POSE_KEY]["position"]["x"].as_f64().unwrap();
            assert!((got - x).abs() < 1e-12, "expected {x}, got {got}");
        }
    }

    // ------------------------------------------------------------------
    // Shutdown and stubs
    // ------------------------------------------------------------------

    #[test]
    fn close_is_idempotent_and_safe_without_dispatches() {
        let (service, _) = counting_service();
        service.close();
        service.close();
        service.close();
    }

    #[test]
    fn dispatch_after_close_is_rejected() {
        let (service, _) = counting_service();
        service.close();
        assert_eq!(
            service
                .do_command(&cmd(json!({"transform": [0, 0, 0, 0, 0, 0]})))
                .unwrap_err(),
            ArmError::Closed
        );
    }

    #[test]
    fn arm_control_surface_is_unimplemented() {
        let (service, _) = counting_service();
        assert!(matches!(
            service
                .move_to_joint_positions(&JointVector::new(vec![0.0; 6]))
                .unwrap_err(),
            ArmError::Unimplemented(_)
        ));
        assert!(matches!(
            service.joint_positions().unwrap_err(),
            ArmError::Unimplemented(_)
        ));
        assert!(matches!(
            service.end_position().unwrap_err(),
            ArmError::Unimplemented(_)
        ));
        assert!(matches!(
            service.stop().unwrap_err(),
            ArmError::Unimplemented(_)
        ));
        assert!(matches!(
            service.is_moving().unwrap_err(),
            ArmError::Unimplemented(_)
        ));
        assert!(matches!(
            service.geometries().unwrap_err(),
            ArmError::Unimplemented(_)
        ));
    }
}
