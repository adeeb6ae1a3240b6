//! `armlink-cli` – command-line entry point for the arm adapter.
//!
//! Wires a simulated six-axis arm into the dependency table, constructs the
//! adapter through the [`ModelRegistry`], dispatches one `"transform"`
//! command built from the joint values given on the command line, and prints
//! the response as JSON.
//!
//! ```text
//! armlink 0.0 0.5 -0.5 0.0 1.0 0.0
//! ```
//!
//! With no arguments the zero vector is dispatched.  See
//! [`config`] for the `armlink.toml` file and `ARMLINK_*` overrides.

mod config;

use armlink_service::{ARM_MODEL, Dependencies, ModelRegistry};
use armlink_service::sim::SimArm;
use serde_json::{Map, Value, json};
use tracing::{debug, info};

fn main() {
    // ── Structured logging ────────────────────────────────────────────────
    // Initialise tracing-subscriber using RUST_LOG (defaults to "info").
    // Set ARMLINK_LOG_FORMAT=json to emit newline-delimited JSON logs.
    // The command result itself goes to stdout via println!.
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    if std::env::var("ARMLINK_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .compact()
            .init();
    }

    if let Err(e) = run() {
        eprintln!("armlink: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cfg = config::load()?;
    debug!(arm = %cfg.arm, "configuration loaded");

    // Joint values come straight from the command line; default to the
    // six-axis zero vector.
    let joints = parse_joint_args(std::env::args().skip(1))?;
    let joints = if joints.is_empty() {
        vec![0.0; 6]
    } else {
        joints
    };

    // The CLI always runs against the simulator, registered under whatever
    // name the config declares.  Swap this wiring for a real driver to talk
    // to hardware.
    let mut deps = Dependencies::new();
    deps.insert_arm(SimArm::six_axis(cfg.arm.clone()));

    let service = ModelRegistry::with_builtin()
        .construct(ARM_MODEL, &cfg, &deps)
        .map_err(|e| e.to_string())?;
    info!(arm = service.name(), dof = service.dof(), "adapter ready");

    let cmd: Map<String, Value> = [("transform".to_string(), json!(joints))]
        .into_iter()
        .collect();
    let resp = service.do_command(&cmd).map_err(|e| e.to_string())?;

    println!(
        "{}",
        serde_json::to_string_pretty(&Value::Object(resp))
            .map_err(|e| format!("failed to render response: {e}"))?
    );

    service.close();
    Ok(())
}

fn parse_joint_args(args: impl Iterator<Item = String>) -> Result<Vec<f64>, String> {
    args.map(|arg| {
        arg.parse::<f64>()
            .map_err(|_| format!("joint value '{arg}' is not a number"))
    })
    .collect()
}
