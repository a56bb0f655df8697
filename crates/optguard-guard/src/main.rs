//! optguard-check
//!
//! Replays a JSON script of create/update/delete operations against an
//! in-memory store with the size/existence guard registered.
//! - Config: optional YAML file, then `OPTGUARD_*` env, then CLI flags
//! - Logging: `RUST_LOG` (e.g. `RUST_LOG=optguard_guard=debug`)

use std::fs;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use serde::Deserialize;
use serde_json::Value;
use tracing_subscriber::{fmt, EnvFilter};

use optguard_core::error::{OptGuardError, Result};
use optguard_guard::config::{self, GuardConfig};
use optguard_guard::{Guard, GuardedStore, MemoryStore};

#[derive(Debug, Parser)]
#[command(name = "optguard-check", about = "Replay store writes through the size/existence guard")]
struct Args {
    /// JSON file holding an array of operations.
    script: String,

    /// YAML guard config.
    #[arg(long)]
    config: Option<String>,

    /// Override the byte limit.
    #[arg(long)]
    max_value_size: Option<usize>,

    /// Abort writes on violation.
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// Warn on violation and keep writing.
    #[arg(long)]
    lenient: bool,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case", deny_unknown_fields)]
enum Op {
    Create { key: String, value: Value },
    Update { key: String, value: Value },
    Delete { key: String },
}

fn load_config(args: &Args) -> Result<GuardConfig> {
    let mut cfg = match &args.config {
        Some(path) => config::load_from_file(path)?,
        None => GuardConfig::default(),
    };
    cfg.apply_env()?;

    if let Some(bytes) = args.max_value_size {
        cfg.guard.max_value_size = bytes;
    }
    if args.strict {
        cfg.guard.strict = Some(true);
    } else if args.lenient {
        cfg.guard.strict = Some(false);
    }
    cfg.validate()?;
    Ok(cfg)
}

fn load_script(path: &str) -> Result<Vec<Op>> {
    let s = fs::read_to_string(path)
        .map_err(|e| OptGuardError::Internal(format!("read script failed: {e}")))?;
    serde_json::from_str(&s).map_err(|e| OptGuardError::BadConfig(format!("invalid script: {e}")))
}

/// Returns the number of rejected operations.
fn replay(store: &mut GuardedStore<MemoryStore>, ops: Vec<Op>) -> usize {
    let mut rejected = 0;
    for (idx, op) in ops.into_iter().enumerate() {
        let res = match op {
            Op::Create { key, value } => store.create(&key, value).map(|w| (key, "create", w)),
            Op::Update { key, value } => store.update(&key, value).map(|w| (key, "update", w)),
            Op::Delete { key } => {
                let w = store.delete(&key).is_some();
                Ok((key, "delete", w))
            }
        };
        match res {
            Ok((key, op, written)) => tracing::info!(idx, op, %key, written, "ok"),
            Err(e) => {
                rejected += 1;
                tracing::error!(idx, code = e.code().as_str(), "rejected: {e}");
            }
        }
    }
    rejected
}

fn main() -> ExitCode {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let args = Args::parse();
    let run = || -> Result<usize> {
        let cfg = load_config(&args)?;
        let ops = load_script(&args.script)?;

        let settings = cfg.settings();
        tracing::info!(
            max_value_size = settings.max_value_size,
            strict = settings.strict,
            ops = ops.len(),
            "optguard-check starting"
        );

        let mut store = GuardedStore::new(MemoryStore::new());
        store.register_guard(Arc::new(Guard::from_config(&cfg)));
        let rejected = replay(&mut store, ops);

        let store = store.into_inner();
        for (key, value) in store.iter() {
            tracing::debug!(%key, %value, "final entry");
        }
        tracing::info!(entries = store.len(), rejected, "replay finished");
        Ok(rejected)
    };

    match run() {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            tracing::error!(code = e.code().as_str(), "{e}");
            ExitCode::from(2)
        }
    }
}
