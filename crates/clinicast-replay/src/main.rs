use std::env;
use std::path::Path;
use std::str::FromStr;

use clinicast_engine::config::{EngineConfig, load_config};
use clinicast_engine::engine::Engine;
use clinicast_replay::replay;
use clinicast_replay::report::ReplayInput;
use eyre::WrapErr;
use tracing_subscriber::EnvFilter;

const DEFAULT_HORIZON: u32 = 6;
const DEFAULT_STEP_HOURS: f64 = 1.0;

fn main() -> eyre::Result<()> {
    // JSON logs on stderr; the report owns stdout.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .with_writer(std::io::stderr)
        .init();

    let input_path =
        env::var("CLINICAST_INPUT").wrap_err("CLINICAST_INPUT must name a readings file")?;
    let config = match env::var("CLINICAST_CONFIG") {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => EngineConfig::default(),
    };
    let horizon = env_or("CLINICAST_HORIZON", DEFAULT_HORIZON)?;
    let step_interval_hours = env_or("CLINICAST_STEP_HOURS", DEFAULT_STEP_HOURS)?;

    let contents = std::fs::read_to_string(&input_path)
        .wrap_err_with(|| format!("failed to read {input_path}"))?;
    let input: ReplayInput = serde_json::from_str(&contents)?;

    let engine = Engine::in_memory(config);
    let report = replay(&engine, input, horizon, step_interval_hours);
    println!("{}", serde_json::to_string_pretty(&report)?);

    tracing::info!(
        series = report.series.len(),
        skipped = report.skipped.len(),
        snapshots = report.vitals.len(),
        "replay complete"
    );
    Ok(())
}

fn env_or<T>(name: &str, default: T) -> eyre::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .wrap_err_with(|| format!("{name} has an invalid value: {raw}")),
        Err(_) => Ok(default),
    }
}
