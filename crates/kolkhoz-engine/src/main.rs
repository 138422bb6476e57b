//! Scenario replay binary for the Kolkhoz construction planner.
//!
//! Loads configuration, replays a scripted campaign through the
//! construction cycle, and prints every tick plan as one JSON line on
//! stdout. Logs go to stderr.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `kolkhoz-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Load the scenario named on the command line (default `scenario.yaml`)
//! 4. Replay the scenario
//! 5. Log the result

mod error;
mod scenario;

use std::path::{Path, PathBuf};

use kolkhoz_core::config::{LoggingConfig, SimulationConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;
use crate::scenario::Scenario;

/// Configuration file looked up in the working directory.
const CONFIG_FILE: &str = "kolkhoz-config.yaml";

/// Scenario file used when none is given on the command line.
const DEFAULT_SCENARIO: &str = "scenario.yaml";

/// Application entry point for the replay binary.
///
/// # Errors
///
/// Returns an error if configuration or the scenario cannot be loaded, or
/// the replay itself fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration. Logging settings come from it.
    let config_path = Path::new(CONFIG_FILE);
    let config = load_config(config_path)?;

    // 2. Initialize structured logging.
    init_tracing(&config.logging);
    if config_path.exists() {
        info!(path = CONFIG_FILE, "Configuration loaded");
    } else {
        info!("Config file not found, using defaults");
    }
    info!(
        world_name = config.world.name,
        starting_era = ?config.world.starting_era,
        difficulty = ?config.world.difficulty,
        ticks_per_year = config.plan.ticks_per_year,
        years_per_plan = config.plan.years_per_plan,
        "kolkhoz-engine starting"
    );

    // 3. Load the scenario.
    let scenario_path = std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_SCENARIO), PathBuf::from);
    let scenario = Scenario::from_file(&scenario_path)?;
    info!(
        path = %scenario_path.display(),
        ticks = scenario.ticks.len(),
        resumes_plan = scenario.mandates.is_some(),
        "Scenario loaded"
    );

    // 4. Replay.
    let mut stdout = std::io::stdout().lock();
    let summary = scenario::replay(&config, &scenario, &mut stdout)?;

    // 5. Log the result.
    info!(
        ticks = summary.ticks,
        fulfillment = %summary.fulfillment,
        mandates_complete = summary.mandates_complete,
        "Scenario complete"
    );

    Ok(())
}

/// Load simulation configuration from `path`, falling back to defaults
/// when the file does not exist.
fn load_config(path: &Path) -> Result<SimulationConfig, EngineError> {
    if path.exists() {
        Ok(SimulationConfig::from_file(path)?)
    } else {
        Ok(SimulationConfig::default())
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// `RUST_LOG` takes precedence over the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}
