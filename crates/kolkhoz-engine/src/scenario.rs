//! Scenario files and their replay through the construction cycle.
//!
//! A scenario is a scripted campaign: for each tick, the settlement the
//! detector sees, an optional era change applied before the tick, and the
//! buildings the player placed during it. Replaying a scenario writes one
//! JSON-encoded [`TickPlan`] per line.
//!
//! [`TickPlan`]: kolkhoz_core::cycle::TickPlan

use std::io::Write;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use kolkhoz_core::config::SimulationConfig;
use kolkhoz_core::cycle::ConstructionCycle;
use kolkhoz_planning::{all_mandates_complete, get_mandate_fulfillment};
use kolkhoz_types::{BuildingDefId, BuildingMandate, Era, SettlementSnapshot};

use crate::error::EngineError;

/// A scripted campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Scenario {
    /// Saved plan ledger to resume instead of issuing a fresh plan.
    #[serde(default)]
    pub mandates: Option<Vec<BuildingMandate>>,

    /// Ticks to run, in order.
    #[serde(default)]
    pub ticks: Vec<ScenarioTick>,
}

/// One scripted tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ScenarioTick {
    /// Era to switch to before the tick runs.
    #[serde(default)]
    pub era: Option<Era>,

    /// Settlement state observed during the tick.
    #[serde(default)]
    pub snapshot: SettlementSnapshot,

    /// Buildings placed during the tick, recorded after planning.
    #[serde(default)]
    pub placed: Vec<BuildingDefId>,
}

impl Scenario {
    /// Load a scenario from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ScenarioRead`] if the file cannot be read, or
    /// [`EngineError::ScenarioParse`] if it is not a valid scenario.
    pub fn from_file(path: &Path) -> Result<Self, EngineError> {
        let contents =
            std::fs::read_to_string(path).map_err(|source| EngineError::ScenarioRead {
                path: path.display().to_string(),
                source,
            })?;
        Self::parse(&contents)
    }

    /// Parse a scenario from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ScenarioParse`] if the YAML is invalid.
    pub fn parse(yaml: &str) -> Result<Self, EngineError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Outcome of a completed replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Ticks executed.
    pub ticks: usize,
    /// Plan fulfillment after the last placement.
    pub fulfillment: Decimal,
    /// Whether the running plan was complete after the last placement.
    pub mandates_complete: bool,
}

/// Run every tick of `scenario`, writing each tick plan to `out` as a
/// JSON line.
///
/// # Errors
///
/// Returns an error if the cycle cannot be built from `config`, a saved
/// ledger is invalid, a tick fails, or output cannot be written.
pub fn replay<W: Write>(
    config: &SimulationConfig,
    scenario: &Scenario,
    out: &mut W,
) -> Result<ReplaySummary, EngineError> {
    let mut cycle = ConstructionCycle::new(config)?;

    if let Some(records) = &scenario.mandates {
        cycle.restore_mandates(records.clone())?;
        info!(mandates = records.len(), "Saved plan restored");
    }

    for step in &scenario.ticks {
        if let Some(era) = step.era {
            cycle.set_era(era);
        }

        let plan = cycle.run_tick(&step.snapshot)?;
        serde_json::to_writer(&mut *out, &plan)?;
        writeln!(out)?;

        for def_id in &step.placed {
            cycle.record_placement(def_id);
        }
    }
    out.flush()?;

    Ok(ReplaySummary {
        ticks: scenario.ticks.len(),
        fulfillment: cycle
            .mandates()
            .map_or(Decimal::ZERO, get_mandate_fulfillment),
        mandates_complete: cycle.mandates().is_none_or(all_mandates_complete),
    })
}
