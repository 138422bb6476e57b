//! Core data structures exchanged between the planner and its collaborators.
//!
//! Inputs ([`SettlementSnapshot`], [`MenuBuildingFilter`]) arrive from the
//! simulation store and era catalogue as immutable values. Outputs
//! ([`ConstructionDemand`], [`ConstructionRequest`]) are recomputed every
//! tick and never persisted. [`PlanMandateState`] is the only value with a
//! lifetime beyond a tick and is a flat record suitable for save files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{DemandCategory, DemandPriority, RequestSource};
use crate::ids::BuildingDefId;

// ---------------------------------------------------------------------------
// Settlement snapshot (detector input)
// ---------------------------------------------------------------------------

/// Stockpiled resource levels at the start of a tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ResourceLevels {
    /// Food units in storage.
    #[ts(as = "String")]
    #[serde(default)]
    pub food: Decimal,
    /// Vodka units in storage.
    #[ts(as = "String")]
    #[serde(default)]
    pub vodka: Decimal,
    /// Generated power surplus.
    #[ts(as = "String")]
    #[serde(default)]
    pub power: Decimal,
}

/// A placed building that draws from the power grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PowerConsumer {
    /// Catalogue definition of the building.
    pub def_id: BuildingDefId,
    /// Power units the building needs to operate. Zero means it needs none.
    pub power_required: u32,
    /// Whether the grid currently supplies the building.
    pub powered: bool,
}

impl PowerConsumer {
    /// True when the building needs power and is not getting any.
    pub const fn is_starved(&self) -> bool {
        self.power_required > 0 && !self.powered
    }
}

/// Immutable view of the settlement the demand detector reads each tick.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct SettlementSnapshot {
    /// Living residents.
    #[serde(default)]
    pub population: u32,
    /// Summed capacity of powered housing.
    #[serde(default)]
    pub housing_capacity: u32,
    /// Resource stockpiles.
    #[serde(default)]
    pub resources: ResourceLevels,
    /// Every placed building with a power requirement entry.
    #[serde(default)]
    pub power_consumers: Vec<PowerConsumer>,
}

// ---------------------------------------------------------------------------
// Demands
// ---------------------------------------------------------------------------

/// An emergent shortage signal, recomputed fresh every tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConstructionDemand {
    /// What is short.
    pub category: DemandCategory,
    /// How badly.
    pub priority: DemandPriority,
    /// Buildings that would relieve the shortage, in preference order.
    pub suggested_def_ids: Vec<BuildingDefId>,
    /// Human-readable trigger description. Never empty.
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Mandates
// ---------------------------------------------------------------------------

/// A state-issued quota for one building type during the active plan.
///
/// `fulfilled` is not capped at `required`; overbuilding is tracked as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct BuildingMandate {
    /// Building the quota applies to.
    pub def_id: BuildingDefId,
    /// Count demanded by the plan. Always positive.
    pub required: u32,
    /// Display name of the mandate.
    pub label: String,
    /// Matching buildings placed since the plan began.
    #[serde(default)]
    pub fulfilled: u32,
}

/// The mandate ledger of one five-year-plan period.
///
/// Transitions return a new value; the previous state stays valid for
/// history, undo, or speculative evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct PlanMandateState {
    /// Mandates in issue order.
    pub mandates: Vec<BuildingMandate>,
}

// ---------------------------------------------------------------------------
// Construction queue
// ---------------------------------------------------------------------------

/// One entry of the merged construction queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ConstructionRequest {
    /// Building to construct.
    pub def_id: BuildingDefId,
    /// Whether a mandate or a demand raised the request.
    pub source: RequestSource,
    /// Display name for the build menu.
    pub label: String,
    /// Lower builds sooner.
    pub sort_priority: u32,
    /// Why the building is wanted.
    pub reason: String,
}

// ---------------------------------------------------------------------------
// Build menu
// ---------------------------------------------------------------------------

/// Input of the build-menu filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MenuBuildingFilter {
    /// Identifiers named by the active plan mandates.
    #[serde(default)]
    pub mandated_def_ids: Vec<BuildingDefId>,
    /// Identifiers suggested by this tick's demands.
    #[serde(default)]
    pub demanded_def_ids: Vec<BuildingDefId>,
    /// Identifiers constructible in the current era.
    #[serde(default)]
    pub era_available_def_ids: Vec<BuildingDefId>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn zero_requirement_consumer_is_never_starved() {
        let consumer = PowerConsumer {
            def_id: BuildingDefId::from("kolkhoz-hq"),
            power_required: 0,
            powered: false,
        };
        assert!(!consumer.is_starved());
    }

    #[test]
    fn unpowered_consumer_is_starved() {
        let consumer = PowerConsumer {
            def_id: BuildingDefId::from("bread-factory"),
            power_required: 4,
            powered: false,
        };
        assert!(consumer.is_starved());
        let powered = PowerConsumer {
            powered: true,
            ..consumer
        };
        assert!(!powered.is_starved());
    }

    #[test]
    fn plan_state_round_trips_as_flat_record() {
        let state = PlanMandateState {
            mandates: vec![BuildingMandate {
                def_id: BuildingDefId::from("workers-house-a"),
                required: 3,
                label: "Workers' housing".to_owned(),
                fulfilled: 5,
            }],
        };
        let json = serde_json::to_value(&state).unwrap_or_default();
        assert_eq!(json["mandates"][0]["def_id"], "workers-house-a");
        assert_eq!(json["mandates"][0]["fulfilled"], 5);

        let back: PlanMandateState = serde_json::from_value(json).unwrap_or_default();
        assert_eq!(back, state);
    }

    #[test]
    fn snapshot_fields_default_when_missing() {
        let snapshot: SettlementSnapshot =
            serde_json::from_str(r#"{"population": 12, "resources": {"food": "30.5"}}"#)
                .unwrap_or_default();
        assert_eq!(snapshot.population, 12);
        assert_eq!(snapshot.housing_capacity, 0);
        assert_eq!(snapshot.resources.food, dec!(30.5));
        assert_eq!(snapshot.resources.vodka, Decimal::ZERO);
        assert!(snapshot.power_consumers.is_empty());
    }
}
