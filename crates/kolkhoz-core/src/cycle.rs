//! Construction cycle: the per-tick pipeline that decides what to build.
//!
//! Each call to [`ConstructionCycle::run_tick`] runs these steps:
//!
//! 1. **Advance** -- move the [`PlanClock`] forward one tick.
//! 2. **Plan rollover** -- when a new plan period begins (or no plan has
//!    been issued yet), replace the mandate ledger with fresh mandates for
//!    the current era and difficulty.
//! 3. **Detect** -- derive shortage demands from the settlement snapshot.
//! 4. **Plan** -- merge outstanding mandates and demands into the queue.
//! 5. **Filter** -- narrow mandated and demanded buildings to the era's
//!    catalogue for the build menu.
//!
//! The four planning components never call each other; this module is the
//! only place they are composed. Given the same snapshots and placements,
//! the cycle is deterministic.

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, info};

use kolkhoz_planning::{
    DemandThresholds, PlanningError, all_mandates_complete, available_in_era,
    create_mandates_for_era, create_plan_mandate_state, detect_demands,
    filter_buildings_for_menu, generate_queue, get_mandate_fulfillment, menu_filter_for,
    record_building_placed, restore_plan_mandate_state,
};
use kolkhoz_types::{
    BuildingDefId, BuildingMandate, ConstructionDemand, ConstructionRequest, Difficulty, Era,
    PlanMandateState, SettlementSnapshot,
};

use crate::clock::{ClockError, PlanClock};
use crate::config::SimulationConfig;

/// Errors that can occur while running the construction cycle.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// A clock operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// Restored mandate records were invalid.
    #[error("planning error: {source}")]
    Planning {
        /// The underlying planning error.
        #[from]
        source: PlanningError,
    },
}

/// Everything the cycle decided in one tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TickPlan {
    /// The tick that was executed.
    pub tick: u64,
    /// Calendar year of the tick.
    pub year: u64,
    /// Zero-based plan period of the tick.
    pub plan_period: u64,
    /// Era during the tick.
    pub era: Era,
    /// Shortages detected this tick.
    pub demands: Vec<ConstructionDemand>,
    /// Ordered construction queue.
    pub queue: Vec<ConstructionRequest>,
    /// Buildings offered in the build menu.
    pub menu: Vec<BuildingDefId>,
    /// Aggregate plan fulfillment at the start of the tick.
    pub fulfillment: Decimal,
    /// Whether every mandate of the running plan is met.
    pub mandates_complete: bool,
    /// Ticks left before the running plan closes, counting this one.
    pub ticks_until_next_plan: u64,
}

/// Owner of the mandate ledger and the clock; runs the pipeline each tick.
#[derive(Debug, Clone)]
pub struct ConstructionCycle {
    /// Campaign clock.
    clock: PlanClock,
    /// Difficulty tier used when issuing mandates.
    difficulty: Difficulty,
    /// Detector thresholds.
    thresholds: DemandThresholds,
    /// Ledger of the running plan, `None` until the first tick.
    mandates: Option<PlanMandateState>,
    /// Plan period the ledger was issued for.
    issued_period: Option<u64>,
}

impl ConstructionCycle {
    /// Create a cycle from the simulation configuration.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::Clock`] if the plan configuration is invalid.
    pub fn new(config: &SimulationConfig) -> Result<Self, TickError> {
        let clock = PlanClock::new(&config.plan, config.world.starting_era)?;
        Ok(Self::from_parts(
            clock,
            config.world.difficulty,
            config.demand.clone(),
        ))
    }

    /// Create a cycle from explicit parts with no plan issued yet.
    pub const fn from_parts(
        clock: PlanClock,
        difficulty: Difficulty,
        thresholds: DemandThresholds,
    ) -> Self {
        Self {
            clock,
            difficulty,
            thresholds,
            mandates: None,
            issued_period: None,
        }
    }

    /// Return the campaign clock.
    pub const fn clock(&self) -> &PlanClock {
        &self.clock
    }

    /// Return the running plan's ledger, if one has been issued.
    pub const fn mandates(&self) -> Option<&PlanMandateState> {
        self.mandates.as_ref()
    }

    /// Change the era. The running plan keeps its mandates until the next
    /// plan period.
    pub fn set_era(&mut self, era: Era) {
        if era != self.clock.era() {
            info!(from = ?self.clock.era(), to = ?era, tick = self.clock.tick(), "era changed");
            self.clock.set_era(era);
        }
    }

    /// Record one building placed by the player.
    ///
    /// Has no effect on the ledger when no mandate names `def_id`.
    pub fn record_placement(&mut self, def_id: &BuildingDefId) {
        if let Some(state) = &self.mandates {
            let next = record_building_placed(state, def_id);
            let matched = next != *state;
            debug!(def_id = %def_id, matched, "building placed");
            self.mandates = Some(next);
        }
    }

    /// Replace the running plan's ledger with saved records.
    ///
    /// The saved plan counts as issued for the current plan period.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::Planning`] if a record is invalid.
    pub fn restore_mandates(&mut self, records: Vec<BuildingMandate>) -> Result<(), TickError> {
        let state = restore_plan_mandate_state(records)?;
        self.mandates = Some(state);
        self.issued_period = Some(self.clock.plan_period());
        Ok(())
    }

    /// Run one tick of the construction pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::Clock`] if the tick counter overflows.
    pub fn run_tick(&mut self, snapshot: &SettlementSnapshot) -> Result<TickPlan, TickError> {
        let tick = self.clock.advance()?;
        let era = self.clock.era();
        let plan_period = self.clock.plan_period();

        if self.issued_period != Some(plan_period) {
            self.issue_plan(plan_period);
        }

        let mandates = self.mandates.as_ref();
        let demands = detect_demands(snapshot, &self.thresholds);
        let queue = generate_queue(mandates, &demands);
        let menu = filter_buildings_for_menu(&menu_filter_for(
            mandates,
            &demands,
            available_in_era(era),
        ));
        let fulfillment = mandates.map_or(Decimal::ZERO, get_mandate_fulfillment);
        let mandates_complete = mandates.is_none_or(all_mandates_complete);

        debug!(
            tick,
            demands = demands.len(),
            queued = queue.len(),
            menu = menu.len(),
            fulfillment = %fulfillment,
            "construction tick complete"
        );

        Ok(TickPlan {
            tick,
            year: self.clock.year(),
            plan_period,
            era,
            demands,
            queue,
            menu,
            fulfillment,
            mandates_complete,
            ticks_until_next_plan: self.clock.ticks_until_next_plan(),
        })
    }

    /// Issue fresh mandates for `plan_period`, replacing any running plan.
    fn issue_plan(&mut self, plan_period: u64) {
        if let Some(previous) = &self.mandates {
            info!(
                fulfillment = %get_mandate_fulfillment(previous),
                complete = all_mandates_complete(previous),
                "plan period closed"
            );
        }

        let era = self.clock.era();
        let state =
            create_plan_mandate_state(create_mandates_for_era(era, self.difficulty));
        info!(
            plan_period,
            year = self.clock.year(),
            era = ?era,
            difficulty = ?self.difficulty,
            mandates = state.mandates.len(),
            ticks_remaining = self.clock.ticks_until_next_plan(),
            "new five-year plan issued"
        );
        self.mandates = Some(state);
        self.issued_period = Some(plan_period);
    }
}

#[cfg(test)]
mod tests {
    use kolkhoz_planning::catalog;
    use kolkhoz_types::{DemandCategory, RequestSource, ResourceLevels};
    use rust_decimal_macros::dec;

    use super::*;
    use crate::config::PlanConfig;

    fn cycle(era: Era) -> ConstructionCycle {
        let clock = PlanClock::from_parts(0, era, 3, 1, 1922).unwrap();
        ConstructionCycle::from_parts(clock, Difficulty::Worker, DemandThresholds::default())
    }

    fn quiet_snapshot() -> SettlementSnapshot {
        SettlementSnapshot {
            population: 10,
            housing_capacity: 100,
            resources: ResourceLevels {
                food: dec!(100),
                vodka: dec!(100),
                power: dec!(10),
            },
            power_consumers: Vec::new(),
        }
    }

    #[test]
    fn first_tick_issues_plan_for_current_era() {
        let mut cycle = cycle(Era::Revolution);
        assert!(cycle.mandates().is_none());

        let plan = cycle.run_tick(&quiet_snapshot()).unwrap();
        assert_eq!(plan.tick, 1);
        assert_eq!(plan.plan_period, 0);
        assert!(plan.demands.is_empty());
        assert_eq!(
            cycle.mandates().map(|s| s.mandates.clone()),
            Some(create_mandates_for_era(Era::Revolution, Difficulty::Worker))
        );
        // Revolution at Worker: 2 barracks + 1 farm
        assert_eq!(plan.queue.len(), 3);
        assert!(plan.queue.iter().all(|r| r.source == RequestSource::Mandate));
        assert_eq!(plan.fulfillment, Decimal::ZERO);
        assert!(!plan.mandates_complete);
        // Three ticks per plan: ticks 1 and 2 remain in period 0.
        assert_eq!(plan.ticks_until_next_plan, 2);
    }

    #[test]
    fn placements_shrink_the_queue() {
        let mut cycle = cycle(Era::Revolution);
        let _ = cycle.run_tick(&quiet_snapshot()).unwrap();

        cycle.record_placement(&BuildingDefId::from(catalog::WORKERS_HOUSE_A));
        cycle.record_placement(&BuildingDefId::from(catalog::COLLECTIVE_FARM));
        // Not mandated: no effect
        cycle.record_placement(&BuildingDefId::from(catalog::KOLKHOZ_HQ));

        // Tick 2 is still plan period 0 (three ticks per plan).
        let plan = cycle.run_tick(&quiet_snapshot()).unwrap();
        assert_eq!(plan.plan_period, 0);
        assert_eq!(plan.queue.len(), 1);
        assert_eq!(plan.fulfillment, dec!(2) / dec!(3));
    }

    #[test]
    fn new_period_replaces_plan_with_current_era() {
        let mut cycle = cycle(Era::Revolution);
        let _ = cycle.run_tick(&quiet_snapshot()).unwrap();
        cycle.record_placement(&BuildingDefId::from(catalog::COLLECTIVE_FARM));

        cycle.set_era(Era::Industrialization);
        // Tick 2: same period, mandates unchanged despite the era change.
        let plan = cycle.run_tick(&quiet_snapshot()).unwrap();
        assert_eq!(plan.era, Era::Industrialization);
        assert!(plan.queue.iter().any(|r| r.def_id.as_str() == catalog::WORKERS_HOUSE_A));

        // Tick 3 opens period 1: fresh plan, zero progress.
        let plan = cycle.run_tick(&quiet_snapshot()).unwrap();
        assert_eq!(plan.plan_period, 1);
        assert_eq!(plan.year, 1923);
        assert_eq!(plan.ticks_until_next_plan, 3);
        assert_eq!(
            cycle.mandates().map(|s| s.mandates.clone()),
            Some(create_mandates_for_era(Era::Industrialization, Difficulty::Worker))
        );
        assert_eq!(plan.fulfillment, Decimal::ZERO);
    }

    #[test]
    fn shortages_flow_through_to_queue_and_menu() {
        let mut cycle = cycle(Era::Revolution);
        let snapshot = SettlementSnapshot {
            population: 50,
            housing_capacity: 0,
            resources: ResourceLevels {
                food: dec!(500),
                vodka: dec!(1000),
                power: Decimal::ZERO,
            },
            power_consumers: Vec::new(),
        };
        let plan = cycle.run_tick(&snapshot).unwrap();

        assert_eq!(plan.demands.len(), 1);
        assert_eq!(plan.demands[0].category, DemandCategory::Housing);

        // Barracks are mandated, so only the cottage enters as a demand,
        // and as a critical demand it leads the queue.
        assert_eq!(plan.queue[0].def_id.as_str(), catalog::WORKERS_HOUSE_B);
        assert_eq!(plan.queue[0].source, RequestSource::Demand);
        assert!(
            plan.queue
                .iter()
                .filter(|r| r.def_id.as_str() == catalog::WORKERS_HOUSE_A)
                .all(|r| r.source == RequestSource::Mandate)
        );

        let menu: Vec<&str> = plan.menu.iter().map(BuildingDefId::as_str).collect();
        assert_eq!(
            menu,
            vec![catalog::WORKERS_HOUSE_A, catalog::COLLECTIVE_FARM, catalog::WORKERS_HOUSE_B]
        );
    }

    #[test]
    fn menu_drops_buildings_outside_the_era() {
        let mut cycle = cycle(Era::Revolution);
        let mut snapshot = quiet_snapshot();
        snapshot.power_consumers = vec![kolkhoz_types::PowerConsumer {
            def_id: BuildingDefId::from(catalog::KOLKHOZ_HQ),
            power_required: 2,
            powered: false,
        }];
        let plan = cycle.run_tick(&snapshot).unwrap();
        // The power station is queued but not yet buildable in this era.
        assert!(plan.queue.iter().any(|r| r.def_id.as_str() == catalog::POWER_STATION));
        assert!(!plan.menu.iter().any(|id| id.as_str() == catalog::POWER_STATION));
    }

    #[test]
    fn restored_plan_survives_until_next_period() {
        let mut cycle = cycle(Era::Collectivization);
        let saved = vec![BuildingMandate {
            def_id: BuildingDefId::from(catalog::TRACTOR_STATION),
            required: 2,
            label: "Machine-tractor station".to_owned(),
            fulfilled: 2,
        }];
        assert!(cycle.restore_mandates(saved.clone()).is_ok());

        // Tick 1 is still period 0: the saved, complete plan is kept.
        let plan = cycle.run_tick(&quiet_snapshot()).unwrap();
        assert!(plan.mandates_complete);
        assert_eq!(plan.fulfillment, Decimal::ONE);
        assert!(plan.queue.is_empty());
        assert_eq!(cycle.mandates().map(|s| s.mandates.clone()), Some(saved));
    }

    #[test]
    fn restoring_invalid_records_fails() {
        let mut cycle = cycle(Era::Revolution);
        let bad = vec![BuildingMandate {
            def_id: BuildingDefId::from(catalog::STEEL_MILL),
            required: 0,
            label: "Steel mill".to_owned(),
            fulfilled: 0,
        }];
        assert!(matches!(
            cycle.restore_mandates(bad),
            Err(TickError::Planning { .. })
        ));
        assert!(cycle.mandates().is_none());
    }

    #[test]
    fn new_rejects_invalid_plan_config() {
        let config = SimulationConfig {
            plan: PlanConfig {
                ticks_per_year: 0,
                ..PlanConfig::default()
            },
            ..SimulationConfig::default()
        };
        assert!(matches!(
            ConstructionCycle::new(&config),
            Err(TickError::Clock { .. })
        ));
    }

    #[test]
    fn tick_plan_serializes_for_the_ui() {
        let mut cycle = cycle(Era::Revolution);
        let plan = cycle.run_tick(&quiet_snapshot()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        assert_eq!(json["era"], "revolution");
        assert_eq!(json["queue"][0]["source"], "mandate");
        assert_eq!(json["queue"][0]["sort_priority"], 10);
    }
}
