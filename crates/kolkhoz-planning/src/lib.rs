//! Construction decision logic for the Kolkhoz simulation.
//!
//! Everything in this crate is a pure transformation over values from
//! `kolkhoz-types`: no I/O, no shared state. The simulation loop in
//! `kolkhoz-core` composes the pieces once per tick.
//!
//! # Modules
//!
//! - [`catalog`] -- Building identifiers, roles, era availability, and
//!   per-era mandate templates
//! - [`config`] -- Detector thresholds ([`DemandThresholds`])
//! - [`demand`] -- Shortage detection from a settlement snapshot
//! - [`error`] -- Errors for externally supplied mandate records
//!   ([`PlanningError`])
//! - [`mandate`] -- Plan mandate issue, fulfillment, and progress queries
//! - [`menu`] -- Build-menu filtering against era availability
//! - [`planner`] -- Merging mandates and demands into the construction queue

pub mod catalog;
pub mod config;
pub mod demand;
pub mod error;
pub mod mandate;
pub mod menu;
pub mod planner;

// Re-export primary types at crate root for convenience.
pub use catalog::{BuildingDef, BuildingRole, MandateTemplate, available_in_era};
pub use config::DemandThresholds;
pub use demand::detect_demands;
pub use error::PlanningError;
pub use mandate::{
    MAX_REQUIREMENT, all_mandates_complete, create_mandates_for_era, create_plan_mandate_state,
    get_mandate_fulfillment, is_mandate_complete, new_mandate, record_building_placed,
    restore_plan_mandate_state, validate_mandate,
};
pub use menu::{filter_buildings_for_menu, menu_filter_for};
pub use planner::generate_queue;
