//! Shared type definitions for the Kolkhoz construction planner.
//!
//! This crate is the single source of truth for the values passed between
//! the planner, the simulation loop, the save layer, and the build-menu UI.
//! UI-facing types flow to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- [`BuildingDefId`], the catalogue identifier newtype
//! - [`enums`] -- Demand categories and priorities, request sources, eras,
//!   difficulty tiers
//! - [`structs`] -- Snapshots, demands, mandates, queue entries, menu filter

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{
    DemandCategory, DemandPriority, Difficulty, Era, MANDATE_SORT_WEIGHT, RequestSource,
};
pub use ids::BuildingDefId;
pub use structs::{
    BuildingMandate, ConstructionDemand, ConstructionRequest, MenuBuildingFilter,
    PlanMandateState, PowerConsumer, ResourceLevels, SettlementSnapshot,
};
