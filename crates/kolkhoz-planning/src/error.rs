//! Error types for the `kolkhoz-planning` crate.
//!
//! The per-tick planning operations are total and never fail. Errors only
//! arise when mandate records come from outside the crate (plan scripts,
//! save files) and break the ledger's invariants.

use kolkhoz_types::BuildingDefId;

/// Errors raised while accepting externally supplied mandate records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanningError {
    /// A mandate demanded zero buildings.
    #[error("mandate for {def_id} has a zero requirement")]
    ZeroRequirement {
        /// The offending mandate's building.
        def_id: BuildingDefId,
    },

    /// A mandate demanded more buildings than any plan can ask for.
    #[error("mandate for {def_id} requires {required}, above the limit of {max}")]
    RequirementTooLarge {
        /// The offending mandate's building.
        def_id: BuildingDefId,
        /// The requirement that was supplied.
        required: u32,
        /// The largest accepted requirement.
        max: u32,
    },

    /// A mandate named no building.
    #[error("mandate labelled {label:?} has an empty building id")]
    EmptyDefId {
        /// Label of the offending mandate.
        label: String,
    },
}
