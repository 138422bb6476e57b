//! Enumeration types for the construction planner.
//!
//! Every closed set the planner dispatches on lives here so that adding a
//! category, priority, or era is a compile-time change at each `match`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Demand categories and priorities
// ---------------------------------------------------------------------------

/// The kind of emergent shortage a demand describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum DemandCategory {
    /// More residents than the housing stock comfortably holds.
    Housing,
    /// Food stores per resident are running low.
    FoodProduction,
    /// Buildings that need electricity are sitting unpowered.
    Power,
    /// Vodka stores per resident are running low.
    VodkaProduction,
}

impl DemandCategory {
    /// Every category, in dispatch order.
    pub const ALL: [Self; 4] = [
        Self::Housing,
        Self::FoodProduction,
        Self::Power,
        Self::VodkaProduction,
    ];

    /// Stable wire name, matching the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Housing => "housing",
            Self::FoodProduction => "food_production",
            Self::Power => "power",
            Self::VodkaProduction => "vodka_production",
        }
    }
}

/// Urgency of an emergent demand. Ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum DemandPriority {
    /// Jumps ahead of standing plan mandates.
    Critical,
    /// Queued behind plan mandates.
    Urgent,
    /// Routine; queued last.
    Normal,
}

impl DemandPriority {
    /// Queue sort weight for requests raised by a demand of this priority.
    ///
    /// Lower builds sooner. Plan mandates sit at
    /// [`MANDATE_SORT_WEIGHT`], between critical and urgent.
    pub const fn sort_weight(self) -> u32 {
        match self {
            Self::Critical => 0,
            Self::Urgent => 20,
            Self::Normal => 30,
        }
    }
}

/// Queue sort weight shared by every plan-mandate request.
pub const MANDATE_SORT_WEIGHT: u32 = 10;

/// Where a construction request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum RequestSource {
    /// An outstanding unit of a state-issued quota.
    Mandate,
    /// A shortage detected from live settlement state.
    Demand,
}

// ---------------------------------------------------------------------------
// Campaign eras
// ---------------------------------------------------------------------------

/// A coarse campaign phase. Gates the building catalogue and plan mandates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Era {
    /// Founding years: tents, huts, and the first fields.
    Revolution,
    /// Farms are merged into collectives.
    Collectivization,
    /// Heavy industry and the electrification drive.
    Industrialization,
    /// Everything for the front.
    WartimeMobilization,
    /// Rebuilding what the war destroyed.
    Reconstruction,
    /// Consumer goods and prefabricated housing.
    Thaw,
    /// Tower blocks and paperwork.
    Stagnation,
}

impl Era {
    /// Every era in campaign order.
    pub const ALL: [Self; 7] = [
        Self::Revolution,
        Self::Collectivization,
        Self::Industrialization,
        Self::WartimeMobilization,
        Self::Reconstruction,
        Self::Thaw,
        Self::Stagnation,
    ];

    /// The era that follows this one, or `None` for the last era.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Revolution => Some(Self::Collectivization),
            Self::Collectivization => Some(Self::Industrialization),
            Self::Industrialization => Some(Self::WartimeMobilization),
            Self::WartimeMobilization => Some(Self::Reconstruction),
            Self::Reconstruction => Some(Self::Thaw),
            Self::Thaw => Some(Self::Stagnation),
            Self::Stagnation => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// Difficulty tier. Ordered from easiest to hardest.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Difficulty {
    /// Forgiving quotas.
    Worker,
    /// The intended experience.
    #[default]
    Comrade,
    /// The Party expects more.
    Tovarish,
}

impl Difficulty {
    /// Percentage applied to every base mandate quota.
    ///
    /// Non-decreasing from [`Difficulty::Worker`] to [`Difficulty::Tovarish`].
    pub const fn quota_percent(self) -> u32 {
        match self {
            Self::Worker => 100,
            Self::Comrade => 150,
            Self::Tovarish => 200,
        }
    }
}
