//! Tunable thresholds for the demand detector.
//!
//! These values correspond to the `demand` section of `kolkhoz-config.yaml`.
//! [`DemandThresholds`] bundles every tunable so that the construction
//! cycle and tests can override defaults.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Thresholds the demand detector compares settlement figures against.
///
/// Per-capita values are stock units per resident. A value strictly below
/// the critical threshold raises a critical demand; a value below the
/// urgent threshold (but not the critical one) raises an urgent demand.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DemandThresholds {
    /// Occupancy (population / capacity) at or above which housing is
    /// urgent (default: 0.8).
    pub housing_urgent_occupancy: Decimal,

    /// Food per capita below which food is critical (default: 1.5).
    pub food_critical_per_capita: Decimal,

    /// Food per capita below which food is urgent (default: 3.0).
    pub food_urgent_per_capita: Decimal,

    /// Vodka per capita below which vodka is critical (default: 0.5).
    pub vodka_critical_per_capita: Decimal,

    /// Vodka per capita below which vodka is urgent (default: 1.0).
    pub vodka_urgent_per_capita: Decimal,

    /// Unpowered-consumer count above which power is critical (default: 3).
    pub power_critical_above: u32,
}

impl Default for DemandThresholds {
    fn default() -> Self {
        Self {
            housing_urgent_occupancy: Decimal::new(8, 1),
            food_critical_per_capita: Decimal::new(15, 1),
            food_urgent_per_capita: Decimal::new(3, 0),
            vodka_critical_per_capita: Decimal::new(5, 1),
            vodka_urgent_per_capita: Decimal::ONE,
            power_critical_above: 3,
        }
    }
}
