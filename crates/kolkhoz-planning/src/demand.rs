//! Demand detection: turning a settlement snapshot into shortage signals.
//!
//! Each [`DemandCategory`] is checked independently, so any subset of
//! categories may fire in the same tick:
//!
//! - **Housing** -- critical when residents outnumber capacity (including
//!   zero capacity), urgent at or above the occupancy threshold
//! - **Food production** -- per-capita food against two thresholds
//! - **Power** -- count of consumers that need power and lack it
//! - **Vodka production** -- per-capita vodka, same shape as food
//!
//! Detection is total: zero population, zero capacity, and empty stores
//! produce no demands rather than errors.

use rust_decimal::Decimal;
use tracing::debug;

use kolkhoz_types::{
    BuildingDefId, ConstructionDemand, DemandCategory, DemandPriority, PowerConsumer,
    SettlementSnapshot,
};

use crate::catalog;
use crate::config::DemandThresholds;

/// Detect every construction demand raised by `snapshot`.
///
/// Demands are returned in [`DemandCategory::ALL`] order.
pub fn detect_demands(
    snapshot: &SettlementSnapshot,
    thresholds: &DemandThresholds,
) -> Vec<ConstructionDemand> {
    let demands: Vec<ConstructionDemand> = DemandCategory::ALL
        .into_iter()
        .filter_map(|category| match category {
            DemandCategory::Housing => {
                housing_demand(snapshot.population, snapshot.housing_capacity, thresholds)
            }
            DemandCategory::FoodProduction => {
                food_demand(snapshot.resources.food, snapshot.population, thresholds)
            }
            DemandCategory::Power => power_demand(&snapshot.power_consumers, thresholds),
            DemandCategory::VodkaProduction => {
                vodka_demand(snapshot.resources.vodka, snapshot.population, thresholds)
            }
        })
        .collect();

    for demand in &demands {
        debug!(
            category = demand.category.as_str(),
            priority = ?demand.priority,
            reason = %demand.reason,
            "construction demand detected"
        );
    }

    demands
}

/// Housing pressure from population against powered housing capacity.
pub fn housing_demand(
    population: u32,
    housing_capacity: u32,
    thresholds: &DemandThresholds,
) -> Option<ConstructionDemand> {
    if population == 0 {
        return None;
    }

    let (priority, reason) = if population > housing_capacity {
        let reason = if housing_capacity == 0 {
            format!("{population} residents and no powered housing")
        } else {
            format!("population {population} exceeds housing capacity {housing_capacity}")
        };
        (DemandPriority::Critical, reason)
    } else {
        // population <= capacity and population > 0, so capacity > 0.
        let occupancy =
            Decimal::from(population).checked_div(Decimal::from(housing_capacity))?;
        if occupancy < thresholds.housing_urgent_occupancy {
            return None;
        }
        (
            DemandPriority::Urgent,
            format!(
                "housing {population} of {housing_capacity} occupied (occupancy {})",
                occupancy.round_dp(2)
            ),
        )
    };

    Some(ConstructionDemand {
        category: DemandCategory::Housing,
        priority,
        suggested_def_ids: vec![
            BuildingDefId::from(catalog::WORKERS_HOUSE_A),
            BuildingDefId::from(catalog::WORKERS_HOUSE_B),
        ],
        reason,
    })
}

/// Food shortage from stored food per resident.
pub fn food_demand(
    food: Decimal,
    population: u32,
    thresholds: &DemandThresholds,
) -> Option<ConstructionDemand> {
    let (priority, per_capita) = per_capita_shortage(
        food,
        population,
        thresholds.food_critical_per_capita,
        thresholds.food_urgent_per_capita,
    )?;
    Some(ConstructionDemand {
        category: DemandCategory::FoodProduction,
        priority,
        suggested_def_ids: vec![BuildingDefId::from(catalog::COLLECTIVE_FARM)],
        reason: format!("food per capita {} is low", per_capita.round_dp(2)),
    })
}

/// Vodka shortage from stored vodka per resident.
pub fn vodka_demand(
    vodka: Decimal,
    population: u32,
    thresholds: &DemandThresholds,
) -> Option<ConstructionDemand> {
    let (priority, per_capita) = per_capita_shortage(
        vodka,
        population,
        thresholds.vodka_critical_per_capita,
        thresholds.vodka_urgent_per_capita,
    )?;
    Some(ConstructionDemand {
        category: DemandCategory::VodkaProduction,
        priority,
        suggested_def_ids: vec![BuildingDefId::from(catalog::VODKA_DISTILLERY)],
        reason: format!("vodka per capita {} is low", per_capita.round_dp(2)),
    })
}

/// Power shortage from buildings that need power and are not receiving it.
///
/// Buildings with a zero power requirement never count, powered or not.
pub fn power_demand(
    consumers: &[PowerConsumer],
    thresholds: &DemandThresholds,
) -> Option<ConstructionDemand> {
    let unpowered = consumers.iter().filter(|c| c.is_starved()).count();
    if unpowered == 0 {
        return None;
    }

    let critical_above = usize::try_from(thresholds.power_critical_above).unwrap_or(usize::MAX);
    let priority = if unpowered > critical_above {
        DemandPriority::Critical
    } else {
        DemandPriority::Urgent
    };

    Some(ConstructionDemand {
        category: DemandCategory::Power,
        priority,
        suggested_def_ids: vec![BuildingDefId::from(catalog::POWER_STATION)],
        reason: format!("{unpowered} buildings without power"),
    })
}

/// Classify `stock / population` against a critical and an urgent bound.
///
/// Returns `None` for zero population (nobody to supply) or when the ratio
/// meets the urgent bound.
fn per_capita_shortage(
    stock: Decimal,
    population: u32,
    critical_below: Decimal,
    urgent_below: Decimal,
) -> Option<(DemandPriority, Decimal)> {
    if population == 0 {
        return None;
    }
    let per_capita = stock.checked_div(Decimal::from(population))?;
    if per_capita < critical_below {
        Some((DemandPriority::Critical, per_capita))
    } else if per_capita < urgent_below {
        Some((DemandPriority::Urgent, per_capita))
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
