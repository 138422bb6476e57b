//! Build-menu filtering: which buildings the player may pick right now.

use std::collections::BTreeSet;

use kolkhoz_types::{BuildingDefId, ConstructionDemand, MenuBuildingFilter, PlanMandateState};

/// Compute `(mandated ∪ demanded) ∩ era_available`, without duplicates.
///
/// Order is mandated identifiers first, then demanded ones, each at its
/// first occurrence.
pub fn filter_buildings_for_menu(filter: &MenuBuildingFilter) -> Vec<BuildingDefId> {
    let available: BTreeSet<&BuildingDefId> = filter.era_available_def_ids.iter().collect();
    let mut seen: BTreeSet<&BuildingDefId> = BTreeSet::new();

    filter
        .mandated_def_ids
        .iter()
        .chain(filter.demanded_def_ids.iter())
        .filter(|id| available.contains(id) && seen.insert(*id))
        .cloned()
        .collect()
}

/// Assemble a menu filter from the active plan and this tick's demands.
///
/// Every mandate of the plan counts, met or not, since building past a
/// quota is allowed.
pub fn menu_filter_for(
    mandate_state: Option<&PlanMandateState>,
    demands: &[ConstructionDemand],
    era_available_def_ids: Vec<BuildingDefId>,
) -> MenuBuildingFilter {
    MenuBuildingFilter {
        mandated_def_ids: mandate_state
            .into_iter()
            .flat_map(|state| state.mandates.iter().map(|m| m.def_id.clone()))
            .collect(),
        demanded_def_ids: demands
            .iter()
            .flat_map(|d| d.suggested_def_ids.iter().cloned())
            .collect(),
        era_available_def_ids,
    }
}
