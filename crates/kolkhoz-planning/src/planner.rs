//! Collective planner: merging plan mandates and detected demands into one
//! ordered construction queue.
//!
//! 1. Every outstanding mandate unit becomes one request at
//!    [`MANDATE_SORT_WEIGHT`]; its building is marked as covered.
//! 2. Every demand suggestion not covered by a mandate becomes one request
//!    weighted by [`DemandPriority::sort_weight`].
//! 3. The list is stably sorted by weight, so ties keep insertion order
//!    (mandates first, then demands, each in input order).
//!
//! The resulting bands are: critical demands, mandates, urgent demands,
//! normal demands.
//!
//! [`DemandPriority::sort_weight`]: kolkhoz_types::DemandPriority::sort_weight

use std::collections::BTreeSet;
use std::iter;

use kolkhoz_types::{
    BuildingDefId, ConstructionDemand, ConstructionRequest, MANDATE_SORT_WEIGHT,
    PlanMandateState, RequestSource,
};

use crate::catalog;
use crate::mandate::remaining;

/// Build this tick's construction queue.
///
/// `mandate_state` is `None` before the first plan period is issued.
pub fn generate_queue(
    mandate_state: Option<&PlanMandateState>,
    demands: &[ConstructionDemand],
) -> Vec<ConstructionRequest> {
    let mut queue: Vec<ConstructionRequest> = Vec::new();
    let mut covered: BTreeSet<&BuildingDefId> = BTreeSet::new();

    for mandate in mandate_state.into_iter().flat_map(|state| state.mandates.iter()) {
        let outstanding = remaining(mandate);
        if outstanding == 0 {
            continue;
        }
        covered.insert(&mandate.def_id);

        let request = ConstructionRequest {
            def_id: mandate.def_id.clone(),
            source: RequestSource::Mandate,
            label: mandate.label.clone(),
            sort_priority: MANDATE_SORT_WEIGHT,
            reason: format!(
                "five-year plan: {} of {} built",
                mandate.fulfilled, mandate.required
            ),
        };
        let count = usize::try_from(outstanding).unwrap_or(usize::MAX);
        queue.extend(iter::repeat_n(request, count));
    }

    for demand in demands {
        let weight = demand.priority.sort_weight();
        for def_id in &demand.suggested_def_ids {
            if covered.contains(def_id) {
                continue;
            }
            queue.push(ConstructionRequest {
                def_id: def_id.clone(),
                source: RequestSource::Demand,
                label: catalog::display_name(def_id.as_str())
                    .map_or_else(|| def_id.to_string(), str::to_owned),
                sort_priority: weight,
                reason: demand.reason.clone(),
            });
        }
    }

    // `sort_by_key` is stable; equal weights keep insertion order.
    queue.sort_by_key(|request| request.sort_priority);
    queue
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
