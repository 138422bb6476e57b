//! Plan mandate lifecycle: issuing quotas, recording placements, and
//! measuring progress.
//!
//! A [`PlanMandateState`] is never mutated in place. Every transition takes
//! the current state by reference and returns the next one, so callers
//! rebind (`state = record_building_placed(&state, id)`) and earlier
//! snapshots stay valid for save files, undo, or what-if evaluation.
//!
//! Fulfillment is tracked uncapped: placing more buildings than a quota asks
//! for is legitimate and shows up in the numbers.

use rust_decimal::Decimal;

use kolkhoz_types::{BuildingDefId, BuildingMandate, Difficulty, Era, PlanMandateState};

use crate::catalog;
use crate::error::PlanningError;

/// Largest requirement a single mandate may carry.
///
/// Each outstanding unit becomes one queue entry, so this also bounds the
/// queue contribution of one mandate.
pub const MAX_REQUIREMENT: u32 = 100;

// ---------------------------------------------------------------------------
// Issuing mandates
// ---------------------------------------------------------------------------

/// Build one mandate with nothing fulfilled yet.
///
/// # Errors
///
/// Returns the [`PlanningError`] raised by [`validate_mandate`].
pub fn new_mandate(
    def_id: BuildingDefId,
    required: u32,
    label: String,
) -> Result<BuildingMandate, PlanningError> {
    let mandate = BuildingMandate {
        def_id,
        required,
        label,
        fulfilled: 0,
    };
    validate_mandate(&mandate)?;
    Ok(mandate)
}

/// Build the mandates for an era's five-year plan at a difficulty tier.
///
/// Deterministic in `(era, difficulty)`. Every era yields at least one
/// mandate, every requirement is positive, and a harder tier never yields a
/// smaller total requirement than an easier one for the same era.
pub fn create_mandates_for_era(era: Era, difficulty: Difficulty) -> Vec<BuildingMandate> {
    catalog::base_mandates(era)
        .iter()
        .filter_map(|template| {
            new_mandate(
                BuildingDefId::from(template.def_id),
                scale_requirement(template.base_required, difficulty),
                catalog::display_name(template.def_id)
                    .unwrap_or(template.def_id)
                    .to_owned(),
            )
            .ok()
        })
        .collect()
}

/// Apply the difficulty quota percentage, rounding up, within
/// `1..=MAX_REQUIREMENT`.
fn scale_requirement(base: u32, difficulty: Difficulty) -> u32 {
    base.saturating_mul(difficulty.quota_percent())
        .div_ceil(100)
        .clamp(1, MAX_REQUIREMENT)
}

/// Validate a single externally supplied mandate.
///
/// # Errors
///
/// Returns [`PlanningError::EmptyDefId`] if the mandate names no building,
/// [`PlanningError::ZeroRequirement`] if `required` is zero, or
/// [`PlanningError::RequirementTooLarge`] if it exceeds [`MAX_REQUIREMENT`].
pub fn validate_mandate(mandate: &BuildingMandate) -> Result<(), PlanningError> {
    if mandate.def_id.as_str().is_empty() {
        return Err(PlanningError::EmptyDefId {
            label: mandate.label.clone(),
        });
    }
    if mandate.required == 0 {
        return Err(PlanningError::ZeroRequirement {
            def_id: mandate.def_id.clone(),
        });
    }
    if mandate.required > MAX_REQUIREMENT {
        return Err(PlanningError::RequirementTooLarge {
            def_id: mandate.def_id.clone(),
            required: mandate.required,
            max: MAX_REQUIREMENT,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// State transitions
// ---------------------------------------------------------------------------

/// Start a plan period: the given mandates with `fulfilled` zeroed.
pub fn create_plan_mandate_state(mandates: Vec<BuildingMandate>) -> PlanMandateState {
    PlanMandateState {
        mandates: mandates
            .into_iter()
            .map(|mandate| BuildingMandate {
                fulfilled: 0,
                ..mandate
            })
            .collect(),
    }
}

/// Rebuild a plan state from saved flat records, keeping saved progress.
///
/// # Errors
///
/// Returns the first [`PlanningError`] raised by [`validate_mandate`].
pub fn restore_plan_mandate_state(
    records: Vec<BuildingMandate>,
) -> Result<PlanMandateState, PlanningError> {
    for record in &records {
        validate_mandate(record)?;
    }
    Ok(PlanMandateState { mandates: records })
}

/// Record one placed building.
///
/// Every mandate for `def_id` gains one fulfilled unit; other mandates are
/// copied unchanged. An identifier with no mandate yields an equal state.
pub fn record_building_placed(state: &PlanMandateState, def_id: &BuildingDefId) -> PlanMandateState {
    PlanMandateState {
        mandates: state
            .mandates
            .iter()
            .map(|mandate| {
                if &mandate.def_id == def_id {
                    BuildingMandate {
                        fulfilled: mandate.fulfilled.saturating_add(1),
                        ..mandate.clone()
                    }
                } else {
                    mandate.clone()
                }
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Units still owed on a mandate. Zero once fulfilled or overbuilt.
pub const fn remaining(mandate: &BuildingMandate) -> u32 {
    mandate.required.saturating_sub(mandate.fulfilled)
}

/// Sum of `required` over `mandates`.
pub fn total_required(mandates: &[BuildingMandate]) -> u64 {
    mandates
        .iter()
        .fold(0_u64, |acc, m| acc.saturating_add(u64::from(m.required)))
}

/// Sum of `fulfilled` over `mandates`.
pub fn total_fulfilled(mandates: &[BuildingMandate]) -> u64 {
    mandates
        .iter()
        .fold(0_u64, |acc, m| acc.saturating_add(u64::from(m.fulfilled)))
}

/// Aggregate fulfillment ratio: total fulfilled over total required.
///
/// Zero for an empty plan. Not clamped; overbuilding can push it past one.
pub fn get_mandate_fulfillment(state: &PlanMandateState) -> Decimal {
    let required = total_required(&state.mandates);
    if required == 0 {
        return Decimal::ZERO;
    }
    let fulfilled = total_fulfilled(&state.mandates);
    Decimal::from(fulfilled)
        .checked_div(Decimal::from(required))
        .unwrap_or(Decimal::ZERO)
}

/// Whether a single mandate has been met.
pub const fn is_mandate_complete(mandate: &BuildingMandate) -> bool {
    mandate.fulfilled >= mandate.required
}

/// Whether every mandate has been met. True for an empty plan.
pub fn all_mandates_complete(state: &PlanMandateState) -> bool {
    state.mandates.iter().all(is_mandate_complete)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::catalog::BuildingRole;

    use super::*;

    fn mandate(def_id: &str, required: u32) -> BuildingMandate {
        BuildingMandate {
            def_id: BuildingDefId::from(def_id),
            required,
            label: def_id.to_owned(),
            fulfilled: 0,
        }
    }

    fn place_n(state: &PlanMandateState, def_id: &str, n: u32) -> PlanMandateState {
        let id = BuildingDefId::from(def_id);
        (0..n).fold(state.clone(), |s, _| record_building_placed(&s, &id))
    }

    #[test]
    fn every_era_has_mandates_at_every_difficulty() {
        for era in Era::ALL {
            for difficulty in [Difficulty::Worker, Difficulty::Comrade, Difficulty::Tovarish] {
                let mandates = create_mandates_for_era(era, difficulty);
                assert!(!mandates.is_empty(), "{era:?} has no mandates");
                assert!(mandates.iter().all(|m| m.required > 0));
                assert!(mandates.iter().all(|m| m.fulfilled == 0));
                assert!(mandates.iter().all(|m| !m.label.is_empty()));
            }
        }
    }

    #[test]
    fn harder_difficulty_never_lowers_total_requirement() {
        for era in Era::ALL {
            let worker = total_required(&create_mandates_for_era(era, Difficulty::Worker));
            let comrade = total_required(&create_mandates_for_era(era, Difficulty::Comrade));
            let tovarish = total_required(&create_mandates_for_era(era, Difficulty::Tovarish));
            assert!(worker <= comrade, "{era:?}: {worker} > {comrade}");
            assert!(comrade <= tovarish, "{era:?}: {comrade} > {tovarish}");
        }
    }

    #[test]
    fn mandates_are_deterministic() {
        for era in Era::ALL {
            assert_eq!(
                create_mandates_for_era(era, Difficulty::Comrade),
                create_mandates_for_era(era, Difficulty::Comrade)
            );
        }
    }

    #[test]
    fn early_eras_mandate_housing_and_agriculture() {
        for era in [Era::Revolution, Era::Collectivization] {
            let roles: Vec<Option<BuildingRole>> = create_mandates_for_era(era, Difficulty::Worker)
                .iter()
                .map(|m| catalog::role(m.def_id.as_str()))
                .collect();
            assert!(roles.iter().all(|r| matches!(
                r,
                Some(BuildingRole::Housing | BuildingRole::Agriculture)
            )));
            assert!(roles.contains(&Some(BuildingRole::Housing)));
            assert!(roles.contains(&Some(BuildingRole::Agriculture)));
        }
    }

    #[test]
    fn later_eras_mandate_industry() {
        for era in Era::ALL.into_iter().filter(|e| *e >= Era::Industrialization) {
            let industrial = create_mandates_for_era(era, Difficulty::Worker)
                .iter()
                .filter_map(|m| catalog::role(m.def_id.as_str()))
                .any(BuildingRole::is_industrial);
            assert!(industrial, "{era:?} mandates no industry");
        }
    }

    #[test]
    fn create_state_zero_fills_fulfilled() {
        let mut dirty = mandate("collective-farm", 2);
        dirty.fulfilled = 7;
        let state = create_plan_mandate_state(vec![dirty, mandate("workers-house-a", 3)]);
        assert!(state.mandates.iter().all(|m| m.fulfilled == 0));
        assert_eq!(state.mandates.len(), 2);
    }

    #[test]
    fn recording_is_uncapped() {
        let state = create_plan_mandate_state(vec![mandate("collective-farm", 2)]);
        for k in 0..6_u32 {
            let after = place_n(&state, "collective-farm", k);
            assert_eq!(after.mandates[0].fulfilled, k);
        }
    }

    #[test]
    fn recording_leaves_old_state_untouched() {
        let before = create_plan_mandate_state(vec![
            mandate("collective-farm", 2),
            mandate("workers-house-a", 2),
        ]);
        let after = record_building_placed(&before, &BuildingDefId::from("collective-farm"));
        assert_eq!(before.mandates[0].fulfilled, 0);
        assert_eq!(after.mandates[0].fulfilled, 1);
        assert_eq!(after.mandates[1], before.mandates[1]);
    }

    #[test]
    fn unmatched_placement_is_a_no_op() {
        let state = create_plan_mandate_state(vec![mandate("collective-farm", 2)]);
        let after = record_building_placed(&state, &BuildingDefId::from("polyclinic"));
        assert_eq!(after, state);
    }

    #[test]
    fn duplicate_mandates_all_advance() {
        let state = create_plan_mandate_state(vec![
            mandate("steel-mill", 1),
            mandate("steel-mill", 2),
        ]);
        let after = place_n(&state, "steel-mill", 1);
        assert!(after.mandates.iter().all(|m| m.fulfilled == 1));
    }

    #[test]
    fn fulfillment_ratio() {
        let empty = create_plan_mandate_state(Vec::new());
        assert_eq!(get_mandate_fulfillment(&empty), Decimal::ZERO);

        let state = create_plan_mandate_state(vec![
            mandate("collective-farm", 2),
            mandate("workers-house-a", 2),
        ]);
        assert_eq!(get_mandate_fulfillment(&state), Decimal::ZERO);

        let half = place_n(&state, "collective-farm", 2);
        assert_eq!(get_mandate_fulfillment(&half), dec!(0.5));

        let full = place_n(&half, "workers-house-a", 2);
        assert_eq!(get_mandate_fulfillment(&full), Decimal::ONE);

        let over = place_n(&full, "workers-house-a", 2);
        assert_eq!(get_mandate_fulfillment(&over), dec!(1.5));
    }

    #[test]
    fn completion_checks() {
        assert!(all_mandates_complete(&PlanMandateState::default()));

        let state = create_plan_mandate_state(vec![
            mandate("collective-farm", 1),
            mandate("workers-house-a", 2),
        ]);
        assert!(!all_mandates_complete(&state));

        let state = place_n(&state, "collective-farm", 3);
        assert!(is_mandate_complete(&state.mandates[0]));
        assert!(!all_mandates_complete(&state));

        let state = place_n(&state, "workers-house-a", 2);
        assert!(all_mandates_complete(&state));
    }

    #[test]
    fn remaining_saturates_when_overbuilt() {
        let mut m = mandate("collective-farm", 2);
        assert_eq!(remaining(&m), 2);
        m.fulfilled = 5;
        assert_eq!(remaining(&m), 0);
    }

    #[test]
    fn restore_keeps_progress_and_rejects_bad_records() {
        let mut saved = mandate("steel-mill", 3);
        saved.fulfilled = 2;
        let restored = restore_plan_mandate_state(vec![saved.clone()]);
        assert_eq!(restored, Ok(PlanMandateState { mandates: vec![saved] }));

        let zero = restore_plan_mandate_state(vec![mandate("steel-mill", 0)]);
        assert_eq!(
            zero,
            Err(PlanningError::ZeroRequirement {
                def_id: BuildingDefId::from("steel-mill")
            })
        );

        let unnamed = restore_plan_mandate_state(vec![mandate("", 1)]);
        assert!(matches!(unnamed, Err(PlanningError::EmptyDefId { .. })));
    }

    #[test]
    fn restore_rejects_oversized_requirement() {
        let at_cap = restore_plan_mandate_state(vec![mandate("steel-mill", MAX_REQUIREMENT)]);
        assert!(at_cap.is_ok());

        let huge = restore_plan_mandate_state(vec![
            mandate("collective-farm", 2),
            mandate("steel-mill", u32::MAX),
        ]);
        assert_eq!(
            huge,
            Err(PlanningError::RequirementTooLarge {
                def_id: BuildingDefId::from("steel-mill"),
                required: u32::MAX,
                max: MAX_REQUIREMENT,
            })
        );
    }

    #[test]
    fn new_mandate_validates() {
        let built = new_mandate(BuildingDefId::from("grain-silo"), 2, "Grain silo".to_owned());
        assert_eq!(
            built,
            Ok(BuildingMandate {
                def_id: BuildingDefId::from("grain-silo"),
                required: 2,
                label: "Grain silo".to_owned(),
                fulfilled: 0,
            })
        );

        let zero = new_mandate(BuildingDefId::from("grain-silo"), 0, "Grain silo".to_owned());
        assert!(matches!(zero, Err(PlanningError::ZeroRequirement { .. })));

        let unnamed = new_mandate(BuildingDefId::from(""), 1, "Nameless".to_owned());
        assert!(matches!(unnamed, Err(PlanningError::EmptyDefId { .. })));

        let huge = new_mandate(
            BuildingDefId::from("grain-silo"),
            MAX_REQUIREMENT.saturating_add(1),
            "Grain silo".to_owned(),
        );
        assert!(matches!(huge, Err(PlanningError::RequirementTooLarge { .. })));
    }

    #[test]
    fn era_mandates_keep_every_template() {
        for era in Era::ALL {
            for difficulty in [Difficulty::Worker, Difficulty::Comrade, Difficulty::Tovarish] {
                let mandates = create_mandates_for_era(era, difficulty);
                assert_eq!(mandates.len(), catalog::base_mandates(era).len(), "{era:?}");
                assert!(mandates.iter().all(|m| validate_mandate(m).is_ok()));
            }
        }
    }
}
