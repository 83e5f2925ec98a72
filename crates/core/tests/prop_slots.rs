//! Property-based tests for the slot engine using proptest.
//!
//! These hold for any booked set drawn from the grid, not just the scenarios in
//! `slots_test.rs`.

use std::collections::HashSet;

use proptest::prelude::*;
use washbook_core::slots::{is_available, slot_grid, slot_index, suggest_alternatives};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn arb_grid_slot() -> impl Strategy<Value = String> {
    (0..slot_grid().len()).prop_map(|i| slot_grid()[i].clone())
}

fn arb_booked_set() -> impl Strategy<Value = HashSet<String>> {
    proptest::collection::hash_set(arb_grid_slot(), 0..=slot_grid().len())
}

fn arb_max_suggestions() -> impl Strategy<Value = usize> {
    0usize..=8
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn available_iff_not_booked(slot in arb_grid_slot(), booked in arb_booked_set()) {
        prop_assert_eq!(is_available(&slot, &booked), !booked.contains(&slot));
    }

    #[test]
    fn suggestions_never_exceed_cap(
        slot in arb_grid_slot(),
        booked in arb_booked_set(),
        max in arb_max_suggestions(),
    ) {
        let suggestions = suggest_alternatives(&slot, &booked, max);
        prop_assert!(suggestions.len() <= max);
    }

    #[test]
    fn suggestions_are_free_and_not_the_conflict(
        slot in arb_grid_slot(),
        mut booked in arb_booked_set(),
        max in arb_max_suggestions(),
    ) {
        booked.insert(slot.clone());
        let suggestions = suggest_alternatives(&slot, &booked, max);

        for suggestion in &suggestions {
            prop_assert!(!booked.contains(suggestion));
            prop_assert_ne!(suggestion, &slot);
        }
    }

    #[test]
    fn suggestions_are_distinct_and_in_grid_order(
        slot in arb_grid_slot(),
        booked in arb_booked_set(),
        max in arb_max_suggestions(),
    ) {
        let suggestions = suggest_alternatives(&slot, &booked, max);
        let indexes: Vec<usize> = suggestions
            .iter()
            .map(|s| slot_index(s).unwrap())
            .collect();

        for pair in indexes.windows(2) {
            prop_assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn suggestions_fill_cap_when_enough_slots_are_free(
        slot in arb_grid_slot(),
        booked in arb_booked_set(),
        max in arb_max_suggestions(),
    ) {
        let free = slot_grid()
            .iter()
            .filter(|s| **s != slot && !booked.contains(*s))
            .count();
        let suggestions = suggest_alternatives(&slot, &booked, max);

        prop_assert_eq!(suggestions.len(), free.min(max));
    }
}
