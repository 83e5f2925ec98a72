//! # Slot Availability
//!
//! The canonical half-hour booking grid and the availability rules built on it.
//!
//! The grid runs from 8:00 AM to 8:30 PM, one label per half hour, and its order
//! is the order used for adjacency when looking for alternatives. Labels are
//! plain strings such as `"9:30 AM"` so they can be compared directly against
//! what the storage layer returns.

use std::collections::{HashSet, VecDeque};
use std::sync::LazyLock;

use chrono::NaiveDate;

/// First bookable hour (24-hour clock).
pub const OPENING_HOUR: u32 = 8;
/// Last bookable hour (24-hour clock), inclusive.
pub const CLOSING_HOUR: u32 = 20;
/// Minute offsets of the slots within each hour.
pub const SLOT_MINUTES: [u32; 2] = [0, 30];
/// Number of alternatives offered on a conflict unless the caller asks otherwise.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 3;

static SLOT_GRID: LazyLock<Vec<String>> = LazyLock::new(generate_slot_grid);

/// Builds the ordered list of slot labels.
///
/// # Example
///
/// ```
/// use washbook_core::slots::generate_slot_grid;
///
/// let grid = generate_slot_grid();
/// assert_eq!(grid.len(), 26);
/// assert_eq!(grid[0], "8:00 AM");
/// assert_eq!(grid[9], "12:30 PM");
/// assert_eq!(grid[25], "8:30 PM");
/// ```
pub fn generate_slot_grid() -> Vec<String> {
    (OPENING_HOUR..=CLOSING_HOUR)
        .flat_map(|hour| {
            SLOT_MINUTES
                .iter()
                .map(move |&minute| format_slot(hour, minute))
        })
        .collect()
}

/// Formats a 24-hour time as a 12-hour slot label, e.g. `(13, 30)` -> `"1:30 PM"`.
pub fn format_slot(hour: u32, minute: u32) -> String {
    let period = if hour < 12 { "AM" } else { "PM" };
    let display_hour = if hour > 12 { hour - 12 } else { hour };
    format!("{display_hour}:{minute:02} {period}")
}

/// The process-wide grid, built once on first use.
pub fn slot_grid() -> &'static [String] {
    &SLOT_GRID
}

/// Position of `slot` in the grid, if it is a grid label.
pub fn slot_index(slot: &str) -> Option<usize> {
    slot_grid().iter().position(|candidate| candidate == slot)
}

pub fn is_grid_slot(slot: &str) -> bool {
    slot_index(slot).is_some()
}

/// True when `slot` is not among `booked_slots`.
///
/// `booked_slots` is already scoped to a single date, as loaded for a
/// [`BookingDay`]; the date itself plays no further part in the check.
///
/// Labels outside the grid are not rejected here; they are simply never booked.
pub fn is_available(slot: &str, booked_slots: &HashSet<String>) -> bool {
    !booked_slots.contains(slot)
}

/// Finds up to `max_suggestions` free slots around `booked_slot`.
///
/// Later slots are collected first, nearest first. If that leaves room, earlier
/// slots are added in front of them, nearest last, so the result is always in
/// grid order. A label that is not on the grid scans forward from the first
/// slot and never backward.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use washbook_core::slots::suggest_alternatives;
///
/// let booked: HashSet<String> = ["8:00 PM".to_string(), "8:30 PM".to_string()].into();
/// assert_eq!(
///     suggest_alternatives("8:00 PM", &booked, 3),
///     vec!["6:30 PM", "7:00 PM", "7:30 PM"],
/// );
/// ```
pub fn suggest_alternatives(
    booked_slot: &str,
    booked_slots: &HashSet<String>,
    max_suggestions: usize,
) -> Vec<String> {
    let grid = slot_grid();
    let index = slot_index(booked_slot);
    let later = &grid[index.map_or(0, |i| i + 1)..];
    let earlier = &grid[..index.unwrap_or(0)];

    let mut suggestions: VecDeque<String> = later
        .iter()
        .filter(|slot| is_available(slot, booked_slots))
        .take(max_suggestions)
        .cloned()
        .collect();

    let remaining = max_suggestions - suggestions.len();
    for slot in earlier
        .iter()
        .rev()
        .filter(|slot| is_available(slot, booked_slots))
        .take(remaining)
    {
        suggestions.push_front(slot.clone());
    }

    suggestions.into()
}

/// The booked slots of a single calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDay {
    date: NaiveDate,
    booked: HashSet<String>,
}

impl BookingDay {
    pub fn new(date: NaiveDate, booked: impl IntoIterator<Item = String>) -> Self {
        Self {
            date,
            booked: booked.into_iter().collect(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn booked_slots(&self) -> &HashSet<String> {
        &self.booked
    }

    pub fn is_available(&self, slot: &str) -> bool {
        is_available(slot, &self.booked)
    }

    pub fn suggest_alternatives(&self, slot: &str, max_suggestions: usize) -> Vec<String> {
        suggest_alternatives(slot, &self.booked, max_suggestions)
    }

    /// Free grid slots, in grid order.
    pub fn available_slots(&self) -> Vec<String> {
        slot_grid()
            .iter()
            .filter(|slot| self.is_available(slot))
            .cloned()
            .collect()
    }

    /// Booked labels in grid order; labels that are not on the grid follow, sorted.
    pub fn booked_in_grid_order(&self) -> Vec<String> {
        let mut on_grid: Vec<String> = slot_grid()
            .iter()
            .filter(|slot| self.booked.contains(slot.as_str()))
            .cloned()
            .collect();
        let mut off_grid: Vec<String> = self
            .booked
            .iter()
            .filter(|slot| !is_grid_slot(slot))
            .cloned()
            .collect();
        off_grid.sort();
        on_grid.append(&mut off_grid);
        on_grid
    }
}
