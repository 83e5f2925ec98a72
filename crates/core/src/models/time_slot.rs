use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::slots::{self, BookingDay};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

/// Booked labels for one date, as the booking form consumes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedSlotsResponse {
    pub date: NaiveDate,
    pub booked_slots: Vec<String>,
}

impl From<&BookingDay> for BookedSlotsResponse {
    fn from(day: &BookingDay) -> Self {
        Self {
            date: day.date(),
            booked_slots: day.booked_in_grid_order(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAvailability {
    pub slot: String,
    pub available: bool,
}

/// The whole grid for one date with each slot marked free or taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySlotsResponse {
    pub date: NaiveDate,
    pub slots: Vec<SlotAvailability>,
    pub available_count: usize,
}

impl From<&BookingDay> for DaySlotsResponse {
    fn from(day: &BookingDay) -> Self {
        let slots: Vec<SlotAvailability> = slots::slot_grid()
            .iter()
            .map(|slot| SlotAvailability {
                slot: slot.clone(),
                available: day.is_available(slot),
            })
            .collect();
        let available_count = slots.iter().filter(|s| s.available).count();

        Self {
            date: day.date(),
            slots,
            available_count,
        }
    }
}
