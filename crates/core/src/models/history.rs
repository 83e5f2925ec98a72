use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::appointment::{Appointment, AppointmentStatus};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetails {
    pub make: String,
    pub model: String,
}

/// One past appointment as shown in a customer's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub vehicle_type: String,
    pub selected_plan: u32,
    pub extra_features: Vec<String>,
    pub date: NaiveDate,
    pub time_slot: String,
    pub status: AppointmentStatus,
    pub vehicle_details: VehicleDetails,
}

impl From<Appointment> for HistoryEntry {
    fn from(appointment: Appointment) -> Self {
        Self {
            vehicle_type: appointment.selected_vehicle,
            selected_plan: appointment.selected_plan,
            extra_features: appointment.extra_features,
            date: appointment.date,
            time_slot: appointment.time_slot,
            status: appointment.status,
            vehicle_details: VehicleDetails {
                make: appointment.vehicle_make,
                model: appointment.vehicle_model,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserHistoryResponse {
    pub success: bool,
    pub email: String,
    pub previous_appointments: Vec<HistoryEntry>,
}
