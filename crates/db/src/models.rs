use chrono::{DateTime, NaiveDate, Utc};
use eyre::{Result, eyre};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use washbook_core::models::appointment::{Appointment, AppointmentStatus};

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub id: Uuid,
    pub customer_email: String,
    pub name: String,
    pub phone: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub comment: Option<String>,
    pub vehicle_type: String,
    pub plan_price: i32,
    pub extra_features: Vec<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = eyre::Report;

    fn try_from(row: DbAppointment) -> Result<Self> {
        let status: AppointmentStatus = row
            .status
            .parse()
            .map_err(|e| eyre!("Appointment {} has a bad status: {}", row.id, e))?;
        let selected_plan = u32::try_from(row.plan_price)
            .map_err(|_| eyre!("Appointment {} has a negative price", row.id))?;

        Ok(Appointment {
            id: row.id,
            email: row.customer_email,
            name: row.name,
            phone: row.phone,
            vehicle_make: row.vehicle_make,
            vehicle_model: row.vehicle_model,
            date: row.date,
            time_slot: row.time_slot,
            comment: row.comment,
            selected_vehicle: row.vehicle_type,
            selected_plan,
            extra_features: row.extra_features,
            status,
            created_at: row.created_at,
        })
    }
}

/// Converts a batch of rows, failing on the first malformed one.
pub fn into_appointments(rows: Vec<DbAppointment>) -> Result<Vec<Appointment>> {
    rows.into_iter().map(Appointment::try_from).collect()
}
