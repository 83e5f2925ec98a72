//! PostgreSQL-backed [`AppointmentStore`].

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use eyre::Result;
use uuid::Uuid;
use washbook_core::{
    booking::{AppointmentStore, InsertOutcome},
    models::appointment::{Appointment, AppointmentStatus, NewAppointment},
};

use crate::{DbPool, models::into_appointments, repositories::appointment};

#[derive(Debug, Clone)]
pub struct PgAppointmentStore {
    pool: DbPool,
}

impl PgAppointmentStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppointmentStore for PgAppointmentStore {
    async fn booked_slots(&self, date: NaiveDate) -> Result<HashSet<String>> {
        let slots = appointment::get_booked_slots_by_date(&self.pool, date).await?;
        Ok(slots.into_iter().collect())
    }

    async fn insert_appointment(&self, new: &NewAppointment) -> Result<InsertOutcome> {
        let outcome = match appointment::create_appointment(&self.pool, new).await? {
            Some(row) => InsertOutcome::Inserted(row.id),
            None => InsertOutcome::Duplicate,
        };
        Ok(outcome)
    }

    async fn list_appointments(
        &self,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>> {
        into_appointments(appointment::list_appointments(&self.pool, status).await?)
    }

    async fn appointments_for_email(&self, email: &str, limit: i64) -> Result<Vec<Appointment>> {
        into_appointments(appointment::get_appointments_by_email(&self.pool, email, limit).await?)
    }

    async fn complete_appointment(&self, id: Uuid) -> Result<Option<Appointment>> {
        appointment::mark_appointment_completed(&self.pool, id)
            .await?
            .map(Appointment::try_from)
            .transpose()
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<bool> {
        appointment::delete_appointment(&self.pool, id).await
    }
}
