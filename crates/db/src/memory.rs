//! An in-process [`AppointmentStore`] with the same (date, slot) uniqueness as
//! the PostgreSQL schema. Used for local runs without a database and in tests.

use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use eyre::{Result, eyre};
use uuid::Uuid;
use washbook_core::{
    booking::{AppointmentStore, InsertOutcome},
    models::appointment::{Appointment, AppointmentStatus, NewAppointment},
};

#[derive(Debug, Default)]
pub struct InMemoryAppointmentStore {
    appointments: Mutex<Vec<Appointment>>,
}

impl InMemoryAppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with existing records, bypassing the booking checks.
    pub fn with_appointments(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments: Mutex::new(appointments),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Appointment>>> {
        self.appointments
            .lock()
            .map_err(|_| eyre!("In-memory appointment store is poisoned"))
    }
}

#[async_trait]
impl AppointmentStore for InMemoryAppointmentStore {
    async fn booked_slots(&self, date: NaiveDate) -> Result<HashSet<String>> {
        let appointments = self.lock()?;
        Ok(appointments
            .iter()
            .filter(|a| a.date == date)
            .map(|a| a.time_slot.clone())
            .collect())
    }

    async fn insert_appointment(&self, new: &NewAppointment) -> Result<InsertOutcome> {
        let mut appointments = self.lock()?;
        let taken = appointments
            .iter()
            .any(|a| a.date == new.date && a.time_slot == new.time_slot);
        if taken {
            return Ok(InsertOutcome::Duplicate);
        }

        let id = Uuid::new_v4();
        appointments.push(Appointment::from_new(id, new, Utc::now()));
        Ok(InsertOutcome::Inserted(id))
    }

    async fn list_appointments(
        &self,
        status: Option<AppointmentStatus>,
    ) -> Result<Vec<Appointment>> {
        let mut appointments: Vec<Appointment> = self
            .lock()?
            .iter()
            .filter(|a| status.is_none_or(|s| a.status == s))
            .cloned()
            .collect();
        appointments.sort_by(|a, b| a.date.cmp(&b.date).then(a.created_at.cmp(&b.created_at)));
        Ok(appointments)
    }

    async fn appointments_for_email(&self, email: &str, limit: i64) -> Result<Vec<Appointment>> {
        let mut matching: Vec<Appointment> = self
            .lock()?
            .iter()
            .filter(|a| a.email == email)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        matching.truncate(usize::try_from(limit).unwrap_or(0));
        Ok(matching)
    }

    async fn complete_appointment(&self, id: Uuid) -> Result<Option<Appointment>> {
        let mut appointments = self.lock()?;
        Ok(appointments.iter_mut().find(|a| a.id == id).map(|a| {
            a.status = AppointmentStatus::Completed;
            a.clone()
        }))
    }

    async fn delete_appointment(&self, id: Uuid) -> Result<bool> {
        let mut appointments = self.lock()?;
        let before = appointments.len();
        appointments.retain(|a| a.id != id);
        Ok(appointments.len() < before)
    }
}
