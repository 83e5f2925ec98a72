//! # Booking
//!
//! The storage seam ([`AppointmentStore`]) and the operations built on top of it.
//!
//! [`book_if_available`] re-reads the booked slots for the requested date right
//! before inserting, and turns a taken slot into [`BookingError::SlotConflict`]
//! with nearby alternatives attached. The check and the insert are not atomic;
//! stores are expected to reject a second appointment for the same date and
//! slot and report it as [`InsertOutcome::Duplicate`].

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::models::appointment::{
    Appointment, AppointmentStatus, CustomerIdentity, NewAppointment,
};
use crate::slots::{BookingDay, DEFAULT_MAX_SUGGESTIONS};

/// Result of a single insert attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted(Uuid),
    /// Another appointment already holds the same date and slot.
    Duplicate,
}

/// Persistence operations needed by the booking service.
///
/// Errors are infrastructure failures (connectivity, timeouts) and surface to
/// callers as [`BookingError::StorageUnavailable`].
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Slot labels already booked on `date`, as committed at call time.
    async fn booked_slots(&self, date: NaiveDate) -> eyre::Result<HashSet<String>>;

    async fn insert_appointment(
        &self,
        appointment: &NewAppointment,
    ) -> eyre::Result<InsertOutcome>;

    /// Appointments ordered by date then creation time, optionally only those
    /// in `status`.
    async fn list_appointments(
        &self,
        status: Option<AppointmentStatus>,
    ) -> eyre::Result<Vec<Appointment>>;

    /// The most recent appointments of one customer, newest date first.
    async fn appointments_for_email(
        &self,
        email: &str,
        limit: i64,
    ) -> eyre::Result<Vec<Appointment>>;

    /// Marks an appointment completed; `None` when the id is unknown.
    async fn complete_appointment(&self, id: Uuid) -> eyre::Result<Option<Appointment>>;

    /// Removes an appointment; `false` when the id is unknown.
    async fn delete_appointment(&self, id: Uuid) -> eyre::Result<bool>;
}

fn storage_error(err: eyre::Report) -> BookingError {
    error!("Appointment store unavailable: {:#}", err);
    BookingError::StorageUnavailable(err)
}

fn slot_conflict(day: &BookingDay, slot: &str) -> BookingError {
    let suggested_slots = day.suggest_alternatives(slot, DEFAULT_MAX_SUGGESTIONS);
    info!(
        "Slot {} on {} is taken, suggesting {:?}",
        slot,
        day.date(),
        suggested_slots
    );
    BookingError::SlotConflict {
        date: day.date(),
        slot: slot.to_string(),
        suggested_slots,
    }
}

/// Reads the booked slots of `date` from the store.
pub async fn load_booking_day(
    store: &dyn AppointmentStore,
    date: NaiveDate,
) -> BookingResult<BookingDay> {
    let booked = store.booked_slots(date).await.map_err(storage_error)?;
    debug!("{} slots booked on {}", booked.len(), date);
    Ok(BookingDay::new(date, booked))
}

/// Books `appointment` if its slot is still free and returns the new id.
///
/// # Errors
///
/// - [`BookingError::SlotConflict`] when the slot is taken, either before the
///   insert or because a concurrent booking won the race
/// - [`BookingError::StorageUnavailable`] when the store cannot be reached
pub async fn book_if_available(
    store: &dyn AppointmentStore,
    appointment: &NewAppointment,
) -> BookingResult<Uuid> {
    let day = load_booking_day(store, appointment.date).await?;
    if !day.is_available(&appointment.time_slot) {
        return Err(slot_conflict(&day, &appointment.time_slot));
    }

    match store
        .insert_appointment(appointment)
        .await
        .map_err(storage_error)?
    {
        InsertOutcome::Inserted(id) => {
            info!(
                "Booked {} on {} for {} (id={})",
                appointment.time_slot, appointment.date, appointment.customer_email, id
            );
            Ok(id)
        }
        InsertOutcome::Duplicate => {
            let day = load_booking_day(store, appointment.date).await?;
            Err(slot_conflict(&day, &appointment.time_slot))
        }
    }
}

pub async fn customer_history(
    store: &dyn AppointmentStore,
    customer: &CustomerIdentity,
    limit: i64,
) -> BookingResult<Vec<Appointment>> {
    store
        .appointments_for_email(customer.email(), limit)
        .await
        .map_err(storage_error)
}

pub async fn list_appointments(
    store: &dyn AppointmentStore,
    status: Option<AppointmentStatus>,
) -> BookingResult<Vec<Appointment>> {
    store.list_appointments(status).await.map_err(storage_error)
}

pub async fn complete_appointment(
    store: &dyn AppointmentStore,
    id: Uuid,
) -> BookingResult<Appointment> {
    store
        .complete_appointment(id)
        .await
        .map_err(storage_error)?
        .ok_or_else(|| BookingError::NotFound(format!("Appointment with ID {} not found", id)))
}

pub async fn delete_appointment(store: &dyn AppointmentStore, id: Uuid) -> BookingResult<()> {
    if store.delete_appointment(id).await.map_err(storage_error)? {
        info!("Deleted appointment {}", id);
        Ok(())
    } else {
        Err(BookingError::NotFound(format!(
            "Appointment with ID {} not found",
            id
        )))
    }
}
