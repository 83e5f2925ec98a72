use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;
use uuid::Uuid;
use washbook_core::{
    booking::{AppointmentStore, InsertOutcome},
    models::appointment::{Appointment, AppointmentStatus, NewAppointment},
};

// Mock appointment store for testing
mock! {
    pub AppointmentRepo {}

    #[async_trait]
    impl AppointmentStore for AppointmentRepo {
        async fn booked_slots(&self, date: NaiveDate) -> eyre::Result<HashSet<String>>;

        async fn insert_appointment(
            &self,
            appointment: &NewAppointment,
        ) -> eyre::Result<InsertOutcome>;

        async fn list_appointments(
            &self,
            status: Option<AppointmentStatus>,
        ) -> eyre::Result<Vec<Appointment>>;

        async fn appointments_for_email(
            &self,
            email: &str,
            limit: i64,
        ) -> eyre::Result<Vec<Appointment>>;

        async fn complete_appointment(&self, id: Uuid) -> eyre::Result<Option<Appointment>>;

        async fn delete_appointment(&self, id: Uuid) -> eyre::Result<bool>;
    }
}
