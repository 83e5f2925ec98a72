use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{BookingError, BookingResult};
use crate::pricing::{ExtraFeature, VehicleType, WashPlan};
use crate::slots;

/// Calendar dates travel as `YYYY-MM-DD`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_booking_date(value: &str) -> BookingResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| {
        BookingError::Validation(format!("Invalid date '{value}', expected YYYY-MM-DD"))
    })
}

/// The customer a booking is made for, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerIdentity {
    email: String,
}

impl CustomerIdentity {
    pub fn new(email: impl Into<String>) -> BookingResult<Self> {
        let email = email.into().trim().to_lowercase();
        if email.is_empty() {
            return Err(BookingError::Authentication(
                "Please log in to confirm your booking".into(),
            ));
        }
        if !email.contains('@') {
            return Err(BookingError::Validation(format!(
                "Invalid customer email: {email}"
            )));
        }
        Ok(Self { email })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Booked,
    Completed,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "booked",
            AppointmentStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "booked" => Ok(AppointmentStatus::Booked),
            "completed" => Ok(AppointmentStatus::Completed),
            other => Err(BookingError::Validation(format!(
                "Unknown appointment status: {other}"
            ))),
        }
    }
}

/// Booking form payload as posted by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAppointmentRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub vehicle_make: Option<String>,
    pub vehicle_model: Option<String>,
    pub date: Option<String>,
    pub time_slot: Option<String>,
    pub comment: Option<String>,
    pub selected_vehicle: Option<String>,
    pub selected_plan: Option<String>,
    #[serde(default)]
    pub extra_features: Vec<String>,
}

fn required(value: Option<String>, field: &str) -> BookingResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| BookingError::Validation(format!("{field} is required")))
}

impl CreateAppointmentRequest {
    /// Checks every field and produces a typed appointment for `customer`.
    ///
    /// The slot label must be one of the grid labels; the plan must be a price
    /// actually offered for the selected vehicle.
    pub fn validate(self, customer: &CustomerIdentity) -> BookingResult<NewAppointment> {
        let date = parse_booking_date(&required(self.date, "date")?)?;

        let time_slot = required(self.time_slot, "timeSlot")?;
        if !slots::is_grid_slot(&time_slot) {
            return Err(BookingError::Validation(format!(
                "Unknown time slot: {time_slot}"
            )));
        }

        let vehicle: VehicleType = required(self.selected_vehicle, "selectedVehicle")?.parse()?;

        let plan_text = required(self.selected_plan, "selectedPlan")?;
        let plan_price: u32 = plan_text
            .parse()
            .map_err(|_| BookingError::Validation(format!("Invalid plan price: {plan_text}")))?;
        let plan = vehicle.plan_for_price(plan_price).ok_or_else(|| {
            BookingError::Validation(format!(
                "Plan price {plan_price} is not offered for {vehicle}"
            ))
        })?;

        let mut extra_features: Vec<ExtraFeature> = Vec::new();
        for feature in &self.extra_features {
            let feature: ExtraFeature = feature.parse()?;
            if !extra_features.contains(&feature) {
                extra_features.push(feature);
            }
        }

        Ok(NewAppointment {
            customer_email: customer.email().to_string(),
            name: required(self.name, "name")?,
            phone: required(self.phone, "phone")?,
            vehicle_make: required(self.vehicle_make, "vehicleMake")?,
            vehicle_model: required(self.vehicle_model, "vehicleModel")?,
            date,
            time_slot,
            comment: self
                .comment
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
            vehicle,
            plan,
            plan_price,
            extra_features,
        })
    }
}

/// A validated appointment ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub customer_email: String,
    pub name: String,
    pub phone: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub comment: Option<String>,
    pub vehicle: VehicleType,
    pub plan: WashPlan,
    pub plan_price: u32,
    pub extra_features: Vec<ExtraFeature>,
}

impl NewAppointment {
    pub fn extra_feature_names(&self) -> Vec<String> {
        self.extra_features
            .iter()
            .map(|feature| feature.as_str().to_string())
            .collect()
    }
}

/// A stored appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub vehicle_make: String,
    pub vehicle_model: String,
    pub date: NaiveDate,
    pub time_slot: String,
    pub comment: Option<String>,
    pub selected_vehicle: String,
    pub selected_plan: u32,
    pub extra_features: Vec<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn from_new(id: Uuid, new: &NewAppointment, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            email: new.customer_email.clone(),
            name: new.name.clone(),
            phone: new.phone.clone(),
            vehicle_make: new.vehicle_make.clone(),
            vehicle_model: new.vehicle_model.clone(),
            date: new.date,
            time_slot: new.time_slot.clone(),
            comment: new.comment.clone(),
            selected_vehicle: new.vehicle.as_str().to_string(),
            selected_plan: new.plan_price,
            extra_features: new.extra_feature_names(),
            status: AppointmentStatus::Booked,
            created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentResponse {
    pub message: String,
    pub id: Uuid,
}

/// Admin listing filter; `status` is `booked` or `completed` when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListAppointmentsQuery {
    pub status: Option<String>,
}

impl ListAppointmentsQuery {
    pub fn status(&self) -> BookingResult<Option<AppointmentStatus>> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(value) => value.to_lowercase().parse().map(Some),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAppointmentsResponse {
    pub appointments: Vec<Appointment>,
}
