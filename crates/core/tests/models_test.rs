use chrono::{NaiveDate, Utc};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{from_str, json, to_value};
use uuid::Uuid;
use washbook_core::{
    errors::BookingError,
    models::{
        appointment::{
            Appointment, AppointmentStatus, CreateAppointmentRequest, CustomerIdentity,
            parse_booking_date,
        },
        history::HistoryEntry,
        time_slot::{BookedSlotsResponse, DaySlotsResponse},
    },
    pricing::{ExtraFeature, VehicleType, WashPlan},
    slots::BookingDay,
};

fn customer() -> CustomerIdentity {
    CustomerIdentity::new("driver@example.com").unwrap()
}

fn valid_request() -> CreateAppointmentRequest {
    CreateAppointmentRequest {
        name: Some("Ayesha Khan".to_string()),
        phone: Some("0300-1234567".to_string()),
        vehicle_make: Some("Toyota".to_string()),
        vehicle_model: Some("Corolla".to_string()),
        date: Some("2025-06-02".to_string()),
        time_slot: Some("10:00 AM".to_string()),
        comment: Some("  ".to_string()),
        selected_vehicle: Some("Sedan Car".to_string()),
        selected_plan: Some("1000".to_string()),
        extra_features: vec![
            "Tire Shine".to_string(),
            "Engine Wash".to_string(),
            "Tire Shine".to_string(),
        ],
    }
}

fn expect_validation(result: Result<impl std::fmt::Debug, BookingError>, needle: &str) {
    match result {
        Err(BookingError::Validation(message)) => {
            assert!(message.contains(needle), "unexpected message: {message}")
        }
        other => panic!("Expected Validation error, got: {:?}", other),
    }
}

#[test]
fn test_request_deserializes_from_booking_form() {
    let body = r#"{
        "name": "Ayesha Khan",
        "phone": "0300-1234567",
        "vehicleMake": "Toyota",
        "vehicleModel": "Corolla",
        "date": "2025-06-02",
        "timeSlot": "10:00 AM",
        "selectedVehicle": "Sedan Car",
        "selectedPlan": "500"
    }"#;

    let request: CreateAppointmentRequest = from_str(body).expect("Failed to deserialize request");

    assert_eq!(request.time_slot.as_deref(), Some("10:00 AM"));
    assert_eq!(request.selected_plan.as_deref(), Some("500"));
    assert!(request.extra_features.is_empty());
    assert!(request.comment.is_none());
}

#[test]
fn test_validate_produces_typed_appointment() {
    let appointment = valid_request().validate(&customer()).unwrap();

    assert_eq!(appointment.customer_email, "driver@example.com");
    assert_eq!(appointment.date, NaiveDate::from_ymd_opt(2025, 6, 2).unwrap());
    assert_eq!(appointment.time_slot, "10:00 AM");
    assert_eq!(appointment.vehicle, VehicleType::Sedan);
    assert_eq!(appointment.plan, WashPlan::Full);
    assert_eq!(appointment.plan_price, 1000);
    assert_eq!(
        appointment.extra_features,
        vec![ExtraFeature::TireShine, ExtraFeature::EngineWash]
    );
    assert_eq!(appointment.comment, None);
}

#[rstest]
#[case::missing_date(CreateAppointmentRequest { date: None, ..valid_request() }, "date is required")]
#[case::missing_slot(CreateAppointmentRequest { time_slot: None, ..valid_request() }, "timeSlot is required")]
#[case::missing_vehicle(CreateAppointmentRequest { selected_vehicle: None, ..valid_request() }, "selectedVehicle is required")]
#[case::missing_plan(CreateAppointmentRequest { selected_plan: Some(" ".into()), ..valid_request() }, "selectedPlan is required")]
#[case::missing_name(CreateAppointmentRequest { name: None, ..valid_request() }, "name is required")]
#[case::bad_date(CreateAppointmentRequest { date: Some("02/06/2025".into()), ..valid_request() }, "Invalid date")]
#[case::off_grid_slot(CreateAppointmentRequest { time_slot: Some("9:15 AM".into()), ..valid_request() }, "Unknown time slot")]
#[case::unknown_vehicle(CreateAppointmentRequest { selected_vehicle: Some("Tractor".into()), ..valid_request() }, "Unknown vehicle type")]
#[case::plan_not_a_number(CreateAppointmentRequest { selected_plan: Some("cheap".into()), ..valid_request() }, "Invalid plan price")]
#[case::plan_not_offered(CreateAppointmentRequest { selected_plan: Some("700".into()), ..valid_request() }, "not offered for Sedan Car")]
#[case::unknown_feature(CreateAppointmentRequest { extra_features: vec!["Wax".into()], ..valid_request() }, "Unknown extra feature")]
fn test_validate_rejects(#[case] request: CreateAppointmentRequest, #[case] needle: &str) {
    expect_validation(request.validate(&customer()), needle);
}

#[rstest]
#[case("driver@example.com", "driver@example.com")]
#[case("  Driver@Example.com ", "driver@example.com")]
fn test_customer_identity_normalizes_email(#[case] raw: &str, #[case] expected: &str) {
    assert_eq!(CustomerIdentity::new(raw).unwrap().email(), expected);
}

#[test]
fn test_customer_identity_requires_email() {
    assert!(matches!(
        CustomerIdentity::new("   "),
        Err(BookingError::Authentication(_))
    ));
    expect_validation(CustomerIdentity::new("not-an-email"), "Invalid customer email");
}

#[test]
fn test_parse_booking_date() {
    assert_eq!(
        parse_booking_date(" 2025-12-31 ").unwrap(),
        NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()
    );
    expect_validation(parse_booking_date("2025-02-30"), "Invalid date");
}

#[test]
fn test_appointment_serialization_and_history_projection() {
    let new = valid_request().validate(&customer()).unwrap();
    let id = Uuid::new_v4();
    let appointment = Appointment::from_new(id, &new, Utc::now());

    let value = to_value(&appointment).expect("Failed to serialize appointment");
    assert_eq!(value["email"], json!("driver@example.com"));
    assert_eq!(value["timeSlot"], json!("10:00 AM"));
    assert_eq!(value["selectedVehicle"], json!("Sedan Car"));
    assert_eq!(value["selectedPlan"], json!(1000));
    assert_eq!(value["status"], json!("booked"));

    let entry = HistoryEntry::from(appointment);
    assert_eq!(entry.vehicle_type, "Sedan Car");
    assert_eq!(entry.vehicle_details.make, "Toyota");
    assert_eq!(entry.extra_features, vec!["Tire Shine", "Engine Wash"]);
}

#[rstest]
#[case("booked", AppointmentStatus::Booked)]
#[case("completed", AppointmentStatus::Completed)]
fn test_status_round_trips_through_str(#[case] text: &str, #[case] status: AppointmentStatus) {
    assert_eq!(text.parse::<AppointmentStatus>().unwrap(), status);
    assert_eq!(status.as_str(), text);
}

#[test]
fn test_day_responses() {
    let date = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap();
    let day = BookingDay::new(date, ["1:00 PM".to_string(), "8:00 AM".to_string()]);

    let booked = BookedSlotsResponse::from(&day);
    assert_eq!(booked.booked_slots, vec!["8:00 AM", "1:00 PM"]);
    let value = to_value(&booked).unwrap();
    assert_eq!(value["bookedSlots"], json!(["8:00 AM", "1:00 PM"]));
    assert_eq!(value["date"], json!("2025-06-02"));

    let grid = DaySlotsResponse::from(&day);
    assert_eq!(grid.slots.len(), 26);
    assert_eq!(grid.available_count, 24);
    assert!(!grid.slots[0].available);
    assert!(grid.slots[1].available);
}
