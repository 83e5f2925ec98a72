/// Appointment records, booking requests and their validation
pub mod appointment;
/// Booking history and recommendation payloads
pub mod history;
/// Slot availability payloads
pub mod time_slot;
