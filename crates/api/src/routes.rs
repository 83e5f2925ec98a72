pub mod appointments;
pub mod health;
pub mod history;
pub mod slots;
