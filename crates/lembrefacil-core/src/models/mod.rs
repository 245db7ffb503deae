//! Domain models for the LembreFácil care dashboard.

mod appointment;
mod caregiver;
mod catalog;
mod doctor;
mod patient;

pub use appointment::*;
pub use caregiver::*;
pub use catalog::*;
pub use doctor::*;
pub use patient::*;

/// Generate a fresh identifier for records that use a surrogate key.
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
