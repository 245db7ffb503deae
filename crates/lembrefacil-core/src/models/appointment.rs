//! Appointment and reminder models.

use chrono::{DateTime, Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Wall-clock layout used for appointment and reminder times.
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// A scheduled appointment.
///
/// The `*_name` and `doctor_specialty` fields are snapshots copied from the
/// referenced doctor, patient and caregiver when the appointment is written.
/// They are not refreshed when those records change later.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    /// Generated identifier - empty until the record is created in a store
    pub id: String,
    /// Scheduled date and time (YYYY-MM-DDTHH:MM)
    pub date: String,
    pub specialty: String,
    #[serde(rename = "doctorCRM")]
    pub doctor_crm: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doctor_specialty: Option<String>,
    #[serde(rename = "patientCPF")]
    pub patient_cpf: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_name: Option<String>,
    #[serde(rename = "caregiverCPF")]
    pub caregiver_cpf: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caregiver_name: Option<String>,
    /// Reminders attached to this appointment, in display order
    #[serde(default)]
    pub reminders: Vec<Reminder>,
}

impl Appointment {
    /// Parse the scheduled date, if it is in a recognised layout.
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        parse_datetime(&self.date)
    }

    /// Check if the appointment is strictly after `now`.
    ///
    /// Appointments with an unparseable date are never upcoming.
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.scheduled_at().is_some_and(|at| at > now)
    }

    /// Find a reminder by ID.
    pub fn reminder(&self, reminder_id: &str) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == reminder_id)
    }
}

/// A reminder attached to an appointment (medication, exam, visit...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    /// When the reminder fires (YYYY-MM-DDTHH:MM)
    pub date_time: String,
    /// Reminder type (e.g., "Medicação", "Consulta", "Exame")
    #[serde(rename = "type")]
    pub kind: String,
    /// How often it repeats (e.g., "Diária", "Semanal", "Única")
    pub frequency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    /// Medications this reminder refers to
    #[serde(default)]
    pub medication_ids: Vec<String>,
}

impl Reminder {
    /// Create a new reminder with a generated ID.
    pub fn new(
        date_time: impl Into<String>,
        kind: impl Into<String>,
        frequency: impl Into<String>,
    ) -> Self {
        Self {
            id: super::generate_id(),
            date_time: date_time.into(),
            kind: kind.into(),
            frequency: frequency.into(),
            observation: None,
            medication_ids: Vec::new(),
        }
    }
}

/// Parse an appointment or reminder timestamp.
///
/// Accepts the wall-clock layout used by the store (with or without seconds)
/// and RFC 3339 timestamps, which are converted to local time.
pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    const LAYOUTS: [&str; 3] = [DATETIME_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"];

    LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(value, layout).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.with_timezone(&Local).naive_local())
        })
}
