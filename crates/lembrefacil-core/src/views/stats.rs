//! Dashboard aggregate counts and summary lists.

use std::collections::HashSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{Appointment, Caregiver, Medication, Patient};

/// Headline numbers shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_patients: u64,
    pub total_appointments: u64,
    pub total_medications: u64,
    pub total_caregivers: u64,
    /// Appointments scheduled strictly after `now`
    pub upcoming_appointments: u64,
    /// Distinct disease CIDs across all patients
    pub patients_with_diseases: u64,
}

pub fn compute_stats(
    patients: &[Patient],
    appointments: &[Appointment],
    medications: &[Medication],
    caregivers: &[Caregiver],
    now: NaiveDateTime,
) -> DashboardStats {
    let upcoming = appointments.iter().filter(|a| a.is_upcoming(now)).count();
    let cids: HashSet<&str> = patients.iter().flat_map(|p| p.disease_cids()).collect();

    DashboardStats {
        total_patients: patients.len() as u64,
        total_appointments: appointments.len() as u64,
        total_medications: medications.len() as u64,
        total_caregivers: caregivers.len() as u64,
        upcoming_appointments: upcoming as u64,
        patients_with_diseases: cids.len() as u64,
    }
}

/// Appointments after `now`, soonest first, at most `limit` of them.
pub fn upcoming_appointments(appointments: &[Appointment], now: NaiveDateTime, limit: usize) -> Vec<&Appointment> {
    let mut upcoming: Vec<&Appointment> = appointments.iter().filter(|a| a.is_upcoming(now)).collect();
    upcoming.sort_by_key(|a| a.scheduled_at());
    upcoming.truncate(limit);
    upcoming
}

/// The first `limit` patients in store order.
pub fn recent_patients(patients: &[Patient], limit: usize) -> &[Patient] {
    &patients[..limit.min(patients.len())]
}
