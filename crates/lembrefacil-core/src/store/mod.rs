//! In-memory entity store for the care dashboard.

mod appointments;
mod caregivers;
mod catalog;
pub mod mutation;
mod patients;
mod seed;

pub use mutation::Record;
pub use seed::*;

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::DashboardConfig;
use crate::models::{Appointment, Caregiver, Disease, Doctor, Medication, Patient};
use crate::validation::ValidationErrors;
use crate::views::{self, DashboardStats};

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    #[error("Duplicate {entity} key: {key}")]
    DuplicateKey { entity: &'static str, key: String },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The collections a dashboard works on.
///
/// Owned by whichever layer composes the core; there is no global instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EntityStore {
    #[serde(skip)]
    config: DashboardConfig,
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    caregivers: Vec<Caregiver>,
    medications: Vec<Medication>,
    diseases: Vec<Disease>,
    appointments: Vec<Appointment>,
}

impl EntityStore {
    /// Create an empty store.
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create a store populated with the fixed sample data.
    pub fn seeded(config: DashboardConfig) -> Self {
        let patients = seed_patients();
        Self {
            config,
            caregivers: seed_caregivers(&patients),
            patients,
            doctors: seed_doctors(),
            medications: seed_medications(),
            diseases: seed_diseases(),
            appointments: seed_appointments(),
        }
    }

    /// Restore a store from a JSON snapshot.
    pub fn from_json(json: &str, config: DashboardConfig) -> StoreResult<Self> {
        let mut store: Self = serde_json::from_str(json)?;
        store.config = config;
        Ok(store)
    }

    /// Serialize all collections to a JSON snapshot.
    pub fn to_json(&self) -> StoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn doctors(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn caregivers(&self) -> &[Caregiver] {
        &self.caregivers
    }

    pub fn medications(&self) -> &[Medication] {
        &self.medications
    }

    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    /// Aggregate counts as of the current local time.
    pub fn stats(&self) -> DashboardStats {
        self.stats_at(Local::now().naive_local())
    }

    /// Aggregate counts as of `now`.
    pub fn stats_at(&self, now: NaiveDateTime) -> DashboardStats {
        views::compute_stats(
            &self.patients,
            &self.appointments,
            &self.medications,
            &self.caregivers,
            now,
        )
    }

    /// The next appointments after `now`, soonest first.
    pub fn upcoming_appointments_at(&self, now: NaiveDateTime) -> Vec<&Appointment> {
        views::upcoming_appointments(&self.appointments, now, self.config.upcoming_limit as usize)
    }

    /// The first patients in registration order.
    pub fn recent_patients(&self) -> &[Patient] {
        views::recent_patients(&self.patients, self.config.recent_patients_limit as usize)
    }
}

/// Create `record` in `records`, returning the stored copy.
fn commit_create<R: Record>(
    records: &mut Vec<R>,
    record: R,
    config: &DashboardConfig,
) -> StoreResult<R> {
    let next = mutation::create(records, record, config.duplicate_policy)?;
    *records = next;
    let created = records[records.len() - 1].clone();
    log::debug!("Created {} {}", R::ENTITY, created.key());
    Ok(created)
}

/// Update the record under `key`, returning the stored copy, or `None` if absent.
fn commit_update<R: Record>(
    records: &mut Vec<R>,
    key: &str,
    candidate: R,
    config: &DashboardConfig,
) -> StoreResult<Option<R>> {
    let Some(position) = records.iter().position(|r| r.key() == key) else {
        log::warn!("Update of missing {} {key} ignored", R::ENTITY);
        return Ok(None);
    };
    let next = mutation::update(records, key, candidate, config.duplicate_policy)?;
    *records = next;
    log::debug!("Updated {} {key}", R::ENTITY);
    Ok(records.get(position).cloned())
}

/// Delete the record under `key`; returns whether anything was removed.
fn commit_delete<R: Record>(records: &mut Vec<R>, key: &str) -> bool {
    let before = records.len();
    *records = mutation::delete(records, key);
    let removed = records.len() != before;
    if removed {
        log::debug!("Deleted {} {key}", R::ENTITY);
    }
    removed
}
