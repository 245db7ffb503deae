//! LembreFácil Core Library
//!
//! In-memory data core of a senior-care management dashboard: patients,
//! caregivers, doctors, medications, diseases and appointments with reminders.
//!
//! # Architecture
//!
//! ```text
//! Form payload ──► validation ──► normalized record
//!                                        │
//!                          store::mutation (create / update / delete)
//!                                        │
//!                                  EntityStore ──► views (filter, sort, stats)
//!                                        │
//!                                 CareDashboard (FFI)
//! ```
//!
//! # Modules
//!
//! - [`models`]: Domain types (Patient, Caregiver, Appointment, etc.)
//! - [`validation`]: Form payloads and their field rules
//! - [`store`]: Entity collections, seed data and pure mutation functions
//! - [`views`]: Search, column sort, lookups and dashboard statistics
//! - [`config`]: Dashboard settings

pub mod config;
pub mod models;
pub mod store;
pub mod validation;
pub mod views;

// Re-export commonly used types
pub use config::{DashboardConfig, DuplicatePolicy};
pub use models::{Appointment, Caregiver, Disease, Doctor, Medication, Patient, Reminder};
pub use store::{EntityStore, StoreError};
pub use validation::{
    AppointmentForm, CaregiverForm, DoctorForm, FieldError, MedicationForm, PatientForm,
    ValidationErrors,
};
pub use views::{DashboardStats, SortDirection, SortState, TableView};

// UniFFI setup - using proc macros
uniffi::setup_scaffolding!();

use std::sync::{Arc, Mutex};

use views::{
    AppointmentField, CaregiverField, DoctorField, MedicationField, PatientField, Tabular,
};

// =========================================================================
// FFI Error Type
// =========================================================================

#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum CareError {
    #[error("Validation error: {} invalid field(s)", .errors.len())]
    Validation { errors: Vec<FieldError> },

    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<StoreError> for CareError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Validation(e) => e.into(),
            StoreError::DuplicateKey { entity, key } => {
                CareError::DuplicateKey(format!("{entity} {key}"))
            }
            StoreError::Json(e) => CareError::Serialization(e.to_string()),
        }
    }
}

impl From<ValidationErrors> for CareError {
    fn from(e: ValidationErrors) -> Self {
        CareError::Validation { errors: e.errors }
    }
}

impl From<config::ConfigError> for CareError {
    fn from(e: config::ConfigError) -> Self {
        CareError::InvalidInput(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for CareError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        CareError::Internal(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions (exported to FFI)
// =========================================================================

/// Open a dashboard loaded with the sample data set.
///
/// `config_json` overrides the default settings; missing keys keep their defaults.
#[uniffi::export]
pub fn open_dashboard(config_json: Option<String>) -> Result<Arc<CareDashboard>, CareError> {
    let config = match config_json {
        Some(json) => DashboardConfig::from_json(&json)?,
        None => DashboardConfig::default(),
    };
    Ok(CareDashboard::wrap(EntityStore::seeded(config)))
}

/// Open a dashboard with empty collections (for testing).
#[uniffi::export]
pub fn open_empty_dashboard() -> Arc<CareDashboard> {
    CareDashboard::wrap(EntityStore::new(DashboardConfig::default()))
}

/// Filter and sort `records` the way a table would show them.
fn table_rows<T: Tabular + Clone>(
    records: &[T],
    search: String,
    field: Option<T::Field>,
    direction: SortDirection,
) -> Vec<T> {
    let sort = SortState::with_direction(field.unwrap_or(T::DEFAULT_SORT), direction);
    TableView::<T>::new(search, sort)
        .apply(records)
        .into_iter()
        .cloned()
        .collect()
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe store wrapper for FFI.
#[derive(uniffi::Object)]
pub struct CareDashboard {
    store: Arc<Mutex<EntityStore>>,
}

impl CareDashboard {
    fn wrap(store: EntityStore) -> Arc<Self> {
        Arc::new(Self {
            store: Arc::new(Mutex::new(store)),
        })
    }
}

#[uniffi::export]
impl CareDashboard {
    // =========================================================================
    // Dashboard
    // =========================================================================

    /// Headline counts as of now.
    pub fn stats(&self) -> Result<DashboardStats, CareError> {
        let store = self.store.lock()?;
        Ok(store.stats())
    }

    /// Next appointments, soonest first.
    pub fn upcoming_appointments(&self) -> Result<Vec<Appointment>, CareError> {
        let store = self.store.lock()?;
        let now = chrono::Local::now().naive_local();
        Ok(store.upcoming_appointments_at(now).into_iter().cloned().collect())
    }

    pub fn recent_patients(&self) -> Result<Vec<Patient>, CareError> {
        let store = self.store.lock()?;
        Ok(store.recent_patients().to_vec())
    }

    /// Serialize every collection as a JSON snapshot.
    pub fn export_json(&self) -> Result<String, CareError> {
        let store = self.store.lock()?;
        Ok(store.to_json()?)
    }

    // =========================================================================
    // Patient Operations
    // =========================================================================

    /// Search and sort patients; `field` defaults to the name column.
    pub fn list_patients(
        &self,
        search: String,
        field: Option<PatientField>,
        direction: SortDirection,
    ) -> Result<Vec<Patient>, CareError> {
        let store = self.store.lock()?;
        Ok(table_rows(store.patients(), search, field, direction))
    }

    pub fn get_patient(&self, id: String) -> Result<Option<Patient>, CareError> {
        let store = self.store.lock()?;
        Ok(store.get_patient(&id).cloned())
    }

    /// Create (no id) or update (with id) a patient from a form.
    pub fn save_patient(&self, form: PatientForm, id: Option<String>) -> Result<Option<Patient>, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.save_patient(&form, id.as_deref())?)
    }

    pub fn delete_patient(&self, id: String) -> Result<bool, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_patient(&id))
    }

    pub fn appointments_for_patient(&self, cpf: String) -> Result<Vec<Appointment>, CareError> {
        let store = self.store.lock()?;
        Ok(store.appointments_for_patient(&cpf).into_iter().cloned().collect())
    }

    // =========================================================================
    // Caregiver Operations
    // =========================================================================

    pub fn list_caregivers(
        &self,
        search: String,
        field: Option<CaregiverField>,
        direction: SortDirection,
    ) -> Result<Vec<Caregiver>, CareError> {
        let store = self.store.lock()?;
        Ok(table_rows(store.caregivers(), search, field, direction))
    }

    pub fn save_caregiver(&self, form: CaregiverForm, cpf: Option<String>) -> Result<Option<Caregiver>, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.save_caregiver(&form, cpf.as_deref())?)
    }

    pub fn delete_caregiver(&self, cpf: String) -> Result<bool, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_caregiver(&cpf))
    }

    /// Link a patient to a caregiver; false if the caregiver does not exist.
    pub fn assign_patient(&self, caregiver_cpf: String, patient_cpf: String) -> Result<bool, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.assign_patient(&caregiver_cpf, &patient_cpf))
    }

    pub fn unassign_patient(&self, caregiver_cpf: String, patient_cpf: String) -> Result<bool, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.unassign_patient(&caregiver_cpf, &patient_cpf))
    }

    pub fn patients_for_caregiver(&self, cpf: String) -> Result<Vec<Patient>, CareError> {
        let store = self.store.lock()?;
        Ok(store.patients_for_caregiver(&cpf).into_iter().cloned().collect())
    }

    // =========================================================================
    // Doctor Operations
    // =========================================================================

    pub fn list_doctors(
        &self,
        search: String,
        field: Option<DoctorField>,
        direction: SortDirection,
    ) -> Result<Vec<Doctor>, CareError> {
        let store = self.store.lock()?;
        Ok(table_rows(store.doctors(), search, field, direction))
    }

    pub fn save_doctor(&self, form: DoctorForm, crm: Option<String>) -> Result<Option<Doctor>, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.save_doctor(&form, crm.as_deref())?)
    }

    pub fn delete_doctor(&self, crm: String) -> Result<bool, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_doctor(&crm))
    }

    /// Doctors of one specialty; all doctors for an empty specialty.
    pub fn doctors_for_specialty(&self, specialty: String) -> Result<Vec<Doctor>, CareError> {
        let store = self.store.lock()?;
        Ok(views::doctors_by_specialty(store.doctors(), &specialty)
            .into_iter()
            .cloned()
            .collect())
    }

    pub fn specialties(&self) -> Result<Vec<String>, CareError> {
        let store = self.store.lock()?;
        Ok(views::specialties(store.doctors())
            .into_iter()
            .map(String::from)
            .collect())
    }

    // =========================================================================
    // Medication and Disease Operations
    // =========================================================================

    pub fn list_medications(
        &self,
        search: String,
        field: Option<MedicationField>,
        direction: SortDirection,
    ) -> Result<Vec<Medication>, CareError> {
        let store = self.store.lock()?;
        Ok(table_rows(store.medications(), search, field, direction))
    }

    pub fn save_medication(&self, form: MedicationForm, id: Option<String>) -> Result<Option<Medication>, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.save_medication(&form, id.as_deref())?)
    }

    pub fn delete_medication(&self, id: String) -> Result<bool, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_medication(&id))
    }

    /// The disease catalog.
    pub fn diseases(&self) -> Result<Vec<Disease>, CareError> {
        let store = self.store.lock()?;
        Ok(store.diseases().to_vec())
    }

    /// Toggle `cid` in a disease selection against the catalog.
    pub fn toggle_disease(&self, selected: Vec<Disease>, cid: String) -> Result<Vec<Disease>, CareError> {
        let store = self.store.lock()?;
        Ok(views::toggle_disease(&selected, &cid, store.diseases()))
    }

    // =========================================================================
    // Appointment Operations
    // =========================================================================

    pub fn list_appointments(
        &self,
        search: String,
        field: Option<AppointmentField>,
        direction: SortDirection,
    ) -> Result<Vec<Appointment>, CareError> {
        let store = self.store.lock()?;
        Ok(table_rows(store.appointments(), search, field, direction))
    }

    pub fn save_appointment(&self, form: AppointmentForm, id: Option<String>) -> Result<Option<Appointment>, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.save_appointment(&form, id.as_deref())?)
    }

    pub fn delete_appointment(&self, id: String) -> Result<bool, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.delete_appointment(&id))
    }

    pub fn add_reminder(&self, appointment_id: String, reminder: Reminder) -> Result<bool, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.add_reminder(&appointment_id, reminder))
    }

    pub fn remove_reminder(&self, appointment_id: String, reminder_id: String) -> Result<bool, CareError> {
        let mut store = self.store.lock()?;
        Ok(store.remove_reminder(&appointment_id, &reminder_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_dashboard_with_config() {
        let dashboard = open_dashboard(Some(r#"{"recentPatientsLimit":3}"#.into())).unwrap();
        assert_eq!(dashboard.recent_patients().unwrap().len(), 3);
        assert_eq!(dashboard.stats().unwrap().total_patients, 5);
    }

    #[test]
    fn test_open_dashboard_rejects_bad_config() {
        let err = open_dashboard(Some("{not json".into())).err().unwrap();
        assert!(matches!(err, CareError::InvalidInput(_)));
    }

    #[test]
    fn test_list_doctors_sorted_descending() {
        let dashboard = open_dashboard(None).unwrap();
        let names: Vec<String> = dashboard
            .list_doctors(String::new(), None, SortDirection::Desc)
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names.first().map(String::as_str), Some("Dra. Patrícia Lima"));
        assert_eq!(names.last().map(String::as_str), Some("Dr. Carlos Silva"));
    }

    #[test]
    fn test_save_invalid_doctor_maps_to_validation_error() {
        let dashboard = open_empty_dashboard();
        let form = DoctorForm {
            crm: "CRM-1".into(),
            name: "Al".into(),
            specialty: "Geriatria".into(),
        };
        let err = dashboard.save_doctor(form, None).unwrap_err();
        match err {
            CareError::Validation { errors } => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "name");
                assert_eq!(errors[0].message, "Nome deve ter pelo menos 3 caracteres");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_duplicate_crm_maps_to_duplicate_key() {
        let dashboard = open_dashboard(None).unwrap();
        let form = DoctorForm {
            crm: "CRM-12345".into(),
            name: "Dr. Outro Nome".into(),
            specialty: "Geriatria".into(),
        };
        let err = dashboard.save_doctor(form, None).unwrap_err();
        assert!(matches!(err, CareError::DuplicateKey(_)));
    }

    #[test]
    fn test_specialties_and_doctor_filter() {
        let dashboard = open_dashboard(None).unwrap();
        assert_eq!(dashboard.specialties().unwrap().len(), 5);
        let doctors = dashboard.doctors_for_specialty("Geriatria".into()).unwrap();
        assert_eq!(doctors.len(), 1);
        assert_eq!(doctors[0].crm, "CRM-34567");
    }
}
