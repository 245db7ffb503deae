//! Patient store operations.

use super::{commit_create, commit_delete, commit_update, EntityStore, StoreResult};
use crate::models::{Appointment, Patient};
use crate::validation::PatientForm;

impl EntityStore {
    /// Insert a new patient; a fresh id is assigned.
    pub fn create_patient(&mut self, patient: Patient) -> StoreResult<Patient> {
        commit_create(&mut self.patients, patient, &self.config)
    }

    /// Replace the patient with the given id, keeping the id.
    ///
    /// Returns `None` (and changes nothing) if no such patient exists.
    pub fn update_patient(&mut self, id: &str, patient: Patient) -> StoreResult<Option<Patient>> {
        commit_update(&mut self.patients, id, patient, &self.config)
    }

    /// Delete a patient. Caregiver assignments and appointments that refer to
    /// the patient are left as they are.
    pub fn delete_patient(&mut self, id: &str) -> bool {
        commit_delete(&mut self.patients, id)
    }

    /// Validate a patient form, then create (no id) or update (with id).
    pub fn save_patient(&mut self, form: &PatientForm, id: Option<&str>) -> StoreResult<Option<Patient>> {
        let patient = form.validate(&self.diseases)?;
        match id {
            Some(id) => self.update_patient(id, patient),
            None => self.create_patient(patient).map(Some),
        }
    }

    /// Get a patient by id.
    pub fn get_patient(&self, id: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.id == id)
    }

    /// Get a patient by CPF.
    pub fn get_patient_by_cpf(&self, cpf: &str) -> Option<&Patient> {
        self.patients.iter().find(|p| p.cpf == cpf)
    }

    /// Appointments booked for the patient with the given CPF.
    pub fn appointments_for_patient(&self, cpf: &str) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.patient_cpf == cpf)
            .collect()
    }
}
