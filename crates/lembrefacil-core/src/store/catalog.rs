//! Doctor, medication and disease store operations.

use super::{commit_create, commit_delete, commit_update, EntityStore, StoreResult};
use crate::models::{Disease, Doctor, Medication};
use crate::validation::{DoctorForm, MedicationForm};

impl EntityStore {
    // =========================================================================
    // Doctors
    // =========================================================================

    pub fn create_doctor(&mut self, doctor: Doctor) -> StoreResult<Doctor> {
        commit_create(&mut self.doctors, doctor, &self.config)
    }

    pub fn update_doctor(&mut self, crm: &str, doctor: Doctor) -> StoreResult<Option<Doctor>> {
        commit_update(&mut self.doctors, crm, doctor, &self.config)
    }

    /// Delete a doctor. Appointments keep their doctor snapshot.
    pub fn delete_doctor(&mut self, crm: &str) -> bool {
        commit_delete(&mut self.doctors, crm)
    }

    pub fn save_doctor(&mut self, form: &DoctorForm, crm: Option<&str>) -> StoreResult<Option<Doctor>> {
        let doctor = form.validate()?;
        match crm {
            Some(crm) => self.update_doctor(crm, doctor),
            None => self.create_doctor(doctor).map(Some),
        }
    }

    pub fn get_doctor(&self, crm: &str) -> Option<&Doctor> {
        self.doctors.iter().find(|d| d.crm == crm)
    }

    // =========================================================================
    // Medications
    // =========================================================================

    pub fn create_medication(&mut self, medication: Medication) -> StoreResult<Medication> {
        commit_create(&mut self.medications, medication, &self.config)
    }

    pub fn update_medication(&mut self, id: &str, medication: Medication) -> StoreResult<Option<Medication>> {
        commit_update(&mut self.medications, id, medication, &self.config)
    }

    pub fn delete_medication(&mut self, id: &str) -> bool {
        commit_delete(&mut self.medications, id)
    }

    pub fn save_medication(&mut self, form: &MedicationForm, id: Option<&str>) -> StoreResult<Option<Medication>> {
        let medication = form.validate()?;
        match id {
            Some(id) => self.update_medication(id, medication),
            None => self.create_medication(medication).map(Some),
        }
    }

    pub fn get_medication(&self, id: &str) -> Option<&Medication> {
        self.medications.iter().find(|m| m.id == id)
    }

    // =========================================================================
    // Diseases
    // =========================================================================

    /// Add a disease to the catalog. Patients copy diseases by value, so
    /// later catalog edits do not reach existing patients.
    pub fn create_disease(&mut self, disease: Disease) -> StoreResult<Disease> {
        commit_create(&mut self.diseases, disease, &self.config)
    }

    pub fn update_disease(&mut self, cid: &str, disease: Disease) -> StoreResult<Option<Disease>> {
        commit_update(&mut self.diseases, cid, disease, &self.config)
    }

    pub fn delete_disease(&mut self, cid: &str) -> bool {
        commit_delete(&mut self.diseases, cid)
    }

    pub fn get_disease(&self, cid: &str) -> Option<&Disease> {
        self.diseases.iter().find(|d| d.cid == cid)
    }
}
