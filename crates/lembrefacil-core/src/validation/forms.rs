//! Form payloads and their validation schemas.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::*;
use crate::models::{
    find_disease, Caregiver, Disease, Doctor, Medication, Patient, Reminder, DATETIME_FORMAT,
};

/// Patient form as submitted by the rendering layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientForm {
    pub cpf: String,
    pub name: String,
    pub date_of_birth: Option<String>,
    pub city: String,
    pub sus_card: String,
    pub contact: String,
    pub medical_history: Option<String>,
    /// CIDs selected from the disease catalog
    pub disease_ids: Option<Vec<String>>,
}

impl PatientForm {
    /// Validate and normalize into an unsaved patient.
    ///
    /// Selected CIDs are resolved against `catalog`; unknown CIDs are dropped
    /// and repeated CIDs collapse to their first occurrence.
    pub fn validate(&self, catalog: &[Disease]) -> ValidationResult<Patient> {
        let mut checks = Checks::default();

        checks.min_len("cpf", &self.cpf, MIN_CPF_LENGTH, "CPF deve ter pelo menos 11 caracteres");
        checks.min_len("name", &self.name, MIN_NAME_LENGTH, "Nome deve ter pelo menos 2 caracteres");
        let date_of_birth = checks
            .required(
                "dateOfBirth",
                self.date_of_birth.as_deref(),
                "Data de nascimento é obrigatória",
            )
            .and_then(|raw| {
                let parsed = parse_date(raw);
                if parsed.is_none() {
                    checks.push("dateOfBirth", "Data de nascimento inválida");
                }
                parsed
            });
        checks.min_len("city", &self.city, MIN_CITY_LENGTH, "Cidade deve ter pelo menos 2 caracteres");
        checks.min_len(
            "susCard",
            &self.sus_card,
            MIN_SUS_CARD_LENGTH,
            "Cartão SUS deve ter pelo menos 15 caracteres",
        );
        checks.min_len(
            "contact",
            &self.contact,
            MIN_CONTACT_LENGTH,
            "Contato deve ter pelo menos 10 caracteres",
        );

        checks.finish(|| Patient {
            id: String::new(),
            cpf: self.cpf.clone(),
            name: self.name.clone(),
            date_of_birth: date_of_birth
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            city: self.city.clone(),
            sus_card: self.sus_card.clone(),
            contact: self.contact.clone(),
            medical_history: self.medical_history.clone().unwrap_or_default(),
            diseases: resolve_diseases(self.disease_ids.as_deref().unwrap_or_default(), catalog),
        })
    }

    /// Pre-fill a form from an existing patient (for editing).
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            cpf: patient.cpf.clone(),
            name: patient.name.clone(),
            date_of_birth: Some(patient.date_of_birth.clone()),
            city: patient.city.clone(),
            sus_card: patient.sus_card.clone(),
            contact: patient.contact.clone(),
            medical_history: Some(patient.medical_history.clone()),
            disease_ids: Some(patient.disease_cids().map(str::to_string).collect()),
        }
    }
}

/// Resolve selected CIDs to value copies from the catalog.
pub fn resolve_diseases(cids: &[String], catalog: &[Disease]) -> Vec<Disease> {
    let mut selected: Vec<Disease> = Vec::with_capacity(cids.len());
    for cid in cids {
        if selected.iter().any(|d| &d.cid == cid) {
            continue;
        }
        match find_disease(catalog, cid) {
            Some(disease) => selected.push(disease.clone()),
            None => log::warn!("Ignoring unknown disease CID {cid}"),
        }
    }
    selected
}

/// Caregiver form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, uniffi::Record)]
#[serde(default)]
pub struct CaregiverForm {
    pub cpf: String,
    pub name: String,
    pub contact: String,
    pub address: String,
    pub email: Option<String>,
}

impl CaregiverForm {
    /// Validate into an unsaved caregiver with no assigned patients.
    pub fn validate(&self) -> ValidationResult<Caregiver> {
        let mut checks = Checks::default();

        checks.min_len("cpf", &self.cpf, MIN_CPF_LENGTH, "CPF deve ter pelo menos 11 caracteres");
        checks.min_len("name", &self.name, MIN_NAME_LENGTH, "Nome deve ter pelo menos 2 caracteres");
        checks.min_len(
            "contact",
            &self.contact,
            MIN_CONTACT_LENGTH,
            "Contato deve ter pelo menos 10 caracteres",
        );
        checks.min_len(
            "address",
            &self.address,
            MIN_ADDRESS_LENGTH,
            "Endereço deve ter pelo menos 5 caracteres",
        );

        checks.finish(|| Caregiver {
            cpf: self.cpf.clone(),
            name: self.name.clone(),
            contact: self.contact.clone(),
            address: self.address.clone(),
            email: self.email.clone().unwrap_or_default(),
            patients: Vec::new(),
        })
    }
}

/// Doctor form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, uniffi::Record)]
#[serde(default)]
pub struct DoctorForm {
    pub crm: String,
    pub name: String,
    pub specialty: String,
}

impl DoctorForm {
    pub fn validate(&self) -> ValidationResult<Doctor> {
        let mut checks = Checks::default();

        checks.non_empty("crm", &self.crm, "CRM é obrigatório");
        checks.min_len(
            "name",
            &self.name,
            MIN_DOCTOR_NAME_LENGTH,
            "Nome deve ter pelo menos 3 caracteres",
        );
        checks.non_empty("specialty", &self.specialty, "Especialidade é obrigatória");

        checks.finish(|| Doctor::new(self.crm.clone(), self.name.clone(), self.specialty.clone()))
    }
}

/// Medication form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, uniffi::Record)]
#[serde(default)]
pub struct MedicationForm {
    pub name: String,
    pub dosage: String,
    pub description: Option<String>,
}

impl MedicationForm {
    pub fn validate(&self) -> ValidationResult<Medication> {
        let mut checks = Checks::default();

        checks.min_len(
            "name",
            &self.name,
            MIN_MEDICATION_NAME_LENGTH,
            "Nome deve ter pelo menos 2 caracteres",
        );
        checks.non_empty("dosage", &self.dosage, "Dosagem é obrigatória");

        checks.finish(|| Medication {
            id: String::new(),
            name: self.name.clone(),
            dosage: self.dosage.clone(),
            description: self.description.clone().unwrap_or_default(),
        })
    }
}

/// Appointment form: the date and time are picked separately.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase", default)]
pub struct AppointmentForm {
    /// Calendar date (YYYY-MM-DD)
    pub date: Option<String>,
    /// Time of day (HH:MM)
    pub time: Option<String>,
    pub specialty: String,
    #[serde(rename = "doctorCRM")]
    pub doctor_crm: String,
    #[serde(rename = "patientCPF")]
    pub patient_cpf: String,
    #[serde(rename = "caregiverCPF")]
    pub caregiver_cpf: String,
    /// Replacement reminders; `None` keeps the existing ones on update
    pub reminders: Option<Vec<Reminder>>,
}

/// A validated appointment, before doctor/patient/caregiver snapshots are taken.
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDraft {
    /// Combined date and time (YYYY-MM-DDTHH:MM)
    pub date: String,
    pub specialty: String,
    pub doctor_crm: String,
    pub patient_cpf: String,
    pub caregiver_cpf: String,
    pub reminders: Option<Vec<Reminder>>,
}

impl AppointmentForm {
    pub fn validate(&self) -> ValidationResult<AppointmentDraft> {
        let mut checks = Checks::default();

        let date = checks
            .required("date", self.date.as_deref(), "Data é obrigatória")
            .and_then(|raw| {
                let parsed = parse_date(raw);
                if parsed.is_none() {
                    checks.push("date", "Data inválida");
                }
                parsed
            });
        let time = checks
            .required("time", self.time.as_deref(), "Hora é obrigatória")
            .and_then(|raw| {
                let parsed = parse_time(raw);
                if parsed.is_none() {
                    checks.push("time", "Hora deve estar no formato HH:MM");
                }
                parsed
            });
        checks.non_empty("specialty", &self.specialty, "Especialidade é obrigatória");
        checks.non_empty("doctorCRM", &self.doctor_crm, "Médico é obrigatório");
        checks.non_empty("patientCPF", &self.patient_cpf, "Paciente é obrigatório");
        checks.non_empty("caregiverCPF", &self.caregiver_cpf, "Cuidador é obrigatório");

        checks.finish(|| AppointmentDraft {
            date: match (date, time) {
                (Some(d), Some(t)) => NaiveDateTime::new(d, t).format(DATETIME_FORMAT).to_string(),
                _ => String::new(),
            },
            specialty: self.specialty.clone(),
            doctor_crm: self.doctor_crm.clone(),
            patient_cpf: self.patient_cpf.clone(),
            caregiver_cpf: self.caregiver_cpf.clone(),
            reminders: self.reminders.clone(),
        })
    }
}
