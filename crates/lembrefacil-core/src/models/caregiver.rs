//! Caregiver models.

use serde::{Deserialize, Serialize};

/// A caregiver responsible for one or more patients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, uniffi::Record)]
pub struct Caregiver {
    /// CPF - natural key
    pub cpf: String,
    pub name: String,
    pub contact: String,
    pub address: String,
    #[serde(default)]
    pub email: String,
    /// CPFs of the patients this caregiver looks after.
    ///
    /// Weak back-reference maintained by the caller: deleting a patient does
    /// not remove it from this list.
    #[serde(default)]
    pub patients: Vec<String>,
}

impl Caregiver {
    /// Check if this caregiver is assigned to the patient with the given CPF.
    pub fn cares_for(&self, patient_cpf: &str) -> bool {
        self.patients.iter().any(|cpf| cpf == patient_cpf)
    }
}
