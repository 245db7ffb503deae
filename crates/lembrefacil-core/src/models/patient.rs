//! Patient models.

use serde::{Deserialize, Serialize};

use super::Disease;

/// A patient under the facility's care.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, uniffi::Record)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Generated identifier - empty until the record is created in a store
    pub id: String,
    /// CPF (Brazilian taxpayer number) - natural key
    pub cpf: String,
    /// Full name
    pub name: String,
    /// Date of birth (YYYY-MM-DD)
    pub date_of_birth: String,
    /// City of residence
    pub city: String,
    /// SUS (public health system) card number
    pub sus_card: String,
    /// Phone or other contact
    pub contact: String,
    /// Free-text medical history
    #[serde(default)]
    pub medical_history: String,
    /// Diagnosed diseases, copied by value from the disease catalog
    #[serde(default)]
    pub diseases: Vec<Disease>,
}

impl Patient {
    /// Iterate the CID codes of this patient's diseases.
    pub fn disease_cids(&self) -> impl Iterator<Item = &str> {
        self.diseases.iter().map(|d| d.cid.as_str())
    }

    /// Check whether the patient has a disease with the given CID.
    pub fn has_disease(&self, cid: &str) -> bool {
        self.disease_cids().any(|c| c == cid)
    }
}
