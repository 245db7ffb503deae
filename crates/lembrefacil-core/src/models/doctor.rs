//! Doctor models.

use serde::{Deserialize, Serialize};

/// A doctor registered with the facility.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, uniffi::Record)]
pub struct Doctor {
    /// CRM (medical council registration) - natural key
    pub crm: String,
    pub name: String,
    /// Medical specialty (e.g., "Cardiologia")
    pub specialty: String,
}

impl Doctor {
    pub fn new(crm: impl Into<String>, name: impl Into<String>, specialty: impl Into<String>) -> Self {
        Self {
            crm: crm.into(),
            name: name.into(),
            specialty: specialty.into(),
        }
    }
}
