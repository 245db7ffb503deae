//! Catalog models: diseases and medications.

use serde::{Deserialize, Serialize};

/// A disease from the ICD (CID) catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, uniffi::Record)]
pub struct Disease {
    /// CID code (e.g., "E11") - natural key
    pub cid: String,
    pub name: String,
    pub description: String,
}

impl Disease {
    pub fn new(cid: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            cid: cid.into(),
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A medication in the facility's formulary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, uniffi::Record)]
pub struct Medication {
    /// Generated identifier - empty until the record is created in a store
    pub id: String,
    pub name: String,
    /// Dosage as written (e.g., "850mg")
    pub dosage: String,
    #[serde(default)]
    pub description: String,
}

impl Medication {
    /// Create an unsaved medication.
    pub fn new(name: impl Into<String>, dosage: impl Into<String>) -> Self {
        Self {
            id: String::new(),
            name: name.into(),
            dosage: dosage.into(),
            description: String::new(),
        }
    }
}

/// Find a disease in a catalog by CID.
pub fn find_disease<'a>(catalog: &'a [Disease], cid: &str) -> Option<&'a Disease> {
    catalog.iter().find(|d| d.cid == cid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_disease() {
        let catalog = vec![
            Disease::new("E11", "Diabetes Mellitus tipo 2", ""),
            Disease::new("I10", "Hipertensão Arterial Essencial", ""),
        ];

        assert_eq!(find_disease(&catalog, "I10").map(|d| d.name.as_str()), Some("Hipertensão Arterial Essencial"));
        assert!(find_disease(&catalog, "i10").is_none());
    }

    #[test]
    fn test_medication_description_optional() {
        let med: Medication = serde_json::from_str(r#"{"id":"1","name":"Metformina","dosage":"850mg"}"#).unwrap();
        assert_eq!(med.description, "");
    }
}
