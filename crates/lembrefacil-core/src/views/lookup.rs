//! Lookups backing the appointment and patient forms.

use crate::models::{find_disease, Disease, Doctor};

/// Doctors whose specialty equals `specialty` exactly; all doctors when empty.
pub fn doctors_by_specialty<'a>(doctors: &'a [Doctor], specialty: &str) -> Vec<&'a Doctor> {
    doctors
        .iter()
        .filter(|d| specialty.is_empty() || d.specialty == specialty)
        .collect()
}

/// Distinct specialties in order of first appearance.
pub fn specialties(doctors: &[Doctor]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for doctor in doctors {
        if !seen.contains(&doctor.specialty.as_str()) {
            seen.push(&doctor.specialty);
        }
    }
    seen
}

/// Add the catalog disease `cid` to `selected`, or remove it if already there.
///
/// A CID missing from the catalog leaves the selection unchanged.
pub fn toggle_disease(selected: &[Disease], cid: &str, catalog: &[Disease]) -> Vec<Disease> {
    if selected.iter().any(|d| d.cid == cid) {
        return selected.iter().filter(|d| d.cid != cid).cloned().collect();
    }
    let mut next = selected.to_vec();
    match find_disease(catalog, cid) {
        Some(disease) => next.push(disease.clone()),
        None => log::warn!("Unknown disease CID {cid} not selected"),
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{seed_diseases, seed_doctors};

    #[test]
    fn test_doctors_by_specialty() {
        let mut doctors = seed_doctors();
        doctors.push(Doctor::new("CRM-99999", "Dra. Helena Prado", "Cardiologia"));

        let crms: Vec<&str> = doctors_by_specialty(&doctors, "Cardiologia")
            .iter()
            .map(|d| d.crm.as_str())
            .collect();
        assert_eq!(crms, vec!["CRM-12345", "CRM-99999"]);

        // Exact match only
        assert!(doctors_by_specialty(&doctors, "cardiologia").is_empty());
        assert_eq!(doctors_by_specialty(&doctors, "").len(), 6);
    }

    #[test]
    fn test_specialties_first_appearance_order() {
        let mut doctors = seed_doctors();
        doctors.insert(0, Doctor::new("CRM-1", "Dr. Teste", "Ortopedia"));
        assert_eq!(
            specialties(&doctors),
            vec!["Ortopedia", "Cardiologia", "Neurologia", "Geriatria", "Psiquiatria"]
        );
    }

    #[test]
    fn test_toggle_disease() {
        let catalog = seed_diseases();

        let selected = toggle_disease(&[], "I10", &catalog);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].name, "Hipertensão Arterial Essencial");

        let selected = toggle_disease(&selected, "J44", &catalog);
        let cids: Vec<&str> = selected.iter().map(|d| d.cid.as_str()).collect();
        assert_eq!(cids, vec!["I10", "J44"]);

        let selected = toggle_disease(&selected, "I10", &catalog);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].cid, "J44");
    }

    #[test]
    fn test_toggle_unknown_cid() {
        let catalog = seed_diseases();
        let selected = toggle_disease(&[], "Z99", &catalog);
        assert!(selected.is_empty());
    }
}
