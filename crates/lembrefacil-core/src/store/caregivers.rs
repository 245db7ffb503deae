//! Caregiver store operations.

use super::{commit_create, commit_delete, commit_update, EntityStore, StoreResult};
use crate::models::{Caregiver, Patient};
use crate::validation::CaregiverForm;

impl EntityStore {
    /// Insert a new caregiver.
    pub fn create_caregiver(&mut self, caregiver: Caregiver) -> StoreResult<Caregiver> {
        commit_create(&mut self.caregivers, caregiver, &self.config)
    }

    /// Replace the caregiver stored under `cpf`, keeping its patient list.
    pub fn update_caregiver(&mut self, cpf: &str, caregiver: Caregiver) -> StoreResult<Option<Caregiver>> {
        commit_update(&mut self.caregivers, cpf, caregiver, &self.config)
    }

    pub fn delete_caregiver(&mut self, cpf: &str) -> bool {
        commit_delete(&mut self.caregivers, cpf)
    }

    /// Validate a caregiver form, then create (no key) or update (with key).
    pub fn save_caregiver(&mut self, form: &CaregiverForm, cpf: Option<&str>) -> StoreResult<Option<Caregiver>> {
        let caregiver = form.validate()?;
        match cpf {
            Some(cpf) => self.update_caregiver(cpf, caregiver),
            None => self.create_caregiver(caregiver).map(Some),
        }
    }

    pub fn get_caregiver(&self, cpf: &str) -> Option<&Caregiver> {
        self.caregivers.iter().find(|c| c.cpf == cpf)
    }

    /// Record that a caregiver looks after a patient.
    ///
    /// Returns false if the caregiver does not exist. Assigning twice is a
    /// no-op.
    pub fn assign_patient(&mut self, caregiver_cpf: &str, patient_cpf: &str) -> bool {
        let Some(caregiver) = self.caregivers.iter_mut().find(|c| c.cpf == caregiver_cpf) else {
            return false;
        };
        if !caregiver.cares_for(patient_cpf) {
            caregiver.patients.push(patient_cpf.to_string());
            log::debug!("Assigned patient {patient_cpf} to caregiver {caregiver_cpf}");
        }
        true
    }

    /// Remove a patient from a caregiver's list; returns whether it was there.
    pub fn unassign_patient(&mut self, caregiver_cpf: &str, patient_cpf: &str) -> bool {
        let Some(caregiver) = self.caregivers.iter_mut().find(|c| c.cpf == caregiver_cpf) else {
            return false;
        };
        let before = caregiver.patients.len();
        caregiver.patients.retain(|cpf| cpf != patient_cpf);
        caregiver.patients.len() != before
    }

    /// Patients assigned to a caregiver that still exist in the store.
    pub fn patients_for_caregiver(&self, cpf: &str) -> Vec<&Patient> {
        self.get_caregiver(cpf)
            .map(|caregiver| {
                caregiver
                    .patients
                    .iter()
                    .filter_map(|patient_cpf| self.get_patient_by_cpf(patient_cpf))
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DashboardConfig;
    use crate::store::{EntityStore, StoreError};
    use crate::validation::CaregiverForm;

    fn setup_store() -> EntityStore {
        EntityStore::seeded(DashboardConfig::default())
    }

    #[test]
    fn test_update_contact_preserves_patients() {
        let mut store = setup_store();
        let before = store.get_caregiver("123.456.789-01").unwrap().patients.clone();

        let form = CaregiverForm {
            cpf: "123.456.789-01".into(),
            name: "Fernanda Gomes".into(),
            contact: "(11) 91111-2222".into(),
            address: "Av. Paulista, 1000".into(),
            email: Some("fernanda@example.com".into()),
        };
        let updated = store
            .save_caregiver(&form, Some("123.456.789-01"))
            .unwrap()
            .unwrap();

        assert_eq!(updated.contact, "(11) 91111-2222");
        assert_eq!(updated.patients, before);
        assert_eq!(store.get_caregiver("123.456.789-01").unwrap().patients, before);
    }

    #[test]
    fn test_create_caregiver_starts_without_patients() {
        let mut store = setup_store();
        let form = CaregiverForm {
            cpf: "678.901.234-56".into(),
            name: "Paulo Nunes".into(),
            contact: "(11) 93210-9876".into(),
            address: "Rua Harmonia, 45".into(),
            email: None,
        };

        let created = store.save_caregiver(&form, None).unwrap().unwrap();
        assert!(created.patients.is_empty());
        assert_eq!(store.caregivers().len(), 6);

        let err = store.save_caregiver(&form, None).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateKey { entity: "caregiver", .. }));
    }

    #[test]
    fn test_assign_and_unassign_patient() {
        let mut store = setup_store();

        assert!(store.assign_patient("123.456.789-01", "234.567.890-00"));
        assert!(store.assign_patient("123.456.789-01", "234.567.890-00"));
        let names: Vec<&str> = store
            .patients_for_caregiver("123.456.789-01")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Maria da Silva", "João Santos"]);

        assert!(store.unassign_patient("123.456.789-01", "234.567.890-00"));
        assert!(!store.unassign_patient("123.456.789-01", "234.567.890-00"));
        assert!(!store.assign_patient("000.000.000-00", "234.567.890-00"));
    }

    #[test]
    fn test_patients_for_caregiver_skips_deleted_patients() {
        let mut store = setup_store();
        store.delete_patient("1");
        assert!(store.patients_for_caregiver("123.456.789-01").is_empty());
        assert!(store.patients_for_caregiver("unknown").is_empty());
    }

    #[test]
    fn test_delete_caregiver() {
        let mut store = setup_store();
        assert!(store.delete_caregiver("567.890.123-45"));
        assert!(store.get_caregiver("567.890.123-45").is_none());
        assert!(!store.delete_caregiver("567.890.123-45"));
    }
}
