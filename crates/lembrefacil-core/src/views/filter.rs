//! Case-insensitive text search over an entity's searchable fields.

use super::{FieldDescriptor, Tabular};

/// Check whether any searchable field of `record` contains `term`,
/// ignoring case. An empty term matches every record.
pub fn matches_search<T: Tabular>(record: &T, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    T::SEARCH_FIELDS.iter().any(|field| {
        field
            .value(record)
            .is_some_and(|value| value.to_lowercase().contains(&needle))
    })
}

/// Records matching `term`, in their original order.
pub fn filter_by_text<'a, T: Tabular>(records: &'a [T], term: &str) -> Vec<&'a T> {
    records.iter().filter(|r| matches_search(*r, term)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DashboardConfig;
    use crate::store::EntityStore;

    #[test]
    fn test_patient_search_is_case_insensitive() {
        let store = EntityStore::seeded(DashboardConfig::default());

        let names: Vec<&str> = filter_by_text(store.patients(), "SÃO paulo")
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Maria da Silva"]);

        // Name or city
        assert_eq!(filter_by_text(store.patients(), "santos").len(), 1);
        // CPF
        assert_eq!(filter_by_text(store.patients(), "345.678").len(), 1);
    }

    #[test]
    fn test_non_searchable_fields_ignored() {
        let store = EntityStore::seeded(DashboardConfig::default());
        // Only present in contact, which is not searchable for patients
        assert!(filter_by_text(store.patients(), "98888").is_empty());
    }

    #[test]
    fn test_appointment_search() {
        let store = EntityStore::seeded(DashboardConfig::default());

        let by_doctor = filter_by_text(store.appointments(), "ana oliveira");
        assert_eq!(by_doctor.len(), 1);
        assert_eq!(by_doctor[0].id, "2");

        let by_specialty = filter_by_text(store.appointments(), "orto");
        assert_eq!(by_specialty[0].patient_name.as_deref(), Some("José Lima"));

        // Caregiver names are not searchable on appointments
        assert!(filter_by_text(store.appointments(), "Fernanda").is_empty());
    }

    #[test]
    fn test_empty_term_keeps_everything() {
        let store = EntityStore::seeded(DashboardConfig::default());
        assert_eq!(filter_by_text(store.medications(), "").len(), 10);
    }

    #[test]
    fn test_medication_search_by_description() {
        let store = EntityStore::seeded(DashboardConfig::default());
        let names: Vec<&str> = filter_by_text(store.medications(), "antidepressivo")
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Sertralina", "Fluoxetina"]);
    }
}
