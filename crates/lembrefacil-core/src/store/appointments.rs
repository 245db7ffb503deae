//! Appointment store operations.
//!
//! Appointments carry snapshots of the doctor, patient and caregiver names
//! taken when they are written. Later edits to those records do not flow into
//! existing appointments.

use super::{commit_create, commit_delete, commit_update, mutation, EntityStore, StoreResult};
use crate::models::{Appointment, Reminder};
use crate::validation::{AppointmentDraft, AppointmentForm};

impl EntityStore {
    /// Resolve a draft's references and copy the current names into it.
    fn snapshot(&self, draft: AppointmentDraft, reminders: Vec<Reminder>) -> Appointment {
        let doctor = self.get_doctor(&draft.doctor_crm);
        let patient = self.get_patient_by_cpf(&draft.patient_cpf);
        let caregiver = self.get_caregiver(&draft.caregiver_cpf);

        Appointment {
            id: String::new(),
            date: draft.date,
            specialty: draft.specialty,
            doctor_name: doctor.map(|d| d.name.clone()),
            doctor_specialty: doctor.map(|d| d.specialty.clone()),
            doctor_crm: draft.doctor_crm,
            patient_name: patient.map(|p| p.name.clone()),
            patient_cpf: draft.patient_cpf,
            caregiver_name: caregiver.map(|c| c.name.clone()),
            caregiver_cpf: draft.caregiver_cpf,
            reminders,
        }
    }

    /// Book a new appointment from a validated draft.
    pub fn create_appointment(&mut self, mut draft: AppointmentDraft) -> StoreResult<Appointment> {
        let reminders = draft.reminders.take().unwrap_or_default();
        let appointment = self.snapshot(draft, reminders);
        commit_create(&mut self.appointments, appointment, &self.config)
    }

    /// The stored form of an update to appointment `id`, or `None` if it does not exist.
    ///
    /// Existing reminders are kept unless the draft supplies replacements.
    fn update_candidate(&self, id: &str, mut draft: AppointmentDraft) -> Option<Appointment> {
        let existing = self.get_appointment(id)?;
        let reminders = draft
            .reminders
            .take()
            .unwrap_or_else(|| existing.reminders.clone());
        Some(self.snapshot(draft, reminders))
    }

    /// The appointment collection an update would produce, without committing it.
    pub fn preview_appointment_update(
        &self,
        id: &str,
        draft: AppointmentDraft,
    ) -> StoreResult<Vec<Appointment>> {
        match self.update_candidate(id, draft) {
            Some(candidate) => {
                mutation::update(&self.appointments, id, candidate, self.config.duplicate_policy)
            }
            None => {
                log::warn!("Update of missing appointment {id} ignored");
                Ok(self.appointments.clone())
            }
        }
    }

    /// Re-snapshot an existing appointment from a validated draft.
    ///
    /// Commits exactly what [`EntityStore::preview_appointment_update`] returns.
    pub fn update_appointment(
        &mut self,
        id: &str,
        draft: AppointmentDraft,
    ) -> StoreResult<Option<Appointment>> {
        let Some(candidate) = self.update_candidate(id, draft) else {
            log::warn!("Update of missing appointment {id} ignored");
            return Ok(None);
        };
        commit_update(&mut self.appointments, id, candidate, &self.config)
    }

    pub fn delete_appointment(&mut self, id: &str) -> bool {
        commit_delete(&mut self.appointments, id)
    }

    /// Validate an appointment form, then create (no id) or update (with id).
    pub fn save_appointment(
        &mut self,
        form: &AppointmentForm,
        id: Option<&str>,
    ) -> StoreResult<Option<Appointment>> {
        let draft = form.validate()?;
        match id {
            Some(id) => self.update_appointment(id, draft),
            None => self.create_appointment(draft).map(Some),
        }
    }

    pub fn get_appointment(&self, id: &str) -> Option<&Appointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Append a reminder to an appointment; returns false if it does not exist.
    pub fn add_reminder(&mut self, appointment_id: &str, reminder: Reminder) -> bool {
        match self.appointments.iter_mut().find(|a| a.id == appointment_id) {
            Some(appointment) => {
                log::debug!("Added reminder {} to appointment {appointment_id}", reminder.id);
                appointment.reminders.push(reminder);
                true
            }
            None => false,
        }
    }

    /// Remove a reminder from an appointment; returns whether it was there.
    pub fn remove_reminder(&mut self, appointment_id: &str, reminder_id: &str) -> bool {
        let Some(appointment) = self.appointments.iter_mut().find(|a| a.id == appointment_id) else {
            return false;
        };
        let before = appointment.reminders.len();
        appointment.reminders.retain(|r| r.id != reminder_id);
        appointment.reminders.len() != before
    }
}

#[cfg(test)]
mod tests {
    use crate::config::DashboardConfig;
    use crate::models::Reminder;
    use crate::store::EntityStore;
    use crate::validation::{AppointmentForm, DoctorForm};

    fn setup_store() -> EntityStore {
        EntityStore::seeded(DashboardConfig::default())
    }

    fn neurology_form() -> AppointmentForm {
        AppointmentForm {
            date: Some("2031-03-10".into()),
            time: Some("08:45".into()),
            specialty: "Neurologia".into(),
            doctor_crm: "CRM-23456".into(),
            patient_cpf: "345.678.901-00".into(),
            caregiver_cpf: "345.678.901-23".into(),
            reminders: None,
        }
    }

    #[test]
    fn test_create_takes_snapshots() {
        let mut store = setup_store();
        let appointment = store.save_appointment(&neurology_form(), None).unwrap().unwrap();

        assert_eq!(appointment.id.len(), 36);
        assert_eq!(appointment.date, "2031-03-10T08:45");
        assert_eq!(appointment.doctor_name.as_deref(), Some("Dra. Ana Oliveira"));
        assert_eq!(appointment.doctor_specialty.as_deref(), Some("Neurologia"));
        assert_eq!(appointment.patient_name.as_deref(), Some("Antônio Oliveira"));
        assert_eq!(appointment.caregiver_name.as_deref(), Some("Juliana Costa"));
        assert!(appointment.reminders.is_empty());
    }

    #[test]
    fn test_unknown_reference_leaves_snapshot_empty() {
        let mut store = setup_store();
        let form = AppointmentForm {
            doctor_crm: "CRM-00000".into(),
            ..neurology_form()
        };
        let appointment = store.save_appointment(&form, None).unwrap().unwrap();
        assert!(appointment.doctor_name.is_none());
        assert!(appointment.doctor_specialty.is_none());
        assert_eq!(appointment.patient_name.as_deref(), Some("Antônio Oliveira"));
    }

    #[test]
    fn test_snapshot_is_not_refreshed() {
        let mut store = setup_store();
        store
            .save_doctor(
                &DoctorForm {
                    crm: "CRM-12345".into(),
                    name: "Dr. Carlos Silva Neto".into(),
                    specialty: "Cardiologia".into(),
                },
                Some("CRM-12345"),
            )
            .unwrap();

        let appointment = store.get_appointment("1").unwrap();
        assert_eq!(appointment.doctor_name.as_deref(), Some("Dr. Carlos Silva"));
    }

    #[test]
    fn test_update_keeps_reminders_by_default() {
        let mut store = setup_store();
        let before = store.get_appointment("1").unwrap().reminders.clone();
        assert_eq!(before.len(), 2);

        let form = AppointmentForm {
            date: Some("2025-05-16".into()),
            time: Some("11:30".into()),
            specialty: "Cardiologia".into(),
            doctor_crm: "CRM-12345".into(),
            patient_cpf: "123.456.789-00".into(),
            caregiver_cpf: "123.456.789-01".into(),
            reminders: None,
        };
        let updated = store.save_appointment(&form, Some("1")).unwrap().unwrap();

        assert_eq!(updated.id, "1");
        assert_eq!(updated.date, "2025-05-16T11:30");
        assert_eq!(updated.reminders, before);
    }

    #[test]
    fn test_preview_update_matches_commit() {
        let mut store = setup_store();
        let form = AppointmentForm {
            date: Some("2025-05-16".into()),
            time: Some("11:30".into()),
            specialty: "Cardiologia".into(),
            doctor_crm: "CRM-12345".into(),
            patient_cpf: "123.456.789-00".into(),
            caregiver_cpf: "123.456.789-01".into(),
            reminders: None,
        };
        let draft = form.validate().unwrap();

        let before = store.appointments().to_vec();
        let preview = store.preview_appointment_update("1", draft.clone()).unwrap();
        assert_eq!(store.appointments(), before.as_slice());
        assert_eq!(preview[0].reminders.len(), 2);
        assert_eq!(preview[0].date, "2025-05-16T11:30");

        store.update_appointment("1", draft).unwrap();
        assert_eq!(store.appointments(), preview.as_slice());
    }

    #[test]
    fn test_preview_update_of_missing_appointment_is_unchanged() {
        let store = setup_store();
        let draft = neurology_form().validate().unwrap();
        let preview = store.preview_appointment_update("404", draft).unwrap();
        assert_eq!(preview.as_slice(), store.appointments());
    }

    #[test]
    fn test_update_replaces_reminders_when_supplied() {
        let mut store = setup_store();
        let reminder = Reminder::new("2025-05-15T08:00", "Consulta", "Única");
        let form = AppointmentForm {
            date: Some("2025-05-15".into()),
            time: Some("10:00".into()),
            specialty: "Cardiologia".into(),
            doctor_crm: "CRM-12345".into(),
            patient_cpf: "123.456.789-00".into(),
            caregiver_cpf: "123.456.789-01".into(),
            reminders: Some(vec![reminder.clone()]),
        };

        let updated = store.save_appointment(&form, Some("1")).unwrap().unwrap();
        assert_eq!(updated.reminders, vec![reminder]);

        let cleared = AppointmentForm {
            reminders: Some(vec![]),
            ..form
        };
        let updated = store.save_appointment(&cleared, Some("1")).unwrap().unwrap();
        assert!(updated.reminders.is_empty());
    }

    #[test]
    fn test_update_missing_appointment_is_noop() {
        let mut store = setup_store();
        let before = store.clone();
        assert!(store.save_appointment(&neurology_form(), Some("404")).unwrap().is_none());
        assert_eq!(store, before);
    }

    #[test]
    fn test_reminders() {
        let mut store = setup_store();
        let reminder = Reminder::new("2025-06-10T08:00", "Medicação", "Diária");
        let reminder_id = reminder.id.clone();

        assert!(store.add_reminder("5", reminder));
        assert!(store.get_appointment("5").unwrap().reminder(&reminder_id).is_some());
        assert!(store.remove_reminder("5", &reminder_id));
        assert!(!store.remove_reminder("5", &reminder_id));
        assert!(!store.add_reminder("404", Reminder::new("2025-06-10T08:00", "Exame", "Única")));
    }

    #[test]
    fn test_delete_appointment() {
        let mut store = setup_store();
        assert!(store.delete_appointment("2"));
        assert!(store.get_appointment("2").is_none());
        assert!(!store.delete_appointment("2"));
        assert_eq!(store.appointments().len(), 4);
    }
}
