//! Field descriptors for each entity table.

use serde::{Deserialize, Serialize};

use super::{FieldDescriptor, Tabular};
use crate::models::{Appointment, Caregiver, Doctor, Medication, Patient};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum PatientField {
    Name,
    Cpf,
    DateOfBirth,
    City,
    Contact,
    SusCard,
    MedicalHistory,
}

impl FieldDescriptor<Patient> for PatientField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Cpf,
        Self::DateOfBirth,
        Self::City,
        Self::Contact,
        Self::SusCard,
        Self::MedicalHistory,
    ];

    fn value(self, patient: &Patient) -> Option<&str> {
        Some(match self {
            Self::Name => patient.name.as_str(),
            Self::Cpf => patient.cpf.as_str(),
            Self::DateOfBirth => patient.date_of_birth.as_str(),
            Self::City => patient.city.as_str(),
            Self::Contact => patient.contact.as_str(),
            Self::SusCard => patient.sus_card.as_str(),
            Self::MedicalHistory => patient.medical_history.as_str(),
        })
    }

    fn sortable(self) -> bool {
        !matches!(self, Self::SusCard | Self::MedicalHistory)
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Cpf => "CPF",
            Self::DateOfBirth => "Data de Nascimento",
            Self::City => "Cidade",
            Self::Contact => "Contato",
            Self::SusCard => "Cartão SUS",
            Self::MedicalHistory => "Histórico Médico",
        }
    }
}

impl Tabular for Patient {
    type Field = PatientField;
    const SEARCH_FIELDS: &'static [PatientField] =
        &[PatientField::Name, PatientField::Cpf, PatientField::City];
    const DEFAULT_SORT: PatientField = PatientField::Name;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum DoctorField {
    Crm,
    Name,
    Specialty,
}

impl FieldDescriptor<Doctor> for DoctorField {
    const ALL: &'static [Self] = &[Self::Crm, Self::Name, Self::Specialty];

    fn value(self, doctor: &Doctor) -> Option<&str> {
        Some(match self {
            Self::Crm => doctor.crm.as_str(),
            Self::Name => doctor.name.as_str(),
            Self::Specialty => doctor.specialty.as_str(),
        })
    }

    fn sortable(self) -> bool {
        true
    }

    fn label(self) -> &'static str {
        match self {
            Self::Crm => "CRM",
            Self::Name => "Nome",
            Self::Specialty => "Especialidade",
        }
    }
}

impl Tabular for Doctor {
    type Field = DoctorField;
    const SEARCH_FIELDS: &'static [DoctorField] = <DoctorField as FieldDescriptor<Doctor>>::ALL;
    const DEFAULT_SORT: DoctorField = DoctorField::Name;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum CaregiverField {
    Name,
    Cpf,
    Email,
    Contact,
    Address,
}

impl FieldDescriptor<Caregiver> for CaregiverField {
    const ALL: &'static [Self] = &[
        Self::Name,
        Self::Cpf,
        Self::Email,
        Self::Contact,
        Self::Address,
    ];

    fn value(self, caregiver: &Caregiver) -> Option<&str> {
        Some(match self {
            Self::Name => caregiver.name.as_str(),
            Self::Cpf => caregiver.cpf.as_str(),
            Self::Email => caregiver.email.as_str(),
            Self::Contact => caregiver.contact.as_str(),
            Self::Address => caregiver.address.as_str(),
        })
    }

    fn sortable(self) -> bool {
        true
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Cpf => "CPF",
            Self::Email => "Email",
            Self::Contact => "Contato",
            Self::Address => "Endereço",
        }
    }
}

impl Tabular for Caregiver {
    type Field = CaregiverField;
    const SEARCH_FIELDS: &'static [CaregiverField] = <CaregiverField as FieldDescriptor<Caregiver>>::ALL;
    const DEFAULT_SORT: CaregiverField = CaregiverField::Name;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum MedicationField {
    Name,
    Dosage,
    Description,
}

impl FieldDescriptor<Medication> for MedicationField {
    const ALL: &'static [Self] = &[Self::Name, Self::Dosage, Self::Description];

    fn value(self, medication: &Medication) -> Option<&str> {
        Some(match self {
            Self::Name => medication.name.as_str(),
            Self::Dosage => medication.dosage.as_str(),
            Self::Description => medication.description.as_str(),
        })
    }

    fn sortable(self) -> bool {
        true
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Nome",
            Self::Dosage => "Dosagem",
            Self::Description => "Descrição",
        }
    }
}

impl Tabular for Medication {
    type Field = MedicationField;
    const SEARCH_FIELDS: &'static [MedicationField] = &[
        MedicationField::Name,
        MedicationField::Description,
        MedicationField::Dosage,
    ];
    const DEFAULT_SORT: MedicationField = MedicationField::Name;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, uniffi::Enum)]
#[serde(rename_all = "camelCase")]
pub enum AppointmentField {
    Date,
    Specialty,
    PatientName,
    DoctorName,
    CaregiverName,
    DoctorCrm,
    PatientCpf,
    CaregiverCpf,
}

impl FieldDescriptor<Appointment> for AppointmentField {
    const ALL: &'static [Self] = &[
        Self::Date,
        Self::Specialty,
        Self::PatientName,
        Self::DoctorName,
        Self::CaregiverName,
        Self::DoctorCrm,
        Self::PatientCpf,
        Self::CaregiverCpf,
    ];

    fn value(self, appointment: &Appointment) -> Option<&str> {
        match self {
            Self::Date => Some(appointment.date.as_str()),
            Self::Specialty => Some(appointment.specialty.as_str()),
            Self::PatientName => appointment.patient_name.as_deref(),
            Self::DoctorName => appointment.doctor_name.as_deref(),
            Self::CaregiverName => appointment.caregiver_name.as_deref(),
            Self::DoctorCrm => Some(appointment.doctor_crm.as_str()),
            Self::PatientCpf => Some(appointment.patient_cpf.as_str()),
            Self::CaregiverCpf => Some(appointment.caregiver_cpf.as_str()),
        }
    }

    fn sortable(self) -> bool {
        !matches!(self, Self::DoctorCrm | Self::PatientCpf | Self::CaregiverCpf)
    }

    fn label(self) -> &'static str {
        match self {
            Self::Date => "Data",
            Self::Specialty => "Especialidade",
            Self::PatientName => "Paciente",
            Self::DoctorName => "Médico",
            Self::CaregiverName => "Cuidador",
            Self::DoctorCrm => "CRM",
            Self::PatientCpf => "CPF do Paciente",
            Self::CaregiverCpf => "CPF do Cuidador",
        }
    }
}

impl Tabular for Appointment {
    type Field = AppointmentField;
    const SEARCH_FIELDS: &'static [AppointmentField] = &[
        AppointmentField::PatientName,
        AppointmentField::Specialty,
        AppointmentField::DoctorName,
    ];
    const DEFAULT_SORT: AppointmentField = AppointmentField::Date;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_fields_exist_in_all() {
        fn check<T: Tabular>() {
            for field in T::SEARCH_FIELDS {
                assert!(<T::Field as FieldDescriptor<T>>::ALL.contains(field), "{field:?} not in ALL");
            }
            assert!(T::DEFAULT_SORT.sortable());
        }
        check::<Patient>();
        check::<Doctor>();
        check::<Caregiver>();
        check::<Medication>();
        check::<Appointment>();
    }

    #[test]
    fn test_appointment_optional_snapshot_fields() {
        let appointment = Appointment {
            id: "1".into(),
            date: "2025-05-15T10:00".into(),
            specialty: "Cardiologia".into(),
            doctor_crm: "CRM-12345".into(),
            doctor_name: None,
            doctor_specialty: None,
            patient_cpf: "1".into(),
            patient_name: Some("Maria".into()),
            caregiver_cpf: "2".into(),
            caregiver_name: None,
            reminders: vec![],
        };
        assert_eq!(AppointmentField::DoctorName.value(&appointment), None);
        assert_eq!(AppointmentField::PatientName.value(&appointment), Some("Maria"));
        assert!(!AppointmentField::PatientCpf.sortable());
    }
}
