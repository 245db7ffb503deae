//! Fixed sample data loaded into a seeded store.

use crate::models::{Appointment, Caregiver, Disease, Doctor, Medication, Patient, Reminder};

pub fn seed_diseases() -> Vec<Disease> {
    vec![
        Disease::new("E11", "Diabetes Mellitus tipo 2", "Doença metabólica caracterizada por hiperglicemia"),
        Disease::new("I10", "Hipertensão Arterial Essencial", "Pressão arterial elevada sem causa identificável"),
        Disease::new("J44", "DPOC", "Doença Pulmonar Obstrutiva Crônica"),
        Disease::new("G30", "Doença de Alzheimer", "Doença neurodegenerativa progressiva"),
        Disease::new("M17", "Artrose de joelho", "Desgaste da cartilagem articular do joelho"),
        Disease::new("F32", "Transtorno depressivo", "Episódio depressivo"),
        Disease::new(
            "F41",
            "Transtorno de ansiedade",
            "Inclui transtorno de pânico, fobias e ansiedade generalizada",
        ),
    ]
}

pub fn seed_medications() -> Vec<Medication> {
    [
        ("1", "Metformina", "850mg", "Para controle da glicemia"),
        ("2", "Losartana", "50mg", "Anti-hipertensivo"),
        ("3", "Atenolol", "25mg", "Beta-bloqueador para controle da pressão arterial"),
        ("4", "Salmeterol", "50mcg", "Broncodilatador para DPOC"),
        ("5", "Donepezila", "10mg", "Para tratamento de Alzheimer"),
        ("6", "Paracetamol", "750mg", "Analgésico e antitérmico"),
        ("7", "Ibuprofeno", "600mg", "Anti-inflamatório"),
        ("8", "Sertralina", "50mg", "Antidepressivo"),
        ("9", "Fluoxetina", "20mg", "Antidepressivo ISRS"),
        ("10", "Omeprazol", "20mg", "Protetor gástrico"),
    ]
    .into_iter()
    .map(|(id, name, dosage, description)| Medication {
        id: id.into(),
        name: name.into(),
        dosage: dosage.into(),
        description: description.into(),
    })
    .collect()
}

pub fn seed_doctors() -> Vec<Doctor> {
    vec![
        Doctor::new("CRM-12345", "Dr. Carlos Silva", "Cardiologia"),
        Doctor::new("CRM-23456", "Dra. Ana Oliveira", "Neurologia"),
        Doctor::new("CRM-34567", "Dr. Roberto Santos", "Geriatria"),
        Doctor::new("CRM-45678", "Dra. Patrícia Lima", "Psiquiatria"),
        Doctor::new("CRM-56789", "Dr. Marcos Almeida", "Ortopedia"),
    ]
}

/// Caregivers, each assigned to the patient at the same position.
pub fn seed_caregivers(patients: &[Patient]) -> Vec<Caregiver> {
    [
        ("123.456.789-01", "Fernanda Gomes", "(11) 98765-4321", "Av. Paulista, 1000"),
        ("234.567.890-12", "Ricardo Ferreira", "(11) 97654-3210", "Rua Augusta, 500"),
        ("345.678.901-23", "Juliana Costa", "(11) 96543-2109", "Rua Oscar Freire, 200"),
        ("456.789.012-34", "Antônio Pereira", "(11) 95432-1098", "Av. Brigadeiro Faria Lima, 1500"),
        ("567.890.123-45", "Mariana Souza", "(11) 94321-0987", "Rua dos Pinheiros, 300"),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (cpf, name, contact, address))| Caregiver {
        cpf: cpf.into(),
        name: name.into(),
        contact: contact.into(),
        address: address.into(),
        email: String::new(),
        patients: patients.get(i).map(|p| vec![p.cpf.clone()]).unwrap_or_default(),
    })
    .collect()
}

fn seed_reminders() -> Vec<Reminder> {
    [
        ("1", "2025-05-01T08:30", "Medicação", "Diária", "Tomar com água"),
        ("2", "2025-05-02T15:00", "Consulta", "Única", "Levar exames"),
        ("3", "2025-05-03T10:00", "Exame", "Única", "Jejum de 8 horas"),
        ("4", "2025-05-04T12:00", "Medicação", "Semanal", "Tomar após almoço"),
        ("5", "2025-05-05T18:00", "Fisioterapia", "Semanal", "Exercícios para joelho"),
    ]
    .into_iter()
    .map(|(id, date_time, kind, frequency, observation)| Reminder {
        id: id.into(),
        date_time: date_time.into(),
        kind: kind.into(),
        frequency: frequency.into(),
        observation: Some(observation.into()),
        medication_ids: Vec::new(),
    })
    .collect()
}

/// Appointments pairing the doctor, patient and caregiver at the same position.
pub fn seed_appointments() -> Vec<Appointment> {
    let patients = seed_patients();
    let doctors = seed_doctors();
    let caregivers = seed_caregivers(&patients);
    let reminders = seed_reminders();

    let schedule: [(&str, &[usize]); 5] = [
        ("2025-05-15T10:00", &[0, 3]),
        ("2025-05-20T14:30", &[1]),
        ("2025-05-25T09:15", &[2]),
        ("2025-06-02T11:00", &[4]),
        ("2025-06-10T16:45", &[]),
    ];

    schedule
        .iter()
        .zip(doctors.iter().zip(patients.iter().zip(caregivers.iter())))
        .enumerate()
        .map(|(i, ((date, picks), (doctor, (patient, caregiver))))| Appointment {
            id: (i + 1).to_string(),
            date: date.to_string(),
            specialty: doctor.specialty.clone(),
            doctor_crm: doctor.crm.clone(),
            doctor_name: Some(doctor.name.clone()),
            doctor_specialty: Some(doctor.specialty.clone()),
            patient_cpf: patient.cpf.clone(),
            patient_name: Some(patient.name.clone()),
            caregiver_cpf: caregiver.cpf.clone(),
            caregiver_name: Some(caregiver.name.clone()),
            reminders: picks.iter().filter_map(|&r| reminders.get(r).cloned()).collect(),
        })
        .collect()
}

pub fn seed_patients() -> Vec<Patient> {
    let diseases = seed_diseases();
    let by_cid = |cids: &[&str]| -> Vec<Disease> {
        cids.iter()
            .filter_map(|cid| diseases.iter().find(|d| d.cid == *cid).cloned())
            .collect()
    };

    vec![
        Patient {
            id: "1".into(),
            cpf: "123.456.789-00".into(),
            name: "Maria da Silva".into(),
            date_of_birth: "1940-06-15".into(),
            city: "São Paulo".into(),
            sus_card: "123456789012345".into(),
            contact: "(11) 98888-7777".into(),
            medical_history: "Histórico de hipertensão e diabetes".into(),
            diseases: by_cid(&["E11", "I10"]),
        },
        Patient {
            id: "2".into(),
            cpf: "234.567.890-00".into(),
            name: "João Santos".into(),
            date_of_birth: "1935-03-22".into(),
            city: "Rio de Janeiro".into(),
            sus_card: "234567890123456".into(),
            contact: "(21) 97777-6666".into(),
            medical_history: "Doença de Alzheimer em estágio inicial, hipertensão".into(),
            diseases: by_cid(&["I10", "G30"]),
        },
        Patient {
            id: "3".into(),
            cpf: "345.678.901-00".into(),
            name: "Antônio Oliveira".into(),
            date_of_birth: "1942-11-10".into(),
            city: "Belo Horizonte".into(),
            sus_card: "345678901234567".into(),
            contact: "(31) 96666-5555".into(),
            medical_history: "DPOC, ex-fumante, histórico de pneumonia".into(),
            diseases: by_cid(&["J44"]),
        },
        Patient {
            id: "4".into(),
            cpf: "456.789.012-00".into(),
            name: "Margarida Pereira".into(),
            date_of_birth: "1938-09-05".into(),
            city: "Porto Alegre".into(),
            sus_card: "456789012345678".into(),
            contact: "(51) 95555-4444".into(),
            medical_history: "Depressão, ansiedade, artrose".into(),
            diseases: by_cid(&["M17", "F32", "F41"]),
        },
        Patient {
            id: "5".into(),
            cpf: "567.890.123-00".into(),
            name: "José Lima".into(),
            date_of_birth: "1945-05-20".into(),
            city: "Salvador".into(),
            sus_card: "567890123456789".into(),
            contact: "(71) 94444-3333".into(),
            medical_history: "Artrose de joelho bilateral, hipertensão controlada".into(),
            diseases: by_cid(&["I10", "M17"]),
        },
    ]
}
