//! Pure create/update/delete operations over a collection.
//!
//! Each operation takes the current collection by reference and returns the
//! next version of it. The input is never modified, so a caller can preview a
//! result (e.g., behind a confirmation dialog) before committing it.

use super::{StoreError, StoreResult};
use crate::config::DuplicatePolicy;
use crate::models::{generate_id, Appointment, Caregiver, Disease, Doctor, Medication, Patient};

/// A record stored in a keyed collection.
pub trait Record: Clone {
    /// Entity name used in errors and logs.
    const ENTITY: &'static str;

    /// The key the record is located by (generated id or natural key).
    fn key(&self) -> &str;

    /// The domain-unique natural key (CPF, CRM, CID), if the entity has one.
    fn natural_key(&self) -> Option<&str>;

    /// Prepare a record for insertion (assign a generated id).
    fn on_create(&mut self) {}

    /// Build the stored record from the existing one and an update candidate.
    fn merge_update(_existing: &Self, candidate: Self) -> Self {
        candidate
    }
}

impl Record for Patient {
    const ENTITY: &'static str = "patient";

    fn key(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.cpf)
    }

    fn on_create(&mut self) {
        self.id = generate_id();
    }

    fn merge_update(existing: &Self, candidate: Self) -> Self {
        Self {
            id: existing.id.clone(),
            ..candidate
        }
    }
}

impl Record for Caregiver {
    const ENTITY: &'static str = "caregiver";

    fn key(&self) -> &str {
        &self.cpf
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.cpf)
    }

    /// The patient list is a relation, not form data: it survives updates.
    fn merge_update(existing: &Self, candidate: Self) -> Self {
        Self {
            patients: existing.patients.clone(),
            ..candidate
        }
    }
}

impl Record for Doctor {
    const ENTITY: &'static str = "doctor";

    fn key(&self) -> &str {
        &self.crm
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.crm)
    }
}

impl Record for Disease {
    const ENTITY: &'static str = "disease";

    fn key(&self) -> &str {
        &self.cid
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.cid)
    }
}

impl Record for Medication {
    const ENTITY: &'static str = "medication";

    fn key(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> Option<&str> {
        None
    }

    fn on_create(&mut self) {
        self.id = generate_id();
    }

    fn merge_update(existing: &Self, candidate: Self) -> Self {
        Self {
            id: existing.id.clone(),
            ..candidate
        }
    }
}

impl Record for Appointment {
    const ENTITY: &'static str = "appointment";

    fn key(&self) -> &str {
        &self.id
    }

    fn natural_key(&self) -> Option<&str> {
        None
    }

    fn on_create(&mut self) {
        self.id = generate_id();
    }

    /// Reminders come from the candidate as given; use
    /// `EntityStore::preview_appointment_update` to carry existing ones over.
    fn merge_update(existing: &Self, candidate: Self) -> Self {
        Self {
            id: existing.id.clone(),
            ..candidate
        }
    }
}

/// Append a new record.
///
/// Generated ids are assigned here. Under [`DuplicatePolicy::Reject`] a
/// record whose natural key is already present is refused.
pub fn create<R: Record>(records: &[R], mut record: R, policy: DuplicatePolicy) -> StoreResult<Vec<R>> {
    record.on_create();

    if policy == DuplicatePolicy::Reject {
        if let Some(natural_key) = record.natural_key() {
            if records.iter().any(|r| r.natural_key() == Some(natural_key)) {
                return Err(StoreError::DuplicateKey {
                    entity: R::ENTITY,
                    key: natural_key.to_string(),
                });
            }
        }
    }

    let mut next = Vec::with_capacity(records.len() + 1);
    next.extend_from_slice(records);
    next.push(record);
    Ok(next)
}

/// Replace the record(s) stored under `key` with the merged candidate.
///
/// An absent key is a no-op: the result equals the input. Under
/// [`DuplicatePolicy::Reject`] an update that would move a record onto the
/// natural key of a different record is refused.
pub fn update<R: Record>(
    records: &[R],
    key: &str,
    candidate: R,
    policy: DuplicatePolicy,
) -> StoreResult<Vec<R>> {
    let Some(existing) = records.iter().find(|r| r.key() == key) else {
        log::warn!("Update of missing {} {key} ignored", R::ENTITY);
        return Ok(records.to_vec());
    };
    let merged = R::merge_update(existing, candidate);

    if policy == DuplicatePolicy::Reject {
        if let Some(natural_key) = merged.natural_key() {
            let clash = records
                .iter()
                .filter(|r| r.key() != key)
                .any(|r| r.natural_key() == Some(natural_key));
            if clash {
                return Err(StoreError::DuplicateKey {
                    entity: R::ENTITY,
                    key: natural_key.to_string(),
                });
            }
        }
    }

    Ok(records
        .iter()
        .map(|r| if r.key() == key { merged.clone() } else { r.clone() })
        .collect())
}

/// Remove every record stored under `key`. An absent key is a no-op.
pub fn delete<R: Record>(records: &[R], key: &str) -> Vec<R> {
    records.iter().filter(|r| r.key() != key).cloned().collect()
}
