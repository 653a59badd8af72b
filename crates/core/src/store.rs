//! The in-memory patient store.
//!
//! One store instance holds every [`PatientRecord`] for the lifetime of
//! the process. It is constructed explicitly by the application entry
//! point and passed down as a handle — there is no process-wide
//! singleton.
//!
//! Records keep their insertion order: search results and listings
//! iterate in the order patients were registered. Lookups by ID go
//! through a side index. Mutation is last-writer-wins; callers that need
//! a find-then-mutate sequence to be atomic must hold the
//! [`SharedPatientStore`] lock across the whole sequence (see
//! [`crate::checkin`]).

use crate::error::{FrontDeskError, FrontDeskResult};
use crate::record::{NewPatient, PatientRecord};
use crate::record_id::RecordId;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Handle to a store shared between front-desk components.
pub type SharedPatientStore = Arc<Mutex<PatientStore>>;

/// In-memory collection of patient records, addressable by ID.
#[derive(Debug, Default)]
pub struct PatientStore {
    records: Vec<PatientRecord>,
    index: HashMap<RecordId, usize>,
}

impl PatientStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps the store in the shared handle used across components.
    pub fn into_shared(self) -> SharedPatientStore {
        Arc::new(Mutex::new(self))
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no patients have been registered.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Registers a new patient and returns its allocated ID.
    ///
    /// Validation of required fields happened when the [`NewPatient`] was
    /// built; registration allocates the ID and stamps the record.
    pub fn register(&mut self, input: NewPatient) -> FrontDeskResult<RecordId> {
        let record = PatientRecord::register(input, Utc::now());
        let id = record.id.clone();
        self.insert(record)?;

        tracing::info!(record_id = %id, "registered patient");
        Ok(id)
    }

    /// Inserts a fully built record.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::DuplicateRecord`] if a record with the
    /// same ID is already present. The store is unchanged on error.
    pub fn insert(&mut self, record: PatientRecord) -> FrontDeskResult<()> {
        if self.index.contains_key(&record.id) {
            return Err(FrontDeskError::DuplicateRecord(record.id.to_string()));
        }

        self.index.insert(record.id.clone(), self.records.len());
        self.records.push(record);
        Ok(())
    }

    /// Looks up a record by ID.
    pub fn get(&self, id: &RecordId) -> Option<&PatientRecord> {
        self.index.get(id).map(|&pos| &self.records[pos])
    }

    /// Looks up a record by ID for in-place mutation.
    pub fn get_mut(&mut self, id: &RecordId) -> Option<&mut PatientRecord> {
        self.index.get(id).map(|&pos| &mut self.records[pos])
    }

    /// Iterates over all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &PatientRecord> {
        self.records.iter()
    }

    /// Returns a snapshot of all records in insertion order.
    pub fn all(&self) -> Vec<PatientRecord> {
        self.records.clone()
    }
}
