//! The check-in transition.
//!
//! Per record the state machine is `NotCheckedIn -> CheckedIn`, terminal.
//! A non-empty visit reason is a precondition of the transition; an
//! already-checked-in record is rejected, never overwritten.
//!
//! The service performs the whole find-then-mutate-then-save sequence
//! under one store lock guard, so two operators checking in the same
//! record race on the lock rather than on the record: the loser sees
//! `AlreadyCheckedIn`.

use crate::error::{FrontDeskError, FrontDeskResult};
use crate::record_id::RecordId;
use crate::store::{PatientStore, SharedPatientStore};
use chrono::{DateTime, Utc};
use frontdesk_types::NonEmptyText;
use std::sync::MutexGuard;

/// Outcome of a successful check-in, for the confirmation message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckInReceipt {
    pub record_id: RecordId,
    pub full_name: String,
    pub visit_reason: String,
    pub checked_in_at: DateTime<Utc>,
}

/// Service that applies the check-in transition against a shared store.
#[derive(Clone)]
pub struct CheckInService {
    store: SharedPatientStore,
}

impl CheckInService {
    /// Creates a service over the given store handle.
    pub fn new(store: SharedPatientStore) -> Self {
        Self { store }
    }

    /// Checks in the record with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::RecordNotFound`] if no record has this
    /// ID, or [`FrontDeskError::AlreadyCheckedIn`] if the record has
    /// already been checked in. The record is unchanged on error.
    pub fn check_in(
        &self,
        id: &RecordId,
        reason: &NonEmptyText,
    ) -> FrontDeskResult<CheckInReceipt> {
        let mut store = self.lock_store();
        Self::check_in_locked(&mut store, id, reason)
    }

    /// Quick check-in from a single free-text identifier.
    ///
    /// Trims the input, requires it to be a canonical record ID, and runs
    /// the same transition with the same reason precondition.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::InvalidInput`] for a non-canonical ID,
    /// plus every error [`check_in`](Self::check_in) can return.
    pub fn quick_check_in(
        &self,
        raw_id: &str,
        reason: &NonEmptyText,
    ) -> FrontDeskResult<CheckInReceipt> {
        let id = RecordId::parse(raw_id.trim())?;

        let mut store = self.lock_store();
        Self::check_in_locked(&mut store, &id, reason)
    }

    /// Applies the transition with the store lock already held.
    ///
    /// This is the one place the find-then-mutate sequence lives, so
    /// callers that already hold the guard (the session) share it.
    pub(crate) fn check_in_locked(
        store: &mut PatientStore,
        id: &RecordId,
        reason: &NonEmptyText,
    ) -> FrontDeskResult<CheckInReceipt> {
        let record = store
            .get_mut(id)
            .ok_or_else(|| FrontDeskError::RecordNotFound(id.to_string()))?;

        let now = Utc::now();
        record.check_in(reason, now)?;

        tracing::info!(record_id = %id, "check-in persisted");

        Ok(CheckInReceipt {
            record_id: record.id.clone(),
            full_name: record.full_name(),
            visit_reason: reason.as_str().to_owned(),
            checked_in_at: now,
        })
    }

    /// Acquires the store lock, recovering the guard if a previous holder
    /// panicked. Record state is always internally consistent because
    /// every mutation happens through a single `&mut` call.
    pub(crate) fn lock_store(&self) -> MutexGuard<'_, PatientStore> {
        self.store
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
