//! Patient search.
//!
//! A query carries an optional name fragment and an optional exact date
//! of birth. A query with neither is a user input error and is rejected
//! before the store is consulted. Matching records are returned in store
//! insertion order; there is no pagination and no ranking.

use crate::error::{FrontDeskError, FrontDeskResult};
use crate::record::PatientRecord;
use crate::record_id::RecordId;
use crate::store::PatientStore;
use chrono::NaiveDate;

/// A validated search query.
///
/// Construction rejects the empty query, so an executed search always
/// has at least one criterion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    name: Option<String>,
    date_of_birth: Option<NaiveDate>,
}

impl SearchQuery {
    /// Builds a query from raw form input.
    ///
    /// The name fragment is trimmed; a blank fragment counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::EmptyQuery`] if neither a name fragment
    /// nor a date of birth is supplied.
    pub fn new(
        name: Option<impl AsRef<str>>,
        date_of_birth: Option<NaiveDate>,
    ) -> FrontDeskResult<Self> {
        let name = name
            .map(|n| n.as_ref().trim().to_owned())
            .filter(|n| !n.is_empty());

        if name.is_none() && date_of_birth.is_none() {
            return Err(FrontDeskError::EmptyQuery);
        }

        Ok(Self {
            name,
            date_of_birth,
        })
    }

    /// The trimmed name fragment, if one was supplied.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The exact date of birth, if one was supplied.
    pub fn date_of_birth(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    /// True if `record` satisfies every supplied criterion.
    pub fn matches(&self, record: &PatientRecord) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .is_none_or(|fragment| record.matches_name(fragment));
        let dob_ok = self
            .date_of_birth
            .is_none_or(|dob| record.date_of_birth == dob);

        name_ok && dob_ok
    }
}

impl PatientStore {
    /// Runs a search, returning matching records in insertion order.
    pub fn search(&self, query: &SearchQuery) -> Vec<PatientRecord> {
        let results: Vec<PatientRecord> = self
            .iter()
            .filter(|record| query.matches(record))
            .cloned()
            .collect();

        tracing::info!(matches = results.len(), "patient search completed");
        results
    }

    /// Single-box lookup: try an exact record ID first, then fall back to
    /// a name search.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::EmptyQuery`] if `query` is blank.
    pub fn quick_lookup(&self, query: &str) -> FrontDeskResult<Vec<PatientRecord>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(FrontDeskError::EmptyQuery);
        }

        if RecordId::is_canonical(query) {
            let id = RecordId::parse(query)?;
            if let Some(record) = self.get(&id) {
                return Ok(vec![record.clone()]);
            }
        }

        Ok(self.search(&SearchQuery::new(Some(query), None)?))
    }
}
