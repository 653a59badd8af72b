//! The front-desk check-in session.
//!
//! One session drives the search -> select -> check-in flow for one
//! operator interaction: search results replace any previous results and
//! clear the selection, a selection must come from the current results,
//! and check-in requires a selection. After a successful check-in the
//! session resets, ready for the next patient.

use crate::checkin::{CheckInReceipt, CheckInService};
use crate::error::{FrontDeskError, FrontDeskResult};
use crate::record::PatientRecord;
use crate::record_id::RecordId;
use crate::search::SearchQuery;
use crate::store::SharedPatientStore;
use frontdesk_types::NonEmptyText;

/// State machine for one operator's search-and-check-in flow.
pub struct CheckInSession {
    service: CheckInService,
    results: Vec<PatientRecord>,
    selected: Option<RecordId>,
}

impl CheckInSession {
    /// Creates a session over the given store handle.
    pub fn new(store: SharedPatientStore) -> Self {
        Self {
            service: CheckInService::new(store),
            results: Vec::new(),
            selected: None,
        }
    }

    /// Runs a search and replaces the session's result list.
    ///
    /// Any previous selection is cleared: the operator must pick from the
    /// fresh results.
    pub fn search(&mut self, query: &SearchQuery) -> &[PatientRecord] {
        self.results = self.service.lock_store().search(query);
        self.selected = None;
        &self.results
    }

    /// The current result list, in store insertion order.
    pub fn results(&self) -> &[PatientRecord] {
        &self.results
    }

    /// Selects one record from the current results.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::SelectionOutsideResults`] if `id` is not
    /// a member of the current result list.
    pub fn select(&mut self, id: &RecordId) -> FrontDeskResult<&PatientRecord> {
        let record = self
            .results
            .iter()
            .find(|record| &record.id == id)
            .ok_or_else(|| FrontDeskError::SelectionOutsideResults(id.to_string()))?;

        self.selected = Some(id.clone());
        Ok(record)
    }

    /// The currently selected record, if any.
    pub fn selected(&self) -> Option<&PatientRecord> {
        let id = self.selected.as_ref()?;
        self.results.iter().find(|record| &record.id == id)
    }

    /// Checks in the selected record and resets the session.
    ///
    /// The transition runs against the live store, so a record that was
    /// checked in by another operator since the search is still rejected.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::NoSelection`] if nothing is selected,
    /// plus every error the check-in transition can produce. The session
    /// keeps its results and selection on error so the operator can
    /// correct the input and retry.
    pub fn check_in(&mut self, reason: &NonEmptyText) -> FrontDeskResult<CheckInReceipt> {
        let id = self.selected.clone().ok_or(FrontDeskError::NoSelection)?;

        let receipt = self.service.check_in(&id, reason)?;

        self.results.clear();
        self.selected = None;
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::NewPatient;
    use crate::store::PatientStore;
    use chrono::NaiveDate;

    fn seeded_session() -> CheckInSession {
        let mut store = PatientStore::new();
        let patients = [
            ("John", "Smith", (1985, 3, 15)),
            ("Mary", "Johnson", (1972, 8, 22)),
        ];
        for (first, last, (y, m, d)) in patients {
            store
                .register(NewPatient::new(
                    NonEmptyText::new(first).unwrap(),
                    NonEmptyText::new(last).unwrap(),
                    NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                ))
                .expect("registration should succeed");
        }
        CheckInSession::new(store.into_shared())
    }

    fn smith_query() -> SearchQuery {
        SearchQuery::new(Some("Smith"), None).expect("query should build")
    }

    #[test]
    fn full_flow_search_select_check_in() {
        let mut session = seeded_session();

        let results = session.search(&smith_query());
        assert_eq!(results.len(), 1);
        let id = results[0].id.clone();

        let selected = session.select(&id).expect("selection should succeed");
        assert_eq!(selected.full_name(), "John Smith");

        let reason = NonEmptyText::new("Flu symptoms").unwrap();
        let receipt = session.check_in(&reason).expect("check-in should succeed");

        assert_eq!(receipt.full_name, "John Smith");
        assert!(session.results().is_empty(), "session resets after check-in");
        assert!(session.selected().is_none());
    }

    #[test]
    fn selecting_outside_results_is_rejected() {
        let mut session = seeded_session();
        session.search(&smith_query());

        let err = session
            .select(&RecordId::new())
            .expect_err("selection outside results should be rejected");

        assert!(matches!(err, FrontDeskError::SelectionOutsideResults(_)));
        assert!(session.selected().is_none());
    }

    #[test]
    fn check_in_without_selection_is_rejected() {
        let mut session = seeded_session();
        session.search(&smith_query());

        let reason = NonEmptyText::new("Flu symptoms").unwrap();
        let err = session
            .check_in(&reason)
            .expect_err("check-in without selection should be rejected");

        assert!(matches!(err, FrontDeskError::NoSelection));
    }

    #[test]
    fn new_search_clears_previous_selection() {
        let mut session = seeded_session();

        let id = session.search(&smith_query())[0].id.clone();
        session.select(&id).expect("selection should succeed");
        assert!(session.selected().is_some());

        let johnson = SearchQuery::new(Some("Johnson"), None).expect("query should build");
        session.search(&johnson);

        assert!(session.selected().is_none(), "search must clear selection");
    }

    #[test]
    fn failed_check_in_keeps_session_state() {
        let mut session = seeded_session();
        let id = session.search(&smith_query())[0].id.clone();
        session.select(&id).expect("selection should succeed");

        let reason = NonEmptyText::new("Flu symptoms").unwrap();
        session.check_in(&reason).expect("first check-in succeeds");

        // Search again and try to re-check-in the same patient.
        let id = session.search(&smith_query())[0].id.clone();
        session.select(&id).expect("selection should succeed");
        let err = session
            .check_in(&reason)
            .expect_err("re-check-in should be rejected");

        assert!(matches!(err, FrontDeskError::AlreadyCheckedIn(_)));
        assert_eq!(
            session.results().len(),
            1,
            "results survive a failed check-in"
        );
        assert!(session.selected().is_some());
    }
}
