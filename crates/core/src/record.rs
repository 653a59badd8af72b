//! The patient record and its check-in transition.
//!
//! A record is created by registration, mutated in place by check-in and
//! edits, and never deleted. `checked_in` moves from `false` to `true`
//! exactly once; there is no reverse transition.

use crate::error::{FrontDeskError, FrontDeskResult};
use crate::record_id::RecordId;
use chrono::{DateTime, NaiveDate, Utc};
use frontdesk_types::{EmailAddress, NonEmptyText};
use serde::{Deserialize, Serialize};

/// Appointment type written by the walk-in check-in path.
pub const WALK_IN_APPOINTMENT: &str = "Walk-in Check-in";

/// Contact details captured on the registration form. All optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactDetails {
    pub phone: Option<String>,
    pub email: Option<EmailAddress>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub emergency_contact: Option<String>,
    pub emergency_phone: Option<String>,
}

/// Insurance details captured on the registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insurance {
    pub provider: Option<String>,
    pub policy_number: Option<String>,
}

/// Free-text medical history lists.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalHistory {
    pub medications: Vec<String>,
    pub diagnoses: Vec<String>,
    pub allergies: Vec<String>,
}

/// Registration input for a new patient.
///
/// First and last name are required at the type level; everything else is
/// optional form data.
#[derive(Clone, Debug)]
pub struct NewPatient {
    pub first_name: NonEmptyText,
    pub last_name: NonEmptyText,
    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,
    pub contact: ContactDetails,
    pub insurance: Insurance,
    pub history: MedicalHistory,
}

impl NewPatient {
    /// Creates a registration input with the required fields and empty
    /// optional sections.
    pub fn new(first_name: NonEmptyText, last_name: NonEmptyText, date_of_birth: NaiveDate) -> Self {
        Self {
            first_name,
            last_name,
            date_of_birth,
            gender: None,
            contact: ContactDetails::default(),
            insurance: Insurance::default(),
            history: MedicalHistory::default(),
        }
    }
}

/// The demographic and visit-status data unit for one patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientRecord {
    /// Process-unique identifier, allocated at registration, immutable.
    pub id: RecordId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: Option<String>,
    pub contact: ContactDetails,
    pub insurance: Insurance,
    pub history: MedicalHistory,
    /// False until the one-way check-in transition runs.
    pub checked_in: bool,
    pub visit_reason: Option<String>,
    pub appointment_type: Option<String>,
    pub last_updated: DateTime<Utc>,
}

impl PatientRecord {
    /// Builds a record from registration input, allocating a fresh ID and
    /// stamping `last_updated`.
    pub fn register(input: NewPatient, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            first_name: input.first_name.as_str().to_owned(),
            last_name: input.last_name.as_str().to_owned(),
            date_of_birth: input.date_of_birth,
            gender: input.gender,
            contact: input.contact,
            insurance: input.insurance,
            history: input.history,
            checked_in: false,
            visit_reason: None,
            appointment_type: None,
            last_updated: now,
        }
    }

    /// Returns "first last", the name the desk searches against.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Case-insensitive substring match of `fragment` against the full name.
    pub fn matches_name(&self, fragment: &str) -> bool {
        self.full_name()
            .to_lowercase()
            .contains(&fragment.to_lowercase())
    }

    /// Marks the record checked in.
    ///
    /// Sets the visit reason, the walk-in appointment type, the
    /// `checked_in` flag, and stamps `last_updated`. The reason is
    /// required in the signature; an already-checked-in record is
    /// rejected and left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::AlreadyCheckedIn`] if the record has
    /// already been checked in.
    pub fn check_in(&mut self, reason: &NonEmptyText, now: DateTime<Utc>) -> FrontDeskResult<()> {
        if self.checked_in {
            return Err(FrontDeskError::AlreadyCheckedIn(self.full_name()));
        }

        self.visit_reason = Some(reason.as_str().to_owned());
        self.appointment_type = Some(WALK_IN_APPOINTMENT.to_owned());
        self.checked_in = true;
        self.last_updated = now;

        Ok(())
    }

    /// Renders the record as pretty-printed JSON for the summary view.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::SummaryRender`] if serialisation fails.
    pub fn summary(&self) -> FrontDeskResult<String> {
        serde_json::to_string_pretty(self).map_err(FrontDeskError::SummaryRender)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_record() -> PatientRecord {
        let input = NewPatient::new(
            NonEmptyText::new("John").unwrap(),
            NonEmptyText::new("Smith").unwrap(),
            NaiveDate::from_ymd_opt(1985, 3, 15).unwrap(),
        );
        PatientRecord::register(input, Utc::now())
    }

    #[test]
    fn register_allocates_id_and_starts_unchecked() {
        let record = test_record();

        assert!(RecordId::is_canonical(&record.id.to_string()));
        assert!(!record.checked_in);
        assert_eq!(record.visit_reason, None);
        assert_eq!(record.appointment_type, None);
        assert_eq!(record.full_name(), "John Smith");
    }

    #[test]
    fn matches_name_is_case_insensitive_substring() {
        let record = test_record();

        assert!(record.matches_name("smith"));
        assert!(record.matches_name("SMITH"));
        assert!(record.matches_name("ohn Sm"));
        assert!(!record.matches_name("Jones"));
    }

    #[test]
    fn check_in_sets_reason_flag_and_timestamp() {
        let mut record = test_record();
        let before = record.last_updated;
        let reason = NonEmptyText::new("Sore throat").unwrap();
        let now = Utc::now();

        record.check_in(&reason, now).expect("check-in should succeed");

        assert!(record.checked_in);
        assert_eq!(record.visit_reason.as_deref(), Some("Sore throat"));
        assert_eq!(record.appointment_type.as_deref(), Some(WALK_IN_APPOINTMENT));
        assert_eq!(record.last_updated, now);
        assert!(record.last_updated >= before);
    }

    #[test]
    fn second_check_in_is_rejected_and_leaves_record_unchanged() {
        let mut record = test_record();
        let first_reason = NonEmptyText::new("Sore throat").unwrap();
        record
            .check_in(&first_reason, Utc::now())
            .expect("first check-in should succeed");
        let snapshot = record.clone();

        let second_reason = NonEmptyText::new("Follow-up").unwrap();
        let err = record
            .check_in(&second_reason, Utc::now())
            .expect_err("second check-in should be rejected");

        assert!(matches!(err, FrontDeskError::AlreadyCheckedIn(_)));
        assert_eq!(record, snapshot, "rejected check-in must not mutate the record");
    }

    #[test]
    fn summary_renders_json_with_identity_fields() {
        let record = test_record();
        let summary = record.summary().expect("summary should render");

        assert!(summary.contains(&record.id.to_string()));
        assert!(summary.contains("\"first_name\": \"John\""));
        assert!(summary.contains("\"checked_in\": false"));
    }
}
