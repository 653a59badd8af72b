//! # Front Desk Core
//!
//! Business logic for the HealthCare Pro front desk: patient records,
//! the in-memory store, search, selection, and the check-in transition.
//!
//! The store is constructed by the application entry point and shared as
//! a handle ([`SharedPatientStore`]); nothing in this crate reads
//! process-wide state. **No presentation concerns**: dialogs, widgets,
//! and rendering belong to whatever front end drives this crate — errors
//! come back as typed values and [`Alert`]s.

pub mod alert;
pub mod checkin;
pub mod error;
pub mod record;
pub mod record_id;
pub mod sample;
pub mod search;
pub mod session;
pub mod store;

pub use alert::{Alert, AlertSeverity};
pub use checkin::{CheckInReceipt, CheckInService};
pub use error::{FrontDeskError, FrontDeskResult};
pub use record::{
    ContactDetails, Insurance, MedicalHistory, NewPatient, PatientRecord, WALK_IN_APPOINTMENT,
};
pub use record_id::RecordId;
pub use sample::seed_sample_patients;
pub use search::SearchQuery;
pub use session::CheckInSession;
pub use store::{PatientStore, SharedPatientStore};
