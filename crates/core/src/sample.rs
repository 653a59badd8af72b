//! Demo patients for walkthroughs and tests.

use crate::error::{FrontDeskError, FrontDeskResult};
use crate::record::{ContactDetails, Insurance, NewPatient};
use crate::record_id::RecordId;
use crate::store::PatientStore;
use chrono::NaiveDate;
use frontdesk_types::{EmailAddress, NonEmptyText};

fn date(year: i32, month: u32, day: u32) -> FrontDeskResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| FrontDeskError::InvalidInput(format!("invalid date {year}-{month}-{day}")))
}

fn sample(
    first: &str,
    last: &str,
    dob: NaiveDate,
    gender: &str,
    phone: &str,
    email: &str,
    insurer: &str,
) -> FrontDeskResult<NewPatient> {
    let mut patient = NewPatient::new(
        NonEmptyText::new(first)?,
        NonEmptyText::new(last)?,
        dob,
    );
    patient.gender = Some(gender.to_owned());
    patient.contact = ContactDetails {
        phone: Some(phone.to_owned()),
        email: Some(EmailAddress::parse(email)?),
        ..ContactDetails::default()
    };
    patient.insurance = Insurance {
        provider: Some(insurer.to_owned()),
        policy_number: None,
    };
    Ok(patient)
}

/// Seeds the store with four demo patients and returns their IDs in
/// registration order.
///
/// Sarah Wilson arrives already checked in (reason "Regular checkup") and
/// Mary Johnson checked in for a follow-up, so listings show both visit
/// states out of the box. John Smith (DOB 1985-03-15) and Robert Davis
/// are still awaiting check-in.
pub fn seed_sample_patients(store: &mut PatientStore) -> FrontDeskResult<Vec<RecordId>> {
    let patients = [
        sample(
            "John",
            "Smith",
            date(1985, 3, 15)?,
            "Male",
            "555-0123",
            "john.smith@email.com",
            "Blue Cross",
        )?,
        sample(
            "Mary",
            "Johnson",
            date(1972, 8, 22)?,
            "Female",
            "555-0456",
            "mary.johnson@email.com",
            "Aetna",
        )?,
        sample(
            "Robert",
            "Davis",
            date(1990, 12, 5)?,
            "Male",
            "555-0789",
            "robert.davis@email.com",
            "United Healthcare",
        )?,
        sample(
            "Sarah",
            "Wilson",
            date(1988, 6, 10)?,
            "Female",
            "555-0321",
            "sarah.wilson@email.com",
            "Cigna",
        )?,
    ];

    let mut ids = Vec::with_capacity(patients.len());
    for patient in patients {
        ids.push(store.register(patient)?);
    }

    // Mary and Sarah have already been through the desk today.
    let now = chrono::Utc::now();
    for (pos, reason) in [(1, "Follow-up visit"), (3, "Regular checkup")] {
        let reason = NonEmptyText::new(reason)?;
        let record = store
            .get_mut(&ids[pos])
            .ok_or_else(|| FrontDeskError::RecordNotFound(ids[pos].to_string()))?;
        record.check_in(&reason, now)?;
    }

    tracing::info!(count = ids.len(), "seeded sample patients");
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::SearchQuery;

    #[test]
    fn seed_creates_four_patients() {
        let mut store = PatientStore::new();
        let ids = seed_sample_patients(&mut store).expect("seeding should succeed");

        assert_eq!(ids.len(), 4);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn dob_search_finds_john_smith() {
        let mut store = PatientStore::new();
        seed_sample_patients(&mut store).expect("seeding should succeed");

        let dob = NaiveDate::from_ymd_opt(1985, 3, 15).unwrap();
        let query = SearchQuery::new(None::<&str>, Some(dob)).expect("query should build");
        let results = store.search(&query);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].full_name(), "John Smith");
        assert!(!results[0].checked_in);
    }

    #[test]
    fn seed_includes_both_visit_states() {
        let mut store = PatientStore::new();
        seed_sample_patients(&mut store).expect("seeding should succeed");

        let checked_in = store.iter().filter(|r| r.checked_in).count();
        assert_eq!(checked_in, 2);

        let sarah = store
            .iter()
            .find(|r| r.first_name == "Sarah")
            .expect("Sarah should be seeded");
        assert_eq!(sarah.visit_reason.as_deref(), Some("Regular checkup"));
    }
}
