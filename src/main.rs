//! HealthCare Pro front desk.
//!
//! The binary owns construction and lifecycle of the patient store and
//! drives the core crates through a subcommand CLI. The store is
//! in-memory for the life of the process; `--seed` populates it with the
//! demo patients so single invocations have something to work on. Only
//! settings persist between runs, in the properties file.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use frontdesk_core::{
    seed_sample_patients, Alert, CheckInReceipt, CheckInService, CheckInSession, ContactDetails,
    FrontDeskError, Insurance, NewPatient, PatientRecord, PatientStore, RecordId, SearchQuery,
    SharedPatientStore,
};
use frontdesk_settings::{resolve_settings_path, Preferences, SettingsError};
use frontdesk_theme::Theme;
use frontdesk_types::{EmailAddress, NonEmptyText};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "healthcare-pro")]
#[command(about = "HealthCare Pro front desk")]
struct Cli {
    /// Populate the in-memory store with the demo patients
    #[arg(long, global = true)]
    seed: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List all patients
    List,
    /// Register a new patient
    Register {
        /// Patient first name
        first_name: String,
        /// Patient last name
        last_name: String,
        /// Date of birth (YYYY-MM-DD)
        date_of_birth: NaiveDate,
        /// Gender (optional)
        #[arg(long)]
        gender: Option<String>,
        /// Contact phone number (optional)
        #[arg(long)]
        phone: Option<String>,
        /// Contact email address (optional)
        #[arg(long)]
        email: Option<String>,
        /// Insurance provider (optional)
        #[arg(long)]
        insurance: Option<String>,
    },
    /// Search patients by name fragment and/or exact date of birth
    Search {
        /// Name fragment, matched case-insensitively
        #[arg(long)]
        name: Option<String>,
        /// Exact date of birth (YYYY-MM-DD)
        #[arg(long)]
        dob: Option<NaiveDate>,
    },
    /// Check in a patient by record ID
    CheckIn {
        /// Record ID (32 lowercase hex characters)
        record_id: String,
        /// Reason for the visit
        reason: String,
    },
    /// Quick check-in: look up by ID or name, check in if unambiguous
    QuickCheckIn {
        /// Record ID or name fragment
        query: String,
        /// Reason for the visit
        reason: String,
    },
    /// Print a patient summary
    Summary {
        /// Record ID (32 lowercase hex characters)
        record_id: String,
    },
    /// Walk through the search, select, check-in flow on the demo data
    Demo,
    /// Show or change settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommands,
    },
    /// Show the resolved theme palette
    Theme {
        /// Theme to preview instead of the configured one
        mode: Option<Theme>,
    },
}

#[derive(Subcommand)]
enum SettingsCommands {
    /// Print current settings and the offered options
    Show,
    /// Set one setting by its file key
    Set {
        /// Setting key (e.g. language, dateFormat, darkMode)
        key: String,
        /// New value
        value: String,
    },
    /// Reset all settings to defaults
    Reset,
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("healthcare_pro=info".parse()?)
                .add_directive("frontdesk_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let settings_path =
        resolve_settings_path(std::env::var_os("HCPRO_SETTINGS_FILE").map(PathBuf::from));
    tracing::info!(settings = %settings_path.display(), "front desk starting");
    let mut prefs = Preferences::load(&settings_path);

    let mut store = PatientStore::new();
    if cli.seed {
        seed_sample_patients(&mut store)?;
    }
    let store = store.into_shared();

    match cli.command {
        Some(Commands::List) => list_patients(&store),
        Some(Commands::Register {
            first_name,
            last_name,
            date_of_birth,
            gender,
            phone,
            email,
            insurance,
        }) => {
            match register_patient(
                &store,
                &first_name,
                &last_name,
                date_of_birth,
                gender,
                phone,
                email,
                insurance,
            ) {
                Ok(id) => println!("Registered patient with record ID: {id}"),
                Err(e) => report(&e),
            }
        }
        Some(Commands::Search { name, dob }) => match SearchQuery::new(name.as_deref(), dob) {
            Ok(query) => {
                let results = lock(&store).search(&query);
                print_records(&results);
            }
            Err(e) => report(&e),
        },
        Some(Commands::CheckIn { record_id, reason }) => {
            match check_in_by_id(&store, &record_id, &reason) {
                Ok(receipt) => print_receipt(&receipt, &prefs),
                Err(e) => report(&e),
            }
        }
        Some(Commands::QuickCheckIn { query, reason }) => {
            match quick_check_in(&store, &query, &reason) {
                Ok(receipt) => print_receipt(&receipt, &prefs),
                Err(e) => report(&e),
            }
        }
        Some(Commands::Summary { record_id }) => match summarise(&store, &record_id) {
            Ok(summary) => println!("{summary}"),
            Err(e) => report(&e),
        },
        Some(Commands::Demo) => {
            if let Err(e) = run_demo(&store, &prefs) {
                report(&e);
            }
        }
        Some(Commands::Settings { command }) => {
            if let Err(e) = run_settings(command, &mut prefs, &settings_path) {
                eprintln!("[ERROR] Settings: {e}");
            }
        }
        Some(Commands::Theme { mode }) => {
            let theme = mode.unwrap_or_else(|| Theme::from_dark_flag(prefs.dark_mode));
            print_theme(theme);
        }
        None => {
            println!("Use 'healthcare-pro --help' for commands");
        }
    }

    Ok(())
}

/// Renders a core error the way the desk would show a dialog.
fn report(err: &FrontDeskError) {
    let alert = Alert::from(err);
    eprintln!("[{}] {}: {}", alert.severity, alert.title, alert.message);
}

fn lock(store: &SharedPatientStore) -> std::sync::MutexGuard<'_, PatientStore> {
    store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn list_patients(store: &SharedPatientStore) {
    let records = lock(store).all();
    print_records(&records);
}

#[allow(clippy::too_many_arguments)]
fn register_patient(
    store: &SharedPatientStore,
    first_name: &str,
    last_name: &str,
    date_of_birth: NaiveDate,
    gender: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    insurance: Option<String>,
) -> Result<RecordId, FrontDeskError> {
    let email = email.map(EmailAddress::parse).transpose()?;

    let mut patient = NewPatient::new(
        NonEmptyText::new(first_name)?,
        NonEmptyText::new(last_name)?,
        date_of_birth,
    );
    patient.gender = gender;
    patient.contact = ContactDetails {
        phone,
        email,
        ..ContactDetails::default()
    };
    patient.insurance = Insurance {
        provider: insurance,
        policy_number: None,
    };

    lock(store).register(patient)
}

fn check_in_by_id(
    store: &SharedPatientStore,
    record_id: &str,
    reason: &str,
) -> Result<CheckInReceipt, FrontDeskError> {
    let reason = NonEmptyText::new(reason)?;
    CheckInService::new(store.clone()).quick_check_in(record_id, &reason)
}

/// ID-or-name quick check-in. A name that matches more than one patient
/// is ambiguous: the matches are listed and nothing is mutated.
fn quick_check_in(
    store: &SharedPatientStore,
    query: &str,
    reason: &str,
) -> Result<CheckInReceipt, FrontDeskError> {
    let reason = NonEmptyText::new(reason)?;

    let matches = lock(store).quick_lookup(query)?;
    match matches.len() {
        0 => Err(FrontDeskError::RecordNotFound(query.trim().to_owned())),
        1 => CheckInService::new(store.clone()).check_in(&matches[0].id, &reason),
        n => {
            println!("{n} patients match '{}':", query.trim());
            print_records(&matches);
            Err(FrontDeskError::InvalidInput(
                "more than one patient matches; check in by record ID instead".to_owned(),
            ))
        }
    }
}

fn summarise(store: &SharedPatientStore, record_id: &str) -> Result<String, FrontDeskError> {
    let id = RecordId::parse(record_id.trim())?;
    let store = lock(store);
    let record = store
        .get(&id)
        .ok_or_else(|| FrontDeskError::RecordNotFound(id.to_string()))?;
    record.summary()
}

/// Scripted walkthrough of the flow the check-in window drives: search,
/// select the first match, check the patient in, then show that a second
/// attempt is rejected.
fn run_demo(store: &SharedPatientStore, prefs: &Preferences) -> Result<(), FrontDeskError> {
    if lock(store).is_empty() {
        seed_sample_patients(&mut lock(store))?;
    }

    let mut session = CheckInSession::new(store.clone());

    let query = SearchQuery::new(Some("Smith"), None)?;
    println!("Searching for 'Smith'...");
    let results = session.search(&query).to_vec();
    print_records(&results);

    let first = results
        .first()
        .ok_or_else(|| FrontDeskError::RecordNotFound("Smith".to_owned()))?;
    let id = first.id.clone();
    session.select(&id)?;
    println!("Selected: {}", first.full_name());

    let reason = NonEmptyText::new("Annual checkup")?;
    let receipt = session.check_in(&reason)?;
    print_receipt(&receipt, prefs);

    println!("Attempting a second check-in for the same patient...");
    session.search(&query);
    session.select(&id)?;
    match session.check_in(&reason) {
        Ok(_) => println!("Unexpectedly checked in twice"),
        Err(e) => report(&e),
    }

    Ok(())
}

fn run_settings(
    command: SettingsCommands,
    prefs: &mut Preferences,
    path: &std::path::Path,
) -> Result<(), SettingsError> {
    match command {
        SettingsCommands::Show => {
            println!("Settings ({}):", path.display());
            println!("  language={}", prefs.language);
            println!(
                "  enableAccessibilityFeatures={}",
                prefs.accessibility_features
            );
            println!("  largeTextMode={}", prefs.large_text);
            println!("  dyslexiaFont={}", prefs.dyslexia_font);
            println!("  colorblindMode={}", prefs.colorblind_mode);
            println!("  showDateTime={}", prefs.show_date_time);
            println!("  dateFormat={}", prefs.date_format);
            println!("  timeFormat={}", prefs.time_format);
            println!("  darkMode={}", prefs.dark_mode);
            println!("Keys: {}", Preferences::key_names().join(", "));
            println!(
                "Languages: {}",
                Preferences::language_options().join(", ")
            );
            println!(
                "Date formats: {}",
                Preferences::date_format_options().join(", ")
            );
            println!(
                "Time formats: {}",
                Preferences::time_format_options().join(", ")
            );
            Ok(())
        }
        SettingsCommands::Set { key, value } => {
            prefs.set(&key, &value)?;
            prefs.save(path)?;
            println!("Saved {key}={value}");
            Ok(())
        }
        SettingsCommands::Reset => {
            prefs.reset_to_defaults();
            prefs.save(path)?;
            println!("Settings reset to defaults");
            Ok(())
        }
    }
}

fn print_records(records: &[PatientRecord]) {
    if records.is_empty() {
        println!("No patients found.");
        return;
    }
    for record in records {
        println!(
            "ID: {}, Name: {}, DOB: {}, Checked in: {}",
            record.id,
            record.full_name(),
            record.date_of_birth,
            if record.checked_in { "yes" } else { "no" }
        );
    }
}

fn print_receipt(receipt: &CheckInReceipt, prefs: &Preferences) {
    let format = format!(
        "{} {}",
        prefs.chrono_date_format(),
        prefs.chrono_time_format()
    );
    let stamp = receipt.checked_in_at.format(&format);
    println!("Check-in completed successfully!");
    println!("  Patient: {}", receipt.full_name);
    println!("  Reason for Visit: {}", receipt.visit_reason);
    println!("  Check-in Time: {stamp}");
}

fn print_theme(theme: Theme) {
    println!("Theme: {theme}");
    for (name, value) in theme.palette().entries() {
        println!("  {name}: {value}");
    }
}
