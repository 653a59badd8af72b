//! # Front Desk Settings
//!
//! Operator preferences for the HealthCare Pro front desk: language,
//! accessibility toggles, date/time display formats, and the dark-mode
//! flag.
//!
//! Preferences persist to a flat `key=value` properties file
//! (`healthcare_settings.properties`). A missing or unreadable file is
//! not an error: defaults apply silently (with a logged warning), which
//! keeps first launch and a wiped config indistinguishable from a fresh
//! desk. Saving writes every key.
//!
//! The file path is resolved once at process startup and passed in —
//! nothing in this crate reads environment variables during operation.

use std::fs;
use std::path::{Path, PathBuf};

mod properties;

/// Default name of the settings file, relative to the working directory.
pub const SETTINGS_FILE_NAME: &str = "healthcare_settings.properties";

mod keys {
    pub const LANGUAGE: &str = "language";
    pub const ACCESSIBILITY: &str = "enableAccessibilityFeatures";
    pub const LARGE_TEXT: &str = "largeTextMode";
    pub const DYSLEXIA_FONT: &str = "dyslexiaFont";
    pub const COLORBLIND_MODE: &str = "colorblindMode";
    pub const SHOW_DATE_TIME: &str = "showDateTime";
    pub const DATE_FORMAT: &str = "dateFormat";
    pub const TIME_FORMAT: &str = "timeFormat";
    pub const DARK_MODE: &str = "darkMode";
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("failed to write settings file: {0}")]
    FileWrite(std::io::Error),
    #[error("unknown setting '{0}'")]
    UnknownKey(String),
    #[error("'{value}' is not a valid value for '{key}'")]
    InvalidValue { key: String, value: String },
}

pub type SettingsResult<T> = std::result::Result<T, SettingsError>;

/// Operator preferences.
///
/// Field defaults mirror a freshly installed desk; see [`Default`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub language: String,
    pub accessibility_features: bool,
    pub large_text: bool,
    pub dyslexia_font: bool,
    pub colorblind_mode: bool,
    pub show_date_time: bool,
    pub date_format: String,
    pub time_format: String,
    pub dark_mode: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: "English".to_owned(),
            accessibility_features: true,
            large_text: false,
            dyslexia_font: false,
            colorblind_mode: false,
            show_date_time: false,
            date_format: "MM/dd/yyyy".to_owned(),
            time_format: "12-hour".to_owned(),
            dark_mode: false,
        }
    }
}

impl Preferences {
    /// Loads preferences from `path`.
    ///
    /// A missing or unreadable file yields defaults with a warning.
    /// Unknown keys are ignored; a malformed boolean leaves that field at
    /// its default.
    pub fn load(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %err,
                    "could not load settings, using defaults"
                );
                return Self::default();
            }
        };

        let mut prefs = Self::default();
        for (key, value) in properties::parse(&text) {
            prefs.apply_raw(&key, &value);
        }
        prefs
    }

    /// Saves every preference to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::FileWrite`] if the directory or file
    /// cannot be written.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(SettingsError::FileWrite)?;
            }
        }

        let pairs = vec![
            (keys::LANGUAGE.to_owned(), self.language.clone()),
            (
                keys::ACCESSIBILITY.to_owned(),
                self.accessibility_features.to_string(),
            ),
            (keys::LARGE_TEXT.to_owned(), self.large_text.to_string()),
            (keys::DYSLEXIA_FONT.to_owned(), self.dyslexia_font.to_string()),
            (
                keys::COLORBLIND_MODE.to_owned(),
                self.colorblind_mode.to_string(),
            ),
            (
                keys::SHOW_DATE_TIME.to_owned(),
                self.show_date_time.to_string(),
            ),
            (keys::DATE_FORMAT.to_owned(), self.date_format.clone()),
            (keys::TIME_FORMAT.to_owned(), self.time_format.clone()),
            (keys::DARK_MODE.to_owned(), self.dark_mode.to_string()),
        ];

        fs::write(path, properties::render(&pairs)).map_err(SettingsError::FileWrite)
    }

    /// Restores every preference to its default.
    pub fn reset_to_defaults(&mut self) {
        *self = Self::default();
    }

    /// Applies one setting by its file key, validating the value.
    ///
    /// This is the typed entry point used by the settings UI/CLI; unlike
    /// [`load`](Self::load), bad input is an error rather than silently
    /// defaulted.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::UnknownKey`] for an unrecognised key and
    /// [`SettingsError::InvalidValue`] for a malformed boolean.
    pub fn set(&mut self, key: &str, value: &str) -> SettingsResult<()> {
        let parse_bool = |value: &str| -> SettingsResult<bool> {
            parse_flag(value).ok_or_else(|| SettingsError::InvalidValue {
                key: key.to_owned(),
                value: value.to_owned(),
            })
        };

        match key {
            keys::LANGUAGE => self.language = value.to_owned(),
            keys::ACCESSIBILITY => self.accessibility_features = parse_bool(value)?,
            keys::LARGE_TEXT => self.large_text = parse_bool(value)?,
            keys::DYSLEXIA_FONT => self.dyslexia_font = parse_bool(value)?,
            keys::COLORBLIND_MODE => self.colorblind_mode = parse_bool(value)?,
            keys::SHOW_DATE_TIME => self.show_date_time = parse_bool(value)?,
            keys::DATE_FORMAT => self.date_format = value.to_owned(),
            keys::TIME_FORMAT => self.time_format = value.to_owned(),
            keys::DARK_MODE => self.dark_mode = parse_bool(value)?,
            _ => return Err(SettingsError::UnknownKey(key.to_owned())),
        }
        Ok(())
    }

    /// All settable keys, in file order.
    pub fn key_names() -> [&'static str; 9] {
        [
            keys::LANGUAGE,
            keys::ACCESSIBILITY,
            keys::LARGE_TEXT,
            keys::DYSLEXIA_FONT,
            keys::COLORBLIND_MODE,
            keys::SHOW_DATE_TIME,
            keys::DATE_FORMAT,
            keys::TIME_FORMAT,
            keys::DARK_MODE,
        ]
    }

    /// Lenient single-setting application used when loading the file.
    fn apply_raw(&mut self, key: &str, value: &str) {
        if let Err(err) = self.set(key, value) {
            tracing::warn!(key, value, %err, "ignoring bad settings entry");
        }
    }

    /// Offered display languages.
    pub fn language_options() -> [&'static str; 4] {
        ["English", "Spanish", "French", "Pig Latin"]
    }

    /// Offered date display formats.
    pub fn date_format_options() -> [&'static str; 3] {
        ["MM/dd/yyyy", "dd/MM/yyyy", "yyyy-MM-dd"]
    }

    /// Offered time display formats.
    pub fn time_format_options() -> [&'static str; 2] {
        ["12-hour", "24-hour"]
    }

    /// The configured date format as a `chrono` strftime string.
    ///
    /// Unrecognised formats fall back to the default.
    pub fn chrono_date_format(&self) -> &'static str {
        match self.date_format.as_str() {
            "dd/MM/yyyy" => "%d/%m/%Y",
            "yyyy-MM-dd" => "%Y-%m-%d",
            _ => "%m/%d/%Y",
        }
    }

    /// The configured time format as a `chrono` strftime string.
    ///
    /// Unrecognised formats fall back to the default.
    pub fn chrono_time_format(&self) -> &'static str {
        match self.time_format.as_str() {
            "24-hour" => "%H:%M",
            _ => "%I:%M %p",
        }
    }
}

/// Parses a boolean flag value, case-insensitively. `None` for anything
/// that is not "true" or "false".
fn parse_flag(value: &str) -> Option<bool> {
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Resolves the settings file location once at startup.
///
/// `override_path` (typically from an environment variable) wins;
/// otherwise the file lives in the working directory under
/// [`SETTINGS_FILE_NAME`].
pub fn resolve_settings_path(override_path: Option<PathBuf>) -> PathBuf {
    override_path.unwrap_or_else(|| PathBuf::from(SETTINGS_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(SETTINGS_FILE_NAME);

        let prefs = Preferences::load(&path);

        assert_eq!(prefs, Preferences::default());
        assert_eq!(prefs.language, "English");
        assert!(prefs.accessibility_features);
        assert!(!prefs.dark_mode);
    }

    #[test]
    fn save_then_load_round_trips() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(SETTINGS_FILE_NAME);

        let mut prefs = Preferences::default();
        prefs.language = "Spanish".to_owned();
        prefs.large_text = true;
        prefs.date_format = "yyyy-MM-dd".to_owned();
        prefs.time_format = "24-hour".to_owned();
        prefs.dark_mode = true;

        prefs.save(&path).expect("save should succeed");
        let loaded = Preferences::load(&path);

        assert_eq!(loaded, prefs);
    }

    #[test]
    fn load_ignores_unknown_keys_and_bad_booleans() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(SETTINGS_FILE_NAME);
        std::fs::write(
            &path,
            "language=French\nunknownKey=whatever\nlargeTextMode=maybe\n",
        )
        .expect("should write settings file");

        let prefs = Preferences::load(&path);

        assert_eq!(prefs.language, "French");
        assert!(!prefs.large_text, "bad boolean keeps the default");
    }

    #[test]
    fn set_validates_keys_and_values() {
        let mut prefs = Preferences::default();

        prefs.set("darkMode", "TRUE").expect("booleans are case-insensitive");
        assert!(prefs.dark_mode);

        let err = prefs
            .set("darkMode", "sideways")
            .expect_err("bad boolean should be rejected");
        assert!(matches!(err, SettingsError::InvalidValue { .. }));

        let err = prefs
            .set("noSuchKey", "1")
            .expect_err("unknown key should be rejected");
        assert!(matches!(err, SettingsError::UnknownKey(_)));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut prefs = Preferences::default();
        prefs.language = "French".to_owned();
        prefs.dark_mode = true;

        prefs.reset_to_defaults();

        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn chrono_formats_follow_preferences() {
        let mut prefs = Preferences::default();
        assert_eq!(prefs.chrono_date_format(), "%m/%d/%Y");
        assert_eq!(prefs.chrono_time_format(), "%I:%M %p");

        prefs.date_format = "yyyy-MM-dd".to_owned();
        prefs.time_format = "24-hour".to_owned();
        assert_eq!(prefs.chrono_date_format(), "%Y-%m-%d");
        assert_eq!(prefs.chrono_time_format(), "%H:%M");
    }

    #[test]
    fn resolve_settings_path_prefers_override() {
        let override_path = PathBuf::from("/etc/hcpro/settings.properties");
        assert_eq!(
            resolve_settings_path(Some(override_path.clone())),
            override_path
        );
        assert_eq!(
            resolve_settings_path(None),
            PathBuf::from(SETTINGS_FILE_NAME)
        );
    }
}
