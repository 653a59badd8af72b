//! Patient record identifiers.
//!
//! Every record is addressed by a *canonical* UUID string: **32 lowercase
//! hexadecimal characters** (no hyphens), the same value produced by
//! `Uuid::new_v4().simple().to_string()`.
//!
//! Canonical form is required for externally supplied identifiers (CLI
//! input, quick check-in lookups). Use [`RecordId::parse`] to validate an
//! input string; non-canonical values (uppercase, hyphenated, wrong
//! length, non-hex) are rejected rather than normalised.

use crate::error::{FrontDeskError, FrontDeskResult};
use std::{fmt, str::FromStr};
use uuid::Uuid;

/// Canonical patient record identifier.
///
/// Once constructed, the contained UUID is guaranteed to be valid, so the
/// store can use it as a map key without re-validating.
///
/// # Construction
/// - [`RecordId::new`] allocates a fresh identifier during registration.
/// - [`RecordId::parse`] validates an externally supplied identifier.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RecordId(Uuid);

impl RecordId {
    /// Generates a new identifier in canonical form.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Validates and parses an identifier that must already be canonical.
    ///
    /// This does **not** normalise other common UUID forms (hyphenated or
    /// uppercase); callers must provide the canonical representation.
    ///
    /// # Errors
    ///
    /// Returns [`FrontDeskError::InvalidInput`] if `input` is not in
    /// canonical form.
    pub fn parse(input: &str) -> FrontDeskResult<Self> {
        if Self::is_canonical(input) {
            // SAFETY: is_canonical guarantees valid hex, so parse_str will succeed
            let uuid = Uuid::parse_str(input).expect("is_canonical guarantees valid UUID");
            return Ok(Self(uuid));
        }
        Err(FrontDeskError::InvalidInput(format!(
            "record ID must be 32 lowercase hex characters without hyphens, got: '{}'",
            input
        )))
    }

    /// Returns true if `input` is in canonical record-ID form.
    ///
    /// Purely syntactic: exactly 32 bytes, lowercase hex only.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 32
            && input
                .bytes()
                .all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.simple())
    }
}

impl FromStr for RecordId {
    type Err = FrontDeskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordId::parse(s)
    }
}

impl serde::Serialize for RecordId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        RecordId::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn new_generates_canonical_id() {
        let id = RecordId::new();
        let canonical = id.to_string();

        assert_eq!(canonical.len(), 32);
        assert!(RecordId::is_canonical(&canonical));
    }

    #[test]
    fn generated_ids_are_unique() {
        let mut seen = HashSet::new();
        for _ in 0..10_000 {
            assert!(
                seen.insert(RecordId::new().to_string()),
                "generated a colliding record ID"
            );
        }
    }

    #[test]
    fn parse_accepts_canonical_form() {
        let canonical = "550e8400e29b41d4a716446655440000";
        let id = RecordId::parse(canonical).expect("canonical ID should parse");
        assert_eq!(id.to_string(), canonical);
    }

    #[test]
    fn parse_rejects_non_canonical_forms() {
        let cases = [
            "550e8400-e29b-41d4-a716-446655440000", // hyphenated
            "550E8400E29B41D4A716446655440000",     // uppercase
            "550e8400e29b41d4a71644665544000",      // too short
            "550e8400e29b41d4a7164466554400000",    // too long
            "550e8400e29b41d4a716446655440zzz",     // non-hex
            "",
        ];
        for input in cases {
            let result = RecordId::parse(input);
            assert!(result.is_err(), "should reject {input:?}");
            assert!(matches!(result, Err(FrontDeskError::InvalidInput(_))));
        }
    }

    #[test]
    fn round_trip_new_to_string_to_parse() {
        let original = RecordId::new();
        let parsed = RecordId::parse(&original.to_string()).expect("round trip should parse");
        assert_eq!(original, parsed);
    }

    #[test]
    fn from_str_matches_parse() {
        let id: RecordId = "550e8400e29b41d4a716446655440000"
            .parse()
            .expect("canonical ID should parse");
        assert_eq!(id.to_string(), "550e8400e29b41d4a716446655440000");

        let result: Result<RecordId, _> = "not-an-id".parse();
        assert!(result.is_err());
    }
}
