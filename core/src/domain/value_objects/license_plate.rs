//! Brazilian license plate value object.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

/// Three uppercase letters followed by four digits, e.g. `ABC1234`
static PLATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{4}$").expect("plate regex is valid"));

/// Validated license plate in the pre-Mercosul format (`AAA9999`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LicensePlate(String);

impl LicensePlate {
    /// Parse and normalize a license plate
    ///
    /// Input is trimmed and uppercased before validation, so `abc1234`
    /// is accepted and stored as `ABC1234`.
    pub fn of(value: &str) -> Result<Self, ValidationError> {
        let normalized = value.trim().to_uppercase();
        if !PLATE_PATTERN.is_match(&normalized) {
            return Err(ValidationError::InvalidLicensePlate {
                plate: value.to_string(),
            });
        }
        Ok(Self(normalized))
    }

    /// The normalized plate value
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for LicensePlate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of(&value)
    }
}

impl From<LicensePlate> for String {
    fn from(plate: LicensePlate) -> Self {
        plate.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_plate() {
        let plate = LicensePlate::of("ABC1234").unwrap();
        assert_eq!(plate.value(), "ABC1234");
    }

    #[test]
    fn test_normalizes_lowercase_and_whitespace() {
        let plate = LicensePlate::of("  abc1234 ").unwrap();
        assert_eq!(plate.value(), "ABC1234");
    }

    #[test]
    fn test_rejects_malformed_plates() {
        for invalid in ["", "AB1234", "ABCD234", "ABC123", "ABC12345", "1234ABC", "ABC 1234"] {
            assert!(
                LicensePlate::of(invalid).is_err(),
                "expected {invalid:?} to be rejected"
            );
        }
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let plate = LicensePlate::of("ABC1234").unwrap();
        let json = serde_json::to_string(&plate).unwrap();
        assert_eq!(json, "\"ABC1234\"");

        let parsed: LicensePlate = serde_json::from_str("\"XYZ9876\"").unwrap();
        assert_eq!(parsed.value(), "XYZ9876");
    }

    #[test]
    fn test_deserialization_rejects_invalid_plate() {
        let result: Result<LicensePlate, _> = serde_json::from_str("\"NOPE\"");
        assert!(result.is_err());
    }
}
