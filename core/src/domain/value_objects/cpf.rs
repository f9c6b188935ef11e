//! CPF (Brazilian taxpayer id) value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::ValidationError;

/// Validated CPF, stored as its eleven digits without punctuation
///
/// Accepts both the bare form (`51430203609`) and the masked form
/// (`514.302.036-09`). Both verifier digits are checked with the standard
/// mod-11 algorithm, and degenerate all-same-digit sequences are rejected
/// even though their check digits are arithmetically consistent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// Parse and validate a CPF
    pub fn of(value: &str) -> Result<Self, ValidationError> {
        let digits: String = value
            .chars()
            .filter(|c| !matches!(c, '.' | '-' | ' '))
            .collect();

        let invalid = || ValidationError::InvalidCpf {
            cpf: value.to_string(),
        };

        if digits.len() != 11 || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let nums: Vec<u32> = digits.chars().filter_map(|c| c.to_digit(10)).collect();

        if nums.iter().all(|&d| d == nums[0]) {
            return Err(invalid());
        }

        if nums[9] != verifier_digit(&nums[..9]) || nums[10] != verifier_digit(&nums[..10]) {
            return Err(invalid());
        }

        Ok(Self(digits))
    }

    /// The eleven digits without punctuation
    pub fn digits(&self) -> &str {
        &self.0
    }

    /// The masked form, `xxx.xxx.xxx-xx`
    pub fn formatted(&self) -> String {
        format!(
            "{}.{}.{}-{}",
            &self.0[0..3],
            &self.0[3..6],
            &self.0[6..9],
            &self.0[9..11]
        )
    }
}

/// Mod-11 verifier digit over a prefix of the CPF
///
/// Weights run from `len + 1` down to 2; a remainder below 2 maps to 0.
fn verifier_digit(prefix: &[u32]) -> u32 {
    let weight_start = (prefix.len() + 1) as u32;
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (weight_start - i as u32))
        .sum();
    match sum % 11 {
        0 | 1 => 0,
        rem => 11 - rem,
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.formatted())
    }
}

impl TryFrom<String> for Cpf {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}
