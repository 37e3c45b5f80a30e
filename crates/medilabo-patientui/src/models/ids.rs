//! Patient identity conversion.
//!
//! The patient directory keys patients by integer, while the notes and risk
//! services key them by the decimal text of that integer. Every conversion
//! between the two forms goes through [`PatientId`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a path or form value is not a usable patient id.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("patient id is empty")]
    Empty,

    #[error("patient id is not a number: {0}")]
    NotNumeric(String),

    #[error("patient id must be positive")]
    NotPositive,
}

/// Positive integer identity of a patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct PatientId(u32);

impl PatientId {
    /// Wrap a raw integer, rejecting zero.
    pub fn new(value: u32) -> Result<Self, IdError> {
        if value == 0 {
            return Err(IdError::NotPositive);
        }
        Ok(Self(value))
    }

    /// Parse a path or form segment.
    ///
    /// Accepts an optional leading `+` and leading zeros, like a plain
    /// decimal integer parser. Surrounding whitespace, negative values and
    /// zero are rejected.
    pub fn parse(raw: &str) -> Result<Self, IdError> {
        if raw.is_empty() {
            return Err(IdError::Empty);
        }
        if let Some(digits) = raw.strip_prefix('-').filter(|d| !d.is_empty()) {
            if !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(IdError::NotNumeric(raw.to_string()));
            }
            return Err(IdError::NotPositive);
        }
        let value = raw
            .parse::<u32>()
            .map_err(|_| IdError::NotNumeric(raw.to_string()))?;
        Self::new(value)
    }

    /// Raw integer value, as sent to the patient directory.
    pub fn get(self) -> u32 {
        self.0
    }

    /// Canonical decimal key used by the notes and risk services.
    pub fn as_note_key(self) -> String {
        self.0.to_string()
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u32> for PatientId {
    type Error = IdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PatientId> for u32 {
    fn from(id: PatientId) -> Self {
        id.0
    }
}

impl FromStr for PatientId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
