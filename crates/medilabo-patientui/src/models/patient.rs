//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::ids::PatientId;

/// Administrative gender as stored by the patient directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Gender {
    M,
    F,
}

impl Gender {
    /// Parse the form/wire code (`M` or `F`).
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Gender::M),
            "F" => Some(Gender::F),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Gender::M => "M",
            Gender::F => "F",
        }
    }
}

/// A patient record as exchanged with the patient directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Directory id - unset until the directory persists the record
    #[serde(default)]
    pub id: Option<PatientId>,
    pub first_name: String,
    pub last_name: String,
    /// Always in the past for accepted records
    pub birth_date: NaiveDate,
    pub gender: Gender,
    /// Postal address, at most 255 characters
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl Patient {
    /// Create an unsaved patient with the required fields.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: NaiveDate,
        gender: Gender,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date,
            gender,
            address: None,
            phone: None,
        }
    }

    /// Check if the directory has assigned an id.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
