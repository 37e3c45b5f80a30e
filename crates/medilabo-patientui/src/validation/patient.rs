//! Patient form binding.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{non_blank, FieldErrors};
use crate::models::{Gender, Patient, PatientId};

/// Maximum stored address length, in characters.
pub const ADDRESS_MAX_LEN: usize = 255;

/// Date format of the birth date input.
pub const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

fn phone_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^(\+?[0-9 .-]{6,20})?$").expect("valid phone pattern"))
}

/// Raw values of the patient add/update form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PatientForm {
    pub id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub birth_date: Option<String>,
    pub gender: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl PatientForm {
    /// Bind and validate the form.
    ///
    /// `today` is the first date that is no longer "in the past".
    pub fn validate(&self, today: NaiveDate) -> Result<Patient, FieldErrors> {
        let mut errors = FieldErrors::new();

        let id = match non_blank(&self.id) {
            Some(raw) => match PatientId::parse(raw) {
                Ok(id) => Some(id),
                Err(e) => {
                    errors.add("id", e.to_string());
                    None
                }
            },
            None => None,
        };

        let first_name = non_blank(&self.first_name);
        if first_name.is_none() {
            errors.add("firstName", "first name is required");
        }

        let last_name = non_blank(&self.last_name);
        if last_name.is_none() {
            errors.add("lastName", "last name is required");
        }

        let birth_date = match non_blank(&self.birth_date) {
            None => {
                errors.add("birthDate", "birth date is required");
                None
            }
            Some(raw) => match NaiveDate::parse_from_str(raw.trim(), BIRTH_DATE_FORMAT) {
                Ok(date) if date < today => Some(date),
                Ok(_) => {
                    errors.add("birthDate", "birth date must be in the past");
                    None
                }
                Err(_) => {
                    errors.add("birthDate", "birth date must be formatted as yyyy-MM-dd");
                    None
                }
            },
        };

        let gender = match non_blank(&self.gender) {
            None => {
                errors.add("gender", "gender is required");
                None
            }
            Some(code) => {
                let gender = Gender::from_code(code.trim());
                if gender.is_none() {
                    errors.add("gender", "gender must be M or F");
                }
                gender
            }
        };

        if let Some(address) = &self.address {
            if address.chars().count() > ADDRESS_MAX_LEN {
                errors.add(
                    "address",
                    format!("address must not exceed {} characters", ADDRESS_MAX_LEN),
                );
            }
        }

        if let Some(phone) = &self.phone {
            if !phone_pattern().is_match(phone) {
                errors.add("phone", "invalid phone number");
            }
        }

        match (first_name, last_name, birth_date, gender) {
            (Some(first_name), Some(last_name), Some(birth_date), Some(gender))
                if errors.is_empty() =>
            {
                Ok(Patient {
                    id,
                    first_name: first_name.to_string(),
                    last_name: last_name.to_string(),
                    birth_date,
                    gender,
                    address: self.address.clone(),
                    phone: self.phone.clone(),
                })
            }
            _ => Err(errors),
        }
    }
}

impl From<&Patient> for PatientForm {
    fn from(patient: &Patient) -> Self {
        Self {
            id: patient.id.map(|id| id.to_string()),
            first_name: Some(patient.first_name.clone()),
            last_name: Some(patient.last_name.clone()),
            birth_date: Some(patient.birth_date.format(BIRTH_DATE_FORMAT).to_string()),
            gender: Some(patient.gender.code().to_string()),
            address: patient.address.clone(),
            phone: patient.phone.clone(),
        }
    }
}
