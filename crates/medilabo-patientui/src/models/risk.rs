//! Diabetes risk models.

use serde::{Deserialize, Serialize};

/// Diabetes risk classification, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    None,
    Borderline,
    InDanger,
    EarlyOnset,
}

/// Risk assessment computed by the risk service. Never built locally.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub patient_id: String,
    pub diabetes_risk_level: RiskLevel,
    /// Number of trigger words found in the patient's notes
    pub trigger_words_counter: u32,
}
