//! Clinical note models.

use serde::{Deserialize, Serialize};

use super::patient::Patient;
use super::ids::PatientId;

/// A clinical note as exchanged with the notes service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Notes-service id - unset until persisted
    #[serde(default)]
    pub id: Option<String>,
    /// Canonical decimal key of the owning patient
    #[serde(default)]
    pub patient_id: String,
    /// Last name of the patient at the time the note was written
    #[serde(default)]
    pub patient_name: String,
    #[serde(default)]
    pub content: String,
}

impl Note {
    /// Bind this note to its patient.
    ///
    /// The patient key and display name are always recomputed from the
    /// current patient record; whatever the caller submitted is discarded.
    /// Notes saved earlier keep the name they were written with.
    pub fn attach_to(&mut self, patient_id: PatientId, patient: &Patient) {
        self.patient_id = patient_id.as_note_key();
        self.patient_name = patient.last_name.clone();
    }
}
