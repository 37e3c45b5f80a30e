//! Note form binding.

use serde::{Deserialize, Serialize};

use super::{non_blank, FieldErrors};
use crate::models::Note;

/// Raw values of the note add/update form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NoteForm {
    pub id: Option<String>,
    pub patient_id: Option<String>,
    pub patient_name: Option<String>,
    pub content: Option<String>,
}

impl NoteForm {
    /// Bind and validate the form.
    ///
    /// Identity fields pass through untouched; the caller decides what to
    /// keep of them.
    pub fn validate(&self) -> Result<Note, FieldErrors> {
        let mut errors = FieldErrors::new();

        if non_blank(&self.content).is_none() {
            errors.add("content", "note content is required");
        }

        errors.into_result(|| Note {
            id: self.id.clone().filter(|id| !id.is_empty()),
            patient_id: self.patient_id.clone().unwrap_or_default(),
            patient_name: self.patient_name.clone().unwrap_or_default(),
            content: self.content.clone().unwrap_or_default(),
        })
    }
}

impl From<Note> for NoteForm {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            patient_id: Some(note.patient_id),
            patient_name: Some(note.patient_name),
            content: Some(note.content),
        }
    }
}
