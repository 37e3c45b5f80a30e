//! View models and the rendering boundary.
//!
//! A [`View`] names its template and carries the model the template renders.
//! HTML templating lives outside this crate; the HTTP adapter emits the view
//! as `{"template": ..., "model": ...}` JSON for the rendering layer.

use axum::response::{IntoResponse, Redirect, Response};
use axum::Json;
use serde::Serialize;

use crate::models::{Note, Patient, PatientId, RiskAssessment};
use crate::validation::{FieldErrors, NoteForm, PatientForm};

/// Template plus model for one page.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "template", content = "model")]
pub enum View {
    #[serde(rename = "patients/patient-list")]
    PatientList { patients: Vec<Patient> },

    #[serde(rename = "patients/patient-info")]
    PatientInfo {
        patient: Patient,
        notes: Vec<Note>,
        #[serde(rename = "riskLevel")]
        risk_level: RiskAssessment,
    },

    #[serde(rename = "patients/patient-add")]
    PatientAdd {
        patient: PatientForm,
        errors: FieldErrors,
    },

    #[serde(rename = "patients/patient-update")]
    PatientUpdate {
        id: PatientId,
        patient: PatientForm,
        errors: FieldErrors,
    },

    #[serde(rename = "notes/note-add")]
    NoteAdd {
        patient: Patient,
        note: NoteForm,
        errors: FieldErrors,
    },

    #[serde(rename = "notes/note-update")]
    NoteUpdate {
        patient: Patient,
        #[serde(rename = "noteId")]
        note_id: String,
        note: NoteForm,
        errors: FieldErrors,
    },
}

impl View {
    /// Template name, as seen by the rendering layer.
    pub fn template(&self) -> &'static str {
        match self {
            View::PatientList { .. } => "patients/patient-list",
            View::PatientInfo { .. } => "patients/patient-info",
            View::PatientAdd { .. } => "patients/patient-add",
            View::PatientUpdate { .. } => "patients/patient-update",
            View::NoteAdd { .. } => "notes/note-add",
            View::NoteUpdate { .. } => "notes/note-update",
        }
    }

    /// Validation errors carried by a form view.
    pub fn errors(&self) -> Option<&FieldErrors> {
        match self {
            View::PatientAdd { errors, .. }
            | View::PatientUpdate { errors, .. }
            | View::NoteAdd { errors, .. }
            | View::NoteUpdate { errors, .. } => Some(errors),
            View::PatientList { .. } | View::PatientInfo { .. } => None,
        }
    }
}

/// Outcome of a page handler.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Render(View),
    Redirect(String),
}

impl Page {
    pub fn redirect(location: impl Into<String>) -> Self {
        Page::Redirect(location.into())
    }

    /// Detail page of one patient.
    pub fn patient_detail(id: PatientId) -> Self {
        Page::Redirect(format!("/patient/{}", id))
    }
}

impl From<View> for Page {
    fn from(view: View) -> Self {
        Page::Render(view)
    }
}

impl IntoResponse for View {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> Response {
        match self {
            Page::Render(view) => view.into_response(),
            Page::Redirect(location) => Redirect::to(&location).into_response(),
        }
    }
}
