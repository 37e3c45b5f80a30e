//! Page aggregation controller.
//!
//! Stateless: every operation fetches what it needs from the backend
//! services, builds one view model and forgets everything. Calls within one
//! page are awaited one after another.

use std::sync::Arc;

use chrono::NaiveDate;
use tracing::{debug, info};

use super::error::PageResult;
use super::view::{Page, View};
use crate::clients::{ClinicalNotes, PatientDirectory, RiskAssessor};
use crate::models::PatientId;
use crate::validation::{FieldErrors, NoteForm, PatientForm};

/// Orchestrates the patient, notes and risk clients for the UI pages.
#[derive(Clone)]
pub struct PatientController {
    patients: Arc<dyn PatientDirectory>,
    notes: Arc<dyn ClinicalNotes>,
    risk: Arc<dyn RiskAssessor>,
}

impl PatientController {
    pub fn new(
        patients: Arc<dyn PatientDirectory>,
        notes: Arc<dyn ClinicalNotes>,
        risk: Arc<dyn RiskAssessor>,
    ) -> Self {
        Self {
            patients,
            notes,
            risk,
        }
    }

    // =========================================================================
    // Patient Pages
    // =========================================================================

    /// `GET /`
    pub fn home(&self) -> Page {
        Page::redirect("/patients")
    }

    /// `GET /patients`
    pub async fn list_patients(&self) -> PageResult<Page> {
        let patients = self.patients.list_all().await?;
        debug!(count = patients.len(), "listed patients");
        Ok(View::PatientList { patients }.into())
    }

    /// `GET /patient/{id}`: patient, then notes, then risk. All three must
    /// succeed for the page to render.
    pub async fn patient_detail(&self, raw_id: &str) -> PageResult<Page> {
        let id = PatientId::parse(raw_id)?;
        let key = id.as_note_key();

        let patient = self.patients.get_by_id(id).await?;
        let notes = self.notes.list_by_patient(&key).await?;
        let risk_level = self.risk.get_by_patient_id(&key).await?;

        Ok(View::PatientInfo {
            patient,
            notes,
            risk_level,
        }
        .into())
    }

    /// `GET /patient/add`
    pub fn show_add_patient(&self) -> Page {
        View::PatientAdd {
            patient: PatientForm::default(),
            errors: FieldErrors::new(),
        }
        .into()
    }

    /// `POST /patient/add`. An invalid form is redisplayed without any
    /// remote call.
    pub async fn add_patient(&self, form: PatientForm, today: NaiveDate) -> PageResult<Page> {
        let patient = match form.validate(today) {
            Ok(patient) => patient,
            Err(errors) => {
                debug!(errors = errors.len(), "patient form rejected");
                return Ok(View::PatientAdd {
                    patient: form,
                    errors,
                }
                .into());
            }
        };

        let saved = self.patients.create(&patient).await?;
        info!(patient_id = ?saved.id, "patient created");
        Ok(Page::redirect("/patients"))
    }

    /// `GET /patient/update/{id}`
    pub async fn show_update_patient(&self, raw_id: &str) -> PageResult<Page> {
        let id = PatientId::parse(raw_id)?;
        let patient = self.patients.get_by_id(id).await?;
        Ok(View::PatientUpdate {
            id,
            patient: PatientForm::from(&patient),
            errors: FieldErrors::new(),
        }
        .into())
    }

    /// `POST /patient/update/{id}`
    pub async fn update_patient(
        &self,
        raw_id: &str,
        form: PatientForm,
        today: NaiveDate,
    ) -> PageResult<Page> {
        let id = PatientId::parse(raw_id)?;
        let patient = match form.validate(today) {
            Ok(patient) => patient,
            Err(errors) => {
                debug!(patient_id = %id, errors = errors.len(), "patient form rejected");
                return Ok(View::PatientUpdate {
                    id,
                    patient: form,
                    errors,
                }
                .into());
            }
        };

        self.patients.update(id, &patient).await?;
        info!(patient_id = %id, "patient updated");
        Ok(Page::redirect("/patients"))
    }

    // =========================================================================
    // Note Pages
    // =========================================================================

    /// `GET /patient/{id}/note/add`
    pub async fn show_add_note(&self, raw_id: &str) -> PageResult<Page> {
        let id = PatientId::parse(raw_id)?;
        let patient = self.patients.get_by_id(id).await?;
        Ok(View::NoteAdd {
            patient,
            note: NoteForm::default(),
            errors: FieldErrors::new(),
        }
        .into())
    }

    /// `POST /patient/{id}/note/add`
    ///
    /// The patient is fetched before validation so a redisplayed form can
    /// show it. The saved note never keeps a client-supplied id, patient key
    /// or patient name.
    pub async fn add_note(&self, raw_id: &str, form: NoteForm) -> PageResult<Page> {
        let id = PatientId::parse(raw_id)?;
        let patient = self.patients.get_by_id(id).await?;

        let mut note = match form.validate() {
            Ok(note) => note,
            Err(errors) => {
                return Ok(View::NoteAdd {
                    patient,
                    note: form,
                    errors,
                }
                .into());
            }
        };

        note.id = None;
        note.attach_to(id, &patient);
        let saved = self.notes.create(&note).await?;
        info!(patient_id = %id, note_id = ?saved.id, "note created");

        Ok(Page::patient_detail(id))
    }

    /// `GET /patient/{id}/note/update/{note_id}`
    pub async fn show_update_note(&self, raw_id: &str, note_id: &str) -> PageResult<Page> {
        let id = PatientId::parse(raw_id)?;
        let patient = self.patients.get_by_id(id).await?;
        let note = self.notes.get_by_id(note_id).await?;
        Ok(View::NoteUpdate {
            patient,
            note_id: note_id.to_string(),
            note: NoteForm::from(note),
            errors: FieldErrors::new(),
        }
        .into())
    }

    /// `POST /patient/{id}/note/update/{note_id}`
    pub async fn update_note(
        &self,
        raw_id: &str,
        note_id: &str,
        form: NoteForm,
    ) -> PageResult<Page> {
        let id = PatientId::parse(raw_id)?;
        let patient = self.patients.get_by_id(id).await?;

        let mut note = match form.validate() {
            Ok(note) => note,
            Err(errors) => {
                return Ok(View::NoteUpdate {
                    patient,
                    note_id: note_id.to_string(),
                    note: form,
                    errors,
                }
                .into());
            }
        };

        note.id = Some(note_id.to_string());
        note.attach_to(id, &patient);
        self.notes.update(note_id, &note).await?;
        info!(patient_id = %id, note_id, "note updated");

        Ok(Page::patient_detail(id))
    }
}
