//! Medilabo Patient UI
//!
//! Server-side UI backend that assembles patient pages from three backend
//! services reached through the gateway.
//!
//! # Architecture
//!
//! ```text
//!   Browser ──► Router ──► PatientController
//!                                │
//!              ┌─────────────────┼─────────────────┐
//!              ▼                 ▼                 ▼
//!      PatientDirectory    ClinicalNotes      RiskAssessor
//!              │                 │                 │
//!              └──── shared reqwest::Client ───────┘
//!                   (fixed service credential)
//!                                │
//!                                ▼
//!                             Gateway
//! ```
//!
//! # Identity Reconciliation
//!
//! The patient directory keys patients by integer; the notes and risk
//! services use the decimal string of that integer. [`models::PatientId`] is
//! the only place the two forms are converted.
//!
//! # Modules
//!
//! - [`models`]: Wire types (Patient, Note, RiskAssessment) and PatientId
//! - [`validation`]: Form binding and field validation
//! - [`clients`]: Backend service contracts and their HTTP implementations
//! - [`web`]: Page controller, view models and router
//! - [`config`]: Command-line/environment configuration

pub mod clients;
pub mod config;
pub mod models;
pub mod validation;
pub mod web;

// Re-export commonly used types
pub use clients::{ClientError, ClinicalNotes, PatientDirectory, RiskAssessor, ServiceCredential};
pub use config::PortalConfig;
pub use models::{Gender, IdError, Note, Patient, PatientId, RiskAssessment, RiskLevel};
pub use validation::{FieldError, FieldErrors, NoteForm, PatientForm};
pub use web::{router, Page, PageError, PatientController, View};

use std::sync::Arc;

use clients::{
    build_http_client, ClientResult, HttpClinicalNotes, HttpPatientDirectory, HttpRiskAssessor,
    ServiceEndpoint,
};

// =========================================================================
// Factory Functions
// =========================================================================

/// Wire the HTTP clients described by `config` into a controller.
pub fn connect(config: &PortalConfig) -> ClientResult<PatientController> {
    let http = build_http_client(&config.credential(), config.request_timeout())?;

    let patients = HttpPatientDirectory::new(ServiceEndpoint::new(
        http.clone(),
        &config.patient_service_url,
    )?);
    let notes = HttpClinicalNotes::new(ServiceEndpoint::new(
        http.clone(),
        &config.note_service_url,
    )?);
    let risk = HttpRiskAssessor::new(ServiceEndpoint::new(http, &config.risk_service_url)?);

    Ok(PatientController::new(
        Arc::new(patients),
        Arc::new(notes),
        Arc::new(risk),
    ))
}
