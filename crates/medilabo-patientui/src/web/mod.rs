//! HTTP surface of the patient UI.

mod controller;
mod error;
mod view;

pub use controller::*;
pub use error::*;
pub use view::*;

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Form, Router};
use chrono::{Local, NaiveDate};

use crate::validation::{NoteForm, PatientForm};

/// Build the page router.
pub fn router(controller: PatientController) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/patients", get(list_patients))
        .route("/patient/add", get(show_add_patient).post(add_patient))
        .route(
            "/patient/update/:id",
            get(show_update_patient).post(update_patient),
        )
        .route("/patient/:id", get(patient_detail))
        .route("/patient/:id/note/add", get(show_add_note).post(add_note))
        .route(
            "/patient/:id/note/update/:note_id",
            get(show_update_note).post(update_note),
        )
        .with_state(controller)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

async fn home(State(controller): State<PatientController>) -> Page {
    controller.home()
}

async fn list_patients(State(controller): State<PatientController>) -> PageResult<Page> {
    controller.list_patients().await
}

async fn patient_detail(
    State(controller): State<PatientController>,
    Path(id): Path<String>,
) -> PageResult<Page> {
    controller.patient_detail(&id).await
}

async fn show_add_patient(State(controller): State<PatientController>) -> Page {
    controller.show_add_patient()
}

async fn add_patient(
    State(controller): State<PatientController>,
    Form(form): Form<PatientForm>,
) -> PageResult<Page> {
    controller.add_patient(form, today()).await
}

async fn show_update_patient(
    State(controller): State<PatientController>,
    Path(id): Path<String>,
) -> PageResult<Page> {
    controller.show_update_patient(&id).await
}

async fn update_patient(
    State(controller): State<PatientController>,
    Path(id): Path<String>,
    Form(form): Form<PatientForm>,
) -> PageResult<Page> {
    controller.update_patient(&id, form, today()).await
}

async fn show_add_note(
    State(controller): State<PatientController>,
    Path(id): Path<String>,
) -> PageResult<Page> {
    controller.show_add_note(&id).await
}

async fn add_note(
    State(controller): State<PatientController>,
    Path(id): Path<String>,
    Form(form): Form<NoteForm>,
) -> PageResult<Page> {
    controller.add_note(&id, form).await
}

async fn show_update_note(
    State(controller): State<PatientController>,
    Path((id, note_id)): Path<(String, String)>,
) -> PageResult<Page> {
    controller.show_update_note(&id, &note_id).await
}

async fn update_note(
    State(controller): State<PatientController>,
    Path((id, note_id)): Path<(String, String)>,
    Form(form): Form<NoteForm>,
) -> PageResult<Page> {
    controller.update_note(&id, &note_id, form).await
}
