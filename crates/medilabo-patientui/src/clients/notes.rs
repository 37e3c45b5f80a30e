//! Clinical notes over HTTP.

use async_trait::async_trait;
use reqwest::Method;

use super::{ClientResult, ClinicalNotes, ServiceEndpoint};
use crate::models::Note;

/// Default base URL, routed through the gateway.
pub const DEFAULT_NOTE_SERVICE_URL: &str = "http://gateway:8081/medilabo-note-service";

/// `ClinicalNotes` backed by the notes microservice.
#[derive(Debug, Clone)]
pub struct HttpClinicalNotes {
    endpoint: ServiceEndpoint,
}

impl HttpClinicalNotes {
    pub fn new(endpoint: ServiceEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl ClinicalNotes for HttpClinicalNotes {
    async fn list_by_patient(&self, patient_id: &str) -> ClientResult<Vec<Note>> {
        self.endpoint.get(&["notes", "patient", patient_id]).await
    }

    async fn list_all(&self) -> ClientResult<Vec<Note>> {
        self.endpoint.get(&["notes", "all"]).await
    }

    async fn get_by_id(&self, id: &str) -> ClientResult<Note> {
        self.endpoint.get(&["notes", id]).await
    }

    async fn create(&self, note: &Note) -> ClientResult<Note> {
        self.endpoint.send(Method::POST, &["notes"], note).await
    }

    async fn update(&self, id: &str, note: &Note) -> ClientResult<Note> {
        self.endpoint.send(Method::PUT, &["notes", id], note).await
    }
}
