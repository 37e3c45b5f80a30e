//! Typed clients for the backend services.
//!
//! Each service is described by an async trait so the page controller can be
//! driven by in-memory fakes in tests. The HTTP implementations share one
//! `reqwest::Client` carrying the outbound credential (see [`auth`]).
//!
//! Clients are stateless: no retries, no caching.

pub mod auth;
mod notes;
mod patients;
mod risk;

pub use auth::{build_http_client, ServiceCredential};
pub use notes::*;
pub use patients::*;
pub use risk::*;

use async_trait::async_trait;
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{Note, Patient, PatientId, RiskAssessment};

/// Remote call errors.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Request rejected by remote service: {0}")]
    Rejected(String),

    #[error("Remote service unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP client setup failed: {0}")]
    Setup(String),
}

pub type ClientResult<T> = Result<T, ClientError>;

// =========================================================================
// Service Contracts
// =========================================================================

/// Patient directory: CRUD on patient records.
#[async_trait]
pub trait PatientDirectory: Send + Sync {
    async fn list_all(&self) -> ClientResult<Vec<Patient>>;

    /// Fails with [`ClientError::NotFound`] if absent.
    async fn get_by_id(&self, id: PatientId) -> ClientResult<Patient>;

    /// Persist a new patient; the directory assigns the id.
    async fn create(&self, patient: &Patient) -> ClientResult<Patient>;

    async fn update(&self, id: PatientId, patient: &Patient) -> ClientResult<Patient>;
}

/// Clinical notes, keyed by the canonical patient string.
#[async_trait]
pub trait ClinicalNotes: Send + Sync {
    /// Empty when the patient has no notes.
    async fn list_by_patient(&self, patient_id: &str) -> ClientResult<Vec<Note>>;

    async fn list_all(&self) -> ClientResult<Vec<Note>>;

    async fn get_by_id(&self, id: &str) -> ClientResult<Note>;

    /// Persist a new note. The caller must leave `note.id` unset.
    async fn create(&self, note: &Note) -> ClientResult<Note>;

    async fn update(&self, id: &str, note: &Note) -> ClientResult<Note>;
}

/// Read-only access to the diabetes risk service.
#[async_trait]
pub trait RiskAssessor: Send + Sync {
    async fn get_by_patient_id(&self, patient_id: &str) -> ClientResult<RiskAssessment>;
}

// =========================================================================
// HTTP Plumbing
// =========================================================================

/// Base URL of one backend service plus the shared HTTP client.
#[derive(Debug, Clone)]
pub struct ServiceEndpoint {
    http: reqwest::Client,
    base_url: Url,
}

impl ServiceEndpoint {
    /// Create an endpoint rooted at `base_url` (e.g.
    /// `http://gateway:8081/medilabo-patient-service`).
    pub fn new(http: reqwest::Client, base_url: &str) -> ClientResult<Self> {
        let cleaned = base_url.trim_end_matches('/');
        let base_url = Url::parse(cleaned)
            .map_err(|e| ClientError::Setup(format!("invalid URL '{}': {}", cleaned, e)))?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ClientError::Setup(format!(
                "URL must use http or https scheme, got: {}",
                base_url.scheme()
            )));
        }

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Append percent-encoded path segments to the base URL.
    fn url(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Setup(format!("cannot append to {}", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> ClientResult<T> {
        let url = self.url(segments)?;
        debug!(%url, "GET");
        let response = self.http.get(url.clone()).send().await?;
        handle_response(&url, response).await
    }

    async fn send<B, T>(&self, method: Method, segments: &[&str], body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = self.url(segments)?;
        debug!(%url, %method, "sending");
        let response = self
            .http
            .request(method, url.clone())
            .json(body)
            .send()
            .await?;
        handle_response(&url, response).await
    }
}

/// Map a backend response onto the client error kinds.
async fn handle_response<T: DeserializeOwned>(
    url: &Url,
    response: reqwest::Response,
) -> ClientResult<T> {
    match response.status() {
        status if status.is_success() => {
            let bytes = response.bytes().await?;
            Ok(serde_json::from_slice(&bytes)?)
        }
        StatusCode::NOT_FOUND => Err(ClientError::NotFound(url.path().to_string())),
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Rejected(body))
        }
        status => Err(ClientError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint(base: &str) -> ClientResult<ServiceEndpoint> {
        ServiceEndpoint::new(reqwest::Client::new(), base)
    }

    #[test]
    fn test_endpoint_rejects_bad_urls() {
        assert!(endpoint("not a url").is_err());
        assert!(endpoint("ftp://gateway/medilabo-patient-service").is_err());
        assert!(endpoint("http://gateway:8081/medilabo-patient-service").is_ok());
    }

    #[test]
    fn test_url_building() {
        let ep = endpoint("http://gateway:8081/medilabo-note-service/").unwrap();
        assert_eq!(
            ep.url(&["notes", "patient", "7"]).unwrap().as_str(),
            "http://gateway:8081/medilabo-note-service/notes/patient/7"
        );
    }

    #[test]
    fn test_url_segments_are_encoded() {
        let ep = endpoint("http://gateway:8081/medilabo-note-service").unwrap();
        assert_eq!(
            ep.url(&["notes", "a/b c"]).unwrap().as_str(),
            "http://gateway:8081/medilabo-note-service/notes/a%2Fb%20c"
        );
    }

    #[test]
    fn test_root_base_url() {
        let ep = endpoint("http://localhost:8082").unwrap();
        assert_eq!(
            ep.url(&["patient", "all"]).unwrap().as_str(),
            "http://localhost:8082/patient/all"
        );
    }
}
