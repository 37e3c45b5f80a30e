//! Patient directory over HTTP.

use async_trait::async_trait;
use reqwest::Method;

use super::{ClientResult, PatientDirectory, ServiceEndpoint};
use crate::models::{Patient, PatientId};

/// Default base URL, routed through the gateway.
pub const DEFAULT_PATIENT_SERVICE_URL: &str = "http://gateway:8081/medilabo-patient-service";

/// `PatientDirectory` backed by the patient microservice.
#[derive(Debug, Clone)]
pub struct HttpPatientDirectory {
    endpoint: ServiceEndpoint,
}

impl HttpPatientDirectory {
    pub fn new(endpoint: ServiceEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl PatientDirectory for HttpPatientDirectory {
    async fn list_all(&self) -> ClientResult<Vec<Patient>> {
        self.endpoint.get(&["patient", "all"]).await
    }

    async fn get_by_id(&self, id: PatientId) -> ClientResult<Patient> {
        self.endpoint.get(&["patient", &id.to_string()]).await
    }

    async fn create(&self, patient: &Patient) -> ClientResult<Patient> {
        self.endpoint.send(Method::POST, &["patient"], patient).await
    }

    async fn update(&self, id: PatientId, patient: &Patient) -> ClientResult<Patient> {
        self.endpoint
            .send(Method::PUT, &["patient", &id.to_string()], patient)
            .await
    }
}
