//! Diabetes risk service over HTTP.

use async_trait::async_trait;

use super::{ClientResult, RiskAssessor, ServiceEndpoint};
use crate::models::RiskAssessment;

/// Default base URL, routed through the gateway.
pub const DEFAULT_RISK_SERVICE_URL: &str = "http://gateway:8081/medilabo-risk-diabetes-service";

/// `RiskAssessor` backed by the risk microservice. The scoring itself
/// happens remotely.
#[derive(Debug, Clone)]
pub struct HttpRiskAssessor {
    endpoint: ServiceEndpoint,
}

impl HttpRiskAssessor {
    pub fn new(endpoint: ServiceEndpoint) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl RiskAssessor for HttpRiskAssessor {
    async fn get_by_patient_id(&self, patient_id: &str) -> ClientResult<RiskAssessment> {
        self.endpoint.get(&["calculateRisk", patient_id]).await
    }
}
