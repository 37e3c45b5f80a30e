//! Runtime configuration.

use std::net::SocketAddr;
use std::time::Duration;

use clap::Parser;

use crate::clients::auth::{DEFAULT_SERVICE_PASSWORD, DEFAULT_SERVICE_USER};
use crate::clients::{
    ServiceCredential, DEFAULT_NOTE_SERVICE_URL, DEFAULT_PATIENT_SERVICE_URL,
    DEFAULT_RISK_SERVICE_URL,
};

/// Patient UI settings, from flags or environment.
#[derive(Clone, Parser)]
#[command(
    name = "medilabo-patientui",
    version,
    about = "Patient UI backend for the Medilabo services"
)]
pub struct PortalConfig {
    /// Address the UI listens on
    #[arg(long, env = "PATIENTUI_LISTEN", default_value = "0.0.0.0:8080")]
    pub listen: SocketAddr,

    /// Base URL of the patient directory
    #[arg(long, env = "PATIENT_SERVICE_URL", default_value = DEFAULT_PATIENT_SERVICE_URL)]
    pub patient_service_url: String,

    /// Base URL of the notes service
    #[arg(long, env = "NOTE_SERVICE_URL", default_value = DEFAULT_NOTE_SERVICE_URL)]
    pub note_service_url: String,

    /// Base URL of the diabetes risk service
    #[arg(long, env = "RISK_SERVICE_URL", default_value = DEFAULT_RISK_SERVICE_URL)]
    pub risk_service_url: String,

    /// Account used for every backend call, whoever is browsing the UI
    #[arg(long, env = "SERVICE_USERNAME", default_value = DEFAULT_SERVICE_USER)]
    pub service_username: String,

    #[arg(
        long,
        env = "SERVICE_PASSWORD",
        default_value = DEFAULT_SERVICE_PASSWORD,
        hide_env_values = true,
        hide_default_value = true
    )]
    pub service_password: String,

    /// Per-request timeout for backend calls, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,
}

impl PortalConfig {
    pub fn credential(&self) -> ServiceCredential {
        ServiceCredential::new(&self.service_username, &self.service_password)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
