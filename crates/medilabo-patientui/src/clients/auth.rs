//! Outbound service credential.
//!
//! The UI backend talks to every downstream service as one fixed service
//! identity. It does not forward the browsing user's credentials: whoever is
//! logged into the UI, backend calls authenticate as this single account.
//! The credential is installed once as a default header on the shared
//! `reqwest::Client`, so every request issued through it carries it.

use std::fmt;
use std::time::Duration;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use super::{ClientError, ClientResult};

/// Default downstream service account.
pub const DEFAULT_SERVICE_USER: &str = "admin";
pub const DEFAULT_SERVICE_PASSWORD: &str = "admin";

/// Basic-auth credential of the UI backend's service identity.
#[derive(Clone, PartialEq, Eq)]
pub struct ServiceCredential {
    username: String,
    password: String,
}

impl ServiceCredential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// `Basic base64(username:password)`, flagged sensitive.
    pub fn authorization_header(&self) -> ClientResult<HeaderValue> {
        let encoded = STANDARD.encode(format!("{}:{}", self.username, self.password));
        let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))
            .map_err(|e| ClientError::Setup(format!("invalid credential header: {}", e)))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl Default for ServiceCredential {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_USER, DEFAULT_SERVICE_PASSWORD)
    }
}

impl fmt::Debug for ServiceCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceCredential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Build the HTTP client shared by all backend clients.
pub fn build_http_client(
    credential: &ServiceCredential,
    timeout: Duration,
) -> ClientResult<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, credential.authorization_header()?);

    reqwest::Client::builder()
        .default_headers(headers)
        .timeout(timeout)
        .build()
        .map_err(|e| ClientError::Setup(format!("failed to create HTTP client: {}", e)))
}
