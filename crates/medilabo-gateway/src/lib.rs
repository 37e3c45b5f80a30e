//! Medilabo Gateway
//!
//! Single entry point in front of the patient, notes and risk services.
//! Every request must carry valid HTTP Basic credentials; authenticated
//! requests are routed by their first path segment.
//!
//! ```text
//!   /medilabo-patient-service/patient/1
//!        │                    │
//!        ▼                    ▼
//!   route table ──►  http://patient-service:8082/patient/1
//! ```
//!
//! # Modules
//!
//! - [`users`]: Accounts, roles and password hashes
//! - [`auth`]: Basic header parsing and the authentication middleware
//! - [`proxy`]: Route table and forwarding handler
//! - [`config`]: Command-line/environment configuration

pub mod auth;
pub mod config;
pub mod proxy;
pub mod users;

pub use auth::{AuthError, AuthenticatedUser, BasicCredentials};
pub use config::{GatewayConfig, RouteSpec};
pub use proxy::RouteTable;
pub use users::{Role, UserAccount, UserError, UserStore};

use std::sync::Arc;
use std::time::Duration;

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::extract::DefaultBodyLimit;
use axum::{middleware, Json, Router};
use thiserror::Error;
use tracing::warn;

/// Errors returned to gateway clients.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Unauthorized: {0}")]
    Unauthorized(#[from] AuthError),

    #[error("No route for {0}")]
    UnknownService(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Request body exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("Gateway setup failed: {0}")]
    Setup(String),
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            GatewayError::UnknownService(_) => StatusCode::NOT_FOUND,
            GatewayError::BadRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            GatewayError::Upstream(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Setup(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(error = %self, "request failed");
        }

        let mut response =
            (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response();
        if matches!(self, GatewayError::Unauthorized(_)) {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static(auth::CHALLENGE),
            );
        }
        response
    }
}

/// Shared, immutable gateway state.
#[derive(Clone)]
pub struct GatewayState {
    pub users: Arc<UserStore>,
    pub routes: Arc<RouteTable>,
    pub http: reqwest::Client,
}

// =========================================================================
// Factory Functions
// =========================================================================

impl GatewayState {
    pub fn new(users: UserStore, routes: RouteTable, timeout: Duration) -> GatewayResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| GatewayError::Setup(e.to_string()))?;

        Ok(Self {
            users: Arc::new(users),
            routes: Arc::new(routes),
            http,
        })
    }

    /// Demo accounts plus the routes, timeout and password cost from `config`.
    pub fn from_config(config: &GatewayConfig) -> GatewayResult<Self> {
        let users = UserStore::demo_accounts(config.password_cost)
            .map_err(|e| GatewayError::Setup(e.to_string()))?;
        Self::new(users, RouteTable::new(config.routes()), config.upstream_timeout())
    }
}

/// Every path goes through authentication, then the forwarder.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .fallback(proxy::forward)
        .layer(DefaultBodyLimit::max(proxy::MAX_BODY_BYTES))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_basic_auth,
        ))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            GatewayError::Unauthorized(AuthError::Missing).status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            GatewayError::UnknownService("/x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            GatewayError::PayloadTooLarge(10).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            GatewayError::Setup("tls".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_carries_challenge() {
        let response = GatewayError::from(AuthError::BadCredentials).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers()[header::WWW_AUTHENTICATE],
            auth::CHALLENGE
        );
    }

    #[test]
    fn test_state_from_default_config() {
        let config =
            GatewayConfig::try_parse_from(["medilabo-gateway", "--password-cost", "4"]).unwrap();
        let state = GatewayState::from_config(&config).unwrap();
        assert_eq!(state.users.len(), 2);
        assert!(state.users.authenticate("admin", "admin").is_some());
        assert_eq!(state.routes.len(), 3);
        assert!(state.routes.upstream("medilabo-risk-diabetes-service").is_some());
    }
}
