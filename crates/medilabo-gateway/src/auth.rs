//! HTTP Basic authentication for every request passing the gateway.

use axum::extract::{Request, State};
use axum::http::{header, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use thiserror::Error;
use tracing::{debug, warn};

use crate::users::Role;
use crate::{GatewayError, GatewayState};

/// `WWW-Authenticate` value sent with every 401.
pub const CHALLENGE: &str = "Basic realm=\"medilabo\"";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("missing Authorization header")]
    Missing,

    #[error("malformed Basic credentials")]
    Malformed,

    #[error("bad credentials")]
    BadCredentials,
}

/// Username and password decoded from a Basic header.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    pub fn from_header(value: &HeaderValue) -> Result<Self, AuthError> {
        let text = value.to_str().map_err(|_| AuthError::Malformed)?;
        let (scheme, encoded) = text.trim().split_once(' ').ok_or(AuthError::Malformed)?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return Err(AuthError::Malformed);
        }

        let decoded = STANDARD
            .decode(encoded.trim())
            .map_err(|_| AuthError::Malformed)?;
        let decoded = String::from_utf8(decoded).map_err(|_| AuthError::Malformed)?;
        let (username, password) = decoded.split_once(':').ok_or(AuthError::Malformed)?;

        Ok(Self {
            username: username.to_string(),
            password: password.to_string(),
        })
    }

    /// Encode as an `Authorization` header value.
    pub fn to_header_value(&self) -> String {
        format!(
            "Basic {}",
            STANDARD.encode(format!("{}:{}", self.username, self.password))
        )
    }
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Principal attached to authenticated requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
    pub roles: Vec<Role>,
}

/// Middleware rejecting any request without valid Basic credentials.
pub async fn require_basic_auth(
    State(state): State<GatewayState>,
    mut request: Request,
    next: Next,
) -> Result<Response, GatewayError> {
    let value = request
        .headers()
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::Missing)?;
    let credentials = BasicCredentials::from_header(value)?;

    let account = match state
        .users
        .authenticate(&credentials.username, &credentials.password)
    {
        Some(account) => account,
        None => {
            warn!(username = %credentials.username, path = %request.uri().path(), "authentication failed");
            return Err(AuthError::BadCredentials.into());
        }
    };

    debug!(username = %account.username, "authenticated");
    let user = AuthenticatedUser {
        username: account.username.clone(),
        roles: account.roles.clone(),
    };
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
