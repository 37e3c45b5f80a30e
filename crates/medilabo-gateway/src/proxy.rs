//! Route table and request forwarding.
//!
//! The first path segment names the service; the rest of the path and the
//! query are appended to that service's upstream base URL.

use std::collections::HashMap;
use std::time::Instant;

use axum::body::{Body, Bytes};
use axum::extract::rejection::BytesRejection;
use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::Response;
use axum::Extension;
use reqwest::Url;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::AuthenticatedUser;
use crate::config::RouteSpec;
use crate::{GatewayError, GatewayResult, GatewayState};

/// Largest request body forwarded upstream. Enforced by the router's
/// body limit layer.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Correlation header added to upstream requests and relayed responses.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

const HOP_BY_HOP: &[&str] = &[
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
];

/// Service name → upstream base URL.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, Url>,
}

impl RouteTable {
    pub fn new(specs: impl IntoIterator<Item = RouteSpec>) -> Self {
        Self {
            routes: specs
                .into_iter()
                .map(|spec| (spec.service, spec.upstream))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn upstream(&self, service: &str) -> Option<&Url> {
        self.routes.get(service)
    }

    /// Build the upstream URL for a gateway path, stripping the service
    /// prefix.
    ///
    /// Paths with `.` or `..` segments are refused so the result always
    /// stays under the route's base path.
    pub fn resolve(&self, path: &str, query: Option<&str>) -> GatewayResult<Url> {
        let trimmed = path.strip_prefix('/').unwrap_or(path);
        let (service, rest) = match trimmed.find('/') {
            Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
            None => (trimmed, ""),
        };

        let base = self
            .routes
            .get(service)
            .ok_or_else(|| GatewayError::UnknownService(path.to_string()))?;
        if rest.split('/').any(is_dot_segment) {
            return Err(GatewayError::BadRequest(format!(
                "dot segments are not allowed: {}",
                path
            )));
        }

        let mut url = base.clone();
        url.set_path(&format!("{}{}", base.path().trim_end_matches('/'), rest));
        url.set_query(query);
        Ok(url)
    }
}

/// `.` or `..`, including percent-encoded dots.
fn is_dot_segment(segment: &str) -> bool {
    let decoded = segment.to_ascii_lowercase().replace("%2e", ".");
    decoded == "." || decoded == ".."
}

fn is_hop_by_hop(name: &HeaderName) -> bool {
    HOP_BY_HOP.contains(&name.as_str())
}

/// Copy end-to-end headers. `Host` and `Content-Length` are recomputed by
/// the client on each side.
fn end_to_end_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| {
            !is_hop_by_hop(name) && **name != header::HOST && **name != header::CONTENT_LENGTH
        })
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Fallback handler forwarding every authenticated request upstream.
pub async fn forward(
    State(state): State<GatewayState>,
    Extension(user): Extension<AuthenticatedUser>,
    method: Method,
    uri: Uri,
    request_headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> GatewayResult<Response> {
    let started = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let target = state.routes.resolve(uri.path(), uri.query())?;

    let body = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            GatewayError::PayloadTooLarge(MAX_BODY_BYTES)
        } else {
            GatewayError::BadRequest(format!("unreadable request body: {}", rejection.body_text()))
        }
    })?;

    let mut headers = end_to_end_headers(&request_headers);
    let id_value = HeaderValue::from_str(&request_id)
        .map_err(|e| GatewayError::BadRequest(e.to_string()))?;
    headers.insert(REQUEST_ID_HEADER, id_value.clone());

    let upstream = state
        .http
        .request(method.clone(), target.clone())
        .headers(headers)
        .body(body)
        .send()
        .await
        .map_err(|e| {
            warn!(%request_id, %target, error = %e, "upstream request failed");
            GatewayError::Upstream(e)
        })?;

    let status = upstream.status();
    let mut response_headers = end_to_end_headers(upstream.headers());
    response_headers.insert(REQUEST_ID_HEADER, id_value);
    let bytes = upstream.bytes().await?;

    info!(
        %request_id,
        user = %user.username,
        %method,
        path = %uri.path(),
        %target,
        status = status.as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "forwarded"
    );

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = response_headers;
    Ok(response)
}
