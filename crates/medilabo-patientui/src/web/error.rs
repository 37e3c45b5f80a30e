//! Page-level errors.
//!
//! Only form validation is handled inside the page flows. Everything else
//! ends up here and becomes a generic error response: no partial page, no
//! retry, no fallback content.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::warn;

use crate::clients::ClientError;
use crate::models::IdError;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("Invalid patient id: {0}")]
    InvalidId(#[from] IdError),

    #[error(transparent)]
    Remote(#[from] ClientError),
}

impl PageError {
    /// HTTP status of the generic error response.
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::InvalidId(_) => StatusCode::BAD_REQUEST,
            PageError::Remote(ClientError::NotFound(_)) => StatusCode::NOT_FOUND,
            PageError::Remote(ClientError::Rejected(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            PageError::Remote(ClientError::Setup(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            PageError::Remote(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

pub type PageResult<T> = Result<T, PageError>;

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "page request failed");
        let body = Json(serde_json::json!({
            "error": self.to_string()
        }));
        (status, body).into_response()
    }
}
