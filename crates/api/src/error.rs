//! JSON error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use deptboard_core::filters::DateParseError;
use deptboard_core::lookup::LookupError;
use deptboard_shared::AppError;

/// Handler error rendered as `{ "error", "message" }` with the matching status.
#[derive(Debug)]
pub struct ApiError {
    inner: AppError,
    transient: Option<bool>,
}

impl ApiError {
    /// Returns the wrapped application error.
    pub fn inner(&self) -> &AppError {
        &self.inner
    }
}

impl From<AppError> for ApiError {
    fn from(inner: AppError) -> Self {
        Self {
            inner,
            transient: None,
        }
    }
}

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        let transient = Some(err.is_transient());
        let inner = match err {
            LookupError::SiteNotFound(site_id) => {
                AppError::NotFound(format!("Site {site_id} not found"))
            }
            other => AppError::ExternalService(other.to_string()),
        };
        Self { inner, transient }
    }
}

impl From<DateParseError> for ApiError {
    fn from(err: DateParseError) -> Self {
        AppError::Validation(err.to_string()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.inner.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(error = %self.inner, "request failed");
        }

        let mut body = json!({
            "error": self.inner.error_code(),
            "message": self.inner.to_string(),
        });
        if let Some(transient) = self.transient {
            body["transient"] = json!(transient);
        }

        (status, Json(body)).into_response()
    }
}
