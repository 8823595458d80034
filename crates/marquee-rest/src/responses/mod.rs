//! API response types.
//!
//! Failures are rendered as RFC 7807 problem details. Successful responses
//! carry the service DTOs unwrapped.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use marquee_core::MarqueeError;
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

/// Base path of the user resource.
pub const USERS_PATH: &str = "/api/v1/users";

/// Base path of the movie record resource.
pub const MOVIE_RECORDS_PATH: &str = "/api/v1/movie/records";

const PROBLEM_JSON: &str = "application/problem+json";

/// Title of every payload rejection.
pub const BAD_PAYLOAD_TITLE: &str = "Bad Request on payload";

/// Detail of every payload rejection.
pub const BAD_PAYLOAD_DETAIL: &str = "Validation error on supplied payload";

/// Broad classification of a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ErrorCategory {
    /// Anything that is not about the request payload.
    Generic,
    /// The request body or its fields were rejected.
    Parameters,
}

/// RFC 7807 problem detail body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    pub error_category: ErrorCategory,
    pub timestamp: DateTime<Utc>,
    /// Sorted `"field: message"` lines for payload rejections.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}

impl ProblemDetail {
    /// Creates a generic problem.
    pub fn new(
        status: StatusCode,
        problem_type: impl Into<String>,
        title: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            problem_type: problem_type.into(),
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: None,
            error_category: ErrorCategory::Generic,
            timestamp: Utc::now(),
            errors: Vec::new(),
        }
    }

    /// Creates a payload rejection for the request at `uri`.
    pub fn bad_payload(uri: &str, mut errors: Vec<String>) -> Self {
        errors.sort();
        Self {
            instance: Some(uri.to_string()),
            error_category: ErrorCategory::Parameters,
            errors,
            ..Self::new(StatusCode::BAD_REQUEST, uri, BAD_PAYLOAD_TITLE, BAD_PAYLOAD_DETAIL)
        }
    }
}

impl IntoResponse for ProblemDetail {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, PROBLEM_JSON)], Json(self)).into_response()
    }
}

/// Application error type for Axum.
#[derive(Debug)]
pub struct AppError(pub MarqueeError);

impl From<MarqueeError> for AppError {
    fn from(err: MarqueeError) -> Self {
        Self(err)
    }
}

impl AppError {
    /// Maps the error to the problem detail returned to the client.
    pub fn to_problem(&self) -> ProblemDetail {
        match &self.0 {
            MarqueeError::NotFound { resource_type, .. } => ProblemDetail::new(
                StatusCode::NOT_FOUND,
                resource_path(resource_type),
                format!("{} Not Found", resource_type),
                self.0.to_string(),
            ),
            MarqueeError::Validation(messages) => ProblemDetail {
                instance: None,
                ..ProblemDetail::bad_payload("about:blank", messages.clone())
            },
            other => {
                error!(code = other.error_code(), error = %other, "Request failed");
                ProblemDetail::new(
                    StatusCode::from_u16(other.status_code())
                        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                    "about:blank",
                    "Internal Server Error",
                    "The request could not be completed",
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        self.to_problem().into_response()
    }
}

fn resource_path(resource_type: &str) -> &'static str {
    match resource_type {
        "User" => USERS_PATH,
        "Movie Record" => MOVIE_RECORDS_PATH,
        _ => "about:blank",
    }
}

/// Result type for Axum handlers.
pub type ApiResult<T> = Result<Json<T>, AppError>;

/// Helper to create a success response.
pub fn ok<T: Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(data))
}

/// Helper to create a created (201) response.
pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}
