use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use relnotes_provider::{ErrorKind, ProviderError};
use serde::Serialize;
use serde_json::Value;

use crate::service::{GeneratedDocuments, Generator, ServiceError};
use crate::validation::validate_generate_request;

// ============================================================
// Error Handling
// ============================================================

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Client-facing error with its status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, error: &str, details: Option<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                error: error.to_string(),
                details,
            },
        }
    }

    fn bad_request(error: &str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error, None)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Unsupported(e) => {
                tracing::warn!("Provider selection error: {}", e);
                Self::new(
                    StatusCode::BAD_REQUEST,
                    "Invalid repository URL",
                    Some(e.to_string()),
                )
            }
            ServiceError::InvalidUrl(e) => {
                tracing::warn!("URL parsing error: {}", e);
                Self::new(
                    StatusCode::BAD_REQUEST,
                    "Failed to parse repository URL",
                    Some(e.to_string()),
                )
            }
            ServiceError::Fetch(e) => fetch_error(&e),
        }
    }
}

/// Maps a provider failure to a response. Only `Other` leaks the
/// underlying message.
fn fetch_error(err: &ProviderError) -> ApiError {
    tracing::error!("Error fetching commits: {}", err);

    match (err.kind(), err) {
        (_, ProviderError::Forbidden(_)) => ApiError::new(
            StatusCode::FORBIDDEN,
            "Access denied",
            Some(
                "Insufficient permissions to access this repository. Ensure your token has the required permissions."
                    .to_string(),
            ),
        ),
        (ErrorKind::AuthFailed, _) => ApiError::new(
            StatusCode::UNAUTHORIZED,
            "Authentication failed",
            Some("Invalid or missing access token. Please check your credentials.".to_string()),
        ),
        (ErrorKind::RateLimited, _) => ApiError::new(
            StatusCode::TOO_MANY_REQUESTS,
            "GitHub API rate limit exceeded",
            Some(
                "Please try again later or provide an access token for higher rate limits."
                    .to_string(),
            ),
        ),
        (ErrorKind::NotFound, _) => ApiError::new(
            StatusCode::NOT_FOUND,
            "Repository not found",
            Some(
                "The specified repository does not exist or you do not have access to it."
                    .to_string(),
            ),
        ),
        (ErrorKind::Network, _) => ApiError::new(
            StatusCode::SERVICE_UNAVAILABLE,
            "Network error",
            Some(
                "Unable to connect to GitHub API. Please check your internet connection and try again."
                    .to_string(),
            ),
        ),
        (ErrorKind::Other, _) => ApiError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Failed to fetch commits from repository",
            Some(err.to_string()),
        ),
    }
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================
// Generate
// ============================================================

/// Reads the body leniently so that every failure is a JSON error.
///
/// The content type is ignored and an empty body counts as `{}`, so missing
/// fields produce the validation messages rather than an extractor
/// rejection.
pub async fn generate(
    State(generator): State<Generator>,
    body: Bytes,
) -> Result<Json<GeneratedDocuments>, ApiError> {
    let body = parse_body(&body)?;

    let params = validate_generate_request(&body).map_err(|error| {
        tracing::warn!("Validation error: {}", error);
        ApiError::bad_request(error)
    })?;

    let documents = generator.generate(&params).await?;
    Ok(Json(documents))
}

fn parse_body(body: &[u8]) -> Result<Value, ApiError> {
    if body.trim_ascii().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }

    serde_json::from_slice(body).map_err(|e| {
        tracing::warn!("Malformed request body: {}", e);
        ApiError::new(
            StatusCode::BAD_REQUEST,
            "Request body must be valid JSON",
            Some(e.to_string()),
        )
    })
}
