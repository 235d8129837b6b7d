use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ferrous_lookup_domain::DomainError;
use serde_json::json;
use tracing::error;

/// Example shown to callers that omit the `domain` parameter.
pub const USAGE: &str = "/api/dns?domain=example.com";

pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.0 {
            DomainError::MissingDomain => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "error": "Please provide a domain.",
                    "usage": USAGE,
                })),
            )
                .into_response(),

            DomainError::NoAddressFound(domain) => (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": "Domain not found or no IP address available.",
                    "domain": domain,
                })),
            )
                .into_response(),

            DomainError::UpstreamStatus { status } => {
                let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
                (
                    code,
                    Json(json!({
                        "error": format!("DNS resolver responded with HTTP {}", status),
                    })),
                )
                    .into_response()
            }

            other => {
                error!(error = %other, "DNS lookup failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Failed to resolve DNS.",
                        "details": other.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}
