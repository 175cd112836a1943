use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use contracts::usecases::u508_nl_query::ErrorBody;
use thiserror::Error;

/// Failure of `POST /query`, answered as `{ "detail": ... }`
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Query must not be empty")]
    EmptyQuery,

    #[error("Page must be 1 or greater")]
    InvalidPage,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Translator is unreachable: {0}")]
    Unreachable(String),

    /// Non-2xx answer of the translator, relayed with its own status
    #[error("{detail}")]
    Rejected { status: u16, detail: String },

    #[error("Malformed translator response: {0}")]
    Malformed(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::EmptyQuery | Self::InvalidPage | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Unreachable(_) | Self::Malformed(_) => StatusCode::BAD_GATEWAY,
            Self::Rejected { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody::detail(self.to_string()))).into_response()
    }
}
