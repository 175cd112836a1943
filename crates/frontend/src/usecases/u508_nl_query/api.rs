use crate::shared::api_utils::api_url;
use contracts::usecases::u508_nl_query::{ErrorBody, QueryRequest, QueryResponse, QUERY_ENDPOINT};
use gloo_net::http::Request;
use thiserror::Error;

/// Failure of one submission; `Display` is the text shown to the user
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("Please enter a query")]
    EmptyQuery,

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("{message}")]
    Http { status: u16, message: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Message for a non-2xx answer: the body's `detail`/`message`, or a generic one
pub fn http_error_message(status: u16, body: &str) -> String {
    ErrorBody::parse(body)
        .and_then(|body| body.text())
        .unwrap_or_else(|| format!("Request failed with status {}", status))
}

/// Decodes the text of an answer with the given status
pub fn decode_response(status: u16, body: &str) -> Result<QueryResponse, QueryError> {
    if !(200..300).contains(&status) {
        return Err(QueryError::Http {
            status,
            message: http_error_message(status, body),
        });
    }

    serde_json::from_str(body).map_err(|e| QueryError::Decode(e.to_string()))
}

/// POST /query
pub async fn run_query(request: &QueryRequest) -> Result<QueryResponse, QueryError> {
    let url = api_url(QUERY_ENDPOINT);

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| QueryError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| QueryError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| QueryError::Decode(e.to_string()))?;

    decode_response(status, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_surfaced() {
        let err = decode_response(400, r#"{"detail":"bad query"}"#).unwrap_err();
        assert!(err.to_string().contains("bad query"));
        assert_eq!(
            err,
            QueryError::Http {
                status: 400,
                message: "bad query".to_string()
            }
        );
    }

    #[test]
    fn test_generic_fallback() {
        let err = decode_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn test_success_body_is_parsed() {
        let response = decode_response(
            200,
            r#"{"sql":"SELECT 1","results":[{"x":1}],"total_pages":1,"total_count":1}"#,
        )
        .unwrap();
        assert_eq!(response.results.len(), 1);
        assert_eq!(response.total_count, Some(1));
    }

    #[test]
    fn test_malformed_success_body() {
        let err = decode_response(200, "not json").unwrap_err();
        assert!(matches!(err, QueryError::Decode(_)));
    }
}
