use super::error::GatewayError;
use async_trait::async_trait;
use contracts::usecases::u508_nl_query::{ErrorBody, QueryRequest, QueryResponse};

/// Service that turns a question into SQL and returns the full result set
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, query: &str) -> Result<QueryResponse, GatewayError>;
}

/// Translator reached over HTTP: `POST <url>` with `{ "query": ... }`
pub struct HttpTranslator {
    client: reqwest::Client,
    url: String,
}

impl HttpTranslator {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate(&self, query: &str) -> Result<QueryResponse, GatewayError> {
        let response = self
            .client
            .post(&self.url)
            .json(&QueryRequest::new(query))
            .send()
            .await
            .map_err(|e| GatewayError::Unreachable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = ErrorBody::parse(&body)
                .and_then(|body| body.text())
                .unwrap_or_else(|| {
                    format!("Translator responded with status {}", status.as_u16())
                });
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<QueryResponse>()
            .await
            .map_err(|e| GatewayError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::Router;
    use tokio::net::TcpListener;

    /// Serves `status` and `body` for every `POST /query` on a free local port
    async fn upstream(status: StatusCode, body: &'static str) -> String {
        let app = Router::new().route(
            "/query",
            post(move || async move {
                (status, [("content-type", "application/json")], body)
            }),
        );
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}/query", addr)
    }

    #[tokio::test]
    async fn test_rejection_is_relayed_with_its_status() {
        let url = upstream(
            StatusCode::BAD_REQUEST,
            r#"{"detail":"Only SELECT queries allowed"}"#,
        )
        .await;

        let err = HttpTranslator::new(url).translate("drop table drivers").await.unwrap_err();
        match err {
            GatewayError::Rejected { status, detail } => {
                assert_eq!(status, 400);
                assert_eq!(detail, "Only SELECT queries allowed");
            }
            other => panic!("expected Rejected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_rejection_without_detail_gets_fallback() {
        let url = upstream(StatusCode::INTERNAL_SERVER_ERROR, "oops").await;

        let err = HttpTranslator::new(url).translate("q").await.unwrap_err();
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Translator responded with status 500");
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let url = upstream(StatusCode::OK, "not json").await;

        let err = HttpTranslator::new(url).translate("q").await.unwrap_err();
        assert!(matches!(err, GatewayError::Malformed(_)));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_null_results_are_an_empty_answer() {
        let url = upstream(StatusCode::OK, r#"{"sql":"SELECT 1","results":null}"#).await;

        let answer = HttpTranslator::new(url).translate("q").await.unwrap();
        assert_eq!(answer.sql.as_deref(), Some("SELECT 1"));
        assert!(answer.results.is_empty());
    }
}
