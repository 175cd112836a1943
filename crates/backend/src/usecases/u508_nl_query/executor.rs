use super::error::GatewayError;
use super::pagination::paginate;
use super::translator::Translator;
use contracts::usecases::u508_nl_query::{QueryRequest, QueryResponse};
use std::sync::Arc;

/// Executor for the natural-language query UseCase
///
/// Validates the request, asks the translator for the full result set and
/// returns the requested page of it.
pub struct QueryExecutor {
    translator: Arc<dyn Translator>,
    page_size: usize,
}

impl QueryExecutor {
    pub fn new(translator: Arc<dyn Translator>, page_size: usize) -> Self {
        Self {
            translator,
            page_size,
        }
    }

    pub async fn execute(&self, request: QueryRequest) -> Result<QueryResponse, GatewayError> {
        let query = request.query.trim();
        if query.is_empty() {
            return Err(GatewayError::EmptyQuery);
        }
        let requested_page = request.page.unwrap_or(1);
        if requested_page == 0 {
            return Err(GatewayError::InvalidPage);
        }

        tracing::info!("Translating query {:?} (page {})", query, requested_page);

        let answer = self.translator.translate(query).await.map_err(|e| {
            tracing::error!("Translator failed for {:?}: {}", query, e);
            e
        })?;

        let page = paginate(answer.results, requested_page, self.page_size);
        tracing::info!(
            "Query answered: {} rows, page {}/{}",
            page.total_count,
            page.page,
            page.total_pages
        );

        Ok(QueryResponse {
            query: Some(query.to_string()),
            sql: answer.sql,
            results: page.rows,
            total_pages: Some(page.total_pages),
            total_count: Some(page.total_count),
        })
    }
}
