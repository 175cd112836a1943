use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use contracts::usecases::u508_nl_query::{QueryRequest, QueryResponse};
use std::sync::Arc;

use crate::usecases::u508_nl_query::{GatewayError, QueryExecutor};

/// POST /query
pub async fn run_query(
    State(executor): State<Arc<QueryExecutor>>,
    payload: Result<Json<QueryRequest>, JsonRejection>,
) -> Result<Json<QueryResponse>, GatewayError> {
    let Json(request) = payload.map_err(|e| GatewayError::InvalidBody(e.body_text()))?;
    executor.execute(request).await.map(Json)
}
