use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use contracts::usecases::u508_nl_query::QUERY_ENDPOINT;
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::handlers;
use crate::system::middleware::request_logger::request_logger;
use crate::usecases::u508_nl_query::QueryExecutor;

/// Application routes; anything that is not an API route is served from `static_dir`
pub fn configure_routes(executor: Arc<QueryExecutor>, static_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(QUERY_ENDPOINT, post(handlers::u508_nl_query::run_query))
        .with_state(executor)
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(request_logger))
        .layer(cors)
}
