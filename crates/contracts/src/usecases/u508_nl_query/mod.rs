pub mod error;
pub mod request;
pub mod response;

pub use error::{ErrorBody, ErrorDetail};
pub use request::QueryRequest;
pub use response::{QueryResponse, Row};

use crate::usecases::common::UseCaseMetadata;

/// Path of the single endpoint both sides agree on
pub const QUERY_ENDPOINT: &str = "/query";

pub struct NlQuery;

impl UseCaseMetadata for NlQuery {
    fn usecase_index() -> &'static str {
        "u508"
    }

    fn usecase_name() -> &'static str {
        "nl_query"
    }

    fn display_name() -> &'static str {
        "Ask the database"
    }

    fn description() -> &'static str {
        "Turns a natural-language question into SQL and shows the result set"
    }
}
