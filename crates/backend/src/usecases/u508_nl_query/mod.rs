pub mod error;
pub mod executor;
pub mod pagination;
pub mod translator;

pub use error::GatewayError;
pub use executor::QueryExecutor;
pub use translator::{HttpTranslator, Translator};
