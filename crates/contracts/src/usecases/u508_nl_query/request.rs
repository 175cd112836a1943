use serde::{Deserialize, Serialize};

/// Question sent to `POST /query`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Natural-language question, already trimmed by the sender
    pub query: String,

    /// 1-based page of the result set; the first page when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: None,
        }
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_omitted_when_absent() {
        let json = serde_json::to_string(&QueryRequest::new("top drivers")).unwrap();
        assert_eq!(json, r#"{"query":"top drivers"}"#);
    }

    #[test]
    fn test_page_is_serialized() {
        let json = serde_json::to_string(&QueryRequest::new("top drivers").with_page(2)).unwrap();
        assert_eq!(json, r#"{"query":"top drivers","page":2}"#);
    }
}
