use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One result record keyed by column name, in the column order of the query
pub type Row = serde_json::Map<String, Value>;

/// Successful answer of `POST /query`
///
/// `total_pages`/`total_count` describe the whole result set while `results`
/// holds only the requested page. Servers that predate pagination leave both
/// out (and may send a `count` field, which is ignored).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    /// Echo of the question, when the server sends it back
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    #[serde(default)]
    pub sql: Option<String>,

    /// Malformed result sets decode as empty, see [`rows_or_empty`]
    #[serde(default, deserialize_with = "rows_or_empty")]
    pub results: Vec<Row>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u64>,
}

/// Reads `results` as a list of records
///
/// `null`, a non-array or an array holding anything other than objects is a
/// malformed result set and yields no rows instead of failing the answer.
fn rows_or_empty<'de, D>(deserializer: D) -> Result<Vec<Row>, D::Error>
where
    D: Deserializer<'de>,
{
    let items = match Option::<Value>::deserialize(deserializer)? {
        None => return Ok(Vec::new()),
        Some(Value::Array(items)) => items,
        Some(other) => {
            log::warn!("Ignoring malformed results: expected a list, got {}", other);
            return Ok(Vec::new());
        }
    };

    let mut rows = Vec::with_capacity(items.len());
    for item in items {
        match item {
            Value::Object(row) => rows.push(row),
            other => {
                log::warn!("Ignoring malformed results: row {} is not an object", other);
                return Ok(Vec::new());
            }
        }
    }
    Ok(rows)
}

impl QueryResponse {
    /// SQL text when the server returned a non-blank one
    pub fn sql_text(&self) -> Option<&str> {
        self.sql.as_deref().filter(|s| !s.trim().is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_shape() {
        let body = r#"{
            "sql": "SELECT 1",
            "results": [{"b": 1, "a": 2}],
            "total_pages": 3,
            "total_count": 120
        }"#;
        let response: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.sql_text(), Some("SELECT 1"));
        assert_eq!(response.total_pages, Some(3));
        assert_eq!(response.total_count, Some(120));
        let keys: Vec<&str> = response.results[0].keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }

    #[test]
    fn test_legacy_shape_ignores_count() {
        let body = r#"{"query": "q", "sql": "SELECT 1", "results": [], "count": 0}"#;
        let response: QueryResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.query.as_deref(), Some("q"));
        assert!(response.is_empty());
        assert_eq!(response.total_pages, None);
    }

    #[test]
    fn test_null_results_are_no_results() {
        let response: QueryResponse =
            serde_json::from_str(r#"{"sql":"SELECT 1","results":null}"#).unwrap();
        assert!(response.is_empty());
        assert_eq!(response.sql_text(), Some("SELECT 1"));
    }

    #[test]
    fn test_malformed_results_are_no_results() {
        for results in [r#""oops""#, "42", r#"{"a": 1}"#, r#"[{"a": 1}, 2]"#, "[[1, 2]]"] {
            let body = format!(r#"{{"sql":"SELECT 1","results":{}}}"#, results);
            let response: QueryResponse = serde_json::from_str(&body).unwrap();
            assert!(response.is_empty(), "results {} should decode as empty", results);
        }
    }

    #[test]
    fn test_blank_sql_is_absent() {
        let response: QueryResponse = serde_json::from_str(r#"{"sql": "  "}"#).unwrap();
        assert_eq!(response.sql_text(), None);
    }
}
