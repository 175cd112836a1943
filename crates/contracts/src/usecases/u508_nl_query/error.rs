use serde::{Deserialize, Serialize};

/// Body of a non-2xx answer
///
/// Carries either a `detail` (plain text, or a list of validation items) or a
/// `message`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ErrorDetail>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Text(String),
    Items(Vec<ErrorDetailItem>),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDetailItem {
    pub msg: String,
}

impl ErrorBody {
    pub fn detail(text: impl Into<String>) -> Self {
        Self {
            detail: Some(ErrorDetail::Text(text.into())),
            message: None,
        }
    }

    /// Parses a raw response body; `None` if it is not an error object
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Human-readable text: `detail` first, then `message`
    pub fn text(&self) -> Option<String> {
        let detail = match &self.detail {
            Some(ErrorDetail::Text(text)) => Some(text.clone()),
            Some(ErrorDetail::Items(items)) => Some(
                items
                    .iter()
                    .map(|item| item.msg.as_str())
                    .collect::<Vec<_>>()
                    .join("; "),
            ),
            Some(ErrorDetail::Other(value)) if !value.is_null() => Some(value.to_string()),
            _ => None,
        };

        detail
            .or_else(|| self.message.clone())
            .filter(|text| !text.trim().is_empty())
    }
}
