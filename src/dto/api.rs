//! Fixed-shape bodies exchanged with the remote API.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::domain::types::ChannelKind;

/// One page of a list endpoint.
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    /// Total number of items across all pages.
    #[serde(default)]
    pub total: u64,
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

/// Result of the potential prospects count pre-flight call.
#[derive(Debug, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

/// Body of a quick search creation request.
#[derive(Debug, Serialize)]
pub struct CreateQuickSearchPayload<'a> {
    pub channel_id: ChannelKind,
    pub url: &'a str,
}

/// File type requested from the prospects export endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Csv,
    Xlsx,
    Other(String),
}

impl ExportFormat {
    pub fn as_str(&self) -> &str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Other(value) => value,
        }
    }
}

impl From<&str> for ExportFormat {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => ExportFormat::Csv,
            "xlsx" => ExportFormat::Xlsx,
            _ => ExportFormat::Other(value.trim().to_string()),
        }
    }
}

impl Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn page_tolerates_missing_data() {
        let page: Page<u32> = serde_json::from_value(json!({"total": 0})).unwrap();

        assert_eq!(page.total, 0);
        assert!(page.data.is_empty());
    }

    #[test]
    fn export_format_parses_known_and_custom_types() {
        assert_eq!(ExportFormat::from("CSV"), ExportFormat::Csv);
        assert_eq!(ExportFormat::from(" xlsx "), ExportFormat::Xlsx);
        assert_eq!(
            ExportFormat::from("ndjson"),
            ExportFormat::Other("ndjson".to_string())
        );
        assert_eq!(ExportFormat::default().to_string(), "csv");
    }

    #[test]
    fn quick_search_payload_uses_channel_wire_id() {
        let payload = CreateQuickSearchPayload {
            channel_id: ChannelKind::SocialPlatform,
            url: "https://social.example/someone",
        };

        let value = serde_json::to_value(payload).unwrap();

        assert_eq!(
            value,
            json!({"channel_id": 2, "url": "https://social.example/someone"})
        );
    }
}
