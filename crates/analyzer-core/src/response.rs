//! Analysis response envelope

use crate::summary::Summary;
use serde::{Deserialize, Serialize};

/// Outcome marker carried by every response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// The envelope returned for every analysis request
///
/// Built once per request and immutable afterwards. Success responses carry
/// the ticker, row count, summary, and narrative fields; error responses
/// carry a human-readable message. Both are served as HTTP 200.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub status: Status,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticker: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows_fetched: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<Summary>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_analysis: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_investigation: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl AnalysisResponse {
    /// Create an error envelope with a human-readable message
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: Status::Error,
            ticker: None,
            rows_fetched: None,
            summary: None,
            ai_analysis: None,
            decision: None,
            sub_investigation: None,
            message: Some(message.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_shape() {
        let response = AnalysisResponse::error("No data found");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "error");
        assert_eq!(json["message"], "No data found");
        // Absent fields must not appear on the wire
        assert!(json.get("summary").is_none());
        assert!(json.get("ai_analysis").is_none());
    }
}
