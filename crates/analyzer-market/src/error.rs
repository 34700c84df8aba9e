//! Error types for market data operations

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for market data operations
pub type Result<T> = std::result::Result<T, MarketError>;

/// Errors that can occur while fetching market data
#[derive(Debug, Error)]
pub enum MarketError {
    /// Upstream provider failed (network, auth, quota, malformed response)
    #[error("market data provider error: {0}")]
    Provider(String),

    /// The requested date range cannot be expressed as provider timestamps
    #[error("invalid date range {start}..{end}")]
    InvalidRange {
        start: NaiveDate,
        end: NaiveDate,
    },
}
