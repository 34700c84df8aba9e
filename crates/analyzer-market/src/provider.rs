//! Market data provider trait definition

use crate::{Bar, Result};
use async_trait::async_trait;
use chrono::NaiveDate;

/// Trait for historical market data sources
///
/// Implementations fetch a daily price series for a ticker over a date
/// range. The returned bars are ordered by date ascending; an empty vector
/// means the provider has no data for the range and is not an error.
#[async_trait]
pub trait MarketData: Send + Sync {
    /// Fetch daily bars for `ticker` between `start` and `end` (inclusive)
    async fn fetch(&self, ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<Bar>>;

    /// Get the provider name (e.g., "yahoo")
    fn name(&self) -> &str;
}
