//! Yahoo Finance market data client

use crate::error::{MarketError, Result};
use crate::{Bar, MarketData};
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use time::OffsetDateTime;
use tracing::{debug, instrument};
use yahoo_finance_api as yahoo;

/// Yahoo Finance implementation of [`MarketData`]
///
/// Fetches daily quote history. No API key is required.
pub struct YahooMarketData {}

impl YahooMarketData {
    /// Create a new Yahoo Finance client
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for YahooMarketData {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert an inclusive calendar date range to provider timestamps
///
/// The end of the range is midnight after `end`, so bars on the end date
/// itself are included.
fn range_to_timestamps(start: NaiveDate, end: NaiveDate) -> Result<(OffsetDateTime, OffsetDateTime)> {
    if start > end {
        return Err(MarketError::InvalidRange { start, end });
    }

    let day_after_end = end
        .succ_opt()
        .ok_or(MarketError::InvalidRange { start, end })?;

    let start_ts = start.and_time(NaiveTime::MIN).and_utc().timestamp();
    let end_ts = day_after_end.and_time(NaiveTime::MIN).and_utc().timestamp();

    let start_odt = OffsetDateTime::from_unix_timestamp(start_ts)
        .map_err(|_| MarketError::InvalidRange { start, end })?;
    let end_odt = OffsetDateTime::from_unix_timestamp(end_ts)
        .map_err(|_| MarketError::InvalidRange { start, end })?;

    Ok((start_odt, end_odt))
}

#[async_trait]
impl MarketData for YahooMarketData {
    #[instrument(skip(self))]
    async fn fetch(&self, ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<Vec<Bar>> {
        let provider =
            yahoo::YahooConnector::new().map_err(|e| MarketError::Provider(e.to_string()))?;

        let (start_odt, end_odt) = range_to_timestamps(start, end)?;

        let response = provider
            .get_quote_history(ticker, start_odt, end_odt)
            .await
            .map_err(|e| MarketError::Provider(e.to_string()))?;

        let quotes = response
            .quotes()
            .map_err(|e| MarketError::Provider(e.to_string()))?;

        let mut bars: Vec<Bar> = quotes
            .iter()
            .map(|q| Bar {
                date: DateTime::from_timestamp(q.timestamp as i64, 0)
                    .unwrap_or_else(Utc::now)
                    .date_naive(),
                open: q.open,
                high: q.high,
                low: q.low,
                close: q.close,
                volume: q.volume,
            })
            .collect();

        // Callers rely on date-ascending order
        bars.sort_by_key(|b| b.date);

        debug!(ticker, rows = bars.len(), "Fetched quote history");

        Ok(bars)
    }

    fn name(&self) -> &'static str {
        "yahoo"
    }
}
