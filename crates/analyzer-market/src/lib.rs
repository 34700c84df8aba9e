//! Market data access for the AI stock analyzer
//!
//! This crate provides the price-series side of the analysis pipeline:
//!
//! - The [`Bar`] type, one trading day's OHLCV record
//! - The [`MarketData`] trait, the seam the pipeline fetches through
//! - [`YahooMarketData`], the Yahoo Finance implementation
//!
//! A fetched series is ordered by date ascending and may be empty; an empty
//! series is a normal negative outcome, not an error.

pub mod bar;
pub mod error;
pub mod provider;
pub mod yahoo;

// Re-export main types
pub use bar::Bar;
pub use error::{MarketError, Result};
pub use provider::MarketData;
pub use yahoo::YahooMarketData;
