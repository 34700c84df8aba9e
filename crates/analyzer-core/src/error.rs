//! Error types for the analysis pipeline

use thiserror::Error;

/// Result type alias for analysis operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Errors that can occur while running an analysis
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The market data source returned an empty series for the range
    #[error("No data found")]
    NoData,

    /// Percent change is undefined because the series starts at a zero close
    #[error("degenerate price series: start price is zero")]
    DegenerateSeries,

    /// The market data fetch failed
    #[error(transparent)]
    Market(#[from] analyzer_market::MarketError),

    /// Prompt template rendering failed
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}
