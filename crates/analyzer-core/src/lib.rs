//! Analysis pipeline for the AI stock analyzer
//!
//! This crate orchestrates one analysis request end to end:
//!
//! 1. Fetch a daily price series through [`analyzer_market::MarketData`]
//! 2. Reduce it to six summary statistics ([`Summary`])
//! 3. Ask the narrative model for commentary through
//!    [`analyzer_llm::NarrativeProvider`] (one call, or three in extended
//!    mode)
//! 4. Assemble the response envelope ([`AnalysisResponse`])
//!
//! Progress events are emitted before each stage through an injectable
//! [`ProgressSink`]; the default sink drops them. The pipeline never lets a
//! fault escape: every failure becomes an error-status envelope.
//!
//! # Example
//!
//! ```rust,ignore
//! use analyzer_core::{AnalysisPipeline, PipelineConfig};
//! use analyzer_llm::OpenAIProvider;
//! use analyzer_market::YahooMarketData;
//! use std::sync::Arc;
//!
//! let pipeline = AnalysisPipeline::new(
//!     Arc::new(YahooMarketData::new()),
//!     Arc::new(OpenAIProvider::from_env()?),
//!     PipelineConfig::default(),
//! );
//!
//! let response = pipeline.analyze("AAPL", start, end).await;
//! ```

pub mod error;
pub mod pipeline;
pub mod progress;
pub mod prompts;
pub mod response;
pub mod summary;

// Re-export main types
pub use error::{AnalysisError, Result};
pub use pipeline::{AnalysisPipeline, PipelineConfig};
pub use progress::{NoopProgress, ProgressEvent, ProgressSink};
pub use response::{AnalysisResponse, Status};
pub use summary::Summary;
