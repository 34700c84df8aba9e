//! Request orchestration: fetch, summarize, narrate, assemble

use crate::error::Result;
use crate::progress::{NoopProgress, ProgressSink};
use crate::prompts;
use crate::response::{AnalysisResponse, Status};
use crate::summary::Summary;
use analyzer_llm::{ChatRequest, NarrativeProvider};
use analyzer_market::MarketData;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{error, instrument, warn};

/// Tunables for the analysis pipeline
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Model identifier passed to the narrative provider
    pub model: String,

    /// Sampling temperature for narrative calls
    pub temperature: f32,

    /// Run the extended reasoning and investigation steps
    pub extended: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            temperature: 0.7,
            extended: false,
        }
    }
}

/// Orchestrates one analysis request end to end
///
/// Collaborators are injected at construction so tests can substitute
/// fakes; the progress sink defaults to a no-op.
pub struct AnalysisPipeline {
    market: Arc<dyn MarketData>,
    narrative: Arc<dyn NarrativeProvider>,
    progress: Arc<dyn ProgressSink>,
    config: PipelineConfig,
}

impl AnalysisPipeline {
    /// Create a pipeline with the given collaborators and a no-op sink
    pub fn new(
        market: Arc<dyn MarketData>,
        narrative: Arc<dyn NarrativeProvider>,
        config: PipelineConfig,
    ) -> Self {
        Self {
            market,
            narrative,
            progress: Arc::new(NoopProgress),
            config,
        }
    }

    /// Attach a progress sink; events are emitted before each stage
    pub fn with_progress(mut self, progress: Arc<dyn ProgressSink>) -> Self {
        self.progress = progress;
        self
    }

    /// Run the full analysis for one request
    ///
    /// Never fails: any fault from the fetch or summary stages becomes an
    /// error-status envelope, so the transport layer always has a
    /// well-formed response to serialize.
    #[instrument(skip(self))]
    pub async fn analyze(&self, ticker: &str, start: NaiveDate, end: NaiveDate) -> AnalysisResponse {
        match self.run(ticker, start, end).await {
            Ok(response) => response,
            Err(err) => {
                error!(ticker, error = %err, "Analysis pipeline failed");
                AnalysisResponse::error(err.to_string())
            }
        }
    }

    async fn run(&self, ticker: &str, start: NaiveDate, end: NaiveDate) -> Result<AnalysisResponse> {
        self.progress.emit(&format!("Fetching {ticker} price data..."));

        let bars = self.market.fetch(ticker, start, end).await?;
        if bars.is_empty() {
            // Normal negative outcome, not a pipeline fault
            self.progress.emit(&format!("No data found for {ticker}."));
            return Ok(AnalysisResponse::error("No data found"));
        }

        let summary = Summary::from_bars(&bars)?;
        let summary_text = summary.to_text();

        let start_date = start.format("%Y-%m-%d").to_string();
        let end_date = end.format("%Y-%m-%d").to_string();

        self.progress.emit("AI analyzing stock trends...");
        let prompt = prompts::trend_analysis(ticker, &start_date, &end_date, &summary_text)?;
        let ai_analysis = self.narrate(prompt).await;
        self.progress.emit(&ai_analysis);

        let mut decision = None;
        let mut sub_investigation = None;

        if self.config.extended {
            self.progress.emit("AI reasoning about next steps...");
            let prompt = prompts::next_steps(ticker, &start_date, &end_date, &summary_text)?;
            let text = self.narrate(prompt).await;
            self.progress.emit(&text);
            decision = Some(text);

            self.progress.emit("Exploring further investigation areas...");
            let prompt =
                prompts::investigation_areas(ticker, &start_date, &end_date, &summary_text)?;
            let text = self.narrate(prompt).await;
            self.progress.emit(&text);
            sub_investigation = Some(text);
        }

        Ok(AnalysisResponse {
            status: Status::Success,
            ticker: Some(ticker.to_string()),
            rows_fetched: Some(bars.len()),
            summary: Some(summary),
            ai_analysis: Some(ai_analysis),
            decision,
            sub_investigation,
            message: None,
        })
    }

    /// One narrative call; a provider failure degrades to a placeholder
    /// string instead of aborting the pipeline
    async fn narrate(&self, prompt: String) -> String {
        let request = ChatRequest::builder(self.config.model.as_str())
            .system(prompts::SYSTEM_PROMPT)
            .prompt(prompt)
            .temperature(self.config.temperature)
            .build();

        match self.narrative.complete(request).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "Narrative call failed");
                format!("model call failed: {err}")
            }
        }
    }
}
