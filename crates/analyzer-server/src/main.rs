//! AI stock analyzer server binary
//!
//! # Usage
//!
//! ```bash
//! cargo run -p analyzer-server
//! ```
//!
//! # Environment Variables
//!
//! - `OPENAI_API_KEY`: narrative provider credential; if unset, narrative
//!   calls fail per request and the analysis fields degrade
//! - `OPENAI_API_BASE`: override the provider base URL (optional)
//! - `OPENAI_MODEL`: narrative model (default: gpt-4o-mini)
//! - `BIND_ADDR`: listen address (default: 0.0.0.0:8000)
//! - `EXTENDED_ANALYSIS`: run the three-call analysis (default: false)
//! - `SERVERLESS`: disable the realtime channel when set
//! - `RUST_LOG`: log filter (default: info)

use analyzer_core::{AnalysisPipeline, PipelineConfig, ProgressSink};
use analyzer_llm::{OpenAIConfig, OpenAIProvider};
use analyzer_market::YahooMarketData;
use analyzer_server::{AppState, BroadcastProgress, ServerConfig, router};
use anyhow::Context;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = ServerConfig::from_env();
    if config.api_key.is_empty() {
        tracing::warn!("OPENAI_API_KEY is not set; narrative calls will fail");
    }

    let mut llm_config = OpenAIConfig::new(config.api_key.clone());
    if let Some(api_base) = &config.api_base {
        llm_config = llm_config.with_api_base(api_base);
    }
    let narrative = Arc::new(
        OpenAIProvider::with_config(llm_config).context("building narrative provider")?,
    );
    let market = Arc::new(YahooMarketData::new());

    let pipeline_config = PipelineConfig {
        model: config.model.clone(),
        extended: config.extended,
        ..PipelineConfig::default()
    };
    let mut pipeline = AnalysisPipeline::new(market, narrative, pipeline_config);

    let progress = if config.serverless {
        tracing::info!("Serverless deployment, realtime channel disabled");
        None
    } else {
        let progress = BroadcastProgress::new();
        pipeline = pipeline.with_progress(Arc::new(progress.clone()) as Arc<dyn ProgressSink>);
        Some(progress)
    };

    let app = router(Arc::new(AppState { pipeline, progress }));

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    tracing::info!(addr = %config.bind_addr, model = %config.model, extended = config.extended, "AI stock analyzer listening");

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Initialize tracing subscriber with default configuration
fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
