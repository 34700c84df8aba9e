//! Environment configuration for the server binary

use std::net::SocketAddr;

/// Default HTTP port
const DEFAULT_PORT: u16 = 8000;

/// Default narrative model
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Parsed configuration from environment variables
///
/// An empty API key is allowed: narrative calls then fail per request
/// rather than preventing startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// Narrative provider API key (may be empty)
    pub api_key: String,

    /// Optional override for the narrative provider base URL
    pub api_base: Option<String>,

    /// Narrative model identifier
    pub model: String,

    /// Run the extended three-call analysis
    pub extended: bool,

    /// Serverless deployment: disable the realtime channel
    pub serverless: bool,
}

impl ServerConfig {
    /// Read configuration from the process environment
    ///
    /// Variables: `BIND_ADDR`, `OPENAI_API_KEY`, `OPENAI_API_BASE`,
    /// `OPENAI_MODEL`, `EXTENDED_ANALYSIS`, `SERVERLESS`.
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));

        let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
        let api_base = std::env::var("OPENAI_API_BASE").ok();
        let model = std::env::var("OPENAI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let extended = std::env::var("EXTENDED_ANALYSIS")
            .map(|v| v.to_lowercase() == "true" || v == "1")
            .unwrap_or(false);

        // Presence-based, matching serverless platforms that set a marker var
        let serverless = std::env::var("SERVERLESS").is_ok_and(|v| !v.is_empty());

        Self {
            bind_addr,
            api_key,
            api_base,
            model,
            extended,
            serverless,
        }
    }
}
