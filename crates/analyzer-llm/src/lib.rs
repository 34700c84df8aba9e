//! Narrative model client for the AI stock analyzer
//!
//! This crate provides the language-model side of the analysis pipeline:
//!
//! - [`ChatRequest`] for a single system + user prompt exchange
//! - The [`NarrativeProvider`] trait, the seam the pipeline calls through
//! - [`OpenAIProvider`], an implementation for OpenAI-compatible
//!   chat-completion APIs
//!
//! Providers return the completion text only; prompt construction and
//! failure degradation are the caller's concern.

pub mod completion;
pub mod error;
pub mod openai;
pub mod provider;

// Re-export main types
pub use completion::ChatRequest;
pub use error::{LlmError, Result};
pub use openai::{OpenAIConfig, OpenAIProvider};
pub use provider::NarrativeProvider;
