//! HTTP request handlers

use crate::AppState;
use analyzer_core::AnalysisResponse;
use axum::Json;
use axum::extract::State;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;

/// Inbound payload for `POST /analyze`
///
/// Fields are optional so that missing ones produce a domain error
/// envelope instead of a 422 from the extractor.
#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub ticker: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Health check endpoint
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok"
    }))
}

/// POST /analyze - run the analysis pipeline for one request
///
/// Always answers HTTP 200; failures are carried by the `status` and
/// `message` fields of the body. The body is parsed by hand so that a
/// malformed payload also gets an envelope instead of an extractor
/// rejection.
pub async fn analyze(
    State(state): State<Arc<AppState>>,
    body: String,
) -> Json<AnalysisResponse> {
    let request: AnalyzeRequest = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            return Json(AnalysisResponse::error(format!(
                "invalid request body: {err}"
            )));
        }
    };

    let Some(ticker) = request.ticker.filter(|t| !t.trim().is_empty()) else {
        return Json(AnalysisResponse::error("ticker is required"));
    };
    let Some(start_date) = request.start_date else {
        return Json(AnalysisResponse::error("start_date is required"));
    };
    let Some(end_date) = request.end_date else {
        return Json(AnalysisResponse::error("end_date is required"));
    };

    let Ok(start) = NaiveDate::parse_from_str(&start_date, "%Y-%m-%d") else {
        return Json(AnalysisResponse::error(format!(
            "invalid start_date: {start_date}"
        )));
    };
    let Ok(end) = NaiveDate::parse_from_str(&end_date, "%Y-%m-%d") else {
        return Json(AnalysisResponse::error(format!(
            "invalid end_date: {end_date}"
        )));
    };

    Json(state.pipeline.analyze(&ticker, start, end).await)
}
