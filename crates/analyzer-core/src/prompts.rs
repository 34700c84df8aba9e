//! Prompt templates for the narrative calls
//!
//! One constructor per prompt. Each template embeds the ticker, the
//! requested date range, and the rendered summary text block.

use minijinja::{Environment, context};

/// System prompt shared by every narrative call
pub const SYSTEM_PROMPT: &str = "You are an AI stock summarizer.";

const TREND_ANALYSIS: &str = "\
Analyze {{ ticker }} from {{ start_date }} to {{ end_date }}:

{{ summary }}

Describe the trend, volatility, and overall sentiment of the stock over this period. \
Do not give investment advice.";

const NEXT_STEPS: &str = "\
Given this summary for {{ ticker }} ({{ start_date }} to {{ end_date }}):

{{ summary }}

What might an analyst infer about the stock's momentum from these figures? \
Do not include buy or sell recommendations.";

const INVESTIGATION_AREAS: &str = "\
Given this summary for {{ ticker }} ({{ start_date }} to {{ end_date }}):

{{ summary }}

Which external factors - news, earnings, sector moves, macro conditions - \
would merit further investigation to explain this price action?";

fn render(
    source: &str,
    ticker: &str,
    start_date: &str,
    end_date: &str,
    summary: &str,
) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    env.add_template("prompt", source)?;
    env.get_template("prompt")?.render(context! {
        ticker,
        start_date,
        end_date,
        summary,
    })
}

/// Create the trend/volatility/sentiment analysis prompt
pub fn trend_analysis(
    ticker: &str,
    start_date: &str,
    end_date: &str,
    summary: &str,
) -> Result<String, minijinja::Error> {
    render(TREND_ANALYSIS, ticker, start_date, end_date, summary)
}

/// Create the momentum reasoning prompt (extended mode)
pub fn next_steps(
    ticker: &str,
    start_date: &str,
    end_date: &str,
    summary: &str,
) -> Result<String, minijinja::Error> {
    render(NEXT_STEPS, ticker, start_date, end_date, summary)
}

/// Create the further-investigation prompt (extended mode)
pub fn investigation_areas(
    ticker: &str,
    start_date: &str,
    end_date: &str,
    summary: &str,
) -> Result<String, minijinja::Error> {
    render(INVESTIGATION_AREAS, ticker, start_date, end_date, summary)
}
