//! Price series summary statistics

use crate::error::{AnalysisError, Result};
use analyzer_market::Bar;
use serde::{Deserialize, Serialize};

/// Six summary statistics over a daily price series
///
/// Values are rounded to two fractional digits at construction; the serde
/// field names match the wire format expected by clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(rename = "Start Price")]
    pub start_price: f64,

    #[serde(rename = "End Price")]
    pub end_price: f64,

    #[serde(rename = "High")]
    pub high: f64,

    #[serde(rename = "Low")]
    pub low: f64,

    #[serde(rename = "Mean Volume")]
    pub mean_volume: f64,

    #[serde(rename = "Price Change (%)")]
    pub price_change_pct: f64,
}

/// Round to two fractional digits for presentation
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl Summary {
    /// Reduce a non-empty, date-ascending price series to its summary
    ///
    /// Start and end prices are the first and last closes; high and low are
    /// taken over the bar highs and lows; percent change is
    /// `(end - start) / start * 100`.
    pub fn from_bars(bars: &[Bar]) -> Result<Self> {
        let (first, last) = match (bars.first(), bars.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(AnalysisError::NoData),
        };

        let start_price = first.close;
        if start_price == 0.0 {
            // Percent change would be infinite; surface the condition instead
            return Err(AnalysisError::DegenerateSeries);
        }
        let end_price = last.close;

        let high = bars.iter().map(|b| b.high).fold(f64::MIN, f64::max);
        let low = bars.iter().map(|b| b.low).fold(f64::MAX, f64::min);
        let mean_volume =
            bars.iter().map(|b| b.volume as f64).sum::<f64>() / bars.len() as f64;
        let price_change_pct = (end_price - start_price) / start_price * 100.0;

        Ok(Self {
            start_price: round2(start_price),
            end_price: round2(end_price),
            high: round2(high),
            low: round2(low),
            mean_volume: round2(mean_volume),
            price_change_pct: round2(price_change_pct),
        })
    }

    /// Render the summary as a deterministic text block
    ///
    /// One `label: value` line per field, fixed order, two decimals. This is
    /// the form embedded in narrative prompts.
    pub fn to_text(&self) -> String {
        format!(
            "Start Price: {:.2}\nEnd Price: {:.2}\nHigh: {:.2}\nLow: {:.2}\nMean Volume: {:.2}\nPrice Change (%): {:.2}",
            self.start_price,
            self.end_price,
            self.high,
            self.low,
            self.mean_volume,
            self.price_change_pct,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn bar(day: u32, close: f64, high: f64, low: f64, volume: u64) -> Bar {
        Bar::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            close,
            high,
            low,
            close,
            volume,
        )
    }

    /// Parse a rendered summary back into (label, value) pairs
    fn parse_text(text: &str) -> Vec<(String, f64)> {
        text.lines()
            .map(|line| {
                let (label, value) = line.rsplit_once(": ").unwrap();
                (label.to_string(), value.parse().unwrap())
            })
            .collect()
    }

    #[test]
    fn test_worked_example() {
        let bars = vec![
            bar(1, 100.0, 105.0, 98.0, 1_000),
            bar(2, 110.0, 112.0, 101.0, 1_500),
        ];
        let summary = Summary::from_bars(&bars).unwrap();

        assert_eq!(summary.start_price, 100.0);
        assert_eq!(summary.end_price, 110.0);
        assert_eq!(summary.high, 112.0);
        assert_eq!(summary.low, 98.0);
        assert_eq!(summary.mean_volume, 1_250.0);
        assert_eq!(summary.price_change_pct, 10.0);
    }

    #[test]
    fn test_percent_change_rounds_to_two_decimals() {
        let bars = vec![
            bar(1, 3.0, 3.0, 3.0, 100),
            bar(2, 4.0, 4.0, 4.0, 100),
        ];
        let summary = Summary::from_bars(&bars).unwrap();

        // 1/3 * 100 = 33.333... -> 33.33
        assert_eq!(summary.price_change_pct, 33.33);
    }

    #[test]
    fn test_single_bar_series() {
        let bars = vec![bar(1, 50.0, 55.0, 45.0, 2_000)];
        let summary = Summary::from_bars(&bars).unwrap();

        assert_eq!(summary.start_price, 50.0);
        assert_eq!(summary.end_price, 50.0);
        assert_eq!(summary.price_change_pct, 0.0);
    }

    #[test]
    fn test_empty_series_is_no_data() {
        let result = Summary::from_bars(&[]);
        assert!(matches!(result, Err(AnalysisError::NoData)));
    }

    #[test]
    fn test_zero_start_close_is_degenerate() {
        let bars = vec![
            bar(1, 0.0, 1.0, 0.0, 100),
            bar(2, 2.0, 2.0, 1.0, 100),
        ];
        let result = Summary::from_bars(&bars);
        assert!(matches!(result, Err(AnalysisError::DegenerateSeries)));
    }

    #[test]
    fn test_text_round_trip() {
        let bars = vec![
            bar(1, 100.0, 105.0, 98.0, 1_000),
            bar(2, 110.0, 112.0, 101.0, 1_500),
        ];
        let summary = Summary::from_bars(&bars).unwrap();
        let pairs = parse_text(&summary.to_text());

        assert_eq!(
            pairs,
            vec![
                ("Start Price".to_string(), 100.0),
                ("End Price".to_string(), 110.0),
                ("High".to_string(), 112.0),
                ("Low".to_string(), 98.0),
                ("Mean Volume".to_string(), 1_250.0),
                ("Price Change (%)".to_string(), 10.0),
            ]
        );
    }

    #[test]
    fn test_wire_field_names() {
        let bars = vec![
            bar(1, 100.0, 105.0, 98.0, 1_000),
            bar(2, 110.0, 112.0, 101.0, 1_500),
        ];
        let summary = Summary::from_bars(&bars).unwrap();
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["Start Price"], 100.0);
        assert_eq!(json["Price Change (%)"], 10.0);
    }
}
