//! Yahoo Finance chart-API data adapter.
//!
//! `GET {base_url}/v8/finance/chart/{symbol}?period1=..&period2=..&interval=1d`.
//! `period2` is midnight UTC of the end date, so the end date is exclusive.

use std::time::Duration;

use chrono::{DateTime, NaiveDate};
use reqwest::StatusCode;
use serde::Deserialize;

use crate::domain::error::TickerboardError;
use crate::domain::ohlcv::{normalize, PriceBar};
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;

pub const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) tickerboard/0.1";
pub const DEFAULT_TIMEOUT_SECS: i64 = 30;

pub struct YahooAdapter {
    base_url: String,
    client: reqwest::blocking::Client,
    auto_adjust: bool,
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: Chart,
}

#[derive(Debug, Deserialize)]
struct Chart {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    meta: Option<ChartMeta>,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct ChartMeta {
    gmtoffset: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
    #[serde(default)]
    adjclose: Vec<AdjClose>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

#[derive(Debug, Deserialize)]
struct AdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

impl YahooAdapter {
    pub fn new(base_url: impl Into<String>, client: reqwest::blocking::Client, auto_adjust: bool) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
            auto_adjust,
        }
    }

    /// Build from the `[data]` section: `base_url`, `user_agent`, `timeout_secs`, `auto_adjust`.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, TickerboardError> {
        let timeout_secs = config.get_int("data", "timeout_secs", DEFAULT_TIMEOUT_SECS);
        if timeout_secs <= 0 {
            return Err(TickerboardError::ConfigInvalid {
                section: "data".into(),
                key: "timeout_secs".into(),
                reason: "must be a positive number of seconds".into(),
            });
        }

        let client = reqwest::blocking::Client::builder()
            .user_agent(config.get_string_or("data", "user_agent", DEFAULT_USER_AGENT))
            .timeout(Duration::from_secs(timeout_secs as u64))
            .build()
            .map_err(|e| TickerboardError::ConfigInvalid {
                section: "data".into(),
                key: "user_agent".into(),
                reason: e.to_string(),
            })?;

        Ok(Self::new(
            config.get_string_or("data", "base_url", DEFAULT_BASE_URL),
            client,
            config.get_bool("data", "auto_adjust", true),
        ))
    }

    fn market_error(symbol: &str, reason: impl Into<String>) -> TickerboardError {
        TickerboardError::MarketData {
            symbol: symbol.to_string(),
            reason: reason.into(),
        }
    }

    fn bars_from_result(&self, result: &ChartResult) -> Vec<PriceBar> {
        let offset = result.meta.as_ref().and_then(|m| m.gmtoffset).unwrap_or(0);
        let empty = Quote::default();
        let quote = result.indicators.quote.first().unwrap_or(&empty);
        let adjclose = result.indicators.adjclose.first().map(|a| &a.adjclose);
        let at = |v: &Vec<Option<f64>>, i: usize| v.get(i).copied().flatten();

        result
            .timestamp
            .iter()
            .enumerate()
            .filter_map(|(i, &ts)| {
                let date = DateTime::from_timestamp(ts + offset, 0)?.date_naive();
                let bar = PriceBar {
                    date,
                    open: at(&quote.open, i)?,
                    high: at(&quote.high, i)?,
                    low: at(&quote.low, i)?,
                    close: at(&quote.close, i)?,
                    volume: at(&quote.volume, i).unwrap_or(0.0),
                };
                match adjclose.and_then(|a| at(a, i)) {
                    Some(adj) if self.auto_adjust => Some(bar.adjusted(adj)),
                    _ => Some(bar),
                }
            })
            .collect()
    }
}

fn unix_midnight(date: NaiveDate) -> i64 {
    (date - NaiveDate::default()).num_days() * 86_400
}

impl DataPort for YahooAdapter {
    fn fetch_ohlcv(
        &self,
        symbol: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<PriceBar>, TickerboardError> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        tracing::info!(symbol, start = %start_date, end = %end_date, "requesting chart data");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("period1", unix_midnight(start_date).to_string()),
                ("period2", unix_midnight(end_date).to_string()),
                ("interval", "1d".to_string()),
                ("events", "history".to_string()),
            ])
            .send()
            .map_err(|e| Self::market_error(symbol, format!("request failed: {}", e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            tracing::info!(symbol, "symbol not found");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(Self::market_error(symbol, format!("HTTP {}", status)));
        }

        let envelope: ChartEnvelope = response
            .json()
            .map_err(|e| Self::market_error(symbol, format!("invalid response body: {}", e)))?;

        if let Some(err) = envelope.chart.error {
            if err.code == "Not Found" {
                return Ok(Vec::new());
            }
            return Err(Self::market_error(
                symbol,
                format!("{}: {}", err.code, err.description.unwrap_or_default()),
            ));
        }

        let bars: Vec<PriceBar> = envelope
            .chart
            .result
            .unwrap_or_default()
            .iter()
            .flat_map(|r| self.bars_from_result(r))
            .filter(|b| b.date >= start_date && b.date < end_date)
            .collect();

        tracing::info!(symbol, bars = bars.len(), "chart data received");
        Ok(normalize(bars))
    }
}
