//! Backend-neutral chart descriptions built from a computed dashboard.

use chrono::NaiveDate;

use crate::domain::indicator::IndicatorSeries;
use crate::domain::indicator_set::IndicatorSet;
use crate::domain::ohlcv::PriceBar;
use crate::domain::signal::{OVERBOUGHT_THRESHOLD, OVERSOLD_THRESHOLD};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub label: String,
    pub color: &'static str,
    pub points: Vec<(NaiveDate, Option<f64>)>,
}

impl SeriesSpec {
    /// Labelled after the indicator, e.g. "SMA 50".
    fn from_indicator(color: &'static str, series: &IndicatorSeries) -> Self {
        Self {
            label: series.indicator_type.to_string(),
            color,
            points: series.values.iter().map(|p| (p.date, p.value)).collect(),
        }
    }

    pub fn defined(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().filter_map(|(_, v)| *v)
    }
}

/// Horizontal guide line across the plot.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLine {
    pub value: f64,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub series: Vec<SeriesSpec>,
    pub reference_lines: Vec<ReferenceLine>,
    /// Fixed vertical bounds; `None` fits the defined data.
    pub y_bounds: Option<(f64, f64)>,
    pub show_legend: bool,
    /// Relative height; all charts share the same width.
    pub height_units: u32,
}

impl ChartSpec {
    /// Vertical range to plot: fixed bounds if set, otherwise the span of
    /// defined values and reference lines. `None` when nothing is plottable.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        if let Some(bounds) = self.y_bounds {
            return Some(bounds);
        }
        let values = self
            .series
            .iter()
            .flat_map(|s| s.defined())
            .chain(self.reference_lines.iter().map(|r| r.value));
        let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).max().unwrap_or(0)
    }
}

pub fn price_chart(bars: &[PriceBar], indicators: &IndicatorSet) -> ChartSpec {
    let close = SeriesSpec {
        label: "Close Price".to_string(),
        color: "#1f77b4",
        points: bars.iter().map(|b| (b.date, Some(b.close))).collect(),
    };
    ChartSpec {
        title: "Price & Moving Averages",
        series: vec![
            close,
            SeriesSpec::from_indicator("#ff7f0e", &indicators.sma_50),
            SeriesSpec::from_indicator("#2ca02c", &indicators.sma_200),
        ],
        reference_lines: Vec::new(),
        y_bounds: None,
        show_legend: true,
        height_units: 4,
    }
}

pub fn rsi_chart(indicators: &IndicatorSet) -> ChartSpec {
    ChartSpec {
        title: "Relative Strength Index (RSI)",
        series: vec![SeriesSpec::from_indicator("purple", &indicators.rsi_14)],
        reference_lines: vec![
            ReferenceLine {
                value: OVERBOUGHT_THRESHOLD,
                style: LineStyle::Dashed,
            },
            ReferenceLine {
                value: OVERSOLD_THRESHOLD,
                style: LineStyle::Dashed,
            },
        ],
        y_bounds: Some((0.0, 100.0)),
        show_legend: false,
        height_units: 2,
    }
}

pub fn macd_chart(indicators: &IndicatorSet) -> ChartSpec {
    ChartSpec {
        title: "MACD Indicator",
        series: vec![
            SeriesSpec::from_indicator("#1f77b4", &indicators.macd),
            SeriesSpec::from_indicator("#ff7f0e", &indicators.macd_signal),
        ],
        reference_lines: Vec::new(),
        y_bounds: None,
        show_legend: true,
        height_units: 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::indicator_set::compute_indicators;

    fn make_bars(n: usize) -> Vec<PriceBar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        (0..n)
            .map(|i| PriceBar {
                date: start + chrono::Duration::days(i as i64),
                open: 10.0,
                high: 12.0,
                low: 9.0,
                close: 10.0 + i as f64,
                volume: 100.0,
            })
            .collect()
    }

    #[test]
    fn price_chart_overlays_smas() {
        let bars = make_bars(5);
        let chart = price_chart(&bars, &compute_indicators(&bars));
        let labels: Vec<&str> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["Close Price", "SMA 50", "SMA 200"]);
        assert!(chart.show_legend);
        assert_eq!(chart.value_range(), Some((10.0, 14.0)));
    }

    #[test]
    fn rsi_chart_is_clamped_with_guides() {
        let bars = make_bars(20);
        let chart = rsi_chart(&compute_indicators(&bars));
        assert_eq!(chart.y_bounds, Some((0.0, 100.0)));
        let guides: Vec<f64> = chart.reference_lines.iter().map(|r| r.value).collect();
        assert_eq!(guides, [70.0, 30.0]);
        assert!(chart.reference_lines.iter().all(|r| r.style == LineStyle::Dashed));
        assert_eq!(chart.series[0].color, "purple");
    }

    #[test]
    fn macd_chart_has_line_and_signal() {
        let bars = make_bars(3);
        let chart = macd_chart(&compute_indicators(&bars));
        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[1].label, "Signal");
        assert_eq!(chart.point_count(), 3);
    }

    #[test]
    fn value_range_none_when_all_undefined() {
        let bars = make_bars(1);
        let chart = macd_chart(&compute_indicators(&bars));
        assert_eq!(chart.value_range(), None);
    }
}
