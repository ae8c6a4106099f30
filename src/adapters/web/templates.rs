//! HTML templates using Askama.

use askama::Template;

use crate::adapters::svg_chart::render_svg;
use crate::domain::dashboard::DashboardOutcome;
use crate::domain::instrument;

pub struct InstrumentOption {
    pub name: &'static str,
    pub selected: bool,
}

/// Current values of the sidebar controls.
pub struct Controls {
    pub options: Vec<InstrumentOption>,
    pub start: String,
    pub end: String,
}

impl Controls {
    pub fn new(selected: &str, start: String, end: String) -> Self {
        let options = instrument::all()
            .iter()
            .map(|i| InstrumentOption {
                name: i.display_name,
                selected: i.display_name == selected,
            })
            .collect();
        Self {
            options,
            start,
            end,
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage<'a> {
    pub controls: &'a Controls,
    pub panel: &'a str,
}

pub struct ChartView {
    pub title: &'static str,
    pub svg: String,
}

pub struct SignalView {
    pub css_class: &'static str,
    pub message: &'static str,
    pub rsi: String,
}

#[derive(Template)]
#[template(path = "panel.html")]
pub struct PanelTemplate {
    pub heading: String,
    pub warning: Option<String>,
    pub detail: Option<String>,
    pub charts: Vec<ChartView>,
    pub signal: Option<SignalView>,
}

impl PanelTemplate {
    pub fn from_outcome(outcome: &DashboardOutcome) -> Self {
        let instrument = outcome.selection().instrument;
        let heading = format!(
            "{} ({}) - Market Signals",
            instrument.display_name, instrument.symbol
        );

        match outcome {
            DashboardOutcome::NoData { reason, .. } => Self {
                heading,
                warning: Some("No data available.".to_string()),
                detail: reason.clone(),
                charts: Vec::new(),
                signal: None,
            },
            DashboardOutcome::Ready(dashboard) => {
                let charts = [
                    dashboard.price_chart(),
                    dashboard.rsi_chart(),
                    dashboard.macd_chart(),
                ]
                .iter()
                .map(|spec| ChartView {
                    title: spec.title,
                    svg: render_svg(spec),
                })
                .collect();

                let signal = dashboard
                    .signal
                    .zip(dashboard.indicators.rsi_14.latest())
                    .map(|(signal, rsi)| SignalView {
                        css_class: signal.severity().css_class(),
                        message: signal.message(),
                        rsi: format!("{:.2}", rsi),
                    });

                Self {
                    heading,
                    warning: None,
                    detail: None,
                    charts,
                    signal,
                }
            }
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub message: &'a str,
    pub status: u16,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage<'a> {
    pub path: &'a str,
}
