//! CLI definition and dispatch.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::fmt::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::build_data_port;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::dashboard::{render, Dashboard, DashboardOutcome};
use crate::domain::error::TickerboardError;
use crate::domain::instrument;
use crate::domain::selection::{self, Selection};
use crate::logging;
use crate::ports::data_port::DataPort;

#[derive(Parser, Debug)]
#[command(name = "tickerboard", about = "Technical signal dashboard for AI stocks")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the web dashboard
    Serve {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Run one dashboard pass and print the latest indicator values
    Signal {
        /// Display name or ticker, e.g. "NVIDIA" or "NVDA"
        #[arg(long)]
        stock: String,
        #[arg(long)]
        start: Option<NaiveDate>,
        #[arg(long)]
        end: Option<NaiveDate>,
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// List the instrument catalog
    Instruments,
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Serve { config } => run_serve(config.as_ref()),
        Command::Signal {
            stock,
            start,
            end,
            config,
        } => run_signal(&stock, start, end, config.as_ref()),
        Command::Instruments => {
            print!("{}", format_instruments());
            ExitCode::SUCCESS
        }
    }
}

/// Load the INI file at `path`, or an empty configuration when no path is
/// given so every key takes its default.
pub fn load_config(path: Option<&PathBuf>) -> Result<FileConfigAdapter, ExitCode> {
    let Some(path) = path else {
        return Ok(FileConfigAdapter::empty());
    };
    FileConfigAdapter::from_file(path).map_err(|err| {
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

pub fn format_instruments() -> String {
    let mut out = String::new();
    for i in instrument::all() {
        let _ = writeln!(out, "{:<10} {}", i.display_name, i.symbol);
    }
    out
}

/// One pass for the given selection against `data_port`, formatted as text.
/// `stock` may be a display name or a ticker symbol.
/// NoData becomes [`TickerboardError::NoData`].
pub fn signal_report(
    stock: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    today: NaiveDate,
    data_port: &dyn DataPort,
) -> Result<String, TickerboardError> {
    let name = instrument::find_by_symbol(stock)
        .map(|i| i.display_name)
        .unwrap_or(stock);
    let selection = Selection::new(name, start, end, today)?;
    match render(&selection, data_port) {
        DashboardOutcome::Ready(dashboard) => Ok(format_dashboard(&dashboard)),
        DashboardOutcome::NoData { selection, reason } => {
            if let Some(reason) = reason {
                eprintln!("warning: {reason}");
            }
            Err(TickerboardError::NoData {
                symbol: selection.symbol().to_string(),
            })
        }
    }
}

pub fn format_dashboard(dashboard: &Dashboard) -> String {
    let instrument = dashboard.selection.instrument;
    let range = dashboard.selection.range;
    let ind = &dashboard.indicators;

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}) - Market Signals",
        instrument.display_name, instrument.symbol
    );
    let _ = writeln!(
        out,
        "{:<16}{} to {} ({} bars)",
        "Range:",
        range.start,
        range.end,
        dashboard.bars.len()
    );
    let rows = [
        ("Close:", dashboard.latest_close()),
        ("SMA 50:", ind.sma_50.latest()),
        ("SMA 200:", ind.sma_200.latest()),
        ("RSI 14:", ind.rsi_14.latest()),
        ("MACD:", ind.macd.latest()),
        ("MACD signal:", ind.macd_signal.latest()),
    ];
    for (label, value) in rows {
        let _ = writeln!(out, "{:<16}{}", label, format_value(value));
    }
    let classification = dashboard.signal.map(|s| s.message()).unwrap_or("n/a");
    let _ = writeln!(out, "{:<16}{}", "Signal:", classification);
    out
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "n/a".to_string(),
    }
}

fn run_signal(
    stock: &str,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    config_path: Option<&PathBuf>,
) -> ExitCode {
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };
    logging::init_from_config(&config);

    let data_port = match build_data_port(&config) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match signal_report(stock, start, end, selection::today(), data_port.as_ref()) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_serve(config_path: Option<&PathBuf>) -> ExitCode {
    #[cfg(feature = "web")]
    {
        use crate::adapters::web::{build_router, AppState, DEFAULT_LISTEN};
        use crate::ports::config_port::ConfigPort;
        use std::net::SocketAddr;

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(code) => return code,
        };
        logging::init_from_config(&config);

        let data_port = match build_data_port(&config) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        };

        let listen = config.get_string_or("web", "listen", DEFAULT_LISTEN);
        let addr: SocketAddr = match listen.parse() {
            Ok(a) => a,
            Err(e) => {
                let err = TickerboardError::ConfigInvalid {
                    section: "web".into(),
                    key: "listen".into(),
                    reason: format!("{listen:?}: {e}"),
                };
                eprintln!("error: {err}");
                return (&err).into();
            }
        };

        let router = build_router(AppState::new(data_port, &config));

        let runtime = match tokio::runtime::Runtime::new() {
            Ok(r) => r,
            Err(e) => {
                eprintln!("error: failed to start runtime: {e}");
                return ExitCode::from(1);
            }
        };

        let served: Result<(), TickerboardError> = runtime.block_on(async {
            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!(%addr, "dashboard listening");
            axum::serve(listener, router).await?;
            Ok(())
        });

        match served {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("error: {e}");
                (&e).into()
            }
        }
    }

    #[cfg(not(feature = "web"))]
    {
        let _ = config_path;
        eprintln!("error: web feature is required for serve");
        ExitCode::from(1)
    }
}
