//! Concrete adapter implementations for ports.

pub mod cached_adapter;
pub mod csv_adapter;
pub mod file_config_adapter;
pub mod svg_chart;
#[cfg(feature = "web")]
pub mod web;
#[cfg(feature = "yahoo")]
pub mod yahoo_adapter;

use std::path::PathBuf;
use std::sync::Arc;

use crate::domain::error::TickerboardError;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;

use cached_adapter::CachedDataPort;
use csv_adapter::CsvAdapter;

pub type SharedDataPort = Arc<dyn DataPort + Send + Sync>;

/// Select the market data source from `[data] source` and wrap it in the
/// cache unless `[cache] enabled = false`.
pub fn build_data_port(config: &dyn ConfigPort) -> Result<SharedDataPort, TickerboardError> {
    let source = config.get_string_or("data", "source", "yahoo").to_lowercase();
    let cache = config.get_bool("cache", "enabled", true);
    tracing::info!(source = %source, cache, "configuring data source");

    match source.as_str() {
        "csv" => {
            let dir = PathBuf::from(config.get_string_or("data", "csv_dir", "data"));
            Ok(wrap(CsvAdapter::new(dir), cache))
        }
        #[cfg(feature = "yahoo")]
        "yahoo" => Ok(wrap(yahoo_adapter::YahooAdapter::from_config(config)?, cache)),
        other => Err(TickerboardError::ConfigInvalid {
            section: "data".into(),
            key: "source".into(),
            reason: format!("unsupported data source {:?}", other),
        }),
    }
}

fn wrap<P: DataPort + Send + Sync + 'static>(port: P, cache: bool) -> SharedDataPort {
    if cache {
        Arc::new(CachedDataPort::new(port))
    } else {
        Arc::new(port)
    }
}
