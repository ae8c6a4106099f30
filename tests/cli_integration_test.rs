//! CLI integration tests.
//!
//! Tests cover:
//! - Config loading from disk and the empty default
//! - Signal report text for ready and empty passes
//! - CSV-backed data source wired from an INI file

mod common;

use common::*;
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tickerboard::adapters::build_data_port;
use tickerboard::cli;
use tickerboard::ports::config_port::ConfigPort;

fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn today() -> chrono::NaiveDate {
    date("2025-01-01")
}

mod config_loading {
    use super::*;

    #[test]
    fn no_path_gives_defaults() {
        let config = cli::load_config(None).unwrap();
        assert_eq!(config.get_string_or("data", "source", "yahoo"), "yahoo");
        assert!(config.get_bool("cache", "enabled", true));
    }

    #[test]
    fn reads_ini_from_disk() {
        let file = write_temp_ini("[web]\nlisten = 0.0.0.0:8080\n\n[log]\njson = true\n");
        let path = file.path().to_path_buf();
        let config = cli::load_config(Some(&path)).unwrap();
        assert_eq!(config.get_string("web", "listen").as_deref(), Some("0.0.0.0:8080"));
        assert!(config.get_bool("log", "json", false));
    }

    #[test]
    fn missing_file_exits_with_config_code() {
        let path = PathBuf::from("/nonexistent/tickerboard.ini");
        let code = cli::load_config(Some(&path)).err().unwrap();
        assert_eq!(format!("{:?}", code), format!("{:?}", ExitCode::from(2)));
    }
}

mod signal {
    use super::*;

    #[test]
    fn instruments_lists_catalog() {
        let listing = cli::format_instruments();
        assert_eq!(listing.lines().count(), 6);
        assert!(listing.lines().next().unwrap().starts_with("NVIDIA"));
        assert!(listing.contains("GOOGL"));
    }

    #[test]
    fn report_prints_latest_values() {
        let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
        let port = MockDataPort::new().with_bars("NVDA", bars_from_closes("2024-01-01", &closes));

        let report = cli::signal_report(
            "NVIDIA",
            Some(date("2024-01-01")),
            Some(date("2024-12-31")),
            today(),
            &port,
        )
        .unwrap();

        assert!(report.starts_with("NVIDIA (NVDA) - Market Signals"));
        assert!(report.contains("(40 bars)"));
        assert!(report.contains("139.00"));
        assert!(report.contains("RSI 14:         100.00"));
        assert!(report.contains("SMA 200:        n/a"));
        assert!(report.contains("Overbought (Possible Pullback)"));
    }

    #[test]
    fn empty_fetch_is_no_data() {
        let port = MockDataPort::new();
        let err = cli::signal_report("Meta", None, Some(date("2024-06-01")), today(), &port)
            .unwrap_err();
        assert!(matches!(err, TickerboardError::NoData { ref symbol } if symbol == "META"));
        assert_eq!(
            format!("{:?}", ExitCode::from(&err)),
            format!("{:?}", ExitCode::from(5))
        );
    }

    #[test]
    fn ticker_symbol_is_accepted() {
        let port = MockDataPort::new().with_bars("GOOGL", generate_bars("2024-01-01", 20, 140.0));
        let report = cli::signal_report(
            "googl",
            Some(date("2024-01-01")),
            Some(date("2024-12-31")),
            today(),
            &port,
        )
        .unwrap();
        assert!(report.starts_with("Google (GOOGL) - Market Signals"));
    }

    #[test]
    fn unknown_stock_is_rejected() {
        let port = MockDataPort::new();
        let err = cli::signal_report("Tesla", None, None, today(), &port).unwrap_err();
        assert!(matches!(err, TickerboardError::UnknownInstrument { .. }));
        assert_eq!(port.calls(), 0);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let port = MockDataPort::new();
        let err = cli::signal_report(
            "Apple",
            Some(date("2024-06-01")),
            Some(date("2024-01-01")),
            today(),
            &port,
        )
        .unwrap_err();
        assert!(matches!(err, TickerboardError::InvalidDateRange { .. }));
    }
}

mod csv_source {
    use super::*;

    #[test]
    fn signal_from_csv_directory() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut csv = String::from("Date,Open,High,Low,Close,Volume\n");
        for bar in generate_bars("2024-01-01", 30, 400.0) {
            csv.push_str(&format!(
                "{},{},{},{},{},{}\n",
                bar.date, bar.open, bar.high, bar.low, bar.close, bar.volume
            ));
        }
        std::fs::write(dir.path().join("MSFT.csv"), csv).unwrap();

        let ini = format!(
            "[data]\nsource = csv\ncsv_dir = {}\n\n[cache]\nenabled = false\n",
            dir.path().display()
        );
        let file = write_temp_ini(&ini);
        let path = file.path().to_path_buf();
        let config = cli::load_config(Some(&path)).unwrap();
        let port = build_data_port(&config).unwrap();

        let report = cli::signal_report(
            "Microsoft",
            Some(date("2024-01-01")),
            Some(date("2024-01-21")),
            today(),
            port.as_ref(),
        )
        .unwrap();

        assert!(report.contains("Microsoft (MSFT) - Market Signals"));
        assert!(report.contains("(20 bars)"));
    }
}
