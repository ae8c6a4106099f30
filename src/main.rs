use clap::Parser;
use tickerboard::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
