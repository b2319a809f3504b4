//! Oversold CLI — headless screening.
//!
//! Commands:
//! - `screen` — download the constituent list, screen every symbol, print
//!   outcomes and the final pass list
//! - `universe` — fetch and print the constituent list
//!
//! The interactive chart lives in the `oversold-tui` binary.

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use oversold_core::data::{
    universe::{DEFAULT_SUFFIX, DEFAULT_UNIVERSE_URL},
    StdoutProgress, UniverseSource, YahooProvider,
};
use oversold_core::domain::ScreenParams;
use oversold_core::screen::run_screen;

#[derive(Parser)]
#[command(name = "oversold", about = "Oversold — an RSI screener")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Screen the universe and print symbols with RSI below the threshold.
    Screen {
        /// RSI lookback period.
        #[arg(long, default_value_t = 14, value_parser = parse_window)]
        period: usize,

        /// Inclusion threshold (strictly below passes).
        #[arg(long, default_value_t = 40.0)]
        threshold: f64,

        /// SMA window over the RSI series.
        #[arg(long, default_value_t = 14, value_parser = parse_window)]
        sma: usize,

        /// Constituents CSV URL.
        #[arg(long, default_value = DEFAULT_UNIVERSE_URL)]
        universe_url: String,

        /// Market suffix appended to each base ticker.
        #[arg(long, default_value = DEFAULT_SUFFIX)]
        suffix: String,

        /// Local path where the raw constituents CSV is saved.
        #[arg(long, default_value = "ind_nifty500list.csv")]
        save_path: PathBuf,

        /// Screen only the first N symbols (useful for dry runs).
        #[arg(long)]
        limit: Option<usize>,

        /// Optional TOML parameter file; CLI flags take precedence over it.
        #[arg(long)]
        params: Option<PathBuf>,
    },
    /// Fetch and print the constituent list.
    Universe {
        /// Constituents CSV URL.
        #[arg(long, default_value = DEFAULT_UNIVERSE_URL)]
        url: String,

        /// Market suffix appended to each base ticker.
        #[arg(long, default_value = DEFAULT_SUFFIX)]
        suffix: String,

        /// Local path where the raw constituents CSV is saved.
        #[arg(long, default_value = "ind_nifty500list.csv")]
        save_path: PathBuf,
    },
}

/// Lookback windows must be at least 1; the indicator math has no meaning
/// for a zero-length window.
fn parse_window(s: &str) -> Result<usize, String> {
    let value: usize = s.parse().map_err(|e| format!("{e}"))?;
    if value == 0 {
        return Err("must be at least 1".into());
    }
    Ok(value)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Screen {
            period,
            threshold,
            sma,
            universe_url,
            suffix,
            save_path,
            limit,
            params,
        } => cmd_screen(
            period,
            threshold,
            sma,
            &universe_url,
            &suffix,
            &save_path,
            limit,
            params.as_deref(),
        ),
        Commands::Universe {
            url,
            suffix,
            save_path,
        } => cmd_universe(&url, &suffix, &save_path),
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_screen(
    period: usize,
    threshold: f64,
    sma: usize,
    universe_url: &str,
    suffix: &str,
    save_path: &Path,
    limit: Option<usize>,
    params_file: Option<&Path>,
) -> Result<()> {
    let mut params = match params_file {
        Some(path) => ScreenParams::from_file(path).map_err(anyhow::Error::msg)?,
        None => ScreenParams::default(),
    };
    params.rsi_period = period;
    params.rsi_threshold = threshold;
    params.sma_window = sma;

    let source = UniverseSource::new(universe_url, suffix, save_path);
    let mut universe = source.fetch_or_empty();
    if let Some(limit) = limit {
        universe.truncate(limit);
    }

    let provider = YahooProvider::new();
    let report = run_screen(&provider, &universe, &params, &StdoutProgress);

    println!();
    if report.passed.is_empty() {
        println!("No symbols with RSI below {threshold:.1}.");
    } else {
        println!("Symbols with RSI below {threshold:.1}:");
        for record in &report.passed {
            println!("  {} (RSI {:.1})", record.symbol, record.last_rsi());
        }
    }

    Ok(())
}

fn cmd_universe(url: &str, suffix: &str, save_path: &Path) -> Result<()> {
    let source = UniverseSource::new(url, suffix, save_path);
    let symbols = source.fetch_or_empty();
    for symbol in &symbols {
        println!("{symbol}");
    }
    eprintln!("{} symbols (saved to {})", symbols.len(), save_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_args_parse() {
        Cli::command().debug_assert();
    }

    #[test]
    fn zero_period_is_rejected_at_parse_time() {
        assert!(Cli::try_parse_from(["oversold", "screen", "--period", "0"]).is_err());
        assert!(Cli::try_parse_from(["oversold", "screen", "--sma", "0"]).is_err());
    }

    #[test]
    fn positive_windows_parse() {
        assert!(Cli::try_parse_from(["oversold", "screen", "--period", "7", "--sma", "5"]).is_ok());
    }

    #[test]
    fn screen_defaults_match_run_constants() {
        let cli = Cli::parse_from(["oversold", "screen"]);
        match cli.command {
            Commands::Screen {
                period,
                threshold,
                sma,
                ..
            } => {
                assert_eq!(period, 14);
                assert_eq!(threshold, 40.0);
                assert_eq!(sma, 14);
            }
            _ => panic!("expected screen command"),
        }
    }
}
