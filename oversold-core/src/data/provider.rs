//! Data provider trait and structured error types.
//!
//! The DataProvider trait abstracts over the market-data source so the
//! screener can be exercised against a stub in tests. The real
//! implementation is `YahooProvider`.

use crate::domain::{Bar, ScreenParams};
use crate::screen::Outcome;
use thiserror::Error;

/// Structured error types for data operations.
///
/// Displayable in both CLI and TUI contexts. The screener treats every
/// variant the same way — skip the symbol and continue — but keeping the
/// causes distinct makes failures inspectable.
#[derive(Debug, Clone, Error)]
pub enum DataError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status} from provider")]
    Http { status: u16 },

    #[error("response format changed: {0}")]
    Format(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("constituent list unavailable: {0}")]
    UniverseUnavailable(String),

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for DataError {
    fn from(e: std::io::Error) -> Self {
        DataError::Io(e.to_string())
    }
}

impl From<csv::Error> for DataError {
    fn from(e: csv::Error) -> Self {
        DataError::Csv(e.to_string())
    }
}

/// Trait for market-data providers.
///
/// Implementations fetch OHLCV history for one symbol over the span and
/// interval given in `params`. Bars come back ordered by date ascending.
pub trait DataProvider: Send + Sync {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch bars for a symbol per the run parameters.
    fn fetch(&self, symbol: &str, params: &ScreenParams) -> Result<Vec<Bar>, DataError>;
}

/// Progress callback for multi-symbol screening.
pub trait ScanProgress: Send {
    /// Called once before the first symbol, naming the data source.
    fn on_begin(&self, _provider: &str, _total: usize) {}

    /// Called when starting to process a symbol.
    fn on_start(&self, symbol: &str, index: usize, total: usize);

    /// Called when a symbol's outcome is decided.
    fn on_outcome(&self, symbol: &str, index: usize, total: usize, outcome: &Outcome);

    /// Called when the entire screen is done.
    fn on_complete(&self, passed: usize, failed: usize, total: usize);
}

/// Progress reporter that prints to stdout.
pub struct StdoutProgress;

impl ScanProgress for StdoutProgress {
    fn on_begin(&self, provider: &str, total: usize) {
        println!("Screening {total} symbols via {provider}");
    }

    fn on_start(&self, symbol: &str, index: usize, total: usize) {
        println!("[{}/{}] Screening {symbol}...", index + 1, total);
    }

    fn on_outcome(&self, symbol: &str, _index: usize, _total: usize, outcome: &Outcome) {
        match outcome {
            Outcome::Passed { last_rsi } => println!("  PASS: {symbol} (RSI {last_rsi:.1})"),
            Outcome::Rejected { last_rsi } => println!("  skip: {symbol} (RSI {last_rsi:.1})"),
            Outcome::InsufficientHistory { bars } => {
                println!("  skip: {symbol} (only {bars} bars)");
            }
            Outcome::Failed(e) => println!("  FAIL: {symbol}: {e}"),
        }
    }

    fn on_complete(&self, passed: usize, failed: usize, total: usize) {
        println!("\nScreen complete: {passed}/{total} passed, {failed} failed");
    }
}

/// Progress reporter that swallows everything. Used in tests.
pub struct SilentProgress;

impl ScanProgress for SilentProgress {
    fn on_start(&self, _symbol: &str, _index: usize, _total: usize) {}
    fn on_outcome(&self, _symbol: &str, _index: usize, _total: usize, _outcome: &Outcome) {}
    fn on_complete(&self, _passed: usize, _failed: usize, _total: usize) {}
}
