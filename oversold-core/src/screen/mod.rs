//! Screener — fetch, compute, and filter in a single pass.
//!
//! One fetch per symbol produces a `SymbolRecord` holding the bars and both
//! indicator series; the threshold decision and the chart both consume the
//! same record, so nothing is fetched or computed twice.

use crate::data::{DataError, DataProvider, ScanProgress};
use crate::domain::{Bar, ScreenParams};
use crate::indicators::{rsi, sma};

/// Everything computed for one symbol: bars plus derived indicator series.
///
/// `rsi_sma` is carried for display; it does not participate in the
/// inclusion decision.
#[derive(Debug, Clone)]
pub struct SymbolRecord {
    pub symbol: String,
    pub bars: Vec<Bar>,
    pub rsi: Vec<f64>,
    pub rsi_sma: Vec<f64>,
}

impl SymbolRecord {
    /// Most recent RSI value, NaN if the series never filled.
    pub fn last_rsi(&self) -> f64 {
        self.rsi.last().copied().unwrap_or(f64::NAN)
    }
}

/// Per-symbol screening outcome.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Last RSI strictly below the threshold; symbol kept.
    Passed { last_rsi: f64 },
    /// Last RSI at or above the threshold (or undefined); symbol dropped.
    Rejected { last_rsi: f64 },
    /// Fewer bars than the RSI period; symbol never evaluated.
    InsufficientHistory { bars: usize },
    /// Fetch or parse failed; symbol skipped, batch continues.
    Failed(DataError),
}

impl Outcome {
    pub fn is_passed(&self) -> bool {
        matches!(self, Outcome::Passed { .. })
    }
}

/// Result of screening a universe.
#[derive(Debug)]
pub struct ScreenReport {
    /// Outcome per symbol, in universe order.
    pub outcomes: Vec<(String, Outcome)>,
    /// Records for passed symbols, in universe order. Subset of the universe.
    pub passed: Vec<SymbolRecord>,
}

impl ScreenReport {
    pub fn passed_symbols(&self) -> Vec<&str> {
        self.passed.iter().map(|r| r.symbol.as_str()).collect()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|(_, o)| matches!(o, Outcome::Failed(_)))
            .count()
    }
}

/// Evaluate already-fetched bars for one symbol.
///
/// Returns the outcome plus, for passed symbols, the record feeding the
/// chart. Strict `<` against the threshold: a value exactly at the
/// threshold is rejected, and a NaN last value (series never filled) is
/// rejected rather than passed.
pub fn evaluate_symbol(
    symbol: &str,
    bars: Vec<Bar>,
    params: &ScreenParams,
) -> (Outcome, Option<SymbolRecord>) {
    if bars.len() < params.rsi_period {
        return (Outcome::InsufficientHistory { bars: bars.len() }, None);
    }

    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
    let rsi_series = rsi(&closes, params.rsi_period);
    let rsi_sma = sma(&rsi_series, params.sma_window);

    let last = rsi_series.last().copied().unwrap_or(f64::NAN);
    if last.is_nan() || last >= params.rsi_threshold {
        return (Outcome::Rejected { last_rsi: last }, None);
    }

    let record = SymbolRecord {
        symbol: symbol.to_string(),
        bars,
        rsi: rsi_series,
        rsi_sma,
    };
    (Outcome::Passed { last_rsi: last }, Some(record))
}

/// Screen the universe: sequential fetch + evaluate per symbol.
///
/// Failures are isolated per symbol; the batch never aborts. Both the
/// outcome list and the passed records preserve universe order.
pub fn run_screen(
    provider: &dyn DataProvider,
    universe: &[String],
    params: &ScreenParams,
    progress: &dyn ScanProgress,
) -> ScreenReport {
    let total = universe.len();
    let mut outcomes = Vec::with_capacity(total);
    let mut passed = Vec::new();

    progress.on_begin(provider.name(), total);

    for (i, symbol) in universe.iter().enumerate() {
        progress.on_start(symbol, i, total);

        let outcome = match provider.fetch(symbol, params) {
            Ok(bars) => {
                let (outcome, record) = evaluate_symbol(symbol, bars, params);
                if let Some(record) = record {
                    passed.push(record);
                }
                outcome
            }
            Err(e) => Outcome::Failed(e),
        };

        progress.on_outcome(symbol, i, total, &outcome);
        outcomes.push((symbol.clone(), outcome));
    }

    let report = ScreenReport { outcomes, passed };
    progress.on_complete(report.passed.len(), report.failed_count(), total);
    report
}
