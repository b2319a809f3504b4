//! End-to-end pipeline test: universe → screen → figure, against a stub
//! provider. No network.

use chrono::NaiveDate;
use oversold_core::chart::Figure;
use oversold_core::data::{DataError, DataProvider, SilentProgress};
use oversold_core::domain::{Bar, ScreenParams};
use oversold_core::screen::{run_screen, Outcome};
use std::collections::HashMap;

struct StubProvider {
    series: HashMap<String, Vec<f64>>,
}

impl StubProvider {
    fn new(series: &[(&str, Vec<f64>)]) -> Self {
        Self {
            series: series
                .iter()
                .map(|(s, v)| (s.to_string(), v.clone()))
                .collect(),
        }
    }
}

impl DataProvider for StubProvider {
    fn name(&self) -> &str {
        "stub"
    }

    fn fetch(&self, symbol: &str, _params: &ScreenParams) -> Result<Vec<Bar>, DataError> {
        let closes = self
            .series
            .get(symbol)
            .ok_or_else(|| DataError::SymbolNotFound {
                symbol: symbol.to_string(),
            })?;
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        Ok(closes
            .iter()
            .enumerate()
            .map(|(i, &close)| Bar {
                symbol: symbol.to_string(),
                date: base + chrono::Duration::weeks(i as i64),
                open: close + 1.0,
                high: close + 3.0,
                low: close - 2.0,
                close,
                volume: 10_000,
            })
            .collect())
    }
}

/// Strictly declining 20-week series: RSI ends well below 40.
fn declining_20w() -> Vec<f64> {
    (0..20).map(|i| 300.0 - i as f64 * 5.0).collect()
}

/// Strictly rising 20-week series: RSI stays at 100.
fn rising_20w() -> Vec<f64> {
    (0..20).map(|i| 100.0 + i as f64 * 5.0).collect()
}

#[test]
fn declining_passes_rising_rejected() {
    let provider = StubProvider::new(&[("X.NS", declining_20w()), ("Y.NS", rising_20w())]);
    let universe = vec!["X.NS".to_string(), "Y.NS".to_string()];
    let params = ScreenParams {
        rsi_period: 14,
        rsi_threshold: 40.0,
        ..ScreenParams::default()
    };

    let report = run_screen(&provider, &universe, &params, &SilentProgress);

    assert_eq!(report.passed_symbols(), vec!["X.NS"]);
    assert!(matches!(report.outcomes[0].1, Outcome::Passed { .. }));
    assert!(matches!(report.outcomes[1].1, Outcome::Rejected { .. }));
}

#[test]
fn figure_from_screen_result_shows_first_passed_symbol() {
    let provider = StubProvider::new(&[
        ("X.NS", declining_20w()),
        ("Y.NS", rising_20w()),
        ("Z.NS", declining_20w()),
    ]);
    let universe = vec!["X.NS".to_string(), "Y.NS".to_string(), "Z.NS".to_string()];
    let report = run_screen(&provider, &universe, &ScreenParams::default(), &SilentProgress);

    let fig = Figure::build(&report.passed);
    assert_eq!(fig.symbol_count(), 2);
    assert_eq!(fig.title(), "X.NS Candlestick and RSI");

    let (bars, points) = fig.active_panels().expect("active panels");
    assert_eq!(bars.len(), 20);
    assert!(!points.is_empty());
    assert!(points.iter().all(|p| p.value < 40.0));
}

#[test]
fn empty_universe_degenerates_to_empty_figure() {
    let provider = StubProvider::new(&[]);
    let report = run_screen(&provider, &[], &ScreenParams::default(), &SilentProgress);
    let fig = Figure::build(&report.passed);
    assert!(fig.is_empty());
    assert!(fig.active_panels().is_none());
}
