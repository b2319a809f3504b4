//! Chart model — traces plus a symbol selector, independent of any renderer.
//!
//! Each passed symbol contributes a candlestick trace and an RSI line trace,
//! stacked as two panels over the same bar window. Exactly one symbol's pair
//! is visible at a time; a selector step per symbol flips the visibility
//! mask and retitles the figure. The TUI renders whatever this model says is
//! visible.

use crate::domain::Bar;
use crate::screen::SymbolRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single point of the RSI line, NaN prefix already dropped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsiPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// One renderable trace.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Trace {
    /// Price panel: the symbol's OHLC bars.
    Candlestick { symbol: String, bars: Vec<Bar> },
    /// Indicator panel: RSI over time.
    Rsi { symbol: String, points: Vec<RsiPoint> },
}

impl Trace {
    pub fn symbol(&self) -> &str {
        match self {
            Trace::Candlestick { symbol, .. } | Trace::Rsi { symbol, .. } => symbol,
        }
    }
}

/// One selector position: a title and a visibility mask over all traces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorStep {
    pub title: String,
    pub visible: Vec<bool>,
}

/// The full chart: all traces for all symbols plus the selector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Figure {
    pub traces: Vec<Trace>,
    pub steps: Vec<SelectorStep>,
    /// Index of the active selector step. Meaningless when `steps` is empty.
    pub active: usize,
}

impl Figure {
    /// Build the figure from screened records.
    ///
    /// Trace order: candlestick then RSI per symbol, so step `i` exposes
    /// trace indices `2i` and `2i + 1`. An empty input builds an empty,
    /// title-less figure with zero traces and zero steps.
    pub fn build(records: &[SymbolRecord]) -> Self {
        let n = records.len();
        let mut traces = Vec::with_capacity(2 * n);
        let mut steps = Vec::with_capacity(n);

        for record in records {
            let points = record
                .bars
                .iter()
                .zip(record.rsi.iter())
                .filter(|(_, v)| !v.is_nan())
                .map(|(bar, &value)| RsiPoint {
                    date: bar.date,
                    value,
                })
                .collect();

            traces.push(Trace::Candlestick {
                symbol: record.symbol.clone(),
                bars: record.bars.clone(),
            });
            traces.push(Trace::Rsi {
                symbol: record.symbol.clone(),
                points,
            });
        }

        for (i, record) in records.iter().enumerate() {
            let mut visible = vec![false; 2 * n];
            visible[2 * i] = true;
            visible[2 * i + 1] = true;
            steps.push(SelectorStep {
                title: format!("{} Candlestick and RSI", record.symbol),
                visible,
            });
        }

        Self {
            traces,
            steps,
            active: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn symbol_count(&self) -> usize {
        self.steps.len()
    }

    /// Activate step `i`; out-of-range indices are ignored.
    pub fn select(&mut self, i: usize) {
        if i < self.steps.len() {
            self.active = i;
        }
    }

    /// Move the selector by `delta`, clamped to the step range.
    pub fn step_by(&mut self, delta: isize) {
        if self.steps.is_empty() {
            return;
        }
        let last = self.steps.len() as isize - 1;
        let next = (self.active as isize + delta).clamp(0, last);
        self.active = next as usize;
    }

    /// Title of the active step, empty for an empty figure.
    pub fn title(&self) -> &str {
        self.steps
            .get(self.active)
            .map(|s| s.title.as_str())
            .unwrap_or("")
    }

    /// Traces visible under the active step.
    pub fn visible_traces(&self) -> Vec<&Trace> {
        let Some(step) = self.steps.get(self.active) else {
            return Vec::new();
        };
        self.traces
            .iter()
            .zip(step.visible.iter())
            .filter(|(_, &v)| v)
            .map(|(t, _)| t)
            .collect()
    }

    /// The active symbol's candlestick bars and RSI points, if any.
    pub fn active_panels(&self) -> Option<(&[Bar], &[RsiPoint])> {
        let visible = self.visible_traces();
        let bars = visible.iter().find_map(|t| match t {
            Trace::Candlestick { bars, .. } => Some(bars.as_slice()),
            _ => None,
        })?;
        let points = visible.iter().find_map(|t| match t {
            Trace::Rsi { points, .. } => Some(points.as_slice()),
            _ => None,
        })?;
        Some((bars, points))
    }
}
