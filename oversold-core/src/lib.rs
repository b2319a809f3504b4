//! Oversold Core — the screener engine.
//!
//! This crate contains everything the pipeline needs short of a screen:
//! - Domain types (weekly OHLCV bars, screen parameters)
//! - Data layer (index constituent list, Yahoo Finance weekly history)
//! - Indicators (Wilder RSI and its SMA smoothing)
//! - Screener (per-symbol fetch + compute + threshold decision)
//! - Chart model (candlestick/RSI traces with a symbol selector)
//!
//! The pipeline is deliberately sequential: one blocking fetch per symbol,
//! failures isolated per symbol, results in universe order.

pub mod chart;
pub mod data;
pub mod domain;
pub mod indicators;
pub mod screen;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: types that cross the TUI boundary are Send + Sync.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<domain::Bar>();
        require_sync::<domain::Bar>();
        require_send::<domain::ScreenParams>();
        require_sync::<domain::ScreenParams>();

        require_send::<screen::SymbolRecord>();
        require_sync::<screen::SymbolRecord>();
        require_send::<screen::Outcome>();
        require_sync::<screen::Outcome>();
        require_send::<screen::ScreenReport>();
        require_sync::<screen::ScreenReport>();

        require_send::<chart::Figure>();
        require_sync::<chart::Figure>();
        require_send::<chart::Trace>();
        require_sync::<chart::Trace>();

        require_send::<data::DataError>();
        require_sync::<data::DataError>();
    }
}
