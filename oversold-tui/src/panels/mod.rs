//! Chart panels — direct-buffer renderers for the two stacked plots.
//!
//! Both panels reserve the same left label margin and clip to the same
//! trailing bar window, so their columns line up: one bar per terminal
//! column on a shared time axis.

pub mod candle_chart;
pub mod rsi_chart;

pub use candle_chart::CandleChartPanel;
pub use rsi_chart::RsiPanel;

/// Width of the Y-axis label margin shared by both panels.
pub const LABEL_WIDTH: u16 = 8;

/// First bar index of the trailing window that fits in `plot_width` columns.
pub fn window_start(len: usize, plot_width: u16) -> usize {
    len.saturating_sub(plot_width as usize)
}
