//! Candlestick panel — OHLC rendering with direct buffer writes.
//!
//! Each candle occupies one terminal column: a block-character body (green
//! if close >= open, pink otherwise) with vertical wick lines to high/low.

use oversold_core::domain::Bar;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Widget},
};

use super::{window_start, LABEL_WIDTH};
use crate::theme::Theme;

pub struct CandleChartPanel<'a> {
    bars: &'a [Bar],
    symbol: &'a str,
    theme: &'a Theme,
}

impl<'a> CandleChartPanel<'a> {
    pub fn new(bars: &'a [Bar], symbol: &'a str, theme: &'a Theme) -> Self {
        Self {
            bars,
            symbol,
            theme,
        }
    }

    /// Map a price to a Y position in the plot area (0 = top).
    fn price_to_y(price: f64, y_min: f64, y_max: f64, plot_height: u16) -> u16 {
        if (y_max - y_min).abs() < 1e-9 || plot_height == 0 {
            return 0;
        }
        let frac = (price - y_min) / (y_max - y_min);
        let y = plot_height.saturating_sub(1) as f64 * (1.0 - frac);
        y.round().max(0.0).min(plot_height.saturating_sub(1) as f64) as u16
    }
}

impl Widget for CandleChartPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.bars.is_empty() {
            let block = Block::default()
                .title(format!(" Candlestick: {} [No Data] ", self.symbol))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(self.theme.muted))
                .style(Style::default().bg(self.theme.background));
            block.render(area, buf);
            return;
        }

        // Price bounds with padding
        let y_min = self
            .bars
            .iter()
            .map(|b| b.low)
            .fold(f64::INFINITY, f64::min);
        let y_max = self
            .bars
            .iter()
            .map(|b| b.high)
            .fold(f64::NEG_INFINITY, f64::max);
        let range = y_max - y_min;
        let pad = if range > 0.0 { range * 0.05 } else { 1.0 };
        let y_lower = y_min - pad;
        let y_upper = y_max + pad;

        let up_count = self.bars.iter().filter(|b| b.close >= b.open).count();
        let down_count = self.bars.len() - up_count;

        let title = format!(
            " {} | {} bars | {} up {} down ",
            self.symbol,
            self.bars.len(),
            up_count,
            down_count,
        );

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .style(Style::default().bg(self.theme.background));

        let inner = block.inner(area);
        block.render(area, buf);

        let plot_left = inner.x + LABEL_WIDTH;
        let plot_top = inner.y;
        let plot_width = inner.width.saturating_sub(LABEL_WIDTH);
        let plot_height = inner.height;

        if plot_width == 0 || plot_height == 0 {
            return;
        }

        // Y-axis labels at top, middle, bottom
        let y_labels = [y_upper, (y_upper + y_lower) / 2.0, y_lower];
        let y_positions = [0u16, plot_height / 2, plot_height.saturating_sub(1)];
        for (label_val, y_pos) in y_labels.iter().zip(y_positions.iter()) {
            let label = format!("{label_val:>7.1}");
            let y = plot_top + y_pos;
            if y < inner.y + inner.height {
                buf.set_string(inner.x, y, &label, Style::default().fg(self.theme.muted));
            }
        }

        let start_bar = window_start(self.bars.len(), plot_width);

        for (i, bar) in self.bars[start_bar..].iter().enumerate() {
            let x = plot_left + i as u16;
            if x >= area.right() {
                break;
            }
            if bar.is_void() {
                continue;
            }

            let is_up = bar.close >= bar.open;
            let color = if is_up {
                self.theme.positive
            } else {
                self.theme.negative
            };
            let style = Style::default().fg(color);

            let high_y = Self::price_to_y(bar.high, y_lower, y_upper, plot_height);
            let low_y = Self::price_to_y(bar.low, y_lower, y_upper, plot_height);
            let body_top_y =
                Self::price_to_y(bar.open.max(bar.close), y_lower, y_upper, plot_height);
            let body_bot_y =
                Self::price_to_y(bar.open.min(bar.close), y_lower, y_upper, plot_height);

            // Upper wick
            for y in high_y..body_top_y {
                let py = plot_top + y;
                if py < area.bottom() {
                    buf.set_string(x, py, "|", style);
                }
            }

            // Body: full block vs medium shade
            let body_char = if is_up { "\u{2588}" } else { "\u{2593}" };
            for y in body_top_y..=body_bot_y {
                let py = plot_top + y;
                if py < area.bottom() {
                    buf.set_string(x, py, body_char, style);
                }
            }

            // Lower wick
            for y in (body_bot_y + 1)..=low_y {
                let py = plot_top + y;
                if py < area.bottom() {
                    buf.set_string(x, py, "|", style);
                }
            }
        }
    }
}
