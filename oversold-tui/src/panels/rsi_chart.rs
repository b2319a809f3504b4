//! RSI panel — indicator line under the candlestick panel.
//!
//! Fixed 0–100 bounds, one column per bar matching the candle panel's
//! window, a dot per defined RSI value, and a dashed line at the threshold.

use oversold_core::chart::RsiPoint;
use oversold_core::domain::Bar;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use super::{window_start, LABEL_WIDTH};
use crate::theme::Theme;

pub struct RsiPanel<'a> {
    /// Bars of the active symbol; defines the shared column mapping.
    bars: &'a [Bar],
    /// Defined RSI values, date-aligned with a suffix of `bars`.
    points: &'a [RsiPoint],
    threshold: f64,
    theme: &'a Theme,
}

impl<'a> RsiPanel<'a> {
    pub fn new(
        bars: &'a [Bar],
        points: &'a [RsiPoint],
        threshold: f64,
        theme: &'a Theme,
    ) -> Self {
        Self {
            bars,
            points,
            threshold,
            theme,
        }
    }

    /// Map an RSI value (0–100) to a Y position in the plot area (0 = top).
    fn value_to_y(value: f64, plot_height: u16) -> u16 {
        if plot_height == 0 {
            return 0;
        }
        let frac = (value / 100.0).clamp(0.0, 1.0);
        let y = plot_height.saturating_sub(1) as f64 * (1.0 - frac);
        y.round() as u16
    }
}

impl Widget for RsiPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let last = self.points.last().map(|p| p.value);
        let title = match last {
            Some(v) => format!(" RSI | last {v:.1} | threshold {:.0} ", self.threshold),
            None => " RSI [No Data] ".to_string(),
        };

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

        // Y-axis labels: 100 / 50 / 0
        let y_labels = [100.0, 50.0, 0.0];
        let y_positions = [0u16, plot_height / 2, plot_height.saturating_sub(1)];
        for (label_val, y_pos) in y_labels.iter().zip(y_positions.iter()) {
            let label = format!("{label_val:>7.0}");
            let y = plot_top + y_pos;
            if y < inner.y + inner.height {
                buf.set_string(inner.x, y, &label, Style::default().fg(self.theme.muted));
            }
        }

        // Threshold: dashed horizontal line
        let ty = plot_top + Self::value_to_y(self.threshold, plot_height);
        if ty >= plot_top && ty < area.bottom() {
            let style = Style::default()
                .fg(self.theme.warning)
                .add_modifier(Modifier::DIM);
            for x in plot_left..plot_left + plot_width {
                if x < area.right() {
                    let ch = if (x - plot_left) % 3 == 0 { "-" } else { " " };
                    buf.set_string(x, ty, ch, style);
                }
            }
        }

        // RSI dots, one column per bar, same window as the candle panel.
        // Points carry only the defined suffix of the series, so walk them
        // by date alongside the bar window.
        let start_bar = window_start(self.bars.len(), plot_width);
        let mut j = 0usize;

        for (i, bar) in self.bars[start_bar..].iter().enumerate() {
            let x = plot_left + i as u16;
            if x >= area.right() {
                break;
            }

            while j < self.points.len() && self.points[j].date < bar.date {
                j += 1;
            }
            let Some(point) = self.points.get(j) else {
                break;
            };
            if point.date != bar.date {
                continue;
            }

            let color = if point.value < self.threshold {
                self.theme.positive
            } else {
                self.theme.accent
            };
            let y = plot_top + Self::value_to_y(point.value, plot_height);
            if y < area.bottom() {
                buf.set_string(x, y, "\u{2022}", Style::default().fg(color));
            }
        }
    }
}
