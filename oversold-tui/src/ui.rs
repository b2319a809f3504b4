//! Frame layout: title bar, candlestick panel, RSI panel, status bar.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::AppState;
use crate::panels::{CandleChartPanel, RsiPanel};
use crate::theme::Theme;

pub fn draw(f: &mut Frame, app: &AppState) {
    let theme = Theme::default();
    let area = f.area();

    let [title_area, candle_area, rsi_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Percentage(60),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(area);

    draw_title(f, app, title_area, &theme);

    if app.figure.is_empty() {
        draw_empty(f, candle_area.union(rsi_area), &theme);
    } else if let Some((bars, points)) = app.figure.active_panels() {
        let symbol = app
            .figure
            .visible_traces()
            .first()
            .map(|t| t.symbol().to_string())
            .unwrap_or_default();
        f.render_widget(CandleChartPanel::new(bars, &symbol, &theme), candle_area);
        f.render_widget(
            RsiPanel::new(bars, points, app.params.rsi_threshold, &theme),
            rsi_area,
        );
    }

    draw_status(f, app, status_area, &theme);
}

fn draw_title(f: &mut Frame, app: &AppState, area: Rect, theme: &Theme) {
    let text = if app.figure.is_empty() {
        " Oversold ".to_string()
    } else {
        format!(
            " {} [{}/{}] ",
            app.figure.title(),
            app.figure.active + 1,
            app.figure.symbol_count()
        )
    };
    let title = Paragraph::new(Line::from(text)).style(
        Style::default()
            .fg(theme.text_primary)
            .bg(theme.background)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(title, area);
}

fn draw_empty(f: &mut Frame, area: Rect, theme: &Theme) {
    let msg = Paragraph::new("No symbols passed the screen")
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.muted).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.muted)),
        );
    f.render_widget(msg, area);
}

fn draw_status(f: &mut Frame, app: &AppState, area: Rect, theme: &Theme) {
    let hints = if app.figure.symbol_count() > 1 {
        " \u{2190}/\u{2192} symbol | g/G first/last | q quit "
    } else {
        " q quit "
    };
    let status = Paragraph::new(Line::from(hints))
        .style(Style::default().fg(theme.muted).bg(theme.background));
    f.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use oversold_core::chart::Figure;
    use oversold_core::domain::{Bar, ScreenParams};
    use oversold_core::screen::evaluate_symbol;
    use ratatui::{backend::TestBackend, Terminal};

    fn passing_figure(symbols: &[&str]) -> Figure {
        let base = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records: Vec<_> = symbols
            .iter()
            .map(|s| {
                let bars: Vec<Bar> = (0..20)
                    .map(|i| {
                        let close = 300.0 - i as f64 * 5.0;
                        Bar {
                            symbol: s.to_string(),
                            date: base + chrono::Duration::weeks(i as i64),
                            open: close + 1.0,
                            high: close + 3.0,
                            low: close - 2.0,
                            close,
                            volume: 1000,
                        }
                    })
                    .collect();
                evaluate_symbol(s, bars, &ScreenParams::default()).1.unwrap()
            })
            .collect();
        Figure::build(&records)
    }

    fn render(app: &AppState) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn draws_active_symbol_panels() {
        let app = AppState::new(passing_figure(&["A.NS", "B.NS"]), ScreenParams::default());
        let content = render(&app);
        assert!(content.contains("A.NS Candlestick and RSI"));
        assert!(content.contains("[1/2]"));
        assert!(content.contains("RSI | last"));
    }

    #[test]
    fn selector_step_changes_rendered_symbol() {
        let mut app = AppState::new(passing_figure(&["A.NS", "B.NS"]), ScreenParams::default());
        app.next_symbol();
        let content = render(&app);
        assert!(content.contains("B.NS Candlestick and RSI"));
        assert!(content.contains("[2/2]"));
    }

    #[test]
    fn empty_figure_renders_placeholder() {
        let app = AppState::new(Figure::build(&[]), ScreenParams::default());
        let content = render(&app);
        assert!(content.contains("No symbols passed the screen"));
    }
}
