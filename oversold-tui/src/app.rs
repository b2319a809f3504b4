//! Application state for the chart viewer.

use oversold_core::chart::Figure;
use oversold_core::domain::ScreenParams;

pub struct AppState {
    pub figure: Figure,
    pub params: ScreenParams,
    pub running: bool,
}

impl AppState {
    pub fn new(figure: Figure, params: ScreenParams) -> Self {
        Self {
            figure,
            params,
            running: true,
        }
    }

    pub fn next_symbol(&mut self) {
        self.figure.step_by(1);
    }

    pub fn prev_symbol(&mut self) {
        self.figure.step_by(-1);
    }

    pub fn first_symbol(&mut self) {
        self.figure.select(0);
    }

    pub fn last_symbol(&mut self) {
        let n = self.figure.symbol_count();
        if n > 0 {
            self.figure.select(n - 1);
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use oversold_core::domain::Bar;
    use oversold_core::screen::evaluate_symbol;

    fn test_figure(symbols: &[&str]) -> Figure {
        let base = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let records: Vec<_> = symbols
            .iter()
            .map(|s| {
                let closes: Vec<f64> = (0..20).map(|i| 300.0 - i as f64 * 5.0).collect();
                let bars: Vec<Bar> = closes
                    .iter()
                    .enumerate()
                    .map(|(i, &close)| Bar {
                        symbol: s.to_string(),
                        date: base + chrono::Duration::weeks(i as i64),
                        open: close + 1.0,
                        high: close + 3.0,
                        low: close - 2.0,
                        close,
                        volume: 1000,
                    })
                    .collect();
                evaluate_symbol(s, bars, &ScreenParams::default())
                    .1
                    .expect("declining series passes")
            })
            .collect();
        Figure::build(&records)
    }

    #[test]
    fn navigation_clamps() {
        let mut app = AppState::new(test_figure(&["A.NS", "B.NS"]), ScreenParams::default());
        app.prev_symbol();
        assert_eq!(app.figure.active, 0);
        app.next_symbol();
        assert_eq!(app.figure.active, 1);
        app.next_symbol();
        assert_eq!(app.figure.active, 1);
        app.first_symbol();
        assert_eq!(app.figure.active, 0);
        app.last_symbol();
        assert_eq!(app.figure.active, 1);
    }

    #[test]
    fn navigation_on_empty_figure_is_safe() {
        let mut app = AppState::new(Figure::build(&[]), ScreenParams::default());
        app.next_symbol();
        app.prev_symbol();
        app.last_symbol();
        assert_eq!(app.figure.active, 0);
    }
}
