//! Screen parameters — one set of constants per run.
//!
//! Defaults match the screen this tool was built for: weekly bars over six
//! months, RSI(14) with a 14-period SMA, keep symbols with RSI strictly
//! below 40. Overridable from a TOML file or CLI flags.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Sampling interval for the price history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    Daily,
    Weekly,
}

impl Interval {
    /// Interval token understood by the Yahoo chart API.
    pub fn as_api_str(&self) -> &'static str {
        match self {
            Interval::Daily => "1d",
            Interval::Weekly => "1wk",
        }
    }
}

/// Parameters for one screening run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenParams {
    /// RSI lookback period.
    pub rsi_period: usize,
    /// Inclusion threshold: keep symbols with last RSI strictly below this.
    pub rsi_threshold: f64,
    /// SMA window applied to the RSI series.
    pub sma_window: usize,
    /// Trailing history span in months.
    pub history_months: u32,
    /// Sampling interval for bars.
    pub interval: Interval,
}

impl Default for ScreenParams {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            rsi_threshold: 40.0,
            sma_window: 14,
            history_months: 6,
            interval: Interval::Weekly,
        }
    }
}

impl ScreenParams {
    /// Load parameters from a TOML file; missing keys fall back to defaults.
    ///
    /// Rejects out-of-range values, so a bad file surfaces here instead of
    /// aborting mid-screen.
    pub fn from_file(path: &Path) -> Result<Self, String> {
        let content =
            std::fs::read_to_string(path).map_err(|e| format!("read params file: {e}"))?;
        let params: Self =
            toml::from_str(&content).map_err(|e| format!("parse params TOML: {e}"))?;
        params.validate()?;
        Ok(params)
    }

    /// Check that the lookback windows are usable.
    ///
    /// The indicator functions require periods of at least 1; anything else
    /// must be rejected at this boundary rather than reaching them.
    pub fn validate(&self) -> Result<(), String> {
        if self.rsi_period == 0 {
            return Err("rsi_period must be at least 1".into());
        }
        if self.sma_window == 0 {
            return Err("sma_window must be at least 1".into());
        }
        if self.history_months == 0 {
            return Err("history_months must be at least 1".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_screen_constants() {
        let p = ScreenParams::default();
        assert_eq!(p.rsi_period, 14);
        assert_eq!(p.rsi_threshold, 40.0);
        assert_eq!(p.sma_window, 14);
        assert_eq!(p.history_months, 6);
        assert_eq!(p.interval, Interval::Weekly);
    }

    #[test]
    fn toml_partial_override() {
        let p: ScreenParams = toml::from_str("rsi_threshold = 30.0").unwrap();
        assert_eq!(p.rsi_threshold, 30.0);
        assert_eq!(p.rsi_period, 14);
    }

    #[test]
    fn zero_periods_fail_validation() {
        let mut p = ScreenParams::default();
        assert!(p.validate().is_ok());

        p.rsi_period = 0;
        assert!(p.validate().unwrap_err().contains("rsi_period"));

        p = ScreenParams::default();
        p.sma_window = 0;
        assert!(p.validate().unwrap_err().contains("sma_window"));

        p = ScreenParams::default();
        p.history_months = 0;
        assert!(p.validate().unwrap_err().contains("history_months"));
    }

    #[test]
    fn from_file_rejects_zero_period() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(&path, "rsi_period = 0\n").unwrap();
        let err = ScreenParams::from_file(&path).unwrap_err();
        assert!(err.contains("rsi_period"));
    }

    #[test]
    fn from_file_accepts_valid_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("params.toml");
        std::fs::write(&path, "rsi_period = 7\nrsi_threshold = 30.0\n").unwrap();
        let p = ScreenParams::from_file(&path).unwrap();
        assert_eq!(p.rsi_period, 7);
        assert_eq!(p.rsi_threshold, 30.0);
    }

    #[test]
    fn interval_api_tokens() {
        assert_eq!(Interval::Weekly.as_api_str(), "1wk");
        assert_eq!(Interval::Daily.as_api_str(), "1d");
    }
}
