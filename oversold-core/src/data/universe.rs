//! Universe source — the index constituent list.
//!
//! Downloads the exchange's constituents CSV (Nifty 500 by default), saves
//! the raw body next to the working directory for manual inspection, then
//! re-reads the saved file and extracts the symbol column. Each base ticker
//! gets the market suffix appended to form a provider-ready symbol.
//!
//! The exchange rejects requests with default client identifiers, so the
//! request carries a browser User-Agent.

use super::provider::DataError;
use super::yahoo::BROWSER_USER_AGENT;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default constituents list: NSE Nifty 500.
pub const DEFAULT_UNIVERSE_URL: &str =
    "https://nsearchives.nseindia.com/content/indices/ind_nifty500list.csv";

/// Default market suffix for NSE symbols on Yahoo Finance.
pub const DEFAULT_SUFFIX: &str = ".NS";

/// CSV header of the column holding the base ticker code.
pub const SYMBOL_COLUMN: &str = "Symbol";

/// Fetches and parses the index constituent list.
pub struct UniverseSource {
    url: String,
    suffix: String,
    save_path: PathBuf,
    client: reqwest::blocking::Client,
}

impl Default for UniverseSource {
    fn default() -> Self {
        Self::new(
            DEFAULT_UNIVERSE_URL,
            DEFAULT_SUFFIX,
            Path::new("ind_nifty500list.csv"),
        )
    }
}

impl UniverseSource {
    pub fn new(url: &str, suffix: &str, save_path: &Path) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .unwrap_or_default();

        Self {
            url: url.to_string(),
            suffix: suffix.to_string(),
            save_path: save_path.to_path_buf(),
            client,
        }
    }

    /// Download the constituents CSV, save it locally, and parse the symbols.
    ///
    /// Ordering follows the CSV row order. Any failure (network, HTTP status,
    /// missing column, malformed CSV) is an error; the caller decides whether
    /// to abort or continue with an empty universe.
    pub fn fetch(&self) -> Result<Vec<String>, DataError> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| DataError::UniverseUnavailable(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(DataError::Http {
                status: status.as_u16(),
            });
        }

        let body = resp
            .bytes()
            .map_err(|e| DataError::UniverseUnavailable(e.to_string()))?;

        self.save_and_parse(&body)
    }

    /// Persist the raw response body, then re-read and parse the saved file.
    ///
    /// The re-read is deliberate: the file on disk is the artifact users
    /// inspect when the screen looks wrong, so it is also what gets parsed.
    fn save_and_parse(&self, body: &[u8]) -> Result<Vec<String>, DataError> {
        std::fs::write(&self.save_path, body)?;
        let file = std::fs::File::open(&self.save_path)?;
        parse_constituents(file, &self.suffix)
    }

    /// Fail-soft wrapper: an empty universe instead of an error.
    ///
    /// The rest of the pipeline degenerates gracefully on an empty list, so
    /// a dead exchange endpoint produces an empty screen, not a crash.
    pub fn fetch_or_empty(&self) -> Vec<String> {
        match self.fetch() {
            Ok(symbols) => {
                println!("Downloaded {} constituents from {}", symbols.len(), self.url);
                symbols
            }
            Err(e) => {
                eprintln!("warning: could not load constituent list: {e}");
                Vec::new()
            }
        }
    }

    pub fn save_path(&self) -> &Path {
        &self.save_path
    }
}

/// Parse a headered constituents CSV, returning suffixed symbols in row order.
pub fn parse_constituents<R: Read>(reader: R, suffix: &str) -> Result<Vec<String>, DataError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    let col = headers
        .iter()
        .position(|h| h.trim() == SYMBOL_COLUMN)
        .ok_or_else(|| {
            DataError::Format(format!("constituents CSV has no '{SYMBOL_COLUMN}' column"))
        })?;

    let mut symbols = Vec::new();
    for record in rdr.records() {
        let record = record?;
        if let Some(base) = record.get(col) {
            let base = base.trim();
            if !base.is_empty() {
                symbols.push(format!("{base}{suffix}"));
            }
        }
    }

    Ok(symbols)
}
