//! Data layer — index constituents and per-symbol price history.

pub mod provider;
pub mod universe;
pub mod yahoo;

pub use provider::{DataError, DataProvider, ScanProgress, SilentProgress, StdoutProgress};
pub use universe::UniverseSource;
pub use yahoo::YahooProvider;
