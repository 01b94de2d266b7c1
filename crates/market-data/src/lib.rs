//! # Nadir Market Data
//!
//! The data-retrieval collaborator: loads already-fetched daily bar files from
//! disk into the in-memory `Instrument` series the engine consumes. One CSV
//! file per ticker, named `<TICKER>.csv`, with a
//! `date,open,high,low,close,volume` header.
//!
//! Fetching price history from a market-data provider is deliberately outside
//! this crate (and this system); whatever produced the files owns retries,
//! rate limits, and ticker discovery.

use core_types::{Bar, Instrument};
use std::fs::File;
use std::path::Path;

pub mod error;

pub use error::DataError;

/// Loads one instrument from a CSV bar file. The ticker is taken from the
/// file stem, uppercased; bars are sorted by date on load.
pub fn load_instrument(path: &Path) -> Result<Instrument, DataError> {
    let ticker = path
        .file_stem()
        .map(|stem| stem.to_string_lossy().to_uppercase())
        .unwrap_or_default();

    let file = File::open(path).map_err(|source| DataError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::Reader::from_reader(file);
    let mut bars: Vec<Bar> = Vec::new();
    for record in reader.deserialize() {
        let bar: Bar = record.map_err(|source| DataError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        bars.push(bar);
    }

    bars.sort_by_key(|bar| bar.date);

    tracing::debug!(ticker = %ticker, bars = bars.len(), "loaded bar file");
    Ok(Instrument::new(ticker, bars))
}

/// Lists the `*.csv` bar files in a directory, sorted by file name so the
/// instrument order (and therefore trade discovery order) is reproducible.
pub fn bar_files(dir: &Path) -> Result<Vec<std::path::PathBuf>, DataError> {
    let entries = std::fs::read_dir(dir).map_err(|source| DataError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths: Vec<_> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    paths.sort();
    Ok(paths)
}

/// Loads every `*.csv` file in a directory, in `bar_files` order.
pub fn load_dir(dir: &Path) -> Result<Vec<Instrument>, DataError> {
    bar_files(dir)?
        .iter()
        .map(|path| load_instrument(path))
        .collect()
}
