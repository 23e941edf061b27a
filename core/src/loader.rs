//! CSV ingestion: one `;`-delimited file with a header row and the
//! two required columns `s` (time/distance) and `w` (watts). Extra
//! columns are ignored.

use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::types::{PowerSeries, Sample};

#[derive(Error, Debug)]
pub enum SeriesError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("failed to parse record {record}: {source}")]
    Row {
        record: usize,
        #[source]
        source: csv::Error,
    },
    #[error("failed to read header row: {0}")]
    Header(#[source] csv::Error),
}

/// Read the whole file into memory (opened, fully read, closed).
/// Read failures are fatal for the caller; there is no retry.
pub fn load_power_series(path: impl AsRef<Path>) -> Result<PowerSeries, SeriesError> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|source| SeriesError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut reader = csv::ReaderBuilder::new().delimiter(b';').from_reader(file);

    let headers = reader.headers().map_err(SeriesError::Header)?.clone();
    for required in ["s", "w"] {
        if !headers.iter().any(|h| h == required) {
            return Err(SeriesError::MissingColumn(required));
        }
    }
    debug!("columns present: {:?}", headers);

    let mut series = PowerSeries::default();
    for (idx, record) in reader.deserialize::<Sample>().enumerate() {
        let sample = record.map_err(|source| SeriesError::Row {
            record: idx + 1,
            source,
        })?;
        series.push(sample);
    }

    info!("loaded {} samples from {}", series.len(), path.display());
    Ok(series)
}
