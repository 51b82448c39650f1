use std::num::ParseFloatError;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while turning one page of markup into records. These abort the run.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("item {index} has no {region} region")]
    MissingRegion { index: usize, region: &'static str },
    #[error("item {index} has an unparseable rating {text:?}")]
    InvalidRating {
        index: usize,
        text: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("could not build http client")]
    Client(#[source] reqwest::Error),
    #[error("failed to get HTML for url {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("url {url} answered with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to parse page {url}")]
    Parse {
        url: String,
        #[source]
        source: ExtractError,
    },
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("could not open database {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not write csv file {path}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("could not open log file {path}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("another logger is already installed; log file sink not attached")]
    AlreadySet(#[from] log::SetLoggerError),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Scrape(#[from] ScrapeError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Export(#[from] ExportError),
    #[error(transparent)]
    Logging(#[from] LoggingError),
}
