use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("input file '{path}' does not exist")]
    InputNotFound { path: PathBuf },

    #[error("'{path}' could not be read as a spreadsheet: {reason}")]
    SourceUnreadable { path: PathBuf, reason: String },

    #[error("row {row}: required column '{field}' is missing or empty")]
    MissingField { row: u32, field: String },

    #[error("row {row}: column '{field}' does not hold a date (found {found})")]
    InvalidFieldType {
        row: u32,
        field: String,
        found: String,
    },

    #[error("unable to write '{path}': {reason}")]
    WriteFailed { path: PathBuf, reason: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReportError>;
