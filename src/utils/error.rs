use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MergeError {
    #[error("Input file not found or not a regular file: {0}")]
    MissingFile(Utf8PathBuf),

    #[error("Input directory not found or not a directory: {0}")]
    MissingDirectory(Utf8PathBuf),

    #[error("Failed to list directory {path}: {source}")]
    Scan {
        path: Utf8PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("No input CSV files found in {0}")]
    NoInputFiles(String),

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: Utf8PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to write output {path}: {source}")]
    OutputWrite {
        path: Utf8PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid UTF-8 path: {0}")]
    InvalidPath(String),
}

pub type Result<T> = std::result::Result<T, MergeError>;
