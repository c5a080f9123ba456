/// Error types for text aggregation.
///
/// `AggregateError` is fatal for a whole run. `FileFailure` belongs to a
/// single candidate file and never aborts the run.
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("'{}' is not a valid directory", .path.display())]
    InvalidDirectory { path: PathBuf },

    #[error("invalid configuration: {}", .0.join(", "))]
    InvalidConfig(Vec<String>),

    #[error("failed to load config {}: {source}", .path.display())]
    ConfigFile {
        path: PathBuf,
        #[source]
        source: ConfigFileError,
    },

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("failed to write output {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Error, Debug)]
pub enum ConfigFileError {
    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}

/// A candidate file that could not be read.
#[derive(Error, Debug)]
#[error("Error reading file {}: {source}", .path.display())]
pub struct FileFailure {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

pub type Result<T> = std::result::Result<T, AggregateError>;
