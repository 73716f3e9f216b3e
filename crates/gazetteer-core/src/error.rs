// crates/gazetteer-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong while loading or querying the gazetteer.
///
/// Only [`GazetteerError::FileUnreadable`] and [`GazetteerError::Io`] abort a
/// load. [`GazetteerError::Row`] is absorbed by the scan loop (logged, row
/// dropped), and [`GazetteerError::MissingArgument`] fails a single query.
#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("cannot open {}: {source}", path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error in {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A malformed gazetteer row.
    #[error("line {line}: {message}")]
    Row { line: usize, message: String },

    /// A query handler was invoked without the argument it needs.
    #[error("Need the {0}")]
    MissingArgument(&'static str),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid configuration file: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("invalid delimiter pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl GazetteerError {
    pub(crate) fn row(line: usize, message: impl Into<String>) -> Self {
        GazetteerError::Row {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GazetteerError>;
