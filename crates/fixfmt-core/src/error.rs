//! Error types for the engine.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to parse a language identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("empty language identifier")]
    Empty,

    #[error("language identifier is not valid UTF-8")]
    NotUtf8,

    #[error("invalid subtag {subtag:?} at position {position}")]
    InvalidSubtag { subtag: String, position: usize },
}

/// Failure to build or transform a [`crate::FixedDecimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecimalError {
    /// The value would leave the representable magnitude range.
    #[error("magnitude limit exceeded")]
    Limit,

    /// The input string is not a decimal number.
    #[error("invalid decimal syntax")]
    Syntax,
}

/// Failure to load data from a provider.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed data in {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported bundle syntax: {syntax}")]
    UnsupportedSyntax { syntax: String },

    #[error("no decimal symbols for locale {langid}")]
    MissingLocale { langid: String },

    #[error("invalid decimal symbols for locale {langid}: {reason}")]
    InvalidSymbols { langid: String, reason: String },
}

/// Failure to construct a [`crate::FixedDecimalFormat`].
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("error loading data: {0}")]
    Data(#[from] DataError),
}
