//! Crate-level error types.

use std::fmt;

/// Errors produced by the viewkit crate.
///
/// Controller commands never fail with an error; they report rejected input
/// through `bool` results or `Option` lookups. This type covers loading and
/// saving configuration.
#[derive(Debug)]
pub enum ViewkitError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ViewkitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ViewkitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<std::io::Error> for ViewkitError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
