use std::path::PathBuf;

use thiserror::Error;

/// A theme could not be constructed. Themes fail here or not at all:
/// resolving tokens against a constructed theme cannot fail.
#[derive(Error, Debug)]
pub enum ThemeError {
    #[error("could not parse theme: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("could not read theme file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid theme field `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl ThemeError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
