//! Error types for site generation

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that abort a build
#[derive(Error, Debug)]
pub enum SiteError {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize post index: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid config {path:?}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl SiteError {
    /// Attach the offending path to an I/O error
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        SiteError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = SiteError::io(
            "src/content/pages",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("src/content/pages"));
        assert!(msg.contains("missing"));
    }
}
