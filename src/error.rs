//! Error types for toolmaps
//!
//! Only fatal conditions live here. A tool directory without a readable
//! entry file is not an error and never reaches this type.

use std::path::PathBuf;
use thiserror::Error;

/// All error types that can abort a generator run
#[derive(Debug, Error)]
pub enum ToolmapsError {
    /// Aggregator file does not exist
    #[error("Aggregator file not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    /// Aggregator file exists but could not be read
    #[error("Failed to read aggregator file {}: {source}", path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Output table could not be persisted
    #[error("Failed to write table {}: {source}", path.display())]
    TableWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file error
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias for toolmaps operations
pub type Result<T> = std::result::Result<T, ToolmapsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_error() {
        let err = ToolmapsError::SourceNotFound {
            path: PathBuf::from("src/tools/index.ts"),
        };
        assert_eq!(err.to_string(), "Aggregator file not found: src/tools/index.ts");
    }

    #[test]
    fn test_table_write_error_keeps_source() {
        let err = ToolmapsError::TableWrite {
            path: PathBuf::from("/nope/out.tsv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert!(err.to_string().starts_with("Failed to write table /nope/out.tsv"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_config_error() {
        let err = ToolmapsError::Config("bad yaml".to_string());
        assert_eq!(err.to_string(), "Config error: bad yaml");
    }
}
