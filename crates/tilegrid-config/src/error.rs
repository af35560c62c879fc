//! Errors raised while handling `config.ron`.

use std::path::PathBuf;

/// Failure to load, save, or parse the tile grid configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `config.ron` (or its directory) could not be read.
    #[error("failed to read {}: {source}", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `config.ron` (or its directory) could not be written.
    #[error("failed to write {}: {source}", path.display())]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for [`Config`](crate::Config).
    #[error("failed to parse {}: {source}", path.display())]
    ParseError {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to serialize config: {0}")]
    SerializeError(#[source] ron::Error),
}
