use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for modbus-configure operations
#[derive(Error, Debug)]
pub enum ConfigureError {
    #[error("Cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("No version declared in '{}'", path.display())]
    MissingVersion { path: PathBuf },
}

/// Convenience type alias for Results in modbus-configure
pub type Result<T> = std::result::Result<T, ConfigureError>;

impl ConfigureError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ConfigureError::Config(msg.into())
    }

    /// Wrap an I/O error raised while reading `path`
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigureError::Read {
            path: path.into(),
            source,
        }
    }

    /// Wrap an I/O error raised while writing `path`
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigureError::Write {
            path: path.into(),
            source,
        }
    }

    /// True when the error was caused by a file that does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            ConfigureError::Read { source, .. } | ConfigureError::Write { source, .. } => {
                source.kind() == std::io::ErrorKind::NotFound
            }
            _ => false,
        }
    }
}
