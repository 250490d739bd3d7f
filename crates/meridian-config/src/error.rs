//! Errors raised while reading or writing `meridian.ron`.

use std::path::PathBuf;

/// Failure to load or persist the Meridian settings file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The settings file exists but could not be read.
    #[error("cannot read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings directory or file could not be written.
    #[error("cannot write settings file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid RON for [`crate::Config`].
    #[error("malformed settings in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    /// The in-memory settings could not be rendered as RON.
    #[error("cannot encode settings: {0}")]
    Encode(#[source] ron::Error),
}
