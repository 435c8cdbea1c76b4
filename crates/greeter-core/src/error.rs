use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a scenario file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenarios {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse TOML in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid scenarios: {0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
