//! Reading query files.

use crate::config::schema::{QueryConfig, ValidationError};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Where a query config was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    Inline,
    File(PathBuf),
}

impl fmt::Display for ConfigOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigOrigin::Inline => f.write_str("inline query config"),
            ConfigOrigin::File(path) => write!(f, "query file {}", path.display()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read query file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{origin} is not a valid query config: {source}")]
    Parse {
        origin: ConfigOrigin,
        #[source]
        source: toml_edit::de::Error,
    },

    /// Well-formed TOML whose queries fail validation. Every issue is
    /// carried in `source`.
    #[error("invalid {origin}: {} issue(s) found", .source.issues.len())]
    Invalid {
        origin: ConfigOrigin,
        #[source]
        source: ValidationError,
    },
}

impl ConfigError {
    pub fn origin(&self) -> ConfigOrigin {
        match self {
            ConfigError::Read { path, .. } => ConfigOrigin::File(path.clone()),
            ConfigError::Parse { origin, .. } | ConfigError::Invalid { origin, .. } => {
                origin.clone()
            }
        }
    }
}

/// Parse and validate a query config held in memory.
pub fn load_from_str(input: &str) -> Result<QueryConfig, ConfigError> {
    parse(input, ConfigOrigin::Inline)
}

/// Read, parse and validate a query file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<QueryConfig, ConfigError> {
    let path = path.as_ref();
    let input = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&input, ConfigOrigin::File(path.to_path_buf()))
}

fn parse(input: &str, origin: ConfigOrigin) -> Result<QueryConfig, ConfigError> {
    let config: QueryConfig = match toml_edit::de::from_str(input) {
        Ok(config) => config,
        Err(source) => return Err(ConfigError::Parse { origin, source }),
    };
    if let Err(source) = config.validate() {
        return Err(ConfigError::Invalid { origin, source });
    }

    tracing::debug!(%origin, queries = config.queries.len(), "loaded query config");
    Ok(config)
}
