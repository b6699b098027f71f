//! Host configuration parsed from environment variables.

use std::num::ParseIntError;
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CATALOG_PATH: &str = "content/courses.yaml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT {value:?}: {source}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },

    /// Leptos' `[package.metadata.leptos]` / `LEPTOS_*` settings could not be read.
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    pub catalog_path: PathBuf,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `COURSE_CATALOG`: path of the YAML course catalog, default `content/courses.yaml`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::var("PORT").ok().as_deref(), std::env::var("COURSE_CATALOG").ok().as_deref())
    }

    fn from_vars(port: Option<&str>, catalog_path: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw.to_owned(), source })?,
            None => DEFAULT_PORT,
        };
        let catalog_path = catalog_path
            .filter(|p| !p.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH), PathBuf::from);
        Ok(Self { port, catalog_path })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
