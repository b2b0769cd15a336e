use std::path::PathBuf;

use thiserror::Error;

/// A configuration load failure.
///
/// Every variant is fatal to config evaluation. The variants only exist so
/// the report can say which file broke and why.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in {}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid sidebar JSON in {}", path.display())]
    SidebarJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    /// The file that could not be loaded.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ConfigError::Read { path, .. }
            | ConfigError::Toml { path, .. }
            | ConfigError::SidebarJson { path, .. } => path,
        }
    }
}

pub type Result<T, E = ConfigError> = std::result::Result<T, E>;
