//! World-level errors: configuration failures plus output I/O.

use thiserror::Error;

use ccs_rules::ConfigError;

/// Errors surfaced to the host during generation.
#[derive(Debug, Error)]
pub enum WorldError {
    /// A catalogue or rule-table validation failure.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The host asked for an item that is not in the catalogue.
    #[error("cannot create unknown item: {name}")]
    UnknownItem { name: String },

    /// The generator config could not be parsed.
    #[error("invalid generator config: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    /// The data package could not be serialized.
    #[error("failed to serialize data package: {0}")]
    DataPackage(#[from] serde_json::Error),

    /// Writing the client archive failed.
    #[error("failed to write client archive: {0}")]
    Io(#[from] std::io::Error),

    /// The zip container could not be assembled.
    #[error("failed to build client archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}
