use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GranskaError {
    #[error("Unknown ecosystem '{ecosystem}'. Supported ecosystems: {supported}")]
    UnknownEcosystem {
        ecosystem: String,
        supported: String,
    },

    /// The test service rejected the request itself (status in [400, 500)).
    /// Fatal for the whole test pass.
    #[error("{message}")]
    ClientRequest { status: u16, message: String },

    #[error("Test service returned status {status} for {url}")]
    Service { status: u16, url: String },

    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Missing API token. Set GRANSKA_TOKEN or add 'api_token' to granska.yml")]
    MissingApiToken,

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("File parsing error in {file}: {message}")]
    ParseError { file: PathBuf, message: String },

    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Plugin error: {message}")]
    Plugin { message: String },

    #[error("Serialization error: {source}")]
    Serialize {
        #[from]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, GranskaError>;
