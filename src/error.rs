use thiserror::Error;

#[derive(Error, Debug)]
pub enum Cit2BibError {
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cache file {path} is corrupt: {source}")]
    CorruptCache {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Cache serialization failed: {0}")]
    CacheSerialization(#[from] serde_json::Error),

    #[error("HOME is not set; pass --cache or set CIT2BIB_CACHE")]
    NoHomeDirectory,
}

pub type Result<T> = std::result::Result<T, Cit2BibError>;
