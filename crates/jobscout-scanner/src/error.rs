use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Invalid search URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Transport error at offset {offset}: {source}")]
    Transport {
        offset: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("Search endpoint returned HTTP {status} at offset {offset}")]
    HttpStatus { offset: u32, status: u16 },
}

pub type Result<T> = std::result::Result<T, ScanError>;
