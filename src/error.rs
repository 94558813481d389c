use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewsError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Catalog error: {0}")]
    Catalog(String),
    #[error("Request timed out: {0}")]
    Timeout(#[from] tokio::time::error::Elapsed),
    #[error("Unexpected HTTP status: {0}")]
    Status(u16),
    #[error("Server error: {0}")]
    Server(String),
}

impl From<rocket::Error> for ViewsError {
    fn from(e: rocket::Error) -> Self {
        ViewsError::Server(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ViewsError>;
