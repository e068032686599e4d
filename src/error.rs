#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum Error {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Failed to serialize request body: {0}")]
    Serialization(String),
    #[error(transparent)]
    CredentialNotFound(#[from] std::env::VarError),
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Serialization(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
