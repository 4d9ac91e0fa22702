use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuestError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Import failed: {0}")]
    Import(String),

    #[error("{0}")]
    Validation(String),

    #[error("Invalid table: {0} (expected 1-22 or \"principal\")")]
    InvalidTable(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, GuestError>;
