#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to serialize record: {0}")]
    Serialization(serde_json::Error),
}

pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
