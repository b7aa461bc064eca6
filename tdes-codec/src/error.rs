//! Error types for codec operations

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Ciphertext is empty or not a whole number of blocks.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Padding bytes of a decrypted buffer do not form valid padding.
    #[error("Padding error: {0}")]
    Padding(String),

    /// The cipher engine could not be set up or refused the key or data.
    #[error("Engine error: {0}")]
    Engine(String),
}

impl From<des::cipher::InvalidLength> for CodecError {
    fn from(_: des::cipher::InvalidLength) -> Self {
        CodecError::Engine("key length rejected by DES-EDE3".to_string())
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
