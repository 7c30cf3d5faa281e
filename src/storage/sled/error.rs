use std::str::Utf8Error;

use strum::AsRefStr;
use thiserror::Error;

use crate::storage::StorageError;

#[derive(Error, Debug, AsRefStr)]
pub enum SledStartupError {
    #[error("Failed to open sled storage")]
    OpenSledStorageError(#[source] sled::Error),
}

#[derive(Error, Debug, AsRefStr)]
pub enum SledStorageError {
    #[error("Store is disconnected")]
    Disconnected,

    #[error("Key already exists: {0}")]
    DuplicateKey(String),

    #[error("Failed to encode data")]
    Encode(#[from] bincode::error::EncodeError),

    #[error("Failed to decode data")]
    Decode(#[from] bincode::error::DecodeError),

    #[error("Stored timestamp is out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("Failed to convert to utf8")]
    Conversion(#[from] Utf8Error),

    #[error("Sled error")]
    Sled(#[from] sled::Error),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("sled unabortable transaction error")]
    UnabortableTransaction(#[from] sled::transaction::UnabortableTransactionError),
}

impl From<SledStorageError> for sled::transaction::ConflictableTransactionError<SledStorageError> {
    fn from(value: SledStorageError) -> Self {
        match value {
            SledStorageError::UnabortableTransaction(e) => e.into(),
            other => sled::transaction::ConflictableTransactionError::Abort(other),
        }
    }
}

impl From<sled::transaction::TransactionError<SledStorageError>> for SledStorageError {
    fn from(value: sled::transaction::TransactionError<SledStorageError>) -> Self {
        match value {
            sled::transaction::TransactionError::Abort(e) => e,
            sled::transaction::TransactionError::Storage(e) => Self::Sled(e),
        }
    }
}

impl From<SledStorageError> for StorageError {
    fn from(value: SledStorageError) -> Self {
        match value {
            SledStorageError::Disconnected => {
                tracing::warn!(error = ?value, error_type = %value.as_ref(), "Store used after disconnect");
                Self::Disconnected
            }
            SledStorageError::Decode(_)
            | SledStorageError::InvalidTimestamp(_)
            | SledStorageError::InvalidKey(_)
            | SledStorageError::Conversion(_) => {
                tracing::error!(error = ?value, error_type = %value.as_ref(), "Corrupted record");
                Self::Corrupted(value)
            }
            _ => {
                tracing::error!(error = ?value, error_type = %value.as_ref(), "Storage error");
                Self::Internal(value)
            }
        }
    }
}
