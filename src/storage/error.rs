use thiserror::Error;

pub use super::sled::error::SledStorageError;
use strum::AsRefStr;

#[derive(Error, Debug, AsRefStr)]
pub enum StorageError {
    #[error("Failed to parse id from string")]
    ParseIdFromString(#[from] uuid::Error),

    #[error("Store is disconnected")]
    Disconnected,

    #[error("Stored record is corrupted")]
    Corrupted(#[source] SledStorageError),

    #[error("Internal storage error")]
    Internal(#[source] SledStorageError),

    #[error("Blocking task join error")]
    JoinError(#[from] tokio::task::JoinError),
}
