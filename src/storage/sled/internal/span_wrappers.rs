use tracing::{info, instrument, warn};

use crate::storage::sled::{
    error::SledStorageError, internal::Key, BincodeConfig, FromBytesWithConfig, ToBytesWithConfig,
};

/// Inserts `value` only if `key` is absent.
#[instrument(name = "sled::insert_new_value_with_key", skip_all)]
pub(crate) fn insert_new_value_with_span(
    key: &Key,
    value: &[u8],
    tree: &sled::Tree,
) -> Result<(), SledStorageError> {
    info!(key = %key, "insert new value with key");
    tree.compare_and_swap(key.as_bytes(), None as Option<&[u8]>, Some(value))?
        .map_err(|_| {
            warn!(key = %key, "key already taken");
            SledStorageError::DuplicateKey(key.to_string())
        })
}

#[instrument(name = "sled::remove_value_with_key", skip_all)]
pub(crate) fn remove_value_with_span(
    key: &Key,
    tree: &sled::Tree,
) -> Result<bool, SledStorageError> {
    info!(key = %key, "remove value with key");
    let removed = tree.remove(key.as_bytes())?.is_some();
    if !removed {
        warn!(key = %key, "Tried to remove non-existing key");
    }
    Ok(removed)
}

#[instrument(name = "sled::get_value_by_key", skip_all)]
pub(crate) fn get_value_in_transaction_with_span(
    key: &Key,
    tree: &sled::transaction::TransactionalTree,
) -> Result<Option<sled::IVec>, SledStorageError> {
    info!(key = %key, "get value with key");
    Ok(tree.get(key.as_bytes())?)
}

#[instrument(name = "sled::insert_value_with_key", skip_all)]
pub(crate) fn insert_value_in_transaction_with_span(
    key: &Key,
    value: &[u8],
    tree: &sled::transaction::TransactionalTree,
) -> Result<(), SledStorageError> {
    info!(key = %key, "insert value with key");
    tree.insert(key.as_bytes(), value)?;
    Ok(())
}

#[instrument(name = "convert_bytes_to_value", skip_all)]
pub(crate) fn deserialize_in_span<T: FromBytesWithConfig<Error = SledStorageError>>(
    config: &BincodeConfig,
    bytes: &[u8],
) -> Result<T, SledStorageError> {
    T::from_bytes(bytes, config)
}

#[instrument(name = "convert_value_to_bytes", skip_all)]
pub(crate) fn serialize_in_span<T: ToBytesWithConfig<Error = SledStorageError>>(
    config: &BincodeConfig,
    value: &T,
) -> Result<Vec<u8>, SledStorageError> {
    value.to_bytes(config)
}

#[instrument(name = "flush_db", skip_all)]
pub(crate) fn flush_db_in_span(db: &sled::Db) -> Result<(), SledStorageError> {
    let bytes = db.flush()?;
    info!(bytes = %bytes, "flushed sled db");

    Ok(())
}
