pub(super) mod error;
mod connection_impl;
mod internal;
mod record;
mod todos_impl;

#[cfg(feature = "integration_tests")]
pub mod test_util;

use std::sync::atomic::{AtomicBool, Ordering};

use super::{StorageError, Todo, TodoStorage, UpdateTodo};
use crate::config::StoreUri;
use bincode::config::{self};
use error::{SledStartupError, SledStorageError};
use record::TodoRecord;
use tracing::{info, info_span, instrument};

pub(crate) static SLED_TODO_TREE: &str = "todo";
const BINCODE_CONFIG: config::Configuration = config::standard()
    .with_variable_int_encoding()
    .with_little_endian();

use bincode::{Decode, Encode};

type BincodeConfig = bincode::config::Configuration;

trait ToBytesWithConfig: Encode {
    type Error;

    fn to_bytes(&self, config: &BincodeConfig) -> Result<Vec<u8>, Self::Error>;
}

trait FromBytesWithConfig: Decode<()> {
    type Error;

    fn from_bytes(bytes: &[u8], config: &BincodeConfig) -> Result<Self, Self::Error>;
}

pub(crate) struct SledStorage {
    db: sled::Db,
    todo_tree: sled::Tree,
    bincode_config: config::Configuration,
    connected: AtomicBool,
}

impl SledStorage {
    /// Opens the store behind `uri`. Blocks until sled has recovered the
    /// database, so callers on the runtime should use `spawn_blocking`.
    #[instrument(name = "Storage::open")]
    pub fn open(uri: &StoreUri) -> Result<Self, SledStartupError> {
        let db = info_span!("sled::open_db").in_scope(|| {
            let config = match uri {
                StoreUri::Sled(path) => sled::Config::default().path(path),
                StoreUri::Memory => sled::Config::default().temporary(true),
            };
            config.open().map_err(|e| {
                tracing::error!(error = %e, uri = ?uri, "failed to open db");
                SledStartupError::OpenSledStorageError(e)
            })
        })?;

        info!(recovered = db.was_recovered(), "opened sled db");

        Self::from_db(db)
    }

    fn from_db(db: sled::Db) -> Result<Self, SledStartupError> {
        let todo_tree = info_span!("sled::open_todo_tree").in_scope(|| {
            db.open_tree(SLED_TODO_TREE).map_err(|e| {
                tracing::error!(error = %e, tree_name = SLED_TODO_TREE, "failed to open todo tree");
                SledStartupError::OpenSledStorageError(e)
            })
        })?;

        Ok(Self {
            db,
            todo_tree,
            bincode_config: BINCODE_CONFIG,
            connected: AtomicBool::new(true),
        })
    }

    fn ensure_connected(&self) -> Result<(), SledStorageError> {
        if self.connected.load(Ordering::Acquire) {
            Ok(())
        } else {
            Err(SledStorageError::Disconnected)
        }
    }
}

impl FromBytesWithConfig for TodoRecord {
    type Error = SledStorageError;

    #[instrument(name = "TodoRecord::from_bytes", skip_all)]
    fn from_bytes(bytes: &[u8], config: &BincodeConfig) -> Result<Self, Self::Error> {
        let (todo, _len) = bincode::decode_from_slice::<TodoRecord, _>(bytes, *config)?;
        Ok(todo)
    }
}

impl ToBytesWithConfig for TodoRecord {
    type Error = SledStorageError;

    #[instrument(name = "TodoRecord::to_bytes", skip_all)]
    fn to_bytes(&self, config: &BincodeConfig) -> Result<Vec<u8>, Self::Error> {
        let bytes = bincode::encode_to_vec(self, *config)?;
        Ok(bytes)
    }
}
