use std::fmt::Display;

use tracing::{debug, instrument};

use crate::storage::{sled::error::SledStorageError, TodoId};

static TODO_PREFIX: &str = "todo:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct KeyPrefix {
    prefix: &'static str,
}

impl KeyPrefix {
    pub fn todo() -> Self {
        Self {
            prefix: TODO_PREFIX,
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.prefix.as_bytes()
    }
}

impl Display for KeyPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.prefix.fmt(f)
    }
}

/// Sled key of a todo item: `todo:<id>`. Ids are time ordered, so a prefix
/// scan yields items in creation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Key {
    full_key: String,
}

impl Key {
    pub fn todo(id: &TodoId) -> Self {
        Self {
            full_key: format!("{}{}", TODO_PREFIX, id),
        }
    }

    #[instrument(name = "Key::from_bytes", skip_all, level = "debug")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SledStorageError> {
        let full_key = std::str::from_utf8(bytes)
            .map_err(SledStorageError::Conversion)?
            .to_string();

        match full_key.strip_prefix(TODO_PREFIX) {
            Some(id) if id.parse::<TodoId>().is_ok() => {
                debug!(key = %full_key, "created key from bytes");
                Ok(Self { full_key })
            }
            _ => Err(SledStorageError::InvalidKey(full_key)),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.full_key.as_bytes()
    }
}

impl Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.full_key.fmt(f)
    }
}
