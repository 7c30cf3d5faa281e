use crate::storage::sled::{error::SledStorageError, BincodeConfig};

use super::{Key, KeyPrefix};
use sled::Tree;
use tracing::{info, instrument};

pub(crate) struct TreeScan<'a> {
    tree: &'a sled::Tree,
    prefix: KeyPrefix,
}

impl<'a> TreeScan<'a> {
    pub fn within(tree: &'a Tree, prefix: KeyPrefix) -> Self {
        Self { tree, prefix }
    }

    /// Decodes every value under the prefix, in key order. Stops at the
    /// first key or value that fails to decode.
    #[instrument(name = "TreeScan::collect", skip_all)]
    pub fn collect<T>(
        self,
        config: &BincodeConfig,
        deserialize: impl Fn(&Key, &[u8], &BincodeConfig) -> Result<T, SledStorageError>,
    ) -> Result<Vec<T>, SledStorageError> {
        info!(prefix = %self.prefix, "collect values with key prefix");

        let mut items = Vec::new();
        for item in self.tree.scan_prefix(self.prefix.as_bytes()) {
            let (key_bytes, value_bytes) = item?;
            let key = Key::from_bytes(&key_bytes)?;

            items.push(deserialize(&key, &value_bytes, config)?);
        }

        info!(count = items.len(), "collected values");
        Ok(items)
    }
}
