mod key;
pub(crate) mod span_wrappers;
mod tree_scan;

pub(crate) use key::{Key, KeyPrefix};
pub(crate) use tree_scan::TreeScan;
