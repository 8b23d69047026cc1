use crate::registry::CheckpointRegistry;
use containers::{BlockIndex, ChainIndex};

/// Deepest checkpoint whose block is actually present in the local index.
///
/// Only a prefix (or a scattered subset) of the anchored blocks may have
/// been downloaded, so the table is scanned from its highest entry down and
/// the first hash that resolves through `index` wins. Returns `None` on a
/// fresh node that has not yet stored any anchored block.
pub fn last_checkpoint<'a>(
    registry: &CheckpointRegistry,
    index: &'a ChainIndex,
) -> Option<&'a BlockIndex> {
    registry
        .entries()
        .iter()
        .rev()
        .find_map(|checkpoint| index.get(&checkpoint.hash))
}
