use containers::{BlockIndex, ChainIndex, Height};

/// Select the node forming the trailing boundary of allowed reorganization.
///
/// Walks parent links backward from `tip` while a parent exists and the
/// current node still satisfies `node.height + span > tip.height`. The node
/// at which either condition first fails is returned: for a chain with at
/// least `span` blocks behind the tip that is the node exactly at or just
/// past the trailing edge of the window, otherwise the root.
pub fn auto_select_sync_checkpoint<'a>(
    index: &'a ChainIndex,
    tip: &'a BlockIndex,
    span: u64,
) -> &'a BlockIndex {
    let mut node = tip;
    while node.height.0 + span > tip.height.0 {
        match node.parent_entry(index) {
            Some(parent) => node = parent,
            None => break,
        }
    }
    node
}

/// Whether a block at `height` may still become part of an alternate tip.
///
/// Heights at or below the sync checkpoint fall inside locked history; a
/// `false` result means the reorg-guard caller must reject the competing
/// chain.
pub fn check_sync(height: Height, sync_checkpoint: &BlockIndex) -> bool {
    height > sync_checkpoint.height
}
