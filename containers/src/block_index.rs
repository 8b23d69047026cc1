use crate::{Bytes32, Height};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The locally built block index, keyed by block hash.
///
/// Owned and maintained by the chain-index subsystem; checkpoint code only
/// reads it while the caller holds the chain-state lock.
pub type ChainIndex = HashMap<Bytes32, BlockIndex>;

/// One entry of the block index.
///
/// `parent` names the previous block by hash and resolves through the
/// [`ChainIndex`] map; the genesis entry carries `None`. Parent links are
/// acyclic and terminate at genesis, which the chain-index subsystem
/// guarantees when it connects blocks.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockIndex {
    pub hash: Bytes32,
    pub height: Height,
    pub parent: Option<Bytes32>,
}

impl BlockIndex {
    /// Resolve the parent entry through the supplied index, if it is present.
    pub fn parent_entry<'a>(&self, index: &'a ChainIndex) -> Option<&'a BlockIndex> {
        self.parent.and_then(|hash| index.get(&hash))
    }
}
