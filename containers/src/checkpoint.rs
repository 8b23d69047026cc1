use crate::{Bytes32, Height};
use serde::{Deserialize, Serialize};

/// A trusted anchor in the chain's history.
///
/// A checkpoint pins the hash a block at a given height must have. The pair
/// is compiled into the node and treated as ground truth: any competing
/// history with a different hash at a checkpointed height is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Checkpoint {
    /// The height the anchor applies to.
    pub height: Height,
    /// The required block hash at that height.
    pub hash: Bytes32,
}
