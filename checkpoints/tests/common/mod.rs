use alloy_primitives::B256;
use checkpoints::tables::checkpoint;
use containers::{BlockIndex, Bytes32, ChainIndex, Checkpoint, Height};

/// Distinct digest filled with one repeated byte.
pub const fn test_hash(byte: u8) -> Bytes32 {
    Bytes32(B256::repeat_byte(byte))
}

/// Small anchored table: genesis plus two milestones.
pub static SPARSE_TABLE: [Checkpoint; 3] = [
    checkpoint(0, B256::repeat_byte(0xa0)),
    checkpoint(10_000, B256::repeat_byte(0xa1)),
    checkpoint(20_000, B256::repeat_byte(0xa2)),
];

/// Digest derived from a height, unique per height.
pub fn block_hash(height: u64) -> Bytes32 {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&height.to_be_bytes());
    Bytes32(B256::new(bytes))
}

/// Linear chain with one block per height in `0..=tip_height`.
pub fn linear_chain(tip_height: u64) -> ChainIndex {
    let mut index = ChainIndex::with_capacity(tip_height as usize + 1);
    for height in 0..=tip_height {
        let parent = height.checked_sub(1).map(block_hash);
        index.insert(
            block_hash(height),
            BlockIndex {
                hash: block_hash(height),
                height: Height(height),
                parent,
            },
        );
    }
    index
}

/// Entry of a `linear_chain` index at the given height.
pub fn node_at(index: &ChainIndex, height: u64) -> &BlockIndex {
    &index[&block_hash(height)]
}
