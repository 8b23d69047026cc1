use crate::registry::CheckpointRegistry;

/// Rough total number of blocks the chain is expected to have, used as an
/// initial-sync progress denominator. This is just the highest anchored
/// height (0 when the active table is empty) and is never consulted for
/// correctness decisions.
pub fn total_blocks_estimate(registry: &CheckpointRegistry) -> u64 {
    registry.highest_height().0
}
