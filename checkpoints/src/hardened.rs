use crate::registry::CheckpointRegistry;
use containers::{Bytes32, Height};

/// Validate a candidate block hash against the hardened checkpoint table.
///
/// Heights outside the table impose no constraint. A `false` result is a
/// consensus violation: the caller must reject the candidate chain, it is
/// not a retryable condition.
pub fn check_hardened(registry: &CheckpointRegistry, height: Height, hash: Bytes32) -> bool {
    match registry.lookup(height) {
        Some(expected) => hash == expected,
        None => true,
    }
}
