use crate::tables;
use containers::{Bytes32, Checkpoint, Height, Network};

/// Immutable table of trusted (height, hash) anchors for one network.
///
/// Built once at startup from the compiled-in table for the selected
/// network and never mutated, so it is safe to share across threads
/// without synchronization.
#[derive(Clone, Copy, Debug)]
pub struct CheckpointRegistry {
    entries: &'static [Checkpoint],
}

impl CheckpointRegistry {
    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Main => Self::new(tables::MAINNET_CHECKPOINTS),
            Network::Test => Self::new(tables::TESTNET_CHECKPOINTS),
        }
    }

    /// `entries` must be sorted by strictly increasing height.
    pub fn new(entries: &'static [Checkpoint]) -> Self {
        debug_assert!(
            entries.windows(2).all(|pair| pair[0].height < pair[1].height),
            "checkpoint table heights must strictly increase"
        );
        Self { entries }
    }

    /// The hash required at `height`, if that height is anchored.
    pub fn lookup(&self, height: Height) -> Option<Bytes32> {
        self.entries
            .binary_search_by_key(&height, |checkpoint| checkpoint.height)
            .ok()
            .map(|position| self.entries[position].hash)
    }

    /// Height of the deepest anchor; `Height(0)` when the table is empty.
    pub fn highest_height(&self) -> Height {
        self.entries
            .last()
            .map_or(Height(0), |checkpoint| checkpoint.height)
    }

    pub fn entries(&self) -> &[Checkpoint] {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_heights_strictly_increase() {
        let entries = tables::MAINNET_CHECKPOINTS;
        assert!(entries
            .windows(2)
            .all(|pair| pair[0].height < pair[1].height));
    }

    #[test]
    fn test_mainnet_is_anchored_at_genesis() {
        let registry = CheckpointRegistry::for_network(Network::Main);
        assert_eq!(registry.entries()[0].height, Height(0));
        assert!(registry.lookup(Height(0)).is_some());
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let registry = CheckpointRegistry::for_network(Network::Main);
        assert_eq!(
            registry.lookup(Height(10_000)),
            Some(tables::MAINNET_CHECKPOINTS[1].hash)
        );
        assert_eq!(registry.lookup(Height(10_001)), None);
    }

    #[test]
    fn test_highest_height() {
        let registry = CheckpointRegistry::for_network(Network::Main);
        assert_eq!(registry.highest_height(), Height(700_000));
    }

    #[test]
    fn test_empty_table_for_testnet() {
        let registry = CheckpointRegistry::for_network(Network::Test);
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert_eq!(registry.highest_height(), Height(0));
        assert_eq!(registry.lookup(Height(0)), None);
    }
}
