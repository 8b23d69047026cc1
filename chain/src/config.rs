use containers::Network;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Maximum number of blocks the sync checkpoint trails behind the best tip.
/// A competing chain must reach above this trailing boundary to be eligible
/// as the new tip.
pub const CHECKPOINT_SPAN: u64 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct ChainConfig {
    pub network: Network,
    pub checkpoint_span: u64,
}

pub const MAINNET_CONFIG: ChainConfig = ChainConfig {
    network: Network::Main,
    checkpoint_span: CHECKPOINT_SPAN,
};

pub const TESTNET_CONFIG: ChainConfig = ChainConfig {
    network: Network::Test,
    checkpoint_span: CHECKPOINT_SPAN,
};

impl ChainConfig {
    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Main => MAINNET_CONFIG,
            Network::Test => TESTNET_CONFIG,
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let config = serde_yaml::from_reader(reader)?;
        Ok(config)
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        MAINNET_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_configs_share_span() {
        assert_eq!(MAINNET_CONFIG.checkpoint_span, CHECKPOINT_SPAN);
        assert_eq!(TESTNET_CONFIG.checkpoint_span, CHECKPOINT_SPAN);
        assert_eq!(ChainConfig::for_network(Network::Test), TESTNET_CONFIG);
    }

    #[test]
    fn test_config_parses_from_yaml() {
        let config: ChainConfig =
            serde_yaml::from_str("NETWORK: main\nCHECKPOINT_SPAN: 5000\n").unwrap();
        assert_eq!(config, MAINNET_CONFIG);
    }
}
