pub mod config;

pub use config::{ChainConfig, CHECKPOINT_SPAN, MAINNET_CONFIG, TESTNET_CONFIG};
