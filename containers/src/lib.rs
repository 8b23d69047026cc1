pub mod block_index;
pub mod checkpoint;
pub mod network;
pub mod types;

pub use block_index::{BlockIndex, ChainIndex};
pub use checkpoint::Checkpoint;
pub use network::Network;
pub use types::{Bytes32, Height};
