pub mod estimate;
pub mod hardened;
pub mod registry;
pub mod resolver;
pub mod sync;
pub mod tables;

pub use estimate::*;
pub use hardened::*;
pub use registry::*;
pub use resolver::*;
pub use sync::*;
