pub mod artist_config;
pub use artist_config::*;

pub mod distributor;
pub use distributor::*;

pub mod events;
pub use events::*;

pub mod global_config;
pub use global_config::*;

pub mod pool;
pub use pool::*;

pub mod split;
pub use split::*;

pub mod staker_info;
pub use staker_info::*;
