pub mod initialise_configs;
pub use initialise_configs::*;

pub mod update_configs;
pub use update_configs::*;

pub mod register;
pub use register::*;

pub mod pay;
pub use pay::*;

pub mod stake;
pub use stake::*;

pub mod unstake;
pub use unstake::*;

pub mod distribute;
pub use distribute::*;

pub mod claim;
pub use claim::*;

pub mod split;
pub use split::*;
