pub mod catalog_instructions;
pub mod rpc;
pub mod utils;
