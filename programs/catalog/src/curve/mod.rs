pub mod linear;
pub use linear::*;

/// Denominator for all ratio-style parameters (pool rate, split ratio).
/// A ratio of 100_000 over this denominator is 10%.
pub const RATE_DENOMINATOR: u64 = 1_000_000;
