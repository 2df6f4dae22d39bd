use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Global Configuration Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive the global configuration account.
pub const GLOBAL_CONFIG_SEED: &str = "global_config";

/// Stores all protocol-wide configuration parameters.
///
/// This account is created once at initialization (`InitialiseConfigs`) and
/// is referenced by nearly all instructions. It holds the **payment mint**
/// every registered artist is paid in, and the **tunable parameters** that
/// seed each newly registered artist's components.
#[account]
#[derive(Default, Debug)]
pub struct GlobalConfig {
    /// PDA bump for this account (for seed derivation).
    pub bump: u8,

    /// Current admin of the protocol (authorized to update config).
    pub admin: Pubkey,

    /// Reference currency mint all payments and rewards are denominated in.
    pub payment_mint: Pubkey,

    /// Fraction of every routed payment forwarded to the artist's reward
    /// pool, as a numerator over `RATE_DENOMINATOR`.
    pub pool_rate: u64,

    /// Share units minted into each new artist's reserve at registration.
    pub initial_share_supply: u64,

    /// Default pricing-curve intercept for new distributors, scaled by
    /// `PRECISION` (currency per unit at zero cumulative issuance).
    pub base_price: u128,

    /// Default pricing-curve slope for new distributors, scaled by
    /// `PRECISION` (price increase per unit issued).
    pub slope: u128,

    /// Number of artists registered so far.
    pub artist_count: u64,
}

impl GlobalConfig {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 2: two Pubkeys
    /// - 8 * 3: three u64 fields
    /// - 16 * 2: two u128 fields
    pub const LEN: usize = 8 + 1 + 32 * 2 + 8 * 3 + 16 * 2;
}
