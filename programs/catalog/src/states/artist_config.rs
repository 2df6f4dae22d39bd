use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// ArtistConfig Account (registry entry)
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive each artist's registry entry.
pub const ARTIST_CONFIG_SEED: &str = "artist_config";

/// Registry entry mapping an artist identity to its deployed components.
///
/// Created exactly once per artist by `register`; the `registered` flag is
/// the insert-once guard, so a second `register` for the same artist fails
/// with `AlreadyRegistered`. Payment routing (`pay`) and all pool
/// operations resolve their accounts through this entry.
#[account]
#[derive(Default, Debug)]
pub struct ArtistConfig {
    /// PDA bump for this account.
    pub bump: u8,

    /// The registered artist wallet (receives the non-pool payment cut).
    pub artist: Pubkey,

    /// Insert-once guard; set on first registration, never cleared.
    pub registered: bool,

    /// Per-artist share unit mint (mint authority is the program PDA).
    pub share_mint: Pubkey,

    /// Vault holding the unsold share reserve (the issuance engine's custody).
    pub reserve_vault: Pubkey,

    /// Vault holding staked share units (the reward pool's custody).
    pub stake_vault: Pubkey,

    /// Vault holding reward currency awaiting claims.
    pub reward_vault: Pubkey,

    /// Issuance engine state account.
    pub distributor: Pubkey,

    /// Reward pool state account.
    pub pool: Pubkey,

    /// Fixed splitter configuration account.
    pub splitter: Pubkey,
}

impl ArtistConfig {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 8: eight Pubkeys
    /// - 1: registered flag
    pub const LEN: usize = 8 + 1 + 32 * 8 + 1;
}
