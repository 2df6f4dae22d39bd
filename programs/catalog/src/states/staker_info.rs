use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// StakerInfo Account
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive each staker's per-pool record.
pub const STAKER_INFO_SEED: &str = "staker_info";

/// Staking and reward data for a single (artist, staker) pair.
///
/// Derived from `STAKER_INFO_SEED + artist_pubkey + owner_pubkey`, created
/// lazily on first stake. The record persists at zero stake rather than
/// being closed; `reward_per_share_completed` is the reward-debt snapshot
/// the pool uses to compute rewards accrued since the last interaction.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct StakerInfo {
    /// PDA bump for this account.
    pub bump: u8,

    /// Owner (staker) to whom this record belongs.
    pub owner: Pubkey,

    /// Artist whose pool this record belongs to.
    pub artist: Pubkey,

    /// Share units currently staked by the owner.
    pub amount: u64,

    /// Reward index checkpoint (pool `reward_per_share_stored`) at the
    /// owner's last settlement. Used to compute incremental rewards owed.
    pub reward_per_share_completed: u128,

    /// Rewards settled into the claimable balance but not yet paid out.
    pub rewards_pending: u64,

    /// Total reward currency the owner has successfully claimed.
    pub total_claimed: u64,
}

impl StakerInfo {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 2: two Pubkeys
    /// - 8 * 3: three u64 fields
    /// - 16: one u128 field
    pub const LEN: usize = 8 + 1 + 32 * 2 + 8 * 3 + 16;
}
