use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// Events: Emitted for off-chain indexers/clients to track protocol state changes
// ──────────────────────────────────────────────────────────────────────────────
//

/// Emitted once when the global configuration is initialized.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct GlobalConfigInitialized {
    /// Protocol admin pubkey (may later be updated).
    pub admin: Pubkey,
    /// Reference currency mint for all payments and rewards.
    pub payment_mint: Pubkey,
    /// Fraction of each payment forwarded to reward pools.
    pub pool_rate: u64,
    /// Share units minted per registration.
    pub initial_share_supply: u64,
    /// Default pricing-curve intercept.
    pub base_price: u128,
    /// Default pricing-curve slope.
    pub slope: u128,
}

/// Emitted whenever configuration parameters are modified via `update_config`.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ConfigUpdated {
    /// Current admin (may be the same or newly set).
    pub admin: Pubkey,
    /// Pool rate after the update.
    pub pool_rate: u64,
    /// Initial share supply after the update.
    pub initial_share_supply: u64,
    /// Curve intercept after the update.
    pub base_price: u128,
    /// Curve slope after the update.
    pub slope: u128,
}

/// Emitted when an artist registers and their components are deployed.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct ArtistRegistered {
    /// The newly registered artist.
    pub artist: Pubkey,
    /// Per-artist share unit mint.
    pub share_mint: Pubkey,
    /// Issuance engine state account.
    pub distributor: Pubkey,
    /// Reward pool state account.
    pub pool: Pubkey,
    /// Fixed splitter configuration account.
    pub splitter: Pubkey,
    /// Share units minted into the reserve.
    pub initial_supply: u64,
}

/// Emitted when a routed payment issues share units to a payer.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct SharesIssued {
    /// The payer who bought share units.
    pub payer: Pubkey,
    /// The artist the payment was routed to.
    pub artist: Pubkey,
    /// Payment amount in reference currency.
    pub amount_in: u64,
    /// Share units issued to the payer.
    pub units_out: u64,
    /// Portion of the payment forwarded to the reward pool.
    pub pool_cut: u64,
    /// Reserve remaining after issuance.
    pub reserve_remaining: u64,
    /// Pool reward index after any pool-cut accrual.
    pub resulting_accumulator: u128,
}

/// Emitted when an account stakes share units into a reward pool.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Staked {
    /// The staking account.
    pub owner: Pubkey,
    /// The artist whose pool was staked into.
    pub artist: Pubkey,
    /// Share units staked.
    pub amount: u64,
    /// Pool total after the stake.
    pub total_staked: u64,
    /// Pool reward index at the time of the stake.
    pub resulting_accumulator: u128,
}

/// Emitted when an account withdraws staked share units.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct Unstaked {
    /// The withdrawing account.
    pub owner: Pubkey,
    /// The artist whose pool was withdrawn from.
    pub artist: Pubkey,
    /// Share units withdrawn.
    pub amount: u64,
    /// Pool total after the withdrawal.
    pub total_staked: u64,
    /// Pool reward index at the time of the withdrawal.
    pub resulting_accumulator: u128,
}

/// Emitted when reward currency is distributed into a pool.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardsDistributed {
    /// The funder of the distribution.
    pub funder: Pubkey,
    /// The artist whose pool received the deposit.
    pub artist: Pubkey,
    /// Reward currency deposited.
    pub amount: u64,
    /// Pool reward index after the deposit.
    pub resulting_accumulator: u128,
}

/// Emitted when an account claims its settled rewards.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct RewardsClaimed {
    /// The claiming account.
    pub owner: Pubkey,
    /// The artist whose pool was claimed from.
    pub artist: Pubkey,
    /// Reward currency paid out (zero for a no-op claim).
    pub amount: u64,
    /// Pool reward index at the time of the claim.
    pub resulting_accumulator: u128,
}

/// Emitted when a payment is divided by a fixed splitter.
#[event]
#[cfg_attr(feature = "client", derive(Debug))]
pub struct PaymentSplit {
    /// The payer whose currency was split.
    pub payer: Pubkey,
    /// The artist whose splitter was used.
    pub artist: Pubkey,
    /// Total amount split.
    pub amount: u64,
    /// Portion paid to recipient one.
    pub share_one: u64,
    /// Portion paid to recipient two.
    pub share_two: u64,
}
