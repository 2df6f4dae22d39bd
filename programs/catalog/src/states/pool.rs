use crate::error::ErrorCode;
use crate::states::StakerInfo;
use crate::PRECISION;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// PoolState Account (reward pool)
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive each artist's reward pool account.
pub const POOL_SEED: &str = "pool";

/// Reward pool state for one artist.
///
/// Holds the aggregate stake and the global reward index used to settle
/// every staker's proportional share in O(1), independent of staker count:
/// - `reward_per_share_stored` accumulates reward-currency-per-staked-unit,
///   scaled by `PRECISION`, and only ever grows (and only on deposit while
///   `total_staked > 0`).
/// - Each staker checkpoints the index in
///   `StakerInfo::reward_per_share_completed` at every interaction; the
///   delta since the checkpoint times their stake is what they are owed.
///
/// Division floors everywhere, so the reward vault may retain a dust
/// balance below one unit of precision per distribution. That residue is
/// bounded and never attributed to any staker.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct PoolState {
    /// PDA bump for this account.
    pub bump: u8,

    /// Artist this pool belongs to.
    pub artist: Pubkey,

    /// Total share units currently staked, across all stakers. Always
    /// equals the sum of every `StakerInfo::amount` for this pool.
    pub total_staked: u64,

    /// Global reward index: cumulative reward-currency-per-staked-unit
    /// since pool inception, scaled by `PRECISION`. Strictly non-decreasing.
    pub reward_per_share_stored: u128,

    /// Cumulative reward currency ever accepted by `distribute`.
    pub total_distributed: u64,

    /// Cumulative reward currency ever paid out by `claim`.
    pub total_claimed: u64,
}

impl PoolState {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32: artist pubkey
    /// - 8 * 3: three u64 fields
    /// - 16: one u128 field
    pub const LEN: usize = 8 + 1 + 32 + 8 * 3 + 16;

    /// Folds rewards accrued since the staker's last checkpoint into their
    /// claimable balance and moves the checkpoint to the current index.
    /// Every stake / unstake / claim settles before touching balances so a
    /// distribution can never be double-counted or skipped.
    pub fn settle(&self, staker: &mut StakerInfo) -> std::result::Result<(), ErrorCode> {
        let delta = self
            .reward_per_share_stored
            .checked_sub(staker.reward_per_share_completed)
            .ok_or(ErrorCode::MathOverflow)?;
        let accrued = (staker.amount as u128)
            .checked_mul(delta)
            .ok_or(ErrorCode::MathOverflow)?
            .checked_div(PRECISION)
            .ok_or(ErrorCode::MathOverflow)?;
        staker.rewards_pending = staker
            .rewards_pending
            .checked_add(u64::try_from(accrued).map_err(|_| ErrorCode::MathOverflow)?)
            .ok_or(ErrorCode::MathOverflow)?;
        staker.reward_per_share_completed = self.reward_per_share_stored;
        Ok(())
    }

    /// Claimable amount for `staker` right now, without mutating state.
    pub fn pending(&self, staker: &StakerInfo) -> Option<u64> {
        let delta = self
            .reward_per_share_stored
            .checked_sub(staker.reward_per_share_completed)?;
        let accrued = (staker.amount as u128)
            .checked_mul(delta)?
            .checked_div(PRECISION)?;
        staker
            .rewards_pending
            .checked_add(u64::try_from(accrued).ok()?)
    }

    /// Accepts a reward deposit: advances the global index by
    /// `amount * PRECISION / total_staked`. Fails with `EmptyPool` when
    /// nothing is staked, since such a deposit could never be claimed.
    /// Returns the resulting index for event reporting.
    pub fn accrue(&mut self, amount: u64) -> std::result::Result<u128, ErrorCode> {
        if amount == 0 {
            return Err(ErrorCode::ZeroAmount);
        }
        if self.total_staked == 0 {
            return Err(ErrorCode::EmptyPool);
        }
        self.reward_per_share_stored = self
            .reward_per_share_stored
            .checked_add(
                (amount as u128)
                    .checked_mul(PRECISION)
                    .ok_or(ErrorCode::MathOverflow)?
                    .checked_div(self.total_staked as u128)
                    .ok_or(ErrorCode::MathOverflow)?,
            )
            .ok_or(ErrorCode::MathOverflow)?;
        self.total_distributed = self
            .total_distributed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(self.reward_per_share_stored)
    }

    /// Settles the staker, then adds `amount` to their stake record and to
    /// the pool total.
    pub fn record_stake(
        &mut self,
        staker: &mut StakerInfo,
        amount: u64,
    ) -> std::result::Result<(), ErrorCode> {
        if amount == 0 {
            return Err(ErrorCode::ZeroAmount);
        }
        self.settle(staker)?;
        staker.amount = staker.amount.checked_add(amount).ok_or(ErrorCode::MathOverflow)?;
        self.total_staked = self
            .total_staked
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Settles the staker, then removes `amount` from their stake record
    /// and from the pool total. `NoStake` when the record is already zero,
    /// `InsufficientStake` when it cannot cover `amount`.
    pub fn record_unstake(
        &mut self,
        staker: &mut StakerInfo,
        amount: u64,
    ) -> std::result::Result<(), ErrorCode> {
        if amount == 0 {
            return Err(ErrorCode::ZeroAmount);
        }
        if staker.amount == 0 {
            return Err(ErrorCode::NoStake);
        }
        if amount > staker.amount {
            return Err(ErrorCode::InsufficientStake);
        }
        self.settle(staker)?;
        staker.amount = staker.amount.checked_sub(amount).ok_or(ErrorCode::MathOverflow)?;
        self.total_staked = self
            .total_staked
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Settles the staker and takes their full claimable balance, zeroing
    /// it. Returns the amount to pay out; zero is a valid no-op result.
    pub fn take_claimable(
        &mut self,
        staker: &mut StakerInfo,
    ) -> std::result::Result<u64, ErrorCode> {
        self.settle(staker)?;
        let amount = staker.rewards_pending;
        staker.rewards_pending = 0;
        staker.total_claimed = staker
            .total_claimed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        self.total_claimed = self
            .total_claimed
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> PoolState {
        PoolState::default()
    }

    fn staker() -> StakerInfo {
        StakerInfo::default()
    }

    #[test]
    fn single_staker_receives_full_distribution() {
        let mut p = pool();
        let mut a = staker();
        p.record_stake(&mut a, 100).unwrap();
        assert_eq!(p.pending(&a), Some(0));

        p.accrue(100).unwrap();
        assert_eq!(p.pending(&a), Some(100));

        let paid = p.take_claimable(&mut a).unwrap();
        assert_eq!(paid, 100);
        // Idempotent claim: nothing more to pay without a new distribution.
        assert_eq!(p.take_claimable(&mut a).unwrap(), 0);
    }

    #[test]
    fn sequential_stakers_only_share_later_distributions() {
        let mut p = pool();
        let mut a = staker();
        let mut b = staker();

        p.record_stake(&mut a, 100).unwrap();
        p.accrue(10).unwrap();
        p.record_stake(&mut b, 100).unwrap();
        p.accrue(10).unwrap();

        // A keeps the whole first distribution and half the second.
        assert_eq!(p.pending(&a), Some(15));
        assert_eq!(p.pending(&b), Some(5));
    }

    #[test]
    fn distribute_to_empty_pool_fails_without_touching_the_index() {
        let mut p = pool();
        let before = p.reward_per_share_stored;
        assert!(matches!(p.accrue(100), Err(ErrorCode::EmptyPool)));
        assert_eq!(p.reward_per_share_stored, before);
        assert_eq!(p.total_distributed, 0);
    }

    #[test]
    fn unstake_settles_rewards_before_reducing_stake() {
        let mut p = pool();
        let mut a = staker();
        p.record_stake(&mut a, 100).unwrap();
        p.accrue(100).unwrap();

        p.record_unstake(&mut a, 50).unwrap();
        // Full reward earned while 100 was staked survives the withdrawal.
        assert_eq!(p.pending(&a), Some(100));

        p.record_unstake(&mut a, 50).unwrap();
        assert_eq!(a.amount, 0);
        assert_eq!(p.total_staked, 0);
        assert_eq!(p.pending(&a), Some(100));
    }

    #[test]
    fn unstake_guards() {
        let mut p = pool();
        let mut a = staker();
        p.record_stake(&mut a, 100).unwrap();

        assert!(matches!(
            p.record_unstake(&mut a, 101),
            Err(ErrorCode::InsufficientStake)
        ));

        p.record_unstake(&mut a, 100).unwrap();
        assert!(matches!(p.record_unstake(&mut a, 1), Err(ErrorCode::NoStake)));
    }

    #[test]
    fn dust_from_uneven_division_stays_in_the_pool() {
        let mut p = pool();
        let mut a = staker();
        let mut b = staker();
        let mut c = staker();
        p.record_stake(&mut a, 1).unwrap();
        p.record_stake(&mut b, 1).unwrap();
        p.record_stake(&mut c, 1).unwrap();

        // 100 / 3 floors at the index level: each staker accrues 33 and
        // one unit stays behind as unattributable dust.
        p.accrue(100).unwrap();
        let total: u64 = [&a, &b, &c]
            .iter()
            .map(|s| p.pending(s).unwrap())
            .sum();
        assert_eq!(total, 99);
        assert!(p.total_distributed - total < p.total_staked);
    }
}
