use crate::curve::RATE_DENOMINATOR;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// SplitConfig Account (fixed splitter)
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive each artist's splitter account.
pub const SPLIT_CONFIG_SEED: &str = "split_config";

/// Fixed-ratio payment splitter for one artist.
///
/// Holds no running state beyond the immutable ratio and the two recipient
/// identities fixed at registration. `split_amounts` is a pure function of
/// `(amount, ratio)`.
#[account]
#[derive(Default, Debug)]
pub struct SplitConfig {
    /// PDA bump for this account.
    pub bump: u8,

    /// Artist this splitter belongs to.
    pub artist: Pubkey,

    /// Fraction of each split paid to `recipient_one`, as a numerator
    /// over `RATE_DENOMINATOR`.
    pub ratio: u64,

    /// Receives `amount * ratio / RATE_DENOMINATOR`.
    pub recipient_one: Pubkey,

    /// Receives the remainder.
    pub recipient_two: Pubkey,
}

impl SplitConfig {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32 * 3: three Pubkeys
    /// - 8: one u64 field
    pub const LEN: usize = 8 + 1 + 32 * 3 + 8;

    /// Divides `amount` between the two recipients. The second share is
    /// computed by subtraction, not a second multiplication, so the parts
    /// always sum to exactly `amount` regardless of rounding.
    pub fn split_amounts(amount: u64, ratio: u64) -> Option<(u64, u64)> {
        let share_one = u64::try_from(
            (amount as u128)
                .checked_mul(ratio as u128)?
                .checked_div(RATE_DENOMINATOR as u128)?,
        )
        .ok()?;
        let share_two = amount.checked_sub(share_one)?;
        Some((share_one, share_two))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn ten_percent_split() {
        // 10% to recipient one.
        let ratio = RATE_DENOMINATOR / 10;
        assert_eq!(SplitConfig::split_amounts(100, ratio), Some((10, 90)));
    }

    #[test]
    fn uneven_amount_still_sums_exactly() {
        let ratio = RATE_DENOMINATOR / 10;
        // 7 * 10% floors to 0; the remainder picks up the difference.
        assert_eq!(SplitConfig::split_amounts(7, ratio), Some((0, 7)));
        assert_eq!(SplitConfig::split_amounts(33, ratio), Some((3, 30)));
    }

    proptest! {
        #[test]
        fn shares_always_sum_to_amount(
            amount in 0u64..=u64::MAX,
            ratio in 0u64..=RATE_DENOMINATOR,
        ) {
            let (one, two) = SplitConfig::split_amounts(amount, ratio).unwrap();
            prop_assert_eq!(one + two, amount);
            prop_assert!(one <= amount);
        }
    }
}
