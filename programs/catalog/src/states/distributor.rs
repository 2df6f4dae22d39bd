use crate::curve::LinearCurve;
use crate::error::ErrorCode;
use anchor_lang::prelude::*;

//
// ──────────────────────────────────────────────────────────────────────────────
// DistributorState Account (issuance engine)
// ──────────────────────────────────────────────────────────────────────────────
//

/// PDA seed string used to derive each artist's distributor account.
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Issuance engine state for one artist.
///
/// Tracks the unsold reserve and the cumulative issuance counter that
/// drives the pricing curve. The curve is a pure function of
/// `cumulative_issued`; wall-clock time and caller identity never enter
/// the price. `reserve + cumulative_issued == initial_supply` holds for
/// the lifetime of the account.
#[account]
#[derive(Default, Debug, PartialEq)]
pub struct DistributorState {
    /// PDA bump for this account.
    pub bump: u8,

    /// Artist this distributor belongs to.
    pub artist: Pubkey,

    /// Unsold share units still in the reserve vault. Decreases
    /// monotonically, never increases.
    pub reserve: u64,

    /// Total share units ever issued; sole input to the pricing curve.
    pub cumulative_issued: u64,

    /// Supply minted into the reserve at registration; fixed thereafter.
    pub initial_supply: u64,

    /// Pricing-curve intercept, scaled by `PRECISION`.
    pub base_price: u128,

    /// Pricing-curve slope, scaled by `PRECISION`.
    pub slope: u128,
}

impl DistributorState {
    /// Fixed serialized size of the account (for allocation at initialization).
    ///
    /// Breakdown:
    /// - 8: account discriminator
    /// - 1: bump
    /// - 32: artist pubkey
    /// - 8 * 3: three u64 fields
    /// - 16 * 2: two u128 fields
    pub const LEN: usize = 8 + 1 + 32 + 8 * 3 + 16 * 2;

    /// Units a payment of `amount_in` buys at the current curve position.
    pub fn quote(&self, amount_in: u64) -> Option<u64> {
        LinearCurve::units_for_amount(
            amount_in,
            self.cumulative_issued,
            self.base_price,
            self.slope,
        )
    }

    /// Commits an issuance of `units`: debits the reserve and advances the
    /// cumulative counter. Fails with `InsufficientReserve` when the
    /// reserve cannot cover `units`; on failure nothing is modified.
    pub fn apply_issue(&mut self, units: u64) -> std::result::Result<(), ErrorCode> {
        if units > self.reserve {
            return Err(ErrorCode::InsufficientReserve);
        }
        self.reserve = self.reserve.checked_sub(units).ok_or(ErrorCode::MathOverflow)?;
        self.cumulative_issued = self
            .cumulative_issued
            .checked_add(units)
            .ok_or(ErrorCode::MathOverflow)?;
        debug_assert_eq!(
            self.reserve + self.cumulative_issued,
            self.initial_supply,
            "issuance must conserve the initial supply"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PRECISION;
    use proptest::prelude::*;

    fn distributor(initial_supply: u64) -> DistributorState {
        DistributorState {
            reserve: initial_supply,
            initial_supply,
            base_price: PRECISION,
            slope: 0,
            ..Default::default()
        }
    }

    #[test]
    fn issue_debits_reserve_and_advances_counter() {
        let mut d = distributor(100_000);
        let units = d.quote(100).unwrap();
        assert_eq!(units, 100);
        d.apply_issue(units).unwrap();
        assert_eq!(d.reserve, 99_900);
        assert_eq!(d.cumulative_issued, 100);
    }

    #[test]
    fn issue_beyond_reserve_is_rejected_and_state_unchanged() {
        let mut d = distributor(50);
        let before = d.clone();
        assert!(matches!(d.apply_issue(51), Err(ErrorCode::InsufficientReserve)));
        assert_eq!(d, before);
    }

    proptest! {
        // Conservation: for any sequence of issues that fit in the
        // reserve, reserve + cumulative_issued == initial_supply.
        #[test]
        fn supply_is_conserved(amounts in prop::collection::vec(1u64..=1_000, 1..50)) {
            let mut d = distributor(1_000_000);
            for amount in amounts {
                let units = d.quote(amount).unwrap();
                if units <= d.reserve {
                    d.apply_issue(units).unwrap();
                }
                prop_assert_eq!(d.reserve + d.cumulative_issued, d.initial_supply);
            }
        }
    }
}
