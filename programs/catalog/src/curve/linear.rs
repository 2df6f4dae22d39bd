//! Linear issuance curve: price grows with cumulative units issued.

use crate::PRECISION;
use uint::construct_uint;

construct_uint! {
    pub struct U256(4);
}

/// LinearCurve struct implementing the issuance pricing math.
///
/// The unit price at cumulative issuance `x` is
/// `(base_price + slope * x / PRECISION) / PRECISION` currency per unit,
/// with `base_price` and `slope` both scaled by `PRECISION`. The price is
/// non-negative and non-decreasing in `x` by construction (unsigned
/// coefficients), which is what makes the inverse below well defined.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LinearCurve;

impl LinearCurve {
    /// Whether the coefficient pair defines a curve that can price a
    /// payment. A zero intercept with a zero slope prices everything at
    /// zero and `units_for_amount` has no answer for it, so such a pair
    /// must never be stored in configuration.
    pub fn is_priceable(base_price: u128, slope: u128) -> bool {
        base_price > 0 || slope > 0
    }

    /// Unit price at cumulative issuance `x`, scaled by `PRECISION`.
    pub fn price_at(base_price: u128, slope: u128, cumulative_issued: u64) -> Option<u128> {
        base_price.checked_add(
            slope
                .checked_mul(cumulative_issued as u128)?
                .checked_div(PRECISION)?,
        )
    }

    /// How many units `amount_in` currency buys starting from
    /// `cumulative_issued`, i.e. the largest `n` such that the integral of
    /// the price over `[cumulative_issued, cumulative_issued + n]` does not
    /// exceed `amount_in`.
    ///
    /// Solves `(slope/2) n^2 + (base_price * PRECISION + slope * c) n
    /// = amount_in * PRECISION^2` for `n` and floors, so issuance always
    /// rounds down and the buyer can never receive more than was paid for.
    pub fn units_for_amount(
        amount_in: u64,
        cumulative_issued: u64,
        base_price: u128,
        slope: u128,
    ) -> Option<u64> {
        let p = U256::from(PRECISION);
        let amount = U256::from(amount_in);

        let units = if slope == 0 {
            if base_price == 0 {
                return None;
            }
            amount.checked_mul(p)?.checked_div(U256::from(base_price))?
        } else {
            // n = (sqrt(k^2 + 2 m A P^2) - k) / m, k = b P + m c
            let m = U256::from(slope);
            let k = U256::from(base_price)
                .checked_mul(p)?
                .checked_add(m.checked_mul(U256::from(cumulative_issued))?)?;
            let discriminant = k.checked_mul(k)?.checked_add(
                U256::from(2u8)
                    .checked_mul(m)?
                    .checked_mul(amount)?
                    .checked_mul(p)?
                    .checked_mul(p)?,
            )?;
            discriminant
                .integer_sqrt()
                .checked_sub(k)?
                .checked_div(m)?
        };

        if units > U256::from(u64::MAX) {
            None
        } else {
            Some(units.as_u64())
        }
    }

    /// Currency cost of `units` starting from `cumulative_issued`: the
    /// integral of the price curve, floored. Inverse of
    /// `units_for_amount`; used by tests to validate it.
    pub fn amount_for_units(
        units: u64,
        cumulative_issued: u64,
        base_price: u128,
        slope: u128,
    ) -> Option<u64> {
        let p = U256::from(PRECISION);
        let n = U256::from(units);
        let c = U256::from(cumulative_issued);

        // A = (2 b P n + m (2 c n + n^2)) / (2 P^2)
        let linear_term = U256::from(base_price)
            .checked_mul(p)?
            .checked_mul(n)?
            .checked_mul(U256::from(2u8))?;
        let slope_term = U256::from(slope).checked_mul(
            U256::from(2u8)
                .checked_mul(c)?
                .checked_mul(n)?
                .checked_add(n.checked_mul(n)?)?,
        )?;
        let amount = linear_term
            .checked_add(slope_term)?
            .checked_div(U256::from(2u8).checked_mul(p)?.checked_mul(p)?)?;

        if amount > U256::from(u64::MAX) {
            None
        } else {
            Some(amount.as_u64())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Fixed 1-currency-per-unit pricing, as configured at genesis.
    const FLAT: (u128, u128) = (PRECISION, 0);

    #[test]
    fn flat_curve_is_one_to_one() {
        let (b, m) = FLAT;
        assert_eq!(LinearCurve::units_for_amount(100, 0, b, m), Some(100));
        assert_eq!(LinearCurve::units_for_amount(100, 99_900, b, m), Some(100));
        assert_eq!(LinearCurve::amount_for_units(100, 0, b, m), Some(100));
    }

    #[test]
    fn zero_base_price_without_slope_is_rejected() {
        assert_eq!(LinearCurve::units_for_amount(100, 0, 0, 0), None);
    }

    #[test]
    fn priceability_requires_a_nonzero_coefficient() {
        // Either coefficient alone keeps the curve usable.
        assert!(LinearCurve::is_priceable(PRECISION, 0));
        assert!(LinearCurve::is_priceable(0, PRECISION));
        // Zeroing the slope under a zero intercept (or vice versa) leaves
        // a curve no payment can ever be priced against.
        assert!(!LinearCurve::is_priceable(0, 0));
        assert_eq!(LinearCurve::units_for_amount(1_000, 0, 0, 0), None);
    }

    #[test]
    fn price_is_non_decreasing() {
        let b = PRECISION;
        let m = PRECISION / 2;
        let mut last = 0u128;
        for x in [0u64, 1, 10, 1_000, 1_000_000, u32::MAX as u64] {
            let price = LinearCurve::price_at(b, m, x).unwrap();
            assert!(price >= last);
            last = price;
        }
    }

    #[test]
    fn sloped_curve_yields_fewer_units_later() {
        let b = PRECISION;
        let m = PRECISION;
        let early = LinearCurve::units_for_amount(1_000, 0, b, m).unwrap();
        let late = LinearCurve::units_for_amount(1_000, 1_000_000, b, m).unwrap();
        assert!(late < early);
        assert!(early > 0);
    }

    #[test]
    fn sloped_curve_closed_form_matches_known_value() {
        // price(x) = 1 + x (both in whole currency units): paying 2 from
        // x = 0 covers the interval [0, n] with n + n^2/2 <= 2, so n = 1.
        let b = PRECISION;
        let m = PRECISION * PRECISION;
        assert_eq!(LinearCurve::units_for_amount(2, 0, b, m), Some(1));
        // Paying enough for the whole first two units (1 + 2 = 3).
        assert_eq!(LinearCurve::units_for_amount(4, 0, b, m), Some(2));
    }

    proptest! {
        // The buyer never receives units worth more than the payment:
        // pricing the floored quantity back never exceeds amount_in.
        #[test]
        fn issuance_never_overpays_buyer(
            amount_in in 1u64..=1_000_000_000,
            cumulative in 0u64..=1_000_000_000,
            base_price in 1u128..=1_000 * PRECISION,
            slope in 0u128..=1_000 * PRECISION,
        ) {
            let units =
                LinearCurve::units_for_amount(amount_in, cumulative, base_price, slope).unwrap();
            if units > 0 {
                let cost =
                    LinearCurve::amount_for_units(units, cumulative, base_price, slope).unwrap();
                prop_assert!(cost <= amount_in);
            }
        }

        // On a flat curve the inverse is exact: one more unit than quoted
        // costs at least the full payment.
        #[test]
        fn flat_quote_is_maximal(
            amount_in in 1u64..=1_000_000_000,
            base_price in 1u128..=1_000 * PRECISION,
        ) {
            let units = LinearCurve::units_for_amount(amount_in, 0, base_price, 0).unwrap();
            let cost_next = LinearCurve::amount_for_units(units + 1, 0, base_price, 0).unwrap();
            prop_assert!(cost_next >= amount_in);
        }

        // On a sloped curve the integer square root may undershoot the
        // exact inverse by at most one unit: two more units than quoted
        // always cost at least the full payment.
        #[test]
        fn sloped_quote_undershoot_is_bounded(
            amount_in in 1u64..=1_000_000,
            cumulative in 0u64..=1_000_000,
            base_price in 1u128..=10 * PRECISION,
            slope in 1u128..=10 * PRECISION,
        ) {
            let units =
                LinearCurve::units_for_amount(amount_in, cumulative, base_price, slope).unwrap();
            let cost_beyond =
                LinearCurve::amount_for_units(units + 2, cumulative, base_price, slope).unwrap();
            prop_assert!(cost_beyond >= amount_in);
        }
    }
}
