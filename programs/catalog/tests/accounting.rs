//! End-to-end accounting scenarios driven against the pure state
//! machines, mirroring how payments, issuance, staking and claims
//! interact on-chain (the handlers add only token transfers around
//! these transitions).

use catalog::curve::{LinearCurve, RATE_DENOMINATOR};
use catalog::error::ErrorCode;
use catalog::states::{DistributorState, PoolState, SplitConfig, StakerInfo};
use catalog::PRECISION;
use proptest::prelude::*;

const INITIAL_SUPPLY: u64 = 100_000;
const POOL_RATE: u64 = RATE_DENOMINATOR / 10; // 10%

fn distributor() -> DistributorState {
    DistributorState {
        reserve: INITIAL_SUPPLY,
        initial_supply: INITIAL_SUPPLY,
        base_price: PRECISION, // one currency unit per share unit
        slope: 0,
        ..Default::default()
    }
}

/// Ledger-side mirror of the `pay` handler: issue units, then route the
/// pool cut (or hand it to the artist while the pool is empty). Returns
/// `(units_out, pool_cut, artist_amount)`.
fn route_payment(
    d: &mut DistributorState,
    p: &mut PoolState,
    amount_in: u64,
) -> Result<(u64, u64, u64), ErrorCode> {
    let units = d.quote(amount_in).ok_or(ErrorCode::MathOverflow)?;
    if units == 0 {
        return Err(ErrorCode::ZeroUnitsIssued);
    }
    d.apply_issue(units)?;
    let mut pool_cut = ((amount_in as u128) * (POOL_RATE as u128) / (RATE_DENOMINATOR as u128)) as u64;
    if pool_cut > 0 && p.total_staked > 0 {
        p.accrue(pool_cut)?;
    } else {
        pool_cut = 0;
    }
    Ok((units, pool_cut, amount_in - pool_cut))
}

#[test]
fn first_payment_with_no_stakers_pays_the_artist_in_full() {
    let mut d = distributor();
    let mut p = PoolState::default();

    let (units, pool_cut, artist_amount) = route_payment(&mut d, &mut p, 100).unwrap();
    assert_eq!(units, 100);
    assert_eq!(pool_cut, 0);
    assert_eq!(artist_amount, 100);
    assert_eq!(d.reserve, 99_900);
}

#[test]
fn second_payment_with_one_staker_routes_the_pool_cut() {
    let mut d = distributor();
    let mut p = PoolState::default();
    let mut buyer = StakerInfo::default();

    let (units, _, _) = route_payment(&mut d, &mut p, 100).unwrap();
    p.record_stake(&mut buyer, units).unwrap();

    let (units, pool_cut, artist_amount) = route_payment(&mut d, &mut p, 100).unwrap();
    assert_eq!(units, 100);
    assert_eq!(pool_cut, 10);
    assert_eq!(artist_amount, 90);
    assert_eq!(d.reserve, 99_800);
    // The sole staker is owed the entire pool cut.
    assert_eq!(p.pending(&buyer), Some(10));
}

#[test]
fn payment_exceeding_reserve_is_rejected_whole() {
    let mut d = DistributorState {
        reserve: 50,
        initial_supply: 50,
        base_price: PRECISION,
        slope: 0,
        ..Default::default()
    };
    let mut p = PoolState::default();

    let before = d.clone();
    assert!(matches!(
        route_payment(&mut d, &mut p, 51),
        Err(ErrorCode::InsufficientReserve)
    ));
    assert_eq!(d, before);
}

#[test]
fn single_staker_full_cycle() {
    let mut p = PoolState::default();
    let mut a = StakerInfo::default();

    p.record_stake(&mut a, 100).unwrap();
    p.accrue(100).unwrap();
    assert_eq!(p.pending(&a), Some(100));

    assert_eq!(p.take_claimable(&mut a).unwrap(), 100);
    assert_eq!(p.take_claimable(&mut a).unwrap(), 0);
    assert_eq!(p.total_claimed, 100);
}

#[test]
fn sequential_stakers_split_only_shared_distributions() {
    let mut p = PoolState::default();
    let mut a = StakerInfo::default();
    let mut b = StakerInfo::default();

    p.record_stake(&mut a, 100).unwrap();
    p.accrue(10).unwrap();
    p.record_stake(&mut b, 100).unwrap();
    p.accrue(10).unwrap();

    assert_eq!(p.pending(&a), Some(15));
    assert_eq!(p.pending(&b), Some(5));
}

#[test]
fn unstake_to_zero_then_unstake_again_is_no_stake() {
    let mut p = PoolState::default();
    let mut a = StakerInfo::default();

    p.record_stake(&mut a, 100).unwrap();
    p.record_unstake(&mut a, 100).unwrap();
    assert_eq!(a.amount, 0);
    assert!(matches!(p.record_unstake(&mut a, 1), Err(ErrorCode::NoStake)));
}

#[test]
fn withdrawing_after_two_distributions_keeps_both_rewards() {
    // From the reference behavior: stake, distribute, withdraw half,
    // distribute again, withdraw the rest — both rewards stay claimable.
    let mut p = PoolState::default();
    let mut a = StakerInfo::default();

    p.record_stake(&mut a, 100).unwrap();
    p.accrue(100).unwrap();
    p.record_unstake(&mut a, 50).unwrap();
    p.accrue(100).unwrap();
    p.record_unstake(&mut a, 50).unwrap();

    assert_eq!(p.pending(&a), Some(200));
    assert_eq!(p.take_claimable(&mut a).unwrap(), 200);
}

#[test]
fn splitter_matches_the_reference_ratio() {
    // 10% to recipient one: split(100) -> (10, 90).
    let ratio = RATE_DENOMINATOR / 10;
    assert_eq!(SplitConfig::split_amounts(100, ratio), Some((10, 90)));
}

proptest! {
    // Stake conservation: the pool total always equals the sum of the
    // individual records, across any interleaving of stakes/unstakes.
    #[test]
    fn stake_records_always_sum_to_total(
        ops in prop::collection::vec((0usize..4, 0u64..2, 1u64..=1_000), 1..80)
    ) {
        let mut p = PoolState::default();
        let mut stakers = [StakerInfo::default(), StakerInfo::default()];

        for (op, who, amount) in ops {
            let s = &mut stakers[who as usize];
            match op {
                0 => { let _ = p.record_stake(s, amount); }
                1 => { let _ = p.record_unstake(s, amount); }
                2 => { let _ = p.accrue(amount); }
                _ => { let _ = p.take_claimable(s); }
            }
            prop_assert_eq!(
                p.total_staked,
                stakers.iter().map(|s| s.amount).sum::<u64>()
            );
        }
    }

    // No reward creation: everything claimable plus everything already
    // claimed never exceeds what was distributed, and the shortfall
    // (dust) stays below one currency unit per staker per distribution.
    #[test]
    fn rewards_are_never_created_and_dust_is_bounded(
        ops in prop::collection::vec((0usize..4, 0u64..3, 1u64..=1_000), 1..100)
    ) {
        let mut p = PoolState::default();
        let mut stakers = [
            StakerInfo::default(),
            StakerInfo::default(),
            StakerInfo::default(),
        ];
        let mut distributions = 0u64;

        for (op, who, amount) in ops {
            let s = &mut stakers[who as usize];
            match op {
                0 => { let _ = p.record_stake(s, amount); }
                1 => { let _ = p.record_unstake(s, amount); }
                2 => {
                    if p.accrue(amount).is_ok() {
                        distributions += 1;
                    }
                }
                _ => { let _ = p.take_claimable(s); }
            }

            let outstanding: u64 = stakers
                .iter()
                .map(|s| p.pending(s).unwrap())
                .sum();
            let claimed = p.total_claimed;
            prop_assert!(outstanding + claimed <= p.total_distributed);
            // Dust bound: at most (stakers) units lost per distribution.
            prop_assert!(
                p.total_distributed - outstanding - claimed
                    <= distributions * stakers.len() as u64
            );
        }
    }

    // Issuance conservation across arbitrary payment sequences.
    #[test]
    fn supply_is_conserved_across_payments(
        amounts in prop::collection::vec(1u64..=5_000, 1..50)
    ) {
        let mut d = distributor();
        let mut p = PoolState::default();
        for amount in amounts {
            let _ = route_payment(&mut d, &mut p, amount);
            prop_assert_eq!(d.reserve + d.cumulative_issued, d.initial_supply);
        }
    }

    // The curve quote never exceeds what the payment covers, for flat and
    // sloped configurations alike.
    #[test]
    fn quotes_never_exceed_payment_value(
        amount in 1u64..=1_000_000,
        cumulative in 0u64..=100_000,
        slope in 0u128..=PRECISION,
    ) {
        let units = LinearCurve::units_for_amount(amount, cumulative, PRECISION, slope).unwrap();
        if units > 0 {
            let cost = LinearCurve::amount_for_units(units, cumulative, PRECISION, slope).unwrap();
            prop_assert!(cost <= amount);
        }
    }
}
