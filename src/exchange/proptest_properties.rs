//! Property-based tests for the exchange's conservation rules.
//!
//! 1. **Invariant monotonicity**: `token × currency` never decreases
//!    across a sequence of swaps.
//! 2. **Ratio preservation**: deposits and withdrawals keep
//!    `currency / token` within one unit of rounding.
//! 3. **Share conservation**: provider balances always sum to the supply.
//! 4. **No free lunch**: a token → currency → token round trip never
//!    returns more than was put in.
//! 5. **Atomicity**: rejected operations leave the state fingerprint
//!    unchanged.

use proptest::prelude::*;

use super::Exchange;
use crate::balances::InMemoryBalances;
use crate::domain::{AccountId, Amount, Holdings, Shares};
use crate::math::product;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

const FUNDING: u128 = 1_000_000_000_000;

fn trader(i: u8) -> AccountId {
    AccountId::from_bytes([i; 20])
}

fn host(accounts: u8) -> InMemoryBalances {
    let mut host = InMemoryBalances::new();
    for i in 0..accounts {
        let funds = Holdings::new(Amount::new(FUNDING), Amount::new(FUNDING));
        let Ok(()) = host.fund(trader(i), funds) else {
            panic!("funding failed");
        };
    }
    host
}

fn seeded(host: &mut InMemoryBalances, token: u128, currency: u128) -> Exchange {
    let mut dex = Exchange::default();
    let Ok(_) = dex.init(host, trader(0), Amount::new(token), Amount::new(currency)) else {
        panic!("init failed");
    };
    dex
}

fn ratio_drift(before: (u128, u128), after: (u128, u128)) -> u128 {
    // |c' · t − t' · c|, compared against max(t, c)
    let lhs = after.1 * before.0;
    let rhs = after.0 * before.1;
    lhs.abs_diff(rhs)
}

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserve values in [10_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    10_000u128..=10_000_000u128
}

/// A swap: direction flag and input amount.
fn swap_strategy() -> impl Strategy<Value = (bool, u128)> {
    (any::<bool>(), 1u128..=1_000_000u128)
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariant_monotonic_over_swaps(
        rt in reserve_strategy(),
        rc in reserve_strategy(),
        swaps in prop::collection::vec(swap_strategy(), 1..20),
    ) {
        let mut h = host(2);
        let mut dex = seeded(&mut h, rt, rc);
        let mut k = product(rt, rc);

        for (token_in, amount) in swaps {
            let amount = Amount::new(amount);
            let result = if token_in {
                dex.swap_token_to_eth(&mut h, trader(1), amount)
            } else {
                dex.swap_eth_to_token(&mut h, trader(1), amount)
            };
            let r = dex.reserves();
            let k_next = product(r.token().get(), r.currency().get());
            if result.is_ok() {
                prop_assert!(k_next >= k, "product decreased: {} < {}", k_next, k);
            } else {
                prop_assert_eq!(k_next, k);
            }
            k = k_next;
        }
    }

    #[test]
    fn prop_deposit_preserves_ratio(
        rt in reserve_strategy(),
        rc in reserve_strategy(),
        token_in in 1u128..=1_000_000u128,
    ) {
        let mut h = host(2);
        let mut dex = seeded(&mut h, rt, rc);
        let Ok(currency_in) = dex.required_currency(Amount::new(token_in)) else {
            return Ok(());
        };
        let Ok(_) = dex.provide_liquidity(&mut h, trader(1), Amount::new(token_in), currency_in)
        else {
            return Ok(());
        };
        let r = dex.reserves();
        let drift = ratio_drift((rt, rc), (r.token().get(), r.currency().get()));
        prop_assert!(drift <= rt.max(rc), "ratio drifted by {}", drift);
    }

    #[test]
    fn prop_withdrawal_preserves_ratio(
        rt in reserve_strategy(),
        rc in reserve_strategy(),
        fraction in 1u128..=99u128,
    ) {
        let mut h = host(1);
        let mut dex = seeded(&mut h, rt, rc);
        let total = dex.total_shares().get();
        let burn = (total * fraction / 100).max(1);
        let Ok(_) = dex.withdraw(&mut h, trader(0), Shares::new(burn)) else {
            return Ok(());
        };
        let r = dex.reserves();
        let drift = ratio_drift((rt, rc), (r.token().get(), r.currency().get()));
        prop_assert!(drift <= rt.max(rc), "ratio drifted by {}", drift);
    }

    #[test]
    fn prop_shares_conserved(
        rt in reserve_strategy(),
        rc in reserve_strategy(),
        ops in prop::collection::vec((0u8..4, 1u8..4, 1u128..=100_000u128), 1..25),
    ) {
        let mut h = host(4);
        let mut dex = seeded(&mut h, rt, rc);

        for (kind, who, amount) in ops {
            let caller = trader(who);
            let amount = Amount::new(amount);
            let _ = match kind {
                0 => dex.swap_token_to_eth(&mut h, caller, amount).map(|_| ()),
                1 => dex.swap_eth_to_token(&mut h, caller, amount).map(|_| ()),
                2 => match dex.required_currency(amount) {
                    Ok(currency) => {
                        dex.provide_liquidity(&mut h, caller, amount, currency).map(|_| ())
                    }
                    Err(e) => Err(e),
                },
                _ => {
                    let held = dex.shares_of(&caller).get();
                    let burn = Shares::new(held.min(amount.get()));
                    dex.withdraw(&mut h, caller, burn).map(|_| ())
                }
            };
            let sum = dex
                .providers()
                .try_fold(Shares::ZERO, |acc, (_, s)| acc.checked_add(&s));
            prop_assert_eq!(sum, Some(dex.total_shares()));
            let r = dex.reserves();
            prop_assert_eq!(h.pool_holdings(), Holdings::new(r.token(), r.currency()));
        }
    }

    #[test]
    fn prop_no_free_lunch(
        rt in reserve_strategy(),
        rc in reserve_strategy(),
        amount in 1u128..=1_000_000u128,
    ) {
        let mut h = host(2);
        let mut dex = seeded(&mut h, rt, rc);
        let Ok(first) = dex.swap_token_to_eth(&mut h, trader(1), Amount::new(amount)) else {
            return Ok(());
        };
        let Ok(second) = dex.swap_eth_to_token(&mut h, trader(1), first.output_amount()) else {
            return Ok(());
        };
        prop_assert!(
            second.output_amount().get() <= amount,
            "round trip gained value: {} > {}",
            second.output_amount(), amount
        );
    }

    #[test]
    fn prop_rejections_are_atomic(
        rt in reserve_strategy(),
        rc in reserve_strategy(),
        token_in in 1u128..=100_000u128,
        skew in 2u128..=1_000u128,
    ) {
        let mut h = host(2);
        let mut dex = seeded(&mut h, rt, rc);
        let before = dex.fingerprint();

        // currency far outside the accepted window
        let Ok(required) = dex.required_currency(Amount::new(token_in)) else {
            return Ok(());
        };
        let skewed = Amount::new(required.get() * skew + 1);
        let deposit = dex.provide_liquidity(&mut h, trader(1), Amount::new(token_in), skewed);
        prop_assert!(deposit.is_err());
        prop_assert_eq!(dex.fingerprint(), before);

        // trader 1 holds no shares
        prop_assert!(dex.withdraw(&mut h, trader(1), Shares::new(1)).is_err());
        prop_assert_eq!(dex.fingerprint(), before);

        // unfunded caller
        prop_assert!(dex.swap_token_to_eth(&mut h, trader(9), Amount::new(token_in)).is_err());
        prop_assert_eq!(dex.fingerprint(), before);
    }
}
