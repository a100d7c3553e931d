#![allow(clippy::unwrap_used, clippy::expect_used, clippy::arithmetic_side_effects)]
//! Property-based tests for reward accrual over a funding window.
//!
//! Invariants tested:
//! - a single staker present for the whole window earns the funded amount,
//!   less integer truncation
//! - nothing accrues after the window ends
//! - nothing accrues to anyone while the pool is empty
//! - two stakers split the emission in proportion to their stakes

use proptest::prelude::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;

use crate::common::{setup, WINDOW};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_full_window_payout(stake in 1i128..=1_000_000i128, reward in 100i128..=10_000_000i128) {
        let ctx = setup();
        let staker = &ctx.stakers[0];

        ctx.client.stake(staker, &stake);
        prop_assert!(ctx.fund(reward));
        ctx.advance(WINDOW);

        let earned = ctx.client.get_earned(staker);
        let emitted = ctx.client.get_reward_for_duration();

        // Rate truncation loses less than one unit per second of window,
        // index truncation less than one unit overall.
        prop_assert!(earned <= reward);
        prop_assert!(reward - emitted < WINDOW as i128);
        prop_assert!(emitted - earned <= 1);
    }

    #[test]
    fn prop_no_accrual_after_window_end(
        stake in 1i128..=1_000_000i128,
        reward in 100i128..=10_000_000i128,
        extra in 1u64..=1_000_000u64,
    ) {
        let ctx = setup();
        let staker = &ctx.stakers[0];

        ctx.client.stake(staker, &stake);
        prop_assert!(ctx.fund(reward));
        ctx.advance(WINDOW);
        let at_end = ctx.client.get_earned(staker);
        let index_at_end = ctx.client.get_reward_per_token();

        ctx.advance(extra);
        prop_assert_eq!(ctx.client.get_earned(staker), at_end);
        prop_assert_eq!(ctx.client.get_reward_per_token(), index_at_end);
    }

    #[test]
    fn prop_no_reward_while_empty(
        reward in 100i128..=10_000_000i128,
        idle in 1u64..WINDOW,
    ) {
        let ctx = setup();
        let bystander = Address::generate(&ctx.env);
        prop_assert!(ctx.fund(reward));

        let index_before = ctx.client.get_reward_per_token();
        ctx.advance(idle);

        prop_assert_eq!(ctx.client.get_reward_per_token(), index_before);
        prop_assert_eq!(ctx.client.get_earned(&bystander), 0);
        for staker in &ctx.stakers {
            prop_assert_eq!(ctx.client.get_earned(staker), 0);
        }
    }

    #[test]
    fn prop_proportional_split(
        a in 1i128..=100_000i128,
        b in 1i128..=100_000i128,
        reward in 1_000i128..=10_000_000i128,
    ) {
        let ctx = setup();
        let alice = &ctx.stakers[0];
        let bob = &ctx.stakers[1];

        ctx.client.stake(alice, &a);
        ctx.client.stake(bob, &b);
        prop_assert!(ctx.fund(reward));
        ctx.advance(WINDOW);

        let alice_earned = ctx.client.get_earned(alice);
        let bob_earned = ctx.client.get_earned(bob);
        let emitted = ctx.client.get_reward_for_duration();

        // Payouts never exceed what was emitted, and each loses at most one
        // unit to truncation.
        prop_assert!(alice_earned + bob_earned <= emitted);
        prop_assert!(emitted - (alice_earned + bob_earned) <= 2);
        prop_assert!((alice_earned * (a + b) - emitted * a).abs() <= a + b);
    }
}
