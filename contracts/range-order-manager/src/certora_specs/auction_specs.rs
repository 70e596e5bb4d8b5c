// ============================================================================
// RESOLVER AUCTION SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. The reward never exceeds the amount owed
// 2. The reward is non-decreasing in elapsed time
// 3. The reward is the full amount once the timespan has passed
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use crate::invariants::reward_bounded;

/// RULE: Reward is bounded by the owed amount
#[cfg(feature = "certora")]
#[rule]
pub fn reward_never_exceeds_owed(owed: i128, elapsed: u64, timespan: u64) {
    cvlr_assume!(owed >= 0);
    cvlr_assume!(timespan > 0);

    if let Ok(reward) = range_order_math::resolver_reward(owed, elapsed, timespan) {
        cvlr_assert!(reward_bounded(reward, owed));
    }
}

/// RULE: Waiting longer never lowers the reward
#[cfg(feature = "certora")]
#[rule]
pub fn reward_monotonic(owed: i128, elapsed1: u64, elapsed2: u64, timespan: u64) {
    cvlr_assume!(owed >= 0 && owed <= u64::MAX as i128);
    cvlr_assume!(timespan > 0);
    cvlr_assume!(elapsed1 <= elapsed2);

    let reward1 = range_order_math::resolver_reward(owed, elapsed1, timespan);
    let reward2 = range_order_math::resolver_reward(owed, elapsed2, timespan);
    if let (Ok(reward1), Ok(reward2)) = (reward1, reward2) {
        cvlr_assert!(reward1 <= reward2);
    }
}

/// RULE: The full timespan earns everything
#[cfg(feature = "certora")]
#[rule]
pub fn reward_saturates(owed: i128, elapsed: u64, timespan: u64) {
    cvlr_assume!(owed >= 0);
    cvlr_assume!(timespan > 0);
    cvlr_assume!(elapsed >= timespan);

    let reward = range_order_math::resolver_reward(owed, elapsed, timespan);
    cvlr_assert!(reward == Ok(owed));
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
