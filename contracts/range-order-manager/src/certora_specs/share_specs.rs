// ============================================================================
// SHARE ALLOCATION SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. An owner's share never exceeds the liquidity minted for the batch
// 2. A batch's shares sum to at most the minted liquidity, short by less
//    than one unit per owner
// 3. Pro-rata payouts never exceed the amount being split
// 4. Fee claims of two owners never exceed the fee they split
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::Env;

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::invariants::{fees_within_held, remainder_bounded, share_within_total};

/// RULE: Sanity check - allocation is reachable
#[cfg(feature = "certora")]
#[rule]
pub fn sanity_allocate_share(env: Env, minted: u128, input: i128, total: i128) {
    cvlr_assume!(input > 0 && input <= total);
    let result = range_order_math::allocate_share(&env, minted, input, total);
    cvlr_satisfy!(result.is_ok());
}

/// RULE: A single share never exceeds the batch
#[cfg(feature = "certora")]
#[rule]
pub fn share_never_exceeds_minted(env: Env, minted: u128, input: i128, total: i128) {
    cvlr_assume!(input > 0 && input <= total);

    if let Ok(share) = range_order_math::allocate_share(&env, minted, input, total) {
        cvlr_assert!(share_within_total(share, minted));
    }
}

/// RULE: Two-owner batch leaves a remainder below the owner count
#[cfg(feature = "certora")]
#[rule]
pub fn two_owner_remainder_bounded(env: Env, minted: u128, a: i128, b: i128) {
    cvlr_assume!(a > 0 && b > 0);
    cvlr_assume!(a <= i64::MAX as i128 && b <= i64::MAX as i128);
    cvlr_assume!(minted <= u64::MAX as u128);
    let total = a + b;

    let share_a = range_order_math::allocate_share(&env, minted, a, total);
    let share_b = range_order_math::allocate_share(&env, minted, b, total);
    if let (Ok(share_a), Ok(share_b)) = (share_a, share_b) {
        let allocated = share_a + share_b;
        cvlr_assert!(allocated <= minted);
        cvlr_assert!(remainder_bounded(minted - allocated, 2));
    }
}

/// RULE: Pro-rata payout never exceeds the amount being split
#[cfg(feature = "certora")]
#[rule]
pub fn pro_rata_never_overpays(env: Env, amount: i128, share: u128, total: u128) {
    cvlr_assume!(amount >= 0);
    cvlr_assume!(share <= total);
    cvlr_assume!(total > 0);

    if let Ok(paid) = range_order_math::pro_rata(&env, amount, share, total) {
        cvlr_assert!(paid >= 0);
        cvlr_assert!(paid <= amount);
    }
}

/// RULE: Two owners' fee claims fit inside the fee accrued on their shares
#[cfg(feature = "certora")]
#[rule]
pub fn fee_claims_within_accrued(env: Env, fee: u128, a: u128, b: u128) {
    cvlr_assume!(a > 0 && b > 0);
    cvlr_assume!(a <= u64::MAX as u128 && b <= u64::MAX as u128);
    cvlr_assume!(fee <= u64::MAX as u128);

    if let Ok(growth) = range_order_math::fee_growth_delta(&env, fee, a + b) {
        let claim_a = range_order_math::fees_earned(&env, a, growth, 0);
        let claim_b = range_order_math::fees_earned(&env, b, growth, 0);
        if let (Ok(claim_a), Ok(claim_b)) = (claim_a, claim_b) {
            cvlr_assert!(fees_within_held(claim_a + claim_b, fee));
        }
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::invariants::{remainder_bounded, share_within_total};
    use soroban_sdk::Env;

    #[test]
    fn test_share_never_exceeds_minted() {
        let env = Env::default();
        for (input, total) in [(1i128, 1i128), (1, 3), (2, 3), (999, 1000)] {
            let share = range_order_math::allocate_share(&env, 1_000_003, input, total).unwrap();
            assert!(share_within_total(share, 1_000_003));
        }
    }

    #[test]
    fn test_two_owner_remainder_bounded() {
        let env = Env::default();
        for (a, b) in [(1i128, 1i128), (1, 2), (7, 13), (1_000_000, 1)] {
            for minted in [1u128, 2, 3, 1_000, 999_999] {
                let share_a = range_order_math::allocate_share(&env, minted, a, a + b).unwrap();
                let share_b = range_order_math::allocate_share(&env, minted, b, a + b).unwrap();
                let allocated = share_a + share_b;
                assert!(allocated <= minted);
                assert!(remainder_bounded(minted - allocated, 2));
            }
        }
    }

    #[test]
    fn test_fee_claims_within_accrued() {
        let env = Env::default();
        for (a, b) in [(1u128, 1u128), (1, 2), (600, 400), (7, 13)] {
            for fee in [0u128, 1, 50, 1_000_003] {
                let growth = range_order_math::fee_growth_delta(&env, fee, a + b).unwrap();
                let claim_a = range_order_math::fees_earned(&env, a, growth, 0).unwrap();
                let claim_b = range_order_math::fees_earned(&env, b, growth, 0).unwrap();
                assert!(crate::invariants::fees_within_held(claim_a + claim_b, fee));
            }
        }
    }

    #[test]
    fn test_pro_rata_never_overpays() {
        let env = Env::default();
        let mut paid = 0;
        for share in [1u128, 2, 4] {
            paid += range_order_math::pro_rata(&env, 1001, share, 7).unwrap();
        }
        assert!(paid <= 1001);
        assert!(1001 - paid < 3);
    }
}
