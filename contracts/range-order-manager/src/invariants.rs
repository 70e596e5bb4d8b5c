// ============================================================================
// INVARIANTS MODULE
// ============================================================================
//
// Pure predicates over ledger and settlement figures. The order ledger and
// the resolution flow check them at runtime, and the formal verification
// rules assert them.
//
// 1. SHARE INVARIANTS
//    - No owner share exceeds the position's liquidity
//    - The sum of owner shares never exceeds the position's liquidity
//
// 2. ROUNDING INVARIANTS
//    - A deposit batch leaves fewer than `owner_count` units unallocated
//
// 3. FEE INVARIANTS
//    - Fees paid to an owner come out of fees the contract holds
//
// 4. SETTLEMENT INVARIANTS
//    - The resolver reward never exceeds the amount collected
//    - Owner payouts plus the resolver payout equal the amount collected
//
// ============================================================================

/// Invariant: a single owner share fits inside the position
pub fn share_within_total(share: u128, liquidity: u128) -> bool {
    share <= liquidity
}

/// Invariant: the running sum of owner shares fits inside the position
pub fn owners_within_total(owner_liquidity: u128, liquidity: u128) -> bool {
    owner_liquidity <= liquidity
}

/// Invariant: floor allocation across `owner_count` owners loses less than
/// one unit per owner
pub fn remainder_bounded(remainder: u128, owner_count: u32) -> bool {
    if owner_count == 0 {
        remainder == 0
    } else {
        remainder < owner_count as u128
    }
}

/// Invariant: an owner's fee claim is covered by the fees held for the key
pub fn fees_within_held(claimed: u128, held: u128) -> bool {
    claimed <= held
}

/// Invariant: the auction reward is a non-negative part of what was owed
pub fn reward_bounded(reward: i128, owed: i128) -> bool {
    reward >= 0 && reward <= owed
}

/// Invariant: settlement pays out exactly what was collected
pub fn payout_conserved(collected: i128, paid_to_owners: i128, paid_to_resolver: i128) -> bool {
    paid_to_owners >= 0
        && paid_to_resolver >= 0
        && paid_to_owners.checked_add(paid_to_resolver) == Some(collected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_share_within_total() {
        assert!(share_within_total(0, 0));
        assert!(share_within_total(100, 100));
        assert!(!share_within_total(101, 100));
    }

    #[test]
    fn test_owners_within_total() {
        assert!(owners_within_total(1999, 2000));
        assert!(!owners_within_total(2001, 2000));
    }

    #[test]
    fn test_remainder_bounded() {
        assert!(remainder_bounded(0, 0));
        assert!(!remainder_bounded(1, 0));
        assert!(remainder_bounded(0, 1));
        assert!(!remainder_bounded(1, 1));
        assert!(remainder_bounded(2, 3));
        assert!(!remainder_bounded(3, 3));
    }

    #[test]
    fn test_fees_within_held() {
        assert!(fees_within_held(0, 0));
        assert!(fees_within_held(30, 50));
        assert!(!fees_within_held(51, 50));
    }

    #[test]
    fn test_reward_bounded() {
        assert!(reward_bounded(0, 0));
        assert!(reward_bounded(10, 100));
        assert!(reward_bounded(100, 100));
        assert!(!reward_bounded(101, 100));
        assert!(!reward_bounded(-1, 100));
    }

    #[test]
    fn test_payout_conserved() {
        assert!(payout_conserved(1000, 900, 100));
        assert!(payout_conserved(0, 0, 0));
        assert!(!payout_conserved(1000, 900, 99));
        assert!(!payout_conserved(1000, 1001, -1));
        assert!(!payout_conserved(i128::MAX, i128::MAX, 1));
    }
}
