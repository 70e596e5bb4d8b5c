use crate::full_math::mul_div;
use range_order_types::RangeOrderError;
use soroban_sdk::Env;

/// Fixed-point scale of the fee growth accumulators (1e18)
pub const FEE_GROWTH_SCALE: u128 = 1_000_000_000_000_000_000;

/// Growth in fees per unit of owner share when `fee` is spread over
/// `owner_liquidity`
///
/// Rounds down, so claims computed from it never exceed the fees accrued.
pub fn fee_growth_delta(env: &Env, fee: u128, owner_liquidity: u128) -> Result<u128, RangeOrderError> {
    if fee == 0 || owner_liquidity == 0 {
        return Ok(0);
    }
    mul_div(env, fee, FEE_GROWTH_SCALE, owner_liquidity)
}

/// Fees earned by `share` while the accumulator moved from `checkpoint` to
/// `growth`
pub fn fees_earned(env: &Env, share: u128, growth: u128, checkpoint: u128) -> Result<u128, RangeOrderError> {
    let delta = growth
        .checked_sub(checkpoint)
        .ok_or(RangeOrderError::LedgerInvariant)?;
    if share == 0 || delta == 0 {
        return Ok(0);
    }
    mul_div(env, share, delta, FEE_GROWTH_SCALE)
}
