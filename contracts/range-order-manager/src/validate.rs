use crate::amm;
use range_order_math::check_range_width;
use range_order_types::{OrderParams, RangeOrderConfig, RangeOrderError};
use soroban_sdk::Env;

/// Market view of a well-formed order
pub struct RangeContext {
    pub tick_spacing: i32,
    pub current_tick: i32,
}

/// Check the order's shape against the AMM and read the current tick
///
/// Rejects identical tokens, fee tiers the factory does not enable, ranges
/// that are not exactly one usable spacing wide, and pairs without a pool.
pub fn load_range(
    env: &Env,
    config: &RangeOrderConfig,
    order: &OrderParams,
) -> Result<RangeContext, RangeOrderError> {
    if order.token_in == order.token_out {
        return Err(RangeOrderError::IdenticalTokens);
    }

    let tick_spacing = amm::get_tick_spacing(env, &config.factory, order.fee)?;
    check_range_width(order.tick_lower, order.tick_upper, tick_spacing)?;

    let pool = amm::get_pool(env, &config.factory, order)?;
    let current_tick = amm::current_tick(env, &pool);

    Ok(RangeContext {
        tick_spacing,
        current_tick,
    })
}
