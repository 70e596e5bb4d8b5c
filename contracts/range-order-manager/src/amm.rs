// ============================================================================
// AMM ADAPTER
// ============================================================================
// Thin call interface to the external factory, pool and position manager.
// The adapter holds no ledger state; amounts it returns are the external
// contracts' own figures.
// ============================================================================

use range_order_types::{
    CollectParams, DecreaseLiquidityParams, IncreaseLiquidityParams, MintParams, OrderParams,
    RangeOrderConfig, RangeOrderError,
};
use soroban_sdk::{token, Address, Env, IntoVal, Symbol};

/// Pool address for the order's pair and fee tier
pub fn get_pool(env: &Env, factory: &Address, order: &OrderParams) -> Result<Address, RangeOrderError> {
    let pool: Option<Address> = env.invoke_contract(
        factory,
        &Symbol::new(env, "get_pool"),
        (order.token0(), order.token1(), order.fee).into_val(env),
    );
    pool.ok_or(RangeOrderError::PoolNotFound)
}

/// Tick spacing of an enabled fee tier
pub fn get_tick_spacing(env: &Env, factory: &Address, fee: u32) -> Result<i32, RangeOrderError> {
    let spacing: i32 = env.invoke_contract(
        factory,
        &Symbol::new(env, "get_fee_tick_spacing"),
        (fee,).into_val(env),
    );
    if spacing <= 0 {
        return Err(RangeOrderError::FeeNotEnabled);
    }
    Ok(spacing)
}

pub fn current_tick(env: &Env, pool: &Address) -> i32 {
    env.invoke_contract(pool, &Symbol::new(env, "tick"), ().into_val(env))
}

/// Deposit `amount_in` of the order's input token into its external position
///
/// Mints a new position when `position_id` is `None`, otherwise increases
/// the existing one. The position manager gets an allowance valid for this
/// ledger only and pulls what the range needs; the allowance is revoked
/// afterwards.
///
/// Returns: (position_id, liquidity_minted, amount_in_used)
pub fn mint_or_increase(
    env: &Env,
    config: &RangeOrderConfig,
    order: &OrderParams,
    position_id: Option<u32>,
    amount_in: i128,
) -> Result<(u32, u128, i128), RangeOrderError> {
    let this = env.current_contract_address();
    let deadline = env.ledger().timestamp();
    let expiration = env.ledger().sequence();
    let input = token::Client::new(env, &order.token_in);

    input.approve(&this, &config.position_manager, &amount_in, &expiration);

    let (amount0_desired, amount1_desired) = if order.input_is_token0() {
        (amount_in, 0)
    } else {
        (0, amount_in)
    };

    let (position_id, liquidity, amount0, amount1) = match position_id {
        None => {
            let params = MintParams {
                token0: order.token0().clone(),
                token1: order.token1().clone(),
                fee: order.fee,
                tick_lower: order.tick_lower,
                tick_upper: order.tick_upper,
                amount0_desired,
                amount1_desired,
                amount0_min: 0,
                amount1_min: 0,
                recipient: this.clone(),
                deadline,
            };
            env.invoke_contract::<(u32, u128, i128, i128)>(
                &config.position_manager,
                &Symbol::new(env, "mint"),
                (params,).into_val(env),
            )
        }
        Some(position_id) => {
            let params = IncreaseLiquidityParams {
                position_id,
                amount0_desired,
                amount1_desired,
                amount0_min: 0,
                amount1_min: 0,
                deadline,
            };
            let (liquidity, amount0, amount1): (u128, i128, i128) = env.invoke_contract(
                &config.position_manager,
                &Symbol::new(env, "increase_liquidity"),
                (params,).into_val(env),
            );
            (position_id, liquidity, amount0, amount1)
        }
    };

    input.approve(&this, &config.position_manager, &0, &expiration);

    let used = if order.input_is_token0() { amount0 } else { amount1 };
    if used < 0 || used > amount_in {
        return Err(RangeOrderError::LedgerInvariant);
    }

    Ok((position_id, liquidity, used))
}

/// Remove liquidity; the freed tokens become owed on the external position
///
/// Returns: (amount0, amount1)
pub fn decrease(
    env: &Env,
    position_manager: &Address,
    position_id: u32,
    liquidity: u128,
) -> (i128, i128) {
    let params = DecreaseLiquidityParams {
        position_id,
        liquidity,
        amount0_min: 0,
        amount1_min: 0,
        deadline: env.ledger().timestamp(),
    };
    env.invoke_contract(
        position_manager,
        &Symbol::new(env, "decrease_liquidity"),
        (params,).into_val(env),
    )
}

/// Transfer owed tokens out of the external position
///
/// Returns: (amount0, amount1)
pub fn collect(
    env: &Env,
    position_manager: &Address,
    position_id: u32,
    recipient: &Address,
    amount0_max: u128,
    amount1_max: u128,
) -> (u128, u128) {
    let params = CollectParams {
        position_id,
        recipient: recipient.clone(),
        amount0_max,
        amount1_max,
    };
    env.invoke_contract(
        position_manager,
        &Symbol::new(env, "collect"),
        (params,).into_val(env),
    )
}

pub fn burn(env: &Env, position_manager: &Address, position_id: u32) {
    env.invoke_contract::<()>(
        position_manager,
        &Symbol::new(env, "burn"),
        (position_id,).into_val(env),
    );
}
