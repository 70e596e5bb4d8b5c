use range_order_types::{RangeOrderConfig, ResolveOutcome};
use soroban_sdk::{Address, BytesN, Env, Symbol};

pub fn config_initialized(env: &Env, config: &RangeOrderConfig) {
    env.events().publish(
        (Symbol::new(env, "config_initialized"),),
        (
            config.position_manager.clone(),
            config.factory.clone(),
            config.native_token.clone(),
            config.auction_timespan,
        ),
    );
}

/// Deposit batch pooled into `key`
pub fn orders_created(
    env: &Env,
    key: &BytesN<32>,
    payer: &Address,
    amount_in: i128,
    liquidity_minted: u128,
    owner_count: u32,
) {
    env.events().publish(
        (Symbol::new(env, "orders_created"), key.clone()),
        (payer.clone(), amount_in, liquidity_minted, owner_count),
    );
}

pub fn order_withdrawn(
    env: &Env,
    key: &BytesN<32>,
    owner: &Address,
    liquidity: u128,
    amount0: i128,
    amount1: i128,
) {
    env.events().publish(
        (Symbol::new(env, "order_withdrawn"), key.clone()),
        (owner.clone(), liquidity, amount0, amount1),
    );
}

/// Trading fees collected into the contract for the key's owners
pub fn fees_accrued(env: &Env, key: &BytesN<32>, fee0: u128, fee1: u128) {
    env.events().publish(
        (Symbol::new(env, "fees_accrued"), key.clone()),
        (fee0, fee1),
    );
}

pub fn fill_recorded(env: &Env, key: &BytesN<32>, filled_at: u64) {
    env.events().publish(
        (Symbol::new(env, "fill_recorded"), key.clone()),
        (filled_at,),
    );
}

pub fn orders_resolved(env: &Env, key: &BytesN<32>, resolver: &Address, outcome: &ResolveOutcome) {
    env.events().publish(
        (Symbol::new(env, "orders_resolved"), key.clone()),
        (resolver.clone(), outcome.clone()),
    );
}
