#![no_std]

mod amm;
mod create;
mod events;
mod fees;
mod funds;
mod invariants;
mod key;
mod ledger;
mod resolve;
mod storage;
mod validate;
mod withdraw;

mod certora_specs;


use ledger::OrderLedger;
use range_order_types::{
    CreateOrdersParams, OrderParams, OrderPosition, OrderState, RangeOrderConfig,
    RangeOrderError, ResolveOrdersParams, ResolveOutcome, WithdrawOrderParams,
};
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Vec};

/// Pools independent deposits into shared single-spacing AMM positions that
/// behave as collective limit orders, and settles them once price crosses.
#[contract]
pub struct RangeOrderManager;

#[contractimpl]
impl RangeOrderManager {
    /// Initialize with the AMM contracts, the native asset and the resolver
    /// auction length in seconds
    pub fn initialize(
        env: Env,
        position_manager: Address,
        factory: Address,
        native_token: Address,
        auction_timespan: u64,
    ) -> Result<(), RangeOrderError> {
        if storage::has_config(&env) {
            return Err(RangeOrderError::AlreadyInitialized);
        }
        if auction_timespan == 0 {
            return Err(RangeOrderError::InvalidTimespan);
        }

        let config = RangeOrderConfig {
            position_manager,
            factory,
            native_token,
            auction_timespan,
        };
        storage::set_config(&env, &config);
        events::config_initialized(&env, &config);
        Ok(())
    }

    /// Pull `total_input_amount` from the payer and credit each owner a
    /// proportional share of the liquidity it mints
    ///
    /// # Returns
    /// The position key the deposits were pooled under
    pub fn create_orders(env: Env, params: CreateOrdersParams) -> Result<BytesN<32>, RangeOrderError> {
        create::create_orders(&env, params)
    }

    /// Withdraw part or all (`liquidity == 0`) of an owner's share
    ///
    /// # Returns
    /// (amount0, amount1) - Token amounts paid to the recipient
    pub fn withdraw_order(env: Env, params: WithdrawOrderParams) -> Result<(i128, i128), RangeOrderError> {
        withdraw::withdraw_order(&env, params)
    }

    /// Settle a filled key; callable by anyone
    pub fn resolve_orders(env: Env, params: ResolveOrdersParams) -> Result<ResolveOutcome, RangeOrderError> {
        resolve::resolve_orders(&env, params)
    }

    /// Record when a key was first seen filled; callable by anyone
    ///
    /// # Returns
    /// The recorded fill timestamp
    pub fn record_fill(env: Env, order: OrderParams) -> Result<u64, RangeOrderError> {
        resolve::record_fill(&env, order)
    }

    // === View Functions ===

    pub fn get_config(env: Env) -> Result<RangeOrderConfig, RangeOrderError> {
        storage::get_config(&env)
    }

    pub fn position_key(env: Env, order: OrderParams) -> BytesN<32> {
        key::derive_key(&env, &order)
    }

    /// Live position behind a key
    pub fn get_position(env: Env, key: BytesN<32>) -> Option<OrderPosition> {
        OrderLedger::new(&env, key).position()
    }

    pub fn liquidity_balance(env: Env, key: BytesN<32>, owner: Address) -> u128 {
        OrderLedger::new(&env, key).balance_of(&owner)
    }

    pub fn order_state(env: Env, order: OrderParams) -> Result<OrderState, RangeOrderError> {
        resolve::order_state(&env, order)
    }

    /// Owners of a key with pagination
    /// Maximum limit is 50 to stay within Soroban's read entry limits
    pub fn owners_paginated(env: Env, key: BytesN<32>, start_index: u32, limit: u32) -> Vec<Address> {
        OrderLedger::new(&env, key).owners(start_index, limit)
    }
}
