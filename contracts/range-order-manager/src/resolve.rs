// ============================================================================
// RESOLUTION
// ============================================================================
// Open -> Fillable is observed, never stored: it is the current tick sitting
// past the range. Fillable -> Resolved is this flow. The first time a fill is
// observed (record_fill, or a resolution without a prior stamp) starts the
// resolver's Dutch auction: its cut of everything collected grows linearly
// from 0 to 100% over the configured timespan. The auction applies to the
// principal the position releases; trading fees go to the owners whose
// shares earned them, outside the split.
// ============================================================================

use crate::fees::sync_fees;
use crate::invariants::{payout_conserved, reward_bounded};
use crate::key::derive_key;
use crate::ledger::OrderLedger;
use crate::validate::load_range;
use crate::{amm, events, funds, storage};
use range_order_math::{
    check_range_filled, elapsed_since, pro_rata, resolver_reward, u128_to_amount,
};
use range_order_types::{
    OrderParams, OrderPosition, OrderState, RangeOrderConfig, RangeOrderError,
    ResolveOrdersParams, ResolveOutcome,
};
use soroban_sdk::{log, Address, Env, Map, Vec};

/// Settle a filled key: unwind the position and pay owners and resolver
pub fn resolve_orders(env: &Env, params: ResolveOrdersParams) -> Result<ResolveOutcome, RangeOrderError> {
    let config = storage::get_config(env)?;
    let order = params.order();
    let key = derive_key(env, &order);
    let ledger = OrderLedger::new(env, key.clone());

    let mut position = ledger.require_position()?;
    check_filled(env, &config, &order)?;

    let shares = owner_shares(env, &ledger, &position, &params.owners)?;
    let total_shares = position.owner_liquidity;
    if params.total_liquidity != total_shares {
        return Err(RangeOrderError::LiquidityMismatch);
    }
    let mut listed: u128 = 0;
    for share in shares.values().iter() {
        listed = listed
            .checked_add(share)
            .ok_or(RangeOrderError::ArithmeticOverflow)?;
    }
    if listed != total_shares {
        return Err(RangeOrderError::LedgerInvariant);
    }

    let now = env.ledger().timestamp();
    let elapsed = elapsed_since(position.filled_at, now);

    sync_fees(env, &config, &ledger, &key, &mut position)?;

    let this = env.current_contract_address();
    let position_id = position.position_id;
    amm::decrease(env, &config.position_manager, position_id, position.liquidity);
    let (collected0, collected1) = amm::collect(
        env,
        &config.position_manager,
        position_id,
        &this,
        u128::MAX,
        u128::MAX,
    );
    let collected0 = u128_to_amount(collected0)?;
    let collected1 = u128_to_amount(collected1)?;

    let token0 = order.token0();
    let token1 = order.token1();

    let reward0 = resolver_reward(collected0, elapsed, config.auction_timespan)?;
    let reward1 = resolver_reward(collected1, elapsed, config.auction_timespan)?;
    if !reward_bounded(reward0, collected0) || !reward_bounded(reward1, collected1) {
        return Err(RangeOrderError::LedgerInvariant);
    }
    let owed0 = collected0 - reward0;
    let owed1 = collected1 - reward1;

    let mut paid0: i128 = 0;
    let mut paid1: i128 = 0;
    let mut fees0: i128 = 0;
    let mut fees1: i128 = 0;
    for (owner, share) in shares.iter() {
        let amount0 = pro_rata(env, owed0, share, total_shares)?;
        let amount1 = pro_rata(env, owed1, share, total_shares)?;
        let (fee0, fee1) = ledger.claim_fees(&mut position, &owner)?;
        let fee0 = u128_to_amount(fee0)?;
        let fee1 = u128_to_amount(fee1)?;
        funds::pay_out(env, token0, &owner, amount0 + fee0);
        funds::pay_out(env, token1, &owner, amount1 + fee1);
        paid0 += amount0;
        paid1 += amount1;
        fees0 += fee0;
        fees1 += fee1;
    }

    // Floor dust of principal and fees rides along with the reward
    let resolver0 = collected0 - paid0;
    let resolver1 = collected1 - paid1;
    if !payout_conserved(collected0, paid0, resolver0) || !payout_conserved(collected1, paid1, resolver1) {
        return Err(RangeOrderError::LedgerInvariant);
    }
    let resolver0 = resolver0 + u128_to_amount(position.fees_held0)?;
    let resolver1 = resolver1 + u128_to_amount(position.fees_held1)?;
    funds::pay_out(env, token0, &params.resolver, resolver0);
    funds::pay_out(env, token1, &params.resolver, resolver1);

    ledger.clear_all(&mut position);
    amm::burn(env, &config.position_manager, position_id);
    ledger.remove();

    let outcome = ResolveOutcome {
        collected0,
        collected1,
        fees0,
        fees1,
        resolver0,
        resolver1,
        elapsed,
    };

    log!(env, "orders resolved", position_id, elapsed);
    events::orders_resolved(env, &key, &params.resolver, &outcome);

    Ok(outcome)
}

/// Stamp the first observed fill of a key; later calls keep the first stamp
///
/// Nothing else stamps a fill. A resolution of a key nobody stamped counts
/// zero elapsed time and pays the resolver no reward, however long ago the
/// range was crossed, so keepers call this as soon as they see a crossing.
pub fn record_fill(env: &Env, order: OrderParams) -> Result<u64, RangeOrderError> {
    let config = storage::get_config(env)?;
    let key = derive_key(env, &order);
    let ledger = OrderLedger::new(env, key.clone());

    let mut position = ledger.require_position()?;
    check_filled(env, &config, &order)?;

    match position.filled_at {
        Some(filled_at) => Ok(filled_at),
        None => {
            let filled_at = env.ledger().timestamp();
            position.filled_at = Some(filled_at);
            ledger.save(&position);
            events::fill_recorded(env, &key, filled_at);
            Ok(filled_at)
        }
    }
}

/// Lifecycle state of a key at the current tick
pub fn order_state(env: &Env, order: OrderParams) -> Result<OrderState, RangeOrderError> {
    let config = storage::get_config(env)?;
    let ledger = OrderLedger::new(env, derive_key(env, &order));

    if ledger.position().is_none() {
        return Ok(OrderState::Resolved);
    }
    match check_filled(env, &config, &order) {
        Ok(()) => Ok(OrderState::Fillable),
        Err(RangeOrderError::RangeTooLow) | Err(RangeOrderError::RangeTooHigh) => Ok(OrderState::Open),
        Err(error) => Err(error),
    }
}

fn check_filled(env: &Env, config: &RangeOrderConfig, order: &OrderParams) -> Result<(), RangeOrderError> {
    let range = load_range(env, config, order)?;
    check_range_filled(
        order.input_is_token0(),
        order.tick_lower,
        order.tick_upper,
        range.current_tick,
    )
}

/// Shares of the listed owners, which must be exactly the recorded owners
fn owner_shares(
    env: &Env,
    ledger: &OrderLedger,
    position: &OrderPosition,
    owners: &Vec<Address>,
) -> Result<Map<Address, u128>, RangeOrderError> {
    if owners.len() != position.owner_count {
        return Err(RangeOrderError::OwnersMismatch);
    }

    let mut shares: Map<Address, u128> = Map::new(env);
    for owner in owners.iter() {
        if shares.contains_key(owner.clone()) {
            return Err(RangeOrderError::OwnersMismatch);
        }
        let share = ledger.balance_of(&owner);
        if share == 0 {
            return Err(RangeOrderError::OwnersMismatch);
        }
        shares.set(owner, share);
    }
    Ok(shares)
}
