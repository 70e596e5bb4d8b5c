use crate::invariants::remainder_bounded;
use crate::key::derive_key;
use crate::ledger::OrderLedger;
use crate::validate::load_range;
use crate::fees::sync_fees;
use crate::{amm, events, funds, storage};
use range_order_math::{check_range_placement, sum_input_amounts};
use range_order_types::{CreateOrdersParams, OrderPosition, RangeOrderError};
use soroban_sdk::{log, BytesN, Env};

/// Pool a batch of owner deposits into the key's external position
pub fn create_orders(env: &Env, params: CreateOrdersParams) -> Result<BytesN<32>, RangeOrderError> {
    params.payer.require_auth();

    let config = storage::get_config(env)?;
    let order = params.order();

    // Validation happens before any funds move
    if params.owners.len() != params.input_amounts.len() {
        return Err(RangeOrderError::BadInputAmount);
    }
    if sum_input_amounts(&params.input_amounts)? != params.total_input_amount {
        return Err(RangeOrderError::BadInputAmount);
    }

    let range = load_range(env, &config, &order)?;
    check_range_placement(
        order.input_is_token0(),
        order.tick_lower,
        order.tick_upper,
        range.current_tick,
        range.tick_spacing,
    )?;

    let key = derive_key(env, &order);
    let ledger = OrderLedger::new(env, key.clone());
    let mut existing = ledger.position();
    if let Some(position) = existing.as_mut() {
        // Fees earned so far belong to the owners already in the key
        sync_fees(env, &config, &ledger, &key, position)?;
    }

    funds::pull_input(
        env,
        &config,
        &order.token_in,
        &params.payer,
        params.total_input_amount,
    );

    let (position_id, liquidity_minted, amount_used) = amm::mint_or_increase(
        env,
        &config,
        &order,
        existing.as_ref().map(|position| position.position_id),
        params.total_input_amount,
    )?;
    if liquidity_minted == 0 {
        return Err(RangeOrderError::BadInputAmount);
    }

    // The range's rounding may leave part of the input unused
    funds::pay_out(
        env,
        &order.token_in,
        &params.payer,
        params.total_input_amount - amount_used,
    );

    let mut position = match existing {
        Some(mut position) => {
            // Price is back on the open side, so an earlier fill no longer holds
            position.filled_at = None;
            position
        }
        None => OrderPosition {
            token_in: order.token_in.clone(),
            token_out: order.token_out.clone(),
            fee: order.fee,
            tick_lower: order.tick_lower,
            tick_upper: order.tick_upper,
            position_id,
            liquidity: 0,
            owner_liquidity: 0,
            owner_count: 0,
            created_at: env.ledger().timestamp(),
            filled_at: None,
            fee_growth0: 0,
            fee_growth1: 0,
            fees_held0: 0,
            fees_held1: 0,
        },
    };
    position.liquidity = position
        .liquidity
        .checked_add(liquidity_minted)
        .ok_or(RangeOrderError::ArithmeticOverflow)?;

    let mut allocated: u128 = 0;
    for (owner, input_amount) in params.owners.iter().zip(params.input_amounts.iter()) {
        allocated += ledger.record_deposit(
            &mut position,
            &owner,
            input_amount,
            params.total_input_amount,
            liquidity_minted,
        )?;
    }
    // A batch too small to credit anyone would strand its liquidity
    if allocated == 0 {
        return Err(RangeOrderError::BadInputAmount);
    }
    if allocated > liquidity_minted
        || !remainder_bounded(liquidity_minted - allocated, params.owners.len())
    {
        return Err(RangeOrderError::LedgerInvariant);
    }

    ledger.save(&position);

    log!(
        env,
        "orders created",
        position.position_id,
        liquidity_minted,
        params.owners.len()
    );
    events::orders_created(
        env,
        &key,
        &params.payer,
        amount_used,
        liquidity_minted,
        params.owners.len(),
    );

    Ok(key)
}
