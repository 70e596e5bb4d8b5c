use crate::fees::sync_fees;
use crate::key::derive_key;
use crate::ledger::OrderLedger;
use crate::{amm, events, funds, storage};
use range_order_math::{amount_to_u128, u128_to_amount};
use range_order_types::{RangeOrderError, WithdrawOrderParams};
use soroban_sdk::{log, Env};

/// Pull one owner's share out of the pooled position
///
/// The freed tokens are collected straight to the recipient, together with
/// the trading fees the owner's share has earned. The last owner to leave
/// also takes the rounding remainder and any fee dust; the external position
/// is then burned.
///
/// Returns: (amount0, amount1) paid
pub fn withdraw_order(env: &Env, params: WithdrawOrderParams) -> Result<(i128, i128), RangeOrderError> {
    params.owner.require_auth();

    let config = storage::get_config(env)?;
    let order = params.order();
    let key = derive_key(env, &order);
    let ledger = OrderLedger::new(env, key.clone());

    let mut position = ledger.require_position()?;
    let balance = ledger.balance_of(&params.owner);
    if balance == 0 {
        return Err(RangeOrderError::NotOwner);
    }
    let liquidity = if params.liquidity == 0 {
        balance
    } else {
        params.liquidity
    };

    sync_fees(env, &config, &ledger, &key, &mut position)?;
    let (fees0, fees1) = ledger.record_withdrawal(&mut position, &params.owner, liquidity)?;

    let recipient = params.recipient.unwrap_or_else(|| params.owner.clone());
    let position_id = position.position_id;

    let (amount0, amount1) = amm::decrease(env, &config.position_manager, position_id, liquidity);
    let (mut paid0, mut paid1) = amm::collect(
        env,
        &config.position_manager,
        position_id,
        &recipient,
        amount_to_u128(amount0)?,
        amount_to_u128(amount1)?,
    );

    let (fees0, fees1) = if position.owner_count == 0 {
        // Last owner out: release the remainder and fee dust, then burn
        if position.liquidity > 0 {
            amm::decrease(env, &config.position_manager, position_id, position.liquidity);
        }
        let (rest0, rest1) = amm::collect(
            env,
            &config.position_manager,
            position_id,
            &recipient,
            u128::MAX,
            u128::MAX,
        );
        amm::burn(env, &config.position_manager, position_id);
        ledger.remove();

        paid0 += rest0;
        paid1 += rest1;
        log!(env, "position burned on last exit", position_id);
        (fees0 + position.fees_held0, fees1 + position.fees_held1)
    } else {
        ledger.save(&position);
        (fees0, fees1)
    };

    let fees0 = u128_to_amount(fees0)?;
    let fees1 = u128_to_amount(fees1)?;
    funds::pay_out(env, order.token0(), &recipient, fees0);
    funds::pay_out(env, order.token1(), &recipient, fees1);

    let paid0 = u128_to_amount(paid0)?
        .checked_add(fees0)
        .ok_or(RangeOrderError::ArithmeticOverflow)?;
    let paid1 = u128_to_amount(paid1)?
        .checked_add(fees1)
        .ok_or(RangeOrderError::ArithmeticOverflow)?;

    events::order_withdrawn(env, &key, &params.owner, liquidity, paid0, paid1);
    Ok((paid0, paid1))
}
