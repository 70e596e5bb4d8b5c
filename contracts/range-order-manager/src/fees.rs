use crate::ledger::OrderLedger;
use crate::{amm, events};
use range_order_types::{OrderPosition, RangeOrderConfig, RangeOrderError};
use soroban_sdk::{BytesN, Env};

/// Collect the trading fees the external position has accrued and credit
/// them to the key's current owners
///
/// Runs before any owner share changes. Principal is always collected in
/// the same call that decreases it, so whatever the position still owes
/// here is fees.
pub fn sync_fees(
    env: &Env,
    config: &RangeOrderConfig,
    ledger: &OrderLedger,
    key: &BytesN<32>,
    position: &mut OrderPosition,
) -> Result<(), RangeOrderError> {
    let (fee0, fee1) = amm::collect(
        env,
        &config.position_manager,
        position.position_id,
        &env.current_contract_address(),
        u128::MAX,
        u128::MAX,
    );
    if fee0 == 0 && fee1 == 0 {
        return Ok(());
    }

    ledger.accrue_fees(position, fee0, fee1)?;
    events::fees_accrued(env, key, fee0, fee1);
    Ok(())
}
