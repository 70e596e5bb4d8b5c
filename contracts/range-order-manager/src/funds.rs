use range_order_types::RangeOrderConfig;
use soroban_sdk::{token, Address, Env};

/// Move `amount` of `token` from `payer` into this contract
///
/// The native asset is transferred directly under the payer's authorization;
/// any other token is pulled against an allowance the payer granted this
/// contract beforehand.
pub fn pull_input(env: &Env, config: &RangeOrderConfig, token: &Address, payer: &Address, amount: i128) {
    let this = env.current_contract_address();
    let client = token::Client::new(env, token);

    if *token == config.native_token {
        client.transfer(payer, &this, &amount);
    } else {
        client.transfer_from(&this, payer, &this, &amount);
    }
}

/// Pay `amount` of `token` held by this contract to `to`; zero is a no-op
pub fn pay_out(env: &Env, token: &Address, to: &Address, amount: i128) {
    if amount > 0 {
        token::Client::new(env, token).transfer(&env.current_contract_address(), to, &amount);
    }
}
