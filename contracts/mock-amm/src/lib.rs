#![no_std]

//! Deterministic single-pair AMM used to exercise the range order contract.
//!
//! One contract plays factory, pool and position manager. Liquidity is a
//! fixed linear rate of the deposited token (`liquidity = amount * num / den`)
//! and positions are single-sided: a range above the current tick takes
//! token0, a range at or below it takes token1. Tests move price and convert
//! reserves explicitly with `set_tick` and `swap_through`.

use range_order_types::{
    CollectParams, DecreaseLiquidityParams, IncreaseLiquidityParams, MintParams,
};
use soroban_sdk::{contract, contractimpl, contracttype, token, Address, Env, Symbol};

#[contract]
pub struct MockAmm;

/// Storage keys
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    Tick,
    NextPositionId,
    Position(u32),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MockConfig {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_spacing: i32,
    /// Liquidity minted per unit of token is `numerator / denominator`
    pub liquidity_numerator: u128,
    pub liquidity_denominator: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MockPosition {
    pub owner: Address,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub liquidity: u128,
    /// Tokens backing the liquidity
    pub reserve0: u128,
    pub reserve1: u128,
    /// Decreased liquidity and fees, waiting for collect
    pub tokens_owed_0: u128,
    pub tokens_owed_1: u128,
}

#[contractimpl]
impl MockAmm {
    pub fn initialize(
        env: Env,
        token_a: Address,
        token_b: Address,
        fee: u32,
        tick_spacing: i32,
        tick: i32,
        liquidity_numerator: u128,
        liquidity_denominator: u128,
    ) {
        if env.storage().instance().has(&DataKey::Config) {
            panic!("Already initialized");
        }
        if token_a == token_b {
            panic!("Identical tokens");
        }
        if tick_spacing <= 0 {
            panic!("Invalid tick spacing");
        }
        if liquidity_numerator == 0 || liquidity_denominator == 0 {
            panic!("Invalid liquidity rate");
        }

        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        let config = MockConfig {
            token0,
            token1,
            fee,
            tick_spacing,
            liquidity_numerator,
            liquidity_denominator,
        };
        env.storage().instance().set(&DataKey::Config, &config);
        env.storage().instance().set(&DataKey::Tick, &tick);
        env.storage().instance().set(&DataKey::NextPositionId, &1u32);
    }

    // === Factory ===

    pub fn get_pool(env: Env, token_a: Address, token_b: Address, fee: u32) -> Option<Address> {
        let config = get_config(&env);
        let (token0, token1) = if token_a < token_b {
            (token_a, token_b)
        } else {
            (token_b, token_a)
        };

        if token0 == config.token0 && token1 == config.token1 && fee == config.fee {
            Some(env.current_contract_address())
        } else {
            None
        }
    }

    pub fn get_fee_tick_spacing(env: Env, fee: u32) -> i32 {
        let config = get_config(&env);
        if fee == config.fee {
            config.tick_spacing
        } else {
            0
        }
    }

    // === Pool ===

    pub fn tick(env: Env) -> i32 {
        get_tick(&env)
    }

    /// Move the price; no reserves change
    pub fn set_tick(env: Env, tick: i32) {
        env.storage().instance().set(&DataKey::Tick, &tick);
    }

    // === Position manager ===

    /// Returns: (position_id, liquidity, amount0, amount1)
    pub fn mint(env: Env, params: MintParams) -> (u32, u128, i128, i128) {
        params.recipient.require_auth();
        check_deadline(&env, params.deadline);

        let config = get_config(&env);
        if params.token0 != config.token0 || params.token1 != config.token1 || params.fee != config.fee {
            panic!("Pool not found");
        }
        validate_ticks(params.tick_lower, params.tick_upper, config.tick_spacing);

        let mut position = MockPosition {
            owner: params.recipient.clone(),
            tick_lower: params.tick_lower,
            tick_upper: params.tick_upper,
            liquidity: 0,
            reserve0: 0,
            reserve1: 0,
            tokens_owed_0: 0,
            tokens_owed_1: 0,
        };

        let (liquidity, amount0, amount1) = deposit(
            &env,
            &config,
            &mut position,
            params.amount0_desired,
            params.amount1_desired,
        );

        if amount0 < params.amount0_min || amount1 < params.amount1_min {
            panic!("Slippage check failed");
        }

        let position_id = next_position_id(&env);
        set_position(&env, position_id, &position);

        env.events().publish(
            (Symbol::new(&env, "position_minted"),),
            (position_id, params.recipient, liquidity),
        );

        (position_id, liquidity, amount0, amount1)
    }

    /// Returns: (liquidity, amount0, amount1)
    pub fn increase_liquidity(env: Env, params: IncreaseLiquidityParams) -> (u128, i128, i128) {
        check_deadline(&env, params.deadline);

        let config = get_config(&env);
        let mut position = get_position(&env, params.position_id);
        position.owner.require_auth();

        let (liquidity, amount0, amount1) = deposit(
            &env,
            &config,
            &mut position,
            params.amount0_desired,
            params.amount1_desired,
        );

        if amount0 < params.amount0_min || amount1 < params.amount1_min {
            panic!("Slippage check failed");
        }

        set_position(&env, params.position_id, &position);
        (liquidity, amount0, amount1)
    }

    /// Moves the liquidity's share of reserves into tokens owed
    pub fn decrease_liquidity(env: Env, params: DecreaseLiquidityParams) -> (i128, i128) {
        check_deadline(&env, params.deadline);

        let mut position = get_position(&env, params.position_id);
        position.owner.require_auth();

        if params.liquidity > position.liquidity {
            panic!("Insufficient liquidity");
        }
        if params.liquidity == 0 {
            return (0, 0);
        }

        let amount0 = position.reserve0 * params.liquidity / position.liquidity;
        let amount1 = position.reserve1 * params.liquidity / position.liquidity;

        if (amount0 as i128) < params.amount0_min || (amount1 as i128) < params.amount1_min {
            panic!("Slippage check failed");
        }

        position.liquidity -= params.liquidity;
        position.reserve0 -= amount0;
        position.reserve1 -= amount1;
        position.tokens_owed_0 += amount0;
        position.tokens_owed_1 += amount1;
        set_position(&env, params.position_id, &position);

        (amount0 as i128, amount1 as i128)
    }

    pub fn collect(env: Env, params: CollectParams) -> (u128, u128) {
        let config = get_config(&env);
        let mut position = get_position(&env, params.position_id);
        position.owner.require_auth();

        let amount0 = params.amount0_max.min(position.tokens_owed_0);
        let amount1 = params.amount1_max.min(position.tokens_owed_1);

        position.tokens_owed_0 -= amount0;
        position.tokens_owed_1 -= amount1;
        set_position(&env, params.position_id, &position);

        let this = env.current_contract_address();
        if amount0 > 0 {
            token::Client::new(&env, &config.token0).transfer(&this, &params.recipient, &(amount0 as i128));
        }
        if amount1 > 0 {
            token::Client::new(&env, &config.token1).transfer(&this, &params.recipient, &(amount1 as i128));
        }

        (amount0, amount1)
    }

    /// Burn an emptied position
    pub fn burn(env: Env, position_id: u32) {
        let position = get_position(&env, position_id);
        position.owner.require_auth();

        if position.liquidity != 0 {
            panic!("Position has liquidity");
        }
        if position.tokens_owed_0 != 0 || position.tokens_owed_1 != 0 {
            panic!("Position has uncollected tokens");
        }

        env.storage()
            .persistent()
            .remove(&DataKey::Position(position_id));

        env.events().publish(
            (Symbol::new(&env, "position_burned"),),
            (position_id,),
        );
    }

    // === Test controls ===

    pub fn get_position(env: Env, position_id: u32) -> Option<MockPosition> {
        env.storage()
            .persistent()
            .get(&DataKey::Position(position_id))
    }

    /// Convert reserves as if price swept through the range
    ///
    /// The caller is expected to have minted `amount_added` of the bought
    /// token to this contract.
    pub fn swap_through(
        env: Env,
        position_id: u32,
        token0_to_token1: bool,
        amount_removed: u128,
        amount_added: u128,
    ) {
        let mut position = get_position(&env, position_id);
        if token0_to_token1 {
            position.reserve0 -= amount_removed;
            position.reserve1 += amount_added;
        } else {
            position.reserve1 -= amount_removed;
            position.reserve0 += amount_added;
        }
        set_position(&env, position_id, &position);
    }

    /// Credit trading fees to a position; tokens must already be held here
    pub fn accrue_fees(env: Env, position_id: u32, fee0: u128, fee1: u128) {
        let mut position = get_position(&env, position_id);
        position.tokens_owed_0 += fee0;
        position.tokens_owed_1 += fee1;
        set_position(&env, position_id, &position);
    }
}

// === Helper Functions ===

fn get_config(env: &Env) -> MockConfig {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .expect("Not initialized")
}

fn get_tick(env: &Env) -> i32 {
    env.storage()
        .instance()
        .get(&DataKey::Tick)
        .expect("Not initialized")
}

fn get_position(env: &Env, position_id: u32) -> MockPosition {
    env.storage()
        .persistent()
        .get(&DataKey::Position(position_id))
        .expect("Position not found")
}

fn set_position(env: &Env, position_id: u32, position: &MockPosition) {
    env.storage()
        .persistent()
        .set(&DataKey::Position(position_id), position);
}

fn next_position_id(env: &Env) -> u32 {
    let id: u32 = env
        .storage()
        .instance()
        .get(&DataKey::NextPositionId)
        .unwrap_or(1);
    env.storage()
        .instance()
        .set(&DataKey::NextPositionId, &(id + 1));
    id
}

fn check_deadline(env: &Env, deadline: u64) {
    if env.ledger().timestamp() > deadline {
        panic!("Transaction expired");
    }
}

fn validate_ticks(tick_lower: i32, tick_upper: i32, tick_spacing: i32) {
    if tick_lower >= tick_upper {
        panic!("Invalid tick range");
    }
    if tick_lower % tick_spacing != 0 || tick_upper % tick_spacing != 0 {
        panic!("Tick not aligned to spacing");
    }
}

/// Pull the side of the deposit the range can hold and add its liquidity
///
/// Returns: (liquidity, amount0, amount1)
fn deposit(
    env: &Env,
    config: &MockConfig,
    position: &mut MockPosition,
    amount0_desired: i128,
    amount1_desired: i128,
) -> (u128, i128, i128) {
    let tick = get_tick(env);
    let holds_token0 = if tick < position.tick_lower {
        true
    } else if tick >= position.tick_upper {
        false
    } else {
        panic!("Range contains the current tick");
    };

    let desired = if holds_token0 {
        amount0_desired
    } else {
        amount1_desired
    };
    if desired <= 0 {
        panic!("Amount must be non-zero");
    }

    let liquidity = desired as u128 * config.liquidity_numerator / config.liquidity_denominator;
    if liquidity == 0 {
        panic!("Amount must be non-zero");
    }
    // Round the amount owed for that liquidity up, like a real pool does
    let used = (liquidity * config.liquidity_denominator).div_ceil(config.liquidity_numerator);

    let (pulled_token, amount0, amount1) = if holds_token0 {
        (&config.token0, used as i128, 0)
    } else {
        (&config.token1, 0, used as i128)
    };

    let this = env.current_contract_address();
    token::Client::new(env, pulled_token).transfer_from(
        &this,
        &position.owner,
        &this,
        &(used as i128),
    );

    position.liquidity += liquidity;
    if holds_token0 {
        position.reserve0 += used;
    } else {
        position.reserve1 += used;
    }

    (liquidity, amount0, amount1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;
    use soroban_sdk::{token, Address, Env};

    fn setup(env: &Env, numerator: u128, denominator: u128) -> (MockAmmClient<'_>, Address, Address) {
        let admin = Address::generate(env);
        let a = env.register_stellar_asset_contract_v2(admin.clone()).address();
        let b = env.register_stellar_asset_contract_v2(admin).address();
        let (token0, token1) = if a < b { (a, b) } else { (b, a) };

        let contract_id = env.register(MockAmm, ());
        let client = MockAmmClient::new(env, &contract_id);
        client.initialize(&token0, &token1, &3000u32, &60i32, &80000i32, &numerator, &denominator);
        (client, token0, token1)
    }

    fn mint_params(env: &Env, token0: &Address, token1: &Address, owner: &Address, amount0: i128, amount1: i128, tick_lower: i32) -> MintParams {
        MintParams {
            token0: token0.clone(),
            token1: token1.clone(),
            fee: 3000,
            tick_lower,
            tick_upper: tick_lower + 60,
            amount0_desired: amount0,
            amount1_desired: amount1,
            amount0_min: 0,
            amount1_min: 0,
            recipient: owner.clone(),
            deadline: env.ledger().timestamp(),
        }
    }

    #[test]
    fn test_factory_lookup() {
        let env = Env::default();
        let (client, token0, token1) = setup(&env, 1, 1);

        assert_eq!(client.get_pool(&token1, &token0, &3000u32), Some(client.address.clone()));
        assert_eq!(client.get_pool(&token0, &token1, &500u32), None);
        assert_eq!(client.get_fee_tick_spacing(&3000u32), 60);
        assert_eq!(client.get_fee_tick_spacing(&500u32), 0);
    }

    #[test]
    fn test_mint_above_price_takes_token0() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, token0, token1) = setup(&env, 2, 3);

        let owner = Address::generate(&env);
        token::StellarAssetClient::new(&env, &token0).mint(&owner, &1000);
        token::Client::new(&env, &token0).approve(&owner, &client.address, &1000, &1000);

        let (id, liquidity, amount0, amount1) =
            client.mint(&mint_params(&env, &token0, &token1, &owner, 1000, 0, 80040));
        assert_eq!(id, 1);
        assert_eq!(liquidity, 666);
        assert_eq!(amount0, 999);
        assert_eq!(amount1, 0);
        assert_eq!(token::Client::new(&env, &token0).balance(&owner), 1);
    }

    #[test]
    fn test_decrease_collect_burn() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, token0, token1) = setup(&env, 1, 1);

        let owner = Address::generate(&env);
        token::StellarAssetClient::new(&env, &token1).mint(&owner, &500);
        token::Client::new(&env, &token1).approve(&owner, &client.address, &500, &1000);

        let (id, liquidity, _, amount1) =
            client.mint(&mint_params(&env, &token0, &token1, &owner, 0, 500, 79920));
        assert_eq!((liquidity, amount1), (500, 500));

        let (out0, out1) = client.decrease_liquidity(&DecreaseLiquidityParams {
            position_id: id,
            liquidity: 200,
            amount0_min: 0,
            amount1_min: 0,
            deadline: 0,
        });
        assert_eq!((out0, out1), (0, 200));

        client.collect(&CollectParams {
            position_id: id,
            recipient: owner.clone(),
            amount0_max: u128::MAX,
            amount1_max: u128::MAX,
        });
        assert_eq!(token::Client::new(&env, &token1).balance(&owner), 200);

        client.decrease_liquidity(&DecreaseLiquidityParams {
            position_id: id,
            liquidity: 300,
            amount0_min: 0,
            amount1_min: 0,
            deadline: 0,
        });
        client.collect(&CollectParams {
            position_id: id,
            recipient: owner.clone(),
            amount0_max: u128::MAX,
            amount1_max: u128::MAX,
        });
        client.burn(&id);
        assert_eq!(client.get_position(&id), None);
    }

    #[test]
    #[should_panic]
    fn test_burn_with_owed_tokens_panics() {
        let env = Env::default();
        env.mock_all_auths();
        let (client, token0, token1) = setup(&env, 1, 1);

        let owner = Address::generate(&env);
        token::StellarAssetClient::new(&env, &token0).mint(&owner, &100);
        token::Client::new(&env, &token0).approve(&owner, &client.address, &100, &1000);

        let (id, _, _, _) = client.mint(&mint_params(&env, &token0, &token1, &owner, 100, 0, 80040));
        client.decrease_liquidity(&DecreaseLiquidityParams {
            position_id: id,
            liquidity: 100,
            amount0_min: 0,
            amount1_min: 0,
            deadline: 0,
        });
        client.burn(&id);
    }
}
