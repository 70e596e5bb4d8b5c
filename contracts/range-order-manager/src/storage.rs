use range_order_types::{OrderPosition, OwnerFees, RangeOrderConfig, RangeOrderError};
use soroban_sdk::{contracttype, Address, BytesN, Env};

// ============================================================================
// SOROBAN RESOURCE LIMITS
// ============================================================================
// - Ledger entry size: 128 KiB max per entry
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design considerations:
// - One position record per key, one balance entry per (key, owner)
// - Owners of a key live in an indexed registry (OwnerAt + OwnerIndex)
//   instead of a Vec, with swap-and-pop removal
// - Empty entries are removed rather than stored as zero
// - Resolving walks every owner of a key, so a key's owner count is bounded
//   in practice by the write limit (four entries per owner)
// ============================================================================

/// Storage keys for the range order contract
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract configuration (Instance storage)
    Config,
    /// Pooled position: key -> OrderPosition (Persistent storage)
    Position(BytesN<32>),
    /// Owner share: (key, owner) -> u128 liquidity (Persistent storage)
    LiquidityBalance(BytesN<32>, Address),
    /// Owner registry slot: (key, index) -> owner (Persistent storage)
    OwnerAt(BytesN<32>, u32),
    /// Registry slot of an owner: (key, owner) -> index (Persistent storage)
    OwnerIndex(BytesN<32>, Address),
    /// Fee checkpoint: (key, owner) -> OwnerFees (Persistent storage)
    OwnerFees(BytesN<32>, Address),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Config ===

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<RangeOrderConfig, RangeOrderError> {
    let config = env
        .storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(RangeOrderError::NotInitialized)?;
    extend_instance_ttl(env);
    Ok(config)
}

pub fn set_config(env: &Env, config: &RangeOrderConfig) {
    env.storage().instance().set(&DataKey::Config, config);
    extend_instance_ttl(env);
}

// === Position ===

pub fn get_position(env: &Env, key: &BytesN<32>) -> Option<OrderPosition> {
    let data_key = DataKey::Position(key.clone());
    env.storage().persistent().get(&data_key)
}

pub fn set_position(env: &Env, key: &BytesN<32>, position: &OrderPosition) {
    let data_key = DataKey::Position(key.clone());
    if !position.is_live() {
        // Emptied positions free the key for reuse
        env.storage().persistent().remove(&data_key);
    } else {
        env.storage().persistent().set(&data_key, position);
        extend_persistent_ttl(env, &data_key);
    }
}

pub fn remove_position(env: &Env, key: &BytesN<32>) {
    env.storage()
        .persistent()
        .remove(&DataKey::Position(key.clone()));
}

// === Liquidity balance ===

pub fn get_balance(env: &Env, key: &BytesN<32>, owner: &Address) -> u128 {
    let data_key = DataKey::LiquidityBalance(key.clone(), owner.clone());
    env.storage().persistent().get(&data_key).unwrap_or(0)
}

pub fn set_balance(env: &Env, key: &BytesN<32>, owner: &Address, balance: u128) {
    let data_key = DataKey::LiquidityBalance(key.clone(), owner.clone());
    if balance == 0 {
        env.storage().persistent().remove(&data_key);
    } else {
        env.storage().persistent().set(&data_key, &balance);
        extend_persistent_ttl(env, &data_key);
    }
}

// === Owner registry ===

pub fn get_owner_at(env: &Env, key: &BytesN<32>, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerAt(key.clone(), index))
}

pub fn set_owner_at(env: &Env, key: &BytesN<32>, index: u32, owner: &Address) {
    let data_key = DataKey::OwnerAt(key.clone(), index);
    env.storage().persistent().set(&data_key, owner);
    extend_persistent_ttl(env, &data_key);
}

pub fn remove_owner_at(env: &Env, key: &BytesN<32>, index: u32) {
    env.storage()
        .persistent()
        .remove(&DataKey::OwnerAt(key.clone(), index));
}

pub fn get_owner_index(env: &Env, key: &BytesN<32>, owner: &Address) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerIndex(key.clone(), owner.clone()))
}

pub fn set_owner_index(env: &Env, key: &BytesN<32>, owner: &Address, index: u32) {
    let data_key = DataKey::OwnerIndex(key.clone(), owner.clone());
    env.storage().persistent().set(&data_key, &index);
    extend_persistent_ttl(env, &data_key);
}

pub fn remove_owner_index(env: &Env, key: &BytesN<32>, owner: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::OwnerIndex(key.clone(), owner.clone()));
}

// === Owner fees ===

pub fn get_owner_fees(env: &Env, key: &BytesN<32>, owner: &Address) -> Option<OwnerFees> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerFees(key.clone(), owner.clone()))
}

pub fn set_owner_fees(env: &Env, key: &BytesN<32>, owner: &Address, fees: &OwnerFees) {
    let data_key = DataKey::OwnerFees(key.clone(), owner.clone());
    env.storage().persistent().set(&data_key, fees);
    extend_persistent_ttl(env, &data_key);
}

pub fn remove_owner_fees(env: &Env, key: &BytesN<32>, owner: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::OwnerFees(key.clone(), owner.clone()));
}
