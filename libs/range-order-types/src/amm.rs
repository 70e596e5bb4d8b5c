use soroban_sdk::{contracttype, Address};

// ============================================================================
// EXTERNAL POSITION MANAGER WIRE TYPES
// ============================================================================
// Argument structs of the concentrated-liquidity position manager the range
// order contract drives. The manager mints one NFT-like position per range
// and reports liquidity and token amounts back to the caller.
// ============================================================================

/// Mint parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct MintParams {
    pub token0: Address,
    pub token1: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    pub amount0_desired: i128,
    pub amount1_desired: i128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    /// Position owner; also the account the desired amounts are pulled from
    pub recipient: Address,
    pub deadline: u64,
}

/// Increase liquidity parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct IncreaseLiquidityParams {
    pub position_id: u32,
    pub amount0_desired: i128,
    pub amount1_desired: i128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub deadline: u64,
}

/// Decrease liquidity parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct DecreaseLiquidityParams {
    pub position_id: u32,
    pub liquidity: u128,
    pub amount0_min: i128,
    pub amount1_min: i128,
    pub deadline: u64,
}

/// Collect parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct CollectParams {
    pub position_id: u32,
    pub recipient: Address,
    pub amount0_max: u128,
    pub amount1_max: u128,
}
