use soroban_sdk::{contracttype, Address, Vec};

/// Contract configuration, written once by `initialize`
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RangeOrderConfig {
    /// External position manager holding the pooled positions
    pub position_manager: Address,
    /// External factory used for pool lookup and fee tick spacing
    pub factory: Address,
    /// Native asset contract; deposits of it are transferred in directly
    pub native_token: Address,
    /// Seconds after the first observed fill until the resolver earns 100%
    pub auction_timespan: u64,
}

/// The five components a position key is derived from
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderParams {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl OrderParams {
    /// True when the deposited token is the pool's lower (token0) address
    pub fn input_is_token0(&self) -> bool {
        self.token_in < self.token_out
    }

    pub fn token0(&self) -> &Address {
        if self.input_is_token0() {
            &self.token_in
        } else {
            &self.token_out
        }
    }

    pub fn token1(&self) -> &Address {
        if self.input_is_token0() {
            &self.token_out
        } else {
            &self.token_in
        }
    }
}

/// Pooled position shared by every owner of a key
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderPosition {
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Handle of the position inside the external position manager
    pub position_id: u32,
    /// Liquidity currently backing the key
    pub liquidity: u128,
    /// Sum of every owner share; never above `liquidity`
    pub owner_liquidity: u128,
    /// Owners with a non-zero share
    pub owner_count: u32,
    pub created_at: u64,
    /// First time a crossing was observed; set once
    pub filled_at: Option<u64>,
    /// Token0 fees per unit of owner share since the position opened,
    /// scaled by 1e18
    pub fee_growth0: u128,
    /// Token1 counterpart of `fee_growth0`
    pub fee_growth1: u128,
    /// Token0 fees collected from the external position and not yet paid
    pub fees_held0: u128,
    pub fees_held1: u128,
}

impl OrderPosition {
    /// Rounding remainder retained by the position rather than any owner
    pub fn remainder(&self) -> u128 {
        self.liquidity.saturating_sub(self.owner_liquidity)
    }

    pub fn is_live(&self) -> bool {
        self.liquidity > 0
    }
}

/// Fee checkpoint of one owner of a key
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerFees {
    /// Position fee growth when the owner's share last changed
    pub growth0: u128,
    pub growth1: u128,
    /// Fees earned before that point and not yet paid
    pub owed0: u128,
    pub owed1: u128,
}

/// Observable lifecycle of a key
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OrderState {
    /// Price has not crossed the range in the settling direction
    Open,
    /// Price has crossed; any resolver may settle
    Fillable,
    /// No live liquidity behind the key (settled, withdrawn, or never opened)
    Resolved,
}

/// Create parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct CreateOrdersParams {
    /// Account the total input is pulled from
    pub payer: Address,
    pub owners: Vec<Address>,
    pub input_amounts: Vec<i128>,
    pub total_input_amount: i128,
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
}

impl CreateOrdersParams {
    pub fn order(&self) -> OrderParams {
        OrderParams {
            token_in: self.token_in.clone(),
            token_out: self.token_out.clone(),
            fee: self.fee,
            tick_lower: self.tick_lower,
            tick_upper: self.tick_upper,
        }
    }
}

/// Withdraw parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct WithdrawOrderParams {
    pub owner: Address,
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Liquidity to remove; zero withdraws the whole share
    pub liquidity: u128,
    /// Payout address; defaults to the owner
    pub recipient: Option<Address>,
}

impl WithdrawOrderParams {
    pub fn order(&self) -> OrderParams {
        OrderParams {
            token_in: self.token_in.clone(),
            token_out: self.token_out.clone(),
            fee: self.fee,
            tick_lower: self.tick_lower,
            tick_upper: self.tick_upper,
        }
    }
}

/// Resolve parameters
#[contracttype]
#[derive(Clone, Debug)]
pub struct ResolveOrdersParams {
    /// Every owner recorded for the key, each exactly once
    pub owners: Vec<Address>,
    pub token_in: Address,
    pub token_out: Address,
    pub fee: u32,
    pub tick_lower: i32,
    pub tick_upper: i32,
    /// Sum of the listed owners' shares
    pub total_liquidity: u128,
    /// Receives the auction reward
    pub resolver: Address,
}

impl ResolveOrdersParams {
    pub fn order(&self) -> OrderParams {
        OrderParams {
            token_in: self.token_in.clone(),
            token_out: self.token_out.clone(),
            fee: self.fee,
            tick_lower: self.tick_lower,
            tick_upper: self.tick_upper,
        }
    }
}

/// Amounts moved by a resolution
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ResolveOutcome {
    /// Token0 collected from the external position
    pub collected0: i128,
    /// Token1 collected from the external position
    pub collected1: i128,
    /// Token0 trading fees paid to owners, outside the auction split
    pub fees0: i128,
    pub fees1: i128,
    /// Token0 paid to the resolver (reward plus rounding dust)
    pub resolver0: i128,
    /// Token1 paid to the resolver (reward plus rounding dust)
    pub resolver1: i128,
    /// Seconds between the first observed fill and settlement
    pub elapsed: u64,
}
