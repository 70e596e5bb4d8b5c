#![no_std]

mod amm;
mod error;
mod order;

pub use amm::*;
pub use error::*;
pub use order::*;

/// Lowest tick the AMM accepts (u128 sqrt-price domain)
pub const MIN_TICK: i32 = -443636;

/// Highest tick the AMM accepts
pub const MAX_TICK: i32 = 443636;

/// Fee amount in hundredths of a basis point (1e-6)
/// 500 = 0.05%, 3000 = 0.3%, 10000 = 1%
pub type Fee = u32;

/// Tick spacing of the fee tiers every AMM deployment enables by default.
///
/// The range order contract always asks the AMM factory for the live value;
/// this table is for callers building orders off-chain and for tests.
pub fn default_tick_spacing(fee: Fee) -> Option<i32> {
    match fee {
        500 => Some(10),    // 0.05%
        3000 => Some(60),   // 0.3%
        10000 => Some(200), // 1%
        _ => None,
    }
}

/// Upper bound on owners returned by a single paginated read
pub const MAX_PAGE_SIZE: u32 = 50;
