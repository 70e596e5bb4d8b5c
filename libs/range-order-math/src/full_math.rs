use range_order_types::RangeOrderError;
use soroban_sdk::{Env, U256};

/// Multiply and divide with 256-bit intermediate precision (rounds down)
/// Returns (a * b) / denominator
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, RangeOrderError> {
    if denominator == 0 {
        return Err(RangeOrderError::ArithmeticOverflow);
    }

    let product = U256::from_u128(env, a).mul(&U256::from_u128(env, b));
    let result = product.div(&U256::from_u128(env, denominator));

    result.to_u128().ok_or(RangeOrderError::ArithmeticOverflow)
}

/// Token amount (i128, as the token interface speaks) to unsigned
pub fn amount_to_u128(amount: i128) -> Result<u128, RangeOrderError> {
    u128::try_from(amount).map_err(|_| RangeOrderError::ArithmeticOverflow)
}

/// Unsigned quantity back to a token amount
pub fn u128_to_amount(value: u128) -> Result<i128, RangeOrderError> {
    i128::try_from(value).map_err(|_| RangeOrderError::ArithmeticOverflow)
}
