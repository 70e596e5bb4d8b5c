use crate::full_math::{amount_to_u128, mul_div, u128_to_amount};
use range_order_types::RangeOrderError;
use soroban_sdk::{Env, Vec};

/// Sum a batch of owner input amounts
///
/// Every amount must be positive; an empty batch or an overflowing sum is a
/// malformed input.
pub fn sum_input_amounts(amounts: &Vec<i128>) -> Result<i128, RangeOrderError> {
    if amounts.is_empty() {
        return Err(RangeOrderError::BadInputAmount);
    }

    let mut total: i128 = 0;
    for amount in amounts.iter() {
        if amount <= 0 {
            return Err(RangeOrderError::BadInputAmount);
        }
        total = total
            .checked_add(amount)
            .ok_or(RangeOrderError::BadInputAmount)?;
    }
    Ok(total)
}

/// Liquidity credited to one owner of a deposit batch
///
/// floor(liquidity_minted * input_amount / total_input_amount). Summed over a
/// batch of n owners the result falls short of `liquidity_minted` by less
/// than n units.
pub fn allocate_share(
    env: &Env,
    liquidity_minted: u128,
    input_amount: i128,
    total_input_amount: i128,
) -> Result<u128, RangeOrderError> {
    if input_amount <= 0 || total_input_amount <= 0 || input_amount > total_input_amount {
        return Err(RangeOrderError::BadInputAmount);
    }

    mul_div(
        env,
        liquidity_minted,
        amount_to_u128(input_amount)?,
        amount_to_u128(total_input_amount)?,
    )
}

/// Owner's floor slice of `amount`, weighted by `share / total_shares`
pub fn pro_rata(
    env: &Env,
    amount: i128,
    share: u128,
    total_shares: u128,
) -> Result<i128, RangeOrderError> {
    if share > total_shares {
        return Err(RangeOrderError::LedgerInvariant);
    }
    if amount == 0 || share == 0 {
        return Ok(0);
    }

    u128_to_amount(mul_div(env, amount_to_u128(amount)?, share, total_shares)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{vec, Env};

    #[test]
    fn test_sum_input_amounts() {
        let env = Env::default();
        assert_eq!(sum_input_amounts(&vec![&env, 1i128, 2i128]), Ok(3));
    }

    #[test]
    fn test_sum_rejects_malformed_batches() {
        let env = Env::default();
        assert_eq!(
            sum_input_amounts(&Vec::new(&env)),
            Err(RangeOrderError::BadInputAmount)
        );
        assert_eq!(
            sum_input_amounts(&vec![&env, 1i128, 0i128]),
            Err(RangeOrderError::BadInputAmount)
        );
        assert_eq!(
            sum_input_amounts(&vec![&env, 5i128, -1i128]),
            Err(RangeOrderError::BadInputAmount)
        );
        assert_eq!(
            sum_input_amounts(&vec![&env, i128::MAX, 1i128]),
            Err(RangeOrderError::BadInputAmount)
        );
    }

    #[test]
    fn test_allocate_exact_split() {
        let env = Env::default();
        let one = 1_000_000_000_000_000_000i128;
        assert_eq!(allocate_share(&env, 3 * one as u128, one, 3 * one), Ok(one as u128));
        assert_eq!(allocate_share(&env, 3 * one as u128, 2 * one, 3 * one), Ok(2 * one as u128));
    }

    #[test]
    fn test_allocate_rounds_down() {
        let env = Env::default();
        assert_eq!(allocate_share(&env, 2000, 1000, 3001), Ok(666));
        assert_eq!(allocate_share(&env, 2000, 1001, 3001), Ok(667));
    }

    #[test]
    fn test_allocate_rejects_bad_amounts() {
        let env = Env::default();
        assert_eq!(allocate_share(&env, 10, 0, 10), Err(RangeOrderError::BadInputAmount));
        assert_eq!(allocate_share(&env, 10, 11, 10), Err(RangeOrderError::BadInputAmount));
        assert_eq!(allocate_share(&env, 10, 1, 0), Err(RangeOrderError::BadInputAmount));
    }

    #[test]
    fn test_batch_remainder_below_owner_count() {
        let env = Env::default();
        let batches: [&[i128]; 5] = [
            &[1, 2],
            &[1000, 1000, 1001],
            &[7, 7, 7, 7, 7, 7, 7],
            &[1, 999_999_999_999, 3],
            &[13, 17, 19, 23],
        ];
        let minted_values = [1u128, 2000, 4_999, 123_456_789_012_345_678, 97];

        for batch in batches.iter() {
            let total: i128 = batch.iter().sum();
            for minted in minted_values.iter() {
                let mut allocated = 0u128;
                for amount in batch.iter() {
                    allocated += allocate_share(&env, *minted, *amount, total).unwrap();
                }
                assert!(allocated <= *minted);
                assert!(*minted - allocated < batch.len() as u128);
            }
        }
    }

    #[test]
    fn test_pro_rata() {
        let env = Env::default();
        assert_eq!(pro_rata(&env, 900, 1, 3), Ok(300));
        assert_eq!(pro_rata(&env, 900, 2, 3), Ok(600));
        assert_eq!(pro_rata(&env, 10, 1, 3), Ok(3));
        assert_eq!(pro_rata(&env, 0, 1, 3), Ok(0));
        assert_eq!(pro_rata(&env, 10, 0, 3), Ok(0));
    }

    #[test]
    fn test_pro_rata_share_above_total() {
        let env = Env::default();
        assert_eq!(pro_rata(&env, 10, 4, 3), Err(RangeOrderError::LedgerInvariant));
    }
}
