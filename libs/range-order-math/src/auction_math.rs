use range_order_types::RangeOrderError;
use soroban_fixed_point_math::FixedPoint;

/// Seconds elapsed since an order was first observed filled
///
/// Orders never stamped with a fill time, or a clock that reads earlier than
/// the stamp, count as zero elapsed.
pub fn elapsed_since(filled_at: Option<u64>, now: u64) -> u64 {
    match filled_at {
        Some(filled_at) => now.saturating_sub(filled_at),
        None => 0,
    }
}

/// Resolver's Dutch-auction cut of `owed`
///
/// Grows linearly from zero at the fill time to the full amount once
/// `timespan` seconds have elapsed, rounding down.
pub fn resolver_reward(owed: i128, elapsed: u64, timespan: u64) -> Result<i128, RangeOrderError> {
    if timespan == 0 {
        return Err(RangeOrderError::InvalidTimespan);
    }
    if owed < 0 {
        return Err(RangeOrderError::ArithmeticOverflow);
    }
    if owed == 0 || elapsed == 0 {
        return Ok(0);
    }
    if elapsed >= timespan {
        return Ok(owed);
    }

    owed.fixed_mul_floor(elapsed as i128, timespan as i128)
        .ok_or(RangeOrderError::ArithmeticOverflow)
}
