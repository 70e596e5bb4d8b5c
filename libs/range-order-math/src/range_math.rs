// ============================================================================
// RANGE RULES
// ============================================================================
//
// A range order only behaves as a one-directional limit order if it starts
// entirely on the side of price that the input token pushes price away from:
//
//   token0 input:  current tick < tick_lower   (position holds only token0)
//   token1 input:  current tick >= tick_upper  (position holds only token1)
//
// It is filled once price has moved through to the opposite side.
//
// ============================================================================

use crate::tick_math::{floor_tick, is_usable_tick, next_usable_tick};
use range_order_types::RangeOrderError;

/// Width rule: the range is exactly one tick spacing wide and both bounds
/// are usable ticks
pub fn check_range_width(
    tick_lower: i32,
    tick_upper: i32,
    tick_spacing: i32,
) -> Result<(), RangeOrderError> {
    if tick_spacing <= 0 {
        return Err(RangeOrderError::FeeNotEnabled);
    }
    if !is_usable_tick(tick_lower, tick_spacing) || !is_usable_tick(tick_upper, tick_spacing) {
        return Err(RangeOrderError::BadRangeSize);
    }
    if tick_upper.checked_sub(tick_lower) != Some(tick_spacing) {
        return Err(RangeOrderError::BadRangeSize);
    }
    Ok(())
}

/// Placement rule, checked when orders are created
pub fn check_range_placement(
    input_is_token0: bool,
    tick_lower: i32,
    tick_upper: i32,
    current_tick: i32,
    tick_spacing: i32,
) -> Result<(), RangeOrderError> {
    if input_is_token0 {
        if tick_lower < next_usable_tick(current_tick, tick_spacing) {
            return Err(RangeOrderError::RangeTooLow);
        }
    } else if tick_upper > floor_tick(current_tick, tick_spacing) {
        return Err(RangeOrderError::RangeTooHigh);
    }
    Ok(())
}

/// True once price has crossed the whole range in the settling direction
pub fn is_range_filled(
    input_is_token0: bool,
    tick_lower: i32,
    tick_upper: i32,
    current_tick: i32,
) -> bool {
    if input_is_token0 {
        current_tick >= tick_upper
    } else {
        current_tick < tick_lower
    }
}

/// Fill rule, checked before a resolution or fill stamp
///
/// An unfilled token0 order still sits too high relative to price, an
/// unfilled token1 order too low.
pub fn check_range_filled(
    input_is_token0: bool,
    tick_lower: i32,
    tick_upper: i32,
    current_tick: i32,
) -> Result<(), RangeOrderError> {
    if is_range_filled(input_is_token0, tick_lower, tick_upper, current_tick) {
        Ok(())
    } else if input_is_token0 {
        Err(RangeOrderError::RangeTooHigh)
    } else {
        Err(RangeOrderError::RangeTooLow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPACING: i32 = 60;
    // Usable ticks around it: 79980 below, 80040 above
    const TICK: i32 = 80000;

    #[test]
    fn test_width_one_spacing() {
        assert_eq!(check_range_width(80040, 80100, SPACING), Ok(()));
    }

    #[test]
    fn test_width_two_spacings_rejected() {
        assert_eq!(
            check_range_width(80100, 80220, SPACING),
            Err(RangeOrderError::BadRangeSize)
        );
    }

    #[test]
    fn test_width_misaligned_rejected() {
        assert_eq!(
            check_range_width(80010, 80070, SPACING),
            Err(RangeOrderError::BadRangeSize)
        );
    }

    #[test]
    fn test_width_inverted_rejected() {
        assert_eq!(
            check_range_width(80100, 80040, SPACING),
            Err(RangeOrderError::BadRangeSize)
        );
    }

    #[test]
    fn test_width_disabled_fee() {
        assert_eq!(
            check_range_width(80040, 80100, 0),
            Err(RangeOrderError::FeeNotEnabled)
        );
    }

    #[test]
    fn test_token0_placement() {
        assert_eq!(check_range_placement(true, 80040, 80100, TICK, SPACING), Ok(()));
        assert_eq!(check_range_placement(true, 80100, 80160, TICK, SPACING), Ok(()));
        // Range containing the current tick
        assert_eq!(
            check_range_placement(true, 79980, 80040, TICK, SPACING),
            Err(RangeOrderError::RangeTooLow)
        );
        // Range below price
        assert_eq!(
            check_range_placement(true, 79920, 79980, TICK, SPACING),
            Err(RangeOrderError::RangeTooLow)
        );
    }

    #[test]
    fn test_token1_placement() {
        assert_eq!(check_range_placement(false, 79920, 79980, TICK, SPACING), Ok(()));
        assert_eq!(check_range_placement(false, 79860, 79920, TICK, SPACING), Ok(()));
        assert_eq!(
            check_range_placement(false, 79980, 80040, TICK, SPACING),
            Err(RangeOrderError::RangeTooHigh)
        );
        assert_eq!(
            check_range_placement(false, 80040, 80100, TICK, SPACING),
            Err(RangeOrderError::RangeTooHigh)
        );
    }

    #[test]
    fn test_placement_on_usable_boundary() {
        // Price exactly on a usable tick: [79980, 80040) would straddle it
        assert_eq!(
            check_range_placement(true, 79980, 80040, 79980, SPACING),
            Err(RangeOrderError::RangeTooLow)
        );
        // but a range ending there holds only token1
        assert_eq!(check_range_placement(false, 79920, 79980, 79980, SPACING), Ok(()));
    }

    #[test]
    fn test_fill_token0() {
        assert!(!is_range_filled(true, 80040, 80100, TICK));
        assert!(!is_range_filled(true, 80040, 80100, 80070));
        assert!(is_range_filled(true, 80040, 80100, 80100));
        assert_eq!(
            check_range_filled(true, 80040, 80100, 80070),
            Err(RangeOrderError::RangeTooHigh)
        );
        assert_eq!(check_range_filled(true, 80040, 80100, 80500), Ok(()));
    }

    #[test]
    fn test_fill_token1() {
        assert!(!is_range_filled(false, 79920, 79980, TICK));
        assert!(!is_range_filled(false, 79920, 79980, 79920));
        assert!(is_range_filled(false, 79920, 79980, 79919));
        assert_eq!(
            check_range_filled(false, 79920, 79980, 79950),
            Err(RangeOrderError::RangeTooLow)
        );
        assert_eq!(check_range_filled(false, 79920, 79980, 79000), Ok(()));
    }

    #[test]
    fn test_placement_and_fill_exclusive() {
        for tick in [79000, 79919, 79920, 79950, 79980, 80000, 80040, 80070, 80100, 81000] {
            let placed = check_range_placement(true, 80040, 80100, tick, SPACING).is_ok();
            let filled = is_range_filled(true, 80040, 80100, tick);
            assert!(!(placed && filled));

            let placed = check_range_placement(false, 79920, 79980, tick, SPACING).is_ok();
            let filled = is_range_filled(false, 79920, 79980, tick);
            assert!(!(placed && filled));
        }
    }
}
