// ============================================================================
// RANGE RULE SPECIFICATIONS
// ============================================================================
//
// KEY INVARIANTS:
// 1. A range that passes the placement rule is not already filled
// 2. An accepted range holds only the input token at creation time
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

/// RULE: Placement and fill exclude each other at any tick
#[cfg(feature = "certora")]
#[rule]
pub fn placement_excludes_fill(input_is_token0: bool, tick_lower: i32, tick: i32, spacing: i32) {
    use range_order_types::{MAX_TICK, MIN_TICK};

    cvlr_assume!(spacing > 0 && spacing <= 16384);
    cvlr_assume!(tick_lower >= MIN_TICK && tick_lower <= MAX_TICK - spacing);
    cvlr_assume!(tick >= MIN_TICK && tick <= MAX_TICK);
    let tick_upper = tick_lower + spacing;

    let placed =
        range_order_math::check_range_placement(input_is_token0, tick_lower, tick_upper, tick, spacing)
            .is_ok();
    let filled = range_order_math::is_range_filled(input_is_token0, tick_lower, tick_upper, tick);

    cvlr_assert!(!(placed && filled));
}

/// RULE: An accepted range lies entirely on the input token's side of price
#[cfg(feature = "certora")]
#[rule]
pub fn placement_is_single_sided(input_is_token0: bool, tick_lower: i32, tick: i32, spacing: i32) {
    use range_order_types::{MAX_TICK, MIN_TICK};

    cvlr_assume!(spacing > 0 && spacing <= 16384);
    cvlr_assume!(tick_lower >= MIN_TICK && tick_lower <= MAX_TICK - spacing);
    cvlr_assume!(tick >= MIN_TICK && tick <= MAX_TICK);
    let tick_upper = tick_lower + spacing;

    let placed =
        range_order_math::check_range_placement(input_is_token0, tick_lower, tick_upper, tick, spacing)
            .is_ok();
    if placed {
        if input_is_token0 {
            cvlr_assert!(tick < tick_lower);
        } else {
            cvlr_assert!(tick >= tick_upper);
        }
    }
}

// ============================================================================
// TESTS (run with cargo test)
// ============================================================================
