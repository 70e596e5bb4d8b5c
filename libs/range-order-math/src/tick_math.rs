use range_order_types::{MAX_TICK, MIN_TICK};

/// Usable tick at or below `tick` (rounds toward negative infinity)
pub fn floor_tick(tick: i32, tick_spacing: i32) -> i32 {
    tick.div_euclid(tick_spacing) * tick_spacing
}

/// First usable tick strictly above `tick`
pub fn next_usable_tick(tick: i32, tick_spacing: i32) -> i32 {
    floor_tick(tick, tick_spacing) + tick_spacing
}

/// True if `tick` is aligned to the spacing and inside the tick domain
pub fn is_usable_tick(tick: i32, tick_spacing: i32) -> bool {
    tick >= MIN_TICK && tick <= MAX_TICK && tick.rem_euclid(tick_spacing) == 0
}
