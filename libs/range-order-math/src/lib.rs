#![no_std]

pub mod auction_math;
pub mod fee_math;
pub mod full_math;
pub mod range_math;
pub mod share_math;
pub mod tick_math;

pub use auction_math::*;
pub use fee_math::*;
pub use full_math::*;
pub use range_math::*;
pub use share_math::*;
pub use tick_math::*;
