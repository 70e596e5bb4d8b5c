use soroban_sdk::contracterror;

/// Failure codes shared by the range order contract and its math library.
///
/// Codes are part of the contract ABI and must never be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RangeOrderError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    /// Range width is not exactly one tick spacing, or a bound is misaligned
    /// or outside the tick domain
    BadRangeSize = 3,
    /// Range sits too low for the input token, or (upper-token input) price
    /// has not yet fallen through it
    RangeTooLow = 4,
    /// Range sits too high for the input token, or (lower-token input) price
    /// has not yet risen through it
    RangeTooHigh = 5,
    /// Owner amounts do not sum to the declared total, or the batch is malformed
    BadInputAmount = 6,
    /// Withdrawal above the owner's recorded share
    InsufficientLiquidity = 7,
    /// Caller holds no share of the position
    NotOwner = 8,
    /// No live position behind the key
    PositionNotFound = 9,
    /// Resolver's owner list does not match the ledger
    OwnersMismatch = 10,
    /// Resolver's total liquidity does not match the ledger
    LiquidityMismatch = 11,
    FeeNotEnabled = 12,
    PoolNotFound = 13,
    IdenticalTokens = 14,
    InvalidTimespan = 15,
    /// A ledger mutation would leave a share above the position total
    LedgerInvariant = 16,
    ArithmeticOverflow = 17,
}
