// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the range order accounting core. Every rule is gated behind the
// `certora` feature; the plain unit tests next to them run with cargo test.
//
// - share_specs.rs   : Share allocation and pro-rata payout bounds
// - auction_specs.rs : Resolver reward curve
// - range_specs.rs   : Placement and fill rules
//
// USAGE:
// - Unit tests: cargo test -p range-order-manager
// - Certora build: cargo build --features certora -p range-order-manager
// - Verification: certoraSorobanProver range_order_manager.conf
//
// ============================================================================

pub mod auction_specs;
pub mod range_specs;
pub mod share_specs;
