use range_order_types::OrderParams;
use soroban_sdk::{xdr::ToXdr, Bytes, BytesN, Env};

/// Derive the position key of an order
///
/// keccak256 over `xdr(token_in) | xdr(token_out) | be32(fee) |
/// be32(tick_lower) | be32(tick_upper)`. Token order is kept as given, so the
/// two directions over one range are distinct keys.
pub fn derive_key(env: &Env, order: &OrderParams) -> BytesN<32> {
    let mut encoded = Bytes::new(env);
    encoded.append(&order.token_in.clone().to_xdr(env));
    encoded.append(&order.token_out.clone().to_xdr(env));
    encoded.extend_from_array(&order.fee.to_be_bytes());
    encoded.extend_from_array(&order.tick_lower.to_be_bytes());
    encoded.extend_from_array(&order.tick_upper.to_be_bytes());

    env.crypto().keccak256(&encoded).to_bytes()
}
