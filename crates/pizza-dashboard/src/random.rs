//! Uniform draws for order numbers and the sales walk.

use uuid::Uuid;

/// A value in `0..bound`.
///
/// A v4 UUID carries 122 random bits, so reducing it modulo a small bound
/// gives a uniform draw for practical purposes.
pub(crate) fn below(bound: u128) -> u128 {
    Uuid::new_v4().as_u128() % bound
}
