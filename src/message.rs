//! Conversion between byte strings and the integers RSA operates on.
//!
//! Textbook RSA encodes a message directly as a big-endian integer. The
//! caller must keep that integer below the modulus: larger values wrap
//! modulo `n` and cannot be recovered.

use alloc::vec::Vec;
use num_bigint::BigUint;
use num_traits::Zero;

/// Interprets `bytes` as a big-endian unsigned integer.
pub fn int_from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Big-endian bytes of `x` with no leading zeros. Zero yields no bytes.
pub fn int_to_bytes(x: &BigUint) -> Vec<u8> {
    if x.is_zero() {
        return Vec::new();
    }
    x.to_bytes_be()
}
