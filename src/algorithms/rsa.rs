//! Generic RSA implementation

use num_bigint::BigUint;
use num_traits::Zero;

use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// ⚠️ Raw RSA encryption of m with the public key. No padding is performed.
///
/// Computes `m^e mod n`. Messages `>= n` are reduced modulo `n` and do not
/// survive decryption.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn encrypt<K: PublicKeyParts + ?Sized>(key: &K, m: &BigUint) -> Result<BigUint> {
    check_modulus(key.n())?;
    Ok(m.modpow(key.e(), key.n()))
}

/// ⚠️ Performs raw RSA decryption with no padding or error checking.
///
/// Computes `c^d mod n`.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn decrypt<K: PrivateKeyParts + ?Sized>(key: &K, c: &BigUint) -> Result<BigUint> {
    private_op(key, c)
}

/// ⚠️ Raw RSA signature of m with the private key. No hashing or padding is performed.
///
/// Computes `m^d mod n`.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn sign<K: PrivateKeyParts + ?Sized>(key: &K, m: &BigUint) -> Result<BigUint> {
    private_op(key, m)
}

/// ⚠️ Checks a raw RSA signature: `s^e mod n == m`.
///
/// A message `>= n` never verifies, since `s^e mod n` is always below `n`.
///
/// # ☢️️ WARNING: HAZARDOUS API ☢️
///
/// Use this function with great care! Raw RSA should never be used without an appropriate padding
/// or signature scheme. See the [module-level documentation][crate::hazmat] for more information.
#[inline]
pub fn verify<K: PublicKeyParts + ?Sized>(key: &K, m: &BigUint, s: &BigUint) -> Result<bool> {
    Ok(&encrypt(key, s)? == m)
}

fn private_op<K: PrivateKeyParts + ?Sized>(key: &K, x: &BigUint) -> Result<BigUint> {
    check_modulus(key.n())?;

    // zero is the public-key sentinel, never a usable private exponent
    if key.d().is_zero() {
        return Err(Error::InvalidPrivateExponent);
    }

    Ok(x.modpow(key.d(), key.n()))
}

fn check_modulus(n: &BigUint) -> Result<()> {
    if n.is_zero() {
        return Err(Error::InvalidModulus);
    }
    Ok(())
}
