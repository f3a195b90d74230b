//! Generate the components of an RSA keypair

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand_core::CryptoRngCore;
use zeroize::Zeroize;

use crate::{
    errors::{Error, Result},
    math::mod_inverse,
    prime_rand::generate_prime,
};

/// Smallest modulus size accepted by the keypair builder. Below this there
/// are too few primes of `bits / 2` bits to draw two distinct ones.
pub const MIN_KEY_BITS: usize = 8;

pub(crate) struct RsaPrivateKeyComponents {
    pub n: BigUint,
    pub e: BigUint,
    pub d: BigUint,
    pub primes: [BigUint; 2],
}

impl Drop for RsaPrivateKeyComponents {
    fn drop(&mut self) {
        self.d.zeroize();
        self.primes.zeroize();
    }
}

/// Generates a two-prime RSA keypair of the given bit size, preferring
/// `exp` as the public exponent.
///
/// Both primes have `bit_size / 2` bits. The second prime is redrawn until
/// it differs from the first, so the modulus is never a perfect square. If
/// `exp` shares a factor with the totient, a random odd exponent coprime to
/// it is drawn instead.
pub(crate) fn generate_keypair_components<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
    exp: &BigUint,
) -> Result<RsaPrivateKeyComponents> {
    if bit_size < MIN_KEY_BITS {
        return Err(Error::InvalidKeySize {
            bits: bit_size,
            min: MIN_KEY_BITS,
        });
    }

    let prime_bits = bit_size / 2;
    let p = generate_prime(rng, prime_bits)?;
    let mut q = generate_prime(rng, prime_bits)?;
    while q == p {
        q = generate_prime(rng, prime_bits)?;
    }

    let n = &p * &q;
    let mut totient = (&p - BigUint::one()) * (&q - BigUint::one());

    let e = select_public_exponent(rng, &totient, exp)?;
    let d = mod_inverse(&e, &totient);
    totient.zeroize();

    Ok(RsaPrivateKeyComponents {
        n,
        e,
        d: d?,
        primes: [p, q],
    })
}

/// Returns `preferred` if it is coprime to `totient`, otherwise draws odd
/// integers from `[3, totient)` until one is.
pub(crate) fn select_public_exponent<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    totient: &BigUint,
    preferred: &BigUint,
) -> Result<BigUint> {
    if preferred.gcd(totient).is_one() {
        return Ok(preferred.clone());
    }

    let two = BigUint::from(2u32);
    let three = BigUint::from(3u32);
    if totient <= &three {
        return Err(Error::NotCoprime);
    }

    // number of odd values in [3, totient)
    let odd_count = (totient - &two) >> 1;

    loop {
        let candidate = (rng.gen_biguint_below(&odd_count) << 1) + &three;
        if candidate.gcd(totient).is_one() {
            return Ok(candidate);
        }
    }
}
