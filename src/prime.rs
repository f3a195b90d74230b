//! Probabilistic primality testing.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, ToPrimitive};
use rand_core::CryptoRngCore;

/// Number of Miller-Rabin rounds used when the caller has no preference.
pub const DEFAULT_ROUNDS: usize = 5;

/// Reports whether `n` passes `rounds` rounds of the Miller-Rabin test,
/// each with a witness drawn uniformly from `[2, n-2]`.
///
/// If `n` is prime, `is_prime` returns true. If `n` is composite, it returns
/// true with probability at most 4^-`rounds`. Zero rounds accepts every odd
/// `n >= 5`.
///
/// See Handbook of Applied Cryptography, p. 139, Algorithm 4.24.
pub fn is_prime<R: CryptoRngCore + ?Sized>(rng: &mut R, n: &BigUint, rounds: usize) -> bool {
    match n.to_u64() {
        Some(0) | Some(1) => return false,
        Some(2) | Some(3) => return true,
        _ => {}
    }

    if n.is_even() {
        return false;
    }

    // n - 1 = 2^r * d with d odd
    let n_minus_one = n - BigUint::one();
    let mut d = n_minus_one.clone();
    let mut r = 0usize;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }

    let two = BigUint::from(2u32);

    'witness: for _ in 0..rounds {
        // gen_biguint_range has an exclusive upper bound
        let a = rng.gen_biguint_range(&two, &n_minus_one);
        let mut x = a.modpow(&d, n);
        if x.is_one() || x == n_minus_one {
            continue;
        }

        for _ in 1..r {
            x = x.modpow(&two, n);
            if x == n_minus_one {
                continue 'witness;
            }
        }

        return false;
    }

    true
}
