//! Generation of random primes.

use alloc::vec;
use num_bigint::BigUint;
use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::errors::{Error, Result};
use crate::prime::{is_prime, DEFAULT_ROUNDS};

/// A generic trait for generating random primes.
///
/// *Warning*: This is highly dependent on the provided random number generator,
/// to provide actually random primes.
///
/// # Example
/// ```
/// use textbook_rsa::RandPrime;
///
/// let mut rng = rand::thread_rng(); // rand@0.8
/// let p = rng.gen_prime(256).unwrap();
/// assert_eq!(p.bits(), 256);
/// ```
pub trait RandPrime {
    /// Generate a random prime number with exactly `bit_size` bits.
    fn gen_prime(&mut self, bit_size: usize) -> Result<BigUint>;
}

impl<R: CryptoRngCore + ?Sized> RandPrime for R {
    fn gen_prime(&mut self, bit_size: usize) -> Result<BigUint> {
        generate_prime(self, bit_size)
    }
}

/// Draws random odd `bit_size`-bit integers until one passes [`is_prime`]
/// with [`DEFAULT_ROUNDS`].
///
/// The top bit of every candidate is set, so the result has exactly
/// `bit_size` bits. There is no retry cap; the expected number of draws
/// grows linearly with `bit_size`.
pub fn generate_prime<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
) -> Result<BigUint> {
    if bit_size < 2 {
        return Err(Error::InvalidPrimeSize { bits: bit_size });
    }

    let mut b = bit_size % 8;
    if b == 0 {
        b = 8;
    }

    let bytes_len = (bit_size + 7) / 8;
    let mut bytes = Zeroizing::new(vec![0u8; bytes_len]);

    loop {
        rng.fill_bytes(bytes.as_mut_slice());
        // Clear bits in the first byte to make sure the candidate has a size <= bits.
        bytes[0] &= ((1u32 << b) - 1) as u8;
        bytes[0] |= 1u8 << (b - 1);
        bytes[bytes_len - 1] |= 1;

        let candidate = BigUint::from_bytes_be(&bytes);
        if is_prime(rng, &candidate, DEFAULT_ROUNDS) {
            return Ok(candidate);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::prime::probably_prime;
    use num_integer::Integer;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    #[test]
    fn test_prime_small() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        for n in 2..10 {
            let p = rng.gen_prime(n).unwrap();

            assert_eq!(p.bits(), n);
            assert!(p.is_odd());
            assert!(probably_prime(&p, 32));
        }
    }

    #[test]
    fn test_two_bit_prime_is_three() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        assert_eq!(generate_prime(&mut rng, 2).unwrap(), BigUint::from(3u32));
    }

    #[test]
    fn test_gen_prime_sizes() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        for bits in [17, 64, 127, 256, 512] {
            let p = generate_prime(&mut rng, bits).unwrap();
            assert_eq!(p.bits(), bits);
            assert!(p.is_odd());
            assert!(probably_prime(&p, 20), "{} is not prime", p);
        }
    }

    #[test]
    fn test_gen_prime_1024() {
        let mut rng = ChaCha8Rng::from_seed([0u8; 32]);
        let p = rng.gen_prime(1024).unwrap();
        assert_eq!(p.bits(), 1024);
    }

    #[test]
    fn test_gen_prime_too_small() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        assert_eq!(
            generate_prime(&mut rng, 1),
            Err(Error::InvalidPrimeSize { bits: 1 })
        );
        assert_eq!(
            generate_prime(&mut rng, 0),
            Err(Error::InvalidPrimeSize { bits: 0 })
        );
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let p1 = generate_prime(&mut ChaCha8Rng::from_seed([9; 32]), 128).unwrap();
        let p2 = generate_prime(&mut ChaCha8Rng::from_seed([9; 32]), 128).unwrap();
        assert_eq!(p1, p2);
    }
}
