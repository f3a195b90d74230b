use core::fmt;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{One, Zero};
use rand_core::CryptoRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::algorithms::generate::generate_keypair_components;
use crate::algorithms::rsa::{decrypt, encrypt, sign, verify};
use crate::errors::{Error, Result};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

/// Modulus size used when the caller has no preference.
pub const DEFAULT_KEY_BITS: usize = 1024;

/// Public exponent tried first by the keypair builder.
pub const DEFAULT_EXPONENT: u64 = 65537;

/// Represents the public part of an RSA key.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub struct RsaPublicKey {
    /// Modulus: product of prime numbers `p` and `q`
    n: BigUint,
    /// Public exponent: coprime to the totient of `n`
    e: BigUint,
}

/// Represents a whole RSA key, public and private parts.
#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    /// Public components of the private key.
    pubkey_components: RsaPublicKey,
    /// Private exponent
    pub(crate) d: BigUint,
}

impl PublicKeyParts for RsaPublicKey {
    fn n(&self) -> &BigUint {
        &self.n
    }

    fn e(&self) -> &BigUint {
        &self.e
    }
}

impl RsaPublicKey {
    /// Create a new public key from its components.
    ///
    /// Rejects a modulus below 2 and a public exponent below 2.
    pub fn new(n: BigUint, e: BigUint) -> Result<Self> {
        let k = Self { n, e };
        check_public(&k)?;
        Ok(k)
    }

    /// ⚠️ Encrypt the integer `m` with no padding: `m^e mod n`.
    ///
    /// `m` must be below `n`; larger values are silently reduced modulo `n`.
    pub fn encrypt(&self, m: &BigUint) -> Result<BigUint> {
        encrypt(self, m)
    }

    /// ⚠️ Verify the raw signature `s` over the integer `m`.
    pub fn verify(&self, m: &BigUint, s: &BigUint) -> Result<bool> {
        verify(self, m, s)
    }
}

impl From<RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: RsaPrivateKey) -> Self {
        (&private_key).into()
    }
}

impl From<&RsaPrivateKey> for RsaPublicKey {
    fn from(private_key: &RsaPrivateKey) -> Self {
        private_key.to_public_key()
    }
}

impl PublicKeyParts for RsaPrivateKey {
    fn n(&self) -> &BigUint {
        &self.pubkey_components.n
    }

    fn e(&self) -> &BigUint {
        &self.pubkey_components.e
    }
}

impl PrivateKeyParts for RsaPrivateKey {
    fn d(&self) -> &BigUint {
        &self.d
    }
}

impl RsaPrivateKey {
    /// Generate a new RSA key pair of the given bit size using the passed in `rng`.
    ///
    /// The public exponent is [`DEFAULT_EXPONENT`] unless it shares a factor
    /// with the totient.
    pub fn new<R: CryptoRngCore + ?Sized>(rng: &mut R, bit_size: usize) -> Result<RsaPrivateKey> {
        Self::new_with_exp(rng, bit_size, &BigUint::from(DEFAULT_EXPONENT))
    }

    /// Generate a new RSA key pair of the given bit size, trying `exp` as
    /// the public exponent first.
    ///
    /// `exp` must be odd and at least 3. If it shares a factor with the
    /// totient of the generated modulus, a random odd exponent coprime to
    /// the totient is used instead.
    pub fn new_with_exp<R: CryptoRngCore + ?Sized>(
        rng: &mut R,
        bit_size: usize,
        exp: &BigUint,
    ) -> Result<RsaPrivateKey> {
        if exp < &BigUint::from(3u32) || exp.is_even() {
            return Err(Error::InvalidExponent);
        }

        let mut components = generate_keypair_components(rng, bit_size, exp)?;
        Ok(RsaPrivateKey {
            pubkey_components: RsaPublicKey {
                n: core::mem::take(&mut components.n),
                e: core::mem::take(&mut components.e),
            },
            d: core::mem::take(&mut components.d),
        })
    }

    /// Constructs an RSA key pair from individual components.
    ///
    /// A zero private exponent is the public-key sentinel and is rejected.
    pub fn from_components(n: BigUint, e: BigUint, d: BigUint) -> Result<RsaPrivateKey> {
        let k = RsaPrivateKey {
            pubkey_components: RsaPublicKey::new(n, e)?,
            d,
        };

        if k.d.is_zero() {
            return Err(Error::InvalidPrivateExponent);
        }

        Ok(k)
    }

    /// Get the public key from the private key, cloning `n` and `e`.
    pub fn to_public_key(&self) -> RsaPublicKey {
        self.pubkey_components.clone()
    }

    /// Checks the key against the prime factors it was built from:
    /// `n == p * q` and `e * d == 1 mod (p-1)(q-1)`.
    pub fn validate_with_primes(&self, p: &BigUint, q: &BigUint) -> Result<()> {
        if p.is_zero() || q.is_zero() || p == q || &(p * q) != self.n() {
            return Err(Error::InvalidPrime);
        }

        let mut totient = (p - BigUint::one()) * (q - BigUint::one());
        let ok = (self.e() * self.d() % &totient).is_one();
        totient.zeroize();

        if !ok {
            return Err(Error::InvalidPrivateExponent);
        }
        Ok(())
    }

    /// ⚠️ Decrypt the integer `c` with no padding: `c^d mod n`.
    pub fn decrypt(&self, c: &BigUint) -> Result<BigUint> {
        decrypt(self, c)
    }

    /// ⚠️ Sign the integer `m` with no hashing or padding: `m^d mod n`.
    pub fn sign(&self, m: &BigUint) -> Result<BigUint> {
        sign(self, m)
    }
}

impl fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("n", self.n())
            .field("e", self.e())
            .finish_non_exhaustive()
    }
}

impl Zeroize for RsaPrivateKey {
    fn zeroize(&mut self) {
        self.d.zeroize();
    }
}

impl Drop for RsaPrivateKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for RsaPrivateKey {}

/// Either half of a keypair: the `(n, e, d)` triple where `d` is absent
/// for public keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsaKey {
    /// Public key.
    Public(RsaPublicKey),
    /// Private key.
    Private(RsaPrivateKey),
}

impl RsaKey {
    /// Returns the private exponent, or `None` for a public key.
    pub fn d(&self) -> Option<&BigUint> {
        match self {
            RsaKey::Public(_) => None,
            RsaKey::Private(k) => Some(k.d()),
        }
    }

    /// Returns the public half of the key.
    pub fn to_public_key(&self) -> RsaPublicKey {
        match self {
            RsaKey::Public(k) => k.clone(),
            RsaKey::Private(k) => k.to_public_key(),
        }
    }
}

impl PublicKeyParts for RsaKey {
    fn n(&self) -> &BigUint {
        match self {
            RsaKey::Public(k) => k.n(),
            RsaKey::Private(k) => k.n(),
        }
    }

    fn e(&self) -> &BigUint {
        match self {
            RsaKey::Public(k) => k.e(),
            RsaKey::Private(k) => k.e(),
        }
    }
}

impl From<RsaPublicKey> for RsaKey {
    fn from(key: RsaPublicKey) -> Self {
        RsaKey::Public(key)
    }
}

impl From<RsaPrivateKey> for RsaKey {
    fn from(key: RsaPrivateKey) -> Self {
        RsaKey::Private(key)
    }
}

/// Generates a keypair of `bit_size` bits and returns both halves.
///
/// This is [`RsaPrivateKey::new`] followed by [`RsaPrivateKey::to_public_key`].
pub fn generate_keypair<R: CryptoRngCore + ?Sized>(
    rng: &mut R,
    bit_size: usize,
) -> Result<(RsaPublicKey, RsaPrivateKey)> {
    let private_key = RsaPrivateKey::new(rng, bit_size)?;
    Ok((private_key.to_public_key(), private_key))
}

/// Check that the public key is well formed.
#[inline]
fn check_public(public_key: &impl PublicKeyParts) -> Result<()> {
    if public_key.n() < &BigUint::from(2u32) {
        return Err(Error::InvalidModulus);
    }

    if public_key.e() < &BigUint::from(2u32) {
        return Err(Error::InvalidExponent);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use crate::MIN_KEY_BITS;
    use rand_chacha::{rand_core::SeedableRng, ChaCha8Rng};

    fn textbook_key() -> RsaPrivateKey {
        RsaPrivateKey::from_components(
            BigUint::from(3233u32),
            BigUint::from(17u32),
            BigUint::from(2753u32),
        )
        .unwrap()
    }

    #[test]
    fn test_from_into() {
        let private_key = textbook_key();
        let public_key: RsaPublicKey = private_key.into();

        assert_eq!(public_key.n(), &BigUint::from(3233u32));
        assert_eq!(public_key.e(), &BigUint::from(17u32));
        assert_eq!(public_key.size(), 2);
    }

    #[test]
    fn test_generate_keypair_512() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let (public_key, private_key) = generate_keypair(&mut rng, 512).unwrap();

        assert_eq!(public_key, private_key.to_public_key());
        assert_eq!(public_key.e(), &BigUint::from(DEFAULT_EXPONENT));

        let c = public_key.encrypt(&BigUint::from(42u32)).unwrap();
        assert_eq!(private_key.decrypt(&c).unwrap(), BigUint::from(42u32));

        let s = private_key.sign(&BigUint::from(1000u32)).unwrap();
        assert!(public_key.verify(&BigUint::from(1000u32), &s).unwrap());
        assert!(!public_key.verify(&BigUint::from(1001u32), &s).unwrap());
    }

    #[test]
    fn test_generate_keypair_min_size() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let err = generate_keypair(&mut rng, MIN_KEY_BITS - 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);

        let (public_key, private_key) = generate_keypair(&mut rng, MIN_KEY_BITS).unwrap();
        for m in 0u32..16 {
            let m = BigUint::from(m) % public_key.n();
            let c = public_key.encrypt(&m).unwrap();
            assert_eq!(private_key.decrypt(&c).unwrap(), m);
        }
    }

    #[test]
    fn test_new_with_exp() {
        let mut rng = ChaCha8Rng::from_seed([42; 32]);
        let key = RsaPrivateKey::new_with_exp(&mut rng, 256, &BigUint::from(17u32)).unwrap();
        let m = BigUint::from(123_456u32);
        assert_eq!(key.decrypt(&key.to_public_key().encrypt(&m).unwrap()).unwrap(), m);

        for bad in [0u32, 1, 2, 4, 65536] {
            assert_eq!(
                RsaPrivateKey::new_with_exp(&mut rng, 256, &BigUint::from(bad)),
                Err(Error::InvalidExponent)
            );
        }
    }

    #[test]
    fn test_sentinel_is_not_a_private_key() {
        let err = RsaPrivateKey::from_components(
            BigUint::from(3233u32),
            BigUint::from(17u32),
            BigUint::zero(),
        )
        .unwrap_err();
        assert_eq!(err, Error::InvalidPrivateExponent);
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_invalid_public_components() {
        assert_eq!(
            RsaPublicKey::new(BigUint::zero(), BigUint::from(17u32)),
            Err(Error::InvalidModulus)
        );
        assert_eq!(
            RsaPublicKey::new(BigUint::one(), BigUint::from(17u32)),
            Err(Error::InvalidModulus)
        );
        assert_eq!(
            RsaPublicKey::new(BigUint::from(3233u32), BigUint::one()),
            Err(Error::InvalidExponent)
        );
    }

    #[test]
    fn test_validate_with_primes() {
        let key = textbook_key();
        let p = BigUint::from(61u32);
        let q = BigUint::from(53u32);

        assert_eq!(key.validate_with_primes(&p, &q), Ok(()));
        assert_eq!(
            key.validate_with_primes(&p, &BigUint::from(59u32)),
            Err(Error::InvalidPrime)
        );

        let wrong_d = RsaPrivateKey::from_components(
            BigUint::from(3233u32),
            BigUint::from(17u32),
            BigUint::from(2754u32),
        )
        .unwrap();
        assert_eq!(
            wrong_d.validate_with_primes(&p, &q),
            Err(Error::InvalidPrivateExponent)
        );
    }

    #[test]
    fn test_debug_hides_private_exponent() {
        let debug = format!("{:?}", textbook_key());
        assert!(debug.contains("3233"));
        assert!(!debug.contains("2753"));
    }

    #[test]
    fn test_rsa_key_parts() {
        let private_key = textbook_key();
        let public_key = private_key.to_public_key();

        let key = RsaKey::from(public_key.clone());
        assert_eq!(key.d(), None);
        assert_eq!(key.n(), public_key.n());
        assert_eq!(key.to_public_key(), public_key);

        let key = RsaKey::from(private_key);
        assert_eq!(key.d(), Some(&BigUint::from(2753u32)));
        assert_eq!(key.e(), &BigUint::from(17u32));
        assert_eq!(key.to_public_key(), public_key);
    }
}
