#![cfg_attr(not(test), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # Components
//!
//! - [`is_prime`]: probabilistic Miller-Rabin test with caller-supplied randomness.
//! - [`generate_prime`] / [`RandPrime`]: random primes of an exact bit length.
//! - [`mod_inverse`]: modular inverse via the iterative extended Euclidean algorithm.
//! - [`RsaPrivateKey::new`] / [`generate_keypair`]: two-prime keypairs.
//! - [`hazmat`]: raw encrypt, decrypt, sign and verify.
//! - [`encoding`]: the `-----BEGIN RSA ... KEY-----` text block.
//!
//! # Usage
//!
//! ## Encryption
//! ```
//! use textbook_rsa::{generate_keypair, BigUint};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let (public_key, private_key) = generate_keypair(&mut rng, 512).expect("failed to generate a key");
//!
//! // Encrypt
//! let m = BigUint::from(42u32);
//! let c = public_key.encrypt(&m).expect("failed to encrypt");
//! assert_ne!(m, c);
//!
//! // Decrypt
//! assert_eq!(private_key.decrypt(&c).expect("failed to decrypt"), m);
//! ```
//!
//! ## Signatures
//! ```
//! use textbook_rsa::{BigUint, RsaPrivateKey};
//!
//! let mut rng = rand::thread_rng(); // rand@0.8
//!
//! let private_key = RsaPrivateKey::new(&mut rng, 512).expect("failed to generate a key");
//! let public_key = private_key.to_public_key();
//!
//! let m = BigUint::from(1000u32);
//! let s = private_key.sign(&m).expect("failed to sign");
//! assert!(public_key.verify(&m, &s).unwrap());
//! assert!(!public_key.verify(&BigUint::from(1001u32), &s).unwrap());
//! ```
//!
//! ## Key blocks
//! ```
//! use textbook_rsa::{RsaKey, RsaPublicKey};
//!
//! let block = "-----BEGIN RSA PUBLIC KEY-----
//! MzIzMywxNyww
//! -----END RSA PUBLIC KEY-----";
//!
//! let public_key = RsaPublicKey::from_key_block(block)?;
//! assert_eq!(public_key.to_key_block(), block);
//!
//! // A block of unknown kind
//! let key = RsaKey::from_key_block(block)?;
//! assert!(key.d().is_none());
//! # Ok::<(), textbook_rsa::Error>(())
//! ```

#[macro_use]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
pub mod encoding;
pub mod errors;
pub mod hazmat;
pub mod math;
pub mod message;
pub mod prime;
pub mod prime_rand;
pub mod traits;

mod key;

pub use crate::{
    algorithms::generate::MIN_KEY_BITS,
    encoding::KeyKind,
    errors::{Error, ErrorKind, KeyBlockError, Result},
    key::{generate_keypair, RsaKey, RsaPrivateKey, RsaPublicKey, DEFAULT_EXPONENT, DEFAULT_KEY_BITS},
    math::mod_inverse,
    prime::{is_prime, DEFAULT_ROUNDS},
    prime_rand::{generate_prime, RandPrime},
    traits::{PrivateKeyParts, PublicKeyParts},
};

#[cfg(feature = "getrandom")]
pub use rand_core::OsRng;
