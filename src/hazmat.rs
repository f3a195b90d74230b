//! ⚠️ Low-level "hazmat" RSA functions.
//!
//! # ☢️️ WARNING: HAZARDOUS API ☢️
//!
//! This module holds RSA's core encryption, decryption, signing and
//! verification primitives applied to raw integers, with no padding and no
//! hashing. Textbook RSA is deterministic and malleable, so it must not be
//! used to protect real data. It is intended for teaching and for
//! implementing well-reviewed higher-level constructions.
//!
//! Inputs must be below the key's modulus; larger values are silently
//! reduced modulo `n`.

pub use crate::algorithms::rsa::{decrypt, encrypt, sign, verify};
