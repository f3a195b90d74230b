//! Text key block encoding.
//!
//! A key block is three lines: a `-----BEGIN <LABEL>-----` header, one line
//! of Base64 holding the ASCII string `"<n>,<e>,<d>"` in decimal, and a
//! matching `-----END <LABEL>-----` footer. `<LABEL>` is `RSA PUBLIC KEY` or
//! `RSA PRIVATE KEY`, and public keys always carry `d = 0`.
//!
//! The block is a transport encoding only: the private exponent is stored
//! in the clear with no integrity protection.

use alloc::string::String;
use alloc::vec::Vec;
use base64ct::{Base64, Encoding};
use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroizing;

use crate::errors::{KeyBlockError, Result};
use crate::key::{RsaKey, RsaPrivateKey, RsaPublicKey};
use crate::traits::{PrivateKeyParts, PublicKeyParts};

const PRE_ENCAPSULATION_BOUNDARY: &str = "-----BEGIN ";
const POST_ENCAPSULATION_BOUNDARY: &str = "-----END ";
const ENCAPSULATION_BOUNDARY_DELIMITER: &str = "-----";

/// The kind of key held by a key block.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyKind {
    /// `RSA PUBLIC KEY`
    Public,
    /// `RSA PRIVATE KEY`
    Private,
}

impl KeyKind {
    /// Type label used in the header and footer lines.
    pub fn label(self) -> &'static str {
        match self {
            KeyKind::Public => "RSA PUBLIC KEY",
            KeyKind::Private => "RSA PRIVATE KEY",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        [KeyKind::Public, KeyKind::Private]
            .into_iter()
            .find(|kind| kind.label() == label)
    }
}

impl RsaPublicKey {
    /// Serialize this public key as a key block.
    pub fn to_key_block(&self) -> String {
        encode_block(KeyKind::Public, self.n(), self.e(), &BigUint::zero())
    }

    /// Parse an `RSA PUBLIC KEY` block.
    pub fn from_key_block(s: &str) -> Result<Self> {
        match RsaKey::from_key_block(s)? {
            RsaKey::Public(key) => Ok(key),
            RsaKey::Private(_) => Err(KeyBlockError::UnexpectedKind.into()),
        }
    }
}

impl RsaPrivateKey {
    /// Serialize this private key as a key block.
    pub fn to_key_block(&self) -> Zeroizing<String> {
        Zeroizing::new(encode_block(KeyKind::Private, self.n(), self.e(), self.d()))
    }

    /// Parse an `RSA PRIVATE KEY` block.
    pub fn from_key_block(s: &str) -> Result<Self> {
        match RsaKey::from_key_block(s)? {
            RsaKey::Private(key) => Ok(key),
            RsaKey::Public(_) => Err(KeyBlockError::UnexpectedKind.into()),
        }
    }
}

impl RsaKey {
    /// Kind of key held.
    pub fn kind(&self) -> KeyKind {
        match self {
            RsaKey::Public(_) => KeyKind::Public,
            RsaKey::Private(_) => KeyKind::Private,
        }
    }

    /// Serialize this key as a key block of the matching kind.
    pub fn to_key_block(&self) -> Zeroizing<String> {
        match self {
            RsaKey::Public(key) => Zeroizing::new(key.to_key_block()),
            RsaKey::Private(key) => key.to_key_block(),
        }
    }

    /// Parse a key block of either kind.
    ///
    /// Fails if the block is malformed, if a public block carries a
    /// non-zero private exponent, or if the integers do not form a valid
    /// key (see [`RsaPublicKey::new`] and [`RsaPrivateKey::from_components`]).
    pub fn from_key_block(s: &str) -> Result<Self> {
        let (kind, [n, e, d]) = decode_block(s)?;

        match kind {
            KeyKind::Public => {
                if !d.is_zero() {
                    return Err(KeyBlockError::PublicKeyWithExponent.into());
                }
                Ok(RsaKey::Public(RsaPublicKey::new(n, e)?))
            }
            KeyKind::Private => Ok(RsaKey::Private(RsaPrivateKey::from_components(n, e, d)?)),
        }
    }
}

fn encode_block(kind: KeyKind, n: &BigUint, e: &BigUint, d: &BigUint) -> String {
    let payload = Zeroizing::new(format!("{},{},{}", n, e, d));
    let encoded = Zeroizing::new(Base64::encode_string(payload.as_bytes()));
    let label = kind.label();

    format!(
        "{PRE_ENCAPSULATION_BOUNDARY}{label}{ENCAPSULATION_BOUNDARY_DELIMITER}\n\
         {}\n\
         {POST_ENCAPSULATION_BOUNDARY}{label}{ENCAPSULATION_BOUNDARY_DELIMITER}",
        encoded.as_str()
    )
}

fn decode_block(s: &str) -> core::result::Result<(KeyKind, [BigUint; 3]), KeyBlockError> {
    let lines: Vec<&str> = s.trim().lines().map(str::trim).collect();
    let [header, payload, footer] = lines.as_slice() else {
        return Err(KeyBlockError::LineCount);
    };

    let header = boundary_label(header, PRE_ENCAPSULATION_BOUNDARY)?;
    let footer = boundary_label(footer, POST_ENCAPSULATION_BOUNDARY)?;
    if header != footer {
        return Err(KeyBlockError::LabelMismatch);
    }
    let kind = KeyKind::from_label(header).ok_or(KeyBlockError::Label)?;

    let bytes = Zeroizing::new(Base64::decode_vec(payload).map_err(|_| KeyBlockError::Base64)?);
    let text = core::str::from_utf8(&bytes).map_err(|_| KeyBlockError::Utf8)?;

    let mut fields = text.split(',');
    let (Some(n), Some(e), Some(d), None) = (fields.next(), fields.next(), fields.next(), fields.next())
    else {
        return Err(KeyBlockError::FieldCount);
    };

    Ok((kind, [parse_field(n)?, parse_field(e)?, parse_field(d)?]))
}

fn boundary_label<'a>(line: &'a str, boundary: &str) -> core::result::Result<&'a str, KeyBlockError> {
    line.strip_prefix(boundary)
        .and_then(|rest| rest.strip_suffix(ENCAPSULATION_BOUNDARY_DELIMITER))
        .ok_or(KeyBlockError::Label)
}

fn parse_field(field: &str) -> core::result::Result<BigUint, KeyBlockError> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(KeyBlockError::Integer);
    }
    BigUint::parse_bytes(field.as_bytes(), 10).ok_or(KeyBlockError::Integer)
}
