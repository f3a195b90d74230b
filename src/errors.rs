//! Error types.

use core::fmt;

/// Alias for [`core::result::Result`] with the `textbook-rsa` crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;

/// Coarse classification of an [`Error`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// The caller supplied a value outside the domain of the operation:
    /// a degenerate key size, a malformed key block, or a non-coprime
    /// exponent.
    InvalidInput,

    /// A modulus that cannot be used for modular arithmetic reached an
    /// arithmetic primitive.
    ArithmeticDomain,
}

/// Error types
#[derive(Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Requested key size is too small for two distinct primes.
    InvalidKeySize {
        /// Requested modulus size in bits.
        bits: usize,
        /// Smallest supported modulus size in bits.
        min: usize,
    },

    /// Requested prime size is below 2 bits.
    InvalidPrimeSize {
        /// Requested prime size in bits.
        bits: usize,
    },

    /// The value has no inverse because it shares a factor with the modulus.
    NotCoprime,

    /// Modulus is zero or one.
    InvalidModulus,

    /// Prime factors do not match the modulus.
    InvalidPrime,

    /// Public exponent is unusable.
    InvalidExponent,

    /// Private exponent is zero (the public-key sentinel) or is not the
    /// inverse of the public exponent.
    InvalidPrivateExponent,

    /// Key block could not be decoded.
    KeyBlock(KeyBlockError),
}

impl Error {
    /// Returns the [`ErrorKind`] this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidModulus => ErrorKind::ArithmeticDomain,
            _ => ErrorKind::InvalidInput,
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Error::KeyBlock(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKeySize { bits, min } => {
                write!(f, "key size of {bits} bits is below the minimum of {min} bits")
            }
            Error::InvalidPrimeSize { bits } => {
                write!(f, "prime size must be at least 2 bits, got {bits}")
            }
            Error::NotCoprime => write!(f, "value is not coprime to the modulus"),
            Error::InvalidModulus => write!(f, "invalid modulus"),
            Error::InvalidPrime => write!(f, "invalid prime value"),
            Error::InvalidExponent => write!(f, "invalid exponent"),
            Error::InvalidPrivateExponent => write!(f, "invalid private exponent"),
            Error::KeyBlock(err) => write!(f, "key block error: {err}"),
        }
    }
}

impl From<KeyBlockError> for Error {
    fn from(err: KeyBlockError) -> Error {
        Error::KeyBlock(err)
    }
}

/// Reasons a key block failed to decode.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[non_exhaustive]
pub enum KeyBlockError {
    /// Block is not exactly header, payload and footer.
    LineCount,

    /// Header or footer is not a recognised `-----BEGIN/END <KIND>-----` line.
    Label,

    /// Header and footer name different kinds.
    LabelMismatch,

    /// Block holds a different kind of key than the one requested.
    UnexpectedKind,

    /// Payload is not valid Base64.
    Base64,

    /// Decoded payload is not UTF-8.
    Utf8,

    /// Payload does not hold exactly three comma-separated fields.
    FieldCount,

    /// A field is not a non-negative decimal integer.
    Integer,

    /// A public key block carries a non-zero private exponent.
    PublicKeyWithExponent,
}

impl core::error::Error for KeyBlockError {}

impl fmt::Display for KeyBlockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            KeyBlockError::LineCount => "expected header, payload and footer lines",
            KeyBlockError::Label => "unrecognised header or footer",
            KeyBlockError::LabelMismatch => "header and footer labels differ",
            KeyBlockError::UnexpectedKind => "unexpected key kind",
            KeyBlockError::Base64 => "payload is not valid Base64",
            KeyBlockError::Utf8 => "payload is not UTF-8",
            KeyBlockError::FieldCount => "payload must hold exactly three fields",
            KeyBlockError::Integer => "field is not a decimal integer",
            KeyBlockError::PublicKeyWithExponent => "public key carries a private exponent",
        })
    }
}
