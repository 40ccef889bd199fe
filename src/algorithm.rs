//! Registry of supported hash functions.
//!
//! Every algorithm is known under two names: the identifier used by the native
//! crypto libraries (e.g. `sha256`) and the canonical multihash name (e.g.
//! `sha2-256`). All public operations accept either; resolution checks the
//! native table first, then the canonical table. Adding an algorithm means
//! adding one variant here and one row to each metadata table.

use crate::Error;
use std::{fmt, str::FromStr};

/// A hash function registered in the multihash table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Sha1,
    Sha2_256,
    Sha2_512,
    Sha3_512,
    Sha3_384,
    Sha3_256,
    Sha3_224,
    Shake128,
    Shake256,
    Blake2b,
    Blake2s,
}

impl Algorithm {
    /// Every registered algorithm, in multihash code order.
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Sha1,
        Algorithm::Sha2_256,
        Algorithm::Sha2_512,
        Algorithm::Sha3_512,
        Algorithm::Sha3_384,
        Algorithm::Sha3_256,
        Algorithm::Sha3_224,
        Algorithm::Shake128,
        Algorithm::Shake256,
        Algorithm::Blake2b,
        Algorithm::Blake2s,
    ];

    /// Numeric multihash code.
    pub const fn code(&self) -> u8 {
        match self {
            Algorithm::Sha1 => 0x11,
            Algorithm::Sha2_256 => 0x12,
            Algorithm::Sha2_512 => 0x13,
            Algorithm::Sha3_512 => 0x14,
            Algorithm::Sha3_384 => 0x15,
            Algorithm::Sha3_256 => 0x16,
            Algorithm::Sha3_224 => 0x17,
            Algorithm::Shake128 => 0x18,
            Algorithm::Shake256 => 0x19,
            Algorithm::Blake2b => 0x40,
            Algorithm::Blake2s => 0x41,
        }
    }

    /// Length of the untruncated digest, in bytes.
    pub const fn digest_len(&self) -> usize {
        match self {
            Algorithm::Sha1 => 20,
            Algorithm::Sha2_256 => 32,
            Algorithm::Sha2_512 => 64,
            Algorithm::Sha3_512 => 64,
            Algorithm::Sha3_384 => 48,
            Algorithm::Sha3_256 => 32,
            Algorithm::Sha3_224 => 28,
            Algorithm::Shake128 => 16,
            Algorithm::Shake256 => 32,
            Algorithm::Blake2b => 64,
            Algorithm::Blake2s => 32,
        }
    }

    /// Canonical multihash name.
    pub const fn name(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha2_256 => "sha2-256",
            Algorithm::Sha2_512 => "sha2-512",
            Algorithm::Sha3_512 => "sha3-512",
            Algorithm::Sha3_384 => "sha3-384",
            Algorithm::Sha3_256 => "sha3-256",
            Algorithm::Sha3_224 => "sha3-224",
            Algorithm::Shake128 => "shake-128",
            Algorithm::Shake256 => "shake-256",
            Algorithm::Blake2b => "blake2b",
            Algorithm::Blake2s => "blake2s",
        }
    }

    /// Identifier used by the native crypto libraries.
    pub const fn native(&self) -> &'static str {
        match self {
            Algorithm::Sha1 => "sha",
            Algorithm::Sha2_256 => "sha256",
            Algorithm::Sha2_512 => "sha512",
            Algorithm::Sha3_512 => "sha3_512",
            Algorithm::Sha3_384 => "sha3_384",
            Algorithm::Sha3_256 => "sha3_256",
            Algorithm::Sha3_224 => "sha3_224",
            Algorithm::Shake128 => "shake128",
            Algorithm::Shake256 => "shake256",
            Algorithm::Blake2b => "blake2b",
            Algorithm::Blake2s => "blake2s",
        }
    }

    /// Whether a digest backend is wired for this algorithm.
    ///
    /// The SHAKE entries are registered in the table but produce
    /// extendable-length output, so no fixed-length backend exists for them.
    pub const fn implemented(&self) -> bool {
        !matches!(self, Algorithm::Shake128 | Algorithm::Shake256)
    }

    /// Look up an algorithm by its numeric multihash code.
    pub fn from_code(code: u8) -> Option<Algorithm> {
        Self::ALL.iter().copied().find(|algorithm| algorithm.code() == code)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(identifier: &str) -> Result<Self, Self::Err> {
        // Native names take precedence over canonical names. For entries where
        // the two coincide (blake2b, blake2s) both tables point at the same
        // algorithm, so precedence is unobservable.
        if let Some(algorithm) = Self::ALL.iter().find(|a| a.native() == identifier) {
            return Ok(*algorithm);
        }
        if let Some(algorithm) = Self::ALL.iter().find(|a| a.name() == identifier) {
            return Ok(*algorithm);
        }
        Err(Error::InvalidHashFunction(identifier.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
