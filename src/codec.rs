//! Multihash wire codec.
//!
//! The wire layout is a two-byte header followed by the digest payload:
//!
//! ```text
//! byte 0      : algorithm numeric code
//! byte 1      : digest length N (0-255)
//! bytes 2..2+N: digest payload, exactly N bytes
//! ```
//!
//! Every code and digest length in the registry fits in a single byte, so the
//! header uses fixed one-byte fields. Decoding is strict: the code must be
//! registered and the payload must hold exactly the declared number of bytes,
//! with no trailing data tolerated.

use crate::{Algorithm, Error};
use bytes::{Buf, BufMut};
use std::str::FromStr;

/// A decoded multihash record.
///
/// Only [encode] and [decode] construct values, so the algorithm is always a
/// registered one and the declared length always equals the payload size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Multihash {
    algorithm: Algorithm,
    digest: Vec<u8>,
}

impl Multihash {
    /// The algorithm that produced the digest.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Numeric multihash code of the algorithm.
    pub fn code(&self) -> u8 {
        self.algorithm.code()
    }

    /// Canonical multihash name of the algorithm.
    pub fn name(&self) -> &'static str {
        self.algorithm.name()
    }

    /// Length of the (possibly truncated) digest payload, in bytes.
    pub fn length(&self) -> usize {
        self.digest.len()
    }

    /// The digest payload.
    pub fn digest(&self) -> &[u8] {
        &self.digest
    }
}

/// Wrap an externally computed digest into the multihash wire format.
///
/// `identifier` may be either a native or a canonical algorithm name. With
/// `length` of `None` the digest is written untruncated; an explicit length
/// keeps only the leading `length` bytes of `digest` and may only shrink,
/// never pad.
pub fn encode(identifier: &str, digest: &[u8], length: Option<usize>) -> Result<Vec<u8>, Error> {
    let algorithm = Algorithm::from_str(identifier)?;
    encode_resolved(algorithm, digest, length)
}

/// Encode with an already-resolved algorithm.
pub(crate) fn encode_resolved(
    algorithm: Algorithm,
    digest: &[u8],
    length: Option<usize>,
) -> Result<Vec<u8>, Error> {
    let length = length.unwrap_or(digest.len());
    if length > digest.len() {
        return Err(Error::InvalidTruncationLength(length, digest.len()));
    }
    // The registry's digests are all 64 bytes or fewer, but an externally
    // supplied digest could exceed the single-byte length field.
    if length > u8::MAX as usize {
        return Err(Error::InvalidTruncationLength(length, u8::MAX as usize));
    }
    let mut out = Vec::with_capacity(2 + length);
    out.put_u8(algorithm.code());
    out.put_u8(length as u8);
    out.put_slice(&digest[..length]);
    Ok(out)
}

/// Decode and validate a multihash byte sequence.
pub fn decode(bytes: &[u8]) -> Result<Multihash, Error> {
    let mut buf = bytes;
    if !buf.has_remaining() {
        return Err(Error::InvalidSize);
    }
    // Code lookup fires before any length validation, even for input too
    // short to carry a digest.
    let code = buf.get_u8();
    let algorithm = Algorithm::from_code(code).ok_or(Error::InvalidHashCode(code))?;
    if !buf.has_remaining() {
        return Err(Error::InvalidSize);
    }
    let declared = buf.get_u8() as usize;
    let actual = buf.remaining();
    if actual < declared {
        return Err(Error::InvalidSize);
    }
    if actual > declared {
        return Err(Error::InvalidLength(actual - declared));
    }
    let mut digest = vec![0u8; declared];
    buf.copy_to_slice(&mut digest);
    Ok(Multihash { algorithm, digest })
}
