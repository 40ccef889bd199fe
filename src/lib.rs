//! Hash, truncate, decode, and verify self-describing multihash digests.
//!
//! A multihash prefixes a digest with the numeric code of the algorithm that
//! produced it and the digest's length in bytes, so the value carries enough
//! information to be validated later without out-of-band context. This crate
//! exposes one-shot and incremental hashing over the registered algorithm
//! table, strict decoding of multihash bytes, and re-verification of a
//! multihash against fresh data.
//!
//! Algorithms are addressable under both their native crypto-library
//! identifiers (`sha256`) and their canonical multihash names (`sha2-256`).
//!
//! # Example
//! ```rust
//! use multihashing::{decode, hash, verify, Multihasher};
//!
//! // One-shot: code 0x12 (sha2-256), 32-byte digest.
//! let encoded = hash("sha2-256", b"hello world", None).unwrap();
//! assert_eq!(encoded[0], 0x12);
//! assert_eq!(encoded[1], 32);
//!
//! // Incremental hashing produces byte-identical output.
//! let mut hasher = Multihasher::new("sha256", Some(&b"hello"[..])).unwrap();
//! hasher.update(b" world");
//! assert_eq!(hasher.finalize(None).unwrap(), encoded);
//!
//! // Decode and verify.
//! let multihash = decode(&encoded).unwrap();
//! assert_eq!(multihash.name(), "sha2-256");
//! assert!(verify(&encoded, b"hello world").unwrap());
//! assert!(!verify(&encoded, b"hello mars").unwrap());
//! ```

use std::str::FromStr;

pub mod algorithm;
pub use algorithm::Algorithm;
pub mod codec;
pub use codec::{encode, Multihash};
pub mod engine;
pub mod error;
pub use error::Error;

/// Hash `data` with the algorithm named by `identifier` and wrap the digest
/// in the multihash wire format.
///
/// `identifier` may be a native or canonical name. With `length` of `None`
/// the full digest is kept; an explicit length truncates the digest to its
/// leading `length` bytes and must not exceed the natural digest length.
pub fn hash(identifier: &str, data: &[u8], length: Option<usize>) -> Result<Vec<u8>, Error> {
    let algorithm = Algorithm::from_str(identifier)?;
    hash_resolved(algorithm, data, length)
}

// Name resolution happens before digest computation, which happens before
// encoding; later stages assume the earlier validation succeeded.
fn hash_resolved(
    algorithm: Algorithm,
    data: &[u8],
    length: Option<usize>,
) -> Result<Vec<u8>, Error> {
    let digest = engine::digest(algorithm, data)?;
    codec::encode_resolved(algorithm, &digest, length)
}

/// Decode and validate a multihash byte sequence.
pub fn decode(bytes: &[u8]) -> Result<Multihash, Error> {
    codec::decode(bytes)
}

/// Check a multihash against fresh data.
///
/// Decodes `multihash`, re-hashes `data` with the decoded algorithm and the
/// decoded truncation length, and compares the result to `multihash` byte for
/// byte. A mismatch is a normal negative result (`Ok(false)`); decode errors
/// and re-hash errors (e.g. the decoded algorithm having no wired backend)
/// propagate unchanged.
pub fn verify(multihash: &[u8], data: &[u8]) -> Result<bool, Error> {
    let decoded = codec::decode(multihash)?;
    let expected = hash_resolved(decoded.algorithm(), data, Some(decoded.length()))?;
    Ok(expected == multihash)
}

/// Incremental multihash computation.
///
/// Feed data in chunks with [Multihasher::update], then consume the hasher
/// with [Multihasher::finalize] to obtain the encoded multihash. Output is
/// byte-identical to the one-shot [hash] over the concatenation of all fed
/// chunks. Finalization takes ownership, so a finished hasher cannot be
/// reused.
#[derive(Debug)]
pub struct Multihasher {
    algorithm: Algorithm,
    context: engine::Context,
}

impl Multihasher {
    /// Create a hasher for the algorithm named by `identifier`, optionally
    /// pre-feeding `initial` data.
    pub fn new(identifier: &str, initial: Option<&[u8]>) -> Result<Self, Error> {
        let algorithm = Algorithm::from_str(identifier)?;
        let mut context = engine::Context::init(algorithm)?;
        if let Some(data) = initial {
            context.update(data);
        }
        Ok(Self { algorithm, context })
    }

    /// The algorithm this hasher computes.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Append `data` to the running digest.
    pub fn update(&mut self, data: &[u8]) {
        self.context.update(data);
    }

    /// Consume the hasher and return the encoded multihash over all fed data,
    /// truncated to `length` if one is given.
    pub fn finalize(self, length: Option<usize>) -> Result<Vec<u8>, Error> {
        let digest = self.context.finalize();
        codec::encode_resolved(self.algorithm, &digest, length)
    }
}
