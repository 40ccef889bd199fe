//! Digest engine adapter.
//!
//! Thin capability layer over the RustCrypto digest primitives. The rest of
//! the crate never names a concrete hash implementation: it asks for a
//! [Context] (or a one-shot digest) by [Algorithm] and receives raw,
//! untruncated digest bytes back. Registered algorithms without a wired
//! backend fail with [Error::Unimplemented] here, never with wrong output.

use crate::{Algorithm, Error};
use blake2::{Blake2b512, Blake2s256};
use sha1::Sha1;
use sha2::{Digest as _, Sha256, Sha512};
use sha3::{Sha3_224, Sha3_256, Sha3_384, Sha3_512};

/// Compute the full, untruncated digest of `data` under `algorithm`.
pub fn digest(algorithm: Algorithm, data: &[u8]) -> Result<Vec<u8>, Error> {
    let mut context = Context::init(algorithm)?;
    context.update(data);
    Ok(context.finalize())
}

/// Running state of one incremental digest computation.
///
/// A context is owned by exactly one logical computation: feed it with
/// [Context::update] zero or more times, then consume it with
/// [Context::finalize]. Finalization takes `self`, so a finished context
/// cannot be reused.
#[derive(Debug)]
pub struct Context {
    state: State,
}

#[derive(Debug)]
enum State {
    Sha1(Sha1),
    Sha2_256(Sha256),
    Sha2_512(Sha512),
    Sha3_512(Sha3_512),
    Sha3_384(Sha3_384),
    Sha3_256(Sha3_256),
    Sha3_224(Sha3_224),
    Blake2b(Blake2b512),
    Blake2s(Blake2s256),
}

impl Context {
    /// Create a fresh context for `algorithm`.
    pub fn init(algorithm: Algorithm) -> Result<Self, Error> {
        let state = match algorithm {
            Algorithm::Sha1 => State::Sha1(Sha1::new()),
            Algorithm::Sha2_256 => State::Sha2_256(Sha256::new()),
            Algorithm::Sha2_512 => State::Sha2_512(Sha512::new()),
            Algorithm::Sha3_512 => State::Sha3_512(Sha3_512::new()),
            Algorithm::Sha3_384 => State::Sha3_384(Sha3_384::new()),
            Algorithm::Sha3_256 => State::Sha3_256(Sha3_256::new()),
            Algorithm::Sha3_224 => State::Sha3_224(Sha3_224::new()),
            Algorithm::Blake2b => State::Blake2b(Blake2b512::new()),
            Algorithm::Blake2s => State::Blake2s(Blake2s256::new()),
            Algorithm::Shake128 | Algorithm::Shake256 => {
                return Err(Error::Unimplemented(algorithm.name()))
            }
        };
        Ok(Self { state })
    }

    /// Append `data` to the running digest. Call order is significant:
    /// feeding `"Hel"` then `"lo"` is equivalent to feeding `"Hello"` once.
    pub fn update(&mut self, data: &[u8]) {
        match &mut self.state {
            State::Sha1(hasher) => hasher.update(data),
            State::Sha2_256(hasher) => hasher.update(data),
            State::Sha2_512(hasher) => hasher.update(data),
            State::Sha3_512(hasher) => hasher.update(data),
            State::Sha3_384(hasher) => hasher.update(data),
            State::Sha3_256(hasher) => hasher.update(data),
            State::Sha3_224(hasher) => hasher.update(data),
            State::Blake2b(hasher) => hasher.update(data),
            State::Blake2s(hasher) => hasher.update(data),
        }
    }

    /// Consume the context and return the full, untruncated digest of all
    /// bytes fed so far.
    pub fn finalize(self) -> Vec<u8> {
        match self.state {
            State::Sha1(hasher) => hasher.finalize().to_vec(),
            State::Sha2_256(hasher) => hasher.finalize().to_vec(),
            State::Sha2_512(hasher) => hasher.finalize().to_vec(),
            State::Sha3_512(hasher) => hasher.finalize().to_vec(),
            State::Sha3_384(hasher) => hasher.finalize().to_vec(),
            State::Sha3_256(hasher) => hasher.finalize().to_vec(),
            State::Sha3_224(hasher) => hasher.finalize().to_vec(),
            State::Blake2b(hasher) => hasher.finalize().to_vec(),
            State::Blake2s(hasher) => hasher.finalize().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Digests of b"hello world" under every wired algorithm.
    const VECTORS: &[(Algorithm, &str)] = &[
        (
            Algorithm::Sha1,
            "2aae6c35c94fcfb415dbe95f408b9ce91ee846ed",
        ),
        (
            Algorithm::Sha2_256,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9",
        ),
        (
            Algorithm::Sha2_512,
            "309ecc489c12d6eb4cc40f50c902f2b4d0ed77ee511a7c7a9bcd3ca86d4cd86f989dd35bc5ff499670da34255b45b0cfd830e81f605dcf7dc5542e93ae9cd76f",
        ),
        (
            Algorithm::Sha3_512,
            "840006653e9ac9e95117a15c915caab81662918e925de9e004f774ff82d7079a40d4d27b1b372657c61d46d470304c88c788b3a4527ad074d1dccbee5dbaa99a",
        ),
        (
            Algorithm::Sha3_384,
            "83bff28dde1b1bf5810071c6643c08e5b05bdb836effd70b403ea8ea0a634dc4997eb1053aa3593f590f9c63630dd90b",
        ),
        (
            Algorithm::Sha3_256,
            "644bcc7e564373040999aac89e7622f3ca71fba1d972fd94a31c3bfbf24e3938",
        ),
        (
            Algorithm::Sha3_224,
            "dfb7f18c77e928bb56faeb2da27291bd790bc1045cde45f3210bb6c5",
        ),
        (
            Algorithm::Blake2b,
            "021ced8799296ceca557832ab941a50b4a11f83478cf141f51f933f653ab9fbcc05a037cddbed06e309bf334942c4e58cdf1a46e237911ccd7fcf9787cbc7fd0",
        ),
        (
            Algorithm::Blake2s,
            "9aec6806794561107e594b1f6a8a6b0c92a0cba9acf5e5e93cca06f781813b0b",
        ),
    ];

    #[test]
    fn test_vectors() {
        for (algorithm, expected) in VECTORS {
            let out = digest(*algorithm, b"hello world").unwrap();
            assert_eq!(hex::encode(&out), *expected, "{algorithm}");
            assert_eq!(out.len(), algorithm.digest_len(), "{algorithm}");
        }
    }

    #[test]
    fn test_empty_message() {
        let out = digest(Algorithm::Sha2_256, b"").unwrap();
        assert_eq!(
            hex::encode(out),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_incremental_matches_oneshot() {
        for (algorithm, _) in VECTORS {
            let mut context = Context::init(*algorithm).unwrap();
            context.update(b"hello");
            context.update(b" ");
            context.update(b"world");
            assert_eq!(
                context.finalize(),
                digest(*algorithm, b"hello world").unwrap(),
                "{algorithm}"
            );
        }
    }

    #[test]
    fn test_incremental_no_updates() {
        let context = Context::init(Algorithm::Sha1).unwrap();
        assert_eq!(context.finalize(), digest(Algorithm::Sha1, b"").unwrap());
    }

    #[test]
    fn test_unimplemented() {
        for algorithm in [Algorithm::Shake128, Algorithm::Shake256] {
            assert_eq!(
                digest(algorithm, b"hello world").unwrap_err(),
                Error::Unimplemented(algorithm.name())
            );
            assert_eq!(
                Context::init(algorithm).unwrap_err(),
                Error::Unimplemented(algorithm.name())
            );
        }
    }
}
