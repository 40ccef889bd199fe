//! Error types for multihash operations

use thiserror::Error;

/// Error type for multihash operations
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("invalid hash function: {0}")]
    InvalidHashFunction(String),
    #[error("hash function not implemented: {0}")]
    Unimplemented(&'static str),
    #[error("invalid truncation length: {0} > {1}")]
    InvalidTruncationLength(usize, usize), // requested, natural
    #[error("invalid hash code: {0:#04x}")]
    InvalidHashCode(u8),
    #[error("input shorter than declared")]
    InvalidSize,
    #[error("trailing data found: {0} bytes")]
    InvalidLength(usize),
}
