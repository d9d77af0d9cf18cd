//! Error types for address parsing.

use thiserror::Error;

/// Errors surfaced by address parsing.
///
/// Decode failures from the root decoder are folded into
/// [`AddressError::InvalidAddress`]; callers only ever see this one kind.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The input is empty, absent, or does not carry a decodable root.
    #[error("not a valid OrbitDB address: {input}")]
    InvalidAddress { input: String },
}

impl AddressError {
    pub(crate) fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidAddress {
            input: input.into(),
        }
    }

    /// The offending input, as given by the caller.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidAddress { input } => input,
        }
    }
}

/// A root token that failed to decode as a content identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("cannot decode {token:?} as a content identifier: {reason}")]
pub struct DecodeError {
    pub token: String,
    pub reason: String,
}

impl DecodeError {
    pub fn new(token: impl Into<String>, reason: impl ToString) -> Self {
        Self {
            token: token.into(),
            reason: reason.to_string(),
        }
    }
}

/// Convenience type alias for address operations.
pub type Result<T> = std::result::Result<T, AddressError>;
