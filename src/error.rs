// Copyright 2026 The Chamhash Authors.
//
// Code is licensed under MIT Apache Dual License

use std::fmt;

/// Errors raised by the chameleon hash engine.
///
/// Every failure is local, synchronous and non-recoverable at this layer:
/// the engine never retries, it signals the condition and leaves recovery
/// policy to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Public key input is malformed, of the wrong length, or decodes to the
    /// identity element.
    InvalidPoint,
    /// Trapdoor secret import that is zero or not a canonical scalar encoding.
    InvalidKey,
    /// Modular inverse of a zero trapdoor secret was requested.
    DivisionByZero,
    /// A message layout field has an unexpected length.
    EncodingError,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidPoint => {
                write!(f, "invalid public key point (malformed or identity)")
            }
            Error::InvalidKey => {
                write!(f, "invalid trapdoor secret (zero or out of range)")
            }
            Error::DivisionByZero => {
                write!(f, "modular inverse of zero trapdoor secret")
            }
            Error::EncodingError => {
                write!(f, "message field has unexpected length")
            }
        }
    }
}

impl std::error::Error for Error {}
