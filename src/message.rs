// Copyright 2026 The Chamhash Authors.
//
// Code is licensed under MIT Apache Dual License

//! Canonical encoding of the logical message a record digest commits to.
//!
//! Layout, fixed and bit-for-bit deterministic:
//!
//! ```text
//! TAG || Keccak256(proof or empty) || Keccak256(content_ref) || consent byte || identity
//! ```
//!
//! Variable-length inputs (the proof and the content reference) are hashed to
//! a fixed 32-byte width before entering the layout, so no length prefixes
//! are needed and no padding ambiguity exists. The identity field is the raw
//! 33-byte compressed public key of the record owner.

use sha3::{Digest, Keccak256};

use crate::curve::COMPRESSED_POINT_SIZE;
use crate::error::{Error, Result};

/// Domain separation tag prefixed to every encoded message.
pub const MESSAGE_TAG: &[u8] = b"ZKID_CH_v1";

/// Total length of an encoded message in bytes.
pub const MESSAGE_SIZE: usize =
    MESSAGE_TAG.len() + 32 + 32 + 1 + COMPRESSED_POINT_SIZE;

/// Serialize the logical fields of a record into message bytes.
///
/// `proof` is an optional zero-knowledge proof blob; an absent proof hashes
/// the empty string, so presence and absence stay distinguishable from any
/// concrete proof value. `content_ref` is the opaque storage identifier of
/// the record ciphertext. `identity` must be the owner's 33-byte compressed
/// public key, anything else fails with [`Error::EncodingError`].
///
/// Messages are ephemeral values, recomputed on demand and never mutated.
///
/// ## Example
///
/// ```rust
/// use chamhash_rs::message::{encode_message, MESSAGE_SIZE};
///
/// let identity = [0x02u8; 33];
/// let encoded = encode_message(None, "bafy-record-cid", true, &identity).unwrap();
/// assert_eq!(encoded.len(), MESSAGE_SIZE);
/// ```
pub fn encode_message(
    proof: Option<&[u8]>,
    content_ref: &str,
    consent_active: bool,
    identity: &[u8],
) -> Result<Vec<u8>> {
    if identity.len() != COMPRESSED_POINT_SIZE {
        return Err(Error::EncodingError);
    }

    let proof_hash = Keccak256::digest(proof.unwrap_or(&[]));
    let content_hash = Keccak256::digest(content_ref.as_bytes());

    let mut message = Vec::with_capacity(MESSAGE_SIZE);
    message.extend_from_slice(MESSAGE_TAG);
    message.extend_from_slice(&proof_hash);
    message.extend_from_slice(&content_hash);
    message.push(if consent_active { 0x01 } else { 0x00 });
    message.extend_from_slice(identity);

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> [u8; 33] {
        let mut bytes = [0xABu8; 33];
        bytes[0] = 0x02;
        bytes
    }

    #[test]
    fn test_encode_deterministic() {
        let a = encode_message(None, "ref-A", true, &identity()).unwrap();
        let b = encode_message(None, "ref-A", true, &identity()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), MESSAGE_SIZE);
    }

    #[test]
    fn test_encode_starts_with_tag() {
        let encoded =
            encode_message(None, "ref-A", true, &identity()).unwrap();
        assert!(encoded.starts_with(MESSAGE_TAG));
    }

    #[test]
    fn test_flag_changes_encoding() {
        let active = encode_message(None, "ref-A", true, &identity()).unwrap();
        let revoked =
            encode_message(None, "ref-A", false, &identity()).unwrap();
        assert_ne!(active, revoked);
        // only the consent byte differs
        let flag_pos = MESSAGE_TAG.len() + 64;
        assert_eq!(active[flag_pos], 0x01);
        assert_eq!(revoked[flag_pos], 0x00);
        assert_eq!(active[..flag_pos], revoked[..flag_pos]);
        assert_eq!(active[flag_pos + 1..], revoked[flag_pos + 1..]);
    }

    #[test]
    fn test_proof_changes_encoding() {
        let without = encode_message(None, "ref-A", true, &identity()).unwrap();
        let with =
            encode_message(Some(b"proof-blob"), "ref-A", true, &identity())
                .unwrap();
        assert_ne!(without, with);
    }

    #[test]
    fn test_absent_proof_hashes_empty() {
        let absent = encode_message(None, "ref-A", true, &identity()).unwrap();
        let empty =
            encode_message(Some(b""), "ref-A", true, &identity()).unwrap();
        assert_eq!(absent, empty);
    }

    #[test]
    fn test_content_ref_changes_encoding() {
        let a = encode_message(None, "ref-A", true, &identity()).unwrap();
        let b = encode_message(None, "ref-B", true, &identity()).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_rejects_bad_identity_length() {
        assert_eq!(
            encode_message(None, "ref-A", true, &[0x02u8; 32]),
            Err(Error::EncodingError)
        );
        assert_eq!(
            encode_message(None, "ref-A", true, &[0x02u8; 64]),
            Err(Error::EncodingError)
        );
        assert_eq!(
            encode_message(None, "ref-A", true, &[]),
            Err(Error::EncodingError)
        );
    }
}
