// Copyright 2026 The Chamhash Authors.
//
// Code is licensed under MIT Apache Dual License

//! Trapdoor chameleon hash over secp256k1.
//!
//! The digest of a message `m` under randomness `r` and trapdoor public key
//! `Y = x*G` is
//!
//! ```text
//! digest = Keccak256( compress( H(m)*G + r*Y ) )
//! ```
//!
//! where `H` is the hash-to-scalar oracle. The digest is collision resistant
//! for anyone without the trapdoor. The holder of `x` can substitute a new
//! message `m'` without changing the digest by publishing the forged
//! randomness
//!
//! ```text
//! r' = r + (H(m) - H(m')) * x⁻¹  (mod n)
//! ```
//!
//! which satisfies `H(m')*G + r'*Y = H(m)*G + r*Y` by the group homomorphism,
//! an exact equality for every valid input, including repeated forges.
//!
//! One ordering convention is fixed for the whole deployment. Mixing this
//! construction with the swapped-term variant (`r*G + H(m)*Y`) across call
//! sites breaks forging, so the digest and the forge live in this one module
//! and no second convention exists in the crate.

use k256::{AffinePoint, Scalar};

use sha3::{Digest, Keccak256};

use crate::curve::{Secp256k1Group, COMPRESSED_POINT_SIZE};
use crate::error::{Error, Result};

/// Output of a chameleon hash computation.
///
/// `hash` is the externally published, persisted value. `point` and
/// `randomness` are reproduction material: the record owner retains them
/// privately to recompute the digest and to forge future collisions. They
/// are never published.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChameleonDigest {
    /// The published 32-byte digest.
    pub hash: [u8; 32],
    /// Compressed intermediate group element.
    pub point: [u8; COMPRESSED_POINT_SIZE],
    /// The randomness the digest was computed under.
    pub randomness: Scalar,
}

impl ChameleonDigest {
    /// Lowercase hex rendering of the published digest, the form written to
    /// the ledger.
    pub fn hash_hex(&self) -> String {
        self.hash.iter().map(|byte| format!("{:02x}", byte)).collect()
    }
}

/// Chameleon hash engine.
///
/// An explicit context object owning the curve adapter, so several
/// identities and key pairs can be exercised concurrently without any shared
/// process-wide state. All methods are pure functions over their inputs.
#[derive(Debug, Clone, Default)]
pub struct ChameleonHash {
    group: Secp256k1Group,
}

impl ChameleonHash {
    pub fn new() -> Self {
        ChameleonHash {
            group: Secp256k1Group::new(),
        }
    }

    /// The curve adapter backing this engine.
    pub fn group(&self) -> &Secp256k1Group {
        &self.group
    }

    /// Compute the chameleon hash of `message` under randomness `r` and the
    /// trapdoor public key.
    ///
    /// Deterministic for fixed inputs. The only unpredictability comes from
    /// `r`, which must be sampled fresh per record and kept secret by
    /// whoever wants to forge collisions later. Fails with
    /// [`Error::InvalidPoint`] when the public key is the identity element.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use chamhash_rs::{ChameleonHash, KeyPair};
    /// use chamhash_rs::keypair::sample_scalar;
    /// use chamhash_rs::message::encode_message;
    ///
    /// let engine = ChameleonHash::new();
    /// let keys = KeyPair::generate();
    /// let message =
    ///     encode_message(None, "bafy-record-cid", true, &keys.public_bytes())
    ///         .unwrap();
    /// let r = sample_scalar();
    /// let digest = engine.hash(&message, &r, &keys.public).unwrap();
    /// assert_eq!(digest.hash_hex().len(), 64);
    /// ```
    pub fn hash(
        &self,
        message: &[u8],
        r: &Scalar,
        trapdoor_public: &AffinePoint,
    ) -> Result<ChameleonDigest> {
        if *trapdoor_public == AffinePoint::IDENTITY {
            return Err(Error::InvalidPoint);
        }

        let h_m = self.group.hash_to_scalar(message);
        let message_term = self.group.scalar_multiply_base(&h_m);
        let randomness_term =
            self.group.scalar_multiply(r, trapdoor_public);
        let point = self.group.add_points(&message_term, &randomness_term);

        let compressed = self.group.compress(&point);
        let mut hash = [0u8; 32];
        hash.copy_from_slice(&Keccak256::digest(compressed));

        Ok(ChameleonDigest {
            hash,
            point: compressed,
            randomness: *r,
        })
    }

    /// Same as [`hash`](Self::hash), taking the public key in its 33-byte
    /// compressed exchange format and validating it first.
    pub fn hash_with_public_bytes(
        &self,
        message: &[u8],
        r: &Scalar,
        public_bytes: &[u8],
    ) -> Result<ChameleonDigest> {
        let trapdoor_public = self.group.decompress(public_bytes)?;
        self.hash(message, r, &trapdoor_public)
    }

    /// Recompute the digest for `(message, r, Y)` and compare it against a
    /// previously published value.
    pub fn verify(
        &self,
        message: &[u8],
        r: &Scalar,
        trapdoor_public: &AffinePoint,
        expected_hash: &[u8; 32],
    ) -> Result<bool> {
        let digest = self.hash(message, r, trapdoor_public)?;
        Ok(digest.hash == *expected_hash)
    }

    /// Compute the forged randomness that makes `new_message` hash to the
    /// same digest as `(original_message, original_r)`.
    ///
    /// Requires the trapdoor secret `x` with `Y = x*G`. The computation runs
    /// in the order domain:
    ///
    /// ```text
    /// delta = (H(m) - H(m')) mod n
    /// r'    = (r + delta * x⁻¹) mod n
    /// ```
    ///
    /// Fails with [`Error::DivisionByZero`] when the secret reduces to zero,
    /// which has no modular inverse. A zero secret is already rejected at
    /// key generation and import time, never silently fixed up here.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use chamhash_rs::{ChameleonHash, KeyPair};
    /// use chamhash_rs::keypair::sample_scalar;
    ///
    /// let engine = ChameleonHash::new();
    /// let keys = KeyPair::generate();
    /// let r = sample_scalar();
    /// let before = engine.hash(b"old record", &r, &keys.public).unwrap();
    /// let forged = engine
    ///     .forge(&r, keys.secret(), b"old record", b"new record")
    ///     .unwrap();
    /// let after = engine.hash(b"new record", &forged, &keys.public).unwrap();
    /// assert_eq!(before.hash, after.hash);
    /// ```
    pub fn forge(
        &self,
        original_r: &Scalar,
        trapdoor_secret: &Scalar,
        original_message: &[u8],
        new_message: &[u8],
    ) -> Result<Scalar> {
        let n = self.group.order_as_bigint();

        let secret = self.group.scalar_to_bigint(trapdoor_secret);
        let secret_inverse =
            self.group.mod_inverse(&secret).ok_or(Error::DivisionByZero)?;

        let h_original = self
            .group
            .scalar_to_bigint(&self.group.hash_to_scalar(original_message));
        let h_new = self
            .group
            .scalar_to_bigint(&self.group.hash_to_scalar(new_message));

        let delta = ((h_original - h_new) % n + n) % n;
        let forged =
            (self.group.scalar_to_bigint(original_r) + delta * secret_inverse)
                % n;

        Ok(self.group.bigint_to_scalar(&forged))
    }
}
