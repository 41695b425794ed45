// Copyright 2026 The Chamhash Authors.
//
// Code is licensed under MIT Apache Dual License

//! Trapdoor key pairs and per-hash randomness.

use k256::elliptic_curve::ff::PrimeField;

use k256::elliptic_curve::group::GroupEncoding;

use k256::elliptic_curve::Field;

use k256::{AffinePoint, Scalar};

use rand::rngs::OsRng;

use zeroize::Zeroize;

use crate::curve::{COMPRESSED_POINT_SIZE, SCALAR_SIZE};
use crate::error::{Error, Result};

/// A trapdoor key pair with `public = secret * G`.
///
/// The secret scalar is the trapdoor: whoever holds it can forge chameleon
/// hash collisions for digests computed against `public`. It never leaves
/// the struct except through [`export_secret_bytes`](Self::export_secret_bytes),
/// and it is wiped from memory when the pair is dropped.
#[derive(Debug, Clone)]
pub struct KeyPair {
    secret: Scalar,
    pub public: AffinePoint,
}

impl KeyPair {
    /// Generate a fresh key pair from the OS secure random generator.
    ///
    /// The secret is sampled uniformly from [1, n-1]; the zero-probability
    /// event of drawing zero is rejected and resampled, never fixed up.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use chamhash_rs::KeyPair;
    /// let keys = KeyPair::generate();
    /// assert_eq!(keys.public_bytes().len(), 33);
    /// ```
    pub fn generate() -> Self {
        let secret = sample_scalar();
        let public = (AffinePoint::GENERATOR * &secret).into();
        KeyPair { secret, public }
    }

    /// Import a stored trapdoor secret.
    ///
    /// Rejects encodings that are zero or not a canonical scalar below the
    /// curve order with [`Error::InvalidKey`].
    pub fn from_secret_bytes(bytes: &[u8; SCALAR_SIZE]) -> Result<Self> {
        let ct_result = Scalar::from_repr((*bytes).into());
        if !bool::from(ct_result.is_some()) {
            return Err(Error::InvalidKey);
        }
        let secret = ct_result.unwrap();
        if secret == Scalar::ZERO {
            return Err(Error::InvalidKey);
        }
        let public = (AffinePoint::GENERATOR * &secret).into();
        Ok(KeyPair { secret, public })
    }

    /// The trapdoor secret scalar.
    pub fn secret(&self) -> &Scalar {
        &self.secret
    }

    /// Explicit, caller-requested export of the secret as big-endian bytes.
    ///
    /// The caller takes over custody of the returned bytes.
    pub fn export_secret_bytes(&self) -> [u8; SCALAR_SIZE] {
        let mut out = [0u8; SCALAR_SIZE];
        out.copy_from_slice(self.secret.to_bytes().as_slice());
        out
    }

    /// The public key in its 33-byte compressed exchange format.
    pub fn public_bytes(&self) -> [u8; COMPRESSED_POINT_SIZE] {
        let mut out = [0u8; COMPRESSED_POINT_SIZE];
        out.copy_from_slice(self.public.to_bytes().as_slice());
        out
    }
}

impl Drop for KeyPair {
    fn drop(&mut self) {
        self.secret.zeroize();
    }
}

/// Sample a fresh nonzero scalar from the OS secure random generator.
///
/// Used for the per-hash randomness `r`. Operational invariant, documented
/// rather than enforced: never reuse an `r` for a new, un-redacted record.
/// Reuse does not break collision resistance, but it makes a fresh hash
/// indistinguishable from a forged one.
pub fn sample_scalar() -> Scalar {
    loop {
        let scalar = Scalar::random(&mut OsRng);
        if scalar != Scalar::ZERO {
            return scalar;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_nonzero_secret() {
        for _ in 0..8 {
            let keys = KeyPair::generate();
            assert_ne!(*keys.secret(), Scalar::ZERO);
            assert_ne!(keys.public, AffinePoint::IDENTITY);
        }
    }

    #[test]
    fn test_public_matches_secret() {
        let keys = KeyPair::generate();
        let expected: AffinePoint =
            (AffinePoint::GENERATOR * keys.secret()).into();
        assert_eq!(keys.public, expected);
    }

    #[test]
    fn test_from_secret_bytes_roundtrip() {
        let keys = KeyPair::generate();
        let exported = keys.export_secret_bytes();
        let restored = KeyPair::from_secret_bytes(&exported).unwrap();
        assert_eq!(*restored.secret(), *keys.secret());
        assert_eq!(restored.public, keys.public);
    }

    #[test]
    fn test_from_secret_bytes_rejects_zero() {
        assert!(matches!(
            KeyPair::from_secret_bytes(&[0u8; 32]),
            Err(Error::InvalidKey)
        ));
    }

    #[test]
    fn test_from_secret_bytes_rejects_out_of_range() {
        // the curve order itself is not a canonical scalar encoding
        let order_bytes: [u8; 32] = [
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48,
            0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
        ];
        assert!(matches!(
            KeyPair::from_secret_bytes(&order_bytes),
            Err(Error::InvalidKey)
        ));
    }

    #[test]
    fn test_sample_scalar_nonzero_and_fresh() {
        let a = sample_scalar();
        let b = sample_scalar();
        assert_ne!(a, Scalar::ZERO);
        assert_ne!(b, Scalar::ZERO);
        assert_ne!(a, b);
    }

    #[test]
    fn test_public_bytes_compressed_tag() {
        let keys = KeyPair::generate();
        let bytes = keys.public_bytes();
        assert!(bytes[0] == 0x02 || bytes[0] == 0x03);
    }
}
