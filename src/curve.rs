// Copyright 2026 The Chamhash Authors.
//
// Code is licensed under MIT Apache Dual License

//! secp256k1 arithmetic adapter for the chameleon hash engine.
//!
//! Wraps the group operations the engine needs (scalar multiplication, point
//! addition, SEC1 point compression/decompression) and the hash-to-scalar
//! oracle over a single fixed curve.
//!
//! # Curve Parameters
//! - **Order (n)**: FFFFFFFF FFFFFFFF FFFFFFFF FFFFFFFE BAAEDCE6 AF48A03B BFD25E8C D0364141 (prime)
//! - **Cofactor (h)**: 1 (prime-order curve)
//! - **Curve equation**: y² = x³ + 7 over F_p
//! - **Base point (G)**: Standardized generator point
//!
//! The curve order is also kept as a `BigInt` so that reductions and the
//! collision equation can be computed exactly in the order domain and only
//! then converted into `k256::Scalar` values.

use k256::elliptic_curve::ff::PrimeField;

use k256::elliptic_curve::group::GroupEncoding;

use k256::{AffinePoint, ProjectivePoint, Scalar};

use sha2::{Digest, Sha256};

use num_bigint::{BigInt, Sign};
use num_traits::identities::{One, Zero};

use crate::error::{Error, Result};

/// Size of a SEC1 compressed secp256k1 point: one parity byte plus the
/// 32-byte x coordinate.
pub const COMPRESSED_POINT_SIZE: usize = 33;

/// Size of a big-endian scalar encoding.
pub const SCALAR_SIZE: usize = 32;

/// secp256k1 group adapter.
///
/// All operations are pure functions over immutable inputs; the struct holds
/// no mutable state and can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Secp256k1Group {
    order: BigInt,
}

impl Secp256k1Group {
    /// Create a new secp256k1 group adapter.
    pub fn new() -> Self {
        // secp256k1 curve order as BigInt for use in modular arithmetic
        // ORDER = FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
        let order_bytes: [u8; 32] = [
            0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
            0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48,
            0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36, 0x41, 0x41,
        ];
        let order = BigInt::from_bytes_be(Sign::Plus, &order_bytes);

        Secp256k1Group { order }
    }

    /// The curve order n as a `BigInt` for exact modular arithmetic.
    pub fn order_as_bigint(&self) -> &BigInt {
        &self.order
    }

    /// The standardized generator point G.
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::GENERATOR
    }

    /// Scalar multiplication k * base.
    pub fn scalar_multiply(
        &self,
        k: &Scalar,
        base: &AffinePoint,
    ) -> AffinePoint {
        (ProjectivePoint::from(*base) * k).into()
    }

    /// Scalar multiplication against the generator: k * G.
    pub fn scalar_multiply_base(&self, k: &Scalar) -> AffinePoint {
        (ProjectivePoint::from(AffinePoint::GENERATOR) * k).into()
    }

    /// Point addition p1 + p2.
    ///
    /// The engine only ever combines two terms, so no variable-length
    /// accumulation entry point is provided.
    pub fn add_points(
        &self,
        p1: &AffinePoint,
        p2: &AffinePoint,
    ) -> AffinePoint {
        (ProjectivePoint::from(*p1) + ProjectivePoint::from(*p2)).into()
    }

    /// Canonical SEC1 compressed encoding of a point.
    pub fn compress(&self, point: &AffinePoint) -> [u8; COMPRESSED_POINT_SIZE] {
        let mut out = [0u8; COMPRESSED_POINT_SIZE];
        out.copy_from_slice(point.to_bytes().as_slice());
        out
    }

    /// Decode a compressed public key.
    ///
    /// Rejects anything that is not exactly 33 bytes decoding to a point on
    /// the curve, and rejects the identity element, which is never a valid
    /// public key. Nothing that fails here ever reaches arithmetic.
    pub fn decompress(&self, bytes: &[u8]) -> Result<AffinePoint> {
        if bytes.len() != COMPRESSED_POINT_SIZE {
            return Err(Error::InvalidPoint);
        }
        let mut array = [0u8; COMPRESSED_POINT_SIZE];
        array.copy_from_slice(bytes);
        // from_bytes returns CtOption - need to check if it's Some
        let ct_result = AffinePoint::from_bytes((&array).into());
        if bool::from(ct_result.is_some()) {
            let point = ct_result.unwrap();
            if point == AffinePoint::IDENTITY {
                return Err(Error::InvalidPoint);
            }
            Ok(point)
        } else {
            Err(Error::InvalidPoint)
        }
    }

    /// Deterministic hash-to-scalar oracle.
    ///
    /// SHA-256 of `data`, interpreted as a big-endian integer, reduced modulo
    /// the curve order. A result of zero is remapped to one, so the oracle is
    /// total and never returns the zero scalar. The remap is a published
    /// deterministic policy: the same input always yields the same scalar.
    pub fn hash_to_scalar(&self, data: &[u8]) -> Scalar {
        let digest = Sha256::digest(data);
        let mut value =
            BigInt::from_bytes_be(Sign::Plus, &digest) % &self.order;
        if value.is_zero() {
            value = BigInt::one();
        }
        self.bigint_to_scalar(&value)
    }

    /// Modular inverse of `x` modulo the curve order.
    ///
    /// n is prime, so the inverse is x^(n-2) mod n. Returns `None` when `x`
    /// reduces to zero, which has no inverse.
    pub fn mod_inverse(&self, x: &BigInt) -> Option<BigInt> {
        let reduced = ((x % &self.order) + &self.order) % &self.order;
        if reduced.is_zero() {
            return None;
        }
        let exponent = &self.order - BigInt::from(2u32);
        Some(reduced.modpow(&exponent, &self.order))
    }

    /// Big-endian `BigInt` view of a scalar.
    pub fn scalar_to_bigint(&self, scalar: &Scalar) -> BigInt {
        BigInt::from_bytes_be(Sign::Plus, &scalar.to_bytes())
    }

    /// Convert a value already reduced into [0, n) back to a scalar.
    pub fn bigint_to_scalar(&self, value: &BigInt) -> Scalar {
        let (_, bytes) = value.to_bytes_be();
        let mut buf = [0u8; SCALAR_SIZE];
        buf[SCALAR_SIZE - bytes.len()..].copy_from_slice(&bytes);
        // The caller keeps the value below the order, so the canonical
        // decoding cannot fail.
        Scalar::from_repr(buf.into()).unwrap()
    }
}

impl Default for Secp256k1Group {
    fn default() -> Self {
        Self::new()
    }
}
