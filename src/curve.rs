/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Elliptic curve functions and constants.
//!
//! These are thin wrappers around `curve25519-dalek` which reproduce the input checks
//! of the chain's reference library, so that anything the chain would refuse
//! is refused here as well, instead of silently producing a different key.

pub use curve25519_dalek::{
    constants,
    scalar::Scalar,
    edwards::{
        EdwardsPoint,
        CompressedEdwardsY,
        EdwardsBasepointTable
    },
    traits::IsIdentity
};
use rand::{thread_rng, Rng};

use crate::errors::{Error, Result};

///The basepoint of the elliptic curve.
///`G` is a precomputed table of values, not an EC point, in order to speed up operations.
///To access the EC point itself, use `G_POINT`.
pub const G: &EdwardsBasepointTable = &constants::ED25519_BASEPOINT_TABLE;
///The basepoint of the elliptic curve.
///`G_POINT` is the actual EC point, whereas `G` is a precomputed table of values for faster operations.
pub const G_POINT: EdwardsPoint = constants::ED25519_BASEPOINT_POINT;

///Size in bytes of an encoded point.
pub const POINT_SIZE: usize = 32;
///Size in bytes of an encoded scalar.
pub const SCALAR_SIZE: usize = 32;

lazy_static! {
    ///The zero scalar, used to widen 32-byte digests before reduction.
    pub static ref ZERO: Scalar = Scalar::zero();
    ///The curve cofactor as a scalar.
    pub static ref EIGHT: Scalar = Scalar::from(8u8);
}

///Encode a point to its compressed 32-byte form.
pub fn encode_point(point: &EdwardsPoint) -> [u8; 32] {
    return point.compress().to_bytes()
}

///Decode a compressed point.
///
///Fails unless `bytes` is the canonical encoding of a point on the curve.
pub fn decode_point(bytes: &[u8; 32]) -> Result<EdwardsPoint> {
    let point = match CompressedEdwardsY(*bytes).decompress() {
        Some(point) => point,
        None => return Err(Error::CryptoOperationFailed("point is not on the curve"))
    };

    //dalek reduces the y coordinate while decompressing
    if encode_point(&point) != *bytes {
        return Err(Error::CryptoOperationFailed("non-canonical point encoding"))
    }
    return Ok(point)
}

///Decode a compressed point which must lie in the prime-order subgroup.
///
///Small-order points and points with a torsion component are rejected,
///as they are by the reference library before any variable-base multiplication.
pub fn decode_prime_order_point(bytes: &[u8; 32]) -> Result<EdwardsPoint> {
    let point = decode_point(bytes)?;
    if point.is_small_order() || !point.is_torsion_free() {
        return Err(Error::CryptoOperationFailed("point is not in the prime-order subgroup"))
    }
    return Ok(point)
}

///Interpret 32 bytes as a scalar without clamping or reduction.
///
///Only the top bit is cleared, matching the `noclamp` multiplication of the reference library.
pub fn unclamped_scalar(bytes: [u8; 32]) -> Scalar {
    return Scalar::from_bits(bytes)
}

///Variable-base scalar multiplication, `scalar * point`, without clamping.
pub fn scalarmult_noclamp(scalar: &Scalar, point: &EdwardsPoint) -> Result<EdwardsPoint> {
    if scalar.as_bytes() == ZERO.as_bytes() {
        return Err(Error::CryptoOperationFailed("zero scalar"))
    }

    let product = scalar * point;
    if product.is_identity() {
        return Err(Error::CryptoOperationFailed("scalar multiplication produced the identity"))
    }
    return Ok(product)
}

///Fixed-base scalar multiplication, `scalar * G`, without clamping.
pub fn scalarmult_base_noclamp(scalar: &Scalar) -> Result<EdwardsPoint> {
    if scalar.as_bytes() == ZERO.as_bytes() {
        return Err(Error::CryptoOperationFailed("zero scalar"))
    }

    let product = scalar * G;
    if product.is_identity() {
        return Err(Error::CryptoOperationFailed("scalar multiplication produced the identity"))
    }
    return Ok(product)
}

///Point addition, `a + b`.
pub fn point_add(a: &EdwardsPoint, b: &EdwardsPoint) -> EdwardsPoint {
    return a + b
}

///Reduce a 64-byte little-endian value modulo the group order.
pub fn reduce_wide(bytes: &[u8; 64]) -> Scalar {
    return Scalar::from_bytes_mod_order_wide(bytes)
}

///Fill a fresh buffer from the thread-local CSPRNG.
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    thread_rng().fill(&mut bytes[..]);
    return bytes
}

///return a random scalar
pub fn random_scalar() -> Scalar {
    return reduce_wide(&random_bytes::<64>())
}

///return a random point in the prime-order subgroup
pub fn random_point() -> EdwardsPoint {
    return &random_scalar() * G;
}
