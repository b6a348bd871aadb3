/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use sha3::{
    Digest,
    Keccak256
};
use crate::curve::*;

///Size in bytes of the truncated address checksum.
pub const CHECKSUM_SIZE: usize = 4;

///Hash bytes to bytes with Keccak-256 (the chain's `cn_fast_hash`).
pub fn fast_hash(msg: &[u8]) -> [u8; 32] {
    return Keccak256::digest(msg).into()
}

///Hash bytes to scalar.
///
///The digest is widened with a zero scalar to 64 bytes and then reduced modulo the group order.
pub fn hash_to_scalar(msg: &[u8]) -> Scalar {
    let mut wide = [0u8; 64];
    wide[..32].copy_from_slice(&fast_hash(msg));
    wide[32..].copy_from_slice(ZERO.as_bytes());
    return reduce_wide(&wide)
}

///Hash a 32-byte string followed by arbitrary data to a scalar.
pub fn hs(prefix: &[u8; 32], data: &[u8]) -> Scalar {
    return hash_to_scalar(&[prefix.as_slice(), data].concat())
}

///The address checksum: the first `CHECKSUM_SIZE` bytes of the hash of the payload.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let mut checksum = [0u8; CHECKSUM_SIZE];
    checksum.copy_from_slice(&fast_hash(payload)[..CHECKSUM_SIZE]);
    return checksum
}
