/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! CryptoNote stealth-address key derivation.
//!
//! The sender publishes a transaction key `R = r * G`.
//! The recipient, holding the private view key `a`, recomputes the shared derivation
//! `D = 8 * a * R`, and for the output at index `i` expects the one-time key
//!
//! `P = Hs(D || varint(i)) * G + B`
//!
//! where `B` is the recipient's public spend key.
//! A scanner compares `P` against the key of each output in the transaction.

use tracing::trace;

use crate::internal_common::*;
use crate::types::parse_hex;

///Given a transaction public key and a private key (normally the private view key),
///compute the key derivation `8 * (secret * tx_public_key)`.
///
///The transaction key must be a canonical point in the prime-order subgroup.
pub fn generate_key_derivation(tx_public_key: &PublicKey, secret: &SecretKey) -> Result<KeyDerivation> {
    let tx_point = decode_prime_order_point(tx_public_key.as_bytes())?;
    let shared = scalarmult_noclamp(&secret.as_scalar(), &tx_point)?;
    let derivation = scalarmult_noclamp(&*EIGHT, &shared)?;
    return Ok(KeyDerivation(encode_point(&derivation)))
}

///Hash a derivation and an output index to a scalar, `Hs(derivation || varint(output_index))`.
pub fn derivation_to_scalar(derivation: &KeyDerivation, output_index: u64) -> Scalar {
    let mut data = Vec::with_capacity(POINT_SIZE + MAX_VARINT_SIZE);
    data.extend_from_slice(derivation.as_bytes());
    write_varint(&mut data, output_index);
    return hash_to_scalar(&data)
}

///Derive the one-time public key of the output at `output_index`,
///`Hs(derivation || varint(output_index)) * G + spend_public_key`.
pub fn derive_public_key(
    derivation: &KeyDerivation, output_index: u64, spend_public_key: &PublicKey
) -> Result<PublicKey> {
    let spend = spend_public_key.to_point()?;
    let h = derivation_to_scalar(derivation, output_index);
    let output_key = point_add(&scalarmult_base_noclamp(&h)?, &spend);

    trace!(output_index, "derived output public key");
    return Ok(PublicKey::from_point(&output_key))
}

///Compute the concealing point `hash_scalar * view_public_key`,
///used to blind amounts and keys in Zarcanum outputs.
pub fn compute_concealing_point(hash_scalar: &Scalar, view_public_key: &PublicKey) -> Result<PublicKey> {
    let view = decode_prime_order_point(view_public_key.as_bytes())?;
    return Ok(PublicKey::from_point(&scalarmult_noclamp(hash_scalar, &view)?))
}

impl KeyDerivation {
    ///See `derivation_to_scalar`.
    pub fn to_scalar(&self, output_index: u64) -> Scalar {
        return derivation_to_scalar(self, output_index)
    }

    ///See `derive_public_key`.
    pub fn derive_public_key(&self, output_index: u64, spend_public_key: &PublicKey) -> Result<PublicKey> {
        return derive_public_key(self, output_index, spend_public_key)
    }
}

///Compute the stealth address (one-time output key) of an output, from hex-encoded keys.
///
///Returns the output key as 64 lowercase hex characters.
pub fn derive_stealth_address_hex(
    tx_public_key: &str, secret_view_key: &str, spend_public_key: &str, output_index: u64
) -> Result<String> {
    let tx_public_key = PublicKey::from_hex(tx_public_key)?;
    let secret_view_key = SecretKey::from_hex(secret_view_key)?;
    let spend_public_key = PublicKey::from_hex(spend_public_key)?;

    let derivation = generate_key_derivation(&tx_public_key, &secret_view_key)?;
    return Ok(derive_public_key(&derivation, output_index, &spend_public_key)?.to_hex())
}

///Compute `Hs(8 * a * R || varint(output_index))` from hex-encoded keys.
///
///Returns the scalar as 64 lowercase hex characters.
pub fn derivation_to_scalar_hex(
    tx_public_key: &str, secret_view_key: &str, output_index: u64
) -> Result<String> {
    let tx_public_key = PublicKey::from_hex(tx_public_key)?;
    let secret_view_key = SecretKey::from_hex(secret_view_key)?;

    let derivation = generate_key_derivation(&tx_public_key, &secret_view_key)?;
    return Ok(hex::encode(derivation_to_scalar(&derivation, output_index).as_bytes()))
}

///Hex form of `compute_concealing_point`.
///
///`hash_scalar` is used as-is, without reduction.
pub fn compute_concealing_point_hex(hash_scalar: &str, view_public_key: &str) -> Result<String> {
    let hash_scalar = unclamped_scalar(parse_hex(hash_scalar, "hash scalar")?);
    let view_public_key = PublicKey::from_hex(view_public_key)?;
    return Ok(compute_concealing_point(&hash_scalar, &view_public_key)?.to_hex())
}
