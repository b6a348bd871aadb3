/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::fmt;
use std::str::FromStr;

use zeroize::Zeroize;

use crate::tobytes::*;
use crate::curve::*;
use crate::errors::{Error, Result};

///Size in bytes of a payment id embedded in an integrated address.
pub const PAYMENT_ID_SIZE: usize = 8;

///Parse exactly `N` bytes from a hex string of `2 * N` characters.
pub(crate) fn parse_hex<const N: usize>(value: &str, what: &str) -> Result<[u8; N]> {
    if value.len() != 2 * N {
        return Err(Error::InvalidArgument(format!(
            "{} must be {} hex characters, got {}", what, 2 * N, value.len()
        )))
    }

    let mut bytes = [0u8; N];
    if hex::decode_to_slice(value, &mut bytes).is_err() {
        return Err(Error::InvalidArgument(format!("{} is not valid hex", what)))
    }
    return Ok(bytes)
}

///A compressed Ed25519 public key, as carried in addresses and transactions.
///
///The bytes are only checked to be a curve point when the key is used in a curve operation;
///addresses may carry any 32 bytes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PublicKey(
    pub [u8; 32]

); impl PublicKey {
    ///Parse a public key from 64 hex characters.
    pub fn from_hex(value: &str) -> Result<Self> {
        return Ok(Self(parse_hex(value, "public key")?))
    }

    ///Lowercase hex encoding of this key.
    pub fn to_hex(&self) -> String {
        return hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        return &self.0
    }

    ///Compress an elliptic curve point into a public key.
    pub fn from_point(point: &EdwardsPoint) -> Self {
        return Self(encode_point(point))
    }

    ///Decode this key as a curve point.
    pub fn to_point(&self) -> Result<EdwardsPoint> {
        return decode_point(&self.0)
    }

} impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }

} impl FromStr for PublicKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        return Self::from_hex(s)
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for PublicKey {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.0.to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match bytes.try_into() {
            Ok(key) => Ok(Self(key)),
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}

///A 32-byte private key, such as a wallet's private view key.
///
///The bytes are used as-is by the unclamped scalar multiplication,
///so a key which is not reduced modulo the group order is still accepted.
///
///**This should not be publically shared.**
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Zeroize)]
pub struct SecretKey(
    [u8; 32]

); impl SecretKey {
    ///Import raw key bytes.
    pub fn from_bytes_array(bytes: [u8; 32]) -> Self {
        return Self(bytes)
    }

    ///Parse a private key from 64 hex characters.
    pub fn from_hex(value: &str) -> Result<Self> {
        return Ok(Self(parse_hex(value, "secret key")?))
    }

    ///Convert a scalar into a private key.
    pub fn from_scalar(scalar: &Scalar) -> Self {
        return Self(scalar.to_bytes())
    }

    ///Generate a random new private key.
    pub fn generate() -> Self {
        return Self::from_scalar(&random_scalar())
    }

    ///The scalar used in unclamped multiplication.
    pub fn as_scalar(&self) -> Scalar {
        return unclamped_scalar(self.0)
    }

    ///The public key of this private key, `k * G`.
    pub fn to_public(&self) -> Result<PublicKey> {
        return Ok(PublicKey::from_point(&scalarmult_base_noclamp(&self.as_scalar())?))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        return &self.0
    }

} impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(..)")
    }

} impl Drop for SecretKey {
    fn drop(&mut self) {
        //clear the key from memory
        self.zeroize()
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for SecretKey {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.0.to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match bytes.try_into() {
            Ok(key) => Ok(Self(key)),
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}

///The shared derivation `8 * a * R` between a transaction key and a private view key.
///
///Anyone holding the derivation can link outputs to the recipient.
///
///**This should not be publically shared.**
#[derive(Clone, PartialEq, Eq, Zeroize)]
pub struct KeyDerivation(
    pub(crate) [u8; 32]

); impl KeyDerivation {
    ///Import an already computed derivation point.
    pub fn from_bytes_array(bytes: [u8; 32]) -> Self {
        return Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        return &self.0
    }

    pub fn to_hex(&self) -> String {
        return hex::encode(self.0)
    }

} impl fmt::Debug for KeyDerivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyDerivation(..)")
    }

} impl Drop for KeyDerivation {
    fn drop(&mut self) {
        self.zeroize()
    }
}

///Opaque 8-byte identifier carried by an integrated address.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct PaymentId(
    pub [u8; PAYMENT_ID_SIZE]

); impl PaymentId {
    ///Generate a random payment id from the secure RNG.
    pub fn generate() -> Self {
        return Self(random_bytes::<PAYMENT_ID_SIZE>())
    }

    ///Parse a payment id from 16 hex characters.
    pub fn from_hex(value: &str) -> Result<Self> {
        return Ok(Self(parse_hex(value, "payment id")?))
    }

    pub fn to_hex(&self) -> String {
        return hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; PAYMENT_ID_SIZE] {
        return &self.0
    }

} impl fmt::Display for PaymentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }

} impl FromStr for PaymentId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        return Self::from_hex(s)
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for PaymentId {
    fn to_bytes(&self) -> Result<Vec<u8>, SerializationError> {
        return Ok(self.0.to_vec())
    }

    fn from_bytes(bytes: &[u8]) -> Result<Self, SerializationError> {
        return match bytes.try_into() {
            Ok(id) => Ok(Self(id)),
            Err(_) => Err(SerializationError::DecodingError)
        }
    }
}

///Public spend and view keys of a wallet, as carried by an address.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AddressKeys {
    pub spend_public_key: PublicKey,
    pub view_public_key: PublicKey

} impl AddressKeys {
    pub fn new(spend_public_key: PublicKey, view_public_key: PublicKey) -> Self {
        return Self{spend_public_key, view_public_key}
    }

    ///Parse both keys from hex.
    pub fn from_hex(spend_public_key: &str, view_public_key: &str) -> Result<Self> {
        return Ok(Self{
            spend_public_key: PublicKey(parse_hex(spend_public_key, "spend public key")?),
            view_public_key: PublicKey(parse_hex(view_public_key, "view public key")?)
        })
    }

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for AddressKeys {}

///Keys and payment id carried by an integrated address.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct IntegratedAddressKeys {
    pub keys: AddressKeys,
    pub payment_id: PaymentId

} #[cfg(feature = "to_bytes")] impl ToBytes<'_> for IntegratedAddressKeys {}
