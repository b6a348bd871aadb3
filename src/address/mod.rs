/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Zano address codec.
//!
//! A plain address is
//!
//! `tag (1) | flag (1) | spend public key (32) | view public key (32) | checksum (4)`
//!
//! and an integrated address inserts an 8-byte payment id before the checksum.
//! The checksum is the first 4 bytes of the Keccak-256 hash of everything before it,
//! and the whole buffer is written in the chain's block Base58.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::internal_common::*;

mod standard;
mod integrated;

pub use standard::{
    encode_address,
    decode_address
};
pub use integrated::{
    encode_integrated_address,
    encode_integrated_address_with_payment_id,
    decode_integrated_address
};

pub const TAG_SIZE: usize = 1;
pub const FLAG_SIZE: usize = 1;
pub const SPEND_KEY_SIZE: usize = 32;
pub const VIEW_KEY_SIZE: usize = 32;

///Offset of the spend public key within the address buffer.
pub(crate) const SPEND_KEY_OFFSET: usize = TAG_SIZE + FLAG_SIZE;
///Offset of the view public key within the address buffer.
pub(crate) const VIEW_KEY_OFFSET: usize = SPEND_KEY_OFFSET + SPEND_KEY_SIZE;
///Offset of the payment id within an integrated address buffer.
pub(crate) const PAYMENT_ID_OFFSET: usize = VIEW_KEY_OFFSET + VIEW_KEY_SIZE;

///Decoded size of a plain address, checksum included.
pub const ADDRESS_SIZE: usize = PAYMENT_ID_OFFSET + CHECKSUM_SIZE;
///Decoded size of an integrated address, checksum included.
pub const INTEGRATED_ADDRESS_SIZE: usize = ADDRESS_SIZE + PAYMENT_ID_SIZE;

///Textual shape of a plain address: `Z` followed by 96 alphanumeric characters.
pub const ADDRESS_TEXT_PREFIX: &str = "Z";
pub const ADDRESS_TEXT_LENGTH: usize = 97;
///Textual shape of an integrated address: `iZ` followed by 106 alphanumeric characters.
pub const INTEGRATED_ADDRESS_TEXT_PREFIX: &str = "iZ";
pub const INTEGRATED_ADDRESS_TEXT_LENGTH: usize = 108;

///The two leading bytes of an address.
///
///On the Zano network these are the varint encoding of the Base58 prefix,
///which is what makes the text start with `Zx` or `iZ`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AddressPrefix {
    pub tag: u8,
    pub flag: u8

} impl AddressPrefix {
    pub const fn new(tag: u8, flag: u8) -> Self {
        return Self{tag, flag}
    }
}

///Prefix of mainnet plain addresses (Base58 prefix 197).
pub const MAINNET_ADDRESS_PREFIX: AddressPrefix = AddressPrefix::new(0xc5, 0x01);
///Prefix of mainnet integrated addresses (Base58 prefix 0x3678).
pub const MAINNET_INTEGRATED_ADDRESS_PREFIX: AddressPrefix = AddressPrefix::new(0xf8, 0x6c);

///Does `address` look like `prefix` followed by alphanumeric characters, `length` in total?
pub(crate) fn has_text_shape(address: &str, prefix: &str, length: usize) -> bool {
    return address.len() == length
        && address.starts_with(prefix)
        && address[prefix.len()..].bytes().all(|c| c.is_ascii_alphanumeric())
}

///Assemble `prefix | keys | payment id`, append the checksum and Base58 encode the result.
pub(crate) fn encode_payload(
    prefix: AddressPrefix, keys: &AddressKeys, payment_id: Option<&PaymentId>
) -> Result<String> {
    let mut buf = Vec::with_capacity(INTEGRATED_ADDRESS_SIZE);
    buf.push(prefix.tag);
    buf.push(prefix.flag);
    buf.extend_from_slice(keys.spend_public_key.as_bytes());
    buf.extend_from_slice(keys.view_public_key.as_bytes());
    if let Some(payment_id) = payment_id {
        buf.extend_from_slice(payment_id.as_bytes());
    }

    let checksum = checksum(&buf);
    buf.extend_from_slice(&checksum);

    let address = match base58_monero::encode(&buf) {
        Ok(address) => address,
        Err(_) => return Err(Error::InvalidFormat)
    };
    trace!(size = buf.len(), "encoded address");
    return Ok(address)
}

///Base58 decode `address`, check its length and checksum,
///and return the payload with the checksum stripped.
pub(crate) fn decode_payload(address: &str, expected_size: usize) -> Result<Vec<u8>> {
    let mut buf = match base58_monero::decode(address) {
        Ok(buf) => buf,
        Err(_) => return Err(Error::InvalidFormat)
    };
    if buf.len() != expected_size {
        return Err(Error::InvalidLength{expected: expected_size, actual: buf.len()})
    }

    let payload_size = expected_size - CHECKSUM_SIZE;
    if checksum(&buf[..payload_size])[..] != buf[payload_size..] {
        return Err(Error::ChecksumMismatch)
    }

    buf.truncate(payload_size);
    trace!(size = expected_size, "decoded address");
    return Ok(buf)
}

///Read the prefix and both public keys from a checked payload.
pub(crate) fn read_keys(payload: &[u8]) -> Result<(AddressPrefix, AddressKeys)> {
    if payload.len() < PAYMENT_ID_OFFSET {
        return Err(Error::InvalidLength{expected: PAYMENT_ID_OFFSET, actual: payload.len()})
    }

    let mut spend = [0u8; SPEND_KEY_SIZE];
    spend.copy_from_slice(&payload[SPEND_KEY_OFFSET..VIEW_KEY_OFFSET]);
    let mut view = [0u8; VIEW_KEY_SIZE];
    view.copy_from_slice(&payload[VIEW_KEY_OFFSET..PAYMENT_ID_OFFSET]);

    let keys = AddressKeys::new(PublicKey(spend), PublicKey(view));
    return Ok((AddressPrefix::new(payload[0], payload[1]), keys))
}

impl AddressKeys {
    ///Encode these keys as a plain address with the given prefix.
    pub fn to_address(&self, prefix: AddressPrefix) -> Result<String> {
        return encode_payload(prefix, self, None)
    }

    ///Encode these keys as an integrated address with the given prefix and payment id.
    pub fn to_integrated_address(&self, prefix: AddressPrefix, payment_id: &PaymentId) -> Result<String> {
        return encode_payload(prefix, self, Some(payment_id))
    }
}

///Any parsed Zano address, together with the prefix it was encoded with.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ZanoAddress {
    Standard {
        prefix: AddressPrefix,
        keys: AddressKeys
    },
    Integrated {
        prefix: AddressPrefix,
        keys: IntegratedAddressKeys
    }

} impl ZanoAddress {
    ///Parse either kind of address, dispatching on its textual shape.
    pub fn parse(address: &str) -> Result<Self> {
        if has_text_shape(address, INTEGRATED_ADDRESS_TEXT_PREFIX, INTEGRATED_ADDRESS_TEXT_LENGTH) {
            let (prefix, keys) = integrated::decode(address)?;
            return Ok(Self::Integrated{prefix, keys})
        }
        let (prefix, keys) = standard::decode(address)?;
        return Ok(Self::Standard{prefix, keys})
    }

    pub fn prefix(&self) -> AddressPrefix {
        return match self {
            Self::Standard{prefix, ..} => *prefix,
            Self::Integrated{prefix, ..} => *prefix
        }
    }

    ///The public spend and view keys of the address.
    pub fn keys(&self) -> &AddressKeys {
        return match self {
            Self::Standard{keys, ..} => keys,
            Self::Integrated{keys, ..} => &keys.keys
        }
    }

    ///The payment id, for integrated addresses.
    pub fn payment_id(&self) -> Option<&PaymentId> {
        return match self {
            Self::Standard{..} => None,
            Self::Integrated{keys, ..} => Some(&keys.payment_id)
        }
    }

    ///Encode this address back to text.
    pub fn encode(&self) -> Result<String> {
        return encode_payload(self.prefix(), self.keys(), self.payment_id())
    }

} impl FromStr for ZanoAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        return Self::parse(s)
    }

} impl fmt::Display for ZanoAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let address = self.encode().map_err(|_| fmt::Error)?;
        write!(f, "{}", address)
    }
}
