/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Plain addresses

use crate::internal_common::*;
use super::{
    AddressPrefix,
    ADDRESS_SIZE,
    ADDRESS_TEXT_PREFIX,
    ADDRESS_TEXT_LENGTH,
    has_text_shape,
    encode_payload,
    decode_payload,
    read_keys
};

///Encode a plain address from a tag, a flag and hex-encoded public keys.
///
///Each key must be exactly 64 hex characters.
pub fn encode_address(tag: u8, flag: u8, spend_public_key: &str, view_public_key: &str) -> Result<String> {
    let keys = AddressKeys::from_hex(spend_public_key, view_public_key)?;
    return encode_payload(AddressPrefix::new(tag, flag), &keys, None)
}

///Retrieve the public spend and view keys from a plain address.
///
///The text is checked against the plain-address shape before anything is decoded.
pub fn decode_address(address: &str) -> Result<AddressKeys> {
    return Ok(decode(address)?.1)
}

pub(super) fn decode(address: &str) -> Result<(AddressPrefix, AddressKeys)> {
    if !has_text_shape(address, ADDRESS_TEXT_PREFIX, ADDRESS_TEXT_LENGTH) {
        return Err(Error::InvalidFormat)
    }

    let payload = decode_payload(address, ADDRESS_SIZE)?;
    return read_keys(&payload)
}
