/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Integrated addresses, which carry a payment id next to the keys.
//!
//! The checksum covers the payment id, so every payment id yields a different text.

use crate::internal_common::*;
use super::{
    AddressPrefix,
    INTEGRATED_ADDRESS_SIZE,
    INTEGRATED_ADDRESS_TEXT_PREFIX,
    INTEGRATED_ADDRESS_TEXT_LENGTH,
    PAYMENT_ID_OFFSET,
    has_text_shape,
    encode_payload,
    decode_payload,
    read_keys
};

///Encode an integrated address with a freshly generated random payment id.
///
///Two calls with the same keys return different addresses.
///Use `encode_integrated_address_with_payment_id` to choose the payment id.
pub fn encode_integrated_address(
    tag: u8, flag: u8, spend_public_key: &str, view_public_key: &str
) -> Result<String> {
    let keys = AddressKeys::from_hex(spend_public_key, view_public_key)?;
    return encode_payload(AddressPrefix::new(tag, flag), &keys, Some(&PaymentId::generate()))
}

///Encode an integrated address with the given payment id.
pub fn encode_integrated_address_with_payment_id(
    tag: u8, flag: u8, spend_public_key: &str, view_public_key: &str, payment_id: &PaymentId
) -> Result<String> {
    let keys = AddressKeys::from_hex(spend_public_key, view_public_key)?;
    return encode_payload(AddressPrefix::new(tag, flag), &keys, Some(payment_id))
}

///Retrieve the public spend and view keys, and the payment id, from an integrated address.
pub fn decode_integrated_address(address: &str) -> Result<IntegratedAddressKeys> {
    return Ok(decode(address)?.1)
}

pub(super) fn decode(address: &str) -> Result<(AddressPrefix, IntegratedAddressKeys)> {
    if !has_text_shape(address, INTEGRATED_ADDRESS_TEXT_PREFIX, INTEGRATED_ADDRESS_TEXT_LENGTH) {
        return Err(Error::InvalidFormat)
    }

    let payload = decode_payload(address, INTEGRATED_ADDRESS_SIZE)?;
    let (prefix, keys) = read_keys(&payload)?;

    let mut payment_id = [0u8; PAYMENT_ID_SIZE];
    payment_id.copy_from_slice(&payload[PAYMENT_ID_OFFSET..]);
    return Ok((prefix, IntegratedAddressKeys{keys, payment_id: PaymentId(payment_id)}))
}
