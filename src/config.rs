/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Network address parameters.
//!
//! `AddressConfig` is meant to be embedded in a wallet's own configuration.
//! Missing fields fall back to the mainnet prefixes.

use crate::internal_common::*;
use crate::address::{
    AddressPrefix,
    ZanoAddress,
    MAINNET_ADDRESS_PREFIX,
    MAINNET_INTEGRATED_ADDRESS_PREFIX
};

///Prefixes used when encoding addresses for one network.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AddressConfig {
    pub address: AddressPrefix,
    pub integrated_address: AddressPrefix

} impl AddressConfig {
    ///Zano mainnet prefixes.
    pub const fn mainnet() -> Self {
        return Self {
            address: MAINNET_ADDRESS_PREFIX,
            integrated_address: MAINNET_INTEGRATED_ADDRESS_PREFIX
        }
    }

    ///Encode a plain address with the configured prefix.
    pub fn encode_address(&self, keys: &AddressKeys) -> Result<String> {
        return keys.to_address(self.address)
    }

    ///Encode an integrated address with the configured prefix and a random payment id.
    pub fn encode_integrated_address(&self, keys: &AddressKeys) -> Result<String> {
        return keys.to_integrated_address(self.integrated_address, &PaymentId::generate())
    }

    ///Does this parsed address carry one of the configured prefixes?
    pub fn is_own_network(&self, address: &ZanoAddress) -> bool {
        return match address {
            ZanoAddress::Standard{prefix, ..} => *prefix == self.address,
            ZanoAddress::Integrated{prefix, ..} => *prefix == self.integrated_address
        }
    }

} impl Default for AddressConfig {
    fn default() -> Self {
        return Self::mainnet()
    }
}
