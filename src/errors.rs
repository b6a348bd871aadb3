/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use thiserror::Error;

///Encoding/serialization errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerializationError {
    ///Failure to serialize.
    #[error("Encoding error.")]
    EncodingError,
    ///Failure to deserialize.
    #[error("Decoding error.")]
    DecodingError,
}

///Address and key derivation errors.
///
///Every operation in this crate fails with exactly one of these kinds,
///on the first step that does not hold. Nothing is retried and no partial result is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    ///A caller-supplied argument is malformed:
    ///bad hex, a key that is not 32 bytes, or a payment id that is not 8 bytes.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    ///The address text does not have the shape of the requested address kind,
    ///or contains symbols outside the Base58 alphabet.
    #[error("Invalid address format.")]
    InvalidFormat,
    ///The decoded address does not have the expected number of bytes.
    #[error("Invalid address length: expected {expected} bytes, got {actual}.")]
    InvalidLength {
        expected: usize,
        actual: usize
    },
    ///The checksum embedded in the address does not match its payload.
    #[error("Invalid address checksum.")]
    ChecksumMismatch,
    ///The curve library rejected an input, e.g. a non-canonical point or a zero scalar.
    #[error("Cryptographic operation failed: {0}")]
    CryptoOperationFailed(&'static str),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
