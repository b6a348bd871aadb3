/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! The chain's canonical unsigned varint.
//!
//! Seven bits per byte, least significant group first,
//! with the high bit set on every byte except the last.

///Maximum encoded length of a `u64`.
pub const MAX_VARINT_SIZE: usize = 10;

///Append the varint encoding of `value` to `out`.
pub fn write_varint(out: &mut Vec<u8>, mut value: u64) {
    while value >= 0x80 {
        out.push((value as u8 & 0x7f) | 0x80);
        value >>= 7;
    }
    out.push(value as u8);
}

///Return the varint encoding of `value`.
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAX_VARINT_SIZE);
    write_varint(&mut out, value);
    return out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_encodings() {
        assert_eq!(encode_varint(0), vec![0x00]);
        assert_eq!(encode_varint(127), vec![0x7f]);
        assert_eq!(encode_varint(128), vec![0x80, 0x01]);
        assert_eq!(encode_varint(300), vec![0xac, 0x02]);
        assert_eq!(
            encode_varint(u64::MAX),
            vec![0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]
        );
    }
}
