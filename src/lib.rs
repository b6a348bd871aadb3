/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

#[macro_use]
extern crate lazy_static;


//internal modules
mod types;
pub use types::*;
mod tobytes;
#[cfg(feature = "to_bytes")]
pub use tobytes::ToBytes;


//uncommon public modules
pub mod hashes;
pub mod varint;


//"normal" public modules
pub mod errors;
pub mod curve;
pub mod config;

pub mod derivation;
pub mod address;


pub mod common {
    //! A collection of commonly-used things in this crate.
    //! Errors, key types, to/from bytes, and elliptic curve primitives are all included.
    //!
    //! This is intended for situations where you don't want to bother with
    //! manually specifying everything you need,
    //! such as tests, examples and mockups.
    //!
    //! Use `common::*` if you wish to automatically import everything.

    pub use crate::{
        types::*, errors::*, tobytes::*, curve::*
    };
}


mod internal_common {
    //! Similar to `common`, but for internal purposes only.
    //! This includes everything in `common`, as well as internal/less-common modules.

    pub use crate::{
        common::*, hashes::*, varint::*
    };
}
