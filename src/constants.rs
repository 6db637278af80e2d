// Copyright 2021 BlockPuppets developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

/// The length of an Ed25519 seed, public key, or secret scalar encoding, in bytes.
pub const KEY_BYTES_SIZE: usize = 32;

/// The length of an Ed25519 signature, in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// The length of a `Keypair` (seed ‖ public key) encoding, in bytes.
pub const KEYPAIR_LENGTH: usize = KEY_BYTES_SIZE + KEY_BYTES_SIZE;

/// The length of the nonce/prefix half of an expanded secret key, in bytes.
pub const PREFIX_LENGTH: usize = 32;
