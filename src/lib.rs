// Copyright 2021 BlockPuppets developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Ed25519 (PureEdDSA, RFC 8032)
//!
//! A from-scratch Ed25519 signing/verification layer built on top of
//! [`curve25519_dalek`], re-exported here as `curve25519` the same way
//! the workspace this crate grew out of always re-exported its
//! arithmetic dependency.
//!
//! Five pieces, leaves first:
//!
//! - [`Signature`]: the 64-octet `R ‖ S` codec.
//! - [`PublicKey`]: a decompressed point cached with its compression; `verify`.
//! - [`SecretKey`]: a 32-octet seed.
//! - [`ExpandedSecretKey`]: the pruned `(s, prefix, A)` triple; `sign`.
//! - the hash binding layer (crate-private: `hash.rs`).
//!
//! Only the bare PureEdDSA variant is implemented: no Ed25519ph, no
//! Ed25519ctx, no batch verification, no seed-phrase or HD key
//! derivation, no X25519. See `DESIGN.md` for why.
//!
//! ```
//! use ed25519_core::{Keypair, SecretKey};
//! use rand::rngs::OsRng;
//!
//! let keypair = Keypair::generate(&mut OsRng);
//! let message = b"a message";
//! let signature = keypair.sign(message);
//! assert!(keypair.verify(message, &signature));
//! # let _ = SecretKey::generate(&mut OsRng);
//! ```

pub extern crate curve25519_dalek as curve25519;
#[cfg(feature = "serde")]
extern crate serde_crate as serde;

mod constants;
mod errors;
mod expanded;
mod hash;
mod keypair;
mod public_key;
mod seed;
mod signature;

pub use self::constants::*;
pub use self::errors::SignatureError;
pub use self::expanded::ExpandedSecretKey;
pub use self::keypair::Keypair;
pub use self::public_key::PublicKey;
pub use self::seed::SecretKey;
pub use self::signature::Signature;

/// Frequently used types and traits, for `use ed25519_core::prelude::*;`.
pub mod prelude {
    pub use crate::{ExpandedSecretKey, Keypair, PublicKey, SecretKey, Signature, SignatureError};
    pub use signature::{Signer, Verifier};
}
