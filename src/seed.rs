// Copyright 2021 BlockPuppets developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::str::FromStr;

use hex::ToHex;
use rand::{CryptoRng, RngCore};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "serde")]
use serde_bytes::{ByteBuf as SerdeByteBuf, Bytes as SerdeBytes};
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants::KEY_BYTES_SIZE;
use crate::errors::SignatureError;

/// A 32-octet Ed25519 seed.
///
/// Every value of `[u8; 32]` is a valid seed: it is never used as a
/// scalar directly, only hashed (see [`ExpandedSecretKey::expand`]).
/// Ingress and egress always copy, so callers cannot mutate the bytes
/// backing a live `SecretKey` through a borrowed slice.
///
/// [`ExpandedSecretKey::expand`]: crate::ExpandedSecretKey::expand
// Deliberately not `Copy`: with the `zeroize` feature on, this type has
// a `Drop` impl, and `Copy` + `Drop` don't mix: implicit copies of
// secret material are exactly what that feature exists to prevent.
#[derive(Clone)]
pub struct SecretKey([u8; KEY_BYTES_SIZE]);

#[cfg(feature = "zeroize")]
impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl SecretKey {
    /// Generates a new seed from a cryptographically secure RNG.
    pub fn generate<R: CryptoRng + RngCore>(csprng: &mut R) -> Self {
        let mut bytes = [0u8; KEY_BYTES_SIZE];
        csprng.fill_bytes(&mut bytes);
        SecretKey(bytes)
    }

    /// Constructs a seed from exactly 32 octets, copying them.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != KEY_BYTES_SIZE {
            return Err(SignatureError::InvalidSeed);
        }
        let mut fixed = [0u8; KEY_BYTES_SIZE];
        fixed.copy_from_slice(bytes);
        Ok(SecretKey(fixed))
    }

    /// Returns a defensive copy of the 32 seed octets.
    pub fn to_bytes(&self) -> [u8; KEY_BYTES_SIZE] {
        self.0
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_BYTES_SIZE] {
        &self.0
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for SecretKey {}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(<32 bytes, redacted>)")
    }
}

impl fmt::LowerHex for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.encode_hex::<String>())
    }
}

impl FromStr for SecretKey {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = hex::decode(s).map_err(|_| SignatureError::InvalidSeed)?;
        SecretKey::from_bytes(&decoded)
    }
}

#[cfg(feature = "serde")]
impl Serialize for SecretKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SerdeBytes::new(&self.0).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for SecretKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        use serde::de::Error as _;
        let bytes = SerdeByteBuf::deserialize(deserializer)?;
        SecretKey::from_bytes(bytes.as_ref()).map_err(D::Error::custom)
    }
}
