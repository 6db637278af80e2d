// Copyright 2021 BlockPuppets developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;
use std::str::FromStr;

use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use hex::ToHex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "serde")]
use serde_bytes::{ByteBuf as SerdeByteBuf, Bytes as SerdeBytes};
use signature::Verifier;

use crate::constants::KEY_BYTES_SIZE;
use crate::errors::SignatureError;
use crate::hash::hash_challenge;
use crate::signature::Signature;

/// A decompressed Edwards point `A` paired with its canonical 32-octet
/// compression `Aenc`.
///
/// The decompressed form is cached on decode so `verify` never pays
/// decompression cost twice. Equality and hex formatting both go
/// through `Aenc`.
#[derive(Clone, Copy)]
pub struct PublicKey {
    pub(crate) compressed: CompressedEdwardsY,
    pub(crate) point: EdwardsPoint,
}

impl PublicKey {
    /// Wraps an already-decompressed point together with its known
    /// compression. Used internally by expansion, where the point was
    /// just computed as `[s]B` and re-decompressing it would be wasted
    /// work.
    pub(crate) fn from_point(point: EdwardsPoint) -> Self {
        PublicKey {
            compressed: point.compress(),
            point,
        }
    }

    /// Decodes 32 octets as a compressed Edwards point. Fails unless the
    /// input is a valid curve encoding.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != KEY_BYTES_SIZE {
            return Err(SignatureError::InvalidPublicKey);
        }
        let mut fixed = [0u8; KEY_BYTES_SIZE];
        fixed.copy_from_slice(bytes);

        let compressed = CompressedEdwardsY(fixed);
        let point = compressed
            .decompress()
            .ok_or(SignatureError::InvalidPublicKey)?;

        Ok(PublicKey { compressed, point })
    }

    /// Returns a defensive copy of the 32-octet canonical compression.
    pub fn to_bytes(&self) -> [u8; KEY_BYTES_SIZE] {
        self.compressed.to_bytes()
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_BYTES_SIZE] {
        self.compressed.as_bytes()
    }

    /// Implements RFC 8032 §5.1.7: computes `k`, then checks
    /// `[S]B - [k]A` compresses back to the `R` carried in `signature`.
    ///
    /// This is the cheap, cofactorless equation with byte-exact
    /// recompression-and-compare (the "strict" policy this crate fixes;
    /// see the design notes on the cofactored/ZIP-215 Open Question).
    /// No internal failure (malformed `R`, out-of-range `S`) ever
    /// escapes as anything but `false`.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        let k = hash_challenge(signature.r_bytes(), self.as_bytes(), message);

        let minus_a = -self.point;
        let r_prime =
            EdwardsPoint::vartime_double_scalar_mul_basepoint(&k, &minus_a, &signature.s_scalar());

        r_prime.compress() == signature.r_compressed()
    }
}

impl Verifier<Signature> for PublicKey {
    fn verify(&self, message: &[u8], signature: &Signature) -> Result<(), signature::Error> {
        if PublicKey::verify(self, message, signature) {
            Ok(())
        } else {
            Err(SignatureError::MalformedSignature.into())
        }
    }
}

impl PartialEq for PublicKey {
    fn eq(&self, other: &Self) -> bool {
        self.compressed == other.compressed
    }
}

impl Eq for PublicKey {}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.compressed.to_bytes().encode_hex::<String>())
    }
}

impl fmt::LowerHex for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.compressed.to_bytes().encode_hex::<String>())
    }
}

impl FromStr for PublicKey {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = hex::decode(s).map_err(|_| SignatureError::InvalidPublicKey)?;
        PublicKey::from_bytes(&decoded)
    }
}

#[cfg(feature = "serde")]
impl Serialize for PublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SerdeBytes::new(&self.to_bytes()).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for PublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        use serde::de::Error as _;
        let bytes = SerdeByteBuf::deserialize(deserializer)?;
        PublicKey::from_bytes(bytes.as_ref()).map_err(D::Error::custom)
    }
}
