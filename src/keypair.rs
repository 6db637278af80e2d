// Copyright 2021 BlockPuppets developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use rand::{CryptoRng, RngCore};
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "serde")]
use serde_bytes::{ByteBuf as SerdeByteBuf, Bytes as SerdeBytes};

use crate::constants::{KEYPAIR_LENGTH, KEY_BYTES_SIZE};
use crate::errors::SignatureError;
use crate::expanded::ExpandedSecretKey;
use crate::public_key::PublicKey;
use crate::seed::SecretKey;
use crate::signature::Signature;

/// A seed paired with its derived public key.
///
/// This is sugar over [`ExpandedSecretKey`]: it doesn't add signing
/// semantics, only convenience. `sign` expands the seed on every call
/// rather than caching the expansion; callers doing many signatures
/// with the same seed should hold an `ExpandedSecretKey` themselves
/// (see [`ExpandedSecretKey::expand`]) to pay the SHA-512-and-scalar-mult
/// cost once instead of per call.
#[derive(Clone)]
pub struct Keypair {
    seed: SecretKey,
    public_key: PublicKey,
}

impl Keypair {
    /// Generates a new random keypair from a cryptographically secure RNG.
    pub fn generate<R: CryptoRng + RngCore>(csprng: &mut R) -> Self {
        let seed = SecretKey::generate(csprng);
        Self::from_seed(seed)
    }

    /// Derives a keypair from an existing seed.
    pub fn from_seed(seed: SecretKey) -> Self {
        let public_key = ExpandedSecretKey::expand(&seed).public_key();
        Keypair { seed, public_key }
    }

    /// Constructs a keypair from its 64-octet `seed ‖ public_key`
    /// encoding. The public key half is re-derived and compared rather
    /// than trusted, so a mismatched pair is rejected rather than
    /// silently accepted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != KEYPAIR_LENGTH {
            return Err(SignatureError::InvalidSeed);
        }
        let seed = SecretKey::from_bytes(&bytes[..KEY_BYTES_SIZE])?;
        let claimed_public_key = PublicKey::from_bytes(&bytes[KEY_BYTES_SIZE..])?;

        let kp = Keypair::from_seed(seed);
        if kp.public_key != claimed_public_key {
            return Err(SignatureError::InvalidPublicKey);
        }
        Ok(kp)
    }

    /// Returns the 64-octet `seed ‖ public_key` encoding.
    pub fn to_bytes(&self) -> [u8; KEYPAIR_LENGTH] {
        let mut bytes = [0u8; KEYPAIR_LENGTH];
        bytes[..KEY_BYTES_SIZE].copy_from_slice(&self.seed.to_bytes());
        bytes[KEY_BYTES_SIZE..].copy_from_slice(&self.public_key.to_bytes());
        bytes
    }

    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    pub fn seed(&self) -> SecretKey {
        self.seed.clone()
    }

    /// Expands the seed and signs `message`. See
    /// [`ExpandedSecretKey::sign`] for the exact construction.
    pub fn sign(&self, message: &[u8]) -> Signature {
        ExpandedSecretKey::expand(&self.seed).sign(message)
    }

    /// Verifies `signature` over `message` against this keypair's public key.
    pub fn verify(&self, message: &[u8], signature: &Signature) -> bool {
        self.public_key.verify(message, signature)
    }
}

impl PartialEq for Keypair {
    fn eq(&self, other: &Self) -> bool {
        self.seed == other.seed
    }
}

impl Eq for Keypair {}

impl fmt::Debug for Keypair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Keypair {{ public_key: {:?}, .. }}", self.public_key)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Keypair {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SerdeBytes::new(&self.to_bytes()).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for Keypair {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        use serde::de::Error as _;
        let bytes = SerdeByteBuf::deserialize(deserializer)?;
        Keypair::from_bytes(bytes.as_ref()).map_err(D::Error::custom)
    }
}
