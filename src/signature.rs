// Copyright 2021 BlockPuppets developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::convert::TryInto;
use std::fmt;
use std::str::FromStr;

use curve25519_dalek::edwards::CompressedEdwardsY;
use curve25519_dalek::scalar::Scalar;
use hex::ToHex;
#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};
#[cfg(feature = "serde")]
use serde_bytes::{ByteBuf as SerdeByteBuf, Bytes as SerdeBytes};

use crate::constants::SIGNATURE_LENGTH;
use crate::errors::SignatureError;

/// An Ed25519 signature: `R` (32 octets, compressed Edwards point) ‖
/// `S` (32 octets, a scalar always held canonical: `0 <= S < ell`).
///
/// `R` is kept only as its raw compressed bytes; this scheme's
/// verification equation never decompresses it (see
/// [`PublicKey::verify`](crate::PublicKey::verify)). `S` is cached as a
/// decoded [`Scalar`] so verification never re-parses it. The 64-octet
/// wire encoding is cached alongside both so `to_bytes`/`AsRef<[u8]>`
/// are free.
#[derive(Clone, Copy)]
#[allow(non_snake_case)]
pub struct Signature {
    bytes: [u8; SIGNATURE_LENGTH],
    S: Scalar,
}

impl Signature {
    pub(crate) fn from_parts(r: CompressedEdwardsY, s: Scalar) -> Self {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..32].copy_from_slice(r.as_bytes());
        bytes[32..].copy_from_slice(s.as_bytes());
        Signature { bytes, S: s }
    }

    pub(crate) fn r_bytes(&self) -> &[u8; 32] {
        array_ref32(&self.bytes[..32])
    }

    pub(crate) fn r_compressed(&self) -> CompressedEdwardsY {
        CompressedEdwardsY(*self.r_bytes())
    }

    pub(crate) fn s_scalar(&self) -> Scalar {
        self.S
    }

    /// Returns the 64-octet `R ‖ S` wire encoding.
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        self.bytes
    }

    /// Splits 64 octets into `R ‖ S`, validating that `S` is a canonical
    /// scalar (`S < ell`). `R` is not validated as a curve point here:
    /// RFC 8032 §5.1.7 step 1 treats "decoding" `R` as merely splitting
    /// bytes; an invalid `R` surfaces only as a verification failure.
    ///
    /// # Scalar malleability checking
    ///
    /// As originally specified, no checks whatsoever were performed for
    /// signature malleability. A later, hacky fix checked only that the
    /// three high bits of the last byte were clear, sufficient to bound
    /// `S` to 253 bits, but `ell` is itself roughly `2^252.5`, so that
    /// check alone still admits malleable encodings. RFC 8032 requires
    /// the full `S < ell` check, which this does via
    /// [`Scalar::from_canonical_bytes`] whenever the fast path (checking
    /// only the top nibble of the last byte) cannot already prove it.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(SignatureError::MalformedSignature);
        }

        let mut upper = [0u8; 32];
        upper.copy_from_slice(&bytes[32..]);
        let s = check_scalar(upper)?;

        let mut fixed = [0u8; SIGNATURE_LENGTH];
        fixed.copy_from_slice(bytes);

        Ok(Signature { bytes: fixed, S: s })
    }
}

fn array_ref32(slice: &[u8]) -> &[u8; 32] {
    slice.try_into().expect("slice is exactly 32 bytes")
}

/// Loads a canonical scalar from its 32-octet little-endian encoding,
/// rejecting any value `>= ell`.
///
/// Since this is only reached during signature decoding (i.e. upon
/// verification), a "succeed fast" trick applies: if the top four bits
/// of the last byte are unset, the value is necessarily less than `ell`
/// and can be loaded without a modular reduction. `ell` is a roughly
/// `2^252.5`-bit number, so this fast path covers about half of all
/// byte strings; the rest fall through to the full canonical check.
#[inline(always)]
pub(crate) fn check_scalar(bytes: [u8; 32]) -> Result<Scalar, SignatureError> {
    if bytes[31] & 240 == 0 {
        return Ok(Scalar::from_bits(bytes));
    }

    Scalar::from_canonical_bytes(bytes).ok_or(SignatureError::MalformedSignature)
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl Eq for Signature {}

impl signature::Signature for Signature {
    fn from_bytes(bytes: &[u8]) -> Result<Self, signature::Error> {
        Signature::from_bytes(bytes).map_err(Into::into)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", self.bytes.encode_hex::<String>())
    }
}

impl fmt::LowerHex for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bytes.encode_hex::<String>())
    }
}

impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = hex::decode(s).map_err(|_| SignatureError::MalformedSignature)?;
        Signature::from_bytes(&decoded)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Signature {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        SerdeBytes::new(&self.bytes).serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'d> Deserialize<'d> for Signature {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'d>,
    {
        use serde::de::Error as _;
        let bytes = SerdeByteBuf::deserialize(deserializer)?;
        Signature::from_bytes(bytes.as_ref()).map_err(D::Error::custom)
    }
}
