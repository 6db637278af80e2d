// Copyright 2021 BlockPuppets developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use curve25519_dalek::constants::ED25519_BASEPOINT_TABLE;
use curve25519_dalek::scalar::Scalar;
#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

use crate::constants::PREFIX_LENGTH;
use crate::hash::{hash_challenge, hash_prefixed_message, hash_seed};
use crate::public_key::PublicKey;
use crate::seed::SecretKey;
use crate::signature::Signature;

/// The output of hashing and pruning a [`SecretKey`]: a secret scalar
/// `s`, a secret nonce `prefix`, and the cached public key `A = [s]B`.
///
/// `A` is always the point `[s]B` actually produces: it is computed
/// here, during expansion, and never supplied by a caller. Earlier
/// designs in this lineage accepted an externally supplied `A`; pairing
/// a different `A` with the same `s` across two signatures leaks the
/// secret scalar, so that parameter does not exist on this type at all.
pub struct ExpandedSecretKey {
    pub(crate) scalar: Scalar,
    pub(crate) prefix: [u8; PREFIX_LENGTH],
    pub(crate) public_key: PublicKey,
}

#[cfg(feature = "zeroize")]
impl Drop for ExpandedSecretKey {
    fn drop(&mut self) {
        self.scalar.zeroize();
        self.prefix.zeroize();
    }
}

impl ExpandedSecretKey {
    /// Hashes and prunes `seed` into `(s, prefix, A)` per RFC 8032
    /// §5.1.5:
    ///
    /// 1. `h = SHA-512(seed)`.
    /// 2. Split `h` into `lower = h[0..32]`, `upper = h[32..64]`.
    /// 3. Prune `lower`: clear its low 3 bits, clear its top bit, set
    ///    its second-highest bit.
    /// 4. `s` is `lower` interpreted as a little-endian integer,
    ///    deliberately *not* reduced mod `ell` here; downstream scalar
    ///    arithmetic takes it as a "bits" scalar in `[2^254, 2^255)`.
    /// 5. `prefix = upper`.
    /// 6. `A = [s]B`, cached compressed and decompressed.
    ///
    /// This costs one SHA-512 and one fixed-base scalar multiplication;
    /// callers that sign more than once with the same seed should cache
    /// the result rather than re-expanding.
    pub fn expand(seed: &SecretKey) -> Self {
        let (mut lower, upper) = hash_seed(seed.as_bytes());

        lower[0] &= 0xF8;
        lower[31] &= 0x7F;
        lower[31] |= 0x40;

        let scalar = Scalar::from_bits(lower);
        let point = &scalar * &ED25519_BASEPOINT_TABLE;

        ExpandedSecretKey {
            scalar,
            prefix: upper,
            public_key: PublicKey::from_point(point),
        }
    }

    /// The public key cached during expansion. Always equal to what
    /// `[s]B` would produce for this key's secret scalar.
    pub fn public_key(&self) -> PublicKey {
        self.public_key
    }

    /// Signs `message`, implementing RFC 8032 §5.1.6:
    ///
    /// 1. `r = SHA-512(prefix ‖ M)`, wide-reduced mod `ell`.
    /// 2. `R = compress([r]B)`.
    /// 3. `k = SHA-512(R ‖ A ‖ M)`, wide-reduced mod `ell`.
    /// 4. `S = (r + k*s) mod ell`.
    ///
    /// The `A` bound into the signature is always this key's own cached
    /// public key: there is no parameter to substitute a different one.
    /// Signing is deterministic: the same `(seed, message)` pair always
    /// produces the same signature, and only constant-time primitives
    /// (`ED25519_BASEPOINT_TABLE`, `Scalar` arithmetic, SHA-512) are used,
    /// never the variable-time routine `verify` uses.
    pub fn sign(&self, message: &[u8]) -> Signature {
        let r = hash_prefixed_message(&self.prefix, message);
        let r_point = &r * &ED25519_BASEPOINT_TABLE;
        let r_compressed = r_point.compress();

        let k = hash_challenge(r_compressed.as_bytes(), self.public_key.as_bytes(), message);

        let s = &(&k * &self.scalar) + &r;

        Signature::from_parts(r_compressed, s)
    }
}

impl signature::Signer<Signature> for ExpandedSecretKey {
    fn try_sign(&self, message: &[u8]) -> Result<Signature, signature::Error> {
        Ok(self.sign(message))
    }
}
