// Copyright 2021 BlockPuppets developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! The two hash compositions RFC 8032 §5.1.6/§5.1.7 prescribe for
//! PureEdDSA, centralized so sign and verify cannot drift apart on the
//! (empty) dom2 string or the hash-to-scalar reduction.

use curve25519_dalek::scalar::Scalar;
use sha2::{Digest, Sha512};

/// `r = SHA-512(prefix ‖ M)`, wide-reduced into `[0, ell)`.
///
/// This is RFC 8032 §5.1.6 step 2 for the empty-context PureEdDSA
/// variant: no dom2 prefix, no prehash of `M`.
pub(crate) fn hash_prefixed_message(prefix: &[u8; 32], message: &[u8]) -> Scalar {
    let mut h = Sha512::new();
    h.update(prefix);
    h.update(message);
    Scalar::from_hash(h)
}

/// `k = SHA-512(R ‖ A ‖ M)`, wide-reduced into `[0, ell)`.
///
/// This is the challenge scalar shared by §5.1.6 step 4 (signing) and
/// §5.1.7 step 2 (verification).
pub(crate) fn hash_challenge(r_bytes: &[u8; 32], a_bytes: &[u8; 32], message: &[u8]) -> Scalar {
    let mut h = Sha512::new();
    h.update(r_bytes);
    h.update(a_bytes);
    h.update(message);
    Scalar::from_hash(h)
}

/// `SHA-512(seed)`, split into the low/high halves expansion needs.
///
/// Returns `(lower, upper)` where `lower` becomes the pruned secret
/// scalar bits and `upper` becomes the nonce prefix (RFC 8032 §5.1.5).
pub(crate) fn hash_seed(seed: &[u8; 32]) -> ([u8; 32], [u8; 32]) {
    let mut h = Sha512::new();
    h.update(seed);
    let digest = h.finalize();

    let mut lower = [0u8; 32];
    let mut upper = [0u8; 32];
    lower.copy_from_slice(&digest[..32]);
    upper.copy_from_slice(&digest[32..]);
    (lower, upper)
}
