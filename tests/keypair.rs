// Copyright 2021 BlockPuppets developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

#[cfg(test)]
pub mod tests {
    use ed25519_core::{ExpandedSecretKey, Keypair, PublicKey, SecretKey, Signature};
    use rand::rngs::OsRng;

    const KEYPAIR_BYTES_SIZE: usize = 64;
    const SIGNATURE_SIZE: usize = 64;

    pub mod tests_keypair {
        use super::*;

        #[test]
        fn from_seed_matches_generate_then_round_trip() {
            let keypair = Keypair::generate(&mut OsRng);

            let bytes = keypair.to_bytes();
            assert_eq!(bytes.len(), KEYPAIR_BYTES_SIZE);

            let decoded = Keypair::from_bytes(&bytes).unwrap();
            assert_eq!(decoded, keypair);
            assert_eq!(decoded.public_key(), keypair.public_key());
        }

        #[test]
        fn from_bytes_rejects_mismatched_public_key() {
            let keypair = Keypair::generate(&mut OsRng);
            let other = Keypair::generate(&mut OsRng);

            let mut bytes = keypair.to_bytes();
            bytes[32..].copy_from_slice(&other.public_key().to_bytes());

            assert!(Keypair::from_bytes(&bytes).is_err());
        }

        #[test]
        fn from_bytes_rejects_wrong_length() {
            assert!(Keypair::from_bytes(&[0u8; 63]).is_err());
            assert!(Keypair::from_bytes(&[0u8; 65]).is_err());
        }

        #[test]
        fn expand_public_key_matches_keypair_public_key() {
            let seed = SecretKey::generate(&mut OsRng);
            let expanded = ExpandedSecretKey::expand(&seed);
            let keypair = Keypair::from_seed(seed);

            assert_eq!(expanded.public_key(), keypair.public_key());
        }
    }

    pub mod tests_sign {
        use super::*;

        #[test]
        fn sign_then_verify_succeeds() {
            let keypair = Keypair::generate(&mut OsRng);
            let message = b"a message";

            let signature = keypair.sign(message);
            assert!(keypair.verify(message, &signature));
        }

        #[test]
        fn sign_is_deterministic_for_same_seed_and_message() {
            let seed = SecretKey::generate(&mut OsRng);
            let keypair1 = Keypair::from_seed(seed.clone());
            let keypair2 = Keypair::from_seed(seed);

            let message = b"repeatable";

            let signature1 = keypair1.sign(message);
            let signature2 = keypair2.sign(message);

            assert_eq!(signature1, signature2);
        }

        #[test]
        fn sign_differs_across_keypairs() {
            let keypair1 = Keypair::generate(&mut OsRng);
            let keypair2 = Keypair::generate(&mut OsRng);

            let message = b"same message";

            let signature1 = keypair1.sign(message);
            let signature2 = keypair2.sign(message);

            assert_ne!(signature1, signature2);
        }

        #[test]
        fn sign_differs_across_messages() {
            let keypair = Keypair::generate(&mut OsRng);

            let signature1 = keypair.sign(b"message one");
            let signature2 = keypair.sign(b"message two");

            assert_ne!(signature1, signature2);
        }
    }

    pub mod tests_verify {
        use super::*;

        #[test]
        fn verify_fails_against_different_keypair() {
            let keypair1 = Keypair::generate(&mut OsRng);
            let keypair2 = Keypair::generate(&mut OsRng);

            let message = b"payload";
            let signature = keypair1.sign(message);

            assert!(!keypair2.verify(message, &signature));
        }

        #[test]
        fn verify_fails_when_signature_bytes_are_tampered() {
            let keypair = Keypair::generate(&mut OsRng);
            let message = b"payload";

            let mut i = 0;
            while i < SIGNATURE_SIZE {
                let mut bytes = keypair.sign(message).to_bytes();
                bytes[i] ^= 0xff;

                // Flipping a bit in S can produce a non-canonical scalar,
                // in which case decode itself fails rather than verify
                // returning false; both are "rejected", so either is fine.
                if let Ok(signature) = Signature::from_bytes(&bytes) {
                    assert!(!keypair.verify(message, &signature));
                }
                i += 4;
            }
        }

        #[test]
        fn verify_fails_when_message_is_tampered() {
            let keypair = Keypair::generate(&mut OsRng);
            let mut message = *b"a fixed-length payload!!";

            let mut i = 0;
            while i < message.len() {
                let signature = keypair.sign(&message);
                message[i] ^= 0xff;

                assert!(!keypair.verify(&message, &signature));
                message[i] ^= 0xff;
                i += 4;
            }
        }

        #[test]
        fn verify_fails_when_public_key_is_tampered() {
            let keypair = Keypair::generate(&mut OsRng);
            let message = b"payload";
            let signature = keypair.sign(message);

            let mut public_key_bytes = keypair.public_key().to_bytes();
            let mut i = 0;
            while i < public_key_bytes.len() {
                public_key_bytes[i] ^= 0xff;

                if let Ok(tampered) = PublicKey::from_bytes(&public_key_bytes) {
                    assert!(!tampered.verify(message, &signature));
                }
                public_key_bytes[i] ^= 0xff;
                i += 4;
            }
        }

        #[test]
        fn cached_public_key_prevents_substitution() {
            // There is no signing entry point that takes an externally
            // supplied public key: ExpandedSecretKey::sign always binds
            // the A it computed during expansion, for every message.
            let seed = SecretKey::generate(&mut OsRng);
            let expanded = ExpandedSecretKey::expand(&seed);

            let signature_a = expanded.sign(b"message a");
            let signature_b = expanded.sign(b"message b");

            assert!(expanded.public_key().verify(b"message a", &signature_a));
            assert!(expanded.public_key().verify(b"message b", &signature_b));
        }
    }
}
