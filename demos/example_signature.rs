use std::str::FromStr;

use ed25519_core::{Keypair, SecretKey};

fn main() {
    let data = b"NEM is awesome !";
    let seed_hex = "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60";

    let seed = SecretKey::from_str(seed_hex).unwrap();
    let keypair = Keypair::from_seed(seed);
    println!("public_key: {:x}", keypair.public_key());

    let signature = keypair.sign(data);
    println!("signature: {:x}", signature);

    let verified = keypair.verify(data, &signature);
    println!("verify: {:?}", verified);
}
