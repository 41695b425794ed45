// Copyright 2026 The Chamhash Authors.
//
// Code is licensed under MIT Apache Dual License

use chamhash_rs::keypair::sample_scalar;
use chamhash_rs::message::encode_message;
use chamhash_rs::{ChameleonHash, KeyPair};

fn main() {
    let engine = ChameleonHash::new();
    let keys = KeyPair::generate();
    let identity = keys.public_bytes();

    let mut message =
        encode_message(None, "bafy-record-v1", true, &identity).unwrap();
    let mut r = sample_scalar();
    let published = engine.hash(&message, &r, &keys.public).unwrap();
    println!("published digest: {}", published.hash_hex());

    // Each record version replaces the previous one; the forged randomness
    // from one step becomes the original randomness of the next.
    for (version, content_ref) in
        ["bafy-record-v2", "bafy-record-v3", "bafy-record-v4"]
            .iter()
            .enumerate()
    {
        let next = encode_message(None, content_ref, true, &identity).unwrap();
        r = engine.forge(&r, keys.secret(), &message, &next).unwrap();
        message = next;

        let current = engine.hash(&message, &r, &keys.public).unwrap();
        println!("after redaction {}: {}", version + 2, current.hash_hex());
        assert_eq!(published.hash, current.hash);
    }

    println!("digest stable across the whole redaction chain");
}
