// Copyright 2026 The Chamhash Authors.
//
// Code is licensed under MIT Apache Dual License

use chamhash_rs::keypair::sample_scalar;
use chamhash_rs::message::encode_message;
use chamhash_rs::{ChameleonHash, KeyPair};

fn main() {
    let engine = ChameleonHash::new();

    // The record owner generates the trapdoor key pair once.
    let keys = KeyPair::generate();
    let identity = keys.public_bytes();

    // First version of the record: storage reference plus active consent.
    let m1 = encode_message(None, "bafy-record-v1", true, &identity).unwrap();
    let r1 = sample_scalar();
    let published = engine.hash(&m1, &r1, &keys.public).unwrap();

    println!("published digest: {}", published.hash_hex());

    // Redaction: new storage reference, consent revoked. The trapdoor
    // holder forges the randomness so the published digest does not move.
    let m2 = encode_message(None, "bafy-record-v2", false, &identity).unwrap();
    let r2 = engine.forge(&r1, keys.secret(), &m1, &m2).unwrap();
    let redacted = engine.hash(&m2, &r2, &keys.public).unwrap();

    println!("redacted digest:  {}", redacted.hash_hex());

    assert_eq!(published.hash, redacted.hash);
    assert!(engine.verify(&m2, &r2, &keys.public, &published.hash).unwrap());

    // Without the trapdoor, a fresh randomness does not reproduce it.
    let random_attempt = engine.hash(&m2, &sample_scalar(), &keys.public).unwrap();
    assert_ne!(published.hash, random_attempt.hash);

    println!("digest unchanged across redaction");
}
