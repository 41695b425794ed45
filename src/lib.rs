// Copyright 2026 The Chamhash Authors.
//
// Code is licensed under MIT Apache Dual License

pub mod chameleon;
pub mod curve;
pub mod error;
pub mod keypair;
pub mod message;

pub use chameleon::{ChameleonDigest, ChameleonHash};
pub use curve::Secp256k1Group;
pub use error::{Error, Result};
pub use keypair::KeyPair;
