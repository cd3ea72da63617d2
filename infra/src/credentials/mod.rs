//! Credential hashing implementations.

mod bcrypt_verifier;

pub use bcrypt_verifier::BcryptVerifier;
