//! Credential verification seam for user authentication.

/// Collaborator that checks a supplied credential against the stored one.
///
/// The core ships [`ExactMatchVerifier`]; infrastructure can substitute a
/// hashing implementation (bcrypt and the like) without the service
/// noticing. The stored string's format is whatever the paired verifier
/// produced at registration time.
pub trait CredentialVerifier: Send + Sync {
    /// Returns `true` iff the supplied credential matches the stored one
    fn verify(&self, supplied: &str, stored: &str) -> bool;
}

/// Plain string comparison, the core's default verifier
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatchVerifier;

impl CredentialVerifier for ExactMatchVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        supplied == stored
    }
}
