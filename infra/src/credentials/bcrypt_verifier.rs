//! Bcrypt-backed implementation of the credential verification seam

use tracing::warn;

use vs_core::errors::{DomainError, DomainResult};
use vs_core::services::user::CredentialVerifier;

/// Verifies credentials against bcrypt hashes.
///
/// Pair this with [`hash`](BcryptVerifier::hash) at registration time: store
/// the hash as the user's password and the user service never sees a
/// plaintext-vs-plaintext comparison. A stored value that is not a valid
/// bcrypt hash simply fails verification.
pub struct BcryptVerifier {
    /// Bcrypt cost factor
    cost: u32,
}

impl BcryptVerifier {
    /// Create a verifier with a custom cost factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext credential for storage
    pub fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash credential: {}", e),
        })
    }
}

impl Default for BcryptVerifier {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl CredentialVerifier for BcryptVerifier {
    fn verify(&self, supplied: &str, stored: &str) -> bool {
        match bcrypt::verify(supplied, stored) {
            Ok(matches) => matches,
            Err(e) => {
                warn!(error = %e, "stored credential is not a valid bcrypt hash");
                false
            }
        }
    }
}
