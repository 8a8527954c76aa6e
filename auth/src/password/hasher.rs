use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Plaintext used to build the decoy hash for unknown accounts.
const DECOY_PASSWORD: &str = "decoy-password-never-matches";

/// Salted one-way password hashing (Argon2id, PHC string output).
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    decoy_hash: OnceLock<String>,
}

impl PasswordHasher {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
            decoy_hash: OnceLock::new(),
        }
    }

    /// Hash a plaintext password with a freshly generated salt.
    ///
    /// # Errors
    /// * `HashingFailed` - Argon2 rejected the input or parameters
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored PHC hash.
    ///
    /// # Returns
    /// True if password matches, false otherwise
    ///
    /// # Errors
    /// * `MalformedHash` - Stored hash cannot be parsed
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, PasswordError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    /// Run a full verification against a decoy hash and discard the result.
    ///
    /// Called when no account exists, so a failed lookup costs as much as a wrong password.
    pub fn verify_decoy(&self, password: &str) {
        let decoy = self
            .decoy_hash
            .get_or_init(|| self.hash(DECOY_PASSWORD).unwrap_or_default());

        let _ = self.verify(password, decoy);
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
