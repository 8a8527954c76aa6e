use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;

use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::jwt::SessionClaims;
use crate::password::PasswordError;
use crate::password::PasswordHasher;
use crate::settings::AuthSettings;

/// Authentication coordinator combining password verification and session tokens.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// A freshly minted session token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl Authenticator {
    pub fn new(settings: &AuthSettings) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(settings.secret()),
            token_ttl: settings.token_ttl(),
        }
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a password against the stored hash of the account being logged into.
    ///
    /// `stored_hash` is `None` when no such account exists; a decoy verification still
    /// runs so both failure paths cost the same and return the same error.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Account missing or password mismatch
    /// * `PasswordError` - Stored hash could not be parsed
    pub fn verify_password(
        &self,
        password: &str,
        stored_hash: Option<&str>,
    ) -> Result<(), AuthenticationError> {
        let Some(stored_hash) = stored_hash else {
            self.password_hasher.verify_decoy(password);
            return Err(AuthenticationError::InvalidCredentials);
        };

        if self.password_hasher.verify(password, stored_hash)? {
            Ok(())
        } else {
            Err(AuthenticationError::InvalidCredentials)
        }
    }

    /// Mint a session token for `subject`, valid from now for the configured TTL.
    pub fn issue_token(&self, subject: impl ToString) -> Result<IssuedToken, JwtError> {
        self.issue_token_at(subject, Utc::now())
    }

    /// Mint a session token as if issued at `issued_at`.
    pub fn issue_token_at(
        &self,
        subject: impl ToString,
        issued_at: DateTime<Utc>,
    ) -> Result<IssuedToken, JwtError> {
        let claims = SessionClaims::issue(subject, issued_at, self.token_ttl);
        let access_token = self.jwt_handler.encode(&claims)?;
        let expires_at = claims
            .expires_at()
            .unwrap_or(issued_at + self.token_ttl);

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }

    /// Validate signature and expiry and return the session claims.
    ///
    /// # Errors
    /// * `JwtError` - Token malformed, forged or expired
    pub fn validate_token(&self, token: &str) -> Result<SessionClaims, JwtError> {
        self.jwt_handler.decode(token)
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}
