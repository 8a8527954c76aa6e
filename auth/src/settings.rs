use chrono::Duration;
use thiserror::Error;

/// Session lifetime used when none is configured.
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 72;

/// Longest session lifetime accepted (one year).
pub const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// Error for rejected authentication settings.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Token lifetime must be between 1 and {max} hours, got {actual}")]
    TokenTtlOutOfRange { max: i64, actual: i64 },
}

/// Injected authentication configuration.
///
/// Built once at startup from the service configuration and handed to
/// [`Authenticator::new`](crate::Authenticator::new); nothing in this crate reads the
/// process environment.
#[derive(Clone)]
pub struct AuthSettings {
    secret: Vec<u8>,
    token_ttl: Duration,
}

impl AuthSettings {
    /// # Errors
    /// * `TokenTtlOutOfRange` - Lifetime not positive, or longer than `MAX_TOKEN_TTL_HOURS`
    pub fn new(secret: impl AsRef<[u8]>, token_ttl_hours: i64) -> Result<Self, SettingsError> {
        if !(1..=MAX_TOKEN_TTL_HOURS).contains(&token_ttl_hours) {
            return Err(SettingsError::TokenTtlOutOfRange {
                max: MAX_TOKEN_TTL_HOURS,
                actual: token_ttl_hours,
            });
        }

        Ok(Self {
            secret: secret.as_ref().to_vec(),
            token_ttl: Duration::hours(token_ttl_hours),
        })
    }

    pub fn with_default_ttl(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
            token_ttl: Duration::hours(DEFAULT_TOKEN_TTL_HOURS),
        }
    }

    pub fn secret(&self) -> &[u8] {
        &self.secret
    }

    pub fn token_ttl(&self) -> Duration {
        self.token_ttl
    }
}

impl std::fmt::Debug for AuthSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthSettings")
            .field("secret", &"<redacted>")
            .field("token_ttl", &self.token_ttl)
            .finish()
    }
}
