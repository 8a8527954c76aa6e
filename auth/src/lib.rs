//! Authentication utilities library
//!
//! Provides the credential primitives used by the service:
//! - Password hashing (Argon2id)
//! - Session token (JWT, HS256) issuance and validation
//! - Authentication coordination over an injected [`AuthSettings`]
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash).unwrap());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::{AuthSettings, Authenticator};
//!
//! let auth = Authenticator::new(&AuthSettings::with_default_ttl(
//!     "secret_key_at_least_32_bytes_long!",
//! ));
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! auth.verify_password("password123", Some(&hash)).unwrap();
//! let issued = auth.issue_token("user123").unwrap();
//!
//! // Validate token
//! let claims = auth.validate_token(&issued.access_token).unwrap();
//! assert_eq!(claims.subject(), "user123");
//! ```

pub mod authenticator;
pub mod jwt;
pub mod password;
pub mod settings;

pub use authenticator::AuthenticationError;
pub use authenticator::Authenticator;
pub use authenticator::IssuedToken;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use jwt::SessionClaims;
pub use password::PasswordError;
pub use password::PasswordHasher;
pub use settings::AuthSettings;
pub use settings::SettingsError;
pub use settings::DEFAULT_TOKEN_TTL_HOURS;
pub use settings::MAX_TOKEN_TTL_HOURS;
