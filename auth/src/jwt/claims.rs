use chrono::DateTime;
use chrono::Duration;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

/// Claims carried by a session token.
///
/// Only the subject and the RFC 7519 time claims are encoded; the server keeps no
/// record of issued tokens, so everything needed to validate one lives here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Subject (user identifier)
    pub sub: String,

    /// Issued at (Unix timestamp)
    pub iat: i64,

    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims for `subject`, valid for `ttl` starting at `issued_at`.
    pub fn issue(subject: impl ToString, issued_at: DateTime<Utc>, ttl: Duration) -> Self {
        let expires_at = issued_at + ttl;

        Self {
            sub: subject.to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    pub fn subject(&self) -> &str {
        &self.sub
    }

    /// Expiration as a timestamp, `None` if `exp` is out of chrono's range.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_issue_sets_window() {
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let claims = SessionClaims::issue("user123", issued_at, Duration::hours(72));

        assert_eq!(claims.subject(), "user123");
        assert_eq!(claims.iat, issued_at.timestamp());
        assert_eq!(claims.exp - claims.iat, 72 * 60 * 60);
        assert_eq!(
            claims.expires_at(),
            Some(Utc.with_ymd_and_hms(2024, 1, 4, 12, 0, 0).unwrap())
        );
    }
}
