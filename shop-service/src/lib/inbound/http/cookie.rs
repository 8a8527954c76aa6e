use axum_extra::extract::cookie::Cookie;
use axum_extra::extract::cookie::SameSite;

/// Name of the cookie carrying the session token.
pub const SESSION_COOKIE: &str = "token";

/// Attributes of the session cookie set at login.
#[derive(Debug, Clone, Copy)]
pub struct CookieSettings {
    pub max_age: time::Duration,
    pub secure: bool,
}

impl CookieSettings {
    /// `token_ttl` is the lifetime of the tokens the cookie carries.
    pub fn new(token_ttl: chrono::Duration, secure: bool) -> Self {
        Self {
            max_age: time::Duration::seconds(token_ttl.num_seconds()),
            secure,
        }
    }

    /// HTTP-only, SameSite=Lax cookie holding `token`.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .max_age(self.max_age)
            .build()
    }
}

/// Cookie matching the session cookie's path, for removal from a jar.
pub fn expired_session_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}
