use axum::http::StatusCode;
use axum_extra::extract::cookie::CookieJar;

use super::ApiSuccess;
use crate::inbound::http::cookie::expired_session_cookie;

/// Clear the session cookie. Tokens are not revoked server-side.
pub async fn logout(jar: CookieJar) -> (CookieJar, ApiSuccess<()>) {
    (
        jar.remove(expired_session_cookie()),
        ApiSuccess::new(StatusCode::OK, "Logout successful", ()),
    )
}
