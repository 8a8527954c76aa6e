use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::middleware::Next;
use axum::response::IntoResponse;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;

use super::cookie::SESSION_COOKIE;
use super::handlers::ApiError;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

/// Extension type to store authenticated user ID in request extensions
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates the session token and adds the user to request extensions.
///
/// The `token` cookie is tried first, then `Authorization: Bearer`. A stale cookie does not
/// shadow a valid header.
pub async fn authenticate(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let candidates = candidate_tokens(&jar, &req);
    if candidates.is_empty() {
        tracing::debug!(uri = %req.uri(), "Request without session token");
        return Err(ApiError::Unauthorized("Missing session token".to_string()).into_response());
    }

    let mut user_id = None;
    for (carrier, token) in candidates {
        match state.user_service.validate_token(&token).await {
            Ok(id) => {
                user_id = Some(id);
                break;
            }
            Err(e) => tracing::warn!(error = %e, carrier, "Session token rejected"),
        }
    }

    let user_id = user_id.ok_or_else(|| {
        ApiError::Unauthorized("Invalid or expired token".to_string()).into_response()
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Tokens in the order they are tried, tagged with where they came from.
fn candidate_tokens(jar: &CookieJar, req: &Request) -> Vec<(&'static str, String)> {
    let cookie = jar
        .get(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|token| !token.is_empty());

    let bearer = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string);

    [("cookie", cookie), ("bearer", bearer)]
        .into_iter()
        .filter_map(|(carrier, token)| token.map(|t| (carrier, t)))
        .collect()
}
