use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use axum_extra::extract::cookie::CookieJar;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use super::UserData;
use crate::inbound::http::router::AppState;

/// Verify credentials, then hand the token back both in the body and as the session cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, ApiSuccess<LoginResponseData>), ApiError> {
    let Json(body) = body?;

    let session = state
        .user_service
        .login(&body.username, &body.password)
        .await?;

    let jar = jar.add(state.cookie_settings.session_cookie(session.token.clone()));

    Ok((
        jar,
        ApiSuccess::new(
            StatusCode::OK,
            "Login successful",
            LoginResponseData {
                token: session.token,
                expires_at: session.expires_at,
                user: (&session.user).into(),
            },
        ),
    ))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub user: UserData,
}
