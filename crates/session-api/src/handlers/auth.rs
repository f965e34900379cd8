// ============================================================================
// Session API - Auth Handlers
// File: crates/session-api/src/handlers/auth.rs
// ============================================================================
//! Login and logout handlers

use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::{
    cookie::{Cookie, CookieJar},
    WithRejection,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

use session_core::Member;
use session_shared::constants::DEFAULT_REDIRECT_URI;

use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;

/// Login request payload
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub login_id: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "must not be empty"))]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct RedirectParams {
    #[serde(rename = "redirectURI")]
    pub redirect_uri: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub member: Member,
    pub redirect_uri: String,
}

/// Login handler - POST /login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Query(params): Query<RedirectParams>,
    WithRejection(Json(form), _): WithRejection<Json<LoginForm>, ApiError>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    form.validate()?;

    let member = state
        .login_service
        .login(&form.login_id, &form.password)
        .await?
        .ok_or(ApiError::LoginFailed)?;

    // A browser logging in again must not leave its previous session behind.
    if let Some(previous) = jar.get(&state.cookie_name) {
        state.sessions.expire(previous.value());
    }

    let token = state.sessions.create_session(member.clone());
    info!("Session {} created for member {}", token.short(), member.id);

    // No Max-Age: session cookie, dropped when the browser closes.
    let cookie = Cookie::build((state.cookie_name.to_string(), token.into_string()))
        .path("/")
        .http_only(true);

    let redirect_uri = safe_redirect(params.redirect_uri.as_deref());
    Ok((
        jar.add(cookie),
        Json(ApiResponse::success(LoginResponse { member, redirect_uri })),
    ))
}

/// Logout handler - POST /logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<()>>) {
    let Some(cookie) = jar.get(&state.cookie_name) else {
        return (jar, Json(ApiResponse::success_with_message((), "No active session")));
    };

    if state.sessions.expire(cookie.value()) {
        info!("Session logged out");
    }

    let jar = jar.remove(Cookie::build((state.cookie_name.to_string(), "")).path("/"));
    (jar, Json(ApiResponse::success_with_message((), "Logged out successfully")))
}

/// Only same-site absolute paths are honored.
fn safe_redirect(requested: Option<&str>) -> String {
    match requested {
        Some(uri) if uri.starts_with('/') && !uri.starts_with("//") => uri.to_string(),
        _ => DEFAULT_REDIRECT_URI.to_string(),
    }
}
