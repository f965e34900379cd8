//! Login check applied to every route except the public ones.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Paths reachable without a session.
const PUBLIC_PATHS: &[&str] = &["/", "/members/add", "/login", "/logout", "/health", "/error"];

/// Login check middleware - rejects requests without a live session
///
/// On success the resolved member is stored in the request extensions so
/// extractors further down do not hit the store a second time.
pub async fn login_check(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let path = request.uri().path();
    if is_public(path) {
        return Ok(next.run(request).await);
    }

    let member = jar
        .get(&state.cookie_name)
        .and_then(|cookie| state.sessions.get_session(cookie.value()));

    let Some(member) = member else {
        let redirect_uri = request
            .uri()
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| path.to_string());
        debug!("Unauthenticated request to {}", redirect_uri);
        return Err(ApiError::LoginRequired { redirect_uri });
    };

    request.extensions_mut().insert(member);
    Ok(next.run(request).await)
}

fn is_public(path: &str) -> bool {
    if PUBLIC_PATHS.contains(&path) {
        return true;
    }
    // /css/** and root-level /*.ico
    path == "/css"
        || path.starts_with("/css/")
        || (path.ends_with(".ico") && path.rfind('/') == Some(0))
}
