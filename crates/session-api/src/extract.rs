//! Extractors resolving the session cookie to a member.

use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;

use session_core::Member;

use crate::error::ApiError;
use crate::state::AppState;

/// Member of the current session; rejects with 401 when there is none.
pub struct SessionMember(pub Member);

/// Member of the current session, if any.
pub struct MaybeMember(pub Option<Member>);

impl FromRequestParts<AppState> for SessionMember {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        resolve_member(parts, state)
            .map(SessionMember)
            .ok_or_else(|| ApiError::Unauthorized("No active session".to_string()))
    }
}

impl FromRequestParts<AppState> for MaybeMember {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        Ok(MaybeMember(resolve_member(parts, state)))
    }
}

// Missing cookie and unknown token both mean "no session".
fn resolve_member(parts: &Parts, state: &AppState) -> Option<Member> {
    // Already resolved by the login check on this request.
    if let Some(member) = parts.extensions.get::<Member>() {
        return Some(member.clone());
    }
    let jar = CookieJar::from_headers(&parts.headers);
    let cookie = jar.get(&state.cookie_name)?;
    state.sessions.get_session(cookie.value())
}
