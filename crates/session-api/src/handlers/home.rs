//! Session-aware landing and "who am I" handlers

use axum::Json;
use serde::Serialize;

use session_core::Member;

use crate::extract::{MaybeMember, SessionMember};
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub logged_in: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<Member>,
}

/// Home handler - GET /
pub async fn home(MaybeMember(member): MaybeMember) -> Json<ApiResponse<HomeResponse>> {
    Json(ApiResponse::success(HomeResponse {
        logged_in: member.is_some(),
        member,
    }))
}

/// Current member handler - GET /members/me
pub async fn current_member(SessionMember(member): SessionMember) -> Json<ApiResponse<Member>> {
    Json(ApiResponse::success(member))
}
