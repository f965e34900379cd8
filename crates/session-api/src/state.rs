use axum::extract::FromRef;
use std::sync::Arc;

use session_core::services::LoginService;
use session_core::Member;
use session_shared::config::SessionSettings;
use session_store::SessionStore;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionStore<Member>>,
    pub login_service: Arc<LoginService>,
    pub cookie_name: Arc<str>,
}

impl AppState {
    pub fn new(
        sessions: Arc<SessionStore<Member>>,
        login_service: Arc<LoginService>,
        settings: &SessionSettings,
    ) -> Self {
        Self {
            sessions,
            login_service,
            cookie_name: Arc::from(settings.cookie_name.as_str()),
        }
    }
}

impl FromRef<AppState> for Arc<SessionStore<Member>> {
    fn from_ref(state: &AppState) -> Self {
        state.sessions.clone()
    }
}
