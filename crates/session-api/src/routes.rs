use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::{auth, health, home};
use crate::middleware::login_check;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health::health_check))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/members/me", get(home::current_member))
        .layer(middleware::from_fn_with_state(state.clone(), login_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
