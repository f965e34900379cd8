use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use validator::ValidationErrors;

use session_core::DomainError;

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Login id or password does not match")]
    LoginFailed,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// No session on a guarded path; `redirect_uri` is the path to return to.
    #[error("Login required")]
    LoginRequired { redirect_uri: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut parts: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    format!("{}: {}", field, e.message.as_deref().unwrap_or("invalid"))
                })
            })
            .collect();
        parts.sort();
        ApiError::Validation(parts.join(", "))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let mut login_uri = None;
        let (status, code) = match &self {
            ApiError::Validation(_) => {
                tracing::warn!("{}", message);
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            ApiError::LoginFailed => {
                tracing::warn!("{}", message);
                (StatusCode::UNAUTHORIZED, "LOGIN_FAIL")
            }
            ApiError::Unauthorized(_) => {
                tracing::debug!("{}", message);
                (StatusCode::UNAUTHORIZED, "UNAUTHORIZED")
            }
            ApiError::LoginRequired { redirect_uri } => {
                tracing::debug!("Login required for {}", redirect_uri);
                login_uri = Some(format!(
                    "/login?redirectURI={}",
                    urlencoding::encode(redirect_uri)
                ));
                (StatusCode::UNAUTHORIZED, "LOGIN_REQUIRED")
            }
            ApiError::Internal(_) => {
                tracing::error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        };

        let mut body = ApiResponse::<()>::error(code, &message);
        if let (Some(err), Some(uri)) = (body.error.as_mut(), login_uri) {
            err.login_uri = Some(uri);
        }
        (status, Json(body)).into_response()
    }
}
