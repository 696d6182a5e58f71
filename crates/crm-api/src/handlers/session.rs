//! Session handlers

use axum::{extract::State, http::StatusCode, Json};
use crm_auth::SessionUser;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::extractors::{AppState, AuthenticatedUser};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/session/login
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Json<SessionUser>> {
    Ok(Json(state.auth.login(&request.email, &request.password)?))
}

/// GET /api/session
pub async fn current_session(user: AuthenticatedUser) -> Json<SessionUser> {
    Json(user.0)
}

/// DELETE /api/session
pub async fn logout(State(state): State<AppState>) -> StatusCode {
    state.auth.logout();
    StatusCode::NO_CONTENT
}
