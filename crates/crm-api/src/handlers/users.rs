//! User handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use crm_models::{User, UserDraft, UserRole, UserStatus};
use crm_queries::{Selection, UserFilter};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::extractors::{parse_param, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserQuery {
    pub search: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UserStatusUpdate {
    pub status: UserStatus,
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> ApiResult<Json<Vec<User>>> {
    let role: Selection<UserRole> = parse_param("role", query.role.as_deref())?;
    let status: Selection<UserStatus> = parse_param("status", query.status.as_deref())?;
    let filter = UserFilter::new()
        .search(query.search.as_deref().unwrap_or_default())
        .role(role)
        .status(status);

    let workspace = state.workspace.read().await;
    Ok(Json(
        workspace.users.filtered(&filter).into_iter().cloned().collect(),
    ))
}

/// GET /api/users/:id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let workspace = state.workspace.read().await;
    Ok(Json(workspace.users.get(&id)?.clone()))
}

/// POST /api/users
pub async fn create_user(
    State(state): State<AppState>,
    Json(draft): Json<UserDraft>,
) -> ApiResult<impl IntoResponse> {
    let mut workspace = state.workspace.write().await;
    let user = workspace.users.create(draft, Utc::now()).into_result()?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// PUT /api/users/:id
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<UserDraft>,
) -> ApiResult<Json<User>> {
    let mut workspace = state.workspace.write().await;
    Ok(Json(workspace.users.update(&id, draft)?))
}

/// DELETE /api/users/:id
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.workspace.write().await.users.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/users/:id/status
pub async fn set_user_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<UserStatusUpdate>,
) -> ApiResult<Json<User>> {
    let mut workspace = state.workspace.write().await;
    Ok(Json(workspace.users.set_status(&id, update.status)?))
}

/// POST /api/users/:id/toggle-status
pub async fn toggle_user_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let mut workspace = state.workspace.write().await;
    Ok(Json(workspace.users.toggle_status(&id)?))
}
