//! Project, pipeline and calendar handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDate;
use crm_costs::CostBreakdown;
use crm_models::{Project, ProjectDraft, ProjectStatus};
use crm_queries::{ProjectFilter, Selection};
use crm_services::PipelineColumn;
use serde::Deserialize;

use crate::error::ApiResult;
use crate::extractors::{parse_param, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectQuery {
    pub search: Option<String>,
    pub status: Option<String>,
}

impl ProjectQuery {
    fn filter(&self) -> ApiResult<ProjectFilter> {
        let status: Selection<ProjectStatus> = parse_param("status", self.status.as_deref())?;
        Ok(ProjectFilter::new()
            .search(self.search.as_deref().unwrap_or_default())
            .status(status))
    }
}

#[derive(Debug, Deserialize)]
pub struct ProgressUpdate {
    pub progress: u8,
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdate {
    pub status: ProjectStatus,
}

#[derive(Debug, Deserialize)]
pub struct CalendarQuery {
    pub date: Option<NaiveDate>,
}

/// GET /api/projects
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> ApiResult<Json<Vec<Project>>> {
    let filter = query.filter()?;
    let workspace = state.workspace.read().await;
    let projects = workspace
        .projects
        .filtered(&filter)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(projects))
}

/// GET /api/projects/:id
pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Project>> {
    let workspace = state.workspace.read().await;
    Ok(Json(workspace.projects.get(&id)?.clone()))
}

/// POST /api/projects
pub async fn create_project(
    State(state): State<AppState>,
    Json(draft): Json<ProjectDraft>,
) -> ApiResult<impl IntoResponse> {
    let mut workspace = state.workspace.write().await;
    let project = workspace
        .projects
        .create(draft, AppState::today())
        .into_result()?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/projects/:id
pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<ProjectDraft>,
) -> ApiResult<Json<Project>> {
    let mut workspace = state.workspace.write().await;
    Ok(Json(workspace.projects.update(&id, draft, AppState::today())?))
}

/// DELETE /api/projects/:id
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.workspace.write().await.projects.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /api/projects/:id/progress
pub async fn set_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<ProgressUpdate>,
) -> ApiResult<Json<Project>> {
    let mut workspace = state.workspace.write().await;
    let project = workspace
        .projects
        .set_progress(&id, update.progress, AppState::today())?;
    Ok(Json(project))
}

/// PUT /api/projects/:id/status
pub async fn move_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<StatusUpdate>,
) -> ApiResult<Json<Project>> {
    let mut workspace = state.workspace.write().await;
    Ok(Json(workspace.projects.move_to(&id, update.status)?))
}

/// GET /api/projects/:id/cost
pub async fn project_cost(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<CostBreakdown>> {
    let workspace = state.workspace.read().await;
    Ok(Json(workspace.projects.cost_breakdown(&id)?))
}

/// GET /api/pipeline
pub async fn pipeline(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> ApiResult<Json<Vec<PipelineColumn>>> {
    let filter = query.filter()?;
    let workspace = state.workspace.read().await;
    Ok(Json(workspace.projects.pipeline(&filter, AppState::today())))
}

/// GET /api/calendar?date=YYYY-MM-DD
pub async fn calendar(
    State(state): State<AppState>,
    Query(query): Query<CalendarQuery>,
) -> ApiResult<Json<Vec<Project>>> {
    let date = query.date.unwrap_or_else(AppState::today);
    let workspace = state.workspace.read().await;
    Ok(Json(
        workspace.projects.on_date(date).into_iter().cloned().collect(),
    ))
}
