//! Stock handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use crm_models::{StockDraft, StockItem, StockStatus};
use crm_queries::{Selection, SortDirection, StockFilter, StockLevel};
use crm_services::StockSummary;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::extractors::{parse_param, AppState};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub level: Option<String>,
    pub direction: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RestockRequest {
    pub quantity: f64,
}

/// A stock item with its derived level.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StockView {
    #[serde(flatten)]
    pub item: StockItem,
    pub stock_status: StockStatus,
    pub stock_percentage: f64,
}

impl From<&StockItem> for StockView {
    fn from(item: &StockItem) -> Self {
        Self {
            stock_status: item.stock_status(),
            stock_percentage: item.stock_percentage(),
            item: item.clone(),
        }
    }
}

/// GET /api/stock
pub async fn list_stock(
    State(state): State<AppState>,
    Query(query): Query<StockQuery>,
) -> ApiResult<Json<Vec<StockView>>> {
    let category: Selection<String> = parse_param("category", query.category.as_deref())?;
    let level: StockLevel = parse_param("level", query.level.as_deref())?;
    let direction: SortDirection = parse_param("direction", query.direction.as_deref())?;
    let filter = StockFilter::new()
        .search(query.search.as_deref().unwrap_or_default())
        .category(category)
        .level(level);

    let workspace = state.workspace.read().await;
    let items = workspace
        .stock
        .filtered(&filter, direction)
        .into_iter()
        .map(StockView::from)
        .collect();
    Ok(Json(items))
}

/// GET /api/stock/summary
pub async fn stock_summary(State(state): State<AppState>) -> Json<StockSummary> {
    Json(state.workspace.read().await.stock.summary())
}

/// GET /api/stock/:id
pub async fn get_stock_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<StockView>> {
    let workspace = state.workspace.read().await;
    Ok(Json(StockView::from(workspace.stock.get(&id)?)))
}

/// POST /api/stock
pub async fn create_stock_item(
    State(state): State<AppState>,
    Json(draft): Json<StockDraft>,
) -> ApiResult<impl IntoResponse> {
    let mut workspace = state.workspace.write().await;
    let item = workspace
        .stock
        .create(draft, AppState::today())
        .into_result()?;
    Ok((StatusCode::CREATED, Json(StockView::from(&item))))
}

/// PUT /api/stock/:id
pub async fn update_stock_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(draft): Json<StockDraft>,
) -> ApiResult<Json<StockView>> {
    let mut workspace = state.workspace.write().await;
    let item = workspace.stock.update(&id, draft)?;
    Ok(Json(StockView::from(&item)))
}

/// DELETE /api/stock/:id
pub async fn delete_stock_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.workspace.write().await.stock.delete(&id)?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/stock/:id/restock
pub async fn restock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<RestockRequest>,
) -> ApiResult<Json<StockView>> {
    let mut workspace = state.workspace.write().await;
    let item = workspace
        .stock
        .restock(&id, request.quantity, AppState::today())?;
    Ok(Json(StockView::from(&item)))
}

/// GET /api/stock/categories
pub async fn stock_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    let workspace = state.workspace.read().await;
    Json(
        workspace
            .stock
            .categories()
            .into_iter()
            .map(String::from)
            .collect(),
    )
}
