//! Dashboard handler

use axum::{extract::State, Json};
use crm_core::types::format_money;
use crm_services::DashboardStats;
use serde::Serialize;

use crate::extractors::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    pub app_title: String,
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub total_material_cost_display: String,
    pub inventory_value_display: String,
}

/// GET /api/dashboard
pub async fn dashboard(State(state): State<AppState>) -> Json<DashboardResponse> {
    let workspace = state.workspace.read().await;
    let stats = DashboardStats::collect(
        &workspace,
        AppState::today(),
        state.config.status.upcoming_days,
    );
    let symbol = &state.config.instance.currency_symbol;
    Json(DashboardResponse {
        app_title: state.config.instance.app_title.clone(),
        total_material_cost_display: format_money(symbol, stats.total_material_cost),
        inventory_value_display: format_money(symbol, stats.stock.total_value),
        stats,
    })
}
