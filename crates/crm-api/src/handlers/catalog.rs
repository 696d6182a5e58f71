//! Catalog lookup and material costing

use axum::{
    extract::{Query, State},
    Json,
};
use crm_contracts::{Contract, MaterialContract};
use crm_core::error::ValidationErrors;
use crm_costs::{CostBreakdown, CostCalculator};
use crm_models::{CatalogEntry, Material};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::extractors::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct SuggestionQuery {
    #[serde(default)]
    pub q: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CostRequest {
    pub materials: Vec<Material>,
}

/// GET /api/catalog
pub async fn list_catalog(State(state): State<AppState>) -> Json<Vec<CatalogEntry>> {
    Json(state.catalog.entries().to_vec())
}

/// GET /api/catalog/kinds
pub async fn list_kinds(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.kinds().into_iter().map(String::from).collect())
}

/// GET /api/catalog/suggestions?q=&type=
pub async fn suggestions(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> Json<Vec<String>> {
    Json(
        state
            .catalog
            .suggestions(&query.q, query.kind.as_deref())
            .into_iter()
            .map(String::from)
            .collect(),
    )
}

/// POST /api/materials/cost
pub async fn material_cost(
    State(state): State<AppState>,
    Json(request): Json<CostRequest>,
) -> ApiResult<Json<CostBreakdown>> {
    let mut errors = ValidationErrors::new();
    for (index, material) in request.materials.iter().enumerate() {
        if let Err(material_errors) = MaterialContract.validate(material) {
            errors.merge_scoped(&format!("materials[{}]", index), material_errors);
        }
    }
    errors.into_result()?;

    let breakdown = CostCalculator::new(&state.catalog).breakdown(&request.materials);
    if !breakdown.is_fully_priced() {
        tracing::debug!(unknown = ?breakdown.unknown_materials, "Unpriced material lines");
    }
    Ok(Json(breakdown))
}
