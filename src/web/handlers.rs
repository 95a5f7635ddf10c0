//! # Handlers HTTP
//!
//! Cada função pública é um handler Axum mapeado em [`super::create_router()`].
//! Todos respondem JSON; o trabalho real fica no [`SemanticService`].
//!
//! | Handler | Método | Rota |
//! |---------|--------|------|
//! | `health` | GET | `/health` |
//! | `stats` | GET | `/stats` |
//! | `recommendations` | POST | `/recommendations` |
//! | `score_product` | POST | `/products/score` |
//! | `rank_products` | POST | `/products/rank` |
//! | `interactions` | POST | `/interactions` |
//! | `ingredient` | GET | `/ingredients/{name}` |
//! | `skin_types` | GET | `/skin-types` |
//! | `concerns` | GET | `/concerns` |
//! | `reload` | POST | `/admin/reload` |
//! | `clear_cache` | POST | `/admin/cache/clear` |
//!
//! ## Validação
//!
//! Um perfil sem `skinType` é rejeitado com 422 antes de chegar ao núcleo.
//! JSON malformado é rejeitado pelo próprio extrator `Json`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::state::AppState;
use crate::core::{Ingredient, LabeledEntity, UserProfile};
use crate::ontology::LoadReport;
use crate::reasoning::{InteractionResult, SemanticAnalysis};
use crate::scoring::{Product, ProductScore, RankOptions, RankedProduct};
use crate::service::{SemanticService, ServiceStats};

/// Erros da fronteira HTTP, sempre serializados como `{"error": ...}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("skinType is required")]
    MissingSkinType,
    #[error("ingredient not found: {0}")]
    IngredientNotFound(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MissingSkinType => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::IngredientNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

fn validate(profile: &UserProfile) -> Result<(), ApiError> {
    if profile.skin_type.trim().is_empty() {
        return Err(ApiError::MissingSkinType);
    }
    Ok(())
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub loaded: bool,
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub product: Product,
    pub profile: UserProfile,
}

#[derive(Deserialize)]
pub struct RankRequest {
    pub products: Vec<Product>,
    pub profile: UserProfile,
    #[serde(default)]
    pub options: RankOptions,
}

#[derive(Deserialize)]
pub struct InteractionsRequest {
    pub ingredients: Vec<String>,
}

/// GET `/health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        loaded: state.service.snapshot().is_loaded(),
    })
}

/// GET `/stats`: GetStats.
pub async fn stats(State(state): State<AppState>) -> Json<ServiceStats> {
    Json(state.service.stats())
}

/// POST `/recommendations`: GetSemanticRecommendations.
pub async fn recommendations(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<SemanticAnalysis>, ApiError> {
    validate(&profile)?;
    let analysis = state.service.semantic_recommendations(&profile);
    Ok(Json(SemanticAnalysis::clone(&analysis)))
}

/// POST `/products/score`: ScoreProduct.
pub async fn score_product(
    State(state): State<AppState>,
    Json(request): Json<ScoreRequest>,
) -> Result<Json<ProductScore>, ApiError> {
    validate(&request.profile)?;
    Ok(Json(state.service.score_product(&request.product, &request.profile)))
}

/// POST `/products/rank`
pub async fn rank_products(
    State(state): State<AppState>,
    Json(request): Json<RankRequest>,
) -> Result<Json<Vec<RankedProduct>>, ApiError> {
    validate(&request.profile)?;
    let service = Arc::clone(&state.service);
    // ranking usa rayon; fora das threads do runtime
    let ranked = tokio::task::spawn_blocking(move || {
        service.rank_products(&request.products, &request.profile, &request.options)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(ranked))
}

/// POST `/interactions`
pub async fn interactions(
    State(state): State<AppState>,
    Json(request): Json<InteractionsRequest>,
) -> Json<InteractionResult> {
    Json(state.service.analyze_interactions(&request.ingredients))
}

/// GET `/ingredients/{name}`: nome ou sinônimo.
pub async fn ingredient(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Ingredient>, ApiError> {
    state
        .service
        .ingredient_info(&name)
        .map(Json)
        .ok_or(ApiError::IngredientNotFound(name))
}

/// GET `/skin-types`
pub async fn skin_types(State(state): State<AppState>) -> Json<Vec<LabeledEntity>> {
    Json(state.service.skin_types())
}

/// GET `/concerns`
pub async fn concerns(State(state): State<AppState>) -> Json<Vec<LabeledEntity>> {
    Json(state.service.concerns())
}

/// POST `/admin/reload`: relê as fontes em `spawn_blocking` (I/O + parse).
pub async fn reload(State(state): State<AppState>) -> Result<Json<LoadReport>, ApiError> {
    let service: Arc<SemanticService> = Arc::clone(&state.service);
    let report = tokio::task::spawn_blocking(move || service.reload())
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(report))
}

/// POST `/admin/cache/clear`
pub async fn clear_cache(State(state): State<AppState>) -> StatusCode {
    state.service.clear_cache();
    StatusCode::NO_CONTENT
}
