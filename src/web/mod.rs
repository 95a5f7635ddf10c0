//! # Módulo Web: Fronteira JSON do Motor Semântico
//!
//! Camada fina construída com **Axum**; não guarda estado próprio além do
//! [`SemanticService`](crate::service::SemanticService).
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Axum Router (este módulo)                               │
//! │  ├── GET  /health              → liveness + loaded      │
//! │  ├── GET  /stats               → GetStats               │
//! │  ├── POST /recommendations     → análise semântica      │
//! │  ├── POST /products/score      → ScoreProduct           │
//! │  ├── POST /products/rank       → ranking em lote        │
//! │  ├── POST /interactions        → pares de ingredientes  │
//! │  ├── GET  /ingredients/{name}  → lookup por nome        │
//! │  ├── GET  /skin-types          → lista                  │
//! │  ├── GET  /concerns            → lista                  │
//! │  ├── POST /admin/reload        → recarga copy-on-reload │
//! │  └── POST /admin/cache/clear   → limpa o cache          │
//! └─────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;
pub mod state;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use state::AppState;

/// Cria o router Axum com todas as rotas.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/stats", get(handlers::stats))
        // ── Operações semânticas ──────────────────────────────
        .route("/recommendations", post(handlers::recommendations))
        .route("/products/score", post(handlers::score_product))
        .route("/products/rank", post(handlers::rank_products))
        .route("/interactions", post(handlers::interactions))
        // ── Consultas ─────────────────────────────────────────
        .route("/ingredients/{name}", get(handlers::ingredient))
        .route("/skin-types", get(handlers::skin_types))
        .route("/concerns", get(handlers::concerns))
        // ── Administração ─────────────────────────────────────
        .route("/admin/reload", post(handlers::reload))
        .route("/admin/cache/clear", post(handlers::clear_cache))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::service::SemanticService;
    use crate::testing;

    fn app() -> Router {
        create_router(AppState::new(SemanticService::from_document(testing::SAMPLE_TTL)))
    }

    async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn health_and_stats() {
        let (status, body) = send(app(), Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["loaded"], true);

        let (status, body) = send(app(), Method::GET, "/stats", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ingredientCount"], 12);
        assert_eq!(body["method"], "Semantic Ontology");
        assert_eq!(body["cacheSize"], 0);
        assert_eq!(body["lastLoad"]["source"], "inline");
        assert_eq!(body["lastLoad"]["ingredientCount"], 12);
    }

    #[tokio::test]
    async fn recommendations_for_profile() {
        let profile = json!({
            "skinType": "oily",
            "skinConcerns": ["acne", "largepores"],
            "knownSensitivities": ["fragrance"]
        });
        let (status, body) = send(app(), Method::POST, "/recommendations", Some(profile)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["method"], "Semantic Ontology Reasoning");
        assert_eq!(body["recommendedIngredients"][0]["ingredient"], "niacinamide");
        let names: Vec<&str> = body["recommendedIngredients"]
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|r| r["ingredient"].as_str())
            .collect();
        assert!(!names.contains(&"lavender essential oil"));
    }

    #[tokio::test]
    async fn empty_skin_type_is_rejected() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/recommendations",
            Some(json!({ "skinType": "  ", "skinConcerns": ["acne"] })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "skinType is required");
    }

    #[tokio::test]
    async fn score_and_rank_products() {
        let product = json!({
            "productName": "Clarifying Serum",
            "mainCategory": "Serum",
            "keyIngredients": ["Niacinamide", "Salicylic Acid"],
            "suitableForSkinTypes": ["oily"],
            "addressesConcerns": ["acne", "large pores"]
        });
        let profile = json!({ "skinType": "oily", "skinConcerns": ["acne", "largepores"] });

        let (status, body) = send(
            app(),
            Method::POST,
            "/products/score",
            Some(json!({ "product": product, "profile": profile })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(body["score"].as_u64().unwrap() > 50);
        assert!(body["explanation"].as_str().unwrap().contains("match"));

        let (status, body) = send(
            app(),
            Method::POST,
            "/products/rank",
            Some(json!({
                "products": [product, { "productName": "Plain Lotion", "keyIngredients": ["Water"] }],
                "profile": profile,
                "options": { "limit": 5 }
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body[0]["product"]["productName"], "Clarifying Serum");
        assert!(body[0]["tags"].as_array().unwrap().len() <= 3);
    }

    #[tokio::test]
    async fn interactions_and_lookups() {
        let (status, body) = send(
            app(),
            Method::POST,
            "/interactions",
            Some(json!({ "ingredients": ["Retinol", "Vitamin C", "Unobtainium"] })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["incompatible"].as_array().unwrap().len(), 1);

        let (status, body) = send(app(), Method::GET, "/ingredients/nicotinamide", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["key"], "niacinamide");

        let (status, body) = send(app(), Method::GET, "/ingredients/unobtainium", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["error"].as_str().unwrap().contains("unobtainium"));

        let (_, body) = send(app(), Method::GET, "/skin-types", None).await;
        assert_eq!(body.as_array().unwrap().len(), 5);
        let (_, body) = send(app(), Method::GET, "/concerns", None).await;
        assert_eq!(body.as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn admin_routes() {
        let router = app();
        let profile = json!({ "skinType": "dry" });
        send(router.clone(), Method::POST, "/recommendations", Some(profile)).await;
        let (_, stats) = send(router.clone(), Method::GET, "/stats", None).await;
        assert_eq!(stats["cacheSize"], 1);

        let (status, _) = send(router.clone(), Method::POST, "/admin/cache/clear", None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
        let (_, stats) = send(router.clone(), Method::GET, "/stats", None).await;
        assert_eq!(stats["cacheSize"], 0);

        let (status, report) = send(router, Method::POST, "/admin/reload", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["source"], "inline");
        assert_eq!(report["ingredientCount"], 12);
    }
}
