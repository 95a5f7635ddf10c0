//! # Estado da Aplicação Web
//!
//! O único estado compartilhado é o [`SemanticService`], construído no
//! startup e clonado (via `Arc`) para cada handler.

use std::sync::Arc;

use crate::service::SemanticService;

/// Estado compartilhado da aplicação Axum.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SemanticService>,
}

impl AppState {
    pub fn new(service: SemanticService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}
