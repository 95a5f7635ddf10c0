#![allow(dead_code)]
//! # MatchCare Engine: Motor de Recomendação Semântica
//!
//! **Ponto de entrada** do serviço. Carrega a ontologia de skincare,
//! monta o [`SemanticService`](service::SemanticService) e expõe as
//! operações por HTTP.
//!
//! ## Fluxo de Inicialização
//!
//! ```text
//! main()
//!   ├── Configura tracing/logging
//!   ├── Lê AppConfig do ambiente
//!   ├── Carrega ontologia (principal → secundária → fallback)
//!   ├── Spawn da varredura periódica do cache
//!   ├── Monta AppState e Router
//!   └── Inicia servidor TCP (MATCHCARE_BIND)
//! ```
//!
//! ## Exemplo de Uso
//!
//! ```bash
//! # Executar com logs padrão (info)
//! cargo run
//!
//! # Logs detalhados (cache hits/misses, scores)
//! RUST_LOG=debug cargo run
//!
//! # Outra ontologia e porta
//! MATCHCARE_ONTOLOGY=/srv/onto.ttl MATCHCARE_BIND=127.0.0.1:8080 cargo run
//! ```

/// Módulo `cache`: cache de análises com TTL e geração.
mod cache;

/// Módulo `config`: configuração por variáveis de ambiente.
mod config;

/// Módulo `core`: armazém de triplas, entidades, perfil e grafo tipado.
mod core;

/// Módulo `error`: taxonomia de erros da carga de conhecimento.
mod error;

/// Módulo `ontology`: parser Turtle, loader com fallback e dados embutidos.
mod ontology;

/// Módulo `reasoning`: recomendação, interações, sensibilidades e confiança.
mod reasoning;

/// Módulo `scoring`: pontuação e ranking de produtos.
mod scoring;

/// Módulo `service`: o serviço semântico compartilhado.
mod service;

/// Módulo `web`: fronteira JSON com axum.
mod web;

#[cfg(test)]
mod testing;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::service::SemanticService;
use crate::web::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // RUST_LOG controla o nível; padrão info.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("MatchCare Engine: Starting...");

    let config = AppConfig::from_env();
    tracing::info!(
        ontology = %config.ontology.display(),
        fallback_document = %config.ontology_basic.display(),
        cache_ttl_secs = config.cache_ttl.as_secs(),
        "Configuração carregada"
    );

    // A carga lê disco e faz parse; fora das threads do runtime.
    let load_config = config.clone();
    let service = tokio::task::spawn_blocking(move || SemanticService::from_config(&load_config))
        .await
        .context("falha ao carregar o conhecimento")?;

    let stats = service.stats();
    tracing::info!(
        loaded = stats.loaded,
        method = stats.method,
        ingredients = stats.ingredient_count,
        "Serviço semântico pronto"
    );

    let state = AppState::new(service);

    // Varredura periódica das entradas vencidas do cache.
    let sweeper = state.service.clone();
    let period = config.cache_sweep;
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            sweeper.purge_expired_cache();
        }
    });

    let app = web::create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind)
        .await
        .with_context(|| format!("não foi possível fazer bind em {}", config.bind))?;
    tracing::info!("Server running at http://{}", config.bind);

    axum::serve(listener, app).await?;
    Ok(())
}
