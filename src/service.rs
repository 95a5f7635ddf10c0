//! # SemanticService: Objeto de Serviço Explícito
//!
//! Junta grafo, loader e cache num único objeto construído no startup e
//! compartilhado via `Arc` pelos handlers.
//!
//! ## Recarga (copy-on-reload)
//!
//! ```text
//! reload()
//!   ├── loader monta um grafo NOVO fora do lock de leitura
//!   ├── grafo recebe a próxima geração
//!   ├── swap do Arc<KnowledgeGraph> sob write lock (instantâneo)
//!   └── cache limpo
//! ```
//!
//! Leitores seguram um `Arc` do snapshot anterior até terminar; nunca
//! observam um grafo parcial.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use serde::Serialize;

use crate::cache::ReasoningCache;
use crate::config::AppConfig;
use crate::core::{Ingredient, KnowledgeGraph, KnowledgeSource, LabeledEntity, UserProfile};
use crate::ontology::{DocumentSource, KnowledgeLoader, LoadReport};
use crate::reasoning::{analyze_profile, InteractionAnalyzer, InteractionResult, ProfileKey, SemanticAnalysis};
use crate::scoring::{self, Product, ProductScore, ProductScorer, RankOptions, RankedProduct};

/// Acima deste número de ingredientes o grafo é considerado ontologia completa.
const ONTOLOGY_INGREDIENT_THRESHOLD: usize = 8;

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStats {
    pub loaded: bool,
    pub ingredient_count: usize,
    pub skin_type_count: usize,
    pub concern_count: usize,
    pub method: &'static str,
    pub cache_size: usize,
    pub source: KnowledgeSource,
    /// Relatório da carga que produziu o grafo atual.
    pub last_load: LoadReport,
}

pub struct SemanticService {
    graph: RwLock<Arc<KnowledgeGraph>>,
    loader: Mutex<KnowledgeLoader>,
    cache: ReasoningCache<SemanticAnalysis>,
    sources: Vec<DocumentSource>,
    generation: AtomicU64,
    last_report: RwLock<LoadReport>,
}

impl SemanticService {
    /// Carrega o conhecimento das fontes (com fallback) e monta o serviço.
    pub fn new(sources: Vec<DocumentSource>, cache_ttl: Duration) -> Self {
        let mut loader = KnowledgeLoader::new();
        let outcome = loader.load(&sources);
        let mut graph = outcome.graph;
        graph.set_generation(1);

        Self {
            graph: RwLock::new(Arc::new(graph)),
            loader: Mutex::new(loader),
            cache: ReasoningCache::with_ttl(cache_ttl),
            sources,
            generation: AtomicU64::new(1),
            last_report: RwLock::new(outcome.report),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.document_sources(), config.cache_ttl)
    }

    /// Serviço sobre um documento em memória.
    pub fn from_document(text: impl Into<String>) -> Self {
        Self::new(
            vec![DocumentSource::Inline(text.into())],
            crate::cache::DEFAULT_TTL,
        )
    }

    /// Snapshot atual do grafo; permanece válido mesmo após um reload.
    pub fn snapshot(&self) -> Arc<KnowledgeGraph> {
        Arc::clone(&self.graph.read())
    }

    /// Reconstrói o grafo a partir das fontes e troca atomicamente.
    pub fn reload(&self) -> LoadReport {
        // o lock do loader serializa recargas até o swap: a geração mais
        // alta é sempre a última publicada
        let mut loader = self.loader.lock();
        let outcome = loader.load(&self.sources);
        let mut graph = outcome.graph;
        let report = outcome.report;

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        graph.set_generation(generation);
        let ingredients = graph.ingredients.len();

        *self.graph.write() = Arc::new(graph);
        *self.last_report.write() = report.clone();
        self.cache.clear();
        drop(loader);

        tracing::info!(
            generation,
            source = report.source.label(),
            ingredients,
            "Conhecimento recarregado"
        );
        report
    }

    /// Recomendações semânticas do perfil, memoizadas por assinatura e geração.
    pub fn semantic_recommendations(&self, profile: &UserProfile) -> Arc<SemanticAnalysis> {
        let graph = self.snapshot();
        let key = ProfileKey::of(profile).signature();

        if let Some(hit) = self.cache.get(&key, graph.generation()) {
            tracing::debug!(key = %key, "Cache hit");
            return hit;
        }

        tracing::debug!(key = %key, generation = graph.generation(), "Cache miss, analisando perfil");
        let analysis = Arc::new(analyze_profile(&graph, profile));
        self.cache.put(key, graph.generation(), Arc::clone(&analysis));
        analysis
    }

    pub fn score_product(&self, product: &Product, profile: &UserProfile) -> ProductScore {
        let analysis = self.semantic_recommendations(profile);
        let result = ProductScorer::score(product, profile, &analysis);
        tracing::debug!(
            product = %product.product_name,
            score = result.score,
            "Produto pontuado"
        );
        result
    }

    pub fn rank_products(
        &self,
        products: &[Product],
        profile: &UserProfile,
        options: &RankOptions,
    ) -> Vec<RankedProduct> {
        let analysis = self.semantic_recommendations(profile);
        scoring::rank_products(products, profile, &analysis, options)
    }

    pub fn analyze_interactions<S: AsRef<str>>(&self, names: &[S]) -> InteractionResult {
        let graph = self.snapshot();
        InteractionAnalyzer::new(&graph).analyze(names)
    }

    /// Ingrediente por nome ou sinônimo.
    pub fn ingredient_info(&self, name: &str) -> Option<Ingredient> {
        self.snapshot().ingredient(name).cloned()
    }

    pub fn skin_types(&self) -> Vec<LabeledEntity> {
        self.snapshot().skin_types.values().cloned().collect()
    }

    pub fn concerns(&self) -> Vec<LabeledEntity> {
        self.snapshot().concerns.values().cloned().collect()
    }

    pub fn stats(&self) -> ServiceStats {
        let graph = self.snapshot();
        let loaded = graph.is_loaded();
        let method = if loaded && graph.ingredients.len() > ONTOLOGY_INGREDIENT_THRESHOLD {
            "Semantic Ontology"
        } else {
            "Rule-based"
        };

        ServiceStats {
            loaded,
            ingredient_count: graph.ingredients.len(),
            skin_type_count: graph.skin_types.len(),
            concern_count: graph.concerns.len(),
            method,
            cache_size: self.cache.len(),
            source: graph.source(),
            last_load: self.last_load_report(),
        }
    }

    pub fn last_load_report(&self) -> LoadReport {
        self.last_report.read().clone()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
        tracing::info!("Cache de raciocínio limpo");
    }

    /// Varredura periódica de entradas vencidas.
    pub fn purge_expired_cache(&self) -> usize {
        let removed = self.cache.purge_expired();
        if removed > 0 {
            tracing::debug!(removed, "Entradas de cache vencidas removidas");
        }
        removed
    }
}
