//! # Knowledge Loader
//!
//! Tenta as fontes em ordem (principal → secundária) e, se todas falharem,
//! ativa o [`fallback`](super::fallback). **Nunca retorna erro**: cada falha
//! vira uma entrada do [`LoadReport`] e o serviço segue em modo degradado.
//!
//! ```text
//! skincare_enhanced.ttl ──✗──▶ skincare.ttl ──✗──▶ fallback embutido
//!          │ ✓                      │ ✓
//!          ▼                        ▼
//!    KnowledgeGraph           KnowledgeGraph
//! ```
//!
//! Efeito colateral: o [`TripleStore`] do loader é limpo e repovoado a cada
//! tentativa bem-sucedida de parsing.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{fallback, parser};
use crate::core::{KnowledgeGraph, KnowledgeGraphBuilder, KnowledgeSource, TripleStore};
use crate::error::KnowledgeError;

/// Uma fonte candidata de conhecimento.
#[derive(Clone, Debug)]
pub enum DocumentSource {
    File { path: PathBuf, source: KnowledgeSource },
    Inline(String),
}

impl DocumentSource {
    pub fn primary(path: impl Into<PathBuf>) -> Self {
        DocumentSource::File {
            path: path.into(),
            source: KnowledgeSource::Primary,
        }
    }

    pub fn secondary(path: impl Into<PathBuf>) -> Self {
        DocumentSource::File {
            path: path.into(),
            source: KnowledgeSource::Secondary,
        }
    }

    pub fn source(&self) -> KnowledgeSource {
        match self {
            DocumentSource::File { source, .. } => *source,
            DocumentSource::Inline(_) => KnowledgeSource::Inline,
        }
    }

    /// Identificação legível para logs e relatórios.
    pub fn origin(&self) -> String {
        match self {
            DocumentSource::File { path, .. } => path.display().to_string(),
            DocumentSource::Inline(_) => "inline".to_string(),
        }
    }

    fn read(&self) -> Result<String, KnowledgeError> {
        match self {
            DocumentSource::File { path, .. } => {
                std::fs::read_to_string(path).map_err(|source| KnowledgeError::Io {
                    path: path.clone(),
                    source,
                })
            }
            DocumentSource::Inline(text) => Ok(text.clone()),
        }
    }
}

/// Resultado de uma tentativa de carga.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadAttempt {
    pub origin: String,
    pub source: KnowledgeSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Relatório completo de uma carga: quais fontes foram tentadas e qual venceu.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub source: KnowledgeSource,
    pub attempts: Vec<LoadAttempt>,
    pub triple_count: usize,
    pub ingredient_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl LoadReport {
    pub fn used_fallback(&self) -> bool {
        self.source == KnowledgeSource::Fallback
    }
}

/// Grafo pronto para uso junto com o relatório da carga.
pub struct LoadOutcome {
    pub graph: KnowledgeGraph,
    pub report: LoadReport,
}

/// Loader com o armazém de triplas que ele repovoa.
#[derive(Default)]
pub struct KnowledgeLoader {
    store: TripleStore,
}

impl KnowledgeLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Número de triplas atualmente no armazém.
    pub fn triple_count(&self) -> usize {
        self.store.len()
    }

    /// Carrega a primeira fonte válida; sem nenhuma, usa o fallback.
    pub fn load(&mut self, candidates: &[DocumentSource]) -> LoadOutcome {
        let mut attempts = Vec::with_capacity(candidates.len());

        for candidate in candidates {
            let origin = candidate.origin();
            match self.try_load(candidate, &origin) {
                Ok(graph) => {
                    tracing::info!(
                        source = candidate.source().label(),
                        origin = %origin,
                        triples = self.store.len(),
                        ingredients = graph.ingredients.len(),
                        skin_types = graph.skin_types.len(),
                        concerns = graph.concerns.len(),
                        "Ontologia carregada"
                    );
                    attempts.push(LoadAttempt {
                        origin,
                        source: candidate.source(),
                        error: None,
                    });
                    let report = LoadReport {
                        source: candidate.source(),
                        attempts,
                        triple_count: self.store.len(),
                        ingredient_count: graph.ingredients.len(),
                        loaded_at: Utc::now(),
                    };
                    return LoadOutcome { graph, report };
                }
                Err(e) => {
                    tracing::warn!(origin = %origin, error = %e, "Fonte de conhecimento indisponível");
                    attempts.push(LoadAttempt {
                        origin,
                        source: candidate.source(),
                        error: Some(e.to_string()),
                    });
                }
            }
        }

        self.store.clear();
        let graph = fallback::knowledge_graph();
        tracing::warn!(
            attempts = attempts.len(),
            ingredients = graph.ingredients.len(),
            "Nenhuma ontologia carregada, usando conhecimento de fallback"
        );
        let report = LoadReport {
            source: KnowledgeSource::Fallback,
            attempts,
            triple_count: 0,
            ingredient_count: graph.ingredients.len(),
            loaded_at: Utc::now(),
        };
        LoadOutcome { graph, report }
    }

    fn try_load(&mut self, candidate: &DocumentSource, origin: &str) -> Result<KnowledgeGraph, KnowledgeError> {
        let text = candidate.read()?;
        let triples = parser::parse_turtle(&text, origin)?;

        self.store.clear();
        self.store.extend(triples);

        let graph = KnowledgeGraphBuilder::new(&self.store).build(candidate.source());
        if graph.ingredients.is_empty() {
            return Err(KnowledgeError::Empty {
                origin: origin.to_string(),
            });
        }
        Ok(graph)
    }
}
