//! # Módulo Core: Tipos Fundamentais do Domínio
//!
//! Este módulo agrupa os tipos sobre os quais todo o motor de matching opera:
//!
//! - [`TripleStore`]: armazém de triplas `(sujeito, predicado, objeto)` com índices
//! - [`KnowledgeGraph`]: visão tipada e desnormalizada derivada do armazém
//! - [`Ingredient`] / [`LabeledEntity`]: entidades materializadas do grafo
//! - [`UserProfile`] / [`SensitivityTag`]: entrada de todas as operações de raciocínio
//!
//! ## Fluxo
//!
//! ```text
//! documento Turtle ──parser──▶ TripleStore ──KnowledgeGraphBuilder──▶ KnowledgeGraph
//!                                                                        │
//!                                        UserProfile ──▶ reasoning / scoring
//! ```

/// Armazém de triplas e extração de nomes locais.
pub mod triple;

/// Entidades tipadas: ingredientes e entidades rotuladas.
pub mod entities;

/// Perfil do usuário e tags de sensibilidade.
pub mod profile;

/// Grafo de conhecimento tipado e seu builder.
pub mod knowledge_graph;

pub use entities::{EntityKind, Ingredient, LabeledEntity};
pub use knowledge_graph::{KnowledgeGraph, KnowledgeGraphBuilder, KnowledgeSource};
pub use profile::{SensitivityTag, UserProfile};
pub use triple::{Term, Triple, TripleStore};
