//! # Módulo Reasoning: Raciocínio sobre o Grafo
//!
//! Operações puras e síncronas sobre um [`KnowledgeGraph`](crate::core::KnowledgeGraph)
//! emprestado. Nenhuma delas faz I/O nem guarda estado, por isso podem
//! rodar em paralelo entre requisições.
//!
//! - [`matching`]: comparação de nomes e tabelas heurísticas compartilhadas
//! - [`recommender`]: pontuação e ranking de ingredientes
//! - [`interactions`]: classificação de pares de ingredientes
//! - [`sensitivity`]: filtro por sensibilidades declaradas
//! - [`confidence`]: confiança e narrativa da análise
//! - [`analysis`]: a análise completa de um perfil, unidade do cache

pub mod analysis;
pub mod confidence;
pub mod interactions;
pub mod matching;
pub mod recommender;
pub mod sensitivity;

pub use analysis::{analyze_profile, ProfileKey, SemanticAnalysis};
pub use interactions::{InteractionAnalyzer, InteractionResult};
pub use recommender::{IngredientRecommender, Recommendation};
pub use sensitivity::SensitivityFilter;
