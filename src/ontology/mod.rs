//! # Módulo Ontology: Carga do Conhecimento
//!
//! Transforma documentos Turtle em um [`KnowledgeGraph`](crate::core::KnowledgeGraph):
//!
//! - [`parser`]: Turtle → triplas (via `oxigraph`)
//! - [`loader`]: cadeia de fontes com relatório de tentativas
//! - [`fallback`]: conhecimento embutido para o modo degradado

pub mod fallback;
pub mod loader;
pub mod parser;

pub use loader::{DocumentSource, KnowledgeLoader, LoadReport};
