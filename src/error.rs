//! # Erros do Carregamento de Conhecimento
//!
//! Falhas de fonte nunca chegam ao chamador das operações de raciocínio:
//! o [`KnowledgeLoader`](crate::ontology::KnowledgeLoader) registra cada uma
//! no [`LoadReport`](crate::ontology::LoadReport) e passa para a próxima fonte.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("falha ao ler {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("documento {origin} inválido: {message}")]
    Parse { origin: String, message: String },

    #[error("documento {origin} não declara nenhum ingrediente")]
    Empty { origin: String },
}
