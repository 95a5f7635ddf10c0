//! Configuração do serviço a partir de variáveis de ambiente.
//!
//! | Variável | Padrão |
//! |----------|--------|
//! | `MATCHCARE_ONTOLOGY` | `data/ontology/skincare_enhanced.ttl` |
//! | `MATCHCARE_ONTOLOGY_BASIC` | `data/ontology/skincare.ttl` |
//! | `MATCHCARE_BIND` | `0.0.0.0:3000` |
//! | `MATCHCARE_CACHE_TTL_SECS` | `3600` |
//! | `MATCHCARE_CACHE_SWEEP_SECS` | `60` |
//!
//! Valores numéricos inválidos caem no padrão com um aviso.

use std::path::PathBuf;
use std::time::Duration;

use crate::ontology::DocumentSource;

pub const DEFAULT_ONTOLOGY: &str = "data/ontology/skincare_enhanced.ttl";
pub const DEFAULT_ONTOLOGY_BASIC: &str = "data/ontology/skincare.ttl";
pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_CACHE_TTL_SECS: u64 = 3600;
pub const DEFAULT_CACHE_SWEEP_SECS: u64 = 60;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub ontology: PathBuf,
    pub ontology_basic: PathBuf,
    pub bind: String,
    pub cache_ttl: Duration,
    pub cache_sweep: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ontology: PathBuf::from(DEFAULT_ONTOLOGY),
            ontology_basic: PathBuf::from(DEFAULT_ONTOLOGY_BASIC),
            bind: DEFAULT_BIND.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            cache_sweep: Duration::from_secs(DEFAULT_CACHE_SWEEP_SECS),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolve a configuração a partir de uma função de consulta (testável sem tocar o ambiente).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let text = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let seconds = |name: &str, default: Duration| match text(name) {
            None => default,
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(variable = name, value = %raw, "Valor inválido, usando padrão");
                    default
                }
            },
        };

        Self {
            ontology: text("MATCHCARE_ONTOLOGY").map(PathBuf::from).unwrap_or(defaults.ontology),
            ontology_basic: text("MATCHCARE_ONTOLOGY_BASIC")
                .map(PathBuf::from)
                .unwrap_or(defaults.ontology_basic),
            bind: text("MATCHCARE_BIND").unwrap_or(defaults.bind),
            cache_ttl: seconds("MATCHCARE_CACHE_TTL_SECS", defaults.cache_ttl),
            cache_sweep: seconds("MATCHCARE_CACHE_SWEEP_SECS", defaults.cache_sweep),
        }
    }

    /// Fontes de conhecimento na ordem de tentativa.
    pub fn document_sources(&self) -> Vec<DocumentSource> {
        vec![
            DocumentSource::primary(&self.ontology),
            DocumentSource::secondary(&self.ontology_basic),
        ]
    }
}
