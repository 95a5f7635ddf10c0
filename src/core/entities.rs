//! # Entidades Tipadas do Grafo de Conhecimento
//!
//! Registros desnormalizados materializados a partir das triplas pelo
//! [`KnowledgeGraphBuilder`](super::KnowledgeGraphBuilder):
//!
//! - [`Ingredient`]: a única entidade pontuada pelo motor
//! - [`LabeledEntity`]: tipos de pele, preocupações, benefícios e funções,
//!   usados apenas como alvos de classificação
//!
//! ## Invariante dos Scores
//!
//! `efficacy_score` e `safety_rating` **nunca são nulos**: quando ausentes
//! do grafo assumem os pontos médios neutros (50 e 5). Assim toda a
//! aritmética de pontuação é total.

use serde::Serialize;

/// Eficácia neutra quando a ontologia não informa `efficacyScore`.
pub const DEFAULT_EFFICACY: u8 = 50;
/// Segurança neutra quando a ontologia não informa `safetyRating`.
pub const DEFAULT_SAFETY: u8 = 5;
/// Concentração padrão quando a ontologia não informa `concentration`.
pub const DEFAULT_CONCENTRATION: f64 = 1.0;

/// Ingrediente ativo, identificado pelo nome de exibição em minúsculas.
///
/// Todas as referências (`recommended_for`, `treats`, `synergistic_with`, ...)
/// são chaves em minúsculas das entidades correspondentes.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    /// Identidade: label em minúsculas (ex: `"hyaluronic acid"`).
    pub key: String,
    /// Label de exibição como aparece na ontologia.
    pub label: String,
    /// IRI de origem, ausente nos dados de fallback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iri: Option<String>,
    pub recommended_for: Vec<String>,
    pub treats: Vec<String>,
    pub functions: Vec<String>,
    pub benefits: Vec<String>,
    pub synergistic_with: Vec<String>,
    pub incompatible_with: Vec<String>,
    pub potentiates_effect_of: Vec<String>,
    /// Eficácia em `[0, 100]`.
    pub efficacy_score: u8,
    /// Segurança em `[0, 10]`.
    pub safety_rating: u8,
    pub concentration: f64,
}

impl Ingredient {
    /// Cria um ingrediente sem relações, com scores neutros.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            key: label.to_lowercase(),
            label,
            iri: None,
            recommended_for: Vec::new(),
            treats: Vec::new(),
            functions: Vec::new(),
            benefits: Vec::new(),
            synergistic_with: Vec::new(),
            incompatible_with: Vec::new(),
            potentiates_effect_of: Vec::new(),
            efficacy_score: DEFAULT_EFFICACY,
            safety_rating: DEFAULT_SAFETY,
            concentration: DEFAULT_CONCENTRATION,
        }
    }

    pub fn is_recommended_for(&self, skin_type: &str) -> bool {
        self.recommended_for.iter().any(|s| s == skin_type)
    }

    pub fn is_synergistic_with(&self, other: &str) -> bool {
        self.synergistic_with.iter().any(|s| s == other)
    }

    pub fn is_incompatible_with(&self, other: &str) -> bool {
        self.incompatible_with.iter().any(|s| s == other)
    }

    pub fn potentiates(&self, other: &str) -> bool {
        self.potentiates_effect_of.iter().any(|s| s == other)
    }
}

/// Categoria de uma [`LabeledEntity`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    SkinType,
    Concern,
    Benefit,
    Function,
}

impl EntityKind {
    /// Nomes locais de classe aceitos para cada categoria.
    pub fn class_names(&self) -> &'static [&'static str] {
        match self {
            EntityKind::SkinType => &["SkinType"],
            EntityKind::Concern => &["SkinConcern", "Concern"],
            EntityKind::Benefit => &["Benefit"],
            EntityKind::Function => &["Function"],
        }
    }
}

/// Entidade simples com id, label e descrição opcional.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabeledEntity {
    /// Chave: nome local em minúsculas (ex: `"largepores"`).
    pub key: String,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub kind: EntityKind,
}

impl LabeledEntity {
    pub fn new(kind: EntityKind, key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            description: None,
            kind,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
