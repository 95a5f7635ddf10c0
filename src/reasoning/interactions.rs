//! # Interaction Analyzer
//!
//! Classifica cada par não-ordenado de ingredientes em exatamente uma de
//! quatro classes, nesta prioridade (a primeira que casar vence):
//!
//! 1. **Sinérgico**: um lista o outro em `synergisticWith`
//! 2. **Incompatível**: um lista o outro em `incompatibleWith`
//! 3. **Potencializador**: um lista o outro em `potentiatesEffectOf`
//! 4. **Neutro**
//!
//! Os nomes são resolvidos pelo grafo (chave exata ou sinônimo), ordenados
//! e deduplicados antes da varredura; assim cada par é visitado uma vez e
//! `analyze([a, b])` classifica igual a `analyze([b, a])`. Nomes
//! desconhecidos são ignorados sem erro.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::{Ingredient, KnowledgeGraph};

/// Pares com conflito bem documentado; todo o resto é severidade média.
const HIGH_SEVERITY_PAIRS: &[(&str, &str)] = &[
    ("benzoyl peroxide", "retinol"),
    ("retinol", "vitamin c"),
    ("retinol", "salicylic acid"),
];

/// Motivo específico por par (ordem lexicográfica); demais usam o genérico.
const INCOMPATIBILITY_REASONS: &[((&str, &str), &str)] = &[
    (("niacinamide", "vitamin c"), "pH level differences may reduce efficacy"),
    (("retinol", "salicylic acid"), "Over-exfoliation and irritation risk"),
    (("retinol", "vitamin c"), "Different pH requirements and potential irritation"),
    (("benzoyl peroxide", "retinol"), "Chemical interaction causing ingredient breakdown"),
];

const DEFAULT_INCOMPATIBILITY_REASON: &str = "Potential chemical or pH interaction";
const SEPARATE_USE: &str = "Use in separate routines or different times of day";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
}

/// Classe de um par; usada por [`InteractionAnalyzer::classify`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionKind {
    Synergistic,
    Incompatible,
    Potentiating,
    Neutral,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SynergyBenefits {
    pub combined_benefits: Vec<String>,
    pub combined_functions: Vec<String>,
    pub enhanced_efficacy: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Synergy {
    pub ingredients: [String; 2],
    pub reason: &'static str,
    pub strength: &'static str,
    pub benefits: SynergyBenefits,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Incompatibility {
    pub ingredients: [String; 2],
    pub reason: &'static str,
    pub severity: Severity,
    pub recommendation: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Potentiation {
    pub ingredients: [String; 2],
    pub reason: &'static str,
    pub enhancer: String,
    pub enhanced: String,
}

/// Pares agrupados por classe.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct InteractionResult {
    pub synergistic: Vec<Synergy>,
    pub incompatible: Vec<Incompatibility>,
    pub potentiating: Vec<Potentiation>,
    pub neutral: Vec<[String; 2]>,
}

impl InteractionResult {
    /// `true` se o par (em qualquer ordem) está entre os incompatíveis.
    pub fn has_conflict(&self, a: &str, b: &str) -> bool {
        self.incompatible.iter().any(|i| same_pair(&i.ingredients, a, b))
    }
}

fn same_pair(pair: &[String; 2], a: &str, b: &str) -> bool {
    (pair[0] == a && pair[1] == b) || (pair[0] == b && pair[1] == a)
}

pub struct InteractionAnalyzer<'g> {
    graph: &'g KnowledgeGraph,
}

impl<'g> InteractionAnalyzer<'g> {
    pub fn new(graph: &'g KnowledgeGraph) -> Self {
        Self { graph }
    }

    /// Analisa todos os pares dos ingredientes informados.
    pub fn analyze<S: AsRef<str>>(&self, names: &[S]) -> InteractionResult {
        let known: BTreeMap<&str, &Ingredient> = names
            .iter()
            .filter_map(|name| self.graph.ingredient(name.as_ref()))
            .map(|ingredient| (ingredient.key.as_str(), ingredient))
            .collect();
        let known: Vec<&Ingredient> = known.into_values().collect();

        let mut result = InteractionResult::default();
        for (i, a) in known.iter().enumerate() {
            for b in &known[i + 1..] {
                self.record(&mut result, a, b);
            }
        }

        tracing::debug!(
            ingredients = known.len(),
            synergistic = result.synergistic.len(),
            incompatible = result.incompatible.len(),
            potentiating = result.potentiating.len(),
            "Interações analisadas"
        );
        result
    }

    /// Classe de um único par; `None` se algum nome é desconhecido.
    pub fn classify(&self, a: &str, b: &str) -> Option<InteractionKind> {
        let a = self.graph.ingredient(a)?;
        let b = self.graph.ingredient(b)?;
        Some(kind_of(a, b))
    }

    fn record(&self, result: &mut InteractionResult, a: &Ingredient, b: &Ingredient) {
        let pair = [a.key.clone(), b.key.clone()];
        match kind_of(a, b) {
            InteractionKind::Synergistic => result.synergistic.push(Synergy {
                ingredients: pair,
                reason: "Ontologically defined synergy",
                strength: "high",
                benefits: synergy_benefits(a, b),
            }),
            InteractionKind::Incompatible => result.incompatible.push(Incompatibility {
                reason: incompatibility_reason(&a.key, &b.key),
                severity: severity(&a.key, &b.key),
                recommendation: SEPARATE_USE,
                ingredients: pair,
            }),
            InteractionKind::Potentiating => {
                let (enhancer, enhanced) = if a.potentiates(&b.key) { (a, b) } else { (b, a) };
                result.potentiating.push(Potentiation {
                    ingredients: pair,
                    reason: "One ingredient enhances the other's effect",
                    enhancer: enhancer.key.clone(),
                    enhanced: enhanced.key.clone(),
                });
            }
            InteractionKind::Neutral => result.neutral.push(pair),
        }
    }
}

fn kind_of(a: &Ingredient, b: &Ingredient) -> InteractionKind {
    if a.is_synergistic_with(&b.key) || b.is_synergistic_with(&a.key) {
        InteractionKind::Synergistic
    } else if a.is_incompatible_with(&b.key) || b.is_incompatible_with(&a.key) {
        InteractionKind::Incompatible
    } else if a.potentiates(&b.key) || b.potentiates(&a.key) {
        InteractionKind::Potentiating
    } else {
        InteractionKind::Neutral
    }
}

fn severity(a: &str, b: &str) -> Severity {
    let high = HIGH_SEVERITY_PAIRS
        .iter()
        .any(|(x, y)| (a == *x && b == *y) || (a == *y && b == *x));
    if high {
        Severity::High
    } else {
        Severity::Medium
    }
}

fn incompatibility_reason(a: &str, b: &str) -> &'static str {
    INCOMPATIBILITY_REASONS
        .iter()
        .find(|((x, y), _)| (a == *x && b == *y) || (a == *y && b == *x))
        .map(|(_, reason)| *reason)
        .unwrap_or(DEFAULT_INCOMPATIBILITY_REASON)
}

fn synergy_benefits(a: &Ingredient, b: &Ingredient) -> SynergyBenefits {
    let union = |x: &[String], y: &[String]| {
        let mut out: Vec<String> = Vec::with_capacity(x.len() + y.len());
        for value in x.iter().chain(y) {
            if !out.contains(value) {
                out.push(value.clone());
            }
        }
        out
    };
    let average = (f64::from(a.efficacy_score) + f64::from(b.efficacy_score)) / 2.0;
    SynergyBenefits {
        combined_benefits: union(&a.benefits, &b.benefits),
        combined_functions: union(&a.functions, &b.functions),
        enhanced_efficacy: (average + 10.0).min(100.0),
    }
}
