//! # Product Scorer
//!
//! Combina cinco sub-scores independentes (todos em `[0, 100]`) com pesos fixos:
//!
//! | Sub-score | Peso |
//! |-----------|------|
//! | Match semântico de ingredientes | 45% |
//! | Cobertura de preocupações | 25% |
//! | Sinergia entre ingredientes | 15% |
//! | Segurança da formulação | 10% |
//! | Relevância da categoria | 5% |
//!
//! O total é arredondado e limitado a `[0, 100]`. A explicação junta até
//! quatro motivos com um prefixo de faixa ([`MatchBand`]).

use serde::{Deserialize, Serialize};

use crate::core::{SensitivityTag, UserProfile};
use crate::reasoning::interactions::Severity;
use crate::reasoning::matching::{self, PRODUCT_CONCERN_BENEFITS};
use crate::reasoning::{ProfileKey, SemanticAnalysis};

/// Pesos do score combinado. Somam 1.0.
#[derive(Clone, Copy, Debug)]
pub struct ScoringWeights {
    pub semantic_match: f64,
    pub concerns_addressing: f64,
    pub ingredient_synergy: f64,
    pub formulation_safety: f64,
    pub category_relevance: f64,
}

pub const WEIGHTS: ScoringWeights = ScoringWeights {
    semantic_match: 0.45,
    concerns_addressing: 0.25,
    ingredient_synergy: 0.15,
    formulation_safety: 0.10,
    category_relevance: 0.05,
};

/// Recomendações consideradas no match semântico.
const SEMANTIC_TOP_N: usize = 8;
const MAX_EXPLANATION_PARTS: usize = 4;

/// Produto candidato, como fornecido pelo catálogo.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub product_name: String,
    pub brand: Option<String>,
    pub main_category: Option<String>,
    pub subcategory: Option<String>,
    pub key_ingredients: Vec<String>,
    pub suitable_for_skin_types: Vec<String>,
    pub addresses_concerns: Vec<String>,
    pub provided_benefits: Vec<String>,
    pub alcohol_free: Option<bool>,
    pub fragrance_free: Option<bool>,
    pub paraben_free: Option<bool>,
    pub sulfate_free: Option<bool>,
    pub silicone_free: Option<bool>,
}

impl Product {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            product_name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.key_ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }

    /// `true` se algum ingrediente-chave casa com o nome informado.
    pub fn contains_ingredient(&self, name: &str) -> bool {
        self.key_ingredients
            .iter()
            .any(|ingredient| matching::ingredient_names_match(ingredient, name))
    }

    /// Flag "livre de" para uma sensibilidade conhecida.
    fn free_of(&self, tag: &SensitivityTag) -> Option<bool> {
        match tag {
            SensitivityTag::Fragrance => self.fragrance_free,
            SensitivityTag::Alcohol => self.alcohol_free,
            SensitivityTag::Silicone => self.silicone_free,
            SensitivityTag::Sulfate => self.sulfate_free,
            SensitivityTag::Paraben => self.paraben_free,
            SensitivityTag::Other(_) => None,
        }
    }
}

/// Penalidade e rótulos de cada sensibilidade conhecida.
struct SafetyCheck {
    penalty: f64,
    safe: &'static str,
    unsafe_: &'static str,
}

fn safety_check(tag: &SensitivityTag) -> Option<SafetyCheck> {
    let (penalty, safe, unsafe_) = match tag {
        SensitivityTag::Fragrance => (25.0, "Fragrance-free formulation", "May contain fragrance"),
        SensitivityTag::Alcohol => (20.0, "Alcohol-free formulation", "May contain drying alcohols"),
        SensitivityTag::Silicone => (10.0, "Silicone-free formulation", "Contains silicones"),
        SensitivityTag::Paraben => (15.0, "Paraben-free formulation", "May contain parabens"),
        SensitivityTag::Sulfate => (15.0, "Sulfate-free formulation", "May contain sulfates"),
        SensitivityTag::Other(_) => return None,
    };
    Some(SafetyCheck {
        penalty,
        safe,
        unsafe_,
    })
}

/// Palavras-chave de categoria relevantes por tipo de pele e o bônus concedido.
const CATEGORY_RELEVANCE: &[(&str, &[&str], f64)] = &[
    ("dry", &["moisturizer", "serum", "oil", "cream", "hydrating", "nourishing"], 15.0),
    ("oily", &["cleanser", "toner", "serum", "gel", "oil control", "mattifying"], 15.0),
    ("combination", &["serum", "moisturizer", "toner", "balancing", "dual-action"], 12.0),
    ("sensitive", &["gentle", "serum", "moisturizer", "soothing", "calming"], 15.0),
    ("normal", &["serum", "moisturizer", "cleanser", "maintenance", "preventive"], 10.0),
];

/// Faixa qualitativa do score final.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchBand {
    Excellent,
    Good,
    Moderate,
    Limited,
}

impl MatchBand {
    pub fn of(score: u8) -> Self {
        match score {
            80.. => MatchBand::Excellent,
            60..=79 => MatchBand::Good,
            40..=59 => MatchBand::Moderate,
            _ => MatchBand::Limited,
        }
    }

    pub fn prefix(&self) -> &'static str {
        match self {
            MatchBand::Excellent => "Excellent match: ",
            MatchBand::Good => "Good match: ",
            MatchBand::Moderate => "Moderate match: ",
            MatchBand::Limited => "Limited match: ",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub semantic_match: u8,
    pub concerns_addressing: u8,
    pub ingredient_synergy: u8,
    pub formulation_safety: u8,
    pub category_relevance: u8,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientMatch {
    pub ingredient: String,
    pub score: u32,
    pub reasons: Vec<String>,
    pub efficacy: u8,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetails {
    pub direct_matches: usize,
    pub skin_type_match: bool,
    pub high_efficacy_count: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct InteractionCounts {
    pub synergistic: usize,
    pub incompatible: usize,
    pub potentiating: usize,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticInsights {
    pub ontology_matches: Vec<IngredientMatch>,
    pub match_details: MatchDetails,
    pub interactions: InteractionCounts,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductScore {
    pub score: u8,
    pub explanation: String,
    pub breakdown: ScoreBreakdown,
    pub insights: SemanticInsights,
    pub method: &'static str,
}

/// Sub-score parcial com os motivos que o produziram.
struct Component {
    score: f64,
    explanations: Vec<String>,
}

pub struct ProductScorer;

impl ProductScorer {
    pub fn score(product: &Product, profile: &UserProfile, analysis: &SemanticAnalysis) -> ProductScore {
        let key = ProfileKey::of(profile);
        let mut insights = SemanticInsights::default();

        let semantic = semantic_match(product, &key, analysis, &mut insights);
        let concerns = concern_coverage(product, &key.concerns);
        let synergy = ingredient_synergy(product, analysis, &mut insights.interactions);
        let safety = formulation_safety(product, &key.sensitivities);
        let category = category_relevance(product, &key.skin_type);

        let total = semantic.score * WEIGHTS.semantic_match
            + concerns.score * WEIGHTS.concerns_addressing
            + synergy.score * WEIGHTS.ingredient_synergy
            + safety.score * WEIGHTS.formulation_safety
            + category.score * WEIGHTS.category_relevance;
        let score = to_percent(total);

        let breakdown = ScoreBreakdown {
            semantic_match: to_percent(semantic.score),
            concerns_addressing: to_percent(concerns.score),
            ingredient_synergy: to_percent(synergy.score),
            formulation_safety: to_percent(safety.score),
            category_relevance: to_percent(category.score),
        };

        let parts: Vec<String> = [semantic, concerns, synergy, safety, category]
            .into_iter()
            .flat_map(|component| component.explanations)
            .collect();

        tracing::debug!(
            product = %product.product_name,
            score,
            semantic = breakdown.semantic_match,
            concerns = breakdown.concerns_addressing,
            "Produto pontuado"
        );

        ProductScore {
            score,
            explanation: build_explanation(&parts, score),
            breakdown,
            insights,
            method: if analysis.metadata.ontology_based {
                "Semantic Ontology Analysis"
            } else {
                "Rule-based Analysis"
            },
        }
    }
}

fn to_percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

fn semantic_match(
    product: &Product,
    key: &ProfileKey,
    analysis: &SemanticAnalysis,
    insights: &mut SemanticInsights,
) -> Component {
    let mut raw = 0.0;
    let mut explanations = Vec::new();

    for rec in analysis.recommended_ingredients.iter().take(SEMANTIC_TOP_N) {
        if product.contains_ingredient(&rec.ingredient) {
            raw += (f64::from(rec.score) / 12.0).min(8.0);
            insights.ontology_matches.push(IngredientMatch {
                ingredient: rec.ingredient.clone(),
                score: rec.score,
                reasons: rec.reasons.clone(),
                efficacy: rec.efficacy_score,
            });
        }
    }
    let direct = insights.ontology_matches.len();
    if direct > 0 {
        explanations.push(format!("Contains {direct} ontology-recommended ingredients"));
    }

    let skin_type_match = product
        .suitable_for_skin_types
        .iter()
        .any(|skin| skin.trim().eq_ignore_ascii_case(&key.skin_type));
    if skin_type_match {
        raw += 10.0;
        explanations.push(format!("Specifically formulated for {} skin", key.skin_type));
    }

    let high_efficacy = insights
        .ontology_matches
        .iter()
        .filter(|m| m.efficacy > 85)
        .count();
    if high_efficacy > 0 {
        raw += (high_efficacy as f64 * 2.0).min(5.0);
        explanations.push(format!("Contains {high_efficacy} high-efficacy ingredients"));
    }

    insights.match_details = MatchDetails {
        direct_matches: direct,
        skin_type_match,
        high_efficacy_count: high_efficacy,
    };

    Component {
        score: raw.min(50.0) * 2.0,
        explanations,
    }
}

fn concern_coverage(product: &Product, concerns: &[String]) -> Component {
    if concerns.is_empty() {
        return Component {
            score: 70.0,
            explanations: vec!["No specific concerns to address".to_string()],
        };
    }

    let addressed = concerns
        .iter()
        .filter(|concern| {
            product
                .addresses_concerns
                .iter()
                .any(|declared| matching::concerns_match(concern, declared))
                || matching::benefits_cover_concern(
                    PRODUCT_CONCERN_BENEFITS,
                    concern,
                    &product.provided_benefits,
                )
        })
        .count();

    if addressed == 0 {
        return Component {
            score: 30.0,
            explanations: vec!["Does not specifically target your concerns".to_string()],
        };
    }

    let ratio = addressed as f64 / concerns.len() as f64;
    let mut explanations = vec![format!(
        "Addresses {addressed}/{} of your concerns",
        concerns.len()
    )];
    if ratio >= 0.8 {
        explanations.push("Comprehensive concern coverage".to_string());
    }
    Component {
        score: 30.0 + ratio * 70.0,
        explanations,
    }
}

fn ingredient_synergy(
    product: &Product,
    analysis: &SemanticAnalysis,
    counts: &mut InteractionCounts,
) -> Component {
    let mut score: f64 = 50.0;
    if product.key_ingredients.len() < 2 {
        return Component {
            score,
            explanations: vec!["Single key ingredient - no interaction analysis".to_string()],
        };
    }

    let has_pair = |[a, b]: &[String; 2]| product.contains_ingredient(a) && product.contains_ingredient(b);
    let interactions = &analysis.interactions;

    for synergy in &interactions.synergistic {
        if has_pair(&synergy.ingredients) {
            counts.synergistic += 1;
            score += 15.0;
        }
    }
    for potentiation in &interactions.potentiating {
        if product.contains_ingredient(&potentiation.enhancer)
            && product.contains_ingredient(&potentiation.enhanced)
        {
            counts.potentiating += 1;
            score += 10.0;
        }
    }
    for conflict in &interactions.incompatible {
        if has_pair(&conflict.ingredients) {
            counts.incompatible += 1;
            score -= match conflict.severity {
                Severity::High => 25.0,
                Severity::Medium => 15.0,
            };
        }
    }

    let mut explanations = Vec::new();
    if counts.synergistic > 0 {
        explanations.push(format!("{} beneficial ingredient synergies", counts.synergistic));
    }
    if counts.potentiating > 0 {
        explanations.push(format!("{} ingredient enhancement effects", counts.potentiating));
    }
    if counts.incompatible > 0 {
        explanations.push(format!("{} potential ingredient conflicts", counts.incompatible));
    }
    if explanations.is_empty() {
        explanations.push("No significant ingredient interactions detected".to_string());
    }

    Component {
        score: score.clamp(0.0, 100.0),
        explanations,
    }
}

fn formulation_safety(product: &Product, sensitivities: &[SensitivityTag]) -> Component {
    if sensitivities.is_empty() {
        return Component {
            score: 100.0,
            explanations: vec!["No known sensitivities to check".to_string()],
        };
    }

    let mut score: f64 = 100.0;
    let mut explanations = Vec::new();
    for tag in sensitivities {
        let Some(check) = safety_check(tag) else {
            continue;
        };
        if product.free_of(tag) == Some(true) {
            explanations.push(check.safe.to_string());
        } else {
            score -= check.penalty;
            explanations.push(check.unsafe_.to_string());
        }
    }

    Component {
        score: score.max(0.0),
        explanations,
    }
}

fn category_relevance(product: &Product, skin_type: &str) -> Component {
    let Some((_, keywords, bonus)) = CATEGORY_RELEVANCE
        .iter()
        .find(|(skin, _, _)| *skin == skin_type)
    else {
        return Component {
            score: 60.0,
            explanations: Vec::new(),
        };
    };

    let fields = [
        product.main_category.as_deref(),
        product.subcategory.as_deref(),
        Some(product.product_name.as_str()),
    ];
    let relevant = fields.iter().flatten().any(|field| {
        let field = field.to_lowercase();
        keywords.iter().any(|keyword| field.contains(keyword))
    });

    if relevant {
        Component {
            score: 80.0 + bonus,
            explanations: vec![format!("Suitable category for {skin_type} skin")],
        }
    } else {
        Component {
            score: 50.0,
            explanations: Vec::new(),
        }
    }
}

/// Até quatro motivos não vazios, unidos por `" • "`, com o prefixo da faixa.
pub fn build_explanation(parts: &[String], score: u8) -> String {
    let parts: Vec<&str> = parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .take(MAX_EXPLANATION_PARTS)
        .collect();
    if parts.is_empty() {
        return "Basic compatibility analysis completed".to_string();
    }
    format!("{}{}", MatchBand::of(score).prefix(), parts.join(" • "))
}
