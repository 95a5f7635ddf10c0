//! # Ingredient Recommender
//!
//! Pontua cada ingrediente do [`KnowledgeGraph`] contra um tipo de pele e
//! uma lista de preocupações. A pontuação é aditiva e cada componente tem
//! teto próprio:
//!
//! | Componente | Máximo | Regra |
//! |------------|--------|-------|
//! | Tipo de pele | 40 | exato → 40; parcial (tabela) → 15 |
//! | Preocupações | 50 | `min(50, tratadas × 25)` |
//! | Eficácia/segurança | 10 | `efficacy/100·5 + safety/10·5` |
//! | Multifuncional | 5 | `min(5, funções)` quando há mais de uma função |
//! | Diversidade de benefícios | 5 | `min(5, benefícios)` |
//!
//! Ingredientes com score ≤ [`NOISE_FLOOR`] são descartados; os restantes
//! são ordenados por score, depois eficácia (desc), depois chave (asc), e
//! truncados em [`MAX_RECOMMENDATIONS`].

use std::cmp::Reverse;

use serde::Serialize;

use super::matching::{self, INGREDIENT_CONCERN_BENEFITS, PARTIAL_SKIN_TYPE_SCORE};
use crate::core::{Ingredient, KnowledgeGraph};

/// Scores iguais ou abaixo deste valor nunca aparecem no resultado.
pub const NOISE_FLOOR: u32 = 25;
/// Tamanho máximo da lista recomendada.
pub const MAX_RECOMMENDATIONS: usize = 15;

const SKIN_TYPE_SCORE: f64 = 40.0;
const CONCERN_POINTS: f64 = 25.0;
const CONCERN_CAP: f64 = 50.0;
const BONUS_CAP: usize = 5;

/// Componente de pontuação que contribuiu para a confiança de uma recomendação.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ConfidenceFactor {
    pub factor: &'static str,
    pub weight: f64,
    pub value: f64,
}

/// Ingrediente recomendado com o rastro de por que pontuou.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub ingredient: String,
    pub label: String,
    /// Score arredondado em `[0, 100]`.
    pub score: u32,
    pub reasons: Vec<String>,
    pub functions: Vec<String>,
    pub benefits: Vec<String>,
    /// Preocupações (forma compacta) que o ingrediente trata.
    pub treats_concerns: Vec<String>,
    pub efficacy_score: u8,
    pub safety_rating: u8,
    pub confidence_factors: Vec<ConfidenceFactor>,
    pub skin_type_match: bool,
}

/// Recomendador sem estado; empresta o grafo durante a consulta.
pub struct IngredientRecommender<'g> {
    graph: &'g KnowledgeGraph,
}

impl<'g> IngredientRecommender<'g> {
    pub fn new(graph: &'g KnowledgeGraph) -> Self {
        Self { graph }
    }

    /// Lista ranqueada de ingredientes para o perfil.
    pub fn recommend<S: AsRef<str>>(&self, skin_type: &str, concerns: &[S]) -> Vec<Recommendation> {
        let skin_type = skin_type.trim().to_lowercase();
        let concerns = matching::normalize_concerns(concerns);

        let mut recommendations: Vec<Recommendation> = self
            .graph
            .ingredients
            .values()
            .map(|ingredient| self.evaluate(ingredient, &skin_type, &concerns))
            .filter(|rec| rec.score > NOISE_FLOOR)
            .collect();

        recommendations.sort_by_key(|rec| {
            (Reverse(rec.score), Reverse(rec.efficacy_score), rec.ingredient.clone())
        });
        recommendations.truncate(MAX_RECOMMENDATIONS);

        tracing::debug!(
            skin_type = %skin_type,
            concerns = concerns.len(),
            recommended = recommendations.len(),
            "Ingredientes pontuados"
        );
        recommendations
    }

    /// Pontua um único ingrediente, sem aplicar o piso de ruído.
    ///
    /// `skin_type` em minúsculas e `concerns` já normalizadas
    /// (ver [`matching::normalize_concerns`]).
    pub fn evaluate(&self, ingredient: &Ingredient, skin_type: &str, concerns: &[String]) -> Recommendation {
        let mut score = 0.0;
        let mut reasons = Vec::new();
        let mut confidence_factors = Vec::new();

        let skin_type_match = ingredient.is_recommended_for(skin_type);
        if skin_type_match {
            score += SKIN_TYPE_SCORE;
            reasons.push(format!("Ontologically recommended for {skin_type} skin"));
            confidence_factors.push(ConfidenceFactor {
                factor: "skin_type_match",
                weight: 0.4,
                value: 1.0,
            });
        } else if let Some(partial) = matching::partial_skin_types(skin_type)
            .iter()
            .find(|partial| ingredient.is_recommended_for(partial))
        {
            score += PARTIAL_SKIN_TYPE_SCORE;
            reasons.push(format!("Compatible via {partial} skin properties"));
            confidence_factors.push(ConfidenceFactor {
                factor: "skin_type_partial",
                weight: 0.2,
                value: PARTIAL_SKIN_TYPE_SCORE / 20.0,
            });
        }

        let treats_concerns = treated_concerns(ingredient, concerns);
        if !treats_concerns.is_empty() {
            score += (treats_concerns.len() as f64 * CONCERN_POINTS).min(CONCERN_CAP);
            reasons.push(format!(
                "Treats {} of your concerns: {}",
                treats_concerns.len(),
                treats_concerns.join(", ")
            ));
            confidence_factors.push(ConfidenceFactor {
                factor: "concern_treatment",
                weight: 0.5,
                value: treats_concerns.len() as f64 / concerns.len() as f64,
            });
        }

        score += f64::from(ingredient.efficacy_score) / 100.0 * 5.0
            + f64::from(ingredient.safety_rating) / 10.0 * 5.0;
        if ingredient.efficacy_score > 80 {
            reasons.push(format!("High efficacy rating ({}/100)", ingredient.efficacy_score));
        }
        if ingredient.safety_rating > 8 {
            reasons.push(format!("Excellent safety profile ({}/10)", ingredient.safety_rating));
        }

        if ingredient.functions.len() > 1 {
            score += ingredient.functions.len().min(BONUS_CAP) as f64;
            reasons.push(format!("Multi-functional: {}", first_three(&ingredient.functions)));
        }

        if !ingredient.benefits.is_empty() {
            score += ingredient.benefits.len().min(BONUS_CAP) as f64;
            reasons.push(format!("Provides: {}", first_three(&ingredient.benefits)));
        }

        Recommendation {
            ingredient: ingredient.key.clone(),
            label: ingredient.label.clone(),
            score: score.round().clamp(0.0, 100.0) as u32,
            reasons,
            functions: ingredient.functions.clone(),
            benefits: ingredient.benefits.clone(),
            treats_concerns,
            efficacy_score: ingredient.efficacy_score,
            safety_rating: ingredient.safety_rating,
            confidence_factors,
            skin_type_match,
        }
    }
}

/// Preocupações tratadas diretamente (`treats`) ou via tabela de benefícios.
fn treated_concerns(ingredient: &Ingredient, concerns: &[String]) -> Vec<String> {
    concerns
        .iter()
        .filter(|concern| {
            ingredient
                .treats
                .iter()
                .any(|treated| matching::concerns_match(concern, treated))
                || matching::benefits_cover_concern(
                    INGREDIENT_CONCERN_BENEFITS,
                    concern,
                    &ingredient.benefits,
                )
        })
        .cloned()
        .collect()
}

fn first_three(values: &[String]) -> String {
    values.iter().take(3).map(String::as_str).collect::<Vec<_>>().join(", ")
}
