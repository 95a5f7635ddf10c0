//! Confiança e narrativa da análise semântica.
//!
//! Ambas são funções puras das recomendações já filtradas, das interações
//! encontradas entre elas e do grafo em uso.

use std::collections::BTreeSet;

use super::interactions::InteractionResult;
use super::recommender::Recommendation;
use crate::core::KnowledgeGraph;

pub const MIN_CONFIDENCE: f64 = 35.0;
pub const MAX_CONFIDENCE: f64 = 98.0;

/// Grafos carregados acima deste tamanho recebem o bônus de ontologia completa.
const RICH_GRAPH_INGREDIENTS: usize = 10;

/// Preocupações cobertas por alguma recomendação, e o total pedido.
pub fn concern_coverage(recommendations: &[Recommendation], requested: usize) -> (usize, usize) {
    let addressed: BTreeSet<&str> = recommendations
        .iter()
        .flat_map(|rec| rec.treats_concerns.iter().map(String::as_str))
        .collect();
    (addressed.len(), requested)
}

/// Confiança inteira em `[35, 98]`.
///
/// `40 + min(25, média/4) + min(15, 3·sinergias) − min(15, 5·conflitos)
///  + 15 (ontologia carregada com mais de 10 ingredientes) + round(10·cobertura)`
pub fn semantic_confidence(
    recommendations: &[Recommendation],
    interactions: &InteractionResult,
    requested_concerns: usize,
    graph: &KnowledgeGraph,
) -> u8 {
    let mut confidence = 40.0;

    if !recommendations.is_empty() {
        let total: u32 = recommendations.iter().map(|rec| rec.score).sum();
        let average = f64::from(total) / recommendations.len() as f64;
        confidence += (average / 4.0).min(25.0);
    }

    confidence += (interactions.synergistic.len() as f64 * 3.0).min(15.0);
    confidence -= (interactions.incompatible.len() as f64 * 5.0).min(15.0);

    if graph.is_loaded() && graph.ingredients.len() > RICH_GRAPH_INGREDIENTS {
        confidence += 15.0;
    }

    if requested_concerns > 0 {
        let (addressed, requested) = concern_coverage(recommendations, requested_concerns);
        confidence += (addressed as f64 / requested as f64 * 10.0).round();
    }

    confidence.round().clamp(MIN_CONFIDENCE, MAX_CONFIDENCE) as u8
}

/// Frases explicativas, na ordem: visão geral, personalização, melhores
/// resultados, cobertura, sinergias, conflitos, filtros e metodologia.
pub fn reasoning_narrative(
    recommendations: &[Recommendation],
    interactions: &InteractionResult,
    skin_type: &str,
    requested_concerns: usize,
    sensitivities: usize,
    graph: &KnowledgeGraph,
) -> Vec<String> {
    let mut reasoning = vec![
        format!(
            "Analyzed {} ingredients using semantic ontology reasoning",
            graph.ingredients.len()
        ),
        format!(
            "Personalized analysis for {skin_type} skin with {requested_concerns} specific concerns"
        ),
    ];

    let top = &recommendations[..recommendations.len().min(3)];
    if !top.is_empty() {
        let names: Vec<&str> = top.iter().map(|rec| rec.ingredient.as_str()).collect();
        let scores: Vec<String> = top.iter().map(|rec| rec.score.to_string()).collect();
        reasoning.push(format!(
            "Top matches: {} (scores: {})",
            names.join(", "),
            scores.join(", ")
        ));
    }

    if requested_concerns > 0 {
        let (addressed, requested) = concern_coverage(recommendations, requested_concerns);
        let percent = (addressed as f64 / requested as f64 * 100.0).round();
        reasoning.push(format!(
            "Addresses {addressed}/{requested} concerns ({percent}% coverage)"
        ));
    }

    if !interactions.synergistic.is_empty() {
        reasoning.push(format!(
            "Found {} beneficial ingredient combinations for enhanced efficacy",
            interactions.synergistic.len()
        ));
    }
    if !interactions.incompatible.is_empty() {
        reasoning.push(format!(
            "Detected {} potential conflicts - use timing strategies to avoid interactions",
            interactions.incompatible.len()
        ));
    }

    if sensitivities > 0 {
        reasoning.push(format!(
            "Applied safety filters for {sensitivities} known sensitivities"
        ));
    }

    reasoning.push(if graph.is_loaded() {
        format!(
            "Analysis powered by semantic web ontology with {} ingredients and {} relationships",
            graph.ingredients.len(),
            relationship_count(graph)
        )
    } else {
        "Analysis using rule-based reasoning with ingredient interaction detection".to_string()
    });

    reasoning
}

/// Total de arestas entre entidades declaradas nos ingredientes.
fn relationship_count(graph: &KnowledgeGraph) -> usize {
    graph
        .ingredients
        .values()
        .map(|i| {
            i.recommended_for.len()
                + i.treats.len()
                + i.functions.len()
                + i.benefits.len()
                + i.synergistic_with.len()
                + i.incompatible_with.len()
                + i.potentiates_effect_of.len()
        })
        .sum()
}
