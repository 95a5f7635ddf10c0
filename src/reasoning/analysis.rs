//! Análise semântica completa de um perfil: interações entre todas as
//! recomendações, recomendações filtradas por sensibilidade, narrativa e
//! confiança.
//!
//! É o valor guardado no [`ReasoningCache`](crate::cache::ReasoningCache),
//! e por isso depende **apenas** da assinatura do perfil e do grafo.

use serde::Serialize;

use super::confidence::{reasoning_narrative, semantic_confidence};
use super::matching;
use super::{InteractionAnalyzer, InteractionResult, IngredientRecommender, Recommendation, SensitivityFilter};
use crate::core::{KnowledgeGraph, SensitivityTag, UserProfile};

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    pub total_ingredients: usize,
    pub processed_concerns: usize,
    pub applied_filters: usize,
    pub ontology_based: bool,
    pub cache_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SemanticAnalysis {
    pub recommended_ingredients: Vec<Recommendation>,
    pub interactions: InteractionResult,
    pub reasoning: Vec<String>,
    pub method: &'static str,
    pub confidence: u8,
    pub metadata: AnalysisMetadata,
}

/// Perfil reduzido à forma canônica: o que de fato influencia a análise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileKey {
    pub skin_type: String,
    pub concerns: Vec<String>,
    pub sensitivities: Vec<SensitivityTag>,
}

impl ProfileKey {
    pub fn of(profile: &UserProfile) -> Self {
        let mut sensitivities = profile.known_sensitivities.clone();
        sensitivities.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        sensitivities.dedup();
        Self {
            skin_type: profile.skin_type_key(),
            concerns: matching::normalize_concerns(&profile.skin_concerns),
            sensitivities,
        }
    }

    /// Assinatura determinística: `tipo|preocupações|sensibilidades`.
    pub fn signature(&self) -> String {
        let sensitivities: Vec<&str> = self.sensitivities.iter().map(SensitivityTag::as_str).collect();
        format!(
            "{}|{}|{}",
            self.skin_type,
            self.concerns.join(","),
            sensitivities.join(",")
        )
    }
}

/// Executa a análise sem cache.
pub fn analyze_profile(graph: &KnowledgeGraph, profile: &UserProfile) -> SemanticAnalysis {
    let key = ProfileKey::of(profile);

    let recommended = IngredientRecommender::new(graph).recommend(&key.skin_type, &key.concerns);

    // interações sobre a lista completa; o filtro de sensibilidade vem depois
    let names: Vec<&str> = recommended.iter().map(|rec| rec.ingredient.as_str()).collect();
    let interactions = InteractionAnalyzer::new(graph).analyze(&names);
    let recommended = SensitivityFilter::apply(recommended, &key.sensitivities);

    let reasoning = reasoning_narrative(
        &recommended,
        &interactions,
        &key.skin_type,
        key.concerns.len(),
        key.sensitivities.len(),
        graph,
    );
    let confidence = semantic_confidence(&recommended, &interactions, key.concerns.len(), graph);

    SemanticAnalysis {
        recommended_ingredients: recommended,
        interactions,
        reasoning,
        method: graph.method(),
        confidence,
        metadata: AnalysisMetadata {
            total_ingredients: graph.ingredients.len(),
            processed_concerns: key.concerns.len(),
            applied_filters: key.sensitivities.len(),
            ontology_based: graph.is_loaded(),
            cache_key: key.signature(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn signature_ignores_order_case_and_duplicates() {
        let a = UserProfile::new("Oily")
            .with_concerns(["Large Pores", "acne"])
            .with_sensitivities(["paraben", "fragrance", "alcohol"]);
        let b = UserProfile::new("oily ")
            .with_concerns(["acne", "large_pores", "acne"])
            .with_sensitivities(["Fragrance", "paraben", "ALCOHOL", "alcohol"]);
        assert_eq!(ProfileKey::of(&a).signature(), ProfileKey::of(&b).signature());
        assert_eq!(
            ProfileKey::of(&a).signature(),
            "oily|acne,largepores|alcohol,fragrance,paraben"
        );
    }

    #[test]
    fn interactions_are_analyzed_before_sensitivity_filter() {
        let graph = testing::sample_graph();
        let profile = UserProfile::new("oily")
            .with_concerns(["acne", "largepores"])
            .with_sensitivities(["retinol"]);
        let analysis = analyze_profile(&graph, &profile);
        assert!(analysis
            .recommended_ingredients
            .iter()
            .all(|r| r.ingredient != "retinol"));

        let unfiltered = IngredientRecommender::new(&graph).recommend("oily", &["acne", "largepores"]);
        let names: Vec<&str> = unfiltered.iter().map(|r| r.ingredient.as_str()).collect();
        let expected = InteractionAnalyzer::new(&graph).analyze(&names);

        assert_eq!(analysis.interactions, expected);
        assert_eq!(analysis.interactions.incompatible.len(), 2);
        assert!(analysis.interactions.has_conflict("retinol", "salicylic acid"));
        assert!(analysis.interactions.has_conflict("retinol", "benzoyl peroxide"));
        assert_eq!(analysis.metadata.applied_filters, 1);
    }

    #[test]
    fn analysis_reports_method_and_confidence() {
        let graph = testing::sample_graph();
        let profile = UserProfile::new("oily").with_concerns(["acne", "largepores"]);
        let analysis = analyze_profile(&graph, &profile);
        assert_eq!(analysis.method, "Semantic Ontology Reasoning");
        assert_eq!(analysis.confidence, 77);
        assert!(!analysis.interactions.has_conflict("retinol", "vitamin c"));
        assert!(analysis.interactions.has_conflict("retinol", "salicylic acid"));
        assert_eq!(analysis.metadata.cache_key, "oily|acne,largepores|");
    }
}
