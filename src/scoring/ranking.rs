//! Ranking de produtos candidatos contra um perfil.
//!
//! Pontua em paralelo com `rayon`, descarta os abaixo do limiar de
//! qualidade, ordena e anexa até três tags por produto.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::product::{Product, ProductScore, ProductScorer};
use crate::core::UserProfile;
use crate::reasoning::SemanticAnalysis;

pub const DEFAULT_LIMIT: usize = 20;
const QUALITY_THRESHOLD: u8 = 30;
const STRICT_QUALITY_THRESHOLD: u8 = 50;
const MAX_TAGS: usize = 3;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RankOptions {
    pub limit: Option<usize>,
    pub strict_mode: bool,
}

impl RankOptions {
    fn threshold(&self) -> u8 {
        if self.strict_mode {
            STRICT_QUALITY_THRESHOLD
        } else {
            QUALITY_THRESHOLD
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedProduct {
    pub product: Product,
    #[serde(flatten)]
    pub result: ProductScore,
    pub tags: Vec<&'static str>,
}

/// Pontua, filtra e ordena os produtos. Empates mantêm a ordem de entrada.
pub fn rank_products(
    products: &[Product],
    profile: &UserProfile,
    analysis: &SemanticAnalysis,
    options: &RankOptions,
) -> Vec<RankedProduct> {
    let threshold = options.threshold();
    let mut ranked: Vec<RankedProduct> = products
        .par_iter()
        .map(|product| {
            let result = ProductScorer::score(product, profile, analysis);
            RankedProduct {
                tags: product_tags(&result),
                product: product.clone(),
                result,
            }
        })
        .filter(|ranked| ranked.result.score > threshold)
        .collect();

    ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
    ranked.truncate(options.limit.unwrap_or(DEFAULT_LIMIT));

    tracing::debug!(
        candidates = products.len(),
        ranked = ranked.len(),
        strict = options.strict_mode,
        "Produtos ranqueados"
    );
    ranked
}

/// Tags de destaque, na ordem de prioridade, limitadas a três.
pub fn product_tags(result: &ProductScore) -> Vec<&'static str> {
    let mut tags = Vec::new();
    match result.score {
        85.. => tags.push("Perfect Match"),
        70..=84 => tags.push("Great Match"),
        55..=69 => tags.push("Good Match"),
        _ => {}
    }
    if !result.insights.ontology_matches.is_empty() {
        tags.push("Semantic Recommended");
    }
    if result.insights.interactions.synergistic > 0 {
        tags.push("Synergistic Formula");
    }
    if result.insights.interactions.incompatible > 0 {
        tags.push("Interaction Warning");
    }
    if result.breakdown.semantic_match > 80 {
        tags.push("AI Recommended");
    }
    if result.breakdown.concerns_addressing > 85 {
        tags.push("Targets Your Concerns");
    }
    if result.breakdown.formulation_safety > 95 {
        tags.push("Sensitivity Safe");
    }
    tags.truncate(MAX_TAGS);
    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasoning::analyze_profile;
    use crate::testing;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new("Plain Lotion").with_ingredients(["Water"]),
            Product {
                product_name: "Clarifying Serum".into(),
                main_category: Some("Serum".into()),
                key_ingredients: vec!["Niacinamide".into(), "Salicylic Acid".into()],
                suitable_for_skin_types: vec!["oily".into()],
                addresses_concerns: vec!["acne".into(), "large pores".into()],
                ..Product::default()
            },
            Product::new("Retinol Night Gel").with_ingredients(["Retinol", "Salicylic Acid"]),
        ]
    }

    #[test]
    fn ranks_by_score_and_applies_threshold() {
        let graph = testing::sample_graph();
        let profile = UserProfile::new("oily").with_concerns(["acne", "largepores"]);
        let analysis = analyze_profile(&graph, &profile);

        let ranked = rank_products(&catalog(), &profile, &analysis, &RankOptions::default());
        assert_eq!(ranked[0].product.product_name, "Clarifying Serum");
        assert!(ranked.windows(2).all(|w| w[0].result.score >= w[1].result.score));
        assert!(ranked.iter().all(|r| r.result.score > QUALITY_THRESHOLD));

        let strict = RankOptions {
            limit: Some(1),
            strict_mode: true,
        };
        let top = rank_products(&catalog(), &profile, &analysis, &strict);
        assert_eq!(top.len(), 1);
        assert!(top[0].result.score > STRICT_QUALITY_THRESHOLD);
    }

    #[test]
    fn tags_are_capped_at_three() {
        let graph = testing::sample_graph();
        let profile = UserProfile::new("oily").with_concerns(["acne", "largepores"]);
        let analysis = analyze_profile(&graph, &profile);
        let ranked = rank_products(&catalog(), &profile, &analysis, &RankOptions::default());
        let serum = &ranked[0];
        assert_eq!(serum.tags, vec!["Great Match", "Semantic Recommended", "Targets Your Concerns"]);
        assert!(ranked.iter().all(|r| r.tags.len() <= MAX_TAGS));
    }
}
