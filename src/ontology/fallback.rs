//! # Fallback Knowledge Provider
//!
//! Conhecimento embutido usado quando nenhum documento pôde ser carregado.
//! Oito ingredientes bem estudados, com o mesmo formato do grafo completo,
//! garantem que o modo degradado ainda produza recomendações úteis.

use crate::core::{EntityKind, Ingredient, KnowledgeGraph, KnowledgeSource, LabeledEntity};

struct FallbackIngredient {
    name: &'static str,
    recommended_for: &'static [&'static str],
    treats: &'static [&'static str],
    functions: &'static [&'static str],
    benefits: &'static [&'static str],
    synergistic_with: &'static [&'static str],
    incompatible_with: &'static [&'static str],
    efficacy: u8,
    safety: u8,
}

const INGREDIENTS: &[FallbackIngredient] = &[
    FallbackIngredient {
        name: "hyaluronic acid",
        recommended_for: &["dry", "normal", "sensitive"],
        treats: &["dryness", "finelines"],
        functions: &["humectant"],
        benefits: &["hydrating", "anti-aging"],
        synergistic_with: &["niacinamide", "ceramides", "glycerin"],
        incompatible_with: &[],
        efficacy: 95,
        safety: 10,
    },
    FallbackIngredient {
        name: "niacinamide",
        recommended_for: &["oily", "combination", "sensitive"],
        treats: &["oiliness", "largepores", "redness"],
        functions: &["sebum regulator", "anti-inflammatory"],
        benefits: &["pore minimizing", "oil controlling"],
        synergistic_with: &["hyaluronic acid", "ceramides"],
        incompatible_with: &["vitamin c"],
        efficacy: 88,
        safety: 9,
    },
    FallbackIngredient {
        name: "salicylic acid",
        recommended_for: &["oily", "combination"],
        treats: &["acne", "largepores", "uneventexture"],
        functions: &["exfoliant"],
        benefits: &["exfoliating & renewing", "pore minimizing"],
        synergistic_with: &[],
        incompatible_with: &["retinol", "vitamin c"],
        efficacy: 85,
        safety: 7,
    },
    FallbackIngredient {
        name: "retinol",
        recommended_for: &["normal", "oily"],
        treats: &["wrinkles", "finelines", "acne", "uneventexture"],
        functions: &["cell renewal"],
        benefits: &["anti-aging", "exfoliating & renewing"],
        synergistic_with: &["hyaluronic acid"],
        incompatible_with: &["salicylic acid", "vitamin c"],
        efficacy: 95,
        safety: 5,
    },
    FallbackIngredient {
        name: "vitamin c",
        recommended_for: &["normal", "dry"],
        treats: &["darkspots", "wrinkles", "dullness"],
        functions: &["antioxidant"],
        benefits: &["brightening", "anti-aging", "protective & shielding"],
        synergistic_with: &["vitamin e"],
        incompatible_with: &["niacinamide", "salicylic acid", "retinol"],
        efficacy: 92,
        safety: 6,
    },
    FallbackIngredient {
        name: "ceramides",
        recommended_for: &["dry", "sensitive", "normal"],
        treats: &["dryness", "sensitivity"],
        functions: &["occlusive", "emollient"],
        benefits: &["hydrating", "soothing & calming"],
        synergistic_with: &["hyaluronic acid", "niacinamide"],
        incompatible_with: &[],
        efficacy: 90,
        safety: 10,
    },
    FallbackIngredient {
        name: "aloe vera",
        recommended_for: &["sensitive", "dry", "normal"],
        treats: &["sensitivity", "redness", "dryness"],
        functions: &["anti-inflammatory", "humectant"],
        benefits: &["soothing & calming", "hydrating"],
        synergistic_with: &["centella asiatica"],
        incompatible_with: &[],
        efficacy: 75,
        safety: 10,
    },
    FallbackIngredient {
        name: "centella asiatica",
        recommended_for: &["sensitive", "combination"],
        treats: &["sensitivity", "redness", "acne"],
        functions: &["anti-inflammatory"],
        benefits: &["soothing & calming"],
        synergistic_with: &["aloe vera", "niacinamide"],
        incompatible_with: &[],
        efficacy: 80,
        safety: 10,
    },
];

const SKIN_TYPES: &[(&str, &str)] = &[
    ("normal", "Normal"),
    ("dry", "Dry"),
    ("oily", "Oily"),
    ("combination", "Combination"),
    ("sensitive", "Sensitive"),
];

const CONCERNS: &[(&str, &str)] = &[
    ("acne", "Acne"),
    ("darkspots", "Dark Spots"),
    ("dryness", "Dryness"),
    ("dullness", "Dullness"),
    ("finelines", "Fine Lines"),
    ("largepores", "Large Pores"),
    ("oiliness", "Oiliness"),
    ("redness", "Redness"),
    ("sensitivity", "Sensitivity"),
    ("uneventexture", "Uneven Texture"),
    ("wrinkles", "Wrinkles"),
];

fn owned(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

/// Monta o grafo de fallback. Sempre o mesmo conteúdo, origem [`KnowledgeSource::Fallback`].
pub fn knowledge_graph() -> KnowledgeGraph {
    let mut graph = KnowledgeGraph::empty(KnowledgeSource::Fallback);

    for data in INGREDIENTS {
        let mut ingredient = Ingredient::new(data.name);
        ingredient.recommended_for = owned(data.recommended_for);
        ingredient.treats = owned(data.treats);
        ingredient.functions = owned(data.functions);
        ingredient.benefits = owned(data.benefits);
        ingredient.synergistic_with = owned(data.synergistic_with);
        ingredient.incompatible_with = owned(data.incompatible_with);
        ingredient.efficacy_score = data.efficacy;
        ingredient.safety_rating = data.safety;
        graph.ingredients.insert(ingredient.key.clone(), ingredient);
    }

    for (key, label) in SKIN_TYPES {
        graph.insert_entity(LabeledEntity::new(EntityKind::SkinType, *key, *label));
    }
    for (key, label) in CONCERNS {
        graph.insert_entity(LabeledEntity::new(EntityKind::Concern, *key, *label));
    }
    for ingredient in INGREDIENTS {
        for benefit in ingredient.benefits {
            graph.insert_entity(LabeledEntity::new(EntityKind::Benefit, *benefit, *benefit));
        }
        for function in ingredient.functions {
            graph.insert_entity(LabeledEntity::new(EntityKind::Function, *function, *function));
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasoning::IngredientRecommender;

    #[test]
    fn fallback_is_not_loaded() {
        let graph = knowledge_graph();
        assert!(!graph.is_loaded());
        assert_eq!(graph.method(), "Rule-based Fallback");
        assert_eq!(graph.ingredients.len(), 8);
        assert_eq!(graph.skin_types.len(), 5);
    }

    #[test]
    fn fallback_still_recommends() {
        let graph = knowledge_graph();
        let recs = IngredientRecommender::new(&graph).recommend("oily", &["acne"]);
        assert!(!recs.is_empty());
        // niacinamida trata acne via "pore minimizing" e soma os bônus de função
        assert_eq!(recs[0].ingredient, "niacinamide");
    }

    #[test]
    fn synonyms_work_against_fallback_data() {
        let graph = knowledge_graph();
        assert_eq!(graph.ingredient("Nicotinamide").map(|i| i.key.as_str()), Some("niacinamide"));
    }
}
