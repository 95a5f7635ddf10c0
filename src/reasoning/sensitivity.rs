//! # Sensitivity Filter
//!
//! Remove recomendações cujo nome ou label contenha algum marcador de uma
//! sensibilidade declarada. Filtro puro: preserva a ordem e não altera
//! scores.

use super::recommender::Recommendation;
use crate::core::SensitivityTag;

/// Marcadores (substrings) associados a cada sensibilidade conhecida.
fn markers(tag: &SensitivityTag) -> &'static [&'static str] {
    match tag {
        SensitivityTag::Fragrance => &["fragrance", "essential oil", "perfume"],
        SensitivityTag::Alcohol => &["alcohol", "ethanol", "denatured alcohol"],
        SensitivityTag::Silicone => &["silicone", "dimethicone", "cyclomethicone"],
        SensitivityTag::Sulfate => &["sulfate", "sls", "sodium lauryl sulfate"],
        SensitivityTag::Paraben => &["paraben", "methylparaben", "propylparaben"],
        SensitivityTag::Other(_) => &[],
    }
}

/// `true` se o texto contém algum marcador da sensibilidade.
///
/// Tags desconhecidas usam o próprio texto como único marcador.
pub fn triggers(tag: &SensitivityTag, text: &str) -> bool {
    let text = text.to_lowercase();
    match tag {
        SensitivityTag::Other(marker) => !marker.is_empty() && text.contains(marker.as_str()),
        known => markers(known).iter().any(|marker| text.contains(marker)),
    }
}

pub struct SensitivityFilter;

impl SensitivityFilter {
    /// Mantém apenas as recomendações que não disparam nenhuma sensibilidade.
    pub fn apply(recommendations: Vec<Recommendation>, sensitivities: &[SensitivityTag]) -> Vec<Recommendation> {
        if sensitivities.is_empty() {
            return recommendations;
        }
        let before = recommendations.len();
        let kept: Vec<Recommendation> = recommendations
            .into_iter()
            .filter(|rec| !Self::excludes(rec, sensitivities))
            .collect();
        tracing::debug!(
            removed = before - kept.len(),
            sensitivities = sensitivities.len(),
            "Filtro de sensibilidade aplicado"
        );
        kept
    }

    pub fn excludes(rec: &Recommendation, sensitivities: &[SensitivityTag]) -> bool {
        sensitivities
            .iter()
            .any(|tag| triggers(tag, &rec.ingredient) || triggers(tag, &rec.label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reasoning::IngredientRecommender;
    use crate::testing;

    fn oily_acne() -> Vec<Recommendation> {
        let graph = testing::sample_graph();
        IngredientRecommender::new(&graph).recommend("oily", &["acne", "largepores"])
    }

    #[test]
    fn fragrance_removes_essential_oils() {
        let recs = oily_acne();
        let kept = SensitivityFilter::apply(recs.clone(), &[SensitivityTag::Fragrance]);
        assert_eq!(kept.len(), recs.len() - 1);
        assert!(kept.iter().all(|r| r.ingredient != "lavender essential oil"));
    }

    #[test]
    fn filtering_preserves_order() {
        let recs = oily_acne();
        let kept = SensitivityFilter::apply(recs.clone(), &[SensitivityTag::Fragrance]);
        let expected: Vec<_> = recs
            .into_iter()
            .filter(|r| r.ingredient != "lavender essential oil")
            .collect();
        assert_eq!(kept, expected);
    }

    #[test]
    fn unknown_tags_use_their_own_text() {
        let recs = oily_acne();
        let kept = SensitivityFilter::apply(recs, &[SensitivityTag::from("Peroxide")]);
        assert!(kept.iter().all(|r| r.ingredient != "benzoyl peroxide"));
    }

    #[test]
    fn adding_sensitivities_never_restores_an_ingredient() {
        let recs = oily_acne();
        let tags = [
            SensitivityTag::Fragrance,
            SensitivityTag::Alcohol,
            SensitivityTag::from("retinol"),
            SensitivityTag::from("acid"),
        ];
        for i in 0..tags.len() {
            let narrow = SensitivityFilter::apply(recs.clone(), &tags[..=i]);
            for j in i..tags.len() {
                let wide = SensitivityFilter::apply(recs.clone(), &tags[..=j]);
                assert!(wide.iter().all(|r| narrow.contains(r)));
            }
        }
    }

    #[test]
    fn no_sensitivities_keeps_everything() {
        let recs = oily_acne();
        assert_eq!(SensitivityFilter::apply(recs.clone(), &[]), recs);
    }
}
