//! # Matching: Comparação de Nomes e Tabelas Heurísticas
//!
//! Utilitário **único** de comparação de nomes consumido pelo recomendador,
//! pelo analisador de interações e pelo pontuador de produtos. Centralizar
//! aqui garante que "sodium hyaluronate" e "hyaluronic acid" sejam o mesmo
//! ingrediente em todos os caminhos de pontuação.
//!
//! ## Tabelas Ajustáveis
//!
//! As tabelas abaixo são heurísticas calibradas à mão, sem derivação formal.
//! Estão preservadas exatamente como definidas e marcadas como constantes
//! ajustáveis para calibração futura:
//!
//! - [`INGREDIENT_SYNONYMS`]: variações de nomes de ingredientes
//! - [`PARTIAL_SKIN_TYPE_COMPATIBILITY`]: compatibilidade parcial entre tipos de pele
//! - [`INGREDIENT_CONCERN_BENEFITS`]: preocupação → benefícios (recomendador)
//! - [`PRODUCT_CONCERN_BENEFITS`]: preocupação → benefícios (produtos)

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Pontos concedidos por compatibilidade parcial de tipo de pele.
pub const PARTIAL_SKIN_TYPE_SCORE: f64 = 15.0;

/// Nome canônico → variações conhecidas do mesmo ingrediente.
pub const INGREDIENT_SYNONYMS: &[(&str, &[&str])] = &[
    ("hyaluronic acid", &["sodium hyaluronate", "hyaluronate", "ha"]),
    (
        "vitamin c",
        &[
            "ascorbic acid",
            "l-ascorbic acid",
            "magnesium ascorbyl phosphate",
            "sodium ascorbyl phosphate",
            "ascorbyl glucoside",
        ],
    ),
    ("vitamin e", &["tocopherol", "tocopheryl acetate", "mixed tocopherols"]),
    ("salicylic acid", &["bha", "beta hydroxy acid", "willow bark extract"]),
    ("glycolic acid", &["aha", "alpha hydroxy acid"]),
    (
        "retinol",
        &["retinyl palmitate", "retinyl acetate", "retinaldehyde", "retinyl linoleate"],
    ),
    ("niacinamide", &["nicotinamide", "vitamin b3"]),
    ("ceramides", &["ceramide np", "ceramide ns", "ceramide ap", "ceramide eop"]),
    ("centella asiatica", &["centella", "cica", "tiger grass"]),
    ("tea tree oil", &["melaleuca alternifolia", "tea tree", "melaleuca oil"]),
];

/// Tipo de pele do usuário → tipos cujos ingredientes ele tolera parcialmente.
///
/// Tipos compostos herdam compatibilidade dos tipos que os compõem.
pub const PARTIAL_SKIN_TYPE_COMPATIBILITY: &[(&str, &[&str])] = &[
    ("combination", &["oily", "dry", "normal"]),
    ("sensitive", &["normal", "dry"]),
    ("normal", &["dry", "sensitive"]),
];

/// Preocupação → benefícios de ingrediente que a tratam indiretamente.
pub const INGREDIENT_CONCERN_BENEFITS: &[(&str, &[&str])] = &[
    ("acne", &["pore minimizing", "oil controlling", "exfoliating"]),
    ("wrinkles", &["anti-aging", "firming"]),
    ("finelines", &["anti-aging", "hydrating"]),
    ("dryness", &["hydrating", "soothing"]),
    ("oiliness", &["oil controlling", "pore minimizing"]),
    ("darkspots", &["brightening", "exfoliating"]),
    ("largepores", &["pore minimizing", "exfoliating"]),
    ("redness", &["soothing & calming", "anti-inflammatory"]),
    ("sensitivity", &["soothing & calming"]),
];

/// Preocupação → benefícios declarados de produto que a atendem.
pub const PRODUCT_CONCERN_BENEFITS: &[(&str, &[&str])] = &[
    ("acne", &["acne fighter", "pore minimizing", "oil controlling", "exfoliating"]),
    ("wrinkles", &["anti-aging", "firming", "line reducing"]),
    ("finelines", &["anti-aging", "hydrating", "smoothing"]),
    ("dryness", &["hydrating", "moisturizing", "nourishing"]),
    ("oiliness", &["oil controlling", "mattifying", "pore minimizing"]),
    ("darkspots", &["brightening", "spot correcting", "evening"]),
    ("largepores", &["pore minimizing", "refining", "tightening"]),
    ("redness", &["soothing", "calming", "reducing redness"]),
    ("sensitivity", &["soothing", "calming", "gentle"]),
    ("dullness", &["brightening", "illuminating", "radiance"]),
    ("uneventexture", &["smoothing", "exfoliating", "refining"]),
];

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s_]+").expect("regex de separadores válida"));

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("regex de espaços válida"));

/// Normaliza um nome para comparação: NFKC, minúsculas, espaços colapsados.
pub fn normalize_name(name: &str) -> String {
    let folded: String = name.nfkc().collect::<String>().to_lowercase();
    WHITESPACE.replace_all(folded.trim(), " ").into_owned()
}

/// Forma compacta usada em preocupações e benefícios:
/// `"Large Pores"` e `"large_pores"` viram `"largepores"`. Hífens ficam,
/// então `"anti-aging"` continua casando com as tabelas acima.
pub fn compact(term: &str) -> String {
    SEPARATORS
        .replace_all(&normalize_name(term), "")
        .into_owned()
}

/// Preocupações do perfil na forma compacta, ordenadas e sem repetição.
///
/// A ordem e as repetições do pedido não alteram nenhum resultado, então
/// duas listas com o mesmo conjunto produzem a mesma análise.
pub fn normalize_concerns<S: AsRef<str>>(concerns: &[S]) -> Vec<String> {
    let mut normalized: Vec<String> = concerns
        .iter()
        .map(|c| compact(c.as_ref()))
        .filter(|c| !c.is_empty())
        .collect();
    normalized.sort();
    normalized.dedup();
    normalized
}

/// `true` se `needle` aparece em `haystack` como sequência de palavras inteiras.
fn contains_words(haystack: &str, needle: &str) -> bool {
    let hay: Vec<&str> = haystack.split_whitespace().collect();
    let words: Vec<&str> = needle.split_whitespace().collect();
    !words.is_empty()
        && hay.len() >= words.len()
        && hay.windows(words.len()).any(|w| w == words.as_slice())
}

/// Entrada da tabela de sinônimos mencionada pelo nome (já normalizado).
fn synonym_group(name: &str) -> Option<(&'static str, &'static [&'static str])> {
    INGREDIENT_SYNONYMS.iter().copied().find(|(main, variants)| {
        contains_words(name, main) || variants.iter().any(|v| contains_words(name, v))
    })
}

/// Nome canônico de um ingrediente conhecido pela tabela de sinônimos.
///
/// `"sodium hyaluronate"` → `Some("hyaluronic acid")`.
pub fn canonical_ingredient_name(name: &str) -> Option<&'static str> {
    synonym_group(&normalize_name(name)).map(|(main, _)| main)
}

/// Compara um ingrediente de produto com um ingrediente da ontologia.
///
/// Casa por inclusão de substring (em qualquer direção) dos nomes
/// normalizados, ou quando ambos mencionam o mesmo grupo de sinônimos.
pub fn ingredient_names_match(product_ingredient: &str, ontology_ingredient: &str) -> bool {
    let prod = normalize_name(product_ingredient);
    let onto = normalize_name(ontology_ingredient);
    if prod.is_empty() || onto.is_empty() {
        return false;
    }
    if prod.contains(&onto) || onto.contains(&prod) {
        return true;
    }
    INGREDIENT_SYNONYMS.iter().any(|(main, variants)| {
        let mentions = |name: &str| {
            contains_words(name, main) || variants.iter().any(|v| contains_words(name, v))
        };
        mentions(&prod) && mentions(&onto)
    })
}

/// Compara preocupações pela forma compacta, por inclusão em qualquer direção.
pub fn concerns_match(user_concern: &str, other: &str) -> bool {
    let user = compact(user_concern);
    let other = compact(other);
    !user.is_empty() && !other.is_empty() && (user.contains(&other) || other.contains(&user))
}

/// `true` se algum benefício contém um dos benefícios esperados para a preocupação.
pub fn benefits_cover_concern(
    table: &[(&str, &[&str])],
    concern: &str,
    benefits: &[String],
) -> bool {
    let concern = compact(concern);
    let Some((_, wanted)) = table.iter().find(|(key, _)| *key == concern) else {
        return false;
    };
    benefits.iter().any(|benefit| {
        let benefit = compact(benefit);
        wanted.iter().any(|w| benefit.contains(&compact(w)))
    })
}

/// Tipos de pele parcialmente compatíveis com o tipo do usuário.
pub fn partial_skin_types(skin_type: &str) -> &'static [&'static str] {
    PARTIAL_SKIN_TYPE_COMPATIBILITY
        .iter()
        .find(|(key, _)| *key == skin_type)
        .map(|(_, partial)| *partial)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_folds_case_and_spacing() {
        assert_eq!(normalize_name("  Hyaluronic   ACID "), "hyaluronic acid");
        assert_eq!(compact("Large_Pores"), "largepores");
    }

    #[test]
    fn compact_keeps_hyphens() {
        assert_eq!(compact("Anti-Aging"), "anti-aging");
        assert_eq!(compact("fine lines"), "finelines");
        assert_ne!(compact("fine-lines"), compact("fine lines"));
        let benefits = vec!["Anti-Aging Serum".to_string()];
        assert!(benefits_cover_concern(INGREDIENT_CONCERN_BENEFITS, "fine_lines", &benefits));
    }

    #[test]
    fn synonyms_match_in_both_directions() {
        assert!(ingredient_names_match("Sodium Hyaluronate", "hyaluronic acid"));
        assert!(ingredient_names_match("hyaluronic acid", "sodium hyaluronate"));
        assert!(ingredient_names_match("L-Ascorbic Acid 15%", "vitamin c"));
        assert!(ingredient_names_match("Nicotinamide", "niacinamide"));
    }

    #[test]
    fn substring_match_is_direct() {
        assert!(ingredient_names_match("Niacinamide 10%", "niacinamide"));
        assert!(ingredient_names_match("retinol", "encapsulated retinol"));
    }

    #[test]
    fn short_synonyms_require_whole_words() {
        // "shea" contém "ha" mas não é ácido hialurônico
        assert!(!ingredient_names_match("shea butter", "hyaluronic acid"));
        assert!(!ingredient_names_match("silica", "centella asiatica"));
        assert!(ingredient_names_match("cica complex", "centella asiatica"));
    }

    #[test]
    fn canonical_names() {
        assert_eq!(canonical_ingredient_name("Sodium Hyaluronate"), Some("hyaluronic acid"));
        assert_eq!(canonical_ingredient_name("tocopherol"), Some("vitamin e"));
        assert_eq!(canonical_ingredient_name("squalane"), None);
    }

    #[test]
    fn concern_lists_are_sorted_and_deduplicated() {
        let concerns = ["Large Pores", "acne", "large_pores", " "];
        assert_eq!(normalize_concerns(&concerns), vec!["acne", "largepores"]);
    }

    #[test]
    fn concern_matching_ignores_separators() {
        assert!(concerns_match("large_pores", "Large Pores"));
        assert!(concerns_match("acne", "acne-prone"));
        assert!(!concerns_match("acne", "dryness"));
        assert!(!concerns_match("", "dryness"));
    }

    #[test]
    fn benefit_table_lookup() {
        let benefits = vec!["Pore Minimizing".to_string()];
        assert!(benefits_cover_concern(INGREDIENT_CONCERN_BENEFITS, "acne", &benefits));
        assert!(benefits_cover_concern(INGREDIENT_CONCERN_BENEFITS, "large pores", &benefits));
        assert!(!benefits_cover_concern(INGREDIENT_CONCERN_BENEFITS, "wrinkles", &benefits));
        assert!(!benefits_cover_concern(INGREDIENT_CONCERN_BENEFITS, "unknown", &benefits));
    }

    #[test]
    fn partial_compatibility_table() {
        assert_eq!(partial_skin_types("combination"), &["oily", "dry", "normal"]);
        assert!(partial_skin_types("oily").is_empty());
    }
}
