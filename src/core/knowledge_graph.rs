//! # Knowledge Graph: Índice Tipado para Raciocínio
//!
//! O [`KnowledgeGraph`] é a estrutura consultada por todas as operações de
//! pontuação. Ele é derivado **uma única vez** do [`TripleStore`] pelo
//! [`KnowledgeGraphBuilder`] e depois tratado como imutável: uma recarga
//! constrói um grafo novo por inteiro e o [`SemanticService`](crate::service::SemanticService)
//! troca o ponteiro atomicamente.
//!
//! ## Mapas
//!
//! | Mapa | Chave | Valor |
//! |------|-------|-------|
//! | `ingredients` | label em minúsculas | [`Ingredient`] |
//! | `skin_types` | nome local em minúsculas | [`LabeledEntity`] |
//! | `concerns` | nome local em minúsculas | [`LabeledEntity`] |
//! | `benefits` | nome local em minúsculas | [`LabeledEntity`] |
//! | `functions` | nome local em minúsculas | [`LabeledEntity`] |
//!
//! Todos são `BTreeMap`: a iteração é ordenada, então reconstruir a partir
//! do mesmo armazém produz mapas idênticos e resultados reprodutíveis.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use serde::Serialize;

use super::entities::{
    EntityKind, Ingredient, LabeledEntity, DEFAULT_CONCENTRATION, DEFAULT_EFFICACY,
    DEFAULT_SAFETY,
};
use super::triple::{local_name, Term, TripleStore};
use crate::reasoning::matching;

/// Classes aceitas para ingredientes.
const INGREDIENT_CLASSES: &[&str] = &["KeyIngredient", "Ingredient"];

/// Origem do conhecimento atualmente em uso.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum KnowledgeSource {
    /// Documento principal (ontologia completa).
    Primary,
    /// Documento secundário reduzido.
    Secondary,
    /// Documento fornecido diretamente em memória.
    Inline,
    /// Dados embutidos do [`fallback`](crate::ontology::fallback).
    Fallback,
}

impl KnowledgeSource {
    pub fn label(&self) -> &'static str {
        match self {
            KnowledgeSource::Primary => "primary",
            KnowledgeSource::Secondary => "secondary",
            KnowledgeSource::Inline => "inline",
            KnowledgeSource::Fallback => "fallback",
        }
    }
}

/// Grafo de conhecimento tipado e desnormalizado.
#[derive(Clone, Debug)]
pub struct KnowledgeGraph {
    pub ingredients: BTreeMap<String, Ingredient>,
    pub skin_types: BTreeMap<String, LabeledEntity>,
    pub concerns: BTreeMap<String, LabeledEntity>,
    pub benefits: BTreeMap<String, LabeledEntity>,
    pub functions: BTreeMap<String, LabeledEntity>,
    source: KnowledgeSource,
    generation: u64,
}

impl KnowledgeGraph {
    /// Grafo vazio associado a uma origem.
    pub fn empty(source: KnowledgeSource) -> Self {
        Self {
            ingredients: BTreeMap::new(),
            skin_types: BTreeMap::new(),
            concerns: BTreeMap::new(),
            benefits: BTreeMap::new(),
            functions: BTreeMap::new(),
            source,
            generation: 0,
        }
    }

    pub fn source(&self) -> KnowledgeSource {
        self.source
    }

    /// `true` quando o conhecimento veio de um documento (não do fallback).
    pub fn is_loaded(&self) -> bool {
        self.source != KnowledgeSource::Fallback
    }

    /// Número de geração atribuído pelo serviço a cada troca de grafo.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn set_generation(&mut self, generation: u64) {
        self.generation = generation;
    }

    /// Método de raciocínio reportado nas análises semânticas.
    pub fn method(&self) -> &'static str {
        if self.is_loaded() {
            "Semantic Ontology Reasoning"
        } else {
            "Rule-based Fallback"
        }
    }

    /// Busca um ingrediente pelo nome.
    ///
    /// Tenta a chave exata (minúsculas) e depois o nome canônico da tabela
    /// de sinônimos (`"sodium hyaluronate"` → `"hyaluronic acid"`).
    /// Desconhecido → `None`, nunca erro.
    pub fn ingredient(&self, name: &str) -> Option<&Ingredient> {
        let key = name.trim().to_lowercase();
        if let Some(found) = self.ingredients.get(&key) {
            return Some(found);
        }
        matching::canonical_ingredient_name(&key).and_then(|canon| self.ingredients.get(canon))
    }

    /// Número total de entidades (todas as categorias).
    pub fn entity_count(&self) -> usize {
        self.ingredients.len()
            + self.skin_types.len()
            + self.concerns.len()
            + self.benefits.len()
            + self.functions.len()
    }

    pub(crate) fn insert_entity(&mut self, entity: LabeledEntity) {
        let map = match entity.kind {
            EntityKind::SkinType => &mut self.skin_types,
            EntityKind::Concern => &mut self.concerns,
            EntityKind::Benefit => &mut self.benefits,
            EntityKind::Function => &mut self.functions,
        };
        map.entry(entity.key.clone()).or_insert(entity);
    }
}

/// Constrói o [`KnowledgeGraph`] em uma passada sobre o [`TripleStore`].
///
/// Para cada sujeito tipado como ingrediente coleta as arestas
/// `recommendedFor`, `treats`, `hasFunction`, `provides`, `synergisticWith`,
/// `incompatibleWith`, `potentiatesEffectOf` e os escalares `efficacyScore`,
/// `safetyRating`, `concentration`. Os aliases `suitableFor` e
/// `treatsConcern` também são aceitos.
pub struct KnowledgeGraphBuilder<'a> {
    store: &'a TripleStore,
    /// IRI de ingrediente → chave (label em minúsculas).
    ingredient_keys: HashMap<&'a str, String>,
}

impl<'a> KnowledgeGraphBuilder<'a> {
    pub fn new(store: &'a TripleStore) -> Self {
        Self {
            store,
            ingredient_keys: HashMap::new(),
        }
    }

    /// Executa a construção completa. Determinística para o mesmo armazém.
    pub fn build(mut self, source: KnowledgeSource) -> KnowledgeGraph {
        let store = self.store;
        let mut graph = KnowledgeGraph::empty(source);

        for kind in [
            EntityKind::SkinType,
            EntityKind::Concern,
            EntityKind::Benefit,
            EntityKind::Function,
        ] {
            for class in kind.class_names() {
                for subject in store.subjects_of_type(class) {
                    graph.insert_entity(self.labeled_entity(kind, subject));
                }
            }
        }

        let subjects: BTreeSet<&'a str> = INGREDIENT_CLASSES
            .iter()
            .flat_map(|class| store.subjects_of_type(class))
            .collect();

        for &subject in &subjects {
            let label = self.label_of(subject);
            self.ingredient_keys.insert(subject, label.to_lowercase());
        }

        for subject in subjects {
            let ingredient = self.ingredient(subject, &graph);
            match graph.ingredients.get_mut(&ingredient.key) {
                Some(existing) => {
                    tracing::debug!(key = %ingredient.key, iri = subject, "Ingrediente duplicado, mesclando relações");
                    merge_ingredient(existing, ingredient);
                }
                None => {
                    graph.ingredients.insert(ingredient.key.clone(), ingredient);
                }
            }
        }

        tracing::debug!(
            ingredients = graph.ingredients.len(),
            skin_types = graph.skin_types.len(),
            concerns = graph.concerns.len(),
            benefits = graph.benefits.len(),
            functions = graph.functions.len(),
            "Grafo de conhecimento construído"
        );
        graph
    }

    fn label_of(&self, subject: &str) -> String {
        self.store
            .first_value(subject, "label")
            .map(str::to_string)
            .unwrap_or_else(|| local_name(subject).to_string())
    }

    fn labeled_entity(&self, kind: EntityKind, subject: &str) -> LabeledEntity {
        let key = local_name(subject).to_lowercase();
        let label = self.label_of(subject);
        let entity = LabeledEntity::new(kind, key, label);
        match self.store.first_value(subject, "comment") {
            Some(comment) => entity.with_description(comment),
            None => entity,
        }
    }

    fn ingredient(&self, subject: &str, graph: &KnowledgeGraph) -> Ingredient {
        let mut ingredient = Ingredient::new(self.label_of(subject));
        ingredient.iri = Some(subject.to_string());

        ingredient.recommended_for = self.entity_keys(subject, &["recommendedFor", "suitableFor"]);
        ingredient.treats = self.entity_keys(subject, &["treats", "treatsConcern"]);
        ingredient.functions = self.labeled_refs(subject, "hasFunction", &graph.functions);
        ingredient.benefits = self.labeled_refs(subject, "provides", &graph.benefits);
        ingredient.synergistic_with = self.ingredient_refs(subject, "synergisticWith");
        ingredient.incompatible_with = self.ingredient_refs(subject, "incompatibleWith");
        ingredient.potentiates_effect_of = self.ingredient_refs(subject, "potentiatesEffectOf");

        ingredient.efficacy_score = self
            .scalar(subject, "efficacyScore")
            .map(|v| v.round().clamp(0.0, 100.0) as u8)
            .unwrap_or(DEFAULT_EFFICACY);
        ingredient.safety_rating = self
            .scalar(subject, "safetyRating")
            .map(|v| v.round().clamp(0.0, 10.0) as u8)
            .unwrap_or(DEFAULT_SAFETY);
        ingredient.concentration = self
            .scalar(subject, "concentration")
            .filter(|v| *v >= 0.0)
            .unwrap_or(DEFAULT_CONCENTRATION);

        ingredient
    }

    fn scalar(&self, subject: &str, predicate: &str) -> Option<f64> {
        self.store
            .first_value(subject, predicate)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
    }

    /// Referências a tipos de pele/preocupações: nome local em minúsculas.
    fn entity_keys(&self, subject: &str, predicates: &[&str]) -> Vec<String> {
        let mut keys = Vec::new();
        for predicate in predicates {
            for object in self.store.objects(subject, predicate) {
                push_unique(&mut keys, term_key(object));
            }
        }
        keys
    }

    /// Referências a benefícios/funções: label declarado em minúsculas,
    /// ou o nome local quando a entidade não foi declarada.
    fn labeled_refs(
        &self,
        subject: &str,
        predicate: &str,
        declared: &BTreeMap<String, LabeledEntity>,
    ) -> Vec<String> {
        let mut values = Vec::new();
        for object in self.store.objects(subject, predicate) {
            let key = term_key(object);
            let value = declared
                .get(&key)
                .map(|entity| entity.label.to_lowercase())
                .unwrap_or(key);
            push_unique(&mut values, value);
        }
        values
    }

    /// Referências a outros ingredientes: resolvidas para a identidade do alvo.
    fn ingredient_refs(&self, subject: &str, predicate: &str) -> Vec<String> {
        let mut refs = Vec::new();
        for object in self.store.objects(subject, predicate) {
            let key = object
                .as_iri()
                .and_then(|iri| self.ingredient_keys.get(iri).cloned())
                .unwrap_or_else(|| term_key(object));
            push_unique(&mut refs, key);
        }
        refs
    }
}

fn term_key(term: &Term) -> String {
    match term {
        Term::Iri(iri) => local_name(iri).to_lowercase(),
        Term::Literal(value) => value.trim().to_lowercase(),
    }
}

fn push_unique(values: &mut Vec<String>, value: String) {
    if !value.is_empty() && !values.contains(&value) {
        values.push(value);
    }
}

fn merge_ingredient(existing: &mut Ingredient, other: Ingredient) {
    let lists = [
        (&mut existing.recommended_for, other.recommended_for),
        (&mut existing.treats, other.treats),
        (&mut existing.functions, other.functions),
        (&mut existing.benefits, other.benefits),
        (&mut existing.synergistic_with, other.synergistic_with),
        (&mut existing.incompatible_with, other.incompatible_with),
        (&mut existing.potentiates_effect_of, other.potentiates_effect_of),
    ];
    for (target, values) in lists {
        for value in values {
            push_unique(target, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn builds_ingredients_with_resolved_references() {
        let graph = testing::sample_graph();
        let niacinamide = graph.ingredient("niacinamide").expect("niacinamide");
        assert_eq!(niacinamide.recommended_for, vec!["oily", "combination"]);
        assert_eq!(niacinamide.treats, vec!["oiliness", "largepores"]);
        assert_eq!(niacinamide.efficacy_score, 88);
        assert_eq!(niacinamide.safety_rating, 9);
        // VitaminC tem rdfs:label "Vitamin C": a referência usa a identidade do alvo
        let retinol = graph.ingredient("retinol").expect("retinol");
        assert!(retinol.is_incompatible_with("vitamin c"));
    }

    #[test]
    fn benefits_use_declared_labels() {
        let graph = testing::sample_graph();
        let niacinamide = graph.ingredient("niacinamide").unwrap();
        assert!(niacinamide.benefits.contains(&"pore minimizing".to_string()));
        assert!(niacinamide.benefits.contains(&"oil controlling".to_string()));
    }

    #[test]
    fn missing_scores_default_to_neutral_midpoints() {
        let graph = testing::sample_graph();
        let glycerin = graph.ingredient("glycerin").expect("glycerin");
        assert_eq!(glycerin.efficacy_score, DEFAULT_EFFICACY);
        assert_eq!(glycerin.safety_rating, DEFAULT_SAFETY);
        assert_eq!(glycerin.concentration, DEFAULT_CONCENTRATION);
    }

    #[test]
    fn out_of_range_scores_are_clamped() {
        let graph = testing::sample_graph();
        let peptides = graph.ingredient("peptides").expect("peptides");
        assert_eq!(peptides.efficacy_score, 100);
        assert_eq!(peptides.safety_rating, 10);
    }

    #[test]
    fn auxiliary_maps_are_keyed_by_local_name() {
        let graph = testing::sample_graph();
        assert!(graph.skin_types.contains_key("oily"));
        assert!(graph.concerns.contains_key("largepores"));
        assert_eq!(graph.concerns["largepores"].label, "Large Pores");
        assert_eq!(
            graph.concerns["acne"].description.as_deref(),
            Some("Inflammatory breakouts")
        );
    }

    #[test]
    fn aliases_are_accepted() {
        let graph = testing::sample_graph();
        let centella = graph.ingredient("centella asiatica").expect("centella");
        assert_eq!(centella.recommended_for, vec!["sensitive"]);
        assert_eq!(centella.treats, vec!["redness"]);
    }

    #[test]
    fn synonyms_resolve_to_canonical_ingredient() {
        let graph = testing::sample_graph();
        let found = graph.ingredient("Sodium Hyaluronate").expect("synonym");
        assert_eq!(found.key, "hyaluronic acid");
        assert!(graph.ingredient("unobtainium").is_none());
    }

    #[test]
    fn rebuilding_is_deterministic() {
        let store = testing::sample_store();
        let a = KnowledgeGraphBuilder::new(&store).build(KnowledgeSource::Inline);
        let b = KnowledgeGraphBuilder::new(&store).build(KnowledgeSource::Inline);
        assert_eq!(a.ingredients, b.ingredients);
        assert_eq!(a.concerns, b.concerns);
        assert!(a.is_loaded());
        assert_eq!(a.method(), "Semantic Ontology Reasoning");
    }
}
