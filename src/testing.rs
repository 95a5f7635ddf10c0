//! Fixtures compartilhadas pelos testes dos módulos.

use crate::core::{KnowledgeGraph, KnowledgeGraphBuilder, KnowledgeSource, TripleStore};
use crate::ontology::parser;

/// Ontologia pequena e completa o bastante para exercitar todos os caminhos:
/// tipos exatos e parciais, preocupações diretas e via benefício, sinergia,
/// incompatibilidade, potencialização, aliases e scores ausentes/fora de faixa.
pub const SAMPLE_TTL: &str = r#"
@prefix : <http://www.semanticweb.org/matchcare/skincare#> .
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

:Oily a :SkinType ; rdfs:label "Oily" .
:Dry a :SkinType ; rdfs:label "Dry" .
:Normal a :SkinType ; rdfs:label "Normal" .
:Combination a :SkinType ; rdfs:label "Combination" .
:Sensitive a :SkinType ; rdfs:label "Sensitive" .

:Acne a :SkinConcern ; rdfs:label "Acne" ; rdfs:comment "Inflammatory breakouts" .
:LargePores a :SkinConcern ; rdfs:label "Large Pores" .
:Oiliness a :SkinConcern ; rdfs:label "Oiliness" .
:Dryness a :SkinConcern ; rdfs:label "Dryness" .
:Wrinkles a :SkinConcern ; rdfs:label "Wrinkles" .
:DarkSpots a :SkinConcern ; rdfs:label "Dark Spots" .
:Redness a :SkinConcern ; rdfs:label "Redness" .

:PoreMinimizing a :Benefit ; rdfs:label "Pore Minimizing" .
:OilControlling a :Benefit ; rdfs:label "Oil Controlling" .
:Hydrating a :Benefit ; rdfs:label "Hydrating" .
:AntiAging a :Benefit ; rdfs:label "Anti-Aging" .
:Brightening a :Benefit ; rdfs:label "Brightening" .
:Exfoliating a :Benefit ; rdfs:label "Exfoliating" .
:SoothingCalming a :Benefit ; rdfs:label "Soothing & Calming" .

:Humectant a :Function ; rdfs:label "Humectant" .
:SebumRegulator a :Function ; rdfs:label "Sebum Regulator" .
:AntiInflammatory a :Function ; rdfs:label "Anti-inflammatory" .
:Antioxidant a :Function ; rdfs:label "Antioxidant" .
:Exfoliant a :Function ; rdfs:label "Exfoliant" .
:CellRenewal a :Function ; rdfs:label "Cell Renewal" .

:Niacinamide a :KeyIngredient ;
    rdfs:label "Niacinamide" ;
    :recommendedFor :Oily , :Combination ;
    :treats :Oiliness , :LargePores ;
    :hasFunction :SebumRegulator , :AntiInflammatory ;
    :provides :PoreMinimizing , :OilControlling ;
    :synergisticWith :HyaluronicAcid ;
    :efficacyScore "88"^^xsd:integer ;
    :safetyRating "9"^^xsd:integer ;
    :concentration "5.0"^^xsd:decimal .

:HyaluronicAcid a :KeyIngredient ;
    rdfs:label "Hyaluronic Acid" ;
    :recommendedFor :Dry , :Normal , :Sensitive ;
    :treats :Dryness ;
    :hasFunction :Humectant ;
    :provides :Hydrating , :AntiAging ;
    :efficacyScore 95 ;
    :safetyRating 10 .

:SalicylicAcid a :KeyIngredient ;
    rdfs:label "Salicylic Acid" ;
    :recommendedFor :Oily , :Combination ;
    :treats :Acne , :LargePores ;
    :hasFunction :Exfoliant ;
    :provides :Exfoliating , :PoreMinimizing ;
    :incompatibleWith :Retinol ;
    :efficacyScore 85 ;
    :safetyRating 7 .

:Retinol a :KeyIngredient ;
    rdfs:label "Retinol" ;
    :recommendedFor :Normal , :Oily ;
    :treats :Wrinkles , :Acne ;
    :hasFunction :CellRenewal ;
    :provides :AntiAging , :Exfoliating ;
    :incompatibleWith :VitaminC , :BenzoylPeroxide ;
    :efficacyScore 95 ;
    :safetyRating 5 .

:VitaminC a :KeyIngredient ;
    rdfs:label "Vitamin C" ;
    :recommendedFor :Normal , :Dry ;
    :treats :DarkSpots , :Wrinkles ;
    :hasFunction :Antioxidant ;
    :provides :Brightening , :AntiAging ;
    :potentiatesEffectOf :VitaminE ;
    :efficacyScore 92 ;
    :safetyRating 6 .

:VitaminE a :KeyIngredient ;
    rdfs:label "Vitamin E" ;
    :recommendedFor :Dry , :Normal ;
    :hasFunction :Antioxidant ;
    :provides :AntiAging ;
    :efficacyScore 70 ;
    :safetyRating 9 .

:BenzoylPeroxide a :KeyIngredient ;
    rdfs:label "Benzoyl Peroxide" ;
    :recommendedFor :Oily ;
    :treats :Acne ;
    :efficacyScore 80 ;
    :safetyRating 5 .

:CentellaAsiatica a :Ingredient ;
    rdfs:label "Centella Asiatica" ;
    :suitableFor :Sensitive ;
    :treatsConcern :Redness ;
    :provides :SoothingCalming ;
    :efficacyScore 80 ;
    :safetyRating 10 .

:Glycerin a :Ingredient ;
    rdfs:label "Glycerin" .

:Peptides a :KeyIngredient ;
    rdfs:label "Peptides" ;
    :recommendedFor :Normal ;
    :efficacyScore 150 ;
    :safetyRating 12 .

:LavenderEssentialOil a :KeyIngredient ;
    rdfs:label "Lavender Essential Oil" ;
    :recommendedFor :Oily ;
    :treats :Acne ;
    :efficacyScore 60 ;
    :safetyRating 4 .

:MineralOil a :KeyIngredient ;
    rdfs:label "Mineral Oil" ;
    :recommendedFor :Dry ;
    :efficacyScore 40 ;
    :safetyRating 8 .
"#;

pub fn sample_store() -> TripleStore {
    let mut store = TripleStore::new();
    store.extend(parser::parse_turtle(SAMPLE_TTL, "sample").expect("fixture Turtle válido"));
    store
}

pub fn sample_graph() -> KnowledgeGraph {
    KnowledgeGraphBuilder::new(&sample_store()).build(KnowledgeSource::Inline)
}
