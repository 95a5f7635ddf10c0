//! Leitura de documentos Turtle em [`Triple`]s.
//!
//! O parsing é delegado ao `oxigraph`; aqui só convertemos os quads para a
//! representação enxuta do [`TripleStore`](crate::core::TripleStore):
//! sujeitos e IRIs como texto, literais sem datatype.

use oxigraph::io::{RdfFormat, RdfParser};
use oxigraph::model::Term as RdfTerm;

use crate::core::{Term, Triple};
use crate::error::KnowledgeError;

/// Converte um documento Turtle em triplas.
///
/// `origin` identifica o documento nas mensagens de erro (caminho ou `"inline"`).
/// Qualquer erro de sintaxe rejeita o documento inteiro.
pub fn parse_turtle(document: &str, origin: &str) -> Result<Vec<Triple>, KnowledgeError> {
    let mut triples = Vec::new();
    for quad in RdfParser::from_format(RdfFormat::Turtle).for_reader(document.as_bytes()) {
        let quad = quad.map_err(|e| KnowledgeError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

        let object = match quad.object {
            RdfTerm::NamedNode(node) => Term::Iri(node.into_string()),
            RdfTerm::BlankNode(node) => Term::Iri(format!("_:{}", node.as_str())),
            RdfTerm::Literal(literal) => Term::Literal(literal.value().to_string()),
            #[allow(unreachable_patterns)]
            _ => continue,
        };

        triples.push(Triple::new(
            subject_id(&quad.subject.to_string()),
            quad.predicate.into_string(),
            object,
        ));
    }
    Ok(triples)
}

/// `<http://…#X>` → `http://…#X`; blank nodes (`_:b0`) ficam como estão.
fn subject_id(rendered: &str) -> String {
    rendered
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .unwrap_or(rendered)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_turtle() {
        let doc = r#"
            @prefix : <http://example.org/skin#> .
            @prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
            :Niacinamide a :KeyIngredient ;
                rdfs:label "Niacinamide" ;
                :efficacyScore 88 .
        "#;
        let triples = parse_turtle(doc, "inline").unwrap();
        assert_eq!(triples.len(), 3);
        assert!(triples
            .iter()
            .all(|t| t.subject == "http://example.org/skin#Niacinamide"));
        assert!(triples
            .iter()
            .any(|t| t.object == Term::Literal("88".into())));
        assert!(triples
            .iter()
            .any(|t| t.object == Term::Iri("http://example.org/skin#KeyIngredient".into())));
    }

    #[test]
    fn syntax_errors_reject_the_document() {
        let err = parse_turtle("this is { not turtle", "broken.ttl").unwrap_err();
        assert!(matches!(err, KnowledgeError::Parse { ref origin, .. } if origin == "broken.ttl"));
    }

    #[test]
    fn empty_document_has_no_triples() {
        assert!(parse_turtle("", "inline").unwrap().is_empty());
    }
}
