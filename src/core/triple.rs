//! # Graph Store: Armazém de Triplas
//!
//! O [`TripleStore`] é a primitiva-folha do sistema: guarda os fatos
//! `(sujeito, predicado, objeto)` carregados do documento de ontologia e
//! responde às consultas do [`KnowledgeGraphBuilder`](super::KnowledgeGraphBuilder).
//!
//! ## Estrutura
//!
//! Em vez de varrer uma lista de triplas a cada consulta (pattern matching),
//! o armazém mantém dois índices construídos durante a carga:
//!
//! - **Adjacência**: `HashMap<Sujeito, Vec<Edge>>`: arestas de saída de cada entidade
//! - **Tipos**: `BTreeMap<Tipo, BTreeSet<Sujeito>>`: quem é `rdf:type` de quê
//!
//! ```text
//! :Niacinamide a :KeyIngredient ; :treats :Oiliness .
//!
//! adjacency["…/Niacinamide"] = [Edge{type → KeyIngredient}, Edge{treats → Oiliness}]
//! types["KeyIngredient"]     = {"…/Niacinamide"}
//! ```
//!
//! Predicados e tipos são comparados pelo **nome local** (texto após o
//! último `#` ou `/`), o que torna o armazém independente do namespace.
//!
//! ## Ciclo de Vida
//!
//! Write-once / read-many: o loader limpa e repovoa o armazém inteiro.
//! Não existe remoção individual de triplas.

use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Objeto de uma tripla: referência a outra entidade ou valor literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Term {
    /// IRI (ou identificador de blank node `_:x`).
    Iri(String),
    /// Valor literal já sem aspas e sem datatype.
    Literal(String),
}

impl Term {
    /// Valor textual do termo, seja IRI ou literal.
    pub fn value(&self) -> &str {
        match self {
            Term::Iri(iri) => iri,
            Term::Literal(value) => value,
        }
    }

    /// Retorna o IRI se o termo for uma referência.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }
}

/// Fato atômico da base de conhecimento.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Triple {
    pub subject: String,
    pub predicate: String,
    pub object: Term,
}

impl Triple {
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, object: Term) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object,
        }
    }
}

/// Aresta de saída de uma entidade no índice de adjacência.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Nome local do predicado (pré-calculado para as consultas).
    pub predicate_name: String,
    pub object: Term,
}

/// Armazém de triplas em memória com índices de adjacência e tipo.
#[derive(Default)]
pub struct TripleStore {
    adjacency: HashMap<String, Vec<Edge>>,
    types: BTreeMap<String, BTreeSet<String>>,
    triple_count: usize,
}

impl TripleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove todas as triplas e índices.
    pub fn clear(&mut self) {
        self.adjacency.clear();
        self.types.clear();
        self.triple_count = 0;
    }

    /// Insere uma tripla, atualizando os índices.
    ///
    /// Triplas `rdf:type` (predicado com nome local `type` e objeto IRI)
    /// também alimentam o índice de tipos.
    pub fn insert(&mut self, triple: Triple) {
        let predicate_name = local_name(&triple.predicate).to_string();
        if predicate_name == "type" {
            if let Term::Iri(class) = &triple.object {
                self.types
                    .entry(local_name(class).to_string())
                    .or_default()
                    .insert(triple.subject.clone());
            }
        }
        self.adjacency.entry(triple.subject).or_default().push(Edge {
            predicate_name,
            object: triple.object,
        });
        self.triple_count += 1;
    }

    /// Carga em lote.
    pub fn extend(&mut self, triples: impl IntoIterator<Item = Triple>) {
        for triple in triples {
            self.insert(triple);
        }
    }

    pub fn len(&self) -> usize {
        self.triple_count
    }

    pub fn is_empty(&self) -> bool {
        self.triple_count == 0
    }

    /// Sujeitos declarados com o tipo de nome local `type_name`, em ordem lexicográfica.
    pub fn subjects_of_type<'a>(&'a self, type_name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.types
            .get(type_name)
            .into_iter()
            .flat_map(|subjects| subjects.iter().map(String::as_str))
    }

    /// Todas as arestas de saída de um sujeito (vazio se desconhecido).
    pub fn edges(&self, subject: &str) -> &[Edge] {
        self.adjacency
            .get(subject)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Objetos das arestas `subject —predicate→ ?`, comparando o predicado por nome local.
    pub fn objects<'a>(
        &'a self,
        subject: &str,
        predicate_name: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.edges(subject)
            .iter()
            .filter(move |e| e.predicate_name == predicate_name)
            .map(|e| &e.object)
    }

    /// Primeiro valor de uma propriedade (label, comment, scores).
    pub fn first_value<'a>(&'a self, subject: &str, predicate_name: &'a str) -> Option<&'a str> {
        self.objects(subject, predicate_name).next().map(Term::value)
    }
}

/// Extrai o nome local de um IRI: o trecho após o último `#` ou `/`.
///
/// `http://ex.org/onto#VitaminC` → `VitaminC`, `http://ex.org/onto/Oily` → `Oily`.
/// Identificadores sem separador são devolvidos intactos.
pub fn local_name(iri: &str) -> &str {
    let trimmed = iri.trim_end_matches(['/', '#']);
    trimmed
        .rsplit(['#', '/'])
        .next()
        .unwrap_or(trimmed)
}
