//! # Módulo Scoring: Produtos contra Perfis
//!
//! - [`product`]: registro de produto e o [`ProductScorer`] de cinco fatores
//! - [`ranking`]: pontuação em lote, filtro de qualidade e tags

pub mod product;
pub mod ranking;

pub use product::{Product, ProductScore, ProductScorer};
pub use ranking::{rank_products, RankOptions, RankedProduct};
