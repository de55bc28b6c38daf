//! Product Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use surrealdb::RecordId;

pub type ProductId = RecordId;

/// Menu category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    #[serde(rename = "MARMITAS")]
    MealBoxes,
    #[serde(rename = "SALGADOS")]
    Snacks,
    #[serde(rename = "BEBIDAS")]
    Drinks,
    #[serde(rename = "SOBREMESAS")]
    Desserts,
    #[serde(rename = "PRATOS PRONTOS")]
    ReadyDishes,
}

/// Simple products are sold as-is; composite products are assembled from
/// component selections constrained by `composition_rules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductKind {
    #[serde(rename = "SIMPLES")]
    Simple,
    #[serde(rename = "COMPOSTO")]
    Composite,
}

/// Product document
///
/// `composition_rules` maps rule keys ("max_base", "max_proteina",
/// "max_guarnicao") to the maximum number of selections of that kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ProductId>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "preco_centavos")]
    pub price_cents: i64,
    #[serde(rename = "imagem_url", default)]
    pub image_url: String,
    #[serde(rename = "categoria")]
    pub category: ProductCategory,
    #[serde(
        rename = "ativo",
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub active: bool,
    #[serde(rename = "tipo")]
    pub kind: ProductKind,
    #[serde(
        rename = "regras_composicao",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub composition_rules: Option<HashMap<String, u32>>,
    #[serde(rename = "tags_dieteticas", default)]
    pub dietary_tags: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "preco_centavos")]
    pub price_cents: i64,
    #[serde(rename = "imagem_url", default)]
    pub image_url: String,
    #[serde(rename = "categoria")]
    pub category: ProductCategory,
    #[serde(rename = "ativo", default = "default_true")]
    pub active: bool,
    #[serde(rename = "tipo")]
    pub kind: ProductKind,
    #[serde(rename = "regras_composicao", default)]
    pub composition_rules: Option<HashMap<String, u32>>,
    #[serde(rename = "tags_dieteticas", default)]
    pub dietary_tags: Vec<String>,
}

/// Partial update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "descricao")]
    pub description: Option<String>,
    #[serde(rename = "preco_centavos")]
    pub price_cents: Option<i64>,
    #[serde(rename = "imagem_url")]
    pub image_url: Option<String>,
    #[serde(rename = "categoria")]
    pub category: Option<ProductCategory>,
    #[serde(rename = "ativo")]
    pub active: Option<bool>,
    #[serde(rename = "tipo")]
    pub kind: Option<ProductKind>,
    #[serde(rename = "regras_composicao")]
    pub composition_rules: Option<HashMap<String, u32>>,
    #[serde(rename = "tags_dieteticas")]
    pub dietary_tags: Option<Vec<String>>,
}
