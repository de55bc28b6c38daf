//! Component Model
//!
//! Reusable meal building blocks (rice base, proteins, sides) referenced by
//! name from order line-item selections.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type ComponentId = RecordId;

/// Component kind, determines which composition rule applies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    #[serde(rename = "BASE")]
    Base,
    #[serde(rename = "PROTEINA")]
    Protein,
    #[serde(rename = "GUARNICAO")]
    Side,
}

/// Component document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ComponentId>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: ComponentKind,
    /// Packed apart from the hot box (e.g. cold sides). Informational
    /// metadata only; does not change composition counting.
    #[serde(rename = "embalagem_separada", default)]
    pub packaged_separately: bool,
    #[serde(rename = "preco_adicional_centavos", default)]
    pub extra_price_cents: i64,
    #[serde(
        rename = "ativo",
        default = "default_true",
        deserialize_with = "serde_helpers::bool_true"
    )]
    pub active: bool,
    #[serde(rename = "tags_dieteticas", default)]
    pub dietary_tags: Vec<String>,
}

fn default_true() -> bool {
    true
}

/// Create component payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentCreate {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "tipo")]
    pub kind: ComponentKind,
    #[serde(rename = "embalagem_separada", default)]
    pub packaged_separately: bool,
    #[serde(rename = "preco_adicional_centavos", default)]
    pub extra_price_cents: i64,
    #[serde(rename = "ativo", default = "default_true")]
    pub active: bool,
    #[serde(rename = "tags_dieteticas", default)]
    pub dietary_tags: Vec<String>,
}

/// Partial update payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComponentUpdate {
    #[serde(rename = "nome")]
    pub name: Option<String>,
    #[serde(rename = "tipo")]
    pub kind: Option<ComponentKind>,
    #[serde(rename = "embalagem_separada")]
    pub packaged_separately: Option<bool>,
    #[serde(rename = "preco_adicional_centavos")]
    pub extra_price_cents: Option<i64>,
    #[serde(rename = "ativo")]
    pub active: Option<bool>,
    #[serde(rename = "tags_dieteticas")]
    pub dietary_tags: Option<Vec<String>>,
}
