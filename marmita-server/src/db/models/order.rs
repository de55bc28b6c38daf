//! Order Model
//!
//! Orders are created once with computed money fields and an order code;
//! afterwards only `status` mutates, strictly forward through
//! RECEBIDO → EM_PREPARO → PRONTO → ENTREGUE.

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use surrealdb::RecordId;

pub type OrderId = RecordId;

/// Delivery modality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryMode {
    #[serde(rename = "DELIVERY")]
    Delivery,
    #[serde(rename = "RETIRADA")]
    Pickup,
    #[serde(rename = "BALCAO")]
    Counter,
}

/// Payment method (informational; no processing happens here)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "PIX")]
    Pix,
    #[serde(rename = "CREDITO")]
    Credit,
    #[serde(rename = "DEBITO")]
    Debit,
}

/// Order status; the linear lifecycle lives in `orders::lifecycle`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "RECEBIDO")]
    Received,
    #[serde(rename = "EM_PREPARO")]
    Preparing,
    #[serde(rename = "PRONTO")]
    Ready,
    #[serde(rename = "ENTREGUE")]
    Delivered,
}

impl OrderStatus {
    /// Wire name, used in messages and logs
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Received => "RECEBIDO",
            OrderStatus::Preparing => "EM_PREPARO",
            OrderStatus::Ready => "PRONTO",
            OrderStatus::Delivered => "ENTREGUE",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Customer snapshot embedded in the order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerInfo {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "telefone")]
    pub phone: String,
    /// Tax document for the receipt, when requested
    #[serde(rename = "cpf_nota", default, skip_serializing_if = "Option::is_none")]
    pub tax_document: Option<String>,
}

/// Delivery address, required iff the modality is DELIVERY
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryAddress {
    #[serde(rename = "logradouro")]
    pub street: String,
    #[serde(rename = "numero")]
    pub number: String,
    #[serde(rename = "bairro")]
    pub district: String,
}

/// One product entry within an order, immutable once the order is created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(rename = "nome_produto")]
    pub product_name: String,
    #[serde(rename = "quantidade")]
    pub quantity: i64,
    #[serde(rename = "preco_unitario")]
    pub unit_price_cents: i64,
    /// Component names chosen for composite products
    #[serde(rename = "selecoes", default)]
    pub selections: Vec<String>,
}

/// Order document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<OrderId>,
    #[serde(rename = "codigo_pedido")]
    pub order_code: i64,
    #[serde(rename = "data_criacao")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "cliente")]
    pub customer: CustomerInfo,
    #[serde(rename = "modalidade")]
    pub delivery_mode: DeliveryMode,
    #[serde(rename = "entrega", default, skip_serializing_if = "Option::is_none")]
    pub delivery_address: Option<DeliveryAddress>,
    #[serde(rename = "forma_pagamento")]
    pub payment_method: PaymentMethod,
    pub status: OrderStatus,
    #[serde(rename = "valor_produtos_centavos")]
    pub products_subtotal_cents: i64,
    #[serde(rename = "taxa_entrega_centavos")]
    pub delivery_fee_cents: i64,
    #[serde(rename = "valor_total_centavos")]
    pub total_cents: i64,
    #[serde(rename = "itens")]
    pub items: Vec<LineItem>,
}

/// Create order payload; code, timestamps, status and money fields are
/// computed server-side
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(rename = "cliente")]
    pub customer: CustomerInfo,
    #[serde(rename = "modalidade")]
    pub delivery_mode: DeliveryMode,
    #[serde(rename = "entrega", default)]
    pub delivery_address: Option<DeliveryAddress>,
    #[serde(rename = "forma_pagamento")]
    pub payment_method: PaymentMethod,
    #[serde(rename = "itens")]
    pub items: Vec<LineItem>,
}

/// Status change payload for PATCH /pedidos/{id}/status
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}
