//! Database models
//!
//! Documents are stored with the Portuguese field names of the public API
//! (`nome`, `preco_centavos`, ...); Rust identifiers are English and map via
//! serde renames.

pub mod component;
pub mod order;
pub mod product;
pub mod serde_helpers;
pub mod user;

pub use component::{Component, ComponentCreate, ComponentKind, ComponentUpdate};
pub use order::{
    CustomerInfo, DeliveryAddress, DeliveryMode, LineItem, Order, OrderCreate, OrderStatus,
    OrderStatusUpdate, PaymentMethod,
};
pub use product::{Product, ProductCategory, ProductCreate, ProductKind, ProductUpdate};
pub use user::{Role, User, UserCreate, UserUpdate};
