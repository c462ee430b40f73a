//! `supplyline-core`: domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod record_ref;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{
    BPartnerId, OrderId, OrderLineId, OrgId, ProductId, PurchaseCandidateId, PurchaseItemId,
    UomId, WarehouseId,
};
pub use record_ref::TableRecordReference;
pub use value_object::ValueObject;
