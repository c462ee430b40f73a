//! Purchasing domain module (purchase candidates and purchase items).
//!
//! A purchase candidate is a requirement to buy some quantity of a product from a
//! vendor. Purchase items record how that requirement was (or failed to be)
//! fulfilled. Everything here is deterministic domain logic; order-line lookups
//! go through the [`OrderLineResolver`] collaborator.

pub mod candidate;
pub mod error_item;
pub mod item;
pub mod order_item;
pub mod resolver;

pub use candidate::{
    CandidateAggregate, PurchaseCandidate, PurchaseCandidateBuilder, SharedCandidate,
};
pub use error_item::PurchaseErrorItem;
pub use item::PurchaseItem;
pub use order_item::{NO_REMOTE_PURCHASE_ID, PurchaseOrderItem, PurchaseOrderItemBuilder};
pub use resolver::{InMemoryOrderLineResolver, OrderLineResolver};
