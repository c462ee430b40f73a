use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use supplyline_core::{DomainError, DomainResult, OrderId, OrderLineId};

/// Looks up which order a (newly created) order line belongs to.
///
/// Conceptually a synchronous data-store read. Implementations fail with
/// [`DomainError::NotFound`] for unknown lines and [`DomainError::Unavailable`]
/// when the backing store cannot be reached; retries are their own business.
pub trait OrderLineResolver: Send + Sync {
    fn resolve_parent_order_id(&self, order_line_id: OrderLineId) -> DomainResult<OrderId>;
}

impl<R> OrderLineResolver for Arc<R>
where
    R: OrderLineResolver + ?Sized,
{
    fn resolve_parent_order_id(&self, order_line_id: OrderLineId) -> DomainResult<OrderId> {
        (**self).resolve_parent_order_id(order_line_id)
    }
}

impl<R> OrderLineResolver for &R
where
    R: OrderLineResolver + ?Sized,
{
    fn resolve_parent_order_id(&self, order_line_id: OrderLineId) -> DomainResult<OrderId> {
        (**self).resolve_parent_order_id(order_line_id)
    }
}

/// In-memory order line index for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryOrderLineResolver {
    lines: RwLock<HashMap<OrderLineId, OrderId>>,
}

impl InMemoryOrderLineResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `order_line_id` belongs to `order_id`, replacing any earlier entry.
    pub fn register(&self, order_line_id: OrderLineId, order_id: OrderId) -> DomainResult<()> {
        let mut lines = self
            .lines
            .write()
            .map_err(|_| DomainError::unavailable("order line index lock poisoned"))?;
        lines.insert(order_line_id, order_id);
        Ok(())
    }
}

impl FromIterator<(OrderLineId, OrderId)> for InMemoryOrderLineResolver {
    fn from_iter<I: IntoIterator<Item = (OrderLineId, OrderId)>>(iter: I) -> Self {
        Self {
            lines: RwLock::new(iter.into_iter().collect()),
        }
    }
}

impl OrderLineResolver for InMemoryOrderLineResolver {
    fn resolve_parent_order_id(&self, order_line_id: OrderLineId) -> DomainResult<OrderId> {
        let lines = self
            .lines
            .read()
            .map_err(|_| DomainError::unavailable("order line index lock poisoned"))?;
        lines
            .get(&order_line_id)
            .copied()
            .ok_or_else(|| DomainError::not_found(format!("order line {order_line_id}")))
    }
}
