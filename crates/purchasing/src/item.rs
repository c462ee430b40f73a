use supplyline_core::{PurchaseCandidateId, PurchaseItemId};

use crate::error_item::PurchaseErrorItem;
use crate::order_item::PurchaseOrderItem;

/// The outcome of purchasing (part of) a purchase candidate.
///
/// Closed set; adding a variant forces every `match` on it to be revisited.
#[derive(Debug, Clone)]
pub enum PurchaseItem {
    /// Bought; backed by (or about to be backed by) a purchase order line.
    Order(PurchaseOrderItem),
    /// The purchase attempt failed.
    Error(PurchaseErrorItem),
}

impl PurchaseItem {
    pub fn purchase_candidate_id(&self) -> Option<PurchaseCandidateId> {
        match self {
            PurchaseItem::Order(item) => item.purchase_candidate_id(),
            PurchaseItem::Error(item) => item.purchase_candidate_id(),
        }
    }

    pub fn purchase_item_id(&self) -> Option<PurchaseItemId> {
        match self {
            PurchaseItem::Order(item) => item.purchase_item_id(),
            PurchaseItem::Error(item) => item.purchase_item_id(),
        }
    }

    /// Variant name, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PurchaseItem::Order(_) => "PurchaseOrderItem",
            PurchaseItem::Error(_) => "PurchaseErrorItem",
        }
    }

    pub fn as_order_item(&self) -> Option<&PurchaseOrderItem> {
        match self {
            PurchaseItem::Order(item) => Some(item),
            PurchaseItem::Error(_) => None,
        }
    }

    pub fn as_order_item_mut(&mut self) -> Option<&mut PurchaseOrderItem> {
        match self {
            PurchaseItem::Order(item) => Some(item),
            PurchaseItem::Error(_) => None,
        }
    }
}

impl From<PurchaseOrderItem> for PurchaseItem {
    fn from(item: PurchaseOrderItem) -> Self {
        PurchaseItem::Order(item)
    }
}

impl From<PurchaseErrorItem> for PurchaseItem {
    fn from(item: PurchaseErrorItem) -> Self {
        PurchaseItem::Error(item)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use supplyline_core::DomainError;

    use super::*;
    use crate::candidate::tests::{candidate, id, qty};
    use crate::order_item::NO_REMOTE_PURCHASE_ID;

    fn order_item() -> PurchaseOrderItem {
        PurchaseOrderItem::builder()
            .purchase_item_id(id(1))
            .purchase_candidate(candidate("10").into_shared())
            .purchased_qty(qty("10"))
            .date_promised(Utc::now())
            .remote_purchase_order_id(NO_REMOTE_PURCHASE_ID)
            .build()
            .unwrap()
    }

    fn error_item() -> PurchaseErrorItem {
        PurchaseErrorItem::new(candidate("10").into_shared(), "gateway timeout").unwrap()
    }

    #[test]
    fn every_variant_exposes_its_candidate_id() {
        let items: Vec<PurchaseItem> = vec![order_item().into(), error_item().into()];
        for item in &items {
            assert_eq!(item.purchase_candidate_id(), Some(id(500)));
        }
        assert_eq!(items[0].purchase_item_id(), Some(id(1)));
        assert_eq!(items[1].purchase_item_id(), None);
    }

    #[test]
    fn cast_narrows_order_items() {
        let item = PurchaseOrderItem::cast(order_item().into()).unwrap();
        assert_eq!(item.purchase_item_id(), Some(id(1)));
    }

    #[test]
    fn cast_rejects_error_items() {
        let err = PurchaseOrderItem::try_from(PurchaseItem::from(error_item())).unwrap_err();
        assert_eq!(
            err,
            DomainError::type_mismatch("PurchaseOrderItem", "PurchaseErrorItem")
        );
    }

    #[test]
    fn borrowing_narrowing_returns_none_for_other_variants() {
        let mut item = PurchaseItem::from(order_item());
        assert!(item.as_order_item().is_some());
        assert!(item.as_order_item_mut().is_some());
        assert!(PurchaseItem::from(error_item()).as_order_item().is_none());
    }
}
