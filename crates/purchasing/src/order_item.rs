use std::sync::{PoisonError, RwLockReadGuard};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use supplyline_core::{
    BPartnerId, DomainError, DomainResult, Entity, OrderId, OrderLineId, OrgId, ProductId,
    PurchaseCandidateId, PurchaseItemId, TableRecordReference, UomId, WarehouseId,
};

use crate::candidate::{CandidateAggregate, SharedCandidate, required};
use crate::item::PurchaseItem;
use crate::resolver::OrderLineResolver;

/// Remote purchase order id used when no vendor gateway took part.
pub const NO_REMOTE_PURCHASE_ID: &str = "NONE";

/// A piece of a **factual** purchase: some quantity of a purchase candidate was
/// bought (possibly through a vendor gateway) and now needs its own purchase
/// order line.
///
/// State: unfulfilled until [`set_purchase_order_line_id_and_mark_processed`]
/// stores the created order line; there is no way back.
///
/// Not safe for concurrent mutation; callers serialize access.
///
/// [`set_purchase_order_line_id_and_mark_processed`]: PurchaseOrderItem::set_purchase_order_line_id_and_mark_processed
#[derive(Clone)]
pub struct PurchaseOrderItem {
    purchase_item_id: Option<PurchaseItemId>,
    transaction_reference: Option<TableRecordReference>,
    remote_purchase_order_id: String,
    purchase_candidate: SharedCandidate,
    purchased_qty: Decimal,
    date_promised: DateTime<Utc>,
    purchase_order_id: Option<OrderId>,
    purchase_order_line_id: Option<OrderLineId>,
}

impl PurchaseOrderItem {
    pub fn builder() -> PurchaseOrderItemBuilder {
        PurchaseOrderItemBuilder::default()
    }

    /// Builder pre-filled with this item's values; the candidate handle is shared.
    pub fn to_builder(&self) -> PurchaseOrderItemBuilder {
        PurchaseOrderItemBuilder {
            purchase_item_id: self.purchase_item_id,
            purchase_candidate: Some(self.purchase_candidate.clone()),
            purchased_qty: Some(self.purchased_qty),
            date_promised: Some(self.date_promised),
            remote_purchase_order_id: Some(self.remote_purchase_order_id.clone()),
            transaction_reference: self.transaction_reference.clone(),
            purchase_order_id: self.purchase_order_id,
            purchase_order_line_id: self.purchase_order_line_id,
        }
    }

    pub fn with_purchased_qty(&self, purchased_qty: Decimal) -> Self {
        Self {
            purchased_qty,
            ..self.clone()
        }
    }

    pub fn with_date_promised(&self, date_promised: DateTime<Utc>) -> Self {
        Self {
            date_promised,
            ..self.clone()
        }
    }

    /// Narrow a purchase item to the order-backed variant.
    pub fn cast(item: PurchaseItem) -> DomainResult<Self> {
        match item {
            PurchaseItem::Order(order_item) => Ok(order_item),
            other => Err(DomainError::type_mismatch("PurchaseOrderItem", other.kind())),
        }
    }

    pub fn purchase_item_id(&self) -> Option<PurchaseItemId> {
        self.purchase_item_id
    }

    pub fn transaction_reference(&self) -> Option<&TableRecordReference> {
        self.transaction_reference.as_ref()
    }

    pub fn remote_purchase_order_id(&self) -> &str {
        &self.remote_purchase_order_id
    }

    pub fn remote_purchase_exists(&self) -> bool {
        self.remote_purchase_order_id != NO_REMOTE_PURCHASE_ID
    }

    pub fn purchased_qty(&self) -> Decimal {
        self.purchased_qty
    }

    pub fn date_promised(&self) -> DateTime<Utc> {
        self.date_promised
    }

    pub fn purchase_order_id(&self) -> Option<OrderId> {
        self.purchase_order_id
    }

    pub fn purchase_order_line_id(&self) -> Option<OrderLineId> {
        self.purchase_order_line_id
    }

    pub fn is_fulfilled(&self) -> bool {
        self.purchase_order_line_id.is_some()
    }

    // Read-through accessors: always the candidate's current state.

    pub fn purchase_candidate_id(&self) -> Option<PurchaseCandidateId> {
        self.candidate().purchase_candidate_id()
    }

    pub fn product_id(&self) -> ProductId {
        self.candidate().product_id()
    }

    pub fn uom_id(&self) -> UomId {
        self.candidate().uom_id()
    }

    pub fn org_id(&self) -> OrgId {
        self.candidate().org_id()
    }

    pub fn warehouse_id(&self) -> WarehouseId {
        self.candidate().warehouse_id()
    }

    pub fn vendor_bpartner_id(&self) -> BPartnerId {
        self.candidate().vendor_bpartner_id()
    }

    pub fn date_required(&self) -> DateTime<Utc> {
        self.candidate().date_required()
    }

    pub fn sales_order_id(&self) -> Option<OrderId> {
        self.candidate().sales_order_id()
    }

    fn qty_to_purchase(&self) -> Decimal {
        self.candidate().qty_to_purchase()
    }

    /// Exact decimal comparison: `10.00` matches `10`, `9.99` does not.
    pub fn purchase_matches_required_qty(&self) -> bool {
        self.purchased_qty == self.qty_to_purchase()
    }

    fn purchase_matches_or_exceeds(&self, qty_to_purchase: Decimal) -> bool {
        self.purchased_qty >= qty_to_purchase
    }

    /// Store the purchase order line created for this item (and its order), and
    /// mark the candidate processed once the purchased quantity covers it.
    ///
    /// All or nothing: if the order lookup or the candidate transition fails,
    /// neither id is written. Not idempotent; a second call overwrites both ids
    /// and runs the candidate transition again.
    pub fn set_purchase_order_line_id_and_mark_processed<R>(
        &mut self,
        purchase_order_line_id: OrderLineId,
        order_lines: &R,
    ) -> DomainResult<()>
    where
        R: OrderLineResolver + ?Sized,
    {
        let purchase_order_id = order_lines.resolve_parent_order_id(purchase_order_line_id)?;

        // Threshold check and transition see the same candidate state.
        let mark_processed = {
            let mut candidate = self
                .purchase_candidate
                .write()
                .map_err(|_| DomainError::invariant("purchase candidate lock poisoned"))?;
            let mark_processed = self.purchase_matches_or_exceeds(candidate.qty_to_purchase());
            if mark_processed {
                candidate.mark_processed()?;
            }
            mark_processed
        };

        self.purchase_order_id = Some(purchase_order_id);
        self.purchase_order_line_id = Some(purchase_order_line_id);

        tracing::debug!(
            purchase_item_id = ?self.purchase_item_id,
            %purchase_order_id,
            %purchase_order_line_id,
            purchased_qty = %self.purchased_qty,
            candidate_processed = mark_processed,
            "purchase order item linked to order line"
        );
        Ok(())
    }

    fn candidate(&self) -> RwLockReadGuard<'_, dyn CandidateAggregate> {
        self.purchase_candidate
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

// Only the item's own fields; the candidate has its own Debug and may be locked.
impl core::fmt::Debug for PurchaseOrderItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PurchaseOrderItem")
            .field("purchase_item_id", &self.purchase_item_id)
            .field("transaction_reference", &self.transaction_reference)
            .field("remote_purchase_order_id", &self.remote_purchase_order_id)
            .field("purchased_qty", &self.purchased_qty)
            .field("date_promised", &self.date_promised)
            .field("purchase_order_id", &self.purchase_order_id)
            .field("purchase_order_line_id", &self.purchase_order_line_id)
            .finish_non_exhaustive()
    }
}

impl Entity for PurchaseOrderItem {
    type Id = Option<PurchaseItemId>;

    fn id(&self) -> &Self::Id {
        &self.purchase_item_id
    }
}

impl TryFrom<PurchaseItem> for PurchaseOrderItem {
    type Error = DomainError;

    fn try_from(item: PurchaseItem) -> Result<Self, Self::Error> {
        Self::cast(item)
    }
}

/// Builder for [`PurchaseOrderItem`].
///
/// Required: `purchase_candidate`, `purchased_qty`, `date_promised`,
/// `remote_purchase_order_id`. The transaction reference is required as well
/// unless the remote id is [`NO_REMOTE_PURCHASE_ID`].
#[derive(Default, Clone)]
pub struct PurchaseOrderItemBuilder {
    purchase_item_id: Option<PurchaseItemId>,
    purchase_candidate: Option<SharedCandidate>,
    purchased_qty: Option<Decimal>,
    date_promised: Option<DateTime<Utc>>,
    remote_purchase_order_id: Option<String>,
    transaction_reference: Option<TableRecordReference>,
    purchase_order_id: Option<OrderId>,
    purchase_order_line_id: Option<OrderLineId>,
}

impl PurchaseOrderItemBuilder {
    pub fn purchase_item_id(mut self, purchase_item_id: PurchaseItemId) -> Self {
        self.purchase_item_id = Some(purchase_item_id);
        self
    }

    pub fn purchase_candidate(mut self, purchase_candidate: SharedCandidate) -> Self {
        self.purchase_candidate = Some(purchase_candidate);
        self
    }

    pub fn purchased_qty(mut self, purchased_qty: Decimal) -> Self {
        self.purchased_qty = Some(purchased_qty);
        self
    }

    pub fn date_promised(mut self, date_promised: DateTime<Utc>) -> Self {
        self.date_promised = Some(date_promised);
        self
    }

    pub fn remote_purchase_order_id(mut self, remote_purchase_order_id: impl Into<String>) -> Self {
        self.remote_purchase_order_id = Some(remote_purchase_order_id.into());
        self
    }

    pub fn transaction_reference(mut self, transaction_reference: TableRecordReference) -> Self {
        self.transaction_reference = Some(transaction_reference);
        self
    }

    pub fn clear_transaction_reference(mut self) -> Self {
        self.transaction_reference = None;
        self
    }

    pub fn purchase_order_id(mut self, purchase_order_id: OrderId) -> Self {
        self.purchase_order_id = Some(purchase_order_id);
        self
    }

    pub fn purchase_order_line_id(mut self, purchase_order_line_id: OrderLineId) -> Self {
        self.purchase_order_line_id = Some(purchase_order_line_id);
        self
    }

    pub fn build(self) -> DomainResult<PurchaseOrderItem> {
        let purchase_candidate = required(self.purchase_candidate, "purchaseCandidate")?;
        let purchased_qty = required(self.purchased_qty, "purchasedQty")?;
        let date_promised = required(self.date_promised, "datePromised")?;
        let remote_purchase_order_id =
            required(self.remote_purchase_order_id, "remotePurchaseOrderId")?;

        let remote_purchase_exists = remote_purchase_order_id != NO_REMOTE_PURCHASE_ID;
        if remote_purchase_exists && self.transaction_reference.is_none() {
            return Err(DomainError::precondition(format!(
                "transaction reference required when a remote purchase exists; remote_purchase_order_id={remote_purchase_order_id}"
            )));
        }

        Ok(PurchaseOrderItem {
            purchase_item_id: self.purchase_item_id,
            transaction_reference: self.transaction_reference,
            remote_purchase_order_id,
            purchase_candidate,
            purchased_qty,
            date_promised,
            purchase_order_id: self.purchase_order_id,
            purchase_order_line_id: self.purchase_order_line_id,
        })
    }
}
