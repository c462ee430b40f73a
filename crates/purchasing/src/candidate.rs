use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use supplyline_core::{
    AggregateRoot, BPartnerId, DomainError, DomainResult, OrderId, OrgId, ProductId,
    PurchaseCandidateId, UomId, WarehouseId,
};

/// What purchase items need from the purchase candidate they fulfill.
///
/// The candidate is owned elsewhere (a repository or a transaction context);
/// items only hold a [`SharedCandidate`] handle and read through it on every call.
pub trait CandidateAggregate: Send + Sync {
    /// `None` while the candidate is not persisted yet.
    fn purchase_candidate_id(&self) -> Option<PurchaseCandidateId>;

    fn product_id(&self) -> ProductId;

    fn uom_id(&self) -> UomId;

    fn org_id(&self) -> OrgId;

    fn warehouse_id(&self) -> WarehouseId;

    fn vendor_bpartner_id(&self) -> BPartnerId;

    fn date_required(&self) -> DateTime<Utc>;

    /// The sales order whose demand created this candidate, if any.
    fn sales_order_id(&self) -> Option<OrderId>;

    fn qty_to_purchase(&self) -> Decimal;

    /// One-way transition into the processed state.
    fn mark_processed(&mut self) -> DomainResult<()>;
}

/// Shared handle to a candidate.
///
/// A strong `Arc`: an item outlives the repository lookup that produced it and
/// must keep the candidate readable. Candidates therefore must not own their
/// purchase items, or the two would keep each other alive.
pub type SharedCandidate = Arc<RwLock<dyn CandidateAggregate>>;

/// Aggregate root: PurchaseCandidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseCandidate {
    id: Option<PurchaseCandidateId>,
    org_id: OrgId,
    warehouse_id: WarehouseId,
    product_id: ProductId,
    uom_id: UomId,
    vendor_bpartner_id: BPartnerId,
    date_required: DateTime<Utc>,
    sales_order_id: Option<OrderId>,
    qty_to_purchase: Decimal,
    processed: bool,
    version: u64,
}

impl PurchaseCandidate {
    pub fn builder() -> PurchaseCandidateBuilder {
        PurchaseCandidateBuilder::default()
    }

    pub fn is_processed(&self) -> bool {
        self.processed
    }

    /// Wrap into the handle purchase items hold.
    pub fn into_shared(self) -> SharedCandidate {
        Arc::new(RwLock::new(self))
    }
}

impl AggregateRoot for PurchaseCandidate {
    type Id = Option<PurchaseCandidateId>;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}

impl CandidateAggregate for PurchaseCandidate {
    fn purchase_candidate_id(&self) -> Option<PurchaseCandidateId> {
        self.id
    }

    fn product_id(&self) -> ProductId {
        self.product_id
    }

    fn uom_id(&self) -> UomId {
        self.uom_id
    }

    fn org_id(&self) -> OrgId {
        self.org_id
    }

    fn warehouse_id(&self) -> WarehouseId {
        self.warehouse_id
    }

    fn vendor_bpartner_id(&self) -> BPartnerId {
        self.vendor_bpartner_id
    }

    fn date_required(&self) -> DateTime<Utc> {
        self.date_required
    }

    fn sales_order_id(&self) -> Option<OrderId> {
        self.sales_order_id
    }

    fn qty_to_purchase(&self) -> Decimal {
        self.qty_to_purchase
    }

    /// Idempotent: marking an already processed candidate is a no-op and does
    /// not bump the version.
    fn mark_processed(&mut self) -> DomainResult<()> {
        if self.processed {
            return Ok(());
        }

        self.processed = true;
        self.version += 1;

        tracing::info!(
            purchase_candidate_id = ?self.id,
            qty_to_purchase = %self.qty_to_purchase,
            "purchase candidate marked processed"
        );
        Ok(())
    }
}

/// Builder for [`PurchaseCandidate`].
#[derive(Debug, Default, Clone)]
pub struct PurchaseCandidateBuilder {
    id: Option<PurchaseCandidateId>,
    org_id: Option<OrgId>,
    warehouse_id: Option<WarehouseId>,
    product_id: Option<ProductId>,
    uom_id: Option<UomId>,
    vendor_bpartner_id: Option<BPartnerId>,
    date_required: Option<DateTime<Utc>>,
    sales_order_id: Option<OrderId>,
    qty_to_purchase: Option<Decimal>,
    processed: bool,
}

impl PurchaseCandidateBuilder {
    pub fn id(mut self, id: PurchaseCandidateId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn org_id(mut self, org_id: OrgId) -> Self {
        self.org_id = Some(org_id);
        self
    }

    pub fn warehouse_id(mut self, warehouse_id: WarehouseId) -> Self {
        self.warehouse_id = Some(warehouse_id);
        self
    }

    pub fn product_id(mut self, product_id: ProductId) -> Self {
        self.product_id = Some(product_id);
        self
    }

    pub fn uom_id(mut self, uom_id: UomId) -> Self {
        self.uom_id = Some(uom_id);
        self
    }

    pub fn vendor_bpartner_id(mut self, vendor_bpartner_id: BPartnerId) -> Self {
        self.vendor_bpartner_id = Some(vendor_bpartner_id);
        self
    }

    pub fn date_required(mut self, date_required: DateTime<Utc>) -> Self {
        self.date_required = Some(date_required);
        self
    }

    pub fn sales_order_id(mut self, sales_order_id: OrderId) -> Self {
        self.sales_order_id = Some(sales_order_id);
        self
    }

    pub fn qty_to_purchase(mut self, qty_to_purchase: Decimal) -> Self {
        self.qty_to_purchase = Some(qty_to_purchase);
        self
    }

    /// Rehydrate a candidate that was already processed when loaded.
    pub fn processed(mut self, processed: bool) -> Self {
        self.processed = processed;
        self
    }

    pub fn build(self) -> DomainResult<PurchaseCandidate> {
        let qty_to_purchase = required(self.qty_to_purchase, "qtyToPurchase")?;
        if qty_to_purchase.is_sign_negative() {
            return Err(DomainError::validation("qtyToPurchase must not be negative"));
        }

        Ok(PurchaseCandidate {
            id: self.id,
            org_id: required(self.org_id, "orgId")?,
            warehouse_id: required(self.warehouse_id, "warehouseId")?,
            product_id: required(self.product_id, "productId")?,
            uom_id: required(self.uom_id, "uomId")?,
            vendor_bpartner_id: required(self.vendor_bpartner_id, "vendorBPartnerId")?,
            date_required: required(self.date_required, "dateRequired")?,
            sales_order_id: self.sales_order_id,
            qty_to_purchase,
            processed: self.processed,
            version: 0,
        })
    }
}

pub(crate) fn required<T>(value: Option<T>, field: &str) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::validation(format!("{field} is required")))
}
