use std::sync::PoisonError;

use supplyline_core::{
    DomainError, DomainResult, Entity, PurchaseCandidateId, PurchaseItemId, TableRecordReference,
};

use crate::candidate::SharedCandidate;

/// A purchase attempt for a candidate that failed, e.g. because the vendor
/// gateway rejected the order. Keeps the issue so it can be shown next to the
/// candidate.
#[derive(Clone)]
pub struct PurchaseErrorItem {
    purchase_item_id: Option<PurchaseItemId>,
    purchase_candidate: SharedCandidate,
    issue: String,
    transaction_reference: Option<TableRecordReference>,
}

impl PurchaseErrorItem {
    pub fn new(purchase_candidate: SharedCandidate, issue: impl Into<String>) -> DomainResult<Self> {
        let issue = issue.into();
        if issue.trim().is_empty() {
            return Err(DomainError::validation("issue must not be blank"));
        }
        Ok(Self {
            purchase_item_id: None,
            purchase_candidate,
            issue,
            transaction_reference: None,
        })
    }

    pub fn with_purchase_item_id(self, purchase_item_id: PurchaseItemId) -> Self {
        Self {
            purchase_item_id: Some(purchase_item_id),
            ..self
        }
    }

    pub fn with_transaction_reference(self, transaction_reference: TableRecordReference) -> Self {
        Self {
            transaction_reference: Some(transaction_reference),
            ..self
        }
    }

    pub fn purchase_item_id(&self) -> Option<PurchaseItemId> {
        self.purchase_item_id
    }

    pub fn purchase_candidate_id(&self) -> Option<PurchaseCandidateId> {
        self.purchase_candidate
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .purchase_candidate_id()
    }

    pub fn issue(&self) -> &str {
        &self.issue
    }

    pub fn transaction_reference(&self) -> Option<&TableRecordReference> {
        self.transaction_reference.as_ref()
    }
}

impl core::fmt::Debug for PurchaseErrorItem {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PurchaseErrorItem")
            .field("purchase_item_id", &self.purchase_item_id)
            .field("issue", &self.issue)
            .field("transaction_reference", &self.transaction_reference)
            .finish_non_exhaustive()
    }
}

impl Entity for PurchaseErrorItem {
    type Id = Option<PurchaseItemId>;

    fn id(&self) -> &Self::Id {
        &self.purchase_item_id
    }
}
