use serde::{Deserialize, Serialize};

use supplyline_core::{DomainResult, ValueObject};

use crate::descriptor::{DocumentLineDescriptor, check_id_greater_than_zero};

/// Descriptor of a subscription delivery: the flatrate term, the progress
/// record of the delivery and the partner the subscription is billed to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionLineDescriptor {
    flatrate_term_id: i32,
    subscription_progress_id: i32,
    #[serde(rename = "subscriptionBillBPartnerId")]
    subscription_bill_bpartner_id: i32,
}

impl SubscriptionLineDescriptor {
    pub fn new(
        flatrate_term_id: i32,
        subscription_progress_id: i32,
        subscription_bill_bpartner_id: i32,
    ) -> Self {
        Self {
            flatrate_term_id,
            subscription_progress_id,
            subscription_bill_bpartner_id,
        }
    }

    pub fn flatrate_term_id(&self) -> i32 {
        self.flatrate_term_id
    }

    pub fn subscription_progress_id(&self) -> i32 {
        self.subscription_progress_id
    }

    pub fn subscription_bill_bpartner_id(&self) -> i32 {
        self.subscription_bill_bpartner_id
    }
}

impl DocumentLineDescriptor for SubscriptionLineDescriptor {
    fn validate(&self) -> DomainResult<()> {
        check_id_greater_than_zero("flatrateTermId", self.flatrate_term_id)?;
        check_id_greater_than_zero("subscriptionProgressId", self.subscription_progress_id)?;
        check_id_greater_than_zero(
            "subscriptionBillBPartnerId",
            self.subscription_bill_bpartner_id,
        )
    }
}

impl ValueObject for SubscriptionLineDescriptor {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_three_ids_are_checked() {
        assert!(SubscriptionLineDescriptor::new(1, 2, 3).validate().is_ok());
        assert_eq!(
            SubscriptionLineDescriptor::new(0, 2, 3).validate().unwrap_err().invalid_field(),
            Some("flatrateTermId")
        );
        assert_eq!(
            SubscriptionLineDescriptor::new(1, -2, 3).validate().unwrap_err().invalid_field(),
            Some("subscriptionProgressId")
        );
    }

    #[test]
    fn bill_partner_keeps_its_wire_name() {
        let json = serde_json::to_value(SubscriptionLineDescriptor::new(1, 2, 3)).unwrap();
        assert_eq!(json["subscriptionBillBPartnerId"], 3);
    }
}
