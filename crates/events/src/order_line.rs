use serde::{Deserialize, Serialize};

use supplyline_core::{DomainResult, ValueObject};

use crate::descriptor::{DocumentLineDescriptor, check_id_greater_than_zero};

/// Descriptor of a sales/purchase order line: the line id plus its order id.
///
/// Construction never fails; the "> 0" invariant is checked by `validate()`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineDescriptor {
    order_line_id: i32,
    order_id: i32,
}

impl OrderLineDescriptor {
    pub fn builder() -> OrderLineDescriptorBuilder {
        OrderLineDescriptorBuilder::default()
    }

    pub fn order_line_id(&self) -> i32 {
        self.order_line_id
    }

    pub fn order_id(&self) -> i32 {
        self.order_id
    }
}

impl DocumentLineDescriptor for OrderLineDescriptor {
    fn validate(&self) -> DomainResult<()> {
        check_id_greater_than_zero("orderLineId", self.order_line_id)?;
        check_id_greater_than_zero("orderId", self.order_id)
    }
}

impl ValueObject for OrderLineDescriptor {}

/// Builder for [`OrderLineDescriptor`]; unset ids stay 0.
#[derive(Debug, Default, Clone)]
pub struct OrderLineDescriptorBuilder {
    order_line_id: i32,
    order_id: i32,
}

impl OrderLineDescriptorBuilder {
    pub fn order_line_id(mut self, order_line_id: i32) -> Self {
        self.order_line_id = order_line_id;
        self
    }

    pub fn order_id(mut self, order_id: i32) -> Self {
        self.order_id = order_id;
        self
    }

    pub fn build(self) -> OrderLineDescriptor {
        OrderLineDescriptor {
            order_line_id: self.order_line_id,
            order_id: self.order_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use supplyline_core::DomainError;

    fn descriptor(order_line_id: i32, order_id: i32) -> OrderLineDescriptor {
        OrderLineDescriptor::builder()
            .order_line_id(order_line_id)
            .order_id(order_id)
            .build()
    }

    #[test]
    fn unset_builder_fields_fail_validation() {
        let err = OrderLineDescriptor::builder().order_id(5).build().validate().unwrap_err();
        assert_eq!(err, DomainError::invalid_id("orderLineId", 0));
    }

    #[test]
    fn line_id_is_reported_before_order_id() {
        let err = descriptor(-1, -1).validate().unwrap_err();
        assert_eq!(err.invalid_field(), Some("orderLineId"));
    }

    #[test]
    fn validate_is_repeatable() {
        let d = descriptor(3, 0);
        assert_eq!(d.validate(), d.validate());
        assert_eq!(d.order_line_id(), 3);
    }

    #[test]
    fn wire_shape_uses_camel_case_and_skips_validation() {
        let json = serde_json::to_value(descriptor(11, 22)).unwrap();
        assert_eq!(json, serde_json::json!({ "orderLineId": 11, "orderId": 22 }));

        let parsed: OrderLineDescriptor =
            serde_json::from_str(r#"{"orderLineId":0,"orderId":22}"#).unwrap();
        assert!(parsed.validate().is_err());
    }

    proptest! {
        #[test]
        fn positive_ids_always_validate(line in 1i32.., order in 1i32..) {
            prop_assert!(descriptor(line, order).validate().is_ok());
        }

        #[test]
        fn non_positive_line_id_is_named(line in i32::MIN..=0, order in any::<i32>()) {
            let err = descriptor(line, order).validate().unwrap_err();
            prop_assert_eq!(err.invalid_field(), Some("orderLineId"));
        }

        #[test]
        fn non_positive_order_id_is_named(line in 1i32.., order in i32::MIN..=0) {
            let err = descriptor(line, order).validate().unwrap_err();
            prop_assert_eq!(err, DomainError::invalid_id("orderId", order));
        }
    }
}
