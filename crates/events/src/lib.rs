//! Material event commons.
//!
//! Payload building blocks shared by material events. Descriptors identify the
//! document line an event is about and validate themselves on demand; event
//! producers call `validate()` before publishing.

pub mod descriptor;
pub mod order_line;
pub mod subscription_line;

pub use descriptor::{DocumentLineDescriptor, check_id_greater_than_zero};
pub use order_line::{OrderLineDescriptor, OrderLineDescriptorBuilder};
pub use subscription_line::SubscriptionLineDescriptor;
