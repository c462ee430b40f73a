//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity** - they are defined entirely by their
//! attribute values. Two document line descriptors pointing at the same order
//! line are the same descriptor.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one with the new values.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: `TableRecordReference { table_name: "C_Order", record_id: 7 }`
/// - **Entity**: a purchase item, which keeps its identity while its order ids
///   are filled in
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Quantity {
///     qty: Decimal,
///     uom_id: UomId,
/// }
///
/// impl ValueObject for Quantity {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
