use supplyline_core::{DomainError, DomainResult};

/// A descriptor pointing at the document line a material event relates to.
///
/// The family is open: each variant validates its own identifier set, and
/// callers only ever go through `validate()`, typically on a
/// `&dyn DocumentLineDescriptor`.
pub trait DocumentLineDescriptor: core::fmt::Debug + Send + Sync {
    /// Check the descriptor's identifiers. No side effects; idempotent.
    fn validate(&self) -> DomainResult<()>;
}

/// Fails with [`DomainError::InvalidId`] naming `field` unless `id > 0`.
pub fn check_id_greater_than_zero(field: &'static str, id: i32) -> DomainResult<()> {
    if id > 0 {
        Ok(())
    } else {
        Err(DomainError::invalid_id(field, id))
    }
}
