//! Aggregate root trait for domain models.

/// Aggregate root marker + minimal interface.
///
/// Kept small so purchasing and material modules decide for themselves how they
/// model state transitions, without bringing in any infrastructure concerns.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Bumped once per effective state transition; no-op transitions leave it
    /// untouched.
    fn version(&self) -> u64;
}
