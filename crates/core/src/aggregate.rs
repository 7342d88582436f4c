//! Aggregate root trait.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root is the only object callers mutate directly; it enforces
/// the invariants of everything it owns.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per successful state change.
    fn version(&self) -> u64;
}
