//! Aggregate root trait for domain models.

/// Aggregate root marker + minimal interface.
///
/// This is intentionally small: aggregates own their state transitions and
/// expose only identity and a version counter to the outside.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Incremented once per successful state change; rejected operations leave
    /// it untouched.
    fn version(&self) -> u64;
}
