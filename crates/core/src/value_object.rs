//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute
/// values. To "modify" one, build a new one.
///
/// - **Value Object**: `Attributes { Damage: 5.0 }` equals any other map with the same entries
/// - **Entity**: an `Item` is itself only, even if another item has the same name and attributes
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
