//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are immutable and compared by their attribute values; two
/// instances with the same values are interchangeable. The bounds keep them
/// cheap to copy around, comparable, and debuggable.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
