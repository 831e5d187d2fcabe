//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// `Money` is the one value object in this workspace: two amounts of `12.5`
/// are the same amount regardless of which account holds them.
///
/// The trait requires:
/// - **Clone**: copying a value must be cheap and independent
/// - **PartialEq**: comparison is by value
/// - **Debug**: values show up in logs and test failures
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
