//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// Table inputs such as a normalized search term or a page size are value
/// objects: two stores holding the same term are interchangeable.
///
/// "Modifying" a value object means replacing it with a new one, which is how
/// the query stores treat their inputs.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct PageSize(usize);
///
/// impl ValueObject for PageSize {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
