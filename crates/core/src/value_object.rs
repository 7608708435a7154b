//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are never mutated in place: a bucket
/// count map or a shelf is rebuilt from its inputs instead of being patched.
/// Two value objects with the same attributes are the same value.
///
/// ```ignore
/// let a = BucketCounts::from_pairs([(Letter::A, 2)]);
/// let b = BucketCounts::from_pairs([(Letter::A, 2)]);
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
