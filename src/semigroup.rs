//! Semigroup trait for accumulating failures
//!
//! When several fields are validated together every failure is kept, not just
//! the first one. A `Semigroup` is the associative "put these two failure sets
//! together" operation that [`Validation`](crate::Validation) relies on.
//!
//! ```text
//! a.combine(b).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```
//! use fieldrules::Semigroup;
//!
//! let first = vec!["name is too long"];
//! let second = vec!["phone must start with 1"];
//! assert_eq!(
//!     first.combine(second),
//!     vec!["name is too long", "phone must start with 1"]
//! );
//! ```

/// A type that supports an associative binary operation
///
/// # Laws
///
/// ```text
/// a.combine(b).combine(c) == a.combine(b.combine(c))
/// ```
///
/// `combine` takes `self` by value; clone first if the originals are still needed.
pub trait Semigroup: Sized {
    /// Combine this value with another value associatively
    fn combine(self, other: Self) -> Self;
}

impl<T> Semigroup for Vec<T> {
    #[inline]
    fn combine(mut self, other: Self) -> Self {
        self.extend(other);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_semigroup_keeps_order() {
        let v1 = vec!["a", "b"];
        let v2 = vec!["c"];
        assert_eq!(v1.combine(v2), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_vec_semigroup_empty() {
        let v1: Vec<&str> = vec![];
        assert_eq!(v1.combine(vec!["x"]), vec!["x"]);
    }

    #[test]
    fn test_vec_associativity() {
        let a = vec![1, 2];
        let b = vec![3];
        let c = vec![4, 5];

        let left = a.clone().combine(b.clone()).combine(c.clone());
        let right = a.combine(b.combine(c));

        assert_eq!(left, right);
    }
}
