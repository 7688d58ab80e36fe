//! Validation type for accumulating field failures
//!
//! `Validation` looks like `Result`, but combining two of them keeps the
//! failures of both sides. A form with three bad fields reports three messages.
//!
//! # Examples
//!
//! ```
//! use fieldrules::Validation;
//!
//! let name = Validation::<_, Vec<&str>>::success("alice");
//! let phone = Validation::<&str, _>::failure(vec!["phone must start with 1"]);
//! let password = Validation::<&str, _>::failure(vec!["password is too short"]);
//!
//! let result = name.and(phone).and(password);
//! assert_eq!(
//!     result,
//!     Validation::Failure(vec!["phone must start with 1", "password is too short"])
//! );
//! ```

use crate::predicate::Predicate;
use crate::Semigroup;

/// A validation that either succeeds with a value or fails with accumulated errors
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the error value (must implement `Semigroup` for accumulation)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation<T, E> {
    /// Successful validation with a value
    Success(T),
    /// Failed validation with accumulated errors
    Failure(E),
}

impl<T, E> Validation<T, E> {
    /// Create a successful validation
    #[inline]
    pub fn success(value: T) -> Self {
        Validation::Success(value)
    }

    /// Create a failed validation
    #[inline]
    pub fn failure(error: E) -> Self {
        Validation::Failure(error)
    }

    /// Create a validation from a Result
    ///
    /// ```
    /// use fieldrules::Validation;
    ///
    /// let v = Validation::from_result(Err::<i32, _>("bad parameter"));
    /// assert_eq!(v, Validation::Failure("bad parameter"));
    /// ```
    #[inline]
    pub fn from_result(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Validation::Success(value),
            Err(error) => Validation::Failure(error),
        }
    }

    /// Convert this validation to a Result
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Validation::Success(value) => Ok(value),
            Validation::Failure(error) => Err(error),
        }
    }

    /// Check if this validation is successful
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Validation::Success(_))
    }

    /// Check if this validation failed
    #[inline]
    pub fn is_failure(&self) -> bool {
        matches!(self, Validation::Failure(_))
    }

    /// Transform the success value if present
    #[inline]
    pub fn map<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Validation::Success(value) => Validation::Success(f(value)),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Transform the error value if present
    #[inline]
    pub fn map_err<E2, F>(self, f: F) -> Validation<T, E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Validation::Success(value) => Validation::Success(value),
            Validation::Failure(error) => Validation::Failure(f(error)),
        }
    }

    /// Keep the success value only if it satisfies `predicate`.
    ///
    /// A failure stays a failure; its errors are not extended.
    ///
    /// ```
    /// use fieldrules::Validation;
    /// use fieldrules::predicate::char_len_between;
    ///
    /// let v = Validation::<_, &str>::success("abc").ensure(char_len_between(1, 2), "too long");
    /// assert_eq!(v, Validation::Failure("too long"));
    /// ```
    pub fn ensure<P>(self, predicate: P, error: E) -> Self
    where
        P: Predicate<T>,
    {
        match self {
            Validation::Success(value) if predicate.check(&value) => Validation::Success(value),
            Validation::Success(_) => Validation::Failure(error),
            failure => failure,
        }
    }
}

impl<T, E: Semigroup> Validation<T, E> {
    /// Combine two validations, accumulating errors using the Semigroup instance
    pub fn and<U>(self, other: Validation<U, E>) -> Validation<(T, U), E> {
        match (self, other) {
            (Validation::Success(a), Validation::Success(b)) => Validation::Success((a, b)),
            (Validation::Failure(e1), Validation::Failure(e2)) => {
                Validation::Failure(e1.combine(e2))
            }
            (Validation::Failure(e), _) => Validation::Failure(e),
            (_, Validation::Failure(e)) => Validation::Failure(e),
        }
    }

    /// Chain a dependent validation
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Validation<U, E>
    where
        F: FnOnce(T) -> Validation<U, E>,
    {
        match self {
            Validation::Success(value) => f(value),
            Validation::Failure(error) => Validation::Failure(error),
        }
    }

    /// Combine every validation yielded by `validations`.
    ///
    /// All failures are combined in iteration order.
    ///
    /// ```
    /// use fieldrules::Validation;
    ///
    /// let checks = vec![
    ///     Validation::<(), _>::failure(vec!["name"]),
    ///     Validation::success(()),
    ///     Validation::failure(vec!["phone"]),
    /// ];
    /// assert_eq!(
    ///     Validation::all_vec(checks),
    ///     Validation::Failure(vec!["name", "phone"])
    /// );
    /// ```
    pub fn all_vec<I>(validations: I) -> Validation<Vec<T>, E>
    where
        I: IntoIterator<Item = Validation<T, E>>,
    {
        let mut successes = Vec::new();
        let mut failures: Option<E> = None;

        for validation in validations {
            match validation {
                Validation::Success(value) => successes.push(value),
                Validation::Failure(error) => {
                    failures = Some(match failures {
                        Some(acc) => acc.combine(error),
                        None => error,
                    });
                }
            }
        }

        match failures {
            Some(errors) => Validation::Failure(errors),
            None => Validation::Success(successes),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_and_failure() {
        let ok = Validation::<_, Vec<&str>>::success(1);
        let err = Validation::<i32, _>::failure(vec!["bad"]);

        assert!(ok.is_success());
        assert!(err.is_failure());
        assert_eq!(ok.into_result(), Ok(1));
        assert_eq!(err.into_result(), Err(vec!["bad"]));
    }

    #[test]
    fn test_and_accumulates_both_failures() {
        let v1 = Validation::<i32, _>::failure(vec!["name"]);
        let v2 = Validation::<i32, _>::failure(vec!["phone"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["name", "phone"]));
    }

    #[test]
    fn test_and_with_one_failure() {
        let v1 = Validation::<_, Vec<&str>>::success(1);
        let v2 = Validation::<i32, _>::failure(vec!["phone"]);
        assert_eq!(v1.and(v2), Validation::Failure(vec!["phone"]));
    }

    #[test]
    fn test_and_then_short_circuits_failure() {
        let v = Validation::<i32, _>::failure(vec!["first"]);
        let result = v.and_then(|x| Validation::success(x + 1));
        assert_eq!(result, Validation::Failure(vec!["first"]));
    }

    #[test]
    fn test_map_and_map_err() {
        let v = Validation::<_, Vec<&str>>::success(2).map(|x| x * 10);
        assert_eq!(v, Validation::Success(20));

        let v = Validation::<i32, _>::failure(vec!["a", "b"]).map_err(|e| e.len());
        assert_eq!(v, Validation::Failure(2));
    }

    #[test]
    fn test_all_vec_all_successes() {
        let result = Validation::<_, Vec<&str>>::all_vec(vec![
            Validation::success(1),
            Validation::success(2),
        ]);
        assert_eq!(result, Validation::Success(vec![1, 2]));
    }

    #[test]
    fn test_all_vec_empty_is_success() {
        let result = Validation::<i32, Vec<&str>>::all_vec(Vec::new());
        assert_eq!(result, Validation::Success(vec![]));
    }

    #[test]
    fn test_ensure_keeps_failure() {
        let v = Validation::<&str, _>::failure("earlier").ensure(|_: &&str| true, "later");
        assert_eq!(v, Validation::Failure("earlier"));
    }
}
