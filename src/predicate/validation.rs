//! Validation integration for predicates
//!
//! This module connects predicates to the [`Validation`] type.

use super::combinators::Predicate;
use crate::Validation;

/// Validate a value using a predicate.
///
/// Returns `Validation::success(value)` if the predicate is satisfied,
/// otherwise returns `Validation::failure(error)`.
///
/// # Example
///
/// ```rust
/// use fieldrules::{Validation, predicate::*};
///
/// let result = validate("中国", char_len_between(1, 5), "too long");
/// assert_eq!(result, Validation::success("中国"));
///
/// let result = validate("中国人民", char_len_between(1, 3), "too long");
/// assert_eq!(result, Validation::failure("too long"));
/// ```
pub fn validate<T, E, P>(value: T, predicate: P, error: E) -> Validation<T, E>
where
    P: Predicate<T>,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error)
    }
}

/// Validate a value with an error factory.
///
/// Like `validate`, but the error is only built when the predicate fails.
///
/// # Example
///
/// ```rust
/// use fieldrules::{Validation, predicate::*};
///
/// let result = validate_with("ab", char_len_between(3, 8), |s| {
///     format!("'{}' is shorter than 3 characters", s)
/// });
/// assert_eq!(
///     result,
///     Validation::failure("'ab' is shorter than 3 characters".to_string())
/// );
/// ```
pub fn validate_with<T, E, P, F>(value: T, predicate: P, error_fn: F) -> Validation<T, E>
where
    P: Predicate<T>,
    F: FnOnce(&T) -> E,
{
    if predicate.check(&value) {
        Validation::success(value)
    } else {
        Validation::failure(error_fn(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{all_chars, CharClass};

    #[test]
    fn test_validate_success() {
        let result = validate(
            String::from("13800138000"),
            all_chars(CharClass::AsciiDigit),
            "digits",
        );
        assert_eq!(result, Validation::success(String::from("13800138000")));
    }

    #[test]
    fn test_validate_failure() {
        let result = validate("1380013800x", all_chars(CharClass::AsciiDigit), "digits");
        assert_eq!(result, Validation::failure("digits"));
    }

    #[test]
    fn test_validate_with_builds_error_lazily() {
        let result: Validation<&str, String> =
            validate_with("abc", all_chars(CharClass::AsciiLower), |_| unreachable!());
        assert!(result.is_success());
    }
}
