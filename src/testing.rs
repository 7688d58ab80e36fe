//! Testing utilities
//!
//! Assertion macros for [`Validation`](crate::Validation) results and, with the
//! `proptest` feature, strategies that generate rule parameters and subjects.
//!
//! ```rust
//! use fieldrules::{assert_failure, assert_success, Config, Field, RuleName, RuleTable};
//!
//! let table = RuleTable::new(Config::default());
//! assert_success!(table.validate_field(&Field::new("n", "abc", RuleName::PlainString, "1-3")));
//! assert_failure!(table.validate_field(&Field::new("n", "abcd", RuleName::PlainString, "1-3")));
//! ```

/// Assert that a validation succeeds.
///
/// This macro will panic if the validation is a `Failure`.
#[macro_export]
macro_rules! assert_success {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Success(_) => {}
            $crate::Validation::Failure(e) => {
                panic!("Expected Success, got Failure: {:?}", e);
            }
        }
    };
}

/// Assert that a validation fails.
///
/// This macro will panic if the validation is a `Success`.
#[macro_export]
macro_rules! assert_failure {
    ($validation:expr) => {
        match $validation {
            $crate::Validation::Failure(_) => {}
            $crate::Validation::Success(v) => {
                panic!("Expected Failure, got Success: {:?}", v);
            }
        }
    };
}

/// Assert that a validation fails with specific errors.
///
/// # Example
///
/// ```rust
/// use fieldrules::{Validation, assert_validation_errors};
///
/// let val = Validation::<(), _>::failure(vec!["name", "phone"]);
/// assert_validation_errors!(val, vec!["name", "phone"]);
/// ```
#[macro_export]
macro_rules! assert_validation_errors {
    ($validation:expr, $expected:expr) => {
        match $validation {
            $crate::Validation::Failure(errors) => {
                assert_eq!(errors, $expected);
            }
            $crate::Validation::Success(v) => {
                panic!(
                    "Expected Failure with errors {:?}, got Success: {:?}",
                    $expected, v
                );
            }
        }
    };
}

#[cfg(feature = "proptest")]
pub use strategies::*;

#[cfg(feature = "proptest")]
mod strategies {
    use proptest::prelude::*;

    use crate::RuleName;

    impl Arbitrary for RuleName {
        type Parameters = ();
        type Strategy = BoxedStrategy<Self>;

        fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
            proptest::sample::select(RuleName::ALL.to_vec()).boxed()
        }
    }

    /// Well-formed `"<min>-<max>"` parameters with `min <= max <= limit`.
    pub fn range_param(limit: usize) -> impl Strategy<Value = String> {
        (0..=limit)
            .prop_flat_map(move |min| (Just(min), min..=limit))
            .prop_map(|(min, max)| format!("{min}-{max}"))
    }

    /// Parameters that never parse as a range.
    pub fn malformed_param() -> impl Strategy<Value = String> {
        prop_oneof![
            Just(String::new()),
            "[0-9]{1,3}",
            "[0-9]{1,3}-[0-9]{1,3}-[0-9]{1,3}",
            "[a-z]{1,3}-[0-9]{1,3}",
            "[0-9]{1,3}-[a-z]{1,3}",
            "\\+[0-9]{1,2}-[0-9]{1,2}",
            (1usize..100).prop_map(|min| format!("{}-{}", min, min - 1)),
        ]
    }

    /// Short subjects mixing ASCII, whitespace, symbols and CJK.
    pub fn subject() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9 \\t!@#_\\-中国é]{0,20}"
    }
}

#[cfg(test)]
mod tests {
    use crate::Validation;

    #[test]
    fn assert_success_macro() {
        let val = Validation::<_, Vec<String>>::success(42);
        assert_success!(val);
    }

    #[test]
    fn assert_failure_macro() {
        let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
        assert_failure!(val);
    }

    #[test]
    fn assert_validation_errors_macro() {
        let val = Validation::<i32, _>::failure(vec!["error1", "error2"]);
        assert_validation_errors!(val, vec!["error1", "error2"]);
    }

    #[test]
    #[should_panic(expected = "Expected Success, got Failure")]
    fn assert_success_panics_on_failure() {
        let val = Validation::<i32, _>::failure(vec!["error".to_string()]);
        assert_success!(val);
    }

    #[test]
    #[should_panic(expected = "Expected Failure, got Success")]
    fn assert_failure_panics_on_success() {
        let val = Validation::<_, Vec<String>>::success(42);
        assert_failure!(val);
    }

    #[cfg(feature = "proptest")]
    mod proptest_tests {
        use super::super::*;
        use crate::{Bound, RuleName};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn range_param_always_parses(param in range_param(50)) {
                prop_assert!(Bound::parse(&param).is_active());
            }

            #[test]
            fn malformed_param_never_parses(param in malformed_param()) {
                prop_assert!(!Bound::parse(&param).is_active());
            }

            #[test]
            fn arbitrary_rule_is_known(rule in any::<RuleName>()) {
                prop_assert!(RuleName::ALL.contains(&rule));
            }
        }
    }
}
