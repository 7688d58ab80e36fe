//! Fields to validate and the failures they produce
//!
//! A [`Field`] is one value under one rule, with the display name used in the
//! failure message. Types that hold several such values implement
//! [`Validate`] to list them; the display names are given explicitly rather
//! than derived from attributes.
//!
//! ```
//! use fieldrules::{Config, Field, RuleName, RuleTable, Validate};
//!
//! struct SignUp {
//!     phone: String,
//!     password: String,
//! }
//!
//! impl Validate for SignUp {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("phone", &self.phone, RuleName::Phone, ""),
//!             Field::new("password", &self.password, RuleName::Password, "8-15"),
//!         ]
//!     }
//! }
//!
//! let table = RuleTable::new(Config::default());
//! let form = SignUp { phone: "23800138000".into(), password: "short".into() };
//! let errors = table.validate(&form).unwrap_err();
//! assert_eq!(errors.len(), 2);
//! assert_eq!(errors.fields().collect::<Vec<_>>(), ["phone", "password"]);
//! ```

use std::fmt;

use crate::rule::{RuleName, RuleSpec};
use crate::Semigroup;

/// One value checked against one rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field<'a> {
    /// Display name used in the failure message.
    pub name: &'a str,
    /// The subject.
    pub value: &'a str,
    /// Rule to apply.
    pub rule: RuleName,
    /// Raw parameter text.
    pub param: &'a str,
}

impl<'a> Field<'a> {
    /// Build a field from its parts.
    pub fn new(name: &'a str, value: &'a str, rule: RuleName, param: &'a str) -> Self {
        Field {
            name,
            value,
            rule,
            param,
        }
    }

    /// Build a field from a parsed declaration.
    pub fn from_spec(name: &'a str, value: &'a str, spec: &'a RuleSpec) -> Self {
        Field::new(name, value, spec.rule(), spec.param())
    }
}

/// Types made of several validated fields.
pub trait Validate {
    /// Every field to check, in reporting order.
    fn fields(&self) -> Vec<Field<'_>>;
}

/// One failed field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldError {
    /// Display name of the field.
    pub field: String,
    /// Rule that rejected it.
    pub rule: RuleName,
    /// Parameter the rule was declared with.
    pub param: String,
    /// Rendered message.
    pub message: String,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for FieldError {}

/// Every failed field of one validation, in field order.
///
/// Displays as the messages joined with `,`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    /// Number of failed fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if nothing failed.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the failures.
    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }

    /// Display names of the failed fields.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|e| e.field.as_str())
    }

    /// Failures for one field.
    pub fn get_field_errors<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.0.iter().filter(move |e| e.field == field)
    }

    /// The rendered messages.
    pub fn messages(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.message.as_str()).collect()
    }

    /// Unwrap into the underlying list.
    pub fn into_inner(self) -> Vec<FieldError> {
        self.0
    }
}

impl From<FieldError> for FieldErrors {
    fn from(error: FieldError) -> Self {
        FieldErrors(vec![error])
    }
}

impl From<Vec<FieldError>> for FieldErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        FieldErrors(errors)
    }
}

impl IntoIterator for FieldErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Semigroup for FieldErrors {
    fn combine(self, other: Self) -> Self {
        FieldErrors(self.0.combine(other.0))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for FieldErrors {}
