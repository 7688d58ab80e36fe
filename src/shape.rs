//! String shapes and the matchers built from them
//!
//! A [`Shape`] describes what a field may look like independent of its length
//! window: which characters the body may contain, what the first and last
//! characters must be, and which character classes must appear at least once.
//! Combining a shape with a [`Bound`] gives a [`Matcher`], the thing that
//! actually accepts or rejects a subject.
//!
//! Shapes are plain `const` data. Matching walks the subject a few times with
//! no backtracking, so its cost is linear in the subject length.
//!
//! ```
//! use fieldrules::predicate::{CharClass, CharSet};
//! use fieldrules::{Bound, Boundary, Shape};
//!
//! const TRIMMED_ASCII: Shape = Shape::bounded(CharSet::of(&[CharClass::Any]))
//!     .with_boundary(Boundary::NoWhitespace);
//!
//! assert!(TRIMMED_ASCII.test("a b", Bound::parse("1-5")));
//! assert!(!TRIMMED_ASCII.test(" ab", Bound::parse("1-5")));
//! assert!(!TRIMMED_ASCII.test("a b", Bound::parse("")));
//! ```

use crate::bound::{Bound, LengthRange};
use crate::predicate::{
    all_chars, any_char, char_len_between, edges, first_char, CharClass, CharSet, Predicate,
    PredicateExt,
};

/// What the first and last characters of a subject must satisfy.
///
/// Every boundary policy is vacuously satisfied by the empty string except
/// [`Boundary::StartsWith`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    /// No constraint on the ends.
    Unrestricted,
    /// Neither end may be whitespace.
    NoWhitespace,
    /// Neither end may be whitespace or a CJK ideograph.
    NoWhitespaceOrCjk,
    /// Both ends must belong to the set.
    Within(CharSet),
    /// The subject must begin with this character.
    StartsWith(char),
}

impl Predicate<str> for Boundary {
    fn check(&self, subject: &str) -> bool {
        match *self {
            Boundary::Unrestricted => true,
            Boundary::NoWhitespace => edges(CharClass::Whitespace.not()).check(subject),
            Boundary::NoWhitespaceOrCjk => {
                edges(CharClass::Whitespace.or(CharClass::Cjk).not()).check(subject)
            }
            Boundary::Within(set) => edges(set).check(subject),
            Boundary::StartsWith(c) => first_char(CharClass::Exactly(c)).check(subject),
        }
    }
}

/// Where a shape takes its length window from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthPolicy {
    /// Exactly this many characters; the rule parameter is ignored.
    Fixed(usize),
    /// The window comes from the rule parameter.
    Bounded,
}

/// Allowed alphabet, boundary policy and composition requirements of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    length: LengthPolicy,
    body: CharSet,
    boundary: Boundary,
    requires: &'static [CharClass],
}

impl Shape {
    /// A shape whose length window comes from the rule parameter.
    pub const fn bounded(body: CharSet) -> Self {
        Shape {
            length: LengthPolicy::Bounded,
            body,
            boundary: Boundary::Unrestricted,
            requires: &[],
        }
    }

    /// A shape with a fixed length that ignores the rule parameter.
    pub const fn fixed(len: usize, body: CharSet) -> Self {
        Shape {
            length: LengthPolicy::Fixed(len),
            body,
            boundary: Boundary::Unrestricted,
            requires: &[],
        }
    }

    /// Replace the boundary policy.
    pub const fn with_boundary(mut self, boundary: Boundary) -> Self {
        self.boundary = boundary;
        self
    }

    /// Require at least one character of each class.
    pub const fn requiring(mut self, classes: &'static [CharClass]) -> Self {
        self.requires = classes;
        self
    }

    /// The length policy.
    pub fn length(&self) -> LengthPolicy {
        self.length
    }

    /// The boundary policy.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Returns `true` if the shape ignores the rule parameter.
    pub fn is_fixed(&self) -> bool {
        matches!(self.length, LengthPolicy::Fixed(_))
    }

    /// Scope the shape to a bound.
    ///
    /// Returns `None` when the shape is length-bounded and `bound` is disabled.
    pub fn matcher(&self, bound: Bound) -> Option<Matcher> {
        let range = match self.length {
            LengthPolicy::Fixed(len) => LengthRange::new(len, len).ok()?,
            LengthPolicy::Bounded => bound.range()?,
        };
        Some(Matcher { shape: *self, range })
    }

    /// Parse `param` as this shape's bound and test `subject`.
    ///
    /// Fixed-length shapes never look at `param`.
    pub fn test_param(&self, subject: &str, param: &str) -> bool {
        let bound = if self.is_fixed() {
            Bound::Disabled
        } else {
            Bound::parse(param)
        };
        self.test(subject, bound)
    }

    /// Resolve the matcher for `bound` and test `subject` against it.
    ///
    /// A bounded shape with a disabled bound rejects every subject.
    pub fn test(&self, subject: &str, bound: Bound) -> bool {
        self.matcher(bound).is_some_and(|matcher| matcher.check(subject))
    }
}

/// A shape scoped to one length window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    shape: Shape,
    range: LengthRange,
}

impl Matcher {
    /// The window this matcher enforces.
    pub fn range(&self) -> LengthRange {
        self.range
    }
}

impl Predicate<str> for Matcher {
    fn check(&self, subject: &str) -> bool {
        let Shape {
            body,
            boundary,
            requires,
            ..
        } = self.shape;

        char_len_between(self.range.min(), self.range.max()).check(subject)
            && all_chars(body).check(subject)
            && boundary.check(subject)
            && requires.iter().all(|&class| any_char(class).check(subject))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALNUM: CharSet = CharSet::of(&[CharClass::AsciiAlphanumeric]);

    fn bound(param: &str) -> Bound {
        Bound::parse(param)
    }

    #[test]
    fn test_bounded_shape_fails_closed_without_bound() {
        let shape = Shape::bounded(ALNUM);
        assert!(shape.matcher(Bound::Disabled).is_none());
        assert!(!shape.test("abc", Bound::Disabled));
        assert!(!shape.test("", Bound::Disabled));
    }

    #[test]
    fn test_fixed_shape_ignores_bound() {
        let shape = Shape::fixed(3, ALNUM);
        assert!(shape.test("abc", Bound::Disabled));
        assert!(shape.test("abc", bound("10-20")));
        assert!(!shape.test("abcd", bound("1-10")));
        assert_eq!(shape.matcher(bound("1-10")).unwrap().range().max(), 3);
    }

    #[test]
    fn test_length_window_is_inclusive() {
        let shape = Shape::bounded(ALNUM);
        assert!(!shape.test("ab", bound("3-5")));
        assert!(shape.test("abc", bound("3-5")));
        assert!(shape.test("abcde", bound("3-5")));
        assert!(!shape.test("abcdef", bound("3-5")));
    }

    #[test]
    fn test_body_applies_to_every_char() {
        let shape = Shape::bounded(ALNUM);
        assert!(!shape.test("ab-c", bound("1-10")));
    }

    #[test]
    fn test_requirements_are_all_mandatory() {
        let shape =
            Shape::bounded(ALNUM).requiring(&[CharClass::AsciiUpper, CharClass::AsciiDigit]);
        assert!(shape.test("aB3", bound("1-10")));
        assert!(!shape.test("ab3", bound("1-10")));
        assert!(!shape.test("aBc", bound("1-10")));
    }

    #[test]
    fn test_boundary_policies() {
        assert!(Boundary::Unrestricted.check(" x "));
        assert!(!Boundary::NoWhitespace.check("\tx"));
        assert!(!Boundary::NoWhitespace.check("x\u{3000}"));
        assert!(Boundary::NoWhitespace.check("中"));
        assert!(!Boundary::NoWhitespaceOrCjk.check("中a"));
        assert!(!Boundary::NoWhitespaceOrCjk.check("a中"));
        assert!(Boundary::NoWhitespaceOrCjk.check("a中a"));
        assert!(!Boundary::Within(ALNUM).check("-a"));
        assert!(Boundary::Within(ALNUM).check("a-a"));
        assert!(Boundary::StartsWith('1').check("19"));
        assert!(!Boundary::StartsWith('1').check("91"));
    }

    #[test]
    fn test_empty_subject_with_zero_min() {
        let shape = Shape::bounded(ALNUM).with_boundary(Boundary::Within(ALNUM));
        assert!(shape.test("", bound("0-3")));
        assert!(!shape.test("", bound("1-3")));
    }
}
