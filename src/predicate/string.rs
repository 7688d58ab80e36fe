//! String predicates
//!
//! Lengths here are counted in characters (Unicode scalar values), not bytes:
//! `"中国"` has length 2.

use super::combinators::Predicate;

// Implements Predicate for str, String and &str by delegating to an inherent
// `matches(&self, &str)`.
macro_rules! impl_str_predicate {
    ($name:ident) => {
        impl Predicate<str> for $name {
            #[inline]
            fn check(&self, value: &str) -> bool {
                self.matches(value)
            }
        }

        impl Predicate<String> for $name {
            #[inline]
            fn check(&self, value: &String) -> bool {
                self.matches(value)
            }
        }

        impl<'a> Predicate<&'a str> for $name {
            #[inline]
            fn check(&self, value: &&'a str) -> bool {
                self.matches(value)
            }
        }
    };
    ($name:ident<$param:ident>) => {
        impl<$param: Predicate<char>> Predicate<str> for $name<$param> {
            #[inline]
            fn check(&self, value: &str) -> bool {
                self.matches(value)
            }
        }

        impl<$param: Predicate<char>> Predicate<String> for $name<$param> {
            #[inline]
            fn check(&self, value: &String) -> bool {
                self.matches(value)
            }
        }

        impl<'a, $param: Predicate<char>> Predicate<&'a str> for $name<$param> {
            #[inline]
            fn check(&self, value: &&'a str) -> bool {
                self.matches(value)
            }
        }
    };
}

/// Predicate that checks the character count is in range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharLenBetween {
    min: usize,
    max: usize,
}

impl CharLenBetween {
    fn matches(&self, value: &str) -> bool {
        // Stop counting once the upper bound is exceeded.
        let len = value.chars().take(self.max.saturating_add(1)).count();
        len >= self.min && len <= self.max
    }
}

impl_str_predicate!(CharLenBetween);

/// Create a predicate that checks if the character count is between min and
/// max (inclusive).
///
/// # Example
///
/// ```rust
/// use fieldrules::predicate::*;
///
/// let p = char_len_between(2, 3);
/// assert!(!p.check("中"));
/// assert!(p.check("中国"));
/// assert!(p.check("abc"));
/// assert!(!p.check("abcd"));
/// ```
pub fn char_len_between(min: usize, max: usize) -> CharLenBetween {
    CharLenBetween { min, max }
}

/// Create a predicate that checks the character count is exactly `len`.
pub fn char_len_eq(len: usize) -> CharLenBetween {
    CharLenBetween { min: len, max: len }
}

/// Predicate that checks if all characters satisfy a predicate.
#[derive(Clone, Copy, Debug)]
pub struct AllChars<P>(pub P);

impl<P: Predicate<char>> AllChars<P> {
    fn matches(&self, value: &str) -> bool {
        value.chars().all(|c| self.0.check(&c))
    }
}

impl_str_predicate!(AllChars<P>);

/// Create a predicate that checks if all characters satisfy a condition.
///
/// The empty string satisfies every `all_chars` predicate.
///
/// # Example
///
/// ```rust
/// use fieldrules::predicate::*;
///
/// assert!(all_chars(CharClass::AsciiDigit).check("13800138000"));
/// assert!(!all_chars(CharClass::AsciiDigit).check("1380013800a"));
/// ```
pub fn all_chars<P: Predicate<char>>(p: P) -> AllChars<P> {
    AllChars(p)
}

/// Predicate that checks if any character satisfies a predicate.
#[derive(Clone, Copy, Debug)]
pub struct AnyChar<P>(pub P);

impl<P: Predicate<char>> AnyChar<P> {
    fn matches(&self, value: &str) -> bool {
        value.chars().any(|c| self.0.check(&c))
    }
}

impl_str_predicate!(AnyChar<P>);

/// Create a predicate that checks if any character satisfies a condition.
///
/// # Example
///
/// ```rust
/// use fieldrules::predicate::*;
///
/// assert!(any_char(CharClass::AsciiUpper).check("abC"));
/// assert!(!any_char(CharClass::AsciiUpper).check("abc"));
/// ```
pub fn any_char<P: Predicate<char>>(p: P) -> AnyChar<P> {
    AnyChar(p)
}

/// Predicate on the first and last character of a string.
///
/// Vacuously true for the empty string; pair it with a length predicate when
/// the empty string must be rejected.
#[derive(Clone, Copy, Debug)]
pub struct Edges<P>(pub P);

impl<P: Predicate<char>> Edges<P> {
    fn matches(&self, value: &str) -> bool {
        let mut chars = value.chars();
        let first = chars.next();
        let last = chars.next_back().or(first);
        first.is_none_or(|c| self.0.check(&c)) && last.is_none_or(|c| self.0.check(&c))
    }
}

impl_str_predicate!(Edges<P>);

/// Create a predicate that checks the first and last character.
///
/// # Example
///
/// ```rust
/// use fieldrules::predicate::*;
///
/// let trimmed = edges(CharClass::Whitespace.not());
/// assert!(trimmed.check("a b"));
/// assert!(!trimmed.check(" ab"));
/// assert!(!trimmed.check("ab "));
/// assert!(trimmed.check(""));
/// ```
pub fn edges<P: Predicate<char>>(p: P) -> Edges<P> {
    Edges(p)
}

/// Predicate on the first character only.
///
/// False for the empty string.
#[derive(Clone, Copy, Debug)]
pub struct FirstChar<P>(pub P);

impl<P: Predicate<char>> FirstChar<P> {
    fn matches(&self, value: &str) -> bool {
        value.chars().next().is_some_and(|c| self.0.check(&c))
    }
}

impl_str_predicate!(FirstChar<P>);

/// Create a predicate that checks the first character.
///
/// # Example
///
/// ```rust
/// use fieldrules::predicate::*;
///
/// assert!(first_char(CharClass::Exactly('1')).check("138"));
/// assert!(!first_char(CharClass::Exactly('1')).check("238"));
/// assert!(!first_char(CharClass::Exactly('1')).check(""));
/// ```
pub fn first_char<P: Predicate<char>>(p: P) -> FirstChar<P> {
    FirstChar(p)
}
