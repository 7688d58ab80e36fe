//! Predicate combinators for character-level string rules
//!
//! Every rule in this crate is built from a handful of small predicates:
//! a character-count window, "all characters are in this set", "the first and
//! last characters satisfy this", and "at least one character is in this
//! class". They compose with `and`, `or` and `not`.
//!
//! # Example
//!
//! ```rust
//! use fieldrules::predicate::*;
//!
//! let body = all_chars(CharSet::of(&[CharClass::AsciiAlphanumeric, CharClass::Space]));
//! let trimmed = edges(CharClass::AsciiAlphanumeric);
//! let len = char_len_between(1, 10);
//!
//! let subject = "ab 12";
//! assert!(body.check(subject) && trimmed.check(subject) && len.check(subject));
//! assert!(!trimmed.check(" ab12"));
//! ```

mod class;
mod combinators;
mod string;
mod validation;

pub mod prelude;

// Re-export core trait
pub use combinators::{Predicate, PredicateExt};

// Re-export combinator types
pub use combinators::{And, Not, Or};

// Re-export character classes
pub use class::{is_cjk, is_symbol, CharClass, CharSet, SYMBOLS};

// Re-export string predicates
pub use string::{
    all_chars, any_char, char_len_between, char_len_eq, edges, first_char, AllChars, AnyChar,
    CharLenBetween, Edges, FirstChar,
};

// Re-export validation integration
pub use validation::{validate, validate_with};
