//! Predicate prelude for convenient imports
//!
//! ```rust
//! use fieldrules::predicate::prelude::*;
//!
//! let no_edge_space = edges(CharClass::Whitespace.not());
//! assert!(no_edge_space.check("a b"));
//! ```

// Core trait
pub use super::combinators::{Predicate, PredicateExt};

// Logical combinators
pub use super::combinators::{And, Not, Or};

// Character classes
pub use super::class::{CharClass, CharSet};

// String predicates
pub use super::string::{all_chars, any_char, char_len_between, char_len_eq, edges, first_char};

// Validation integration
pub use super::validation::{validate, validate_with};
