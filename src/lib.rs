//! # fieldrules
//!
//! Declarative, field-level string rules.
//!
//! A rule is a name plus a parameter, the way it is written next to a field:
//! `xStr=1-300`, `xPassword=8-15`, `xPhone`. The parameter is an inclusive
//! character-count window. A rule either accepts a value or rejects it; when it
//! rejects, the rule table renders a message naming the field, in Chinese or
//! English.
//!
//! Everything here is pure: shapes are constants, the rule table is built once
//! and shared, and no evaluation can panic or fail with an error.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldrules::{Config, RuleName, RuleTable};
//!
//! let table = RuleTable::new(Config::default());
//!
//! assert!(table.check(RuleName::Password, "Abcdef1!", "8-15"));
//! assert!(!table.check(RuleName::Password, "abcdef1!", "8-15")); // no uppercase
//! assert!(!table.check(RuleName::PlainString, " abc", "1-10")); // leading space
//! assert!(!table.check(RuleName::PlainString, "abc", "ten")); // unusable parameter
//!
//! assert_eq!(
//!     table.message(RuleName::PlainString, "nickname", "1-10"),
//!     "nickname must be 1-10 characters long with no leading or trailing whitespace"
//! );
//! ```
//!
//! ## Validating a whole form
//!
//! ```rust
//! use fieldrules::{Config, Field, RuleName, RuleTable, Validate};
//!
//! struct Profile<'a> {
//!     nickname: &'a str,
//!     mobile: &'a str,
//! }
//!
//! impl Validate for Profile<'_> {
//!     fn fields(&self) -> Vec<Field<'_>> {
//!         vec![
//!             Field::new("nickname", self.nickname, RuleName::StringNoChineseChars, "1-10"),
//!             Field::new("mobile", self.mobile, RuleName::Phone, ""),
//!         ]
//!     }
//! }
//!
//! let table = RuleTable::new(Config::default().with_zh_trans(true));
//! let err = table
//!     .validate(&Profile { nickname: "小明", mobile: "1380013800" })
//!     .unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "nickname长度1-10，首尾不能有空格，不能包含中文,mobile必须为手机号，1开头，长度为11位"
//! );
//! ```

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod bound;
pub mod config;
pub mod error;
pub mod field;
pub mod message;
pub mod predicate;
pub mod rule;
pub mod semigroup;
pub mod shape;
pub mod table;
pub mod testing;
pub mod validation;

// Re-exports
pub use bound::{Bound, LengthRange};
pub use config::{Config, DEFAULT_MAX_SUBJECT_LEN};
pub use error::{ConfigError, ParamError};
pub use field::{Field, FieldError, FieldErrors, Validate};
pub use message::Locale;
pub use rule::{RuleName, RuleSpec};
pub use semigroup::Semigroup;
pub use shape::{Boundary, LengthPolicy, Matcher, Shape};
pub use table::RuleTable;
pub use validation::Validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::bound::{Bound, LengthRange};
    pub use crate::config::Config;
    pub use crate::error::{ConfigError, ParamError};
    pub use crate::field::{Field, FieldError, FieldErrors, Validate};
    pub use crate::message::Locale;
    pub use crate::rule::{RuleName, RuleSpec};
    pub use crate::semigroup::Semigroup;
    pub use crate::table::RuleTable;
    pub use crate::validation::Validation;
}
