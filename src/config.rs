//! Rule table configuration
//!
//! ```
//! use fieldrules::{Config, message::Locale};
//!
//! let config = Config::default().with_zh_trans(true).with_strict_params(true);
//! assert_eq!(config.locale(), Locale::Zh);
//! assert!(config.strict_params);
//! ```

use crate::message::Locale;

/// Longest subject, in bytes, that any rule will look at.
pub const DEFAULT_MAX_SUBJECT_LEN: usize = 64 * 1024;

/// Settings fixed when a [`RuleTable`](crate::RuleTable) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Use the Chinese message catalog instead of the English one.
    pub zh_trans: bool,
    /// Reject malformed range parameters when rules are declared, instead of
    /// letting the rule fail every subject at evaluation time.
    pub strict_params: bool,
    /// Subjects longer than this many bytes fail every rule.
    pub max_subject_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            zh_trans: false,
            strict_params: false,
            max_subject_len: DEFAULT_MAX_SUBJECT_LEN,
        }
    }
}

impl Config {
    /// Select the message catalog.
    pub fn with_zh_trans(mut self, zh_trans: bool) -> Self {
        self.zh_trans = zh_trans;
        self
    }

    /// Turn strict parameter checking on or off.
    pub fn with_strict_params(mut self, strict: bool) -> Self {
        self.strict_params = strict;
        self
    }

    /// Change the subject length ceiling.
    pub fn with_max_subject_len(mut self, max: usize) -> Self {
        self.max_subject_len = max;
        self
    }

    /// The message locale this configuration selects.
    pub fn locale(&self) -> Locale {
        Locale::from_zh_trans(self.zh_trans)
    }
}
