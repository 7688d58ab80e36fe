//! The named rule catalog
//!
//! | Rule | Tag | Length | Alphabet | Ends | Must contain |
//! |---|---|---|---|---|---|
//! | `phone` | `xPhone` | exactly 11 | ASCII digits | starts with `1` | |
//! | `password` | `xPassword` | parameter | ASCII letters, digits, [`SYMBOLS`] | | lower, upper, digit, symbol |
//! | `plainString` | `xStr` | parameter | anything | no whitespace | |
//! | `stringNoSymbols` | `xStrWithoutSpec` | parameter | letters, ASCII digits, space | no whitespace, no CJK | |
//! | `stringNoChineseChars` | `xStrWithoutZh` | parameter | anything but CJK | no whitespace | |
//! | `stringNoSymbolsNoSpaceInterior` | `xStrWithoutZhAndSpec` | parameter | ASCII letters, digits, space | ASCII letter or digit | |
//! | `stringNoChineseCharsNoSymbols` | `xStrWithoutSpecAndSpace` | parameter | non-CJK letters, ASCII digits | | |
//!
//! [`SYMBOLS`]: crate::predicate::SYMBOLS

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::predicate::{CharClass, CharSet};
use crate::shape::{Boundary, Shape};

const PHONE: Shape = Shape::fixed(11, CharSet::of(&[CharClass::AsciiDigit]))
    .with_boundary(Boundary::StartsWith('1'));

const PASSWORD: Shape =
    Shape::bounded(CharSet::of(&[CharClass::AsciiAlphanumeric, CharClass::Symbol])).requiring(&[
        CharClass::AsciiLower,
        CharClass::AsciiUpper,
        CharClass::AsciiDigit,
        CharClass::Symbol,
    ]);

const PLAIN_STRING: Shape =
    Shape::bounded(CharSet::of(&[CharClass::Any])).with_boundary(Boundary::NoWhitespace);

const STRING_NO_SYMBOLS: Shape = Shape::bounded(CharSet::of(&[
    CharClass::Letter,
    CharClass::AsciiDigit,
    CharClass::Space,
]))
.with_boundary(Boundary::NoWhitespaceOrCjk);

const STRING_NO_CHINESE_CHARS: Shape =
    Shape::bounded(CharSet::of(&[CharClass::Any]).except(&[CharClass::Cjk]))
        .with_boundary(Boundary::NoWhitespace);

const STRING_NO_SYMBOLS_NO_SPACE_INTERIOR: Shape = Shape::bounded(CharSet::of(&[
    CharClass::AsciiAlphanumeric,
    CharClass::Space,
]))
.with_boundary(Boundary::Within(CharSet::of(&[CharClass::AsciiAlphanumeric])));

const STRING_NO_CHINESE_CHARS_NO_SYMBOLS: Shape = Shape::bounded(
    CharSet::of(&[CharClass::Letter, CharClass::AsciiDigit]).except(&[CharClass::Cjk]),
);

/// One of the known rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum RuleName {
    /// Mainland mobile number: 11 ASCII digits starting with `1`.
    Phone,
    /// Printable ASCII password with lower, upper, digit and symbol.
    Password,
    /// Any text without leading or trailing whitespace.
    PlainString,
    /// Letters, digits and spaces.
    StringNoSymbols,
    /// Any text without CJK ideographs.
    StringNoChineseChars,
    /// ASCII letters and digits with spaces only between them.
    StringNoSymbolsNoSpaceInterior,
    /// Non-CJK letters and digits only.
    StringNoChineseCharsNoSymbols,
}

impl RuleName {
    /// Every rule, in declaration order.
    pub const ALL: [RuleName; 7] = [
        RuleName::Phone,
        RuleName::Password,
        RuleName::PlainString,
        RuleName::StringNoSymbols,
        RuleName::StringNoChineseChars,
        RuleName::StringNoSymbolsNoSpaceInterior,
        RuleName::StringNoChineseCharsNoSymbols,
    ];

    /// Canonical name, e.g. `plainString`.
    pub fn name(self) -> &'static str {
        match self {
            RuleName::Phone => "phone",
            RuleName::Password => "password",
            RuleName::PlainString => "plainString",
            RuleName::StringNoSymbols => "stringNoSymbols",
            RuleName::StringNoChineseChars => "stringNoChineseChars",
            RuleName::StringNoSymbolsNoSpaceInterior => "stringNoSymbolsNoSpaceInterior",
            RuleName::StringNoChineseCharsNoSymbols => "stringNoChineseCharsNoSymbols",
        }
    }

    /// Declaration tag, e.g. `xStr`.
    pub fn tag(self) -> &'static str {
        match self {
            RuleName::Phone => "xPhone",
            RuleName::Password => "xPassword",
            RuleName::PlainString => "xStr",
            RuleName::StringNoSymbols => "xStrWithoutSpec",
            RuleName::StringNoChineseChars => "xStrWithoutZh",
            RuleName::StringNoSymbolsNoSpaceInterior => "xStrWithoutZhAndSpec",
            RuleName::StringNoChineseCharsNoSymbols => "xStrWithoutSpecAndSpace",
        }
    }

    /// The shape this rule checks.
    pub fn shape(self) -> &'static Shape {
        match self {
            RuleName::Phone => &PHONE,
            RuleName::Password => &PASSWORD,
            RuleName::PlainString => &PLAIN_STRING,
            RuleName::StringNoSymbols => &STRING_NO_SYMBOLS,
            RuleName::StringNoChineseChars => &STRING_NO_CHINESE_CHARS,
            RuleName::StringNoSymbolsNoSpaceInterior => &STRING_NO_SYMBOLS_NO_SPACE_INTERIOR,
            RuleName::StringNoChineseCharsNoSymbols => &STRING_NO_CHINESE_CHARS_NO_SYMBOLS,
        }
    }

    /// Returns `true` if the rule reads its length window from the parameter.
    pub fn is_bounded(self) -> bool {
        !self.shape().is_fixed()
    }

    /// Test `subject` against this rule with the raw `param` text.
    ///
    /// ```
    /// use fieldrules::RuleName;
    ///
    /// assert!(RuleName::Password.test("Abcdef1!", "8-15"));
    /// assert!(!RuleName::Password.test("abcdef1!", "8-15"));
    /// assert!(RuleName::Phone.test("13800138000", ""));
    /// assert!(!RuleName::PlainString.test("abc", "oops"));
    /// ```
    pub fn test(self, subject: &str, param: &str) -> bool {
        self.shape().test_param(subject, param)
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleName {
    type Err = ConfigError;

    /// Accepts the canonical name or the declaration tag.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RuleName::ALL
            .into_iter()
            .find(|rule| rule.name() == s || rule.tag() == s)
            .ok_or_else(|| ConfigError::UnknownRule {
                name: s.to_string(),
            })
    }
}

/// A parsed rule declaration: `xStr=1-300`, `plainString=1-300` or `xPhone`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RuleSpec {
    rule: RuleName,
    param: String,
}

impl RuleSpec {
    /// Pair a rule with its raw parameter text.
    pub fn new(rule: RuleName, param: impl Into<String>) -> Self {
        RuleSpec {
            rule,
            param: param.into(),
        }
    }

    /// The rule.
    pub fn rule(&self) -> RuleName {
        self.rule
    }

    /// The parameter exactly as declared.
    pub fn param(&self) -> &str {
        &self.param
    }

    /// Test `subject` against this declaration.
    pub fn test(&self, subject: &str) -> bool {
        self.rule.test(subject, &self.param)
    }
}

impl fmt::Display for RuleSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.param.is_empty() {
            write!(f, "{}", self.rule.tag())
        } else {
            write!(f, "{}={}", self.rule.tag(), self.param)
        }
    }
}

impl FromStr for RuleSpec {
    type Err = ConfigError;

    /// Parses `<rule>=<param>` or a bare `<rule>`. The parameter is kept
    /// verbatim; it is not checked here.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, param) = s.split_once('=').unwrap_or((s, ""));
        Ok(RuleSpec::new(name.trim().parse()?, param))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_and_tags_parse() {
        for rule in RuleName::ALL {
            assert_eq!(rule.name().parse::<RuleName>(), Ok(rule));
            assert_eq!(rule.tag().parse::<RuleName>(), Ok(rule));
            assert_eq!(rule.to_string(), rule.name());
        }
    }

    #[test]
    fn test_unknown_rule() {
        assert_eq!(
            "xStrZhWithoutSpace".parse::<RuleName>(),
            Err(ConfigError::UnknownRule {
                name: "xStrZhWithoutSpace".to_string()
            })
        );
    }

    #[test]
    fn test_only_phone_is_fixed() {
        for rule in RuleName::ALL {
            assert_eq!(rule.is_bounded(), rule != RuleName::Phone, "{rule}");
        }
    }

    #[test]
    fn test_rule_spec_parse() {
        let spec: RuleSpec = "xStr=1-300".parse().unwrap();
        assert_eq!(spec.rule(), RuleName::PlainString);
        assert_eq!(spec.param(), "1-300");
        assert_eq!(spec.to_string(), "xStr=1-300");

        let spec: RuleSpec = "xPhone".parse().unwrap();
        assert_eq!(spec.rule(), RuleName::Phone);
        assert_eq!(spec.param(), "");
        assert_eq!(spec.to_string(), "xPhone");
    }

    #[test]
    fn test_rule_spec_keeps_malformed_param() {
        let spec: RuleSpec = "password=8-x".parse().unwrap();
        assert_eq!(spec.param(), "8-x");
        assert!(!spec.test("Abcdef1!"));
    }

    #[test]
    fn test_rule_spec_unknown_rule() {
        assert!("nope=1-2".parse::<RuleSpec>().is_err());
    }
}
