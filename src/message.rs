//! Failure message catalogs
//!
//! Each rule has one template per [`Locale`]. Templates carry two
//! placeholders: `{0}` is the field's display name and `{1}` the parameter text
//! exactly as it was declared.
//!
//! ```
//! use fieldrules::message::{render, Locale};
//! use fieldrules::RuleName;
//!
//! assert_eq!(
//!     render(Locale::En, RuleName::PlainString, "nickname", "1-20"),
//!     "nickname must be 1-20 characters long with no leading or trailing whitespace"
//! );
//! assert_eq!(
//!     render(Locale::Zh, RuleName::PlainString, "昵称", "1-20"),
//!     "昵称长度1-20，首尾不能有空格"
//! );
//! ```

use std::fmt;

use crate::rule::RuleName;

/// Placeholder replaced by the field display name.
pub const FIELD_PLACEHOLDER: &str = "{0}";

/// Placeholder replaced by the rule parameter.
pub const PARAM_PLACEHOLDER: &str = "{1}";

/// A message catalog language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Locale {
    /// Simplified Chinese.
    Zh,
    /// English.
    #[default]
    En,
}

impl Locale {
    /// Both supported locales.
    pub const ALL: [Locale; 2] = [Locale::Zh, Locale::En];

    /// Chinese when `zh_trans` is set, English otherwise.
    pub fn from_zh_trans(zh_trans: bool) -> Self {
        if zh_trans {
            Locale::Zh
        } else {
            Locale::En
        }
    }

    /// Language code, `zh` or `en`.
    pub fn code(self) -> &'static str {
        match self {
            Locale::Zh => "zh",
            Locale::En => "en",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// The template registered for `rule` in `locale`.
pub fn template(locale: Locale, rule: RuleName) -> &'static str {
    match locale {
        Locale::Zh => zh(rule),
        Locale::En => en(rule),
    }
}

fn zh(rule: RuleName) -> &'static str {
    match rule {
        RuleName::Phone => "{0}必须为手机号，1开头，长度为11位",
        RuleName::Password => {
            "{0}长度{1}，需由字母（区分大小写）、数字、特殊字符串三种组成，不能使用空格、中文"
        }
        RuleName::PlainString => "{0}长度{1}，首尾不能有空格",
        RuleName::StringNoSymbols => "{0}长度{1}，首尾不能有空格或中文，不能包含特殊字符串",
        RuleName::StringNoChineseChars => "{0}长度{1}，首尾不能有空格，不能包含中文",
        RuleName::StringNoSymbolsNoSpaceInterior => {
            "{0}长度{1}，只能包含英文字母、数字和空格，首尾不能有空格"
        }
        RuleName::StringNoChineseCharsNoSymbols => {
            "{0}长度{1}，只能包含字母和数字，不能包含空格、中文和特殊字符串"
        }
    }
}

fn en(rule: RuleName) -> &'static str {
    match rule {
        RuleName::Phone => "{0} must be a mobile number: 11 digits starting with 1",
        RuleName::Password => {
            "{0} must be length {1}, composed of letters (case-sensitive), digits, and symbols; no spaces or CJK characters allowed"
        }
        RuleName::PlainString => {
            "{0} must be {1} characters long with no leading or trailing whitespace"
        }
        RuleName::StringNoSymbols => {
            "{0} must be {1} characters long, letters, digits and spaces only, with no leading or trailing whitespace or CJK characters"
        }
        RuleName::StringNoChineseChars => {
            "{0} must be {1} characters long with no CJK characters and no leading or trailing whitespace"
        }
        RuleName::StringNoSymbolsNoSpaceInterior => {
            "{0} must be {1} characters long, ASCII letters, digits and inner spaces only"
        }
        RuleName::StringNoChineseCharsNoSymbols => {
            "{0} must be {1} characters long, letters and digits only, no spaces, symbols or CJK characters"
        }
    }
}

/// Render the built-in template for `rule` in `locale`.
pub fn render(locale: Locale, rule: RuleName, field: &str, param: &str) -> String {
    fill(template(locale, rule), field, param)
}

/// Fill any template with the field name and parameter.
///
/// Substitution is a single pass, so placeholder text inside `field` or
/// `param` is copied literally. Braces that do not start a placeholder are
/// kept as they are.
///
/// ```
/// use fieldrules::message::fill;
///
/// assert_eq!(fill("{0}: {1} chars {x}", "name", "1-5"), "name: 1-5 chars {x}");
/// ```
pub fn fill(template: &str, field: &str, param: &str) -> String {
    let mut out = String::with_capacity(template.len() + field.len() + param.len());
    let mut rest = template;

    while let Some(pos) = rest.find('{') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if let Some(after) = tail.strip_prefix(FIELD_PLACEHOLDER) {
            out.push_str(field);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(PARAM_PLACEHOLDER) {
            out.push_str(param);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_rule_has_template_in_every_locale() {
        for locale in Locale::ALL {
            for rule in RuleName::ALL {
                let t = template(locale, rule);
                assert!(t.starts_with(FIELD_PLACEHOLDER), "{locale} {rule}");
                if rule.is_bounded() {
                    assert!(t.contains(PARAM_PLACEHOLDER), "{locale} {rule}");
                }
            }
        }
    }

    #[test]
    fn test_locales_differ() {
        for rule in RuleName::ALL {
            assert_ne!(template(Locale::Zh, rule), template(Locale::En, rule));
        }
    }

    #[test]
    fn test_render_password() {
        assert_eq!(
            render(Locale::En, RuleName::Password, "password", "8-15"),
            "password must be length 8-15, composed of letters (case-sensitive), digits, and symbols; no spaces or CJK characters allowed"
        );
    }

    #[test]
    fn test_render_does_not_reexpand_field_text() {
        assert_eq!(
            render(Locale::Zh, RuleName::PlainString, "{1}", "1-5"),
            "{1}长度1-5，首尾不能有空格"
        );
    }

    #[test]
    fn test_fill_custom_template() {
        assert_eq!(fill("{1} for {0}, {0}!", "age", "1-3"), "1-3 for age, age!");
        assert_eq!(fill("no placeholders", "age", "1-3"), "no placeholders");
        assert_eq!(fill("{0", "age", "1-3"), "{0");
    }

    #[test]
    fn test_zh_trans_flag() {
        assert_eq!(Locale::from_zh_trans(true), Locale::Zh);
        assert_eq!(Locale::from_zh_trans(false), Locale::En);
    }
}
