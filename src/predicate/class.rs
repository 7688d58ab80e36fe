//! Character classes and character sets
//!
//! A [`CharClass`] names one category of characters ("ASCII digit", "CJK
//! ideograph", ...). A [`CharSet`] is a union of classes with an optional list
//! of excluded classes, which is enough to describe every body alphabet the
//! rules use without a regex engine.

use super::combinators::Predicate;

/// The fixed symbol alphabet accepted by password-like rules.
pub const SYMBOLS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

/// Code points of the Han script: radicals, ideographic marks, the unified
/// ideograph blocks A through I, and both compatibility blocks.
const CJK_RANGES: &[(u32, u32)] = &[
    (0x2E80, 0x2EFF),
    (0x2F00, 0x2FDF),
    (0x3005, 0x3005),
    (0x3007, 0x3007),
    (0x3021, 0x3029),
    (0x3038, 0x303B),
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFAFF),
    (0x16FE2, 0x16FE3),
    (0x16FF0, 0x16FF1),
    (0x20000, 0x2A6DF),
    (0x2A700, 0x2EBEF),
    (0x2EBF0, 0x2EE5F),
    (0x2F800, 0x2FA1F),
    (0x30000, 0x3134F),
    (0x31350, 0x323AF),
];

/// Returns `true` for a Han ideograph code point.
///
/// ```rust
/// use fieldrules::predicate::is_cjk;
///
/// assert!(is_cjk('中'));
/// assert!(!is_cjk('a'));
/// assert!(!is_cjk('。'));
/// ```
pub fn is_cjk(c: char) -> bool {
    let cp = c as u32;
    CJK_RANGES.iter().any(|&(lo, hi)| (lo..=hi).contains(&cp))
}

/// Returns `true` if `c` belongs to [`SYMBOLS`].
pub fn is_symbol(c: char) -> bool {
    SYMBOLS.contains(c)
}

/// A single category of characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// Every character.
    Any,
    /// `0-9`
    AsciiDigit,
    /// `a-z`
    AsciiLower,
    /// `A-Z`
    AsciiUpper,
    /// `a-z`, `A-Z`, `0-9`
    AsciiAlphanumeric,
    /// Unicode alphabetic, any script.
    Letter,
    /// The ASCII space U+0020 only.
    Space,
    /// Unicode whitespace.
    Whitespace,
    /// Han ideographs.
    Cjk,
    /// A member of [`SYMBOLS`].
    Symbol,
    /// One specific character.
    Exactly(char),
}

impl CharClass {
    /// Returns `true` if `c` is in this class.
    pub fn contains(self, c: char) -> bool {
        match self {
            CharClass::Any => true,
            CharClass::AsciiDigit => c.is_ascii_digit(),
            CharClass::AsciiLower => c.is_ascii_lowercase(),
            CharClass::AsciiUpper => c.is_ascii_uppercase(),
            CharClass::AsciiAlphanumeric => c.is_ascii_alphanumeric(),
            CharClass::Letter => c.is_alphabetic(),
            CharClass::Space => c == ' ',
            CharClass::Whitespace => c.is_whitespace(),
            CharClass::Cjk => is_cjk(c),
            CharClass::Symbol => is_symbol(c),
            CharClass::Exactly(expected) => c == expected,
        }
    }
}

impl Predicate<char> for CharClass {
    #[inline]
    fn check(&self, value: &char) -> bool {
        self.contains(*value)
    }
}

/// A union of classes minus a list of excluded classes.
///
/// ```rust
/// use fieldrules::predicate::{CharClass, CharSet};
///
/// const NO_CJK_WORDS: CharSet =
///     CharSet::of(&[CharClass::Letter, CharClass::AsciiDigit]).except(&[CharClass::Cjk]);
///
/// assert!(NO_CJK_WORDS.contains('é'));
/// assert!(NO_CJK_WORDS.contains('7'));
/// assert!(!NO_CJK_WORDS.contains('中'));
/// assert!(!NO_CJK_WORDS.contains('-'));
/// assert!(!NO_CJK_WORDS.contains('½'));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharSet {
    include: &'static [CharClass],
    exclude: &'static [CharClass],
}

impl CharSet {
    /// Characters in any of `include`.
    pub const fn of(include: &'static [CharClass]) -> Self {
        CharSet {
            include,
            exclude: &[],
        }
    }

    /// Remove every character in any of `exclude`.
    pub const fn except(self, exclude: &'static [CharClass]) -> Self {
        CharSet {
            include: self.include,
            exclude,
        }
    }

    /// Returns `true` if `c` is in the set.
    pub fn contains(&self, c: char) -> bool {
        self.include.iter().any(|class| class.contains(c))
            && !self.exclude.iter().any(|class| class.contains(c))
    }
}

impl Predicate<char> for CharSet {
    #[inline]
    fn check(&self, value: &char) -> bool {
        self.contains(*value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_alphabet() {
        for c in "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?".chars() {
            assert!(is_symbol(c), "{c:?} should be a symbol");
        }
        for c in ['`', '~', ' ', 'a', '1', '中'] {
            assert!(!is_symbol(c), "{c:?} should not be a symbol");
        }
    }

    #[test]
    fn test_cjk_ranges() {
        assert!(is_cjk('\u{4E00}'));
        assert!(is_cjk('\u{9FA5}'));
        assert!(is_cjk('\u{3400}'));
        assert!(is_cjk('\u{20000}'));
        assert!(is_cjk('\u{2EBF0}'));
        assert!(is_cjk('\u{2F800}'));
        assert!(is_cjk('\u{31350}'));
        assert!(is_cjk('\u{323AF}'));
        assert!(is_cjk('〇'));
        assert!(is_cjk('⺀'));
        assert!(!is_cjk('あ'));
        assert!(!is_cjk('한'));
        assert!(!is_cjk('，'));
    }

    #[test]
    fn test_unicode_letter_ascii_digit() {
        assert!(CharClass::Letter.contains('ж'));
        assert!(CharClass::Letter.contains('中'));
        assert!(!CharClass::Letter.contains('½'));
        assert!(!CharClass::AsciiDigit.contains('٣'));
        assert!(!CharClass::AsciiDigit.contains('²'));
    }

    #[test]
    fn test_space_is_not_all_whitespace() {
        assert!(CharClass::Space.contains(' '));
        assert!(!CharClass::Space.contains('\t'));
        assert!(CharClass::Whitespace.contains('\t'));
        assert!(CharClass::Whitespace.contains('\u{3000}'));
    }

    #[test]
    fn test_char_set_union_and_exclusion() {
        let set = CharSet::of(&[CharClass::AsciiAlphanumeric, CharClass::Space]);
        assert!(set.contains('a'));
        assert!(set.contains(' '));
        assert!(!set.contains('_'));

        let no_cjk = CharSet::of(&[CharClass::Any]).except(&[CharClass::Cjk]);
        assert!(no_cjk.contains('!'));
        assert!(!no_cjk.contains('国'));
    }
}
