//! Length bounds parsed from rule parameters
//!
//! A rule parameter such as `"1-300"` describes an inclusive window on the
//! number of characters a field may contain. Parsing never fails loudly:
//! anything that is not `<digits>-<digits>` with `min <= max` produces
//! [`Bound::Disabled`], and every length-bounded rule refuses a subject when its
//! bound is disabled.
//!
//! ```
//! use fieldrules::{Bound, LengthRange};
//!
//! assert_eq!(Bound::parse("1-300").range(), Some(LengthRange::new(1, 300).unwrap()));
//! assert_eq!(Bound::parse("0-10").range(), Some(LengthRange::new(0, 10).unwrap()));
//! assert!(!Bound::parse("").is_active());
//! assert!(!Bound::parse("10-1").is_active());
//! assert!(!Bound::parse("1-2-3").is_active());
//! assert!(!Bound::parse("a-3").is_active());
//! ```
//!
//! Callers that want malformed parameters reported instead can parse a
//! [`LengthRange`] directly:
//!
//! ```
//! use fieldrules::{LengthRange, ParamError};
//!
//! let err = "8-x".parse::<LengthRange>().unwrap_err();
//! assert_eq!(err, ParamError::NotANumber { token: "x".to_string() });
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ParamError;

/// Separator between the two ends of a range parameter.
const SEPARATOR: char = '-';

/// An inclusive `[min, max]` character-count window with `min <= max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LengthRange {
    min: usize,
    max: usize,
}

impl LengthRange {
    /// Build a range, rejecting `min > max`.
    pub fn new(min: usize, max: usize) -> Result<Self, ParamError> {
        if min > max {
            return Err(ParamError::Inverted { min, max });
        }
        Ok(LengthRange { min, max })
    }

    /// Smallest accepted length.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest accepted length.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns `true` if `len` lies inside the window.
    pub fn contains(&self, len: usize) -> bool {
        (self.min..=self.max).contains(&len)
    }
}

impl fmt::Display for LengthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.min, SEPARATOR, self.max)
    }
}

impl FromStr for LengthRange {
    type Err = ParamError;

    fn from_str(param: &str) -> Result<Self, Self::Err> {
        if param.is_empty() {
            return Err(ParamError::Empty);
        }

        let tokens: Vec<&str> = param.split(SEPARATOR).collect();
        let [min, max] = tokens.as_slice() else {
            return Err(ParamError::Separator {
                tokens: tokens.len(),
            });
        };

        LengthRange::new(parse_count(min)?, parse_count(max)?)
    }
}

/// Parse one end of a range: one or more ASCII digits, nothing else.
///
/// `usize::from_str` alone would also accept a leading `+`.
fn parse_count(token: &str) -> Result<usize, ParamError> {
    let not_a_number = || ParamError::NotANumber {
        token: token.to_string(),
    };

    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(not_a_number());
    }
    token.parse().map_err(|_| not_a_number())
}

/// The length constraint a rule enforces for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Bound {
    /// No usable parameter was supplied; bounded rules fail closed.
    #[default]
    Disabled,
    /// Lengths inside the window are accepted.
    Inclusive(LengthRange),
}

impl Bound {
    /// Parse a rule parameter, collapsing every malformed input to
    /// [`Bound::Disabled`].
    pub fn parse(param: &str) -> Self {
        match param.parse::<LengthRange>() {
            Ok(range) => Bound::Inclusive(range),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(param, error = %_err, "length bound disabled");
                Bound::Disabled
            }
        }
    }

    /// Returns `true` unless the bound is disabled.
    pub fn is_active(&self) -> bool {
        matches!(self, Bound::Inclusive(_))
    }

    /// The window, if the bound is active.
    pub fn range(&self) -> Option<LengthRange> {
        match self {
            Bound::Inclusive(range) => Some(*range),
            Bound::Disabled => None,
        }
    }
}

impl From<LengthRange> for Bound {
    fn from(range: LengthRange) -> Self {
        Bound::Inclusive(range)
    }
}
