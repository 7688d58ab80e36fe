//! The rule table
//!
//! A [`RuleTable`] pairs every [`RuleName`] with its shape and its message
//! template for the configured locale. Build it once at startup and share it
//! by reference; it holds no mutable state.
//!
//! ```
//! use fieldrules::{Config, RuleName, RuleTable};
//!
//! let table = RuleTable::new(Config::default().with_zh_trans(true));
//!
//! let spec = table.declare("xStrWithoutZhAndSpec=1-10").unwrap();
//! assert_eq!(spec.rule(), RuleName::StringNoSymbolsNoSpaceInterior);
//!
//! assert!(table.check(spec.rule(), "ab 12", spec.param()));
//! assert_eq!(
//!     table.message(RuleName::Phone, "mobile", ""),
//!     "mobile必须为手机号，1开头，长度为11位"
//! );
//! ```

use std::borrow::Cow;

use crate::bound::LengthRange;
use crate::config::Config;
use crate::error::ConfigError;
use crate::field::{Field, FieldError, FieldErrors, Validate};
use crate::message::{self, Locale};
use crate::predicate::validate_with;
use crate::rule::{RuleName, RuleSpec};
use crate::shape::Shape;
use crate::Validation;

#[derive(Debug, Clone)]
struct Entry {
    shape: &'static Shape,
    template: Cow<'static, str>,
}

/// Rule name → shape and message template, fixed at construction.
#[derive(Debug, Clone)]
pub struct RuleTable {
    config: Config,
    entries: [Entry; RuleName::ALL.len()],
}

impl RuleTable {
    /// Build the table for `config`.
    pub fn new(config: Config) -> Self {
        let locale = config.locale();
        let entries = RuleName::ALL.map(|rule| Entry {
            shape: rule.shape(),
            template: Cow::Borrowed(message::template(locale, rule)),
        });

        #[cfg(feature = "tracing")]
        tracing::debug!(
            locale = %locale,
            rules = entries.len(),
            strict_params = config.strict_params,
            "rule table built"
        );

        RuleTable { config, entries }
    }

    /// Replace the message template for `rule`.
    ///
    /// The template uses the same placeholders as the built-in catalogs:
    /// `{0}` for the field name and `{1}` for the parameter.
    ///
    /// ```
    /// use fieldrules::{RuleName, RuleTable};
    ///
    /// let table = RuleTable::default().with_template(RuleName::Phone, "{0}: bad number");
    /// assert_eq!(table.message(RuleName::Phone, "mobile", ""), "mobile: bad number");
    /// ```
    pub fn with_template(
        mut self,
        rule: RuleName,
        template: impl Into<Cow<'static, str>>,
    ) -> Self {
        let template = template.into();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rule = rule.name(),
            template = %template,
            "message template overridden"
        );

        self.entries[rule as usize].template = template;
        self
    }

    fn entry(&self, rule: RuleName) -> &Entry {
        // ALL lists the variants in discriminant order.
        &self.entries[rule as usize]
    }

    /// The configuration the table was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The message locale.
    pub fn locale(&self) -> Locale {
        self.config.locale()
    }

    /// Every registered rule.
    pub fn rules(&self) -> impl Iterator<Item = RuleName> {
        RuleName::ALL.into_iter()
    }

    /// The message template registered for `rule`.
    pub fn template(&self, rule: RuleName) -> &str {
        &self.entry(rule).template
    }

    /// Parse a rule declaration such as `"xStr=1-300"`.
    ///
    /// Unknown rule names are always an error. A malformed parameter on a
    /// length-bounded rule is an error only with `strict_params`; otherwise the
    /// declaration is accepted and the rule rejects every subject.
    pub fn declare(&self, declaration: &str) -> Result<RuleSpec, ConfigError> {
        let spec: RuleSpec = declaration.parse()?;
        match self.check_param(&spec) {
            Ok(()) => Ok(spec),
            Err(err) if self.config.strict_params => Err(err),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(
                    declaration,
                    error = %_err,
                    "rule declared with an unusable parameter; it will reject every value"
                );
                Ok(spec)
            }
        }
    }

    /// Check that a bounded rule's parameter is a well-formed range.
    pub fn check_param(&self, spec: &RuleSpec) -> Result<(), ConfigError> {
        if self.entry(spec.rule()).shape.is_fixed() {
            return Ok(());
        }
        spec.param()
            .parse::<LengthRange>()
            .map(|_| ())
            .map_err(|source| ConfigError::InvalidParam {
                rule: spec.rule().name(),
                param: spec.param().to_string(),
                source,
            })
    }

    /// Test `subject` against `rule` with the raw `param` text.
    pub fn check(&self, rule: RuleName, subject: &str, param: &str) -> bool {
        if subject.len() > self.config.max_subject_len {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                rule = rule.name(),
                len = subject.len(),
                max = self.config.max_subject_len,
                "subject exceeds length ceiling"
            );
            return false;
        }
        self.entry(rule).shape.test_param(subject, param)
    }

    /// Render the failure message for `rule` on `field`.
    pub fn message(&self, rule: RuleName, field: &str, param: &str) -> String {
        message::fill(self.template(rule), field, param)
    }

    fn failure(&self, field: &Field<'_>) -> FieldError {
        FieldError {
            field: field.name.to_string(),
            rule: field.rule,
            param: field.param.to_string(),
            message: self.message(field.rule, field.name, field.param),
        }
    }

    /// Validate one field.
    pub fn validate_field(&self, field: &Field<'_>) -> Validation<(), FieldErrors> {
        validate_with(
            field.value,
            |value: &&str| self.check(field.rule, value, field.param),
            |_| FieldErrors::from(self.failure(field)),
        )
        .map(|_| ())
    }

    /// Validate every field of `value`, reporting all failures together.
    pub fn validate<T: Validate + ?Sized>(&self, value: &T) -> Result<(), FieldErrors> {
        let fields = value.fields();
        Validation::all_vec(fields.iter().map(|field| self.validate_field(field)))
            .map(|_| ())
            .into_result()
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        RuleTable::new(Config::default())
    }
}
