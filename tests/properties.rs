//! Property-based tests for rule evaluation

use fieldrules::testing::{malformed_param, range_param, subject};
use fieldrules::{Bound, LengthRange, RuleName, RuleTable};
use proptest::prelude::*;

fn bounded_rule() -> impl Strategy<Value = RuleName> {
    any::<RuleName>().prop_filter("length-bounded rules", |rule| rule.is_bounded())
}

proptest! {
    #[test]
    fn prop_evaluation_is_idempotent(
        rule in any::<RuleName>(),
        subject in subject(),
        param in range_param(20),
    ) {
        let table = RuleTable::default();
        let first = table.check(rule, &subject, &param);
        prop_assert_eq!(first, table.check(rule, &subject, &param));
        prop_assert_eq!(first, rule.test(&subject, &param));
    }

    #[test]
    fn prop_malformed_param_always_fails(
        rule in bounded_rule(),
        subject in subject(),
        param in malformed_param(),
    ) {
        prop_assert!(!RuleTable::default().check(rule, &subject, &param));
    }

    #[test]
    fn prop_inverted_range_always_fails(
        rule in bounded_rule(),
        subject in subject(),
        max in 0usize..50,
        gap in 1usize..50,
    ) {
        let param = format!("{}-{}", max + gap, max);
        prop_assert!(!Bound::parse(&param).is_active());
        prop_assert!(!rule.test(&subject, &param));
    }

    #[test]
    fn prop_non_numeric_token_always_fails(
        rule in bounded_rule(),
        subject in subject(),
        token in "[a-z+ ]{1,4}",
        max in 0usize..50,
    ) {
        let param = format!("{}-{}", token, max);
        prop_assert!(!rule.test(&subject, &param));
        let reversed = format!("{}-{}", max, token);
        prop_assert!(!rule.test(&subject, &reversed));
    }

    #[test]
    fn prop_plain_string_enforces_window(
        subject in "[a-z]{0,30}",
        min in 0usize..15,
        span in 0usize..15,
    ) {
        let range = LengthRange::new(min, min + span).unwrap();
        let param = range.to_string();
        let len = subject.chars().count();
        prop_assert_eq!(
            RuleName::PlainString.test(&subject, &param),
            range.contains(len)
        );
    }

    #[test]
    fn prop_length_is_counted_in_chars(count in 1usize..20) {
        let subject = "中".repeat(count);
        let exact = format!("{count}-{count}");
        prop_assert!(RuleName::PlainString.test(&subject, &exact));
        prop_assert!(!RuleName::StringNoChineseChars.test(&subject, &exact));
    }

    #[test]
    fn prop_phone_rejects_wrong_length(digits in "1[0-9]{0,20}") {
        prop_assert_eq!(RuleName::Phone.test(&digits, ""), digits.len() == 11);
    }

    #[test]
    fn prop_password_without_symbol_fails(body in "[a-zA-Z0-9]{8,15}") {
        prop_assert!(!RuleName::Password.test(&body, "8-15"));
    }
}
