//! Password composition rules.
//!
//! Every predicate is total over `Option<&str>`: `None` (an absent password)
//! fails every rule. Character classes use Unicode semantics, so non-ASCII
//! letters and digits count toward the class rules.

use std::collections::{BTreeSet, HashSet};
use std::fmt;

use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

use crate::policy::PasswordPolicy;

/// True if the password has at least `min_length` chars.
pub fn has_minimum_length(password: Option<&str>, min_length: usize) -> bool {
    password.is_some_and(|p| p.chars().count() >= min_length)
}

/// True if the password contains a decimal digit (general category `Nd`).
///
/// Superscripts, fractions and roman numerals are numbers but not digits.
pub fn has_digit(password: Option<&str>) -> bool {
    any_char(password, |c| c.general_category() == GeneralCategory::DecimalNumber)
}

pub fn has_lowercase(password: Option<&str>) -> bool {
    any_char(password, char::is_lowercase)
}

pub fn has_uppercase(password: Option<&str>) -> bool {
    any_char(password, char::is_uppercase)
}

/// True if the password contains at least one char from `special_chars`.
pub fn has_special_char(password: Option<&str>, special_chars: &BTreeSet<char>) -> bool {
    any_char(password, |c| special_chars.contains(&c))
}

/// True if no non-whitespace char occurs twice. Comparison is case-sensitive.
pub fn has_no_repeated_chars(password: Option<&str>) -> bool {
    let Some(password) = password else {
        return false;
    };
    let mut seen = HashSet::new();
    password
        .chars()
        .filter(|c| !c.is_whitespace())
        .all(|c| seen.insert(c))
}

pub fn has_no_whitespace(password: Option<&str>) -> bool {
    password.is_some_and(|p| !p.chars().any(char::is_whitespace))
}

fn any_char(password: Option<&str>, predicate: impl FnMut(char) -> bool) -> bool {
    password.is_some_and(|p| p.chars().any(predicate))
}

/// One policy dimension checked by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    MinimumLength,
    HasDigit,
    HasLowercase,
    HasUppercase,
    HasSpecialChar,
    HasNoRepeatedChars,
    HasNoWhitespace,
}

impl Rule {
    /// All rules in evaluation order.
    pub const ALL: [Rule; 7] = [
        Rule::MinimumLength,
        Rule::HasDigit,
        Rule::HasLowercase,
        Rule::HasUppercase,
        Rule::HasSpecialChar,
        Rule::HasNoRepeatedChars,
        Rule::HasNoWhitespace,
    ];

    pub fn check(self, password: Option<&str>, policy: &PasswordPolicy) -> bool {
        match self {
            Rule::MinimumLength => has_minimum_length(password, policy.min_length),
            Rule::HasDigit => has_digit(password),
            Rule::HasLowercase => has_lowercase(password),
            Rule::HasUppercase => has_uppercase(password),
            Rule::HasSpecialChar => has_special_char(password, &policy.special_chars),
            Rule::HasNoRepeatedChars => has_no_repeated_chars(password),
            Rule::HasNoWhitespace => has_no_whitespace(password),
        }
    }

    /// Stable snake_case label, safe to log.
    pub fn label(self) -> &'static str {
        match self {
            Rule::MinimumLength => "minimum_length",
            Rule::HasDigit => "has_digit",
            Rule::HasLowercase => "has_lowercase",
            Rule::HasUppercase => "has_uppercase",
            Rule::HasSpecialChar => "has_special_char",
            Rule::HasNoRepeatedChars => "has_no_repeated_chars",
            Rule::HasNoWhitespace => "has_no_whitespace",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn none_fails_every_rule() {
        let policy = PasswordPolicy::default();
        for rule in Rule::ALL {
            assert!(!rule.check(None, &policy), "{rule} accepted None");
        }
    }

    #[test]
    fn minimum_length_counts_chars_not_bytes() {
        assert!(has_minimum_length(Some("abc"), 3));
        assert!(!has_minimum_length(Some("ab"), 3));
        // Three chars, six bytes.
        assert!(!has_minimum_length(Some("éèê"), 4));
        assert!(has_minimum_length(Some("éèê"), 3));
        assert!(has_minimum_length(Some(""), 0));
    }

    #[test]
    fn digit_rule() {
        assert!(has_digit(Some("abc1")));
        assert!(!has_digit(Some("abc")));
        assert!(!has_digit(Some("")));
        // Arabic-Indic digit seven.
        assert!(has_digit(Some("abc\u{0667}")));
    }

    #[test]
    fn digit_rule_rejects_non_decimal_numbers() {
        assert!(!has_digit(Some("abc\u{00B2}")));
        assert!(!has_digit(Some("abc\u{00BD}")));
        assert!(!has_digit(Some("abc\u{2163}")));
        assert!(has_digit(Some("abc\u{00B2}7")));
    }

    #[test]
    fn case_rules_are_unicode_aware() {
        assert!(has_lowercase(Some("ABCd")));
        assert!(!has_lowercase(Some("ABC1")));
        assert!(has_lowercase(Some("ÀÉß")));

        assert!(has_uppercase(Some("abcD")));
        assert!(!has_uppercase(Some("abc1")));
        assert!(has_uppercase(Some("àéÇ")));
    }

    #[test]
    fn special_char_rule_uses_given_set() {
        let policy = PasswordPolicy::default();
        for c in "!@#$%^&*()-+".chars() {
            let candidate = format!("abc{c}");
            assert!(
                has_special_char(Some(candidate.as_str()), &policy.special_chars),
                "{c:?} should be special"
            );
        }
        assert!(!has_special_char(Some("abc_"), &policy.special_chars));
        assert!(!has_special_char(Some("abc\u{02C6}"), &policy.special_chars));

        let narrow = PasswordPolicy::new(9, "_".chars());
        assert!(has_special_char(Some("abc_"), &narrow.special_chars));
        assert!(!has_special_char(Some("abc!"), &narrow.special_chars));
    }

    #[test]
    fn repeated_chars_are_case_sensitive() {
        assert!(has_no_repeated_chars(Some("aA")));
        assert!(!has_no_repeated_chars(Some("aba")));
        assert!(has_no_repeated_chars(Some("")));
    }

    #[test]
    fn repeated_chars_ignore_whitespace() {
        assert!(has_no_repeated_chars(Some("a b c")));
        assert!(has_no_repeated_chars(Some("a\t\tb\n\nc")));
        assert!(!has_no_repeated_chars(Some("a b a")));
    }

    #[test]
    fn whitespace_rule_covers_unicode_spaces() {
        assert!(has_no_whitespace(Some("abc")));
        assert!(has_no_whitespace(Some("")));
        assert!(!has_no_whitespace(Some("a b")));
        assert!(!has_no_whitespace(Some("a\tb")));
        assert!(!has_no_whitespace(Some("a\nb")));
        assert!(!has_no_whitespace(Some("a\u{00A0}b")));
        assert!(!has_no_whitespace(Some("a\u{2003}b")));
    }

    #[test]
    fn labels_are_unique() {
        let labels: HashSet<&str> = Rule::ALL.iter().map(|rule| rule.label()).collect();
        assert_eq!(labels.len(), Rule::ALL.len());
        assert_eq!(Rule::HasNoWhitespace.to_string(), "has_no_whitespace");
    }
}
