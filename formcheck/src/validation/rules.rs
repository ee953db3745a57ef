//! Per-field validation rules.
//!
//! Each `validate_*` function is pure and always returns a [`Verdict`] that
//! carries the rule's failure message, whether or not the value passed.
//! [`check_field`] adds the required-value short-circuit and dispatches by
//! field.

use std::sync::LazyLock;

use regex::Regex;

use super::error::ValidationError;
use crate::field::FieldId;

pub const NAME_MESSAGE: &str = "Please enter your full name (first and last name)";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const PHONE_MESSAGE: &str = "Please enter a valid phone number (at least 10 digits)";
pub const PASSWORD_MESSAGE: &str =
    "Password must be 8+ characters with uppercase, lowercase, and number";
pub const CONFIRM_MESSAGE: &str = "Passwords do not match";
pub const AGE_MESSAGE: &str = "Age must be between 13 and 120";

/// Minimum and maximum accepted age, inclusive.
pub const AGE_RANGE: std::ops::RangeInclusive<i64> = 13..=120;

// Character-class body for browser whitespace: includes U+FEFF, excludes
// U+0085. Must stay in sync with `is_page_whitespace`.
macro_rules! page_space {
    () => {
        r"\t\n\x0B\x0C\r \u{00A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}"
    };
}

// Two letter-only words, then anything up to a line break. Trailing text after
// the second word is accepted.
static NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z]+[",
        page_space!(),
        r"]+[A-Za-z]+[^\n\r\u{2028}\u{2029}]*$"
    ))
    .expect("Invalid name pattern")
});

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[^@",
        page_space!(),
        r"]+@[^@",
        page_space!(),
        r"]+\.[^@",
        page_space!(),
        r"]+$"
    ))
    .expect("Invalid email pattern")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(r"^[0-9\-()", page_space!(), r"]+$")).expect("Invalid phone pattern")
});

/// Whitespace as the browser's `trim` and `\s` see it.
///
/// Differs from [`char::is_whitespace`]: U+FEFF counts, U+0085 does not.
pub fn is_page_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Strip leading and trailing [page whitespace](is_page_whitespace).
pub fn trim_page(value: &str) -> &str {
    value.trim_matches(is_page_whitespace)
}

/// Outcome of running one rule against one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verdict {
    pub is_valid: bool,
    pub message: &'static str,
}

impl Verdict {
    fn new(is_valid: bool, message: &'static str) -> Self {
        Self { is_valid, message }
    }

    /// Convert into a `Result`, mapping failure to a rule violation.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ValidationError::rule(self.message))
        }
    }
}

/// Length as the browser counts it (UTF-16 code units).
fn text_len(value: &str) -> usize {
    value.encode_utf16().count()
}

pub fn validate_name(name: &str) -> Verdict {
    let name = trim_page(name);
    Verdict::new(
        NAME_PATTERN.is_match(name) && text_len(name) >= 3,
        NAME_MESSAGE,
    )
}

pub fn validate_email(email: &str) -> Verdict {
    Verdict::new(EMAIL_PATTERN.is_match(email), EMAIL_MESSAGE)
}

/// Digits, whitespace, hyphens and parentheses only, with at least ten digits.
pub fn validate_phone(phone: &str) -> Verdict {
    let digits = phone.chars().filter(char::is_ascii_digit).count();
    Verdict::new(PHONE_PATTERN.is_match(phone) && digits >= 10, PHONE_MESSAGE)
}

pub fn validate_password(password: &str) -> Verdict {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    Verdict::new(
        has_upper && has_lower && has_digit && text_len(password) >= 8,
        PASSWORD_MESSAGE,
    )
}

/// The confirmation must equal the live password value exactly.
pub fn validate_confirm_password(confirmation: &str, password: &str) -> Verdict {
    Verdict::new(confirmation == password, CONFIRM_MESSAGE)
}

/// Unparseable input fails the range check instead of erroring.
pub fn validate_age(age: &str) -> Verdict {
    let in_range = parse_leading_int(age).is_some_and(|n| AGE_RANGE.contains(&n));
    Verdict::new(in_range, AGE_MESSAGE)
}

/// Parse the integer prefix of `input`.
///
/// Leading page whitespace and a sign are skipped, a `0x`/`0X` prefix selects
/// base 16, and parsing stops at the first non-digit. Returns `None` when no
/// digits were read or the value overflows `i64`.
pub fn parse_leading_int(input: &str) -> Option<i64> {
    let s = input.trim_start_matches(is_page_whitespace);
    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match s.get(..2) {
        Some("0x" | "0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = i64::from_str_radix(&digits[..end], radix).ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Validate `raw` as the value of `field`.
///
/// The value is trimmed of page whitespace first; an empty result short-circuits to
/// [`ValidationError::RequiredFieldMissing`] before any field rule runs.
/// `password` is the password field's current, untrimmed value and is only
/// consulted for [`FieldId::ConfirmPassword`].
pub fn check_field(field: FieldId, raw: &str, password: &str) -> Result<(), ValidationError> {
    let value = trim_page(raw);
    if value.is_empty() {
        return Err(ValidationError::RequiredFieldMissing);
    }

    let verdict = match field {
        FieldId::FullName => validate_name(value),
        FieldId::Email => validate_email(value),
        FieldId::Phone => validate_phone(value),
        FieldId::Password => validate_password(value),
        FieldId::ConfirmPassword => validate_confirm_password(value, password),
        FieldId::Age => validate_age(value),
    };
    verdict.into_result()
}
