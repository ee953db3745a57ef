//! Tests for the per-field validation rules.

use formcheck::FieldId;
use formcheck::validation::rules::{
    AGE_MESSAGE, CONFIRM_MESSAGE, EMAIL_MESSAGE, NAME_MESSAGE, PASSWORD_MESSAGE, PHONE_MESSAGE,
    is_page_whitespace, parse_leading_int, trim_page,
};
use formcheck::validation::{
    REQUIRED_MESSAGE, ValidationError, check_field, validate_age, validate_confirm_password,
    validate_email, validate_name, validate_password, validate_phone,
};

// ============================================================================
// Required short-circuit
// ============================================================================

#[test]
fn test_blank_value_is_required_for_every_field() {
    for field in FieldId::ALL {
        for blank in ["", "   ", "\t\n "] {
            let result = check_field(field, blank, "Abcdefg1");
            assert_eq!(
                result,
                Err(ValidationError::RequiredFieldMissing),
                "{field} with {blank:?}"
            );
        }
    }
}

#[test]
fn test_required_message() {
    let err = check_field(FieldId::Email, "", "").unwrap_err();
    assert_eq!(err.message(), REQUIRED_MESSAGE);
    assert_eq!(err.to_string(), "This field is required");
}

#[test]
fn test_rule_violation_display_is_message() {
    let err = check_field(FieldId::Email, "nope", "").unwrap_err();
    assert_eq!(err, ValidationError::rule(EMAIL_MESSAGE));
    assert_eq!(err.to_string(), EMAIL_MESSAGE);
}

// ============================================================================
// Full name
// ============================================================================

#[test]
fn test_name_two_words() {
    assert!(validate_name("Ada Lovelace").is_valid);
    assert!(validate_name("  Ada   Lovelace  ").is_valid);
}

#[test]
fn test_name_single_word_rejected() {
    let verdict = validate_name("Ada");
    assert!(!verdict.is_valid);
    assert_eq!(verdict.message, NAME_MESSAGE);
}

#[test]
fn test_name_non_letters_in_first_words_rejected() {
    assert!(!validate_name("Ad4 Lovelace").is_valid);
    assert!(!validate_name("Ada 1ovelace").is_valid);
}

#[test]
fn test_name_accepts_trailing_text() {
    assert!(validate_name("Ada Lovelace-King").is_valid);
    assert!(validate_name("Ada Lovelace 3rd").is_valid);
    assert!(validate_name("Ada L.").is_valid);
}

#[test]
fn test_name_shortest_accepted() {
    assert!(validate_name("A B").is_valid);
}

// ============================================================================
// Email
// ============================================================================

#[test]
fn test_email_valid() {
    assert!(validate_email("a@b.co").is_valid);
    assert!(validate_email("first.last@sub.example.org").is_valid);
}

#[test]
fn test_email_missing_tld() {
    assert!(!validate_email("a@b").is_valid);
}

#[test]
fn test_email_missing_at() {
    assert!(!validate_email("a.b.com").is_valid);
}

#[test]
fn test_email_rejects_spaces_and_double_at() {
    assert!(!validate_email("a b@c.de").is_valid);
    assert!(!validate_email("a@@b.co").is_valid);
    assert!(!validate_email("a@b.c o").is_valid);
}

// ============================================================================
// Phone
// ============================================================================

#[test]
fn test_phone_formats() {
    assert!(validate_phone("(555) 123-4567").is_valid);
    assert!(validate_phone("5551234567").is_valid);
    assert!(!validate_phone("+1 555 123 4567").is_valid);
    assert!(validate_phone("1 555 123 4567").is_valid);
}

#[test]
fn test_phone_too_few_digits() {
    let verdict = validate_phone("555-1234");
    assert!(!verdict.is_valid);
    assert_eq!(verdict.message, PHONE_MESSAGE);
}

#[test]
fn test_phone_rejects_other_characters() {
    assert!(!validate_phone("555.123.4567").is_valid);
    assert!(!validate_phone("555-123-4567 ext").is_valid);
}

// ============================================================================
// Password
// ============================================================================

#[test]
fn test_password_valid() {
    assert!(validate_password("Abcdefg1").is_valid);
}

#[test]
fn test_password_missing_class() {
    assert!(!validate_password("abcdefg1").is_valid);
    assert!(!validate_password("ABCDEFG1").is_valid);
    assert!(!validate_password("Abcdefgh").is_valid);
}

#[test]
fn test_password_too_short() {
    let verdict = validate_password("Abc123");
    assert!(!verdict.is_valid);
    assert_eq!(verdict.message, PASSWORD_MESSAGE);
}

// ============================================================================
// Confirm password
// ============================================================================

#[test]
fn test_confirm_matches_current_password() {
    for password in ["Abcdefg1", "x", "with space", "ünïcødé"] {
        assert!(validate_confirm_password(password, password).is_valid);
        let other = format!("{password}!");
        let verdict = validate_confirm_password(&other, password);
        assert!(!verdict.is_valid);
        assert_eq!(verdict.message, CONFIRM_MESSAGE);
    }
}

#[test]
fn test_confirm_is_not_pattern_checked() {
    assert_eq!(check_field(FieldId::ConfirmPassword, "weak", "weak"), Ok(()));
}

#[test]
fn test_confirm_compares_trimmed_against_raw_password() {
    assert_eq!(
        check_field(FieldId::ConfirmPassword, " Abcdefg1 ", "Abcdefg1"),
        Ok(())
    );
    assert_eq!(
        check_field(FieldId::ConfirmPassword, "Abcdefg1 ", "Abcdefg1 "),
        Err(ValidationError::rule(CONFIRM_MESSAGE))
    );
}

// ============================================================================
// Age
// ============================================================================

#[test]
fn test_age_bounds() {
    assert!(validate_age("13").is_valid);
    assert!(validate_age("120").is_valid);
    assert!(!validate_age("12").is_valid);
    assert!(!validate_age("121").is_valid);
}

#[test]
fn test_age_non_numeric_is_invalid_not_error() {
    let verdict = validate_age("abc");
    assert!(!verdict.is_valid);
    assert_eq!(verdict.message, AGE_MESSAGE);
}

#[test]
fn test_age_uses_leading_integer() {
    assert!(validate_age("30 years").is_valid);
    assert!(validate_age("13.9").is_valid);
    assert!(!validate_age("12.9").is_valid);
    assert!(validate_age("0x20").is_valid);
}

#[test]
fn test_age_overflow_is_invalid() {
    assert!(!validate_age("99999999999999999999999999").is_valid);
}

#[test]
fn test_parse_leading_int() {
    assert_eq!(parse_leading_int("42"), Some(42));
    assert_eq!(parse_leading_int("  -7x"), Some(-7));
    assert_eq!(parse_leading_int("+15"), Some(15));
    assert_eq!(parse_leading_int("0xff"), Some(255));
    assert_eq!(parse_leading_int("0x"), None);
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("1e3"), Some(1));
}

// ============================================================================
// Whitespace
// ============================================================================

#[test]
fn test_page_whitespace_set() {
    for c in [' ', '\t', '\n', '\u{00A0}', '\u{2003}', '\u{3000}', '\u{FEFF}'] {
        assert!(is_page_whitespace(c), "{:?} should be whitespace", c);
    }
    for c in ['\u{0085}', '\u{200B}', 'a', '_'] {
        assert!(!is_page_whitespace(c), "{:?} should not be whitespace", c);
    }
}

#[test]
fn test_trim_page_strips_byte_order_mark_but_not_next_line() {
    assert_eq!(trim_page("\u{FEFF} 42 \u{FEFF}"), "42");
    assert_eq!(trim_page("\u{0085}"), "\u{0085}");
}

#[test]
fn test_byte_order_mark_is_trimmed_before_rules() {
    assert_eq!(check_field(FieldId::Age, "\u{FEFF}42", ""), Ok(()));
    assert_eq!(
        check_field(FieldId::FullName, "\u{FEFF}", ""),
        Err(ValidationError::RequiredFieldMissing)
    );
}

#[test]
fn test_next_line_is_a_value_not_blank() {
    assert_eq!(
        check_field(FieldId::Email, "\u{0085}", ""),
        Err(ValidationError::rule(EMAIL_MESSAGE))
    );
}

#[test]
fn test_name_accepts_non_breaking_space_between_words() {
    assert!(validate_name("Ada\u{00A0}Lovelace").is_valid);
    assert!(!validate_name("Ada\u{0085}Lovelace").is_valid);
}

// ============================================================================
// Field identifiers
// ============================================================================

#[test]
fn test_field_id_parse() {
    for field in FieldId::ALL {
        assert_eq!(field.as_str().parse::<FieldId>(), Ok(field));
    }
    let err = "terms".parse::<FieldId>().unwrap_err();
    assert_eq!(err.to_string(), "Unknown field 'terms'");
}
