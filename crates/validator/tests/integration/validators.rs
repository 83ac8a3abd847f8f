use pretty_assertions::assert_eq;
use rstest::rstest;
use siv_validator::prelude::*;

// ============================================================================
// NOT EMPTY
// ============================================================================

#[rstest]
#[case(None, Outcome::invalid(ResultFlags::EMPTY_STRING))]
#[case(Some(""), Outcome::invalid(ResultFlags::EMPTY_STRING))]
#[case(Some("x"), Outcome::valid())]
#[case(Some(" "), Outcome::valid())]
fn not_empty_outcomes(#[case] input: Option<&str>, #[case] expected: Outcome) {
    assert_eq!(NotEmptyValidator.validate(input), expected);
}

// ============================================================================
// LENGTH
// ============================================================================

#[rstest]
#[case(None, Outcome::invalid(ResultFlags::LENGTH_MISMATCH))]
#[case(Some(""), Outcome::invalid(ResultFlags::LENGTH_MISMATCH))]
#[case(Some("0123"), Outcome::invalid(ResultFlags::LENGTH_MISMATCH))]
#[case(Some("01234"), Outcome::valid())]
#[case(
    Some("0123456789"),
    Outcome::invalid(ResultFlags::LENGTH_EXCEEDED | ResultFlags::LENGTH_MISMATCH)
)]
fn strict_length_outcomes(#[case] input: Option<&str>, #[case] expected: Outcome) {
    assert_eq!(LengthValidator::new(5).validate(input), expected);
}

#[rstest]
#[case(None, Outcome::invalid(ResultFlags::LENGTH_MISMATCH))]
#[case(Some(""), Outcome::valid_with(ResultFlags::LENGTH_MISMATCH))]
#[case(Some("0123"), Outcome::valid_with(ResultFlags::LENGTH_MISMATCH))]
#[case(Some("01234"), Outcome::valid())]
#[case(
    Some("0123456789"),
    Outcome::invalid(ResultFlags::LENGTH_EXCEEDED | ResultFlags::LENGTH_MISMATCH)
)]
fn lenient_length_outcomes(#[case] input: Option<&str>, #[case] expected: Outcome) {
    assert_eq!(LengthValidator::lenient(5).validate(input), expected);
}

#[test]
fn length_policy_is_the_only_difference() {
    let strict = LengthValidator::new(5);
    let lenient = strict.with_policy(LengthPolicy::Lenient);
    assert_eq!(strict.limit(), lenient.limit());
    assert_eq!(strict.mode(), lenient.mode());
    assert_eq!(strict.policy(), LengthPolicy::default());
}

// ============================================================================
// PATTERN
// ============================================================================

#[test]
fn numeric_validator() {
    let validator = numeric();
    assert!(validator.validate(Some("01234")).is_valid());
    assert!(!validator.validate(None).is_valid());

    let result = validator.validate(Some("01x234"));
    assert!(!result.is_valid());
    assert_eq!(result.error(), Some(ResultFlags::INVALID_FORMAT));
    assert!(!result.contains_only_valid_characters());
}

#[rstest]
#[case("abcXYZ019", true)]
#[case("", true)]
#[case("abc-1", false)]
#[case("\u{e9}t\u{e9}", false)]
fn alphanumeric_validator(#[case] input: &str, #[case] valid: bool) {
    assert_eq!(alphanumeric().validate(Some(input)).is_valid(), valid);
}

#[test]
fn shared_patterns_differ() {
    assert_ne!(PatternValidator::numeric(), PatternValidator::alphanumeric());
    assert_eq!(PatternValidator::numeric(), numeric());
}

#[test]
fn custom_pattern_requires_full_match() {
    let validator = pattern("[A-Z]{2}[0-9]{2}").unwrap();
    assert!(validator.validate(Some("DE89")).is_valid());
    assert!(!validator.validate(Some("DE8937")).is_valid());
    assert!(!validator.validate(Some("xDE89")).is_valid());
}

#[test]
fn bad_pattern_fails_at_construction() {
    let error = pattern("[0-9").unwrap_err();
    assert_eq!(error.pattern(), Some("[0-9"));
    assert!(error.to_string().starts_with("invalid pattern `[0-9`"));
}

// ============================================================================
// DESCRIPTIONS
// ============================================================================

#[test]
fn descriptions() {
    insta::assert_snapshot!(LengthValidator::new(5), @"LengthLimit: 5");
    insta::assert_snapshot!(NotEmptyValidator, @"NotEmpty");
    insta::assert_snapshot!(numeric(), @"RegEX: ^[0-9]*$");
    insta::assert_snapshot!(alphanumeric(), @"RegEX: ^[0-9a-zA-Z]*$");
    insta::assert_snapshot!(phone_number(), @"PhoneNumber");
}

// ============================================================================
// RESULT CONVERSION
// ============================================================================

#[test]
fn outcome_into_result_propagates_every_flag() {
    fn check(input: &str) -> Result<(), ValidationFailure> {
        compose![length_limit(5), not_empty()]
            .validate(Some(input))
            .into_result()?;
        Ok(())
    }

    assert!(check("01234").is_ok());
    let failure = check("").unwrap_err();
    assert_eq!(
        failure.flags(),
        ResultFlags::EMPTY_STRING | ResultFlags::LENGTH_MISMATCH
    );
    assert_eq!(
        failure.to_string(),
        "validation failed: [EmptyString, LengthMismatch]"
    );
}
