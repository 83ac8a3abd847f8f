use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use siv_validator::foundation::validate_with_all;
use siv_validator::prelude::*;

// ============================================================================
// COMBINATION RULE
// ============================================================================

#[test]
fn empty_input_reports_every_failure() {
    let validator = compose![LengthValidator::new(5), NotEmptyValidator];

    let outcome = validator.validate(Some(""));
    assert!(!outcome.is_valid());
    let Outcome::Invalid(error) = outcome else {
        panic!("expected an invalid outcome, got {outcome}");
    };
    assert!(error.contains(ResultFlags::EMPTY_STRING));
    assert!(error.contains(ResultFlags::LENGTH_MISMATCH));
}

#[test]
fn nested_composite_flattens() {
    let inner = compose![LengthValidator::new(5), NotEmptyValidator];
    let validator = compose![PatternValidator::numeric(), inner];

    let outcome = validator.validate(Some("absdefgh"));
    assert!(!outcome.is_valid());
    let error = outcome.error().expect("invalid outcome");
    assert!(error.contains(ResultFlags::INVALID_FORMAT));
    assert!(error.contains(ResultFlags::LENGTH_EXCEEDED));
    assert_eq!(
        error.to_string(),
        "[InvalidFormat, LengthExceeded, LengthMismatch]"
    );
}

#[test]
fn any_failure_overrides_all_successes() {
    let validator = compose![
        not_empty(),
        numeric(),
        alphanumeric(),
        LengthValidator::new(3),
    ];
    assert_eq!(
        validator.validate(Some("1234")),
        Outcome::invalid(ResultFlags::LENGTH_EXCEEDED | ResultFlags::LENGTH_MISMATCH)
    );
    assert_eq!(validator.validate(Some("123")), Outcome::valid());
}

#[test]
fn absent_input_collects_each_validators_reason() {
    let validator = compose![not_empty(), length_limit(4), numeric(), phone_number()];
    assert_eq!(
        validator.validate(None),
        Outcome::invalid(
            ResultFlags::EMPTY_STRING | ResultFlags::LENGTH_MISMATCH | ResultFlags::INVALID_FORMAT
        )
    );
}

#[test]
fn extra_flags_are_kept_on_success() {
    let validator = compose![LengthValidator::lenient(8), numeric()];
    let outcome = validator.validate(Some("0123"));
    assert!(outcome.is_valid());
    assert!(outcome.has_length_mismatch());
    assert_eq!(outcome, Outcome::Valid(Some(ResultFlags::LENGTH_MISMATCH)));
}

#[test]
fn helper_matches_composite() {
    let length = LengthValidator::new(5);
    let validators: [&dyn Validate; 2] = [&length, &NotEmptyValidator];
    let composite = compose![LengthValidator::new(5), NotEmptyValidator];

    for input in [None, Some(""), Some("01234"), Some("0123456")] {
        assert_eq!(
            validate_with_all(input, &validators),
            composite.validate(input)
        );
    }
}

// ============================================================================
// CONSTRUCTION
// ============================================================================

#[test]
fn runtime_list_construction() {
    let validators: Vec<Box<dyn Validate>> = vec![
        LengthValidator::new(5).boxed(),
        NotEmptyValidator.boxed(),
    ];
    let validator = CompositeValidator::try_from(validators).unwrap();
    assert_eq!(validator.len(), 2);
    assert_eq!(
        validator.validate(Some("")),
        compose![LengthValidator::new(5), NotEmptyValidator].validate(Some(""))
    );
}

#[test]
fn empty_list_is_a_config_error() {
    let error = CompositeValidator::new(Vec::new()).unwrap_err();
    assert!(matches!(error, ConfigError::EmptyComposite));
}

#[test]
fn description_lists_members_in_order() {
    let validator = compose![LengthValidator::new(5), NotEmptyValidator];
    insta::assert_snapshot!(validator, @"CompositeValidator: LengthLimit: 5, NotEmpty,");

    let nested = compose![numeric(), validator];
    insta::assert_snapshot!(
        nested,
        @"CompositeValidator: RegEX: ^[0-9]*$, CompositeValidator: LengthLimit: 5, NotEmpty,,"
    );
}

// ============================================================================
// REUSE
// ============================================================================

#[test]
fn repeated_validation_is_stable() {
    let validator = compose![numeric(), compose![length_limit(5), not_empty()]];
    for input in [None, Some(""), Some("01234"), Some("absdefgh")] {
        assert_eq!(validator.validate(input), validator.validate(input));
    }
}

#[test]
fn shared_across_threads() {
    let validator: Arc<dyn Validate> = Arc::new(compose![
        length_limit(5),
        not_empty(),
        numeric()
    ]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let validator = Arc::clone(&validator);
            thread::spawn(move || {
                (
                    validator.validate(Some("01234")),
                    validator.validate(Some("0123x")),
                )
            })
        })
        .collect();

    for handle in handles {
        let (ok, bad) = handle.join().unwrap();
        assert_eq!(ok, Outcome::valid());
        assert_eq!(bad, Outcome::invalid(ResultFlags::INVALID_FORMAT));
    }
}
