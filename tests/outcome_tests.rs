#![cfg(feature = "value")]
//! Unit tests for the Outcome<T, E> type.
//!
//! Tests cover:
//! - Construction, queries, and branch transformation
//! - Panic capture through try_evaluate and CaughtError classification
//! - Branch non-reentrancy (the inactive transform never runs)
//! - Validation via ensure
//! - Conversions to Maybe and std Result

use corecur::error::{CaughtError, NON_ERROR_PANIC_MESSAGE};
use corecur::value::{Maybe, Outcome};
use rstest::rstest;
use std::cell::Cell;

// =============================================================================
// Construction and Queries
// =============================================================================

#[rstest]
fn success_holds_the_value() {
    let outcome: Outcome<i32, String> = Outcome::success(42);
    assert!(outcome.is_success());
    assert_eq!(outcome.success_ref(), Some(&42));
    assert_eq!(outcome.failure_ref(), None);
}

#[rstest]
fn failure_holds_the_error() {
    let outcome: Outcome<i32, String> = Outcome::failure("nope".to_string());
    assert!(outcome.is_failure());
    assert_eq!(outcome.failure_ref(), Some(&"nope".to_string()));
    assert_eq!(outcome.success_ref(), None);
}

// =============================================================================
// Branch Transformation
// =============================================================================

#[rstest]
fn map_success_transforms_only_the_success_branch() {
    let success: Outcome<i32, String> = Outcome::success(21);
    assert_eq!(success.map_success(|x| x * 2), Outcome::success(42));

    let failure: Outcome<i32, String> = Outcome::failure("nope".to_string());
    assert_eq!(
        failure.map_success(|x| x * 2),
        Outcome::failure("nope".to_string()),
    );
}

#[rstest]
fn map_failure_never_invoked_on_success() {
    let calls = Cell::new(0);
    let success: Outcome<i32, String> = Outcome::success(5);

    let unchanged = success.map_failure(|error| {
        calls.set(calls.get() + 1);
        error
    });

    assert_eq!(unchanged, Outcome::success(5));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn map_success_never_invoked_on_failure() {
    let calls = Cell::new(0);
    let failure: Outcome<i32, String> = Outcome::failure("nope".to_string());

    let unchanged = failure.map_success(|value| {
        calls.set(calls.get() + 1);
        value
    });

    assert_eq!(unchanged, Outcome::failure("nope".to_string()));
    assert_eq!(calls.get(), 0);
}

#[rstest]
fn and_then_chains_validations() {
    fn positive(x: i32) -> Outcome<i32, String> {
        if x > 0 {
            Outcome::success(x)
        } else {
            Outcome::failure(format!("{x} is not positive"))
        }
    }

    fn small(x: i32) -> Outcome<i32, String> {
        if x < 100 {
            Outcome::success(x)
        } else {
            Outcome::failure(format!("{x} is too large"))
        }
    }

    assert_eq!(Outcome::success(42).and_then(positive).and_then(small), Outcome::success(42));
    assert_eq!(
        Outcome::success(-1).and_then(positive).and_then(small),
        Outcome::failure("-1 is not positive".to_string()),
    );
}

#[rstest]
fn fold_eliminates_both_branches() {
    let success: Outcome<i32, String> = Outcome::success(42);
    assert_eq!(success.fold(|v| v.to_string(), |e| e), "42");

    let failure: Outcome<i32, String> = Outcome::failure("nope".to_string());
    assert_eq!(failure.fold(|v| v.to_string(), |e| e), "nope");
}

// =============================================================================
// try_evaluate
// =============================================================================

#[rstest]
fn try_evaluate_success_roundtrip() {
    let outcome = Outcome::try_evaluate(|| 42);
    assert!(outcome.is_success());
    assert_eq!(outcome.unwrap_or(0), 42);
}

#[rstest]
fn try_evaluate_preserves_the_panic_message() {
    let outcome = Outcome::try_evaluate(|| -> i32 { panic!("boom") });
    assert!(outcome.is_failure());
    assert_eq!(outcome.into_failure().unwrap().message(), "boom");
}

#[rstest]
fn try_evaluate_preserves_formatted_panic_messages() {
    let code = 7;
    let outcome = Outcome::try_evaluate(move || -> i32 { panic!("failed with code {code}") });
    assert_eq!(
        outcome.into_failure().unwrap().message(),
        "failed with code 7",
    );
}

#[rstest]
fn try_evaluate_normalizes_non_error_payloads() {
    let outcome = Outcome::try_evaluate(|| -> i32 { std::panic::panic_any(1234_u32) });
    assert_eq!(
        outcome.into_failure().unwrap().message(),
        NON_ERROR_PANIC_MESSAGE,
    );
}

#[rstest]
fn try_evaluate_success_is_never_decided_by_truthiness() {
    // The historical bug this guards against: collapsing falsy-but-valid
    // results into the failure/absent branch. Success is determined only
    // by whether the computation unwound.
    assert!(Outcome::try_evaluate(|| 0).is_success());
    assert!(Outcome::try_evaluate(|| false).is_success());
    assert!(Outcome::try_evaluate(String::new).is_success());
    assert_eq!(Outcome::try_evaluate(|| 0).unwrap_or(9), 0);
}

#[rstest]
fn try_evaluate_captures_expect_violations() {
    // An unsafe extraction inside the boundary is still captured and
    // normalized, never left as an unclassified unwind.
    let outcome = Outcome::try_evaluate(|| {
        let absent: Maybe<i32> = Maybe::nothing();
        absent.expect("lookup must succeed")
    });

    assert_eq!(
        outcome.into_failure().unwrap().message(),
        "invariant violation: lookup must succeed",
    );
}

// =============================================================================
// ensure
// =============================================================================

#[rstest]
#[case(3, 9, true)]
#[case(9, 3, false)]
#[case(5, 5, true)]
fn ensure_validates_interval_bounds(#[case] low: i32, #[case] high: i32, #[case] valid: bool) {
    let checked = Outcome::ensure(low <= high, "interval bounds invalid");
    assert_eq!(checked.is_success(), valid);
}

#[rstest]
fn ensure_heads_a_validation_chain() {
    let dimensions = (2, 3);
    let checked = Outcome::ensure(dimensions.0 > 0, "matrix dimension mismatch".to_string())
        .and_then(|()| Outcome::ensure(dimensions.1 > 0, "matrix dimension mismatch".to_string()))
        .map_success(|()| dimensions.0 * dimensions.1);
    assert_eq!(checked, Outcome::success(6));
}

// =============================================================================
// Extraction and Conversions
// =============================================================================

#[rstest]
fn unwrap_or_else_sees_the_failure_detail() {
    let failure: Outcome<usize, String> = Outcome::failure("nope".to_string());
    assert_eq!(failure.unwrap_or_else(|error| error.len()), 4);
}

#[rstest]
#[should_panic(expected = "invariant violation: parsed during startup")]
fn expect_success_panics_on_failure() {
    let failure: Outcome<i32, String> = Outcome::failure("nope".to_string());
    let _ = failure.expect_success("parsed during startup");
}

#[rstest]
fn to_maybe_discards_failure_detail() {
    let success: Outcome<i32, String> = Outcome::success(42);
    assert_eq!(success.to_maybe(), Maybe::just(42));

    let failure: Outcome<i32, String> = Outcome::failure("nope".to_string());
    assert_eq!(failure.to_maybe(), Maybe::nothing());
}

#[rstest]
fn result_conversion_roundtrip() {
    let outcome: Outcome<i32, String> = Ok(42).into();
    let result: Result<i32, String> = outcome.into();
    assert_eq!(result, Ok(42));

    let outcome: Outcome<i32, String> = Err("error".to_string()).into();
    let result: Result<i32, String> = outcome.into();
    assert_eq!(result, Err("error".to_string()));
}

#[rstest]
fn caught_errors_compare_by_message() {
    let first: Outcome<i32, CaughtError> = Outcome::failure(CaughtError::new("boom"));
    let second: Outcome<i32, CaughtError> = Outcome::failure(CaughtError::new("boom"));
    assert_eq!(first, second);
}
