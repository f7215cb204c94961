#![cfg(feature = "control")]
//! Unit tests for the Lazy<T, F> type.
//!
//! Tests cover:
//! - Deferred evaluation and memoization
//! - Evaluation state transitions and peeking
//! - Poisoned state handling
//! - map composition

use corecur::control::Lazy;
use corecur::error::LazyPoisonedError;
use rstest::rstest;
use std::cell::Cell;
use std::panic::{AssertUnwindSafe, catch_unwind};

// =============================================================================
// Deferred Evaluation
// =============================================================================

#[rstest]
fn lazy_defers_computation_until_force() {
    let computed = Cell::new(false);
    let lazy = Lazy::new(|| {
        computed.set(true);
        42
    });

    assert!(!computed.get());

    let value = lazy.force();
    assert!(computed.get());
    assert_eq!(*value, 42);
}

#[rstest]
fn lazy_force_returns_a_usable_reference() {
    let lazy = Lazy::new(|| "hello".to_string());
    let value = lazy.force();
    assert_eq!(value.len(), 5);
    assert!(value.starts_with("hel"));
}

// =============================================================================
// Memoization
// =============================================================================

#[rstest]
fn lazy_evaluates_at_most_once() {
    let call_count = Cell::new(0);
    let lazy = Lazy::new(|| {
        call_count.set(call_count.get() + 1);
        42
    });

    assert_eq!(call_count.get(), 0);

    let _ = lazy.force();
    assert_eq!(call_count.get(), 1);

    // Two more accesses: still exactly one evaluation.
    let _ = lazy.force();
    let _ = lazy.force();
    assert_eq!(call_count.get(), 1);
}

#[rstest]
fn lazy_later_accesses_are_cache_hits() {
    let lazy = Lazy::new(|| "computed".to_string());
    let first = lazy.force().clone();
    let second = lazy.force().clone();
    assert_eq!(first, second);
}

// =============================================================================
// State Transitions
// =============================================================================

#[rstest]
fn lazy_with_value_is_already_evaluated() {
    let lazy = Lazy::with_value(42);
    assert!(lazy.is_evaluated());
    assert_eq!(*lazy.force(), 42);
}

#[rstest]
fn lazy_peek_never_triggers_evaluation() {
    let call_count = Cell::new(0);
    let lazy = Lazy::new(|| {
        call_count.set(call_count.get() + 1);
        42
    });

    assert!(lazy.peek().is_none());
    assert_eq!(call_count.get(), 0);

    let _ = lazy.force();
    assert_eq!(*lazy.peek().unwrap(), 42);
    assert_eq!(call_count.get(), 1);
}

#[rstest]
fn lazy_into_inner_forces_pending_computation() {
    let lazy = Lazy::new(|| 42);
    assert_eq!(lazy.into_inner(), Ok(42));
}

// =============================================================================
// Poisoning
// =============================================================================

#[rstest]
fn lazy_panicking_computation_poisons_the_slot() {
    let lazy = Lazy::new(|| -> i32 { panic!("evaluation failed") });

    let result = catch_unwind(AssertUnwindSafe(|| lazy.force()));
    assert!(result.is_err());
    assert!(lazy.is_poisoned());
    assert!(!lazy.is_evaluated());
}

#[rstest]
fn lazy_poisoned_force_keeps_panicking() {
    let lazy = Lazy::new(|| -> i32 { panic!("evaluation failed") });
    let _ = catch_unwind(AssertUnwindSafe(|| lazy.force()));

    let second = catch_unwind(AssertUnwindSafe(|| lazy.force()));
    assert!(second.is_err());
}

#[rstest]
fn lazy_poisoned_into_inner_reports_the_error() {
    let lazy = Lazy::new(|| -> i32 { panic!("evaluation failed") });
    let _ = catch_unwind(AssertUnwindSafe(|| lazy.force()));
    assert_eq!(lazy.into_inner(), Err(LazyPoisonedError));
}

// =============================================================================
// map
// =============================================================================

#[rstest]
fn lazy_map_defers_the_whole_chain() {
    let call_count = Cell::new(0);
    let lazy = Lazy::new(|| {
        call_count.set(call_count.get() + 1);
        21
    });

    let doubled = lazy.map(|x| x * 2);
    assert_eq!(call_count.get(), 0);

    assert_eq!(*doubled.force(), 42);
    assert_eq!(call_count.get(), 1);
}

#[rstest]
fn lazy_map_reuses_an_already_cached_value() {
    let lazy = Lazy::with_value(21);
    let doubled = lazy.map(|x| x * 2);
    assert_eq!(*doubled.force(), 42);
}
