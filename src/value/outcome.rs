//! Outcome type - a computation result that succeeded or failed.
//!
//! This module provides the `Outcome<T, E>` type, representing either a
//! success value of type `T` or a failure carrying an error of type `E`.
//! It shares the transformation vocabulary of `Maybe` (short-circuiting
//! `map`/`and_then`) and adds a failure branch with attached detail.
//!
//! # Examples
//!
//! ```rust
//! use corecur::value::Outcome;
//!
//! let parsed: Outcome<i32, String> = Outcome::success(42);
//! let doubled = parsed.map_success(|x| x * 2);
//! assert_eq!(doubled, Outcome::success(84));
//!
//! // Capturing a panicking computation into the failure branch
//! let caught = Outcome::try_evaluate(|| -> i32 { panic!("boom") });
//! assert!(caught.is_failure());
//! ```

use std::fmt;
use std::panic::{self, UnwindSafe};

use crate::error::{CaughtError, InvariantViolation};
use crate::value::Maybe;

/// A computation result: either `Success(T)` or `Failure(E)`.
///
/// Exactly one branch is populated. Transformations target one branch and
/// leave the other untouched; the transform for the inactive branch is
/// never invoked.
///
/// # Type Parameters
///
/// * `T` - The type of the success value
/// * `E` - The type of the failure detail, conventionally an
///   error-describing type
///
/// # Examples
///
/// ```rust
/// use corecur::value::Outcome;
///
/// fn checked_half(x: i32) -> Outcome<i32, String> {
///     if x % 2 == 0 {
///         Outcome::success(x / 2)
///     } else {
///         Outcome::failure(format!("{x} is odd"))
///     }
/// }
///
/// assert_eq!(checked_half(8), Outcome::success(4));
/// assert_eq!(checked_half(7), Outcome::failure("7 is odd".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    /// The success branch, holding the produced value.
    Success(T),
    /// The failure branch, holding the error detail.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a successful outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert!(outcome.is_success());
    /// ```
    #[inline]
    pub const fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates a failed outcome carrying the given error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("bad input".to_string());
    /// assert!(outcome.is_failure());
    /// ```
    #[inline]
    pub const fn failure(error: E) -> Self {
        Self::Failure(error)
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if this is a success.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert!(outcome.is_success());
    /// assert!(!outcome.is_failure());
    /// ```
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("nope".to_string());
    /// assert!(outcome.is_failure());
    /// assert!(!outcome.is_success());
    /// ```
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    // =========================================================================
    // Reference Extraction (Non-consuming)
    // =========================================================================

    /// Returns a reference to the success value if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(outcome.success_ref(), Some(&42));
    /// ```
    #[inline]
    pub const fn success_ref(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns a reference to the failure detail if present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("nope".to_string());
    /// assert_eq!(outcome.failure_ref(), Some(&"nope".to_string()));
    /// ```
    #[inline]
    pub const fn failure_ref(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    // =========================================================================
    // Value Extraction (Consuming)
    // =========================================================================

    /// Converts into the success value, consuming the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(outcome.into_success(), Some(42));
    /// ```
    #[inline]
    pub fn into_success(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Converts into the failure detail, consuming the outcome.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::failure("nope".to_string());
    /// assert_eq!(outcome.into_failure(), Some("nope".to_string()));
    /// ```
    #[inline]
    pub fn into_failure(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Failure(error) => Some(error),
        }
    }

    /// Returns the success value, or the given default on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let success: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(success.unwrap_or(0), 42);
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("nope".to_string());
    /// assert_eq!(failure.unwrap_or(0), 0);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => default,
        }
    }

    /// Returns the success value, or computes a default from the failure.
    ///
    /// The supplier is invoked only on failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let failure: Outcome<usize, String> = Outcome::failure("nope".to_string());
    /// assert_eq!(failure.unwrap_or_else(|error| error.len()), 4);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(error) => supplier(error),
        }
    }

    /// Returns the success value, consuming the outcome.
    ///
    /// This is the designated unsafe extraction for `Outcome`; it treats
    /// failure as a fatal programmer error.
    ///
    /// # Panics
    ///
    /// Panics with an invariant-violation message carrying `message` if
    /// this is a failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(outcome.expect_success("validated above"), 42);
    /// ```
    #[inline]
    pub fn expect_success(self, message: &str) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(_) => panic!("{}", InvariantViolation::new(message)),
        }
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the success value, leaving failures
    /// unchanged.
    ///
    /// `function` is never invoked on the failure branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(21);
    /// assert_eq!(outcome.map_success(|x| x * 2), Outcome::success(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("nope".to_string());
    /// assert_eq!(
    ///     failure.map_success(|x| x * 2),
    ///     Outcome::failure("nope".to_string()),
    /// );
    /// ```
    #[inline]
    pub fn map_success<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Outcome::Success(function(value)),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies a function to the failure detail, leaving successes
    /// unchanged.
    ///
    /// `function` is never invoked on the success branch.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("nope".to_string());
    /// let tagged = failure.map_failure(|error| format!("validation: {error}"));
    /// assert_eq!(tagged, Outcome::failure("validation: nope".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<F2, G>(self, function: G) -> Outcome<T, F2>
    where
        G: FnOnce(E) -> F2,
    {
        match self {
            Self::Success(value) => Outcome::Success(value),
            Self::Failure(error) => Outcome::Failure(function(error)),
        }
    }

    /// Sequences a dependent fallible computation.
    ///
    /// If this is a success, returns `function(value)`; otherwise
    /// propagates the failure without invoking `function`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// fn positive(x: i32) -> Outcome<i32, String> {
    ///     if x > 0 { Outcome::success(x) } else { Outcome::failure("not positive".to_string()) }
    /// }
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(outcome.and_then(positive), Outcome::success(42));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Self::Success(value) => function(value),
            Self::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Eliminates the outcome by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// let described = outcome.fold(|v| format!("value: {v}"), |e| format!("error: {e}"));
    /// assert_eq!(described, "value: 42");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_success: F, on_failure: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce(E) -> U,
    {
        match self {
            Self::Success(value) => on_success(value),
            Self::Failure(error) => on_failure(error),
        }
    }

    // =========================================================================
    // Conversion
    // =========================================================================

    /// Collapses the outcome to a `Maybe`, discarding the failure detail.
    ///
    /// A success becomes `Just`, a failure becomes `Nothing`. The reverse
    /// conversion requires the caller to supply an error
    /// (`Maybe::ok_or`), because `Maybe` has no failure detail to
    /// synthesize one from.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::{Maybe, Outcome};
    ///
    /// let success: Outcome<i32, String> = Outcome::success(42);
    /// assert_eq!(success.to_maybe(), Maybe::just(42));
    ///
    /// let failure: Outcome<i32, String> = Outcome::failure("nope".to_string());
    /// assert_eq!(failure.to_maybe(), Maybe::nothing());
    /// ```
    #[inline]
    pub fn to_maybe(self) -> Maybe<T> {
        match self {
            Self::Success(value) => Maybe::Just(value),
            Self::Failure(_) => Maybe::Nothing,
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

impl<E> Outcome<(), E> {
    /// Creates an outcome from a validation condition.
    ///
    /// Returns `Success(())` if the condition holds, otherwise
    /// `Failure(error)`. Useful as the head of an `and_then` chain of
    /// validations.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let bounds = (3, 9);
    /// let checked = Outcome::ensure(bounds.0 <= bounds.1, "interval bounds invalid");
    /// assert_eq!(checked, Outcome::success(()));
    ///
    /// let checked = Outcome::ensure(false, "interval bounds invalid");
    /// assert_eq!(checked, Outcome::failure("interval bounds invalid"));
    /// ```
    #[inline]
    pub fn ensure(condition: bool, error: E) -> Self {
        if condition {
            Self::Success(())
        } else {
            Self::Failure(error)
        }
    }
}

// =============================================================================
// Panic-capturing Evaluation
// =============================================================================

impl<T> Outcome<T, CaughtError> {
    /// Invokes a computation, capturing any panic into the failure branch.
    ///
    /// Success or failure is determined solely by whether the computation
    /// unwound, never by the produced value: a computation that returns
    /// `0`, `false`, or any other "empty-looking" value is still a
    /// success. A captured panic is normalized into [`CaughtError`]: a
    /// string payload keeps its message, any other payload becomes the
    /// uniform non-error classification.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let fine = Outcome::try_evaluate(|| 42);
    /// assert_eq!(fine.unwrap_or(0), 42);
    ///
    /// let caught = Outcome::try_evaluate(|| -> i32 { panic!("boom") });
    /// assert_eq!(caught.into_failure().unwrap().message(), "boom");
    /// ```
    pub fn try_evaluate<F>(operation: F) -> Self
    where
        F: FnOnce() -> T + UnwindSafe,
    {
        match panic::catch_unwind(operation) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(CaughtError::from_panic(payload)),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: fmt::Debug, E: fmt::Debug> fmt::Debug for Outcome<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success(value) => formatter.debug_tuple("Success").field(value).finish(),
            Self::Failure(error) => formatter.debug_tuple("Failure").field(error).finish(),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    /// Converts a std `Result` to an `Outcome`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let parsed: Result<i32, std::num::ParseIntError> = "42".parse();
    /// let outcome: Outcome<_, _> = parsed.into();
    /// assert_eq!(outcome.unwrap_or(0), 42);
    /// ```
    #[inline]
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    /// Converts an `Outcome` to a std `Result`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Outcome;
    ///
    /// let outcome: Outcome<i32, String> = Outcome::success(42);
    /// let result: Result<i32, String> = outcome.into();
    /// assert_eq!(result, Ok(42));
    /// ```
    #[inline]
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
