//! Error types shared by the value and control modules.
//!
//! Three conditions are distinguished, matching the library's error
//! taxonomy:
//!
//! - **Absence** is not an error. `Maybe::Nothing` is a first-class empty
//!   state and never produces a value of these types on its own.
//! - **Invariant violations** are programmer errors: an unsafe extraction
//!   (`Maybe::expect`, `Outcome::expect_success`) performed on the empty
//!   or failing branch. They surface as panics whose message is the
//!   `Display` form of [`InvariantViolation`].
//! - **Caught failures** are panics captured at an `Outcome::try_evaluate`
//!   boundary and normalized into the uniform [`CaughtError`] shape
//!   (message plus optional cause), so the failure branch never carries an
//!   unclassified payload.

use std::any::Any;

use thiserror::Error;

/// Message describing a panic whose payload could not be classified.
///
/// `try_evaluate` produces this when the captured panic payload is neither
/// a `String` nor a `&str`, so the failure branch still carries a uniform
/// error representation.
pub const NON_ERROR_PANIC_MESSAGE: &str = "caught a panic whose payload is not an error message";

/// A violated invariant, raised by unsafe extraction operations.
///
/// This type is the panic payload format of `Maybe::expect` and
/// `Outcome::expect_success`: the panic message is this type's `Display`
/// output. It is intended to be fatal and unhandled in normal operation;
/// callers who want a recoverable failure should use the total extraction
/// operations (`unwrap_or`, `unwrap_or_else`) instead.
///
/// # Examples
///
/// ```rust
/// use corecur::error::InvariantViolation;
///
/// let violation = InvariantViolation::new("heap index out of range");
/// assert_eq!(
///     violation.to_string(),
///     "invariant violation: heap index out of range",
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invariant violation: {message}")]
pub struct InvariantViolation {
    message: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation carrying the given message.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the message describing the violated invariant.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A failure captured and classified at a `try_evaluate` boundary.
///
/// Every failure produced by `Outcome::try_evaluate` has this shape: a
/// human-readable message plus an optional underlying cause. The original
/// cause is never discarded when wrapping an error value.
///
/// # Examples
///
/// ```rust
/// use corecur::error::CaughtError;
///
/// let error = CaughtError::new("interval bounds invalid");
/// assert_eq!(error.to_string(), "interval bounds invalid");
/// assert!(std::error::Error::source(&error).is_none());
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct CaughtError {
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl CaughtError {
    /// Creates a caught error from a message, with no underlying cause.
    #[inline]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Creates a caught error wrapping an underlying cause.
    ///
    /// The cause remains reachable through `std::error::Error::source`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::error::CaughtError;
    /// use std::error::Error;
    ///
    /// let io = std::io::Error::other("disk on fire");
    /// let error = CaughtError::with_cause("evaluation failed", io);
    ///
    /// assert_eq!(error.to_string(), "evaluation failed");
    /// assert!(error.source().is_some());
    /// ```
    #[inline]
    pub fn with_cause(
        message: impl Into<String>,
        cause: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            cause: Some(Box::new(cause)),
        }
    }

    /// Classifies a captured panic payload into a caught error.
    ///
    /// String payloads (`panic!("...")` and formatted panics) keep their
    /// message. Any other payload type cannot be interpreted as an error
    /// description and becomes the uniform
    /// [`NON_ERROR_PANIC_MESSAGE`] classification.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => NON_ERROR_PANIC_MESSAGE.to_string(),
            },
        };

        Self::new(message)
    }

    /// Returns the failure message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl PartialEq for CaughtError {
    /// Compares by message only; causes are opaque trait objects.
    fn eq(&self, other: &Self) -> bool {
        self.message == other.message
    }
}

/// Error returned when consuming a poisoned `Lazy` value.
///
/// A `Lazy` becomes poisoned when its deferred computation panics; the
/// cached slot then holds neither a value nor a computation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("lazy value has been poisoned by a panicking computation")]
pub struct LazyPoisonedError;
