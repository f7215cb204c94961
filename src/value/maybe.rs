//! Maybe type - a value that is present or absent.
//!
//! This module provides the `Maybe<T>` type, the library's canonical
//! optional value. Absence is a distinct variant tag, never a sentinel
//! baked into `T`, so "a present value that happens to be zero or false"
//! can never be confused with "no value".
//!
//! # Examples
//!
//! ```rust
//! use corecur::value::Maybe;
//!
//! // Creating Maybe values
//! let present = Maybe::just(42);
//! let absent: Maybe<i32> = Maybe::nothing();
//!
//! // Transformation short-circuits on absence
//! assert_eq!(present.map(|x| x + 1), Maybe::just(43));
//! assert_eq!(absent.map(|x| x + 1), Maybe::nothing());
//!
//! // Total extraction
//! assert_eq!(present.unwrap_or(0), 42);
//! assert_eq!(absent.unwrap_or(0), 0);
//! ```

use std::fmt;

use crate::error::InvariantViolation;

/// A value that is either present (`Just`) or absent (`Nothing`).
///
/// `Maybe<T>` is the library's standard "might not have a value" type:
/// collection lookups, stream tails, and lazy cache slots all use it.
/// It is an immutable value type; every transformation returns a new
/// `Maybe` and never mutates the receiver.
///
/// The only operation that can fail is [`expect`](Self::expect), the
/// designated unsafe extraction; everything else is total.
///
/// # Examples
///
/// ```rust
/// use corecur::value::Maybe;
///
/// let name = Maybe::just("ada");
/// let shouted = name.map(|n| n.to_uppercase());
/// assert_eq!(shouted, Maybe::just("ADA".to_string()));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    /// A present value.
    Just(T),
    /// The absent state. Not an error; a first-class empty value.
    Nothing,
}

impl<T> Maybe<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a `Maybe` holding the given value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// let value = Maybe::just(42);
    /// assert!(value.is_just());
    /// ```
    #[inline]
    pub const fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Creates an absent `Maybe`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// let value: Maybe<i32> = Maybe::nothing();
    /// assert!(value.is_nothing());
    /// ```
    #[inline]
    pub const fn nothing() -> Self {
        Self::Nothing
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns `true` if a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// assert!(Maybe::just(42).is_just());
    /// assert!(!Maybe::<i32>::nothing().is_just());
    /// ```
    #[inline]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` if no value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// assert!(Maybe::<i32>::nothing().is_nothing());
    /// assert!(!Maybe::just(42).is_nothing());
    /// ```
    #[inline]
    pub const fn is_nothing(&self) -> bool {
        matches!(self, Self::Nothing)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies a function to the contained value if present.
    ///
    /// Absence propagates unchanged: `function` is never invoked on
    /// `Nothing`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// assert_eq!(Maybe::just(21).map(|x| x * 2), Maybe::just(42));
    ///
    /// let absent: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(absent.map(|x| x * 2), Maybe::nothing());
    /// ```
    #[inline]
    pub fn map<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(function(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Sequences a dependent optional computation.
    ///
    /// If this is `Just(v)`, returns `function(v)`; otherwise propagates
    /// `Nothing` without invoking `function`. This is the monadic bind,
    /// used to chain computations that each may produce no value, without
    /// nesting `Maybe<Maybe<U>>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// fn half(x: i32) -> Maybe<i32> {
    ///     if x % 2 == 0 { Maybe::just(x / 2) } else { Maybe::nothing() }
    /// }
    ///
    /// assert_eq!(Maybe::just(8).and_then(half), Maybe::just(4));
    /// assert_eq!(Maybe::just(7).and_then(half), Maybe::nothing());
    /// assert_eq!(Maybe::nothing().and_then(half), Maybe::nothing());
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, function: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => function(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Combines two `Maybe` values with a function.
    ///
    /// The result is present only if both inputs are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// let sum = Maybe::map2(Maybe::just(20), Maybe::just(22), |a, b| a + b);
    /// assert_eq!(sum, Maybe::just(42));
    ///
    /// let missing: Maybe<i32> = Maybe::nothing();
    /// let sum = Maybe::map2(Maybe::just(20), missing, |a, b| a + b);
    /// assert_eq!(sum, Maybe::nothing());
    /// ```
    #[inline]
    pub fn map2<B, C, F>(first: Self, second: Maybe<B>, function: F) -> Maybe<C>
    where
        F: FnOnce(T, B) -> C,
    {
        first.and_then(|a| second.map(|b| function(a, b)))
    }

    /// Eliminates the `Maybe` by applying one of two functions.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// let described = Maybe::just(42).fold(|x| x.to_string(), || "none".to_string());
    /// assert_eq!(described, "42");
    ///
    /// let described = Maybe::<i32>::nothing().fold(|x| x.to_string(), || "none".to_string());
    /// assert_eq!(described, "none");
    /// ```
    #[inline]
    pub fn fold<U, F, G>(self, on_just: F, on_nothing: G) -> U
    where
        F: FnOnce(T) -> U,
        G: FnOnce() -> U,
    {
        match self {
            Self::Just(value) => on_just(value),
            Self::Nothing => on_nothing(),
        }
    }

    /// Calls a function with the contained value if present, returning the
    /// `Maybe` unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    /// use std::cell::Cell;
    ///
    /// let seen = Cell::new(0);
    /// let value = Maybe::just(42).inspect(|v| seen.set(*v));
    /// assert_eq!(seen.get(), 42);
    /// assert_eq!(value, Maybe::just(42));
    /// ```
    #[inline]
    pub fn inspect<F>(self, function: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Just(value) = &self {
            function(value);
        }

        self
    }

    // =========================================================================
    // Extraction
    // =========================================================================

    /// Returns the contained value, or the given default if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// assert_eq!(Maybe::just(7).unwrap_or(99), 7);
    /// assert_eq!(Maybe::nothing().unwrap_or(99), 99);
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the contained value, or computes a default if absent.
    ///
    /// The supplier is invoked only on absence, so an expensive default is
    /// never paid for when a value is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// assert_eq!(Maybe::just(7).unwrap_or_else(|| 99), 7);
    /// assert_eq!(Maybe::nothing().unwrap_or_else(|| 99), 99);
    /// ```
    #[inline]
    pub fn unwrap_or_else<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => supplier(),
        }
    }

    /// Returns the contained value, consuming the `Maybe`.
    ///
    /// This is the designated unsafe extraction: absence is escalated to a
    /// fatal condition at the caller's explicit request. All other
    /// extraction operations are total.
    ///
    /// # Panics
    ///
    /// Panics with an invariant-violation message carrying `message` if
    /// the value is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// let value = Maybe::just(42).expect("value was just constructed");
    /// assert_eq!(value, 42);
    /// ```
    #[inline]
    pub fn expect(self, message: &str) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => panic!("{}", InvariantViolation::new(message)),
        }
    }

    // =========================================================================
    // Adapters
    // =========================================================================

    /// Converts from `&Maybe<T>` to `Maybe<&T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// let text = Maybe::just("hello".to_string());
    /// let length = text.as_ref().map(|s| s.len());
    /// assert_eq!(length, Maybe::just(5));
    /// assert!(text.is_just());
    /// ```
    #[inline]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(value) => Maybe::Just(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Converts to an `Outcome`, supplying the failure detail for absence.
    ///
    /// `Maybe` carries no error information of its own, so the caller
    /// provides the error used when the value is absent. (The reverse
    /// conversion, `Outcome::to_maybe`, needs no such argument.)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::{Maybe, Outcome};
    ///
    /// let found = Maybe::just(42).ok_or("not found");
    /// assert_eq!(found, Outcome::success(42));
    ///
    /// let missing: Maybe<i32> = Maybe::nothing();
    /// assert_eq!(missing.ok_or("not found"), Outcome::failure("not found"));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, error: E) -> crate::value::Outcome<T, E> {
        match self {
            Self::Just(value) => crate::value::Outcome::Success(value),
            Self::Nothing => crate::value::Outcome::Failure(error),
        }
    }
}

impl<T: Default> Maybe<T> {
    /// Returns the contained value, or `T::default()` if absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// assert_eq!(Maybe::just(7).unwrap_or_default(), 7);
    /// assert_eq!(Maybe::<i32>::nothing().unwrap_or_default(), 0);
    /// ```
    #[inline]
    pub fn unwrap_or_default(self) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => T::default(),
        }
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for Maybe<T> {
    /// The default `Maybe` is absent.
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(value) => formatter.debug_tuple("Just").field(value).finish(),
            Self::Nothing => formatter.write_str("Nothing"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<T> From<Option<T>> for Maybe<T> {
    /// Converts a std `Option` to a `Maybe`.
    ///
    /// Presence is determined solely by the `Option` tag; the payload
    /// value is never inspected. `Some(0)` and `Some(false)` are present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// assert_eq!(Maybe::from(Some(false)), Maybe::just(false));
    /// assert_eq!(Maybe::<i32>::from(None), Maybe::nothing());
    /// ```
    #[inline]
    fn from(option: Option<T>) -> Self {
        match option {
            Some(value) => Self::Just(value),
            None => Self::Nothing,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    /// Converts a `Maybe` to a std `Option`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::value::Maybe;
    ///
    /// let option: Option<i32> = Maybe::just(42).into();
    /// assert_eq!(option, Some(42));
    /// ```
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        match maybe {
            Maybe::Just(value) => Some(value),
            Maybe::Nothing => None,
        }
    }
}
