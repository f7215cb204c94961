//! Lazy evaluation with memoization.
//!
//! This module provides the `Lazy<T, F>` type, a deferred computation
//! plus a cache slot. The wrapped computation is invoked at most once;
//! subsequent accesses return the cached value.
//!
//! # Examples
//!
//! ```rust
//! use corecur::control::Lazy;
//!
//! let lazy = Lazy::new(|| {
//!     println!("Computing...");
//!     42
//! });
//!
//! // No output yet - computation is deferred
//! println!("Created lazy value");
//!
//! // Now "Computing..." is printed
//! let value = lazy.force();
//! assert_eq!(*value, 42);
//!
//! // No recomputation - result is memoized
//! let value2 = lazy.force();
//! assert_eq!(*value2, 42);
//! ```

use std::cell::{Ref, RefCell};
use std::fmt;

use crate::error::LazyPoisonedError;

/// The cache slot of a [`Lazy`] value.
///
/// Tracks whether the deferred computation is still pending, has produced
/// a cached value, or panicked partway through (leaving the slot
/// poisoned).
#[derive(Debug)]
pub enum LazyState<T, F> {
    /// The computation has not run yet. Contains the computation.
    Unevaluated(F),
    /// The computation has run. Contains the cached value.
    Evaluated(T),
    /// The computation panicked. The lazy value is now unusable.
    Poisoned,
}

/// A deferred computation with a memoizing cache slot.
///
/// `Lazy<T, F>` postpones its computation until the first call to
/// [`force`](Self::force). The result is cached; every later access is a
/// cache hit and the computation never runs a second time.
///
/// # Type Parameters
///
/// * `T` - The type of the computed value
/// * `F` - The type of the deferred computation (defaults to `fn() -> T`)
///
/// # Thread Safety
///
/// This type is NOT thread-safe; the single-evaluation guarantee holds
/// only under single-threaded access. A concurrent consumer would need
/// the cache-check-then-write sequence replaced with an atomic
/// compare-and-set or a mutex.
///
/// # Examples
///
/// ```rust
/// use corecur::control::Lazy;
/// use std::cell::Cell;
///
/// let call_count = Cell::new(0);
/// let lazy = Lazy::new(|| {
///     call_count.set(call_count.get() + 1);
///     42
/// });
///
/// assert_eq!(call_count.get(), 0); // Not called yet
///
/// let _ = lazy.force();
/// assert_eq!(call_count.get(), 1); // Called once
///
/// let _ = lazy.force();
/// assert_eq!(call_count.get(), 1); // Still only once - memoized
/// ```
pub struct Lazy<T, F = fn() -> T> {
    state: RefCell<LazyState<T, F>>,
}

impl<T, F: FnOnce() -> T> Lazy<T, F> {
    /// Creates a new lazy value wrapping the given computation.
    ///
    /// The computation will not run until [`force`](Self::force) is
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| {
    ///     println!("Evaluating...");
    ///     42
    /// });
    /// // Nothing printed yet
    /// ```
    #[inline]
    pub fn new(computation: F) -> Self {
        Self {
            state: RefCell::new(LazyState::Unevaluated(computation)),
        }
    }

    /// Forces evaluation and returns a reference to the value.
    ///
    /// On the first call the deferred computation runs and its result is
    /// cached; subsequent calls return the cached value without
    /// recomputation.
    ///
    /// # Returns
    ///
    /// A `Ref<'_, T>` to the computed value, borrowing from the internal
    /// cache slot.
    ///
    /// # Panics
    ///
    /// - If the computation panics, the lazy value becomes poisoned and
    ///   all future calls to `force()` panic.
    /// - If the value is already poisoned from a previous panic.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| 42);
    /// assert_eq!(*lazy.force(), 42);
    /// ```
    pub fn force(&self) -> Ref<'_, T> {
        // Check with a short borrow so the borrow is not held while the
        // computation runs.
        let needs_evaluation = {
            let state = self.state.borrow();
            match &*state {
                LazyState::Evaluated(_) => false,
                LazyState::Poisoned => panic!("{}", LazyPoisonedError),
                LazyState::Unevaluated(_) => true,
            }
        };

        if needs_evaluation {
            self.evaluate();
        }

        Ref::map(self.state.borrow(), |state| match state {
            LazyState::Evaluated(value) => value,
            _ => panic!("lazy value must be evaluated at this point"),
        })
    }

    /// Runs the deferred computation and caches its result.
    ///
    /// The computation is taken out of the slot and the slot transitions
    /// to `Poisoned` first, so a panicking computation leaves the slot
    /// poisoned rather than half-initialized.
    fn evaluate(&self) {
        let mut state = self.state.borrow_mut();

        match &*state {
            LazyState::Evaluated(_) => return,
            LazyState::Poisoned => panic!("{}", LazyPoisonedError),
            LazyState::Unevaluated(_) => {}
        }

        let LazyState::Unevaluated(computation) =
            std::mem::replace(&mut *state, LazyState::Poisoned)
        else {
            unreachable!()
        };

        let value = computation();

        *state = LazyState::Evaluated(value);
    }

    /// Consumes the lazy value and returns the computed value.
    ///
    /// Forces evaluation if the computation has not run yet.
    ///
    /// # Errors
    ///
    /// Returns [`LazyPoisonedError`] if the slot was poisoned by an
    /// earlier panicking evaluation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| 42);
    /// assert_eq!(lazy.into_inner(), Ok(42));
    /// ```
    pub fn into_inner(self) -> Result<T, LazyPoisonedError> {
        match self.state.into_inner() {
            LazyState::Evaluated(value) => Ok(value),
            LazyState::Unevaluated(computation) => Ok(computation()),
            LazyState::Poisoned => Err(LazyPoisonedError),
        }
    }

    /// Applies a function to the lazy value, producing a new lazy value.
    ///
    /// The resulting lazy value computes the original value and then
    /// applies the function when forced. Nothing runs until then.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| 21);
    /// let doubled = lazy.map(|x| x * 2);
    ///
    /// assert_eq!(*doubled.force(), 42);
    /// ```
    pub fn map<U, G>(self, function: G) -> Lazy<U, impl FnOnce() -> U>
    where
        G: FnOnce(T) -> U,
    {
        Lazy::new(move || {
            let value = match self.state.into_inner() {
                LazyState::Evaluated(value) => value,
                LazyState::Unevaluated(computation) => computation(),
                LazyState::Poisoned => panic!("{}", LazyPoisonedError),
            };
            function(value)
        })
    }
}

impl<T> Lazy<T, fn() -> T> {
    /// Creates a lazy value that is already evaluated.
    ///
    /// Useful when an already-available value must flow through an API
    /// that expects laziness.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::control::Lazy;
    ///
    /// let lazy = Lazy::with_value(42);
    /// assert!(lazy.is_evaluated());
    /// assert_eq!(*lazy.force(), 42);
    /// ```
    #[inline]
    pub fn with_value(value: T) -> Self {
        Self {
            state: RefCell::new(LazyState::Evaluated(value)),
        }
    }
}

impl<T, F> Lazy<T, F> {
    /// Returns a reference to the value if it has already been evaluated.
    ///
    /// Unlike [`force`](Self::force), this never triggers evaluation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| 42);
    /// assert!(lazy.peek().is_none()); // Not evaluated yet
    ///
    /// let _ = lazy.force();
    /// assert!(lazy.peek().is_some()); // Now cached
    /// ```
    pub fn peek(&self) -> Option<Ref<'_, T>> {
        let state = self.state.borrow();
        if matches!(&*state, LazyState::Evaluated(_)) {
            Some(Ref::map(state, |s| match s {
                LazyState::Evaluated(value) => value,
                _ => unreachable!(),
            }))
        } else {
            None
        }
    }

    /// Returns whether the computation has run and its result is cached.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::control::Lazy;
    ///
    /// let lazy = Lazy::new(|| 42);
    /// assert!(!lazy.is_evaluated());
    ///
    /// let _ = lazy.force();
    /// assert!(lazy.is_evaluated());
    /// ```
    #[inline]
    pub fn is_evaluated(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Evaluated(_))
    }

    /// Returns whether the lazy value has been poisoned.
    ///
    /// A lazy value becomes poisoned if its computation panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::control::Lazy;
    /// use std::panic::{AssertUnwindSafe, catch_unwind};
    ///
    /// let lazy = Lazy::new(|| panic!("evaluation failed"));
    ///
    /// let _ = catch_unwind(AssertUnwindSafe(|| lazy.force()));
    ///
    /// assert!(lazy.is_poisoned());
    /// ```
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.state.borrow(), LazyState::Poisoned)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Default> Default for Lazy<T> {
    /// Creates a lazy value that computes `T::default()`.
    fn default() -> Self {
        Self::new(T::default)
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Lazy<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        match &*state {
            LazyState::Evaluated(value) => formatter.debug_tuple("Lazy").field(value).finish(),
            LazyState::Unevaluated(_) => formatter.debug_tuple("Lazy").field(&"<unevaluated>").finish(),
            LazyState::Poisoned => formatter.debug_tuple("Lazy").field(&"<poisoned>").finish(),
        }
    }
}

// Note: Deref is intentionally not implemented. force() returns
// Ref<'_, T> from the internal RefCell, which cannot be flattened to &T
// without violating borrow tracking. Access stays explicit.
