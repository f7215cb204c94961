//! # corecur
//!
//! Optional and result value monads plus corecursive lazy streams.
//!
//! ## Overview
//!
//! This library provides a small algebraic core for value-oriented
//! programming:
//!
//! - **Value Types**: [`Maybe`] for presence/absence, [`Outcome`] for
//!   success/failure with an attached error
//! - **Control Structures**: [`Lazy`] memoized thunks and the [`Thunk`]
//!   deferred-computation alias
//! - **Streams**: [`Stream`], a conceptually infinite self-referential
//!   sequence with bounded materialization (`take`, `take_eagerly`)
//!
//! All types are immutable values: every transformation returns a new
//! value, no operation mutates its receiver, and failure propagation is
//! explicit (short-circuiting `map`/`and_then`, typed failure branches,
//! one designated unsafe extraction per type).
//!
//! ## Feature Flags
//!
//! - `value`: `Maybe` and `Outcome`
//! - `control`: `Lazy` and `Thunk`
//! - `stream`: `Stream` (requires `value` and `control`)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use corecur::prelude::*;
//!
//! let odds = Stream::from_step(1, |x| x + 2);
//! assert_eq!(odds.take_eagerly(5), vec![1, 3, 5, 7, 9]);
//!
//! let fibonacci = Stream::fibonacci();
//! assert_eq!(fibonacci.take_eagerly(7), vec![0, 1, 1, 2, 3, 5, 8]);
//! ```
//!
//! [`Maybe`]: value::Maybe
//! [`Outcome`]: value::Outcome
//! [`Lazy`]: control::Lazy
//! [`Thunk`]: control::Thunk
//! [`Stream`]: stream::Stream

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use corecur::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::*;

    #[cfg(feature = "value")]
    pub use crate::value::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "stream")]
    pub use crate::stream::*;
}

pub mod error;

#[cfg(feature = "value")]
pub mod value;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "stream")]
pub mod stream;
