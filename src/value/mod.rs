//! Value types for presence/absence and success/failure.
//!
//! This module provides the two core value monads:
//!
//! - [`Maybe`]: a value that is either present (`Just`) or absent
//!   (`Nothing`)
//! - [`Outcome`]: a computation result that is either a `Success` value or
//!   a `Failure` carrying an error
//!
//! Both are immutable tagged unions with short-circuiting transformation
//! operations: mapping an absent/failing value propagates the empty state
//! unchanged without invoking the supplied function.
//!
//! # Examples
//!
//! ## Optional values
//!
//! ```rust
//! use corecur::value::Maybe;
//!
//! let present = Maybe::just(7);
//! assert_eq!(present.map(|x| x * 2), Maybe::just(14));
//! assert_eq!(present.unwrap_or(99), 7);
//!
//! let absent: Maybe<i32> = Maybe::nothing();
//! assert_eq!(absent.unwrap_or(99), 99);
//! ```
//!
//! ## Fallible computations
//!
//! ```rust
//! use corecur::value::Outcome;
//!
//! let result = Outcome::try_evaluate(|| "17".parse::<i32>().unwrap());
//! assert!(result.is_success());
//! assert_eq!(result.unwrap_or(0), 17);
//! ```

mod maybe;
mod outcome;

pub use maybe::Maybe;
pub use outcome::Outcome;
