//! Control structures for deferred evaluation.
//!
//! This module provides the machinery that postpones *when* a pure
//! computation runs, without introducing any concurrency:
//!
//! - [`Lazy`]: a deferred computation with a memoizing cache slot; the
//!   computation runs at most once
//! - [`Thunk`]: a shareable zero-argument deferred computation that may be
//!   re-invoked; the representation of stream tails
//!
//! # Examples
//!
//! ## Memoized evaluation
//!
//! ```rust
//! use corecur::control::Lazy;
//!
//! let lazy = Lazy::new(|| {
//!     println!("Computing...");
//!     42
//! });
//! // "Computing..." is not printed yet
//!
//! let value = lazy.force();
//! // Now "Computing..." is printed and value is 42
//! assert_eq!(*value, 42);
//! ```
//!
//! ## Shareable deferred computation
//!
//! ```rust
//! use corecur::control::Thunk;
//! use std::rc::Rc;
//!
//! let thunk: Thunk<i32> = Rc::new(|| 40 + 2);
//! assert_eq!(thunk(), 42);
//! assert_eq!(thunk(), 42); // re-invocable, recomputes
//! ```

mod lazy;
mod thunk;

pub use lazy::{Lazy, LazyState};
pub use thunk::Thunk;
