//! Corecursive lazy streams.
//!
//! This module provides [`Stream`], a conceptually infinite ordered
//! sequence: each node holds an eagerly computed head value plus a
//! deferred computation producing the next node, wrapped in
//! [`Maybe`](crate::value::Maybe) so finite streams can terminate.
//!
//! Infinity is safe because consumption is bounded: [`Stream::take`]
//! truncates the deferred tail after a fixed number of elements, and
//! [`Stream::take_eagerly`] materializes at most that many elements into
//! a `Vec`. Self-referential sequences such as the Fibonacci numbers are
//! built by [`Stream::unfold`], which threads a finite evolving state
//! through closures instead of holding cyclic references.
//!
//! # Examples
//!
//! ```rust
//! use corecur::stream::Stream;
//!
//! // An infinite arithmetic progression of odd numbers
//! let odds = Stream::from_step(1, |x| x + 2);
//! assert_eq!(odds.take_eagerly(5), vec![1, 3, 5, 7, 9]);
//!
//! // The canonical corecursive definition
//! let fibonacci = Stream::fibonacci();
//! assert_eq!(fibonacci.take_eagerly(7), vec![0, 1, 1, 2, 3, 5, 8]);
//!
//! // A bounded prefix of an infinite stream is itself a (finite) stream
//! let bounded = Stream::repeat(5).take(3);
//! assert_eq!(bounded.to_vec(), vec![5, 5, 5]);
//! ```

mod iter;
mod node;

pub use iter::StreamIter;
pub use node::Stream;
