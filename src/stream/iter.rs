//! Iterator bridge for streams.

use crate::control::Thunk;
use crate::stream::Stream;
use crate::value::Maybe;

/// Where the iterator's next element will come from.
///
/// A node already forced is held directly; an unforced tail is kept as
/// its thunk so that forcing happens only when the element is demanded.
enum Source<T> {
    Ready(Stream<T>),
    Deferred(Thunk<Stream<T>>),
    Exhausted,
}

/// An iterator over a stream's elements.
///
/// Yields the head of each node in order. The deferred tail of a node is
/// forced only when the following element is actually requested, so
/// `take(n)` on this iterator invokes at most `n - 1` tail computations.
/// Iterating an infinite stream without an external bound never
/// finishes.
///
/// # Examples
///
/// ```rust
/// use corecur::stream::Stream;
///
/// let evens: Vec<i32> = Stream::from_step(0, |x| x + 2)
///     .into_iter()
///     .take(3)
///     .collect();
/// assert_eq!(evens, vec![0, 2, 4]);
/// ```
pub struct StreamIter<T> {
    source: Source<T>,
}

impl<T> StreamIter<T> {
    pub(crate) const fn new(stream: Stream<T>) -> Self {
        Self {
            source: Source::Ready(stream),
        }
    }
}

impl<T> Iterator for StreamIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let node = match std::mem::replace(&mut self.source, Source::Exhausted) {
            Source::Ready(node) => node,
            Source::Deferred(thunk) => thunk(),
            Source::Exhausted => return None,
        };

        let Stream { head, tail } = node;
        self.source = match tail {
            Maybe::Just(thunk) => Source::Deferred(thunk),
            Maybe::Nothing => Source::Exhausted,
        };

        Some(head)
    }
}

impl<T> std::iter::FusedIterator for StreamIter<T> {}
