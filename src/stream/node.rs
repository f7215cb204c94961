//! Stream nodes and their construction/consumption operations.

use std::fmt;
use std::rc::Rc;

use crate::control::Thunk;
use crate::stream::StreamIter;
use crate::value::Maybe;

/// A node of a conceptually infinite, lazily produced sequence.
///
/// Each node pairs an eagerly computed `head` with a deferred computation
/// producing the next node. The head is strict: it exists by the time the
/// node exists. Only the tail is deferred, and a tail of
/// `Maybe::Nothing` marks the end of a finite stream.
///
/// Tail thunks are re-invocable and not memoized: forcing the same tail
/// twice reproduces an equivalent node but may recompute it. Every node
/// is an independent immutable value; there is no shared mutable backing
/// store, and no node holds a reference to a node that has not been
/// constructed yet. Self-reference is expressed through closures over a
/// finite evolving state, never through cyclic object references.
///
/// # Examples
///
/// ```rust
/// use corecur::stream::Stream;
///
/// let naturals = Stream::from_step(0, |x| x + 1);
/// assert_eq!(naturals.take_eagerly(4), vec![0, 1, 2, 3]);
///
/// // take() bounds the stream itself, so later traversal can never
/// // run past the boundary no matter how much is requested.
/// let bounded = naturals.take(3);
/// assert_eq!(bounded.take_eagerly(100), vec![0, 1, 2]);
/// ```
pub struct Stream<T> {
    pub(crate) head: T,
    pub(crate) tail: Maybe<Thunk<Stream<T>>>,
}

impl<T> Stream<T> {
    // =========================================================================
    // Construction
    // =========================================================================

    /// Creates a single-element (terminal) stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// let lone = Stream::single(42);
    /// assert!(lone.is_terminal());
    /// assert_eq!(lone.to_vec(), vec![42]);
    /// ```
    #[inline]
    pub const fn single(head: T) -> Self {
        Self {
            head,
            tail: Maybe::Nothing,
        }
    }

    /// Creates a stream from a head and a deferred rest-of-sequence.
    ///
    /// The `rest` computation is not invoked here; it runs each time the
    /// tail is forced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// let pair = Stream::cons(1, || Stream::single(2));
    /// assert_eq!(pair.to_vec(), vec![1, 2]);
    /// ```
    #[inline]
    pub fn cons<F>(head: T, rest: F) -> Self
    where
        F: Fn() -> Self + 'static,
    {
        let tail: Thunk<Self> = Rc::new(rest);
        Self {
            head,
            tail: Maybe::Just(tail),
        }
    }

    /// Creates an infinite progression by repeatedly applying a step
    /// function to a seed.
    ///
    /// Node `n` has head `step` applied `n` times to `seed`. The head of
    /// each node is computed when that node is constructed; the rest of
    /// the progression stays deferred.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// let odds = Stream::from_step(1, |x| x + 2);
    /// assert_eq!(odds.take_eagerly(5), vec![1, 3, 5, 7, 9]);
    /// ```
    pub fn from_step<F>(seed: T, step: F) -> Self
    where
        T: Clone + 'static,
        F: Fn(T) -> T + 'static,
    {
        Self::step_from(seed, Rc::new(step))
    }

    fn step_from(seed: T, step: Rc<dyn Fn(T) -> T>) -> Self
    where
        T: Clone + 'static,
    {
        let successor = seed.clone();
        let tail: Thunk<Self> = Rc::new(move || {
            Self::step_from(step(successor.clone()), Rc::clone(&step))
        });

        Self {
            head: seed,
            tail: Maybe::Just(tail),
        }
    }

    /// Creates an infinite stream repeating a constant value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// assert_eq!(Stream::repeat(5).take_eagerly(3), vec![5, 5, 5]);
    /// ```
    pub fn repeat(value: T) -> Self
    where
        T: Clone + 'static,
    {
        let successor = value.clone();
        let tail: Thunk<Self> = Rc::new(move || Self::repeat(successor.clone()));

        Self {
            head: value,
            tail: Maybe::Just(tail),
        }
    }

    /// Creates an infinite stream whose every head is a fresh invocation
    /// of a producer.
    ///
    /// Used for independently produced value sources (a random generator,
    /// a counter behind a cell). The producer runs once per node, at node
    /// construction time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let ticket = Rc::new(Cell::new(0));
    /// let source = Rc::clone(&ticket);
    /// let tickets = Stream::generate(move || {
    ///     source.set(source.get() + 1);
    ///     source.get()
    /// });
    ///
    /// assert_eq!(tickets.take_eagerly(3), vec![1, 2, 3]);
    /// ```
    pub fn generate<F>(producer: F) -> Self
    where
        T: 'static,
        F: Fn() -> T + 'static,
    {
        Self::generate_shared(Rc::new(producer))
    }

    fn generate_shared(producer: Rc<dyn Fn() -> T>) -> Self
    where
        T: 'static,
    {
        let head = producer();
        let tail: Thunk<Self> = Rc::new(move || Self::generate_shared(Rc::clone(&producer)));

        Self {
            head,
            tail: Maybe::Just(tail),
        }
    }

    /// Creates an infinite stream corecursively from an evolving state.
    ///
    /// `advance` maps the current state to the element to emit and the
    /// state for the rest of the sequence. Each node owns the closure
    /// producing its successor, so no cyclic references arise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// // Fibonacci: state (f0, f1), emit f0, advance to (f1, f0 + f1)
    /// let fibonacci = Stream::unfold((0u64, 1u64), |(f0, f1)| (f0, (f1, f0 + f1)));
    /// assert_eq!(fibonacci.take_eagerly(7), vec![0, 1, 1, 2, 3, 5, 8]);
    /// ```
    pub fn unfold<S, F>(seed: S, advance: F) -> Self
    where
        T: 'static,
        S: Clone + 'static,
        F: Fn(S) -> (T, S) + 'static,
    {
        Self::unfold_shared(seed, Rc::new(advance))
    }

    fn unfold_shared<S>(seed: S, advance: Rc<dyn Fn(S) -> (T, S)>) -> Self
    where
        T: 'static,
        S: Clone + 'static,
    {
        let (head, successor) = advance(seed);
        let tail: Thunk<Self> = Rc::new(move || {
            Self::unfold_shared(successor.clone(), Rc::clone(&advance))
        });

        Self {
            head,
            tail: Maybe::Just(tail),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns a reference to this node's head value.
    ///
    /// The head always exists; it was computed when the node was
    /// constructed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// assert_eq!(*Stream::repeat(5).head(), 5);
    /// ```
    #[inline]
    pub const fn head(&self) -> &T {
        &self.head
    }

    /// Returns `true` if this node terminates the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// assert!(Stream::single(1).is_terminal());
    /// assert!(!Stream::repeat(1).is_terminal());
    /// ```
    #[inline]
    pub const fn is_terminal(&self) -> bool {
        self.tail.is_nothing()
    }

    /// Forces the tail once, producing the next node if one exists.
    ///
    /// Each call re-invokes the tail computation; advancing is idempotent
    /// in observable result but not memoized.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// let naturals = Stream::from_step(0, |x| x + 1);
    /// let second = naturals.advance().expect("infinite stream has a next node");
    /// assert_eq!(*second.head(), 1);
    /// ```
    #[inline]
    pub fn advance(&self) -> Maybe<Self> {
        self.tail.as_ref().map(|thunk| thunk())
    }
}

impl<T: Clone + 'static> Stream<T> {
    // =========================================================================
    // Bounded Consumption
    // =========================================================================

    /// Returns a stream truncated to at most `count` elements.
    ///
    /// The returned stream reuses the same deferred-tail mechanism but
    /// forces the tail to `Nothing` once `count` elements have been
    /// produced, so re-traversal never invokes the original unbounded
    /// source beyond the boundary.
    ///
    /// A node always carries one eager head, so `take(0)` still holds a
    /// single head value; eager consumers remain bounded regardless
    /// (`take_eagerly(0)` yields no elements).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// let bounded = Stream::fibonacci().take(7);
    /// // Asking for more than the bound can never advance past it.
    /// assert_eq!(bounded.take_eagerly(100), vec![0, 1, 1, 2, 3, 5, 8]);
    /// ```
    pub fn take(&self, count: usize) -> Self {
        let tail = match self.tail.as_ref() {
            Maybe::Just(rest) if count > 1 => {
                let source = Rc::clone(rest);
                let remaining = count - 1;
                let bounded: Thunk<Self> = Rc::new(move || source().take(remaining));
                Maybe::Just(bounded)
            }
            _ => Maybe::Nothing,
        };

        Self {
            head: self.head.clone(),
            tail,
        }
    }

    /// Materializes up to `count` elements into a `Vec`.
    ///
    /// Walks the stream eagerly, stopping after `count` elements or at a
    /// terminal node, whichever comes first. Terminates for both finite
    /// and infinite streams, and forces the tail computation at most
    /// `count - 1` times.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// assert_eq!(Stream::repeat(5).take_eagerly(3), vec![5, 5, 5]);
    /// assert_eq!(Stream::single(1).take_eagerly(10), vec![1]);
    /// assert_eq!(Stream::repeat(5).take_eagerly(0), Vec::<i32>::new());
    /// ```
    pub fn take_eagerly(&self, count: usize) -> Vec<T> {
        self.iter().take(count).collect()
    }

    /// Materializes the entire stream into a `Vec`.
    ///
    /// Only valid for finite streams: on an infinite stream this walks
    /// forever and never returns. This is a documented non-total
    /// operation, not a bug; bound the stream with
    /// [`take`](Self::take) or use [`take_eagerly`](Self::take_eagerly)
    /// when finiteness is not known.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// let finite = Stream::from_step(1, |x| x * 2).take(4);
    /// assert_eq!(finite.to_vec(), vec![1, 2, 4, 8]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Returns an iterator over the stream's elements.
    ///
    /// The iterator forces each tail only when the next element is
    /// actually demanded, so `iter().take(n)` forces at most `n - 1`
    /// tails. Iterating an infinite stream without an external bound
    /// never finishes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// let squares: Vec<i32> = Stream::from_step(1, |x| x + 1)
    ///     .iter()
    ///     .map(|x| x * x)
    ///     .take(4)
    ///     .collect();
    /// assert_eq!(squares, vec![1, 4, 9, 16]);
    /// ```
    pub fn iter(&self) -> StreamIter<T> {
        StreamIter::new(self.clone())
    }
}

// =============================================================================
// Canonical Corecursive Instances
// =============================================================================

impl Stream<u64> {
    /// The Fibonacci sequence as an infinite stream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// assert_eq!(Stream::fibonacci().take_eagerly(7), vec![0, 1, 1, 2, 3, 5, 8]);
    /// ```
    #[must_use]
    pub fn fibonacci() -> Self {
        Self::unfold((0, 1), |(f0, f1)| (f0, (f1, f0 + f1)))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T: Clone> Clone for Stream<T> {
    /// Clones the node: the head is cloned, the deferred tail is shared.
    fn clone(&self) -> Self {
        Self {
            head: self.head.clone(),
            tail: self.tail.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Stream<T> {
    /// Shows the head and whether a tail is pending, without forcing it.
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Stream")
            .field("head", &self.head)
            .field(
                "tail",
                &if self.tail.is_just() {
                    "<deferred>"
                } else {
                    "<terminal>"
                },
            )
            .finish()
    }
}

impl<T> IntoIterator for Stream<T> {
    type Item = T;
    type IntoIter = StreamIter<T>;

    /// Converts the stream into an iterator over its elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corecur::stream::Stream;
    ///
    /// let first_three: Vec<u64> = Stream::fibonacci().into_iter().take(3).collect();
    /// assert_eq!(first_three, vec![0, 1, 1]);
    /// ```
    fn into_iter(self) -> Self::IntoIter {
        StreamIter::new(self)
    }
}
