//! Shareable zero-argument deferred computations.

use std::rc::Rc;

/// A zero-argument deferred computation producing a `T` on each
/// invocation.
///
/// Unlike [`Lazy`](crate::control::Lazy), a `Thunk` carries no cache:
/// invoking it repeatedly recomputes. Its contract is idempotence of the
/// observable result, not memoization. It is reference-counted so that
/// wrappers (such as a bounded `take` over a stream) can capture an
/// existing thunk while the original node keeps its own handle, and no
/// closure ever needs to reference a node that has not been constructed
/// yet.
///
/// # Examples
///
/// ```rust
/// use corecur::control::Thunk;
/// use std::rc::Rc;
///
/// let base: Thunk<i32> = Rc::new(|| 21);
/// let doubled: Thunk<i32> = {
///     let base = Rc::clone(&base);
///     Rc::new(move || base() * 2)
/// };
///
/// assert_eq!(base(), 21);
/// assert_eq!(doubled(), 42);
/// ```
pub type Thunk<T> = Rc<dyn Fn() -> T>;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn thunk_recomputes_on_every_invocation() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let thunk: Thunk<i32> = Rc::new(move || {
            counter.set(counter.get() + 1);
            42
        });

        assert_eq!(thunk(), 42);
        assert_eq!(thunk(), 42);
        assert_eq!(calls.get(), 2);
    }

    #[rstest]
    fn thunk_clone_shares_the_computation() {
        let thunk: Thunk<i32> = Rc::new(|| 7);
        let alias = Rc::clone(&thunk);
        assert_eq!(thunk(), alias());
    }
}
