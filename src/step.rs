/// The state of a generator after a call to `resume()` has finished.
///
/// After a call to `resume()` finishes, the generator is in one of two
/// states:
///
///   * `Yield(v, n)`: the generator produced a value `v` and is ready to be
///     resumed again. The successor state of the generator is `n`, which
///     necessarily implements the `Generator` trait.
///   * `Done`: the generator is exhausted and will produce no further
///     values. It cannot be resumed again, because the call to `resume()`
///     consumed it without giving back a generator value to resume.
///
/// This replaces the sentinel encoding a flat runtime ABI would use (a
/// reserved "terminated" state value sharing an integer space with live
/// positions): termination is its own variant, so no position can ever
/// collide with it.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Step<T, N> {
    Yield(T, N),
    Done,
}

use Step::*;

impl<T, N> Step<T, N> {
    /// Returns the produced value and the successor generator, if the
    /// generator yielded, or `None` if it was exhausted.
    ///
    /// Compare to `Result::ok()` or `ControlFlow::continue_value()`.
    pub fn into_yield(self) -> Option<(T, N)> {
        match self {
            Yield(v, n) => Some((v, n)),
            Done => None,
        }
    }

    /// True if the generator reported exhaustion.
    pub fn is_done(&self) -> bool {
        matches!(self, Done)
    }
}
