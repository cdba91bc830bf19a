use crate::step::Step;
use Step::Done;
use Step::Yield;

/// A resumable source of values of type `Item`, driven through the uniform
/// lifecycle every generator kind shares: construct, `resume()` repeatedly,
/// `finalize()` on early abandonment.
///
/// Unlike `Iterator`, the `resume()` method consumes the generator. It gives
/// the caller a new generator value to continue resuming *only* if a value
/// was produced. If the generator was exhausted instead, no successor is
/// handed back, so it is impossible to resume a generator after it has
/// reported exhaustion.
///
/// Contrast this with `Iterator`, which lets you call `next()` as many
/// times as you want, even after it has returned `None`. Implementors of
/// `Iterator` are expected to return `None` forever afterward, but nothing
/// in the type system enforces that, and consumers rarely guard against
/// violations. Here the contract is structural: the `Done` variant of
/// [`Step`] carries no generator, and the exhausted generator was already
/// consumed by the `resume()` call that observed it.
///
/// The same move semantics cover the rest of the lifecycle contract:
/// `finalize()` consumes the generator, so finalizing twice, or resuming
/// after finalizing, is a compile error rather than a runtime misuse that
/// the runtime would have to detect (or leave undefined). A state value
/// cannot be mixed across instances because the state *is* the instance.
///
/// Each call to `resume()` runs to completion synchronously; "resumable"
/// means logically resumable across separate ordinary calls, not suspension
/// under a scheduler. A single generator must be driven sequentially by one
/// logical consumer, which ownership already guarantees.
///
/// The catalogue of kinds is closed: [`range()`](crate::range()) and
/// [`input()`](crate::input()). To hold a generator of unknown kind behind
/// one value, put the kinds in an `either::Either`, which implements this
/// trait whenever both sides do.
pub trait Generator: Sized {
    /// The type of value this generator produces. Both built-in kinds
    /// produce `i64`, the one numeric type of the language this runtime
    /// supports.
    type Item;

    /// The successor state of the generator after a `resume()` that yields.
    ///
    /// For both built-in kinds this is `Self`: the generator's whole state
    /// machine is represented by a single type, and a driving loop can
    /// store the successor back into the same variable.
    type Next: Generator<Item = Self::Item>;

    /// Advances the generator, either producing a value and a successor
    /// generator, or reporting exhaustion.
    fn resume(self) -> Step<Self::Item, Self::Next>;

    /// Releases the generator without driving it to exhaustion.
    ///
    /// Neither built-in kind holds resources beyond what `Drop` releases,
    /// so the default body is empty; a kind that does hold resources
    /// overrides this. Consuming `self` makes the release exactly-once by
    /// construction.
    fn finalize(self) {}

    /// Drives this generator to exhaustion, invoking `f` on each produced
    /// value.
    ///
    /// This will recur infinitely if the generator never exhausts!
    ///
    /// # Examples
    ///
    /// ```rust
    /// use regen::Generator;
    /// use regen::range;
    ///
    /// let mut sum = 0;
    /// range(4).for_each(|v| sum += v);
    /// assert_eq!(sum, 6);
    /// ```
    fn for_each<F>(self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        match self.resume() {
            Yield(v, next) => {
                f(v);
                next.for_each(f)
            }
            Done => {}
        }
    }

    /// Creates a lazy, in-place iterator over the values this generator
    /// produces.
    ///
    /// In order for the iterator type to be the same at each step, the
    /// generator must be fixed-point (`Self::Next` must be `Self`), which
    /// both built-in kinds are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use regen::Generator;
    /// use regen::range;
    ///
    /// let squares: Vec<i64> = range(5).into_iter().map(|v| v * v).collect();
    /// assert_eq!(squares, vec![0, 1, 4, 9, 16]);
    /// ```
    fn into_iter(self) -> impl Iterator<Item = Self::Item>
    where
        Self: Generator<Next = Self>,
    {
        let mut src = Some(self);
        core::iter::from_fn(move || match src.take() {
            Some(generator) => match generator.resume() {
                Yield(v, next) => {
                    src = Some(next);
                    Some(v)
                }
                Done => None,
            },
            None => None,
        })
    }

    /// Extracts the next produced value from the generator and asserts that
    /// it is equal to the expected value. Panics if the generator is
    /// exhausted instead, or if the value differs.
    ///
    /// This is most useful for testing. Since it returns the successor
    /// state after the assertion, it can be chained:
    ///
    /// ```rust
    /// use regen::Generator;
    /// use regen::range;
    ///
    /// range(3)
    ///     .assert_yields(0)
    ///     .assert_yields(1)
    ///     .assert_yields(2)
    ///     .assert_done();
    /// ```
    fn assert_yields(self, expected: Self::Item) -> Self::Next
    where
        Self::Item: PartialEq + core::fmt::Debug,
    {
        match self.resume() {
            Yield(actual, next) => {
                assert_eq!(
                    actual, expected,
                    "expected Yield({expected:?}), got Yield({actual:?})"
                );
                next
            }
            Done => panic!("expected Yield({expected:?}), got Done"),
        }
    }

    /// Asserts that the generator is exhausted. Panics if it produces a
    /// value instead.
    ///
    /// Most useful at the end of a chain of `assert_yields()` calls.
    fn assert_done(self)
    where
        Self::Item: core::fmt::Debug,
    {
        match self.resume() {
            Yield(actual, _) => {
                panic!("expected Done, got Yield({actual:?})")
            }
            Done => {}
        }
    }
}
