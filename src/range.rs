use crate::generator::Generator;
use crate::step::Step;
use Step::Done;
use Step::Yield;

/// A generator over the integers from 0 up to (but excluding) a configured
/// upper bound.
///
/// See [`range`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Range {
    next: i64,
    max: i64,
}

impl Generator for Range {
    type Item = i64;
    type Next = Self;

    fn resume(self) -> Step<i64, Self> {
        let Self { next, max } = self;
        // `next < max` is the one authoritative continue/stop test; there
        // is no terminal sentinel value for a position to collide with.
        if next < max {
            Yield(next, Self { next: next + 1, max })
        } else {
            Done
        }
    }
}

/// Creates a generator producing the strictly increasing sequence
/// `0, 1, …, max - 1`.
///
/// There is no constraint on `max`; any `max <= 0` gives a generator that
/// is exhausted on its first resume.
///
/// # Examples
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
///
/// range(-7).assert_done();
/// ```
pub fn range(max: i64) -> Range {
    Range { next: 0, max }
}
