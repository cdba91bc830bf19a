use std::io::BufRead;

use crate::generator::Generator;
use crate::scan::IntScanner;
use crate::step::Step;
use Step::Done;
use Step::Yield;

/// A generator over the integers read one at a time from an external
/// source.
///
/// See [`input`].
#[derive(Debug)]
pub struct Input<R> {
    scanner: IntScanner<R>,
}

impl<R: BufRead> Input<R> {
    /// Abandons the generator and returns the source, positioned after the
    /// last token read.
    pub fn into_inner(self) -> R {
        self.scanner.into_inner()
    }
}

impl<R: BufRead> Generator for Input<R> {
    type Item = i64;
    type Next = Self;

    fn resume(mut self) -> Step<i64, Self> {
        match self.scanner.next_i64() {
            Ok(Some(v)) => Yield(v, self),
            // End of source is ordinary termination. A read failure or a
            // token that is not an integer also ends the sequence: the
            // protocol carries values, not errors.
            Ok(None) | Err(_) => Done,
        }
    }
}

/// Creates a generator producing the integers read from `source`,
/// terminating when the source is exhausted.
///
/// The source is passed in explicitly rather than taken from a hidden
/// process-wide channel, so *which* stream a generator drains is visible at
/// its construction site. The usual source for generated code is
/// `io::stdin().lock()`; tests use `io::Cursor`.
///
/// Two instances can drain one source only by explicit handoff (construct
/// over `&mut source`, then [`Input::into_inner`] to reclaim it), which
/// serializes their reads. Token boundaries are preserved across a handoff
/// because a resume consumes no bytes past the end of the token it yields.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
///
/// use regen::Generator;
/// use regen::input;
///
/// input(Cursor::new("7 9"))
///     .assert_yields(7)
///     .assert_yields(9)
///     .assert_done();
/// ```
pub fn input<R: BufRead>(source: R) -> Input<R> {
    Input {
        scanner: IntScanner::new(source),
    }
}
