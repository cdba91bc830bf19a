//! The `regen` crate is the runtime support layer for a small compiled
//! language: primitive numeric I/O, a guarded allocator, and a resumable
//! *generator* protocol that lets the language express lazy, possibly
//! infinite integer sequences without the host having native coroutines.
//!
//! A generator is a little state machine driven through three lifecycle
//! operations: construct it once, `resume()` it repeatedly, and, if it is
//! abandoned before exhaustion, `finalize()` it. Each `resume()` either
//! produces a value together with the generator's successor state, or
//! reports that the sequence is exhausted. The core trait looks like:
//!
//! ```rust
//! pub enum Step<T, N> {
//!     Yield(T, N),
//!     Done,
//! }
//!
//! pub trait Generator: Sized {
//!     type Item;
//!     type Next: Generator<Item = Self::Item>;
//!     fn resume(self) -> Step<Self::Item, Self::Next>;
//!     fn finalize(self) {}
//! }
//! ```
//!
//! Note that `resume()` takes `self` by value, not by reference. A
//! successor generator comes back to the caller *only* inside `Yield`; the
//! `Done` variant carries nothing. So "resuming a terminated generator",
//! which a flat runtime ABI leaves as undefined behavior and a defensive
//! one has to detect and report, simply cannot be written here. The same
//! goes for finalizing twice, or resuming after finalizing: `finalize()`
//! consumed the generator. The whole misuse class is moved from the
//! contract's fine print into the type system.
//!
//! The catalogue of generator kinds is closed. There are two:
//!
//!   * [`range(max)`](range()): the integers `0, 1, …, max - 1`, in
//!     order. Any `max <= 0` is exhausted immediately.
//!   * [`input(source)`](input()): the integers scanned one token at a
//!     time from an external byte source, exhausted when the source is.
//!
//! # Examples
//!
//! ## A bounded range
//!
//! ```rust
//! use regen::{Generator, Step, range};
//!
//! let mut generator = range(10);
//! let mut sum = 0;
//! while let Step::Yield(v, next) = generator.resume() {
//!     sum += v;
//!     generator = next;
//! }
//! assert_eq!(sum, 45);
//! ```
//!
//! Both built-in kinds are *fixed-point* (their `Next` type is `Self`), so
//! the driving loop above can store the successor back into the same
//! variable, or skip the ceremony entirely with the [`Generator`] trait's
//! provided drivers:
//!
//! ```rust
//! use regen::{Generator, range};
//!
//! let sum: i64 = range(10).into_iter().sum();
//! assert_eq!(sum, 45);
//! ```
//!
//! ## An input stream
//!
//! The input kind reads from a source passed in at construction: the
//! language's "read from the console" is `input(io::stdin().lock())`, and
//! a test's is `input(Cursor::new("7 9"))`. There is no hidden
//! process-wide input channel: which stream a generator drains is visible
//! where the generator is made.
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use regen::{Generator, input};
//!
//! input(Cursor::new("7 9"))
//!     .assert_yields(7)
//!     .assert_yields(9)
//!     .assert_done();
//! ```
//!
//! ## One value for any kind
//!
//! Every kind implements the same trait, and `either::Either` implements
//! it whenever both of its sides do, so a consumer can pick a kind at run
//! time and hold the result behind a single value:
//!
//! ```rust
//! use std::io::Cursor;
//!
//! use either::Either::{Left, Right};
//! use regen::{Generator, input, range};
//!
//! fn first_three(from_input: bool) -> Vec<i64> {
//!     let generator = if from_input {
//!         Left(input(Cursor::new("4 5 6")))
//!     } else {
//!         Right(range(100))
//!     };
//!     generator.into_iter().take(3).collect()
//! }
//!
//! assert_eq!(first_three(true), vec![4, 5, 6]);
//! assert_eq!(first_three(false), vec![0, 1, 2]);
//! ```
//!
//! # Scheduling, or the lack of it
//!
//! "Resumable" does not mean suspension under a scheduler. Every
//! `resume()` call runs to completion synchronously; the only blocking
//! operation is the read inside the input kind, and it blocks the calling
//! thread like any other I/O call. A generator belongs to one logical
//! consumer at a time (not a documented convention here but a consequence
//! of ownership), and abandoning one early is just
//! `finalize()` (or, for the input kind, [`Input::into_inner`] to reclaim
//! the unread remainder of the source).
//!
//! # Boundary shims
//!
//! The rest of the runtime has no design content and is specified only as
//! the surface generated code links against:
//!
//!   * [`print_i64`] / [`write_i64`]: decimal output, one value per line.
//!   * [`IntScanner`]: `scanf`-style integer token input; also what the
//!     input kind uses internally.
//!   * [`checked_alloc`] / [`checked_dealloc`]: allocate or die. On
//!     exhaustion the out-of-memory diagnostic goes to stderr and the
//!     process exits non-zero. Allocation failure is never recoverable in
//!     this runtime.

mod alloc;
mod either;
mod generator;
mod input;
mod print;
mod range;
mod scan;
mod step;

pub use alloc::checked_alloc;
pub use alloc::checked_dealloc;
pub use generator::Generator;
pub use input::Input;
pub use input::input;
pub use print::print_i64;
pub use print::write_i64;
pub use range::Range;
pub use range::range;
pub use scan::IntScanner;
pub use step::Step;

/// `Yield` and `Done` are imported into the crate root namespace because
/// they are used so often.
pub use Step::{Done, Yield};

#[cfg(test)]
mod test;
