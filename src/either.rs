use either::Either;
use Either::Left;
use Either::Right;

use crate::generator::Generator;
use crate::step::Step;
use Step::Done;
use Step::Yield;

/// Implement the `Generator` trait for the `Either` type when both variants
/// themselves implement `Generator` with the same item type.
///
/// This is the tagged form of the kind catalogue: a consumer that decides
/// at run time which kind to construct holds an `Either<Range, Input<R>>`
/// and drives it through the one protocol without branching on kind
/// identity again.
impl<T, A, B> Generator for Either<A, B>
where
    A: Generator<Item = T>,
    B: Generator<Item = T>,
{
    type Item = T;
    type Next = Either<A::Next, B::Next>;

    fn resume(self) -> Step<T, Self::Next> {
        match self {
            Left(a) => match a.resume() {
                Yield(v, next) => Yield(v, Left(next)),
                Done => Done,
            },
            Right(b) => match b.resume() {
                Yield(v, next) => Yield(v, Right(next)),
                Done => Done,
            },
        }
    }

    fn finalize(self) {
        match self {
            Left(a) => a.finalize(),
            Right(b) => b.finalize(),
        }
    }
}
