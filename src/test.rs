use either::Either;
use Either::Left;
use Either::Right;

use crate::Done;
use crate::Generator;
use crate::Range;
use crate::Yield;
use crate::range;

#[test]
fn range_yields_zero_up_to_max() {
    range(3)
        .assert_yields(0)
        .assert_yields(1)
        .assert_yields(2)
        .assert_done();
}

#[test]
fn range_of_zero_is_immediately_done() {
    range(0).assert_done();
}

#[test]
fn range_of_negative_max_is_immediately_done() {
    range(-1).assert_done();
    range(i64::MIN).assert_done();
}

#[test]
fn range_of_one_yields_once() {
    range(1).assert_yields(0).assert_done();
}

#[test]
fn equal_ranges_agree_at_every_step() {
    let mut a = range(5);
    let mut b = range(5);
    loop {
        match (a.resume(), b.resume()) {
            (Yield(va, na), Yield(vb, nb)) => {
                assert_eq!(va, vb);
                a = na;
                b = nb;
            }
            (Done, Done) => break,
            (sa, sb) => panic!("ranges diverged: {sa:?} vs {sb:?}"),
        }
    }
}

#[test]
fn step_into_yield() {
    let (v, next) = range(2).resume().into_yield().unwrap();
    assert_eq!(v, 0);
    next.assert_yields(1).assert_done();

    assert_eq!(range(0).resume().into_yield(), None);
}

#[test]
fn step_is_done() {
    assert!(!range(2).resume().is_done());
    assert!(range(0).resume().is_done());
}

#[test]
fn finalize_before_exhaustion() {
    let generator = range(10).assert_yields(0).assert_yields(1);
    generator.finalize();
}

#[test]
fn finalize_without_resuming() {
    range(10).finalize();
}

#[test]
fn for_each_visits_every_value() {
    let mut seen = Vec::new();
    range(4).for_each(|v| seen.push(v));
    assert_eq!(seen, [0, 1, 2, 3]);
}

#[test]
fn either_of_two_ranges() {
    let left: Either<Range, Range> = Left(range(2));
    left.assert_yields(0).assert_yields(1).assert_done();

    let right: Either<Range, Range> = Right(range(1));
    right.assert_yields(0).assert_done();
}
