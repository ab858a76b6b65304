#![cfg(feature = "control")]
//! Property-based tests for the right-biased Either instances.

use kleisli::control::Either;
use kleisli::typeclass::{Applicative, Functor, Monad};
use proptest::prelude::*;

fn either() -> impl Strategy<Value = Either<String, i32>> {
    prop_oneof![
        any::<i32>().prop_map(Either::Right),
        "[a-z]{1,8}".prop_map(Either::Left),
    ]
}

fn halve(n: i32) -> Either<String, i32> {
    if n % 2 == 0 {
        Either::Right(n / 2)
    } else {
        Either::Left(format!("{n} is odd"))
    }
}

fn double(n: i32) -> Either<String, i32> {
    Either::Right(n.wrapping_mul(2))
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value: i32) {
        prop_assert_eq!(<Either<String, i32>>::pure(value).flat_map(halve), halve(value));
    }

    #[test]
    fn prop_either_right_identity(value in either()) {
        prop_assert_eq!(value.clone().flat_map(Either::Right), value);
    }

    #[test]
    fn prop_either_associativity(value in either()) {
        let left_result = value.clone().flat_map(halve).flat_map(double);
        let right_result = value.flat_map(|x| halve(x).flat_map(double));

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Functor Laws and conversions
// =============================================================================

proptest! {
    #[test]
    fn prop_either_functor_identity(value in either()) {
        prop_assert_eq!(value.clone().fmap(|x| x), value);
    }

    #[test]
    fn prop_either_result_round_trip(value in either()) {
        let result: Result<i32, String> = value.clone().into();
        prop_assert_eq!(Either::from(result), value);
    }

    #[test]
    fn prop_either_swap_is_involution(value in either()) {
        prop_assert_eq!(value.clone().swap().swap(), value);
    }

    #[test]
    fn prop_either_exactly_one_branch(value in either()) {
        prop_assert!(value.is_left() != value.is_right());
    }
}
