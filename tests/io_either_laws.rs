#![cfg(feature = "effect")]
//! Property-based tests for IOEither Monad laws, checked on both branches.

use kleisli::effect::{ApplyMode, IOEither};
use proptest::prelude::*;

fn outcome() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![
        any::<i32>().prop_map(Ok),
        "[a-z]{1,8}".prop_map(Err),
    ]
}

fn halve(n: i32) -> IOEither<String, i32> {
    if n % 2 == 0 {
        IOEither::right(n / 2)
    } else {
        IOEither::left(format!("{n} is odd"))
    }
}

fn negate(n: i32) -> IOEither<String, i32> {
    IOEither::right(n.wrapping_neg())
}

// =============================================================================
// Monad Laws
// =============================================================================

proptest! {
    #[test]
    fn prop_io_either_left_identity(value: i32) {
        prop_assert_eq!(
            IOEither::right(value).flat_map(halve).run_unsafe(),
            halve(value).run_unsafe()
        );
    }

    #[test]
    fn prop_io_either_right_identity(result in outcome()) {
        prop_assert_eq!(
            IOEither::from_result(result.clone()).flat_map(IOEither::right).run_unsafe(),
            result
        );
    }

    #[test]
    fn prop_io_either_associativity(result in outcome()) {
        let left_result = IOEither::from_result(result.clone())
            .flat_map(halve)
            .flat_map(negate)
            .run_unsafe();
        let right_result = IOEither::from_result(result)
            .flat_map(|x| halve(x).flat_map(negate))
            .run_unsafe();

        prop_assert_eq!(left_result, right_result);
    }
}

// =============================================================================
// Failure channel
// =============================================================================

proptest! {
    #[test]
    fn prop_io_either_left_short_circuits_fmap(error in "[a-z]{1,8}") {
        let result = IOEither::<String, i32>::left(error.clone())
            .fmap(|n| n.wrapping_add(1))
            .run_unsafe();

        prop_assert_eq!(result, Err(error));
    }

    #[test]
    fn prop_io_either_swap_is_involution(result in outcome()) {
        prop_assert_eq!(
            IOEither::from_result(result.clone()).swap().swap().run_unsafe(),
            result
        );
    }

    #[test]
    fn prop_io_either_parallel_traverse_matches_sequential(
        values in proptest::collection::vec(-20_i32..20, 0..30)
    ) {
        let run = |mode| IOEither::traverse(values.clone(), halve, mode).run_unsafe();

        prop_assert_eq!(run(ApplyMode::Parallel), run(ApplyMode::Sequential));
    }
}
