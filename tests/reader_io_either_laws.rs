#![cfg(feature = "effect")]
//! Property-based tests for ReaderIOEither Monad laws under a fixed
//! environment.

use kleisli::effect::ReaderIOEither;
use proptest::prelude::*;

type Reader<A> = ReaderIOEither<i32, String, A>;

fn add_environment(n: i32) -> Reader<i32> {
    Reader::asks(move |environment: &i32| n.wrapping_add(*environment))
}

fn reject_negative(n: i32) -> Reader<i32> {
    if n < 0 {
        Reader::left(format!("{n} is negative"))
    } else {
        Reader::right(n)
    }
}

proptest! {
    #[test]
    fn prop_reader_io_either_left_identity(value: i32, environment: i32) {
        prop_assert_eq!(
            Reader::pure(value).flat_map(add_environment).run_unsafe(environment),
            add_environment(value).run_unsafe(environment)
        );
    }

    #[test]
    fn prop_reader_io_either_right_identity(value: i32, environment: i32) {
        prop_assert_eq!(
            add_environment(value).flat_map(Reader::pure).run_unsafe(environment),
            add_environment(value).run_unsafe(environment)
        );
    }

    #[test]
    fn prop_reader_io_either_associativity(value: i32, environment: i32) {
        let left_result = Reader::pure(value)
            .flat_map(add_environment)
            .flat_map(reject_negative)
            .run_unsafe(environment);
        let right_result = Reader::pure(value)
            .flat_map(|x| add_environment(x).flat_map(reject_negative))
            .run_unsafe(environment);

        prop_assert_eq!(left_result, right_result);
    }

    #[test]
    fn prop_reader_io_either_local_identity(environment: i32) {
        prop_assert_eq!(
            Reader::<i32>::ask().local(|e: i32| e).run_unsafe(environment),
            Ok(environment)
        );
    }
}
