//! Acquire / use / release with guaranteed release.
//!
//! [`bracket`] is the resource-safety combinator every effect type delegates
//! to. It is the explicit, first-class version of RAII: the release step
//! receives both the resource and the outcome of using it, so it can commit
//! on success and roll back on failure.
//!
//! # Outcome rules
//!
//! | acquire | use     | release | result          |
//! |---------|---------|---------|-----------------|
//! | `Err`   | -       | -       | acquire error   |
//! | `Ok`    | `Ok(b)` | `Ok`    | `Ok(b)`         |
//! | `Ok`    | `Err`   | `Ok`    | use error       |
//! | `Ok`    | any     | `Err`   | release error   |
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::bracket;
//!
//! let mut log = Vec::new();
//! let result: Result<usize, String> = bracket(
//!     Ok::<_, String>(vec![1, 2, 3]),
//!     |buffer| Ok::<_, String>(buffer.len()),
//!     |buffer, outcome| {
//!         log.push(format!("released {} items after {:?}", buffer.len(), outcome));
//!         Ok::<(), String>(())
//!     },
//! );
//! assert_eq!(result, Ok(3));
//! assert_eq!(log, vec!["released 3 items after Ok(3)".to_string()]);
//! ```

use super::outcome::IntoResult;

/// Acquires a resource, uses it, and always releases it.
///
/// * `acquire` is run first. If it fails, its error is returned and neither
///   `use_resource` nor `release` is invoked.
/// * `use_resource` borrows the resource mutably. Its outcome is captured,
///   not propagated.
/// * `release` takes ownership of the resource together with the captured
///   outcome and runs exactly once. Its success value is discarded.
///
/// A failing release supersedes the outcome of `use_resource`, including a
/// failing one.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::bracket;
///
/// let result: Result<i32, &str> = bracket(
///     Ok::<i32, &str>(1),
///     |_| Ok::<i32, &str>(2),
///     |_, _| Err::<(), &str>("release failed"),
/// );
/// assert_eq!(result, Err("release failed"));
/// ```
pub fn bracket<A, U, V, E, UseFn, ReleaseFn>(
    acquire: A,
    use_resource: UseFn,
    release: ReleaseFn,
) -> Result<U::Value, E>
where
    A: IntoResult<Error = E>,
    U: IntoResult<Error = E>,
    V: IntoResult<Error = E>,
    UseFn: FnOnce(&mut A::Value) -> U,
    ReleaseFn: FnOnce(A::Value, &Result<U::Value, E>) -> V,
{
    let mut resource = acquire.into_result()?;
    let outcome = use_resource(&mut resource).into_result();

    match release(resource, &outcome).into_result() {
        Ok(_) => outcome,
        Err(error) => {
            tracing::debug!(
                use_succeeded = outcome.is_ok(),
                "bracket release failed; release error supersedes use outcome"
            );
            Err(error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Either;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn acquire_failure_skips_use_and_release() {
        let used = Cell::new(false);
        let released = Cell::new(false);

        let result: Result<i32, &str> = bracket(
            Err::<i32, &str>("cannot acquire"),
            |_| {
                used.set(true);
                Ok::<i32, &str>(1)
            },
            |_, _| {
                released.set(true);
                Ok::<(), &str>(())
            },
        );

        assert_eq!(result, Err("cannot acquire"));
        assert!(!used.get());
        assert!(!released.get());
    }

    #[rstest]
    #[case(Ok(10), Ok(10))]
    #[case(Err("use failed"), Err("use failed"))]
    fn release_runs_once_and_use_outcome_is_returned(
        #[case] use_outcome: Result<i32, &'static str>,
        #[case] expected: Result<i32, &'static str>,
    ) {
        let releases = Cell::new(0);

        let result = bracket(
            Ok::<&str, &str>("resource"),
            |_| use_outcome,
            |resource, outcome| {
                assert_eq!(resource, "resource");
                assert_eq!(*outcome, use_outcome);
                releases.set(releases.get() + 1);
                Ok::<(), &str>(())
            },
        );

        assert_eq!(result, expected);
        assert_eq!(releases.get(), 1);
    }

    #[rstest]
    fn release_failure_overrides_use_failure() {
        let result: Result<i32, &str> = bracket(
            Ok::<i32, &str>(0),
            |_| Err::<i32, &str>("use failed"),
            |_, _| Err::<(), &str>("release failed"),
        );
        assert_eq!(result, Err("release failed"));
    }

    #[rstest]
    fn use_can_mutate_the_resource_before_release() {
        let result: Result<usize, &str> = bracket(
            Either::<&str, Vec<i32>>::Right(Vec::new()),
            |buffer| {
                buffer.push(1);
                buffer.push(2);
                Ok::<usize, &str>(buffer.len())
            },
            |buffer, _| {
                assert_eq!(buffer, vec![1, 2]);
                Either::<&str, ()>::Right(())
            },
        );
        assert_eq!(result, Ok(2));
    }
}
