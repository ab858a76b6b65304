//! The capability every generic control algorithm runs against.
//!
//! [`bracket`](super::bracket), [`try_tail_rec`](super::try_tail_rec) and the
//! effect-level retry wrappers do not care whether a step is an already
//! computed `Result`, an [`Either`](super::Either), or a deferred
//! [`IOEither`](crate::effect::IOEither). They only need to turn it into an
//! outcome, once.

/// A computation that can be run to a success value or a failure.
///
/// Running consumes the value: deferred effects execute exactly once.
///
/// # Examples
///
/// ```rust
/// use kleisli::control::{Either, IntoResult};
///
/// fn run_twice_as_string<U: IntoResult<Value = i32>>(step: U) -> Result<String, U::Error> {
///     step.into_result().map(|n| (n * 2).to_string())
/// }
///
/// assert_eq!(run_twice_as_string(Ok::<i32, ()>(21)), Ok("42".to_string()));
/// assert_eq!(run_twice_as_string(Either::<&str, i32>::Left("no")), Err("no"));
/// ```
pub trait IntoResult {
    /// The success type.
    type Value;
    /// The failure type.
    type Error;

    /// Runs the computation.
    fn into_result(self) -> Result<Self::Value, Self::Error>;
}

impl<A, E> IntoResult for Result<A, E> {
    type Value = A;
    type Error = E;

    #[inline]
    fn into_result(self) -> Self {
        self
    }
}
