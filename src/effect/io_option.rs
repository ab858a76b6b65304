//! `IOOption` - a deferred computation that may produce no value.

use crate::control::{self, Either};
use crate::retry::{self, RetryPolicy, RetryStatus};

use super::io::IO;
use super::io_either::IOEither;

/// A deferred, run-once computation producing `Option<A>`.
///
/// Absence short-circuits like a failure without a payload.
///
/// # Examples
///
/// ```rust
/// use kleisli::effect::IOOption;
/// use std::collections::HashMap;
///
/// let users = HashMap::from([(1, "ada"), (2, "grace")]);
///
/// let lookup = move |id: u32| {
///     let users = users.clone();
///     IOOption::new(move || users.get(&id).copied())
/// };
///
/// assert_eq!(lookup(1).fmap(str::len).run_unsafe(), Some(3));
/// assert_eq!(lookup(7).alt(|| IOOption::some("nobody")).run_unsafe(), Some("nobody"));
/// ```
pub struct IOOption<A> {
    io: IO<Option<A>>,
}

impl<A: Send + 'static> IOOption<A> {
    /// Wraps a closure producing an `Option`.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> Option<A> + Send + 'static,
    {
        Self { io: IO::new(action) }
    }

    /// A computation producing `value`.
    pub fn some(value: A) -> Self {
        Self::from_option(Some(value))
    }

    /// Alias for [`IOOption::some`].
    pub fn pure(value: A) -> Self {
        Self::some(value)
    }

    /// A computation producing nothing.
    pub fn none() -> Self {
        Self::from_option(None)
    }

    /// Lifts an already computed `Option`.
    pub fn from_option(option: Option<A>) -> Self {
        Self {
            io: IO::pure(option),
        }
    }

    /// Lifts a `Result`, dropping the error.
    pub fn from_result<E>(result: Result<A, E>) -> Self {
        Self::from_option(result.ok())
    }

    /// Runs `io` and always produces its value.
    pub fn from_io(io: IO<A>) -> Self {
        Self { io: io.fmap(Some) }
    }

    /// Runs the computation.
    pub fn run_unsafe(self) -> Option<A> {
        self.io.run_unsafe()
    }

    /// Transforms the value, if any.
    pub fn fmap<B, F>(self, function: F) -> IOOption<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        IOOption {
            io: self.io.fmap(move |option| option.map(function)),
        }
    }

    /// Continues with `function`'s computation if a value was produced.
    pub fn flat_map<B, F>(self, function: F) -> IOOption<B>
    where
        F: FnOnce(A) -> IOOption<B> + Send + 'static,
        B: Send + 'static,
    {
        IOOption::new(move || self.run_unsafe().and_then(|value| function(value).run_unsafe()))
    }

    /// Alias for [`IOOption::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> IOOption<B>
    where
        F: FnOnce(A) -> IOOption<B> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Falls back to `alternative` when no value was produced.
    #[must_use]
    pub fn alt<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self + Send + 'static,
    {
        Self::new(move || self.run_unsafe().or_else(|| alternative().run_unsafe()))
    }

    /// Drops the value unless `predicate` accepts it.
    #[must_use]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&A) -> bool + Send + 'static,
    {
        Self {
            io: self.io.fmap(move |option| option.filter(predicate)),
        }
    }

    /// Handles both cases, producing an infallible `IO`.
    pub fn fold<B, F, G>(self, on_none: F, on_some: G) -> IO<B>
    where
        F: FnOnce() -> B + Send + 'static,
        G: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.io.fmap(move |option| option.map_or_else(on_none, on_some))
    }

    /// Replaces absence with `default()`.
    pub fn get_or_else<F>(self, default: F) -> IO<A>
    where
        F: FnOnce() -> A + Send + 'static,
    {
        self.io.fmap(move |option| option.unwrap_or_else(default))
    }

    /// Turns absence into the failure `on_none()`.
    pub fn to_io_either<E, F>(self, on_none: F) -> IOEither<E, A>
    where
        E: Send + 'static,
        F: FnOnce() -> E + Send + 'static,
    {
        IOEither::from_io(self.io.fmap(move |option| option.ok_or_else(on_none)))
    }

    /// Re-runs the computation built by `action` until `check` is satisfied
    /// or `policy` gives up; the last outcome is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::IOOption;
    /// use kleisli::retry::RetryPolicy;
    ///
    /// let io = IOOption::retrying(
    ///     &RetryPolicy::limit_retries(4),
    ///     |status| {
    ///         if status.iter_number == 3 { IOOption::some("ready") } else { IOOption::none() }
    ///     },
    ///     Option::is_none,
    /// );
    /// assert_eq!(io.run_unsafe(), Some("ready"));
    /// ```
    pub fn retrying<F, C>(policy: &RetryPolicy, mut action: F, check: C) -> Self
    where
        F: FnMut(&RetryStatus) -> Self + Send + 'static,
        C: FnMut(&Option<A>) -> bool + Send + 'static,
    {
        let policy = policy.clone();
        Self::new(move || retry::retrying(&policy, |status| action(status).run_unsafe(), check))
    }

    /// Runs `step` from `initial` until it yields `Right` or nothing.
    pub fn tail_rec<S, F>(initial: S, mut step: F) -> Self
    where
        S: Send + 'static,
        F: FnMut(S) -> IOOption<Either<S, A>> + Send + 'static,
    {
        Self::new(move || {
            control::try_tail_rec(initial, |state| step(state).run_unsafe().ok_or(())).ok()
        })
    }
}

impl<A> std::fmt::Debug for IOOption<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("IOOption").finish_non_exhaustive()
    }
}
