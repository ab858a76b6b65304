//! `ReaderIOEither` - a fallible deferred computation that reads an environment.
//!
//! `ReaderIOEither<R, E, A>` wraps a function `R -> IOEither<E, A>`. The
//! environment is supplied once, at the edge, with [`ReaderIOEither::run`];
//! everything built with `flat_map` sees a clone of the same environment.
//!
//! Nested reader stacks are expressed with [`ReaderIOEither::local`] over a
//! larger environment, typically a tuple: a computation over `Database` can
//! be embedded into one over `(Config, Database)` by projecting the second
//! component.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::ReaderIOEither;
//!
//! #[derive(Clone)]
//! struct Config {
//!     retries: u32,
//! }
//!
//! let describe = ReaderIOEither::<Config, String, u32>::asks(|config: &Config| config.retries)
//!     .flat_map(|retries| {
//!         if retries > 0 {
//!             ReaderIOEither::right(format!("{retries} retries"))
//!         } else {
//!             ReaderIOEither::left("retries disabled".to_string())
//!         }
//!     });
//!
//! assert_eq!(describe.run_unsafe(Config { retries: 3 }), Ok("3 retries".to_string()));
//! ```

use crate::control::{self, Either, IntoResult};
use crate::retry::{RetryPolicy, RetryStatus};

use super::io::IO;
use super::io_either::IOEither;

/// A function from an environment to an [`IOEither`], consumed once.
pub struct ReaderIOEither<R, E, A> {
    run_reader: Box<dyn FnOnce(R) -> IOEither<E, A> + Send>,
}

impl<R, E, A> ReaderIOEither<R, E, A>
where
    R: Clone + Send + 'static,
    E: Send + 'static,
    A: Send + 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a function from the environment to an `IOEither`.
    pub fn new<F>(function: F) -> Self
    where
        F: FnOnce(R) -> IOEither<E, A> + Send + 'static,
    {
        Self {
            run_reader: Box::new(function),
        }
    }

    /// A successful computation that ignores the environment.
    pub fn right(value: A) -> Self {
        Self::from_io_either(IOEither::right(value))
    }

    /// Alias for [`ReaderIOEither::right`].
    pub fn pure(value: A) -> Self {
        Self::right(value)
    }

    /// A failed computation that ignores the environment.
    pub fn left(error: E) -> Self {
        Self::from_io_either(IOEither::left(error))
    }

    /// Lifts an `IOEither` that ignores the environment.
    pub fn from_io_either(io_either: IOEither<E, A>) -> Self {
        Self::new(move |_| io_either)
    }

    /// Lifts an already computed outcome.
    pub fn from_result(result: Result<A, E>) -> Self {
        Self::from_io_either(IOEither::from_result(result))
    }

    /// Succeeds with a projection of the environment.
    pub fn asks<F>(projection: F) -> Self
    where
        F: FnOnce(&R) -> A + Send + 'static,
    {
        Self::new(move |environment| IOEither::right(projection(&environment)))
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Supplies the environment, producing the deferred computation.
    pub fn run(self, environment: R) -> IOEither<E, A> {
        (self.run_reader)(environment)
    }

    /// Supplies the environment and runs the computation.
    pub fn run_unsafe(self, environment: R) -> Result<A, E> {
        self.run(environment).run_unsafe()
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Transforms the success value.
    pub fn fmap<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        ReaderIOEither::new(move |environment| self.run(environment).fmap(function))
    }

    /// Transforms the failure value.
    pub fn map_left<E2, F>(self, function: F) -> ReaderIOEither<R, E2, A>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E2: Send + 'static,
    {
        ReaderIOEither::new(move |environment| self.run(environment).map_left(function))
    }

    /// Continues with `function`'s computation under the same environment.
    pub fn flat_map<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        F: FnOnce(A) -> ReaderIOEither<R, E, B> + Send + 'static,
        B: Send + 'static,
    {
        ReaderIOEither::new(move |environment: R| {
            let next_environment = environment.clone();
            self.run(environment)
                .flat_map(move |value| function(value).run(next_environment))
        })
    }

    /// Alias for [`ReaderIOEither::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        F: FnOnce(A) -> ReaderIOEither<R, E, B> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Continues with an environment-free `IOEither`.
    pub fn chain_io_either<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        F: FnOnce(A) -> IOEither<E, B> + Send + 'static,
        B: Send + 'static,
    {
        ReaderIOEither::new(move |environment| self.run(environment).flat_map(function))
    }

    /// Continues with an infallible `IO`.
    pub fn chain_io<B, F>(self, function: F) -> ReaderIOEither<R, E, B>
    where
        F: FnOnce(A) -> IO<B> + Send + 'static,
        B: Send + 'static,
    {
        ReaderIOEither::new(move |environment| self.run(environment).chain_io(function))
    }

    /// Recovers from a failure under the same environment.
    pub fn or_else<E2, F>(self, function: F) -> ReaderIOEither<R, E2, A>
    where
        F: FnOnce(E) -> ReaderIOEither<R, E2, A> + Send + 'static,
        E2: Send + 'static,
    {
        ReaderIOEither::new(move |environment: R| {
            let next_environment = environment.clone();
            self.run(environment)
                .or_else(move |error| function(error).run(next_environment))
        })
    }

    /// Runs this computation under an environment derived from a larger one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::ReaderIOEither;
    ///
    /// let port = ReaderIOEither::<u16, String, u16>::ask();
    /// let from_pair = port.local(|(_host, port): (String, u16)| port);
    ///
    /// assert_eq!(from_pair.run_unsafe(("localhost".to_string(), 8080)), Ok(8080));
    /// ```
    pub fn local<R2, F>(self, function: F) -> ReaderIOEither<R2, E, A>
    where
        R2: Clone + Send + 'static,
        F: FnOnce(R2) -> R + Send + 'static,
    {
        ReaderIOEither::new(move |environment| self.run(function(environment)))
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Acquires a resource, uses it, and always releases it; both `use` and
    /// `release` see the environment. See [`control::bracket`].
    pub fn bracket<Res, U, V, UseFn, ReleaseFn>(
        acquire: ReaderIOEither<R, E, Res>,
        use_resource: UseFn,
        release: ReleaseFn,
    ) -> Self
    where
        Res: Send + 'static,
        U: IntoResult<Value = A, Error = E>,
        V: IntoResult<Error = E>,
        UseFn: FnOnce(&R, &mut Res) -> U + Send + 'static,
        ReleaseFn: FnOnce(&R, Res, &Result<A, E>) -> V + Send + 'static,
    {
        Self::new(move |environment: R| {
            let acquired = acquire.run(environment.clone());
            IOEither::new(move || {
                control::bracket(
                    acquired,
                    |resource| use_resource(&environment, resource),
                    |resource, outcome| release(&environment, resource, outcome),
                )
            })
        })
    }

    /// Re-runs the computation built by `action` until `check` is satisfied
    /// or `policy` gives up; every attempt sees the same environment.
    pub fn retrying<F, C>(policy: &RetryPolicy, mut action: F, check: C) -> Self
    where
        F: FnMut(&RetryStatus) -> Self + Send + 'static,
        C: FnMut(&Result<A, E>) -> bool + Send + 'static,
    {
        let policy = policy.clone();
        Self::new(move |environment: R| {
            IOEither::retrying(
                &policy,
                move |status| action(status).run(environment.clone()),
                check,
            )
        })
    }

    /// Runs `step` from `initial` until it yields `Right` or fails; every
    /// step sees the same environment.
    pub fn tail_rec<S, F>(initial: S, mut step: F) -> Self
    where
        S: Send + 'static,
        F: FnMut(S) -> ReaderIOEither<R, E, Either<S, A>> + Send + 'static,
    {
        Self::new(move |environment: R| {
            IOEither::tail_rec(initial, move |state| step(state).run(environment.clone()))
        })
    }
}

impl<R, E> ReaderIOEither<R, E, R>
where
    R: Clone + Send + 'static,
    E: Send + 'static,
{
    /// Succeeds with the whole environment.
    pub fn ask() -> Self {
        Self::new(IOEither::right)
    }
}

impl<R, E, A> std::fmt::Debug for ReaderIOEither<R, E, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ReaderIOEither")
            .finish_non_exhaustive()
    }
}
