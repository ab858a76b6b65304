//! `IOEither` - a deferred computation that succeeds with `A` or fails with `E`.
//!
//! `IOEither<E, A>` is an [`IO`] of `Result<A, E>` with the failure channel
//! made first-class: `flat_map` short-circuits on failure, `or_else`
//! recovers from it, and the generic control algorithms ([`bracket`],
//! [`retrying`](crate::retry::retrying), [`try_tail_rec`]) are available as
//! deferred constructors.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::IOEither;
//!
//! fn parse(text: &'static str) -> IOEither<String, i32> {
//!     IOEither::new(move || text.parse::<i32>().map_err(|error| error.to_string()))
//! }
//!
//! let doubled = parse("21").fmap(|n| n * 2);
//! assert_eq!(doubled.run_unsafe(), Ok(42));
//!
//! let recovered = parse("x").or_else(|_| IOEither::<String, i32>::right(0));
//! assert_eq!(recovered.run_unsafe(), Ok(0));
//! ```
//!
//! [`bracket`]: crate::control::bracket
//! [`try_tail_rec`]: crate::control::try_tail_rec

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::control::{self, Either, IntoResult};
use crate::retry::{self, RetryPolicy, RetryStatus};

use super::apply::ApplyMode;
use super::io::{IO, panic_message};

/// A deferred, run-once computation producing `Result<A, E>`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IOEither::right(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IOEither::right) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IOEither<E, A> {
    io: IO<Result<A, E>>,
}

impl<E, A> IOEither<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    // =========================================================================
    // Construction
    // =========================================================================

    /// Wraps a closure producing a `Result`.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> Result<A, E> + Send + 'static,
    {
        Self { io: IO::new(action) }
    }

    /// A successful computation.
    pub fn right(value: A) -> Self {
        Self::from_result(Ok(value))
    }

    /// Alias for [`IOEither::right`].
    pub fn pure(value: A) -> Self {
        Self::right(value)
    }

    /// A failed computation.
    pub fn left(error: E) -> Self {
        Self::from_result(Err(error))
    }

    /// Lifts an already computed outcome.
    pub fn from_result(result: Result<A, E>) -> Self {
        Self {
            io: IO::pure(result),
        }
    }

    /// Lifts an [`Either`], `Left` being the failure.
    pub fn from_either(either: Either<E, A>) -> Self {
        Self::from_result(either.into())
    }

    /// Lifts an `Option`, computing the error for `None` lazily.
    pub fn from_option<F>(option: Option<A>, on_none: F) -> Self
    where
        F: FnOnce() -> E + Send + 'static,
    {
        Self::new(move || option.ok_or_else(on_none))
    }

    /// Wraps an `IO` that produces a `Result`.
    pub fn from_io(io: IO<Result<A, E>>) -> Self {
        Self { io }
    }

    /// Runs `io` and succeeds with its value.
    pub fn right_io(io: IO<A>) -> Self {
        Self::from_io(io.fmap(Ok))
    }

    /// Runs `io` and fails with its value.
    pub fn left_io(io: IO<E>) -> Self {
        Self::from_io(io.fmap(Err))
    }

    /// Runs `action`, turning a panic into a failure via `on_panic`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::{EffectError, IOEither};
    ///
    /// let io = IOEither::try_catch(|| -> i32 { panic!("bad input") }, EffectError::panicked);
    /// assert!(matches!(
    ///     io.run_unsafe(),
    ///     Err(EffectError::Panicked { message }) if message == "bad input"
    /// ));
    /// ```
    pub fn try_catch<F, H>(action: F, on_panic: H) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
        H: FnOnce(String) -> E + Send + 'static,
    {
        Self::new(move || {
            catch_unwind(AssertUnwindSafe(action))
                .map_err(|payload| on_panic(panic_message(payload.as_ref())))
        })
    }

    // =========================================================================
    // Running
    // =========================================================================

    /// Runs the computation.
    pub fn run_unsafe(self) -> Result<A, E> {
        self.io.run_unsafe()
    }

    /// The underlying `IO`.
    pub fn into_io(self) -> IO<Result<A, E>> {
        self.io
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// Transforms the success value.
    pub fn fmap<B, F>(self, function: F) -> IOEither<E, B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        IOEither::from_io(self.io.fmap(move |result| result.map(function)))
    }

    /// Transforms the failure value.
    pub fn map_left<E2, F>(self, function: F) -> IOEither<E2, A>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        E2: Send + 'static,
    {
        IOEither::from_io(self.io.fmap(move |result| result.map_err(function)))
    }

    /// Transforms whichever side is present.
    pub fn bimap<E2, B, F, G>(self, on_left: F, on_right: G) -> IOEither<E2, B>
    where
        F: FnOnce(E) -> E2 + Send + 'static,
        G: FnOnce(A) -> B + Send + 'static,
        E2: Send + 'static,
        B: Send + 'static,
    {
        IOEither::from_io(
            self.io
                .fmap(move |result| result.map(on_right).map_err(on_left)),
        )
    }

    // =========================================================================
    // Sequencing
    // =========================================================================

    /// Runs `function`'s computation with the success value; a failure
    /// short-circuits.
    pub fn flat_map<B, F>(self, function: F) -> IOEither<E, B>
    where
        F: FnOnce(A) -> IOEither<E, B> + Send + 'static,
        B: Send + 'static,
    {
        IOEither::new(move || match self.run_unsafe() {
            Ok(value) => function(value).run_unsafe(),
            Err(error) => Err(error),
        })
    }

    /// Alias for [`IOEither::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> IOEither<E, B>
    where
        F: FnOnce(A) -> IOEither<E, B> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Runs `next` after a success, discarding this value.
    pub fn then<B>(self, next: IOEither<E, B>) -> IOEither<E, B>
    where
        B: Send + 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Runs `function`'s computation for its effect and failure, keeping
    /// this success value.
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        F: FnOnce(&A) -> IOEither<E, B> + Send + 'static,
        B: Send + 'static,
    {
        Self::new(move || {
            let value = self.run_unsafe()?;
            function(&value).run_unsafe()?;
            Ok(value)
        })
    }

    /// Continues with a plain fallible function.
    pub fn chain_result<B, F>(self, function: F) -> IOEither<E, B>
    where
        F: FnOnce(A) -> Result<B, E> + Send + 'static,
        B: Send + 'static,
    {
        IOEither::new(move || self.run_unsafe().and_then(function))
    }

    /// Continues with an infallible `IO`.
    pub fn chain_io<B, F>(self, function: F) -> IOEither<E, B>
    where
        F: FnOnce(A) -> IO<B> + Send + 'static,
        B: Send + 'static,
    {
        IOEither::new(move || self.run_unsafe().map(|value| function(value).run_unsafe()))
    }

    /// Recovers from a failure with `function`'s computation, which may use
    /// a different error type. A success passes through untouched.
    pub fn or_else<E2, F>(self, function: F) -> IOEither<E2, A>
    where
        F: FnOnce(E) -> IOEither<E2, A> + Send + 'static,
        E2: Send + 'static,
    {
        IOEither::new(move || match self.run_unsafe() {
            Ok(value) => Ok(value),
            Err(error) => function(error).run_unsafe(),
        })
    }

    /// Alias for [`IOEither::or_else`].
    pub fn chain_left<E2, F>(self, function: F) -> IOEither<E2, A>
    where
        F: FnOnce(E) -> IOEither<E2, A> + Send + 'static,
        E2: Send + 'static,
    {
        self.or_else(function)
    }

    /// Falls back to `alternative` on failure, discarding the error.
    #[must_use]
    pub fn alt<F>(self, alternative: F) -> Self
    where
        F: FnOnce() -> Self + Send + 'static,
    {
        self.or_else(move |_| alternative())
    }

    /// Fails with `on_false(&value)` when `predicate` rejects the success
    /// value.
    #[must_use]
    pub fn filter_or_else<P, F>(self, predicate: P, on_false: F) -> Self
    where
        P: FnOnce(&A) -> bool + Send + 'static,
        F: FnOnce(&A) -> E + Send + 'static,
    {
        self.chain_result(move |value| {
            if predicate(&value) {
                Ok(value)
            } else {
                Err(on_false(&value))
            }
        })
    }

    /// Exchanges success and failure.
    pub fn swap(self) -> IOEither<A, E> {
        IOEither::from_io(self.io.fmap(|result| match result {
            Ok(value) => Err(value),
            Err(error) => Ok(error),
        }))
    }

    // =========================================================================
    // Elimination
    // =========================================================================

    /// Handles both outcomes, producing an infallible `IO`.
    pub fn fold<B, F, G>(self, on_left: F, on_right: G) -> IO<B>
    where
        F: FnOnce(E) -> B + Send + 'static,
        G: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        self.io.fmap(move |result| match result {
            Ok(value) => on_right(value),
            Err(error) => on_left(error),
        })
    }

    /// Replaces a failure with `function(error)`.
    pub fn get_or_else<F>(self, function: F) -> IO<A>
    where
        F: FnOnce(E) -> A + Send + 'static,
    {
        self.io.fmap(move |result| result.unwrap_or_else(function))
    }

    // =========================================================================
    // Applicative
    // =========================================================================

    /// Combines two computations, running `other` only if this one succeeds.
    pub fn map2<B, C, F>(self, other: IOEither<E, B>, function: F) -> IOEither<E, C>
    where
        F: FnOnce(A, B) -> C + Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        self.flat_map(move |a| other.fmap(move |b| function(a, b)))
    }

    /// Pairs two computations, running `other` only if this one succeeds.
    pub fn product<B>(self, other: IOEither<E, B>) -> IOEither<E, (A, B)>
    where
        B: Send + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Combines two independent computations. Both always run (in parallel
    /// for [`ApplyMode::Parallel`]); if both fail, this side's error wins.
    pub fn map2_with<B, C, F>(
        self,
        other: IOEither<E, B>,
        mode: ApplyMode,
        function: F,
    ) -> IOEither<E, C>
    where
        F: FnOnce(A, B) -> C + Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        IOEither::new(move || {
            let (left, right) = mode.join(move || self.run_unsafe(), move || other.run_unsafe());
            Ok(function(left?, right?))
        })
    }

    /// Applies the function this computation produces to `argument`'s value.
    /// Both sides always run; the function side's failure takes precedence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::{ApplyMode, IOEither};
    ///
    /// let function = IOEither::<String, _>::right(|n: i32| n * 3);
    /// let applied = function.ap(IOEither::right(14), ApplyMode::Parallel);
    /// assert_eq!(applied.run_unsafe(), Ok(42));
    /// ```
    pub fn ap<B, C>(self, argument: IOEither<E, B>, mode: ApplyMode) -> IOEither<E, C>
    where
        A: FnOnce(B) -> C,
        B: Send + 'static,
        C: Send + 'static,
    {
        self.map2_with(argument, mode, |function, b| function(b))
    }

    /// Runs one computation per item and collects the successes in order.
    ///
    /// [`ApplyMode::Sequential`] stops at the first failure;
    /// [`ApplyMode::Parallel`] runs every computation and reports the
    /// failure of the earliest item.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::{ApplyMode, IOEither};
    ///
    /// let checked = IOEither::traverse(
    ///     vec![2, 4, 5, 6],
    ///     |n| if n % 2 == 0 { IOEither::right(n / 2) } else { IOEither::left(n) },
    ///     ApplyMode::Sequential,
    /// );
    /// assert_eq!(checked.run_unsafe(), Err(5));
    /// ```
    pub fn traverse<T, F>(items: Vec<T>, function: F, mode: ApplyMode) -> IOEither<E, Vec<A>>
    where
        T: Send + 'static,
        F: Fn(T) -> Self + Send + Sync + 'static,
    {
        IOEither::new(move || match mode {
            ApplyMode::Sequential => items
                .into_iter()
                .map(|item| function(item).run_unsafe())
                .collect(),
            ApplyMode::Parallel => mode
                .map_all(items, |item| function(item).run_unsafe())
                .into_iter()
                .collect(),
        })
    }

    /// Runs every computation and collects the successes in order; see
    /// [`IOEither::traverse`] for failure handling.
    pub fn sequence(computations: Vec<Self>, mode: ApplyMode) -> IOEither<E, Vec<A>> {
        Self::traverse(computations, |computation| computation, mode)
    }

    // =========================================================================
    // Control
    // =========================================================================

    /// Acquires a resource, uses it, and always releases it.
    ///
    /// The deferred form of [`control::bracket`]: nothing runs until the
    /// result is run. `use_resource` and `release` may return a plain
    /// `Result`, an [`Either`], or another `IOEither`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::IOEither;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let events = Arc::new(Mutex::new(Vec::new()));
    /// let (on_use, on_release) = (Arc::clone(&events), Arc::clone(&events));
    ///
    /// let io: IOEither<String, usize> = IOEither::bracket(
    ///     IOEither::right(String::from("connection")),
    ///     move |connection| {
    ///         on_use.lock().unwrap().push("use");
    ///         Err::<usize, String>(format!("{connection} reset"))
    ///     },
    ///     move |_, outcome| {
    ///         let step = if outcome.is_ok() { "commit" } else { "rollback" };
    ///         on_release.lock().unwrap().push(step);
    ///         Ok::<(), String>(())
    ///     },
    /// );
    ///
    /// assert_eq!(io.run_unsafe(), Err("connection reset".to_string()));
    /// assert_eq!(*events.lock().unwrap(), vec!["use", "rollback"]);
    /// ```
    pub fn bracket<R, U, V, UseFn, ReleaseFn>(
        acquire: IOEither<E, R>,
        use_resource: UseFn,
        release: ReleaseFn,
    ) -> Self
    where
        R: Send + 'static,
        U: IntoResult<Value = A, Error = E>,
        V: IntoResult<Error = E>,
        UseFn: FnOnce(&mut R) -> U + Send + 'static,
        ReleaseFn: FnOnce(R, &Result<A, E>) -> V + Send + 'static,
    {
        Self::new(move || control::bracket(acquire, use_resource, release))
    }

    /// Re-runs the computation built by `action` until `check` is satisfied
    /// or `policy` gives up; the outcome of the last attempt is returned.
    ///
    /// `check` returns `true` for outcomes that should be retried.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::IOEither;
    /// use kleisli::retry::RetryPolicy;
    ///
    /// let io = IOEither::retrying(
    ///     &RetryPolicy::limit_retries(3),
    ///     |status| {
    ///         if status.iter_number < 2 {
    ///             IOEither::left("not yet")
    ///         } else {
    ///             IOEither::right(status.iter_number)
    ///         }
    ///     },
    ///     Result::is_err,
    /// );
    /// assert_eq!(io.run_unsafe(), Ok(2));
    /// ```
    pub fn retrying<F, C>(policy: &RetryPolicy, mut action: F, check: C) -> Self
    where
        F: FnMut(&RetryStatus) -> Self + Send + 'static,
        C: FnMut(&Result<A, E>) -> bool + Send + 'static,
    {
        let policy = policy.clone();
        Self::new(move || retry::retrying(&policy, |status| action(status).run_unsafe(), check))
    }

    /// Runs `step` from `initial` until it yields `Right` or fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    /// use kleisli::effect::IOEither;
    ///
    /// let io = IOEither::<String, u64>::tail_rec((10_000_u64, 0_u64), |(n, sum)| {
    ///     IOEither::right(if n == 0 {
    ///         Either::Right(sum)
    ///     } else {
    ///         Either::Left((n - 1, sum + n))
    ///     })
    /// });
    /// assert_eq!(io.run_unsafe(), Ok(50_005_000));
    /// ```
    pub fn tail_rec<S, F>(initial: S, step: F) -> Self
    where
        S: Send + 'static,
        F: FnMut(S) -> IOEither<E, Either<S, A>> + Send + 'static,
    {
        Self::new(move || control::try_tail_rec(initial, step))
    }

    /// Runs this computation while holding the guard `lock` returns; see
    /// [`IO::with_lock`].
    #[must_use]
    pub fn with_lock<L, G>(self, lock: L) -> Self
    where
        L: FnOnce() -> G + Send + 'static,
    {
        Self::from_io(self.io.with_lock(lock))
    }

    /// Runs this computation while holding `mutex`; see [`IO::with_mutex`].
    #[must_use]
    pub fn with_mutex<T>(self, mutex: Arc<Mutex<T>>) -> Self
    where
        T: Send + 'static,
    {
        Self::from_io(self.io.with_mutex(mutex))
    }

    /// Waits `duration` before running this computation.
    #[must_use]
    pub fn delay_by(self, duration: Duration) -> Self {
        Self::from_io(self.io.delay_by(duration))
    }
}

impl<E, A> IOEither<E, IOEither<E, A>>
where
    E: Send + 'static,
    A: Send + 'static,
{
    /// Removes one layer of nesting.
    pub fn flatten(self) -> IOEither<E, A> {
        self.flat_map(|inner| inner)
    }
}

impl<E, A> IntoResult for IOEither<E, A>
where
    E: Send + 'static,
    A: Send + 'static,
{
    type Value = A;
    type Error = E;

    fn into_result(self) -> Result<A, E> {
        self.run_unsafe()
    }
}

impl<E, A> std::fmt::Debug for IOEither<E, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("IOEither").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counted<E, A>(counter: &Arc<AtomicUsize>, result: Result<A, E>) -> IOEither<E, A>
    where
        E: Send + 'static,
        A: Send + 'static,
    {
        let counter = Arc::clone(counter);
        IOEither::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            result
        })
    }

    #[rstest]
    fn flat_map_skips_function_after_failure() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let io = IOEither::<&str, i32>::left("failed").flat_map(move |n| {
            counter.fetch_add(1, Ordering::SeqCst);
            IOEither::right(n + 1)
        });
        assert_eq!(io.run_unsafe(), Err("failed"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    fn or_else_can_change_error_type() {
        let io = IOEither::<&str, i32>::left("bad")
            .or_else(|error| IOEither::<usize, i32>::left(error.len()));
        assert_eq!(io.run_unsafe(), Err(3));
    }

    #[rstest]
    fn bimap_maps_either_side() {
        let ok = IOEither::<i32, i32>::right(1).bimap(|e| e * 10, |a| a + 1);
        let err = IOEither::<i32, i32>::left(1).bimap(|e| e * 10, |a| a + 1);
        assert_eq!(ok.run_unsafe(), Ok(2));
        assert_eq!(err.run_unsafe(), Err(10));
    }

    #[rstest]
    fn chain_first_keeps_value_but_propagates_failure() {
        let kept = IOEither::<&str, i32>::right(5).chain_first(|_| IOEither::right("ignored"));
        let failed = IOEither::<&str, i32>::right(5)
            .chain_first(|_| IOEither::<&str, ()>::left("side effect failed"));
        assert_eq!(kept.run_unsafe(), Ok(5));
        assert_eq!(failed.run_unsafe(), Err("side effect failed"));
    }

    #[rstest]
    #[case(4, Ok(4))]
    #[case(3, Err("3 is odd".to_string()))]
    fn filter_or_else_rejects(#[case] input: i32, #[case] expected: Result<i32, String>) {
        let io = IOEither::<String, i32>::right(input)
            .filter_or_else(|n| n % 2 == 0, |n| format!("{n} is odd"));
        assert_eq!(io.run_unsafe(), expected);
    }

    #[rstest]
    fn from_option_uses_lazy_error() {
        let io = IOEither::from_option(None::<i32>, || "missing");
        assert_eq!(io.run_unsafe(), Err("missing"));
    }

    #[rstest]
    fn fold_and_get_or_else_eliminate() {
        let folded = IOEither::<&str, i32>::left("e")
            .fold(|e| e.len(), |a| usize::try_from(a).unwrap_or(0));
        let defaulted = IOEither::<&str, i32>::left("e").get_or_else(|_| -1);
        assert_eq!(folded.run_unsafe(), 1);
        assert_eq!(defaulted.run_unsafe(), -1);
    }

    #[rstest]
    fn swap_exchanges_channels() {
        assert_eq!(IOEither::<&str, i32>::right(1).swap().run_unsafe(), Err(1));
    }

    #[rstest]
    fn flatten_removes_nesting() {
        let nested = IOEither::<&str, _>::right(IOEither::<&str, i32>::right(9));
        assert_eq!(nested.flatten().run_unsafe(), Ok(9));
    }

    #[rstest]
    #[case(ApplyMode::Sequential)]
    #[case(ApplyMode::Parallel)]
    fn ap_runs_both_sides_even_when_function_fails(#[case] mode: ApplyMode) {
        let calls = Arc::new(AtomicUsize::new(0));
        let function = counted::<&str, fn(i32) -> i32>(&calls, Err("no function"));
        let argument = counted(&calls, Err("no argument"));

        assert_eq!(function.ap(argument, mode).run_unsafe(), Err("no function"));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[rstest]
    fn map2_short_circuits() {
        let calls = Arc::new(AtomicUsize::new(0));
        let second = counted(&calls, Ok::<i32, &str>(2));
        let io = IOEither::<&str, i32>::left("first").map2(second, |a, b| a + b);
        assert_eq!(io.run_unsafe(), Err("first"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[rstest]
    #[case(ApplyMode::Sequential, 2)]
    #[case(ApplyMode::Parallel, 4)]
    fn traverse_reports_earliest_failure(#[case] mode: ApplyMode, #[case] expected_calls: usize) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let io = IOEither::traverse(
            vec![1, -2, -3, 4],
            move |n: i32| counted(&counter, if n > 0 { Ok(n) } else { Err(n) }),
            mode,
        );
        assert_eq!(io.run_unsafe(), Err(-2));
        assert_eq!(calls.load(Ordering::SeqCst), expected_calls);
    }

    #[rstest]
    fn sequence_collects_successes() {
        let io = IOEither::sequence(
            vec![IOEither::<(), i32>::right(1), IOEither::right(2)],
            ApplyMode::Parallel,
        );
        assert_eq!(io.run_unsafe(), Ok(vec![1, 2]));
    }

    #[rstest]
    fn try_catch_passes_through_success() {
        let io = IOEither::try_catch(|| 5, |message: String| message);
        assert_eq!(io.run_unsafe(), Ok(5));
    }

    #[rstest]
    fn retrying_returns_last_failure_when_exhausted() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let io = IOEither::<String, ()>::retrying(
            &RetryPolicy::limit_retries(2),
            move |status| {
                counter.fetch_add(1, Ordering::SeqCst);
                IOEither::left(format!("attempt {}", status.iter_number + 1))
            },
            Result::is_err,
        );
        assert_eq!(io.run_unsafe(), Err("attempt 3".to_string()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[rstest]
    fn tail_rec_stops_on_failure() {
        let io = IOEither::<String, i32>::tail_rec(0, |n| {
            if n == 5 {
                IOEither::left(format!("stopped at {n}"))
            } else {
                IOEither::right(Either::Left(n + 1))
            }
        });
        assert_eq!(io.run_unsafe(), Err("stopped at 5".to_string()));
    }
}
