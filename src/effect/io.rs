//! IO - a deferred computation that may perform side effects.
//!
//! An `IO<A>` describes a computation producing an `A`. Nothing happens
//! until [`IO::run_unsafe`] is called, and each `IO` value runs at most once.
//! Composition (`fmap`, `flat_map`, `retrying`, `with_lock`, ...) builds a new
//! description without running anything.
//!
//! The wrapped closure is `Send`, so an `IO` can be handed to another thread
//! and two `IO`s can run in parallel under [`ApplyMode::Parallel`].
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::IO;
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicBool, Ordering};
//!
//! let executed = Arc::new(AtomicBool::new(false));
//! let flag = Arc::clone(&executed);
//!
//! let io = IO::new(move || {
//!     flag.store(true, Ordering::SeqCst);
//!     21
//! })
//! .fmap(|n| n * 2);
//!
//! assert!(!executed.load(Ordering::SeqCst));
//! assert_eq!(io.run_unsafe(), 42);
//! assert!(executed.load(Ordering::SeqCst));
//! ```

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::control::{self, Either};
use crate::retry::{self, RetryPolicy, RetryStatus};

use super::apply::ApplyMode;

/// A deferred, run-once computation producing an `A`.
///
/// # Monad Laws
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A> {
    run_io: Box<dyn FnOnce() -> A + Send>,
}

impl<A: Send + 'static> IO<A> {
    /// Wraps a closure. It runs when [`IO::run_unsafe`] is called.
    pub fn new<F>(action: F) -> Self
    where
        F: FnOnce() -> A + Send + 'static,
    {
        Self {
            run_io: Box::new(action),
        }
    }

    /// An `IO` that returns `value` without side effects.
    pub fn pure(value: A) -> Self {
        Self::new(move || value)
    }

    /// Runs the computation.
    ///
    /// Named `run_unsafe` because it executes side effects: call it at the
    /// edge of the program.
    pub fn run_unsafe(self) -> A {
        (self.run_io)()
    }

    /// Transforms the result.
    pub fn fmap<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> B + Send + 'static,
        B: Send + 'static,
    {
        IO::new(move || function(self.run_unsafe()))
    }

    /// Runs `function`'s `IO` after this one, passing this result along.
    pub fn flat_map<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + Send + 'static,
        B: Send + 'static,
    {
        IO::new(move || function(self.run_unsafe()).run_unsafe())
    }

    /// Alias for [`IO::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> IO<B>
    where
        F: FnOnce(A) -> IO<B> + Send + 'static,
        B: Send + 'static,
    {
        self.flat_map(function)
    }

    /// Runs `next` after this one, discarding this result.
    pub fn then<B>(self, next: IO<B>) -> IO<B>
    where
        B: Send + 'static,
    {
        self.flat_map(move |_| next)
    }

    /// Runs `function`'s `IO` for its effect and keeps this result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::IO;
    /// use std::sync::{Arc, Mutex};
    ///
    /// let log = Arc::new(Mutex::new(Vec::new()));
    /// let sink = Arc::clone(&log);
    /// let io = IO::pure(7).chain_first(move |n| {
    ///     let message = format!("saw {n}");
    ///     IO::new(move || sink.lock().unwrap().push(message))
    /// });
    ///
    /// assert_eq!(io.run_unsafe(), 7);
    /// assert_eq!(*log.lock().unwrap(), vec!["saw 7".to_string()]);
    /// ```
    pub fn chain_first<B, F>(self, function: F) -> Self
    where
        F: FnOnce(&A) -> IO<B> + Send + 'static,
        B: Send + 'static,
    {
        IO::new(move || {
            let value = self.run_unsafe();
            function(&value).run_unsafe();
            value
        })
    }

    /// Combines two `IO`s, running this one first.
    pub fn map2<B, C, F>(self, other: IO<B>, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        self.map2_with(other, ApplyMode::Sequential, function)
    }

    /// Combines two `IO`s, evaluating them as `mode` says.
    pub fn map2_with<B, C, F>(self, other: IO<B>, mode: ApplyMode, function: F) -> IO<C>
    where
        F: FnOnce(A, B) -> C + Send + 'static,
        B: Send + 'static,
        C: Send + 'static,
    {
        IO::new(move || {
            let (a, b) = mode.join(move || self.run_unsafe(), move || other.run_unsafe());
            function(a, b)
        })
    }

    /// Pairs the results of two `IO`s.
    pub fn product<B>(self, other: IO<B>) -> IO<(A, B)>
    where
        B: Send + 'static,
    {
        self.map2(other, |a, b| (a, b))
    }

    /// Applies the function this `IO` produces to the value `argument`
    /// produces.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::{ApplyMode, IO};
    ///
    /// let add_one = IO::pure(|n: i32| n + 1);
    /// assert_eq!(add_one.ap(IO::pure(41), ApplyMode::Parallel).run_unsafe(), 42);
    /// ```
    pub fn ap<B, C>(self, argument: IO<B>, mode: ApplyMode) -> IO<C>
    where
        A: FnOnce(B) -> C,
        B: Send + 'static,
        C: Send + 'static,
    {
        self.map2_with(argument, mode, |function, b| function(b))
    }

    /// Waits `duration` before running this computation.
    #[must_use]
    pub fn delay_by(self, duration: Duration) -> Self {
        IO::delay(duration).then(self)
    }

    /// Runs this computation while holding the guard `lock` returns.
    ///
    /// `lock` is called right before the computation runs; the guard is
    /// dropped right after. Only the timing of the invocation is serialised,
    /// no data is managed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::IO;
    /// use parking_lot::Mutex;
    /// use std::sync::Arc;
    ///
    /// let mutex = Arc::new(Mutex::new(()));
    /// let probe = Arc::clone(&mutex);
    ///
    /// let io = IO::new(move || probe.is_locked())
    ///     .with_lock(move || mutex.lock_arc());
    ///
    /// assert!(io.run_unsafe());
    /// ```
    #[must_use]
    pub fn with_lock<L, G>(self, lock: L) -> Self
    where
        L: FnOnce() -> G + Send + 'static,
    {
        IO::new(move || {
            let _guard = lock();
            tracing::trace!("lock acquired");
            self.run_unsafe()
        })
    }

    /// Runs this computation while holding `mutex`.
    ///
    /// Shorthand for `with_lock(move || mutex.lock_arc())`.
    #[must_use]
    pub fn with_mutex<T>(self, mutex: Arc<Mutex<T>>) -> Self
    where
        T: Send + 'static,
    {
        self.with_lock(move || mutex.lock_arc())
    }

    /// Catches a panic in `io` and recovers with `handler`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::IO;
    ///
    /// let panicking = IO::new(|| -> String { panic!("oops") });
    /// let recovered = IO::catch(panicking, |message| format!("recovered from {message}"));
    /// assert_eq!(recovered.run_unsafe(), "recovered from oops");
    /// ```
    pub fn catch<F>(io: Self, handler: F) -> Self
    where
        F: FnOnce(String) -> A + Send + 'static,
    {
        IO::new(move || match catch_unwind(AssertUnwindSafe(|| io.run_unsafe())) {
            Ok(value) => value,
            Err(payload) => handler(panic_message(payload.as_ref())),
        })
    }

    /// Re-runs the `IO` built by `action` until `check` is satisfied or
    /// `policy` gives up. See [`retry::retrying`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::IO;
    /// use kleisli::retry::RetryPolicy;
    ///
    /// let io = IO::retrying(
    ///     &RetryPolicy::limit_retries(5),
    ///     |status| IO::pure(status.iter_number),
    ///     |attempt| *attempt < 3,
    /// );
    /// assert_eq!(io.run_unsafe(), 3);
    /// ```
    pub fn retrying<F, C>(policy: &RetryPolicy, mut action: F, check: C) -> Self
    where
        F: FnMut(&RetryStatus) -> Self + Send + 'static,
        C: FnMut(&A) -> bool + Send + 'static,
    {
        let policy = policy.clone();
        IO::new(move || retry::retrying(&policy, |status| action(status).run_unsafe(), check))
    }

    /// Runs `step` from `initial` until it yields `Right`. See
    /// [`control::tail_rec`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::control::Either;
    /// use kleisli::effect::IO;
    ///
    /// let io = IO::tail_rec(100_000_u32, |n| {
    ///     IO::pure(if n == 0 { Either::Right("done") } else { Either::Left(n - 1) })
    /// });
    /// assert_eq!(io.run_unsafe(), "done");
    /// ```
    pub fn tail_rec<S, F>(initial: S, mut step: F) -> Self
    where
        S: Send + 'static,
        F: FnMut(S) -> IO<Either<S, A>> + Send + 'static,
    {
        IO::new(move || control::tail_rec(initial, |state| step(state).run_unsafe()))
    }

    /// Runs one `IO` per item and collects the results in order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use kleisli::effect::{ApplyMode, IO};
    ///
    /// let io = IO::traverse(vec![1, 2, 3], |n| IO::pure(n * 10), ApplyMode::Parallel);
    /// assert_eq!(io.run_unsafe(), vec![10, 20, 30]);
    /// ```
    pub fn traverse<T, F>(items: Vec<T>, function: F, mode: ApplyMode) -> IO<Vec<A>>
    where
        T: Send + 'static,
        F: Fn(T) -> Self + Send + Sync + 'static,
    {
        IO::new(move || mode.map_all(items, |item| function(item).run_unsafe()))
    }

    /// Runs every `IO` and collects the results in order.
    pub fn sequence(ios: Vec<Self>, mode: ApplyMode) -> IO<Vec<A>> {
        IO::new(move || mode.map_all(ios, IO::run_unsafe))
    }
}

impl IO<()> {
    /// An `IO` that blocks the calling thread for `duration` when run.
    pub fn delay(duration: Duration) -> Self {
        IO::new(move || {
            if !duration.is_zero() {
                std::thread::sleep(duration);
            }
        })
    }
}

impl<A> std::fmt::Debug for IO<A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_struct("IO").finish_non_exhaustive()
    }
}

pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "Unknown panic".to_string()
    }
}
