//! Deferred effects.
//!
//! Every effect here is a description of work that does nothing until it is
//! run with `run_unsafe`, and runs at most once:
//!
//! - [`IO`]: an infallible computation
//! - [`IOEither`]: a computation that succeeds or fails
//! - [`IOOption`]: a computation that may produce nothing
//! - [`ReaderIOEither`]: an [`IOEither`] that reads an environment
//!
//! The effects provide `fmap`, `flat_map` and `pure` as inherent methods,
//! together with deferred forms of the algorithms in [`crate::control`] and
//! [`crate::retry`]: `bracket`, `tail_rec`, `retrying`. Independent effects
//! combine with `ap`, `map2_with`, `traverse` and `sequence`, choosing an
//! [`ApplyMode`] per call.
//!
//! [`file`] wraps the filesystem operations used by the examples and tests,
//! failing with [`EffectError`].
//!
//! # Examples
//!
//! ```rust
//! use kleisli::effect::{ApplyMode, IO, IOEither};
//!
//! let total = IOEither::<String, _>::traverse(
//!     vec!["1", "2", "39"],
//!     |text| IOEither::new(move || text.parse::<u32>().map_err(|error| error.to_string())),
//!     ApplyMode::Parallel,
//! )
//! .fmap(|numbers| numbers.into_iter().sum::<u32>());
//!
//! assert_eq!(total.run_unsafe(), Ok(42));
//!
//! let greeting = IO::pure("hello").fmap(str::to_uppercase);
//! assert_eq!(greeting.run_unsafe(), "HELLO");
//! ```

mod apply;
mod error;
pub mod file;
mod io;
mod io_either;
mod io_option;
mod reader_io_either;

pub use apply::ApplyMode;
pub use error::EffectError;
pub use io::IO;
pub use io_either::IOEither;
pub use io_option::IOOption;
pub use reader_io_either::ReaderIOEither;
