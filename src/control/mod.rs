//! Control structures shared by every effect type.
//!
//! - [`Either`]: the two-branch sum type (failure/success, continue/done)
//! - [`IntoResult`]: the "run to an outcome" capability the algorithms use
//! - [`bracket`]: acquire / use / release with guaranteed release
//! - [`tail_rec`], [`try_tail_rec`]: stack-safe recursion as a loop
//!
//! Each algorithm is implemented once here; `IO`, `IOEither`, `IOOption` and
//! `ReaderIOEither` only adapt it to their deferred representation.
//!
//! # Examples
//!
//! ```rust
//! use kleisli::control::{Either, bracket, try_tail_rec};
//!
//! let total: Result<u32, String> = bracket(
//!     Ok::<_, String>(vec![3_u32, 4, 5]),
//!     |numbers| {
//!         try_tail_rec((0_usize, 0_u32), |(index, sum)| match numbers.get(index) {
//!             Some(n) => Ok::<_, String>(Either::Left((index + 1, sum + n))),
//!             None => Ok(Either::Right(sum)),
//!         })
//!     },
//!     |_, _| Ok::<(), String>(()),
//! );
//! assert_eq!(total, Ok(12));
//! ```

mod bracket;
mod either;
mod outcome;
mod tail_rec;

pub use bracket::bracket;
pub use either::Either;
pub use outcome::IntoResult;
pub use tail_rec::{tail_rec, try_tail_rec};
