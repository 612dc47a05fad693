//! `intervalmath` is a small library for interval arithmetic.
//!
//! An [`Interval`] is a closed range `[start, end]` of real numbers, used to
//! carry the uncertainty of a value through a computation: rather than
//! producing a single number, each operation produces bounds which contain
//! every possible result.
//!
//! ```
//! use intervalmath::Interval;
//!
//! let a = Interval::new(1.0, 2.0)?;
//! let b = Interval::new(3.0, 4.0)?;
//! assert_eq!(a + b, Interval::new(4.0, 6.0)?);
//! assert_eq!(a - b, Interval::new(-3.0, -1.0)?);
//! # Ok::<(), intervalmath::Error>(())
//! ```
//!
//! # Comparison
//! Intervals can be compared exactly with `==`, but results of arithmetic are
//! subject to floating-point rounding, so [`Interval::approx_eq`] is usually
//! what you want.  It compares each pair of bounds with [`bounds_close`],
//! which handles infinite and `NaN` bounds explicitly.
//!
//! # Division
//! The multiplicative inverse of an interval is only an interval if the input
//! does not contain zero.  [`Interval::inverse`] returns `None` otherwise;
//! [`Interval::inverse_ex`] returns the two unbounded halves of the
//! reciprocal, and [`Interval::reciprocal`] picks between the two:
//!
//! ```
//! use intervalmath::{Interval, Reciprocal};
//!
//! let a = Interval::new(-1.0, 1.0)?;
//! assert!(a.contains_zero());
//! assert_eq!(a.inverse(), None);
//! match a.reciprocal() {
//!     Reciprocal::Single(..) => panic!("interval contains zero"),
//!     Reciprocal::Split(lo, hi) => {
//!         assert_eq!(lo.to_string(), "[-inf, -1]");
//!         assert_eq!(hi.to_string(), "[1, inf]");
//!     }
//! }
//! # Ok::<(), intervalmath::Error>(())
//! ```
//!
//! # Warning
//! None of these operations set the floating-point rounding mode, so bounds
//! are only correct up to ordinary floating-point precision.
//!
//! # Feature flags
#![doc = document_features::document_features!()]
#![warn(missing_docs)]

mod error;
pub use error::Error;

pub mod interval;
pub use interval::{Interval, Reciprocal, approx_equal, bounds_close, equal};
