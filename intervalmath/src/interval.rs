//! Closed intervals and their arithmetic
use crate::Error;

/// Stores a closed range `[start, end]`, used to carry the uncertainty of a
/// value through arithmetic.
///
/// # Warning
/// This implementation does not set rounding modes, so results are only
/// correct up to ordinary floating-point precision; they are not rigorously
/// outward-rounded bounds.
#[derive(Copy, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "[f64; 2]", into = "[f64; 2]")
)]
pub struct Interval {
    start: f64,
    end: f64,
}

static_assertions::assert_impl_all!(Interval: Copy, Send, Sync);

impl std::fmt::Debug for Interval {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> Result<(), std::fmt::Error> {
        f.debug_tuple("")
            .field(&self.start)
            .field(&self.end)
            .finish()
    }
}

/// Result of [`Interval::reciprocal`]
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Reciprocal {
    /// The input did not contain zero, so the reciprocal is one interval
    Single(Interval),
    /// The input contained zero; the reciprocal is `(-inf, 1/start]` and
    /// `[1/end, +inf)`
    Split(Interval, Interval),
}

impl Interval {
    /// Builds a new interval
    ///
    /// Infinite bounds are allowed.
    ///
    /// # Errors
    /// Returns [`Error::InvalidRange`] if `start > end`, or
    /// [`Error::NanBound`] if either bound is `NaN`.
    ///
    /// ```
    /// # use intervalmath::{Error, Interval};
    /// let a = Interval::new(1.0, 2.0)?;
    /// assert_eq!(a.start(), 1.0);
    /// assert!(Interval::new(2.0, 1.0).is_err());
    /// # Ok::<(), Error>(())
    /// ```
    pub fn new(start: f64, end: f64) -> Result<Self, Error> {
        if start.is_nan() || end.is_nan() {
            Err(Error::NanBound)
        } else if start > end {
            Err(Error::InvalidRange { start, end })
        } else {
            Ok(Self { start, end })
        }
    }

    /// Returns the lower bound of the interval
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Returns the upper bound of the interval
    #[inline]
    pub fn end(&self) -> f64 {
        self.end
    }

    /// Checks whether the interval lies entirely above zero
    ///
    /// An interval which touches zero (e.g. `[0, 1]`) is not positive.
    #[inline]
    pub fn positive(&self) -> bool {
        self.start > 0.0
    }

    /// Checks whether the interval lies entirely below zero
    ///
    /// An interval which touches zero (e.g. `[-1, 0]`) is not negative.
    #[inline]
    pub fn negative(&self) -> bool {
        self.end < 0.0
    }

    /// Checks whether zero is within the interval (inclusive)
    #[inline]
    pub fn contains_zero(&self) -> bool {
        self.contains(0.0)
    }

    /// Checks whether the given value is within the interval (inclusive)
    #[inline]
    pub fn contains(&self, v: f64) -> bool {
        v >= self.start && v <= self.end
    }

    /// Calculates the width of the interval
    ///
    /// ```
    /// # use intervalmath::Interval;
    /// let a = Interval::new(2.0, 5.0)?;
    /// assert_eq!(a.width(), 3.0);
    /// # Ok::<(), intervalmath::Error>(())
    /// ```
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// Returns the midpoint of the interval
    ///
    /// Each bound is halved before adding, so this does not overflow for
    /// bounds near `f64::MAX`.
    pub fn midpoint(&self) -> f64 {
        self.start / 2.0 + self.end / 2.0
    }

    /// Checks whether both bounds are within `precision` of `other`'s bounds
    ///
    /// Each pair of bounds is compared with [`bounds_close`], so matching
    /// infinities compare as equal and `NaN` never does.
    ///
    /// Exact comparison is available through `==`, but is sensitive to
    /// rounding artifacts left by earlier arithmetic.
    ///
    /// ```
    /// # use intervalmath::Interval;
    /// let a = Interval::new(0.1, 0.2)? + Interval::new(0.2, 0.4)?;
    /// let b = Interval::new(0.3, 0.6)?;
    /// assert_ne!(a, b);
    /// assert!(a.approx_eq(&b, 1e-12));
    /// # Ok::<(), intervalmath::Error>(())
    /// ```
    pub fn approx_eq(&self, other: &Self, precision: f64) -> bool {
        bounds_close(self.start, other.start, precision)
            && bounds_close(self.end, other.end, precision)
    }

    /// Adds `other` into this interval, in place
    ///
    /// This is the only operation which mutates an `Interval`; the result is
    /// the same as `*self + other`.
    pub fn accumulate(&mut self, other: Self) {
        self.start += other.start;
        self.end += other.end;
    }

    /// Calculates the multiplicative inverse of the interval
    ///
    /// Returns `None` if the interval contains zero; use
    /// [`inverse_ex`](Self::inverse_ex) or [`reciprocal`](Self::reciprocal)
    /// in that case.
    ///
    /// ```
    /// # use intervalmath::Interval;
    /// let a = Interval::new(1.0, 2.0)?;
    /// assert_eq!(a.inverse(), Some(Interval::new(0.5, 1.0)?));
    /// assert_eq!(Interval::new(-1.0, 1.0)?.inverse(), None);
    /// # Ok::<(), intervalmath::Error>(())
    /// ```
    pub fn inverse(self) -> Option<Self> {
        if self.contains_zero() {
            None
        } else {
            Some(Self {
                start: 1.0 / self.end,
                end: 1.0 / self.start,
            })
        }
    }

    /// Returns the two unbounded halves `(-inf, 1/start]` and `[1/end, +inf)`
    ///
    /// This is the inverse of an interval which contains zero, e.g. for
    /// dividing by such an interval.
    ///
    /// The input is not checked: calling this on an interval which does not
    /// contain zero gives a meaningless result.  Callers should branch on
    /// [`contains_zero`](Self::contains_zero) first, or use
    /// [`reciprocal`](Self::reciprocal), which does so.
    pub fn inverse_ex(self) -> (Self, Self) {
        (
            Self {
                start: f64::NEG_INFINITY,
                end: 1.0 / self.start,
            },
            Self {
                start: 1.0 / self.end,
                end: f64::INFINITY,
            },
        )
    }

    /// Calculates the reciprocal, splitting it if the interval contains zero
    ///
    /// ```
    /// # use intervalmath::{Interval, Reciprocal};
    /// let a = Interval::new(-1.0, 1.0)?;
    /// let Reciprocal::Split(lo, hi) = a.reciprocal() else {
    ///     panic!("expected a split reciprocal");
    /// };
    /// assert_eq!(lo.end(), -1.0);
    /// assert_eq!(hi.start(), 1.0);
    /// # Ok::<(), intervalmath::Error>(())
    /// ```
    pub fn reciprocal(self) -> Reciprocal {
        match self.inverse() {
            Some(i) => Reciprocal::Single(i),
            None => {
                let (lo, hi) = self.inverse_ex();
                Reciprocal::Split(lo, hi)
            }
        }
    }
}

/// Checks whether two bounds are within `precision` of each other
///
/// - If `x - y` is `NaN`, the bounds are close only if `x == y`; this is the
///   case for two infinities of the same sign, and never for a `NaN` bound.
/// - If `x - y` is infinite, the bounds are never close.
/// - Otherwise, they are close if `|x - y| < precision` (strictly).
///
/// `precision` should be non-negative.
///
/// ```
/// # use intervalmath::bounds_close;
/// assert!(bounds_close(4.0, 4.000000001, 0.0001));
/// assert!(bounds_close(f64::INFINITY, f64::INFINITY, 0.0001));
/// assert!(!bounds_close(f64::INFINITY, 5.0, 0.0001));
/// ```
pub fn bounds_close(x: f64, y: f64, precision: f64) -> bool {
    let r = x - y;
    if r.is_nan() {
        x == y
    } else if r.is_infinite() {
        false
    } else {
        r.abs() < precision
    }
}

/// Checks two intervals for exact equality; equivalent to `a == b`
pub fn equal(a: &Interval, b: &Interval) -> bool {
    a == b
}

/// Checks two intervals for approximate equality; see [`Interval::approx_eq`]
pub fn approx_equal(a: &Interval, b: &Interval, precision: f64) -> bool {
    a.approx_eq(b, precision)
}

/// Formats a bound, switching to exponent form for very large or small values
fn fmt_bound(v: f64, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let a = v.abs();
    if a == 0.0 || a.is_infinite() || (1e-5..1e16).contains(&a) {
        write!(f, "{v}")
    } else {
        write!(f, "{v:e}")
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        fmt_bound(self.start, f)?;
        write!(f, ", ")?;
        fmt_bound(self.end, f)?;
        write!(f, "]")
    }
}

impl TryFrom<[f64; 2]> for Interval {
    type Error = Error;
    fn try_from(i: [f64; 2]) -> Result<Self, Error> {
        Interval::new(i[0], i[1])
    }
}

impl TryFrom<(f64, f64)> for Interval {
    type Error = Error;
    fn try_from((start, end): (f64, f64)) -> Result<Self, Error> {
        Interval::new(start, end)
    }
}

impl From<Interval> for [f64; 2] {
    fn from(i: Interval) -> Self {
        [i.start, i.end]
    }
}

/// Builds the single-point interval `[v, v]`
///
/// # Panics
/// Panics if `v` is `NaN`
impl From<f64> for Interval {
    fn from(v: f64) -> Self {
        assert!(!v.is_nan(), "invalid interval [{v}, {v}]");
        Self { start: v, end: v }
    }
}

impl std::ops::Add<Interval> for Interval {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self {
            start: self.start + rhs.start,
            end: self.end + rhs.end,
        }
    }
}

impl std::ops::Sub<Interval> for Interval {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self {
            start: self.start - rhs.end,
            end: self.end - rhs.start,
        }
    }
}
