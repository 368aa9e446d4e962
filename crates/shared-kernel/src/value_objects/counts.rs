// crates/shared-kernel/src/value_objects/counts.rs
use std::fmt;
use std::ops::Sub;

/// Number of words or letters observed in one frequency view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnitCount(u64);

impl UnitCount {
    #[inline]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Share of `self` in `total`, as a percentage.
    #[inline]
    pub fn share_of(self, total: Self) -> Percentage {
        Percentage::of(self.0, total.0)
    }
}

impl Default for UnitCount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Sub for UnitCount {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_sub(rhs.0))
    }
}

impl From<u64> for UnitCount {
    fn from(value: u64) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for UnitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A percentage in `[0, 100]`, rendered with two decimals.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percentage(f64);

impl Percentage {
    /// `part` as a percentage of `total`. An empty total yields 0%.
    #[allow(clippy::cast_precision_loss)]
    pub fn of(part: u64, total: u64) -> Self {
        if total == 0 {
            return Self(0.0);
        }
        Self(part as f64 / total as f64 * 100.0)
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}
