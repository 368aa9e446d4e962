// crates/shared-kernel/src/value_objects/magnitude.rs
use std::fmt;

use super::counts::UnitCount;

const STEP: f64 = 1000.0;
const SUFFIXES: [&str; 6] = ["k", "M", "G", "T", "P", "E"];

/// A count rendered with an SI magnitude suffix (`1.5k`, `12M`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Magnitude(u64);

impl Magnitude {
    /// Returns a compact decimal representation.
    ///
    /// Values below 1000 are printed verbatim. Larger values are scaled by
    /// powers of 1000 and printed with one decimal, a trailing `.0` dropped.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_compact(self) -> String {
        if self.0 < 1000 {
            return self.0.to_string();
        }

        let mut scaled = self.0 as f64;
        let mut suffix = "";
        for next in SUFFIXES {
            // 999.95 would print as "1000.0"; promote it to the next unit.
            if scaled < STEP - 0.05 {
                break;
            }
            scaled /= STEP;
            suffix = next;
        }

        let digits = format!("{scaled:.1}");
        let digits = digits.strip_suffix(".0").unwrap_or(&digits);
        format!("{digits}{suffix}")
    }
}

impl From<u64> for Magnitude {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<UnitCount> for Magnitude {
    fn from(value: UnitCount) -> Self {
        Self(value.value())
    }
}

impl fmt::Display for Magnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.to_compact())
    }
}
