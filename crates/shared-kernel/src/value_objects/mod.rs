mod counts;
mod magnitude;

pub use counts::{Percentage, UnitCount};
pub use magnitude::Magnitude;
