// crates/shared-kernel/src/lib.rs
pub mod value_objects;

pub use value_objects::{Magnitude, Percentage, UnitCount};
