//! Derived-value calculations for the tip splitter.

pub mod common;
pub mod split;

pub use split::{ZERO_DISPLAY, tip_per_person, total_per_person};
