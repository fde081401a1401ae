//! Core utilities shared by every layer: console logging macros and 2D math.

#[macro_use]
pub mod utils;
pub mod math;
