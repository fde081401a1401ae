//! Domain types: configuration, viewport geometry and colors.

pub mod color;
pub mod config;
pub mod viewport;
