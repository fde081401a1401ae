#[macro_use]
pub mod logging;
