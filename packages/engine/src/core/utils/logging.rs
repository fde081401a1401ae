//! Console logging
//!
//! In the browser the macros print through `web_sys::console`. Native builds
//! (unit tests, integration tests) have no JS host to call into, so there the
//! message is formatted and dropped.
//!
//! ```rust
//! use constellation_engine::console_log;
//!
//! let count = 72;
//! console_log!("seeded {} particles", count);
//! ```

#[doc(hidden)]
pub fn log_str(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::log_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

#[doc(hidden)]
pub fn warn_str(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::warn_1(&msg.into());
    #[cfg(not(target_arch = "wasm32"))]
    let _ = msg;
}

/// `println!`-style logging to the browser console
#[macro_export]
macro_rules! console_log {
    ($($t:tt)*) => {
        $crate::core::utils::logging::log_str(&format!($($t)*))
    };
}

/// Same as [`console_log!`] but at warning level
#[macro_export]
macro_rules! console_warn {
    ($($t:tt)*) => {
        $crate::core::utils::logging::warn_str(&format!($($t)*))
    };
}
