/// Wall-clock stopwatch in milliseconds. `Date::now()` in the browser,
/// `Instant` in native tests.
#[derive(Clone, Copy)]
pub(crate) struct FrameTimer {
    #[cfg(target_arch = "wasm32")]
    start_ms: f64,
    #[cfg(not(target_arch = "wasm32"))]
    start: std::time::Instant,
}

impl FrameTimer {
    pub(crate) fn start() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            FrameTimer { start_ms: js_sys::Date::now() }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            FrameTimer { start: std::time::Instant::now() }
        }
    }

    pub(crate) fn elapsed_ms(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            js_sys::Date::now() - self.start_ms
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            self.start.elapsed().as_secs_f64() * 1000.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FrameTimer;

    #[test]
    fn elapsed_is_monotonic() {
        let t = FrameTimer::start();
        let a = t.elapsed_ms();
        let b = t.elapsed_ms();
        assert!(a >= 0.0 && b >= a);
    }
}
