//! Frame scheduling seam. The browser implementation wraps
//! `requestAnimationFrame`; tests use [`ManualScheduler`].

/// Opaque id of a pending frame request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameHandle(pub i32);

pub trait FrameScheduler {
    /// Ask for one callback before the next repaint.
    fn request_frame(&mut self) -> Result<FrameHandle, String>;

    /// Drop a pending request. Unknown or already fired handles are ignored.
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Records requests instead of scheduling them; the caller fires frames by
/// calling the driver directly.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: i32,
    pending: Option<FrameHandle>,
    requested: u32,
    cancelled: u32,
    fail_next: Option<String>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The request waiting to fire, if any
    pub fn pending(&self) -> Option<FrameHandle> {
        self.pending
    }

    /// Total successful requests
    pub fn requested(&self) -> u32 {
        self.requested
    }

    pub fn cancelled(&self) -> u32 {
        self.cancelled
    }

    /// Fail the next request with `msg`.
    pub fn fail_next(&mut self, msg: &str) {
        self.fail_next = Some(msg.to_string());
    }

    /// Consume the pending request as if the host fired it.
    pub fn fire(&mut self) -> Option<FrameHandle> {
        self.pending.take()
    }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> Result<FrameHandle, String> {
        if let Some(msg) = self.fail_next.take() {
            return Err(msg);
        }
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending = Some(handle);
        self.requested += 1;
        Ok(handle)
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}
