use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DriverError {
    /// The operation needs a running loop
    NotRunning,
    /// The host refused to schedule a frame
    Scheduler(String),
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::NotRunning => write!(f, "animation is not running"),
            DriverError::Scheduler(msg) => write!(f, "frame scheduling failed: {}", msg),
        }
    }
}

impl std::error::Error for DriverError {}

impl From<DriverError> for wasm_bindgen::JsValue {
    fn from(e: DriverError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
