use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures crossing the DOM or engine boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("invalid input {0}, please provide a svg, lottie or particles file")]
    UnsupportedFile(String),
    #[error("engine call failed: {0}")]
    Engine(String),
    #[error("element not found: {0}")]
    NoElement(&'static str),
    #[error("storage unavailable: {0}")]
    Storage(String),
}

impl From<JsValue> for EditorError {
    fn from(value: JsValue) -> Self {
        EditorError::Engine(format!("{:?}", value))
    }
}
