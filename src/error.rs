//! Error taxonomy for the page enhancements.
//!
//! Nothing here is fatal. Internal helpers return `Result<_, PageError>` and
//! the event handler entry points log and absorb whatever comes back.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Debug, thiserror::Error)]
pub enum PageError {
    /// The host exposes no key-value storage at all (disabled, sandboxed).
    #[error("storage unavailable")]
    StorageUnavailable,
    /// The storage backend rejected an operation (quota, privacy mode).
    #[error("storage failed: {0}")]
    Storage(String),
    #[error("missing element: {0}")]
    MissingElement(String),
    /// A platform capability (observer, animation frame, ...) is absent.
    #[error("unsupported: {0}")]
    Unsupported(&'static str),
    /// A JavaScript exception, stringified.
    #[error("script error: {0}")]
    Js(String),
    /// Malformed or unencodable JSON (page config, analytics payload).
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Text of a thrown JavaScript value.
#[cfg(feature = "browser")]
#[must_use]
pub fn js_message(value: &wasm_bindgen::JsValue) -> String {
    match value.as_string() {
        Some(text) => text,
        None => format!("{value:?}"),
    }
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for PageError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(js_message(&value))
    }
}
