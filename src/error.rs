//! Structured error types for glyphgrid.
//!
//! The grid core never fails; these cover the DOM, config and CLI boundaries.

/// All errors that can occur while wiring or driving the editor.
#[derive(Debug, thiserror::Error)]
pub enum GlyphGridError {
    /// A required DOM element was not found.
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// Canvas or DOM API failure.
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration could not be decoded.
    #[error("Invalid config: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Bad command-line usage.
    #[error("Usage: {0}")]
    Usage(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GlyphGridError>;

#[cfg(target_arch = "wasm32")]
impl From<GlyphGridError> for wasm_bindgen::JsValue {
    fn from(e: GlyphGridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
