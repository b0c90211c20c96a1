//! Crate error type.
//!
//! Absent elements are never errors; each behavior simply skips. These
//! variants cover the rarer cases where the host refuses a call or the config
//! is malformed.

/// Error returned by the page behaviors and config loading.
#[derive(Debug, thiserror::Error)]
pub enum FxError {
    /// The config JSON could not be parsed.
    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),
    /// The config parsed but holds an unusable value.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    /// A DOM call threw.
    #[error("dom call failed: {0}")]
    Dom(String),
    /// The host clock produced a timestamp without a `YYYY-MM-DD` date.
    #[error("unexpected clock value: {0}")]
    Clock(String),
    /// No global `window` (not running in a browser main thread).
    #[error("no window available")]
    NoWindow,
    /// The window has no document.
    #[error("no document available")]
    NoDocument,
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for FxError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value.as_string().unwrap_or_else(|| format!("{value:?}"));
        Self::Dom(message)
    }
}

#[cfg(feature = "hydrate")]
impl From<FxError> for wasm_bindgen::JsValue {
    fn from(err: FxError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}
