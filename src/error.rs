//! Error types for configuration loading and DOM wiring.
//!
//! None of these reach the page: the boot routine logs them and disables the
//! feature that produced them.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Invalid enhancement configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("group `{selector}` has visibility threshold {value} outside [0, 1]")]
    InvalidThreshold { selector: String, value: f64 },
    #[error("group `{selector}` has no activation markers")]
    NoMarkers { selector: String },
    #[error("stagger cycle must be at least 1")]
    ZeroStaggerCycle,
}

/// Failure while wiring a feature into the document.
#[derive(Debug, thiserror::Error)]
pub enum EnhanceError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("javascript error: {0}")]
    Js(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

#[cfg(feature = "browser")]
impl From<wasm_bindgen::JsValue> for EnhanceError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
