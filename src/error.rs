use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum BackgroundError {
    #[error("no global window")]
    MissingWindow,
    #[error("window has no document")]
    MissingDocument,
    #[error("canvas element #{0} not found")]
    MissingCanvas(String),
    #[error("2d canvas context unavailable")]
    ContextUnavailable,
    #[error("image failed to load: {0}")]
    AssetLoad(String),
    #[error("invalid background config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for BackgroundError {
    fn from(value: JsValue) -> Self {
        BackgroundError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<BackgroundError> for JsValue {
    fn from(err: BackgroundError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
