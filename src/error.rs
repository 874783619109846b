use thiserror::Error;

pub type SlideResult<T> = Result<T, SlideError>;

#[derive(Debug, Error)]
pub enum SlideError {
    #[error("friction must be in (0, 1], got {0}")]
    InvalidFriction(f32),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no element matches `{0}`")]
    MissingElement(String),

    #[error("dom error: {0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for SlideError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}
