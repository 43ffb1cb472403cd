// error.rs - Mount-time failures
//
// Nothing inside a frame can fail. These only come out of `FrameDriver::start`,
// and any of them means the animation never starts.

use wasm_bindgen::JsValue;

use crate::config::ConfigError;

#[derive(thiserror::Error, Debug)]
pub enum SetupError {
    #[error("no global window")]
    NoWindow,

    #[error("canvas has no 2d drawing context")]
    NoContext,

    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    /// The browser threw while wiring a listener or frame request
    #[error("host call failed: {0}")]
    Host(String),
}

impl SetupError {
    pub(crate) fn host(err: JsValue) -> Self {
        SetupError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

impl From<SetupError> for JsValue {
    fn from(err: SetupError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
