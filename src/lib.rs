use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

// ============================================================================
// PIGGY - Coin-collecting pig that trips, sits and cries when poked
// ============================================================================

pub mod config;
pub mod error;
pub mod logging;
pub mod physics;
pub mod render;
pub mod sim;

mod canvas;
mod driver;

pub use config::{ConfigError, SceneConfig};
pub use driver::FrameDriver;
pub use error::SetupError;
pub use render::{Painter, Renderer};
pub use sim::{Pointer, Scene};

/// Handle the page keeps while the canvas is mounted
#[wasm_bindgen]
pub struct PigAnimation {
    driver: FrameDriver,
}

#[wasm_bindgen]
impl PigAnimation {
    /// Start animating `canvas`. `config` is an optional JSON object with
    /// `SceneConfig` fields; anything left out keeps its default.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config: Option<String>) -> Result<PigAnimation, JsValue> {
        logging::init(log::LevelFilter::Info);

        let config = match config {
            Some(json) => SceneConfig::from_json(&json).map_err(SetupError::from)?,
            None => SceneConfig::default(),
        };
        let driver = FrameDriver::start(canvas, config)?;
        Ok(Self { driver })
    }

    /// Stop the loop and release the listeners. Safe to call twice.
    pub fn unmount(&mut self) {
        self.driver.stop();
    }

    pub fn running(&self) -> bool {
        self.driver.is_running()
    }
}
