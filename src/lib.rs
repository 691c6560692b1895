//! Decorative canvas background: randomly placed, rotated, translucent images
//! with a polygon fallback when none of them load.
//!
//! Layout planning is plain Rust and runs anywhere; painting and image
//! loading only exist on wasm32.

pub mod config;
pub mod dispatch;
pub mod epoch;
pub mod error;
pub mod layout;
pub mod palette;
pub mod preload;
pub mod random;
pub mod viewport;

pub use config::{BackgroundConfig, RenderMode};
pub use error::BackgroundError;
pub use viewport::Viewport;

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use wasm_bindgen::prelude::*;

    use crate::config::BackgroundConfig;
    use crate::error::BackgroundError;

    pub mod app;
    mod console;
    pub mod loader;
    pub mod render;

    /// Global a page sets to `true` to skip the automatic start and call
    /// [`start_with_config`] itself.
    const MANUAL_FLAG: &str = "HEADS_BG_MANUAL";

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        let window = web_sys::window().ok_or(BackgroundError::MissingWindow)?;
        let manual = js_sys::Reflect::get(&window, &JsValue::from_str(MANUAL_FLAG))
            .map(|v| v.is_truthy())
            .unwrap_or(false);
        if manual {
            return Ok(());
        }
        start(BackgroundConfig::default())?;
        Ok(())
    }

    /// Start the background from a JSON config; fields left out keep their defaults.
    #[wasm_bindgen]
    pub fn start_with_config(json: &str) -> Result<(), JsValue> {
        let config = BackgroundConfig::from_json(json)?;
        start(config)?;
        Ok(())
    }

    thread_local! {
        static STARTED: std::cell::Cell<bool> = const { std::cell::Cell::new(false) };
    }

    /// Attach the background once per page. Returns `false` without touching
    /// the page when an earlier call already attached one.
    pub fn start(config: BackgroundConfig) -> Result<bool, BackgroundError> {
        if STARTED.with(|started| started.replace(true)) {
            log::warn!("background already started, ignoring config for #{}", config.canvas_id);
            return Ok(false);
        }
        console::install(config.log_level);
        log::info!(
            "starting background on #{} ({:?}, {} images)",
            config.canvas_id,
            config.mode,
            config.images.len()
        );
        app::attach(app::Background::new(config))?;
        Ok(true)
    }
}
