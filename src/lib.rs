//! # game-utility-sim
//!
//! Leptos + WASM single-page demo that simulates editing named game values
//! and generating virtual currency for two fictional games. Nothing leaves
//! the browser: both features persist to `localStorage` only.
//!
//! State lives in plain structs under [`state`] so it can be tested natively;
//! [`pages`] wrap it in signals and render the forms.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console logging and mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use leptos::prelude::*;

    use crate::app::App;

    console_error_panic_hook::set_once();

    let parsed = config::AppConfig::from_build_env();
    let level = parsed.as_ref().map_or(config::DEFAULT_LOG_LEVEL, |c| c.log_level);
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger already installed: {e}");
    }

    let config = match parsed {
        Ok(config) => config,
        Err(e) => {
            log::warn!("invalid build configuration, using defaults: {e}");
            config::AppConfig::default()
        }
    };
    log::info!("mounting with values key {:?}, history key {:?}", config.values_key, config.history_key);

    leptos::mount::mount_to_body(move || view! { <App config=config/> });
}
