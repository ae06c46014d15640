pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod test_support;
pub mod utils;

use log::{info, Level};

/// Browser entry point: logging, runtime config, then the app.
pub fn boot() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        Level::Debug
    } else {
        Level::Info
    };
    if console_log::init_with_level(level).is_err() {
        web_sys::console::warn_1(&"Logger was already initialized".into());
    }
    info!("Starting HRMS Lite frontend");

    leptos::spawn_local(async move {
        let config = config::load().await;
        router::mount_app(config);
    });
}
