//! Activity List Frontend Entry Point

mod activity_list;
mod app;
mod components;
mod config;
mod format;
mod models;
mod repository;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    if let Err(err) = console_logger::init(config.log_level) {
        web_sys::console::warn_1(&format!("Logger already installed: {}", err).into());
    }

    mount_to_body(move || view! { <App config=config /> });
}
