//! Task-Dash Frontend Entry Point

mod api;
mod app;
mod auth;
mod components;
mod config;
mod context;
mod error;
mod logger;
mod models;
mod session;
mod store;
mod sync;
mod validation;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
