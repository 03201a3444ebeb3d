//! Task Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod error;
mod form;
mod format;
mod models;
mod store;
mod summary;
mod toast;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
