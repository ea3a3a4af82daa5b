//! Linkback Viewer Frontend Entry Point

mod app;
mod components;
mod config;
mod detail;
mod error;
mod identity;
mod logging;
mod models;
mod notify;
mod row_state;
mod source;
mod store;
mod table;
mod terminology;
mod workflow;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
