use log::{info, warn};

mod config;
mod dom;
mod fade_in;
mod footer;
mod header;
mod nav;
mod site;
mod smooth_scroll;
mod forms {
    pub mod payload;
    pub mod submit;
    pub mod web;
    pub mod webhook;
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting tolbert events site");
    let Some(window) = web_sys::window() else {
        warn!("No window; nothing to wire up");
        return;
    };
    let Some(document) = window.document() else {
        warn!("No document; nothing to wire up");
        return;
    };
    site::start(window, document);
}
