use log::debug;
use web_sys::{Document, Window};

use crate::config;
use crate::dom::{self, ClassTarget};

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::HEADER_SCROLL_THRESHOLD
}

pub fn apply(header: &impl ClassTarget, offset: f64) {
    if is_scrolled(offset) {
        header.add_class(config::HEADER_SCROLLED);
    } else {
        header.remove_class(config::HEADER_SCROLLED);
    }
}

/// Runs on every scroll event, unthrottled. The class check is cheap enough
/// for these pages.
pub fn init(window: &Window, document: &Document) {
    let Some(header) = dom::query(document, config::HEADER) else {
        debug!("No header on this page");
        return;
    };

    let win = window.clone();
    dom::on(window, "scroll", move |_| {
        let offset = win.scroll_y().unwrap_or(0.0);
        apply(&header, offset);
    });
    debug!("Header scroll watcher ready");
}
