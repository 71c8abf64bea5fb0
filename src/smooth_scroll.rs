use log::debug;
use web_sys::{Document, ScrollBehavior, ScrollToOptions, Window};

use crate::config;
use crate::dom;

/// The selector to look up for an in-page link, if it points at a fragment.
/// A bare `#` keeps its default navigation.
pub fn fragment_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href != "#").then_some(href)
}

/// Document offset to scroll to so the target clears the fixed header.
pub fn scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - config::HEADER_OFFSET
}

pub fn init(window: &Window, document: &Document) {
    let anchors = dom::query_all(document, config::ANCHOR_LINKS);
    for anchor in &anchors {
        let window = window.clone();
        let document = document.clone();
        let link = anchor.clone();
        dom::on(anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = fragment_selector(&href) else {
                return;
            };
            event.prevent_default();

            // Unknown ids and malformed fragments are both a silent no-op.
            let Some(target) = dom::query(&document, selector) else {
                return;
            };
            let top = scroll_target(
                target.get_bounding_client_rect().top(),
                window.scroll_y().unwrap_or(0.0),
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
    debug!("Smooth scrolling wired for {} anchors", anchors.len());
}
