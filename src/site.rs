use log::info;
use web_sys::{Document, Window};

use crate::dom;
use crate::forms::{submit::FormKind, web as form_web};
use crate::{fade_in, footer, header, nav, smooth_scroll};

/// Installs every behavior once. Each one looks up its own markup and is
/// skipped on its own if that markup is missing.
pub fn init(window: &Window, document: &Document) {
    nav::init(document);
    header::init(window, document);
    smooth_scroll::init(window, document);
    fade_in::init(document);
    form_web::init(document, FormKind::Contact);
    form_web::init(document, FormKind::Signup);
    footer::init(window, document);
    info!("Page behaviors installed");
}

/// Waits for `DOMContentLoaded` unless the document has already been parsed
/// by the time the module runs.
pub fn start(window: Window, document: Document) {
    if document.ready_state() != "loading" {
        init(&window, &document);
        return;
    }

    let target = document.clone();
    let mut pending = Some((window, document));
    dom::on(&target, "DOMContentLoaded", move |_| {
        if let Some((window, document)) = pending.take() {
            init(&window, &document);
        }
    });
}
