use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config;
use crate::dom::{self, ClassTarget};

pub struct Intersection<T> {
    pub target: T,
    pub is_intersecting: bool,
}

/// Reveals every intersecting target and hands it to `unobserve`, so each
/// element animates at most once. Returns how many were revealed.
pub fn reveal_intersecting<T, I, U>(entries: I, mut unobserve: U) -> usize
where
    T: ClassTarget,
    I: IntoIterator<Item = Intersection<T>>,
    U: FnMut(&T),
{
    let mut revealed = 0;
    for entry in entries {
        if !entry.is_intersecting {
            continue;
        }
        entry.target.add_class(config::FADE_IN_CLASS);
        unobserve(&entry.target);
        revealed += 1;
    }
    revealed
}

pub fn init(document: &Document) {
    let elements = dom::query_all(document, config::OBSERVE_FADE);
    if elements.is_empty() {
        debug!("Nothing to fade in on this page");
        return;
    }

    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        let entries = entries
            .iter()
            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|entry| Intersection {
                is_intersecting: entry.is_intersecting(),
                target: entry.target(),
            });
        reveal_intersecting(entries, |target: &Element| observer.unobserve(target));
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::FADE_THRESHOLD));
    options.set_root_margin(config::FADE_ROOT_MARGIN);

    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("IntersectionObserver unavailable: {:?}", err);
            return;
        }
    };
    callback.forget();

    for element in &elements {
        observer.observe(element);
    }
    debug!("Observing {} elements for fade-in", elements.len());
}
