use std::rc::Rc;

use log::debug;
use web_sys::{Document, Element, HtmlElement};

use crate::config;
use crate::dom::{self, BodyStyle, ClassTarget};

/// Mobile menu: the toggle button, the nav container and the body scroll lock.
pub struct NavController<T, B> {
    toggle: T,
    nav: T,
    body: Option<B>,
}

impl<T: ClassTarget, B: BodyStyle> NavController<T, B> {
    pub fn new(toggle: T, nav: T, body: Option<B>) -> Self {
        Self { toggle, nav, body }
    }

    pub fn is_open(&self) -> bool {
        self.nav.has_class(config::NAV_OPEN)
    }

    pub fn toggle(&self) {
        self.toggle.toggle_class(config::MENU_TOGGLE_OPEN);
        let open = self.nav.toggle_class(config::NAV_OPEN);
        self.lock_scroll(open);
    }

    pub fn close(&self) {
        self.toggle.remove_class(config::MENU_TOGGLE_OPEN);
        self.nav.remove_class(config::NAV_OPEN);
        self.lock_scroll(false);
    }

    fn lock_scroll(&self, locked: bool) {
        if let Some(body) = &self.body {
            body.set_overflow(if locked { "hidden" } else { "" });
        }
    }
}

pub fn init(document: &Document) {
    let (Some(toggle), Some(nav)) = (
        dom::query(document, config::MENU_TOGGLE),
        dom::query(document, config::NAV),
    ) else {
        debug!("No mobile menu on this page");
        return;
    };

    let body = document.body();
    let controller: Rc<NavController<Element, HtmlElement>> =
        Rc::new(NavController::new(toggle.clone(), nav, body));

    {
        let controller = controller.clone();
        dom::on(&toggle, "click", move |_| {
            controller.toggle();
            debug!("Mobile menu open: {}", controller.is_open());
        });
    }

    for link in dom::query_all(document, config::NAV_LINK) {
        let controller = controller.clone();
        dom::on(&link, "click", move |_| controller.close());
    }
    debug!("Mobile menu ready");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::{FakeBody, FakeElement};

    fn controller() -> NavController<FakeElement, FakeBody> {
        NavController::new(
            FakeElement::with_class("menu-toggle"),
            FakeElement::with_class("nav"),
            Some(FakeBody::default()),
        )
    }

    #[test]
    fn open_state_follows_toggle_parity() {
        let nav = controller();
        for n in 1..=7 {
            nav.toggle();
            assert_eq!(nav.is_open(), n % 2 == 1, "after {} toggles", n);
            assert_eq!(nav.toggle.has_class(config::MENU_TOGGLE_OPEN), nav.is_open());
        }
    }

    #[test]
    fn body_scroll_is_locked_only_while_open() {
        let nav = controller();
        nav.toggle();
        assert_eq!(*nav.body.as_ref().unwrap().overflow.borrow(), "hidden");
        nav.toggle();
        assert_eq!(*nav.body.as_ref().unwrap().overflow.borrow(), "");
    }

    #[test]
    fn link_click_always_closes() {
        let nav = controller();
        nav.toggle();
        nav.close();
        assert!(!nav.is_open());
        assert!(!nav.toggle.has_class(config::MENU_TOGGLE_OPEN));
        assert_eq!(*nav.body.as_ref().unwrap().overflow.borrow(), "");

        nav.close();
        assert!(!nav.is_open());
    }

    #[test]
    fn missing_body_is_tolerated() {
        let nav: NavController<FakeElement, FakeBody> =
            NavController::new(FakeElement::default(), FakeElement::default(), None);
        nav.toggle();
        assert!(nav.is_open());
    }
}
