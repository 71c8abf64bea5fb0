use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

/// Anything carrying a CSS class list. Behaviors only ever talk to the page
/// through this, so they can be driven by fakes in tests.
pub trait ClassTarget {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str);
    fn remove_class(&self, class: &str);

    /// Returns whether the class is present afterwards.
    fn toggle_class(&self, class: &str) -> bool {
        if self.has_class(class) {
            self.remove_class(class);
            false
        } else {
            self.add_class(class);
            true
        }
    }
}

impl<T: ClassTarget + ?Sized> ClassTarget for &T {
    fn has_class(&self, class: &str) -> bool {
        (**self).has_class(class)
    }

    fn add_class(&self, class: &str) {
        (**self).add_class(class)
    }

    fn remove_class(&self, class: &str) {
        (**self).remove_class(class)
    }
}

impl ClassTarget for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) {
        let _ = self.class_list().add_1(class);
    }

    fn remove_class(&self, class: &str) {
        let _ = self.class_list().remove_1(class);
    }
}

/// The page body's scroll lock.
pub trait BodyStyle {
    fn set_overflow(&self, value: &str);
}

impl BodyStyle for HtmlElement {
    fn set_overflow(&self, value: &str) {
        let _ = self.style().set_property("overflow", value);
    }
}

pub fn query(document: &Document, selector: &str) -> Option<Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Registers `handler` for the lifetime of the page.
pub fn on<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    if target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .is_err()
    {
        log::warn!("Could not register {} listener", event);
        return;
    }
    callback.forget();
}

#[cfg(test)]
pub mod fake {
    use std::cell::{Cell, RefCell};

    use super::{BodyStyle, ClassTarget};

    #[derive(Debug, Default)]
    pub struct FakeElement {
        classes: RefCell<Vec<String>>,
        pub adds: Cell<usize>,
    }

    impl FakeElement {
        pub fn with_class(class: &str) -> Self {
            let element = Self::default();
            element.classes.borrow_mut().push(class.to_string());
            element
        }

        pub fn classes(&self) -> Vec<String> {
            self.classes.borrow().clone()
        }
    }

    impl ClassTarget for FakeElement {
        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().iter().any(|c| c == class)
        }

        fn add_class(&self, class: &str) {
            self.adds.set(self.adds.get() + 1);
            if !self.has_class(class) {
                self.classes.borrow_mut().push(class.to_string());
            }
        }

        fn remove_class(&self, class: &str) {
            self.classes.borrow_mut().retain(|c| c != class);
        }
    }

    #[derive(Debug, Default)]
    pub struct FakeBody {
        pub overflow: RefCell<String>,
    }

    impl BodyStyle for FakeBody {
        fn set_overflow(&self, value: &str) {
            *self.overflow.borrow_mut() = value.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeElement;
    use super::ClassTarget;

    #[test]
    fn toggle_reports_presence_after_flip() {
        let element = FakeElement::default();
        assert!(element.toggle_class("open"));
        assert!(element.has_class("open"));
        assert!(!element.toggle_class("open"));
        assert!(element.classes().is_empty());
    }

    #[test]
    fn add_is_idempotent_on_the_class_list() {
        let element = FakeElement::with_class("nav");
        element.add_class("nav");
        assert_eq!(element.classes(), vec!["nav".to_string()]);
    }
}
