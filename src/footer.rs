use chrono::{Datelike, Local};
use log::debug;
use web_sys::{Document, Element, Window};

use crate::config;
use crate::dom::{self, ClassTarget};

pub trait NavLink: ClassTarget {
    fn href(&self) -> Option<String>;
}

impl NavLink for Element {
    fn href(&self) -> Option<String> {
        self.get_attribute("href")
    }
}

/// File name of the current page, `index.html` for a directory path.
pub fn current_page(pathname: &str) -> &str {
    match pathname.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => config::HOME_PAGE,
    }
}

/// Marks links pointing exactly at `page`; returns how many matched.
pub fn highlight_active<L: NavLink>(links: &[L], page: &str) -> usize {
    let mut matched = 0;
    for link in links {
        if link.href().as_deref() == Some(page) {
            link.add_class(config::NAV_LINK_ACTIVE);
            matched += 1;
        }
    }
    matched
}

pub fn init(window: &Window, document: &Document) {
    if let Some(year) = dom::query(document, config::CURRENT_YEAR) {
        year.set_text_content(Some(Local::now().year().to_string().as_str()));
    }

    let pathname = window.location().pathname().unwrap_or_default();
    let page = current_page(&pathname);
    let links = dom::query_all(document, config::NAV_LINK);
    let matched = highlight_active(&links, page);
    debug!("{} nav links active for {}", matched, page);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    struct Link {
        element: FakeElement,
        href: Option<&'static str>,
    }

    impl ClassTarget for Link {
        fn has_class(&self, class: &str) -> bool {
            self.element.has_class(class)
        }

        fn add_class(&self, class: &str) {
            self.element.add_class(class)
        }

        fn remove_class(&self, class: &str) {
            self.element.remove_class(class)
        }
    }

    impl NavLink for Link {
        fn href(&self) -> Option<String> {
            self.href.map(str::to_string)
        }
    }

    fn link(href: Option<&'static str>) -> Link {
        Link {
            element: FakeElement::with_class("nav__link"),
            href,
        }
    }

    #[test]
    fn page_is_last_path_segment() {
        assert_eq!(current_page("/services/weddings.html"), "weddings.html");
        assert_eq!(current_page("/about.html"), "about.html");
    }

    #[test]
    fn directory_paths_default_to_home() {
        assert_eq!(current_page("/"), "index.html");
        assert_eq!(current_page(""), "index.html");
        assert_eq!(current_page("/services/"), "index.html");
    }

    #[test]
    fn only_exact_href_matches_are_active() {
        let links = [
            link(Some("index.html")),
            link(Some("about.html")),
            link(Some("/about.html")),
            link(Some("about.html#team")),
            link(None),
        ];

        assert_eq!(highlight_active(&links, "about.html"), 1);
        let active: Vec<bool> = links
            .iter()
            .map(|l| l.has_class(config::NAV_LINK_ACTIVE))
            .collect();
        assert_eq!(active, vec![false, true, false, false, false]);
    }

    #[test]
    fn home_link_is_active_on_root() {
        let links = [link(Some("index.html")), link(Some("contact.html"))];
        assert_eq!(highlight_active(&links, current_page("/")), 1);
        assert!(links[0].has_class(config::NAV_LINK_ACTIVE));
    }
}
