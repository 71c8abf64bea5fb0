use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while running under trunk serve
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Header
pub const HEADER: &str = ".header";
pub const HEADER_SCROLLED: &str = "header--scrolled";
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

// Navigation
pub const MENU_TOGGLE: &str = ".menu-toggle";
pub const MENU_TOGGLE_OPEN: &str = "menu-toggle--open";
pub const NAV: &str = ".nav";
pub const NAV_OPEN: &str = "nav--open";
pub const NAV_LINK: &str = ".nav__link";
pub const NAV_LINK_ACTIVE: &str = "nav__link--active";

// Anchors
pub const ANCHOR_LINKS: &str = r##"a[href^="#"]"##;
pub const HEADER_OFFSET: f64 = 100.0;

// Fade-in
pub const OBSERVE_FADE: &str = ".observe-fade";
pub const FADE_IN_CLASS: &str = "animate-fade-in-up";
pub const FADE_THRESHOLD: f64 = 0.1;
pub const FADE_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// Forms
pub const SUBMIT_BUTTON: &str = r#"button[type="submit"]"#;
pub const FORM_MESSAGE: &str = ".form-message";
pub const WEBHOOK_ATTRIBUTE: &str = "data-webhook";
pub const MESSAGE_TIMEOUT_MS: u32 = 5_000;

// Footer
pub const CURRENT_YEAR: &str = ".current-year";
pub const HOME_PAGE: &str = "index.html";
