/// Height of the fixed header; in-page scrolls stop this far above the target.
pub const NAV_HEIGHT: f64 = 80.0;

/// How long a clicked link keeps the active marker while the smooth scroll
/// passes over other sections.
pub const CLICK_SETTLE_MS: i64 = 1000;

/// Visibility-observer margin: a section is current while it crosses the band
/// 20% below the top of the viewport.
pub static SECTION_ROOT_MARGIN: &str = "-20% 0px -80% 0px";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

pub const SECTIONS: &[Section] = &[
    Section {
        id: "home",
        label: "Home",
    },
    Section {
        id: "about",
        label: "About",
    },
    Section {
        id: "education",
        label: "Education",
    },
    Section {
        id: "certifications",
        label: "Certifications",
    },
    Section {
        id: "projects",
        label: "Projects",
    },
    Section {
        id: "skills",
        label: "Skills",
    },
    Section {
        id: "contact",
        label: "Contact",
    },
];

/// Returns the element id an in-page link points at.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Document-relative scroll position that puts an element just below the
/// header. `element_top` is viewport-relative.
pub fn scroll_target(element_top: f64, scroll_y: f64) -> f64 {
    element_top + scroll_y - NAV_HEIGHT
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pin {
    id: String,
    until_ms: i64,
}

/// Single source of truth for the highlighted nav link and the mobile menu.
///
/// Clicks and the visibility observer both write the current section. A click
/// pins its section until the observer reports it or the pin expires, so the
/// sections scrolled past on the way don't steal the highlight.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Navigator {
    current: Option<String>,
    menu_open: bool,
    pin: Option<Pin>,
}

impl Navigator {
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.current.as_deref() == Some(id)
    }

    pub fn select(&mut self, id: &str, now_ms: i64) {
        self.pin = Some(Pin {
            id: id.to_string(),
            until_ms: now_ms + CLICK_SETTLE_MS,
        });
        self.set_current(id);
    }

    /// Returns whether the write was accepted.
    pub fn observe(&mut self, id: &str, now_ms: i64) -> bool {
        if let Some(pin) = &self.pin {
            if pin.id == id || now_ms >= pin.until_ms {
                self.pin = None;
            } else {
                return false;
            }
        }
        self.set_current(id);
        true
    }

    fn set_current(&mut self, id: &str) {
        if self.current.as_deref() != Some(id) {
            self.current = Some(id.to_string());
        }
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchors() {
        assert_eq!(anchor_target("#about"), Some("about"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target("about"), None);
        assert_eq!(anchor_target("https://example.com/#about"), None);
        assert_eq!(anchor_target(""), None);
    }

    #[test]
    fn scroll_target_leaves_room_for_header() {
        assert_eq!(scroll_target(500.0, 1000.0), 1420.0);
        assert_eq!(scroll_target(0.0, 0.0), -80.0);
    }

    #[test]
    fn section_ids_are_unique() {
        for (i, a) in SECTIONS.iter().enumerate() {
            assert!(SECTIONS[i + 1..].iter().all(|b| b.id != a.id));
        }
    }

    #[test]
    fn observer_alone_is_last_writer_wins() {
        let mut nav = Navigator::default();
        assert!(nav.observe("about", 0));
        assert!(nav.observe("skills", 10));
        assert_eq!(nav.current(), Some("skills"));
        assert!(nav.is_active("skills"));
        assert!(!nav.is_active("about"));
    }

    #[test]
    fn click_pins_until_target_is_observed() {
        let mut nav = Navigator::default();
        nav.observe("home", 0);
        nav.select("contact", 100);
        assert_eq!(nav.current(), Some("contact"));

        // passing over intermediate sections during the scroll
        assert!(!nav.observe("about", 200));
        assert!(!nav.observe("skills", 300));
        assert_eq!(nav.current(), Some("contact"));

        assert!(nav.observe("contact", 400));
        // pin released, normal tracking resumes
        assert!(nav.observe("skills", 500));
        assert_eq!(nav.current(), Some("skills"));
    }

    #[test]
    fn click_pin_expires() {
        let mut nav = Navigator::default();
        nav.select("contact", 0);
        assert!(!nav.observe("about", CLICK_SETTLE_MS - 1));
        assert!(nav.observe("about", CLICK_SETTLE_MS));
        assert_eq!(nav.current(), Some("about"));
    }

    #[test]
    fn menu_toggles_and_closes() {
        let mut nav = Navigator::default();
        assert!(!nav.menu_open());
        nav.toggle_menu();
        assert!(nav.menu_open());
        nav.close_menu();
        assert!(!nav.menu_open());
        nav.close_menu();
        assert!(!nav.menu_open());
    }
}
