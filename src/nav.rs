//! Same-page navigation between the anchored sections.

/// Sections reachable from the nav bar, in nav order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Skills,
    Experience,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Contact,
    ];

    /// Element id of the section's anchor.
    pub fn id(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// Something that can find an element by id and scroll it into view.
pub trait Viewport {
    type Element;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// Starts a smooth scroll to `el`. Fire and forget.
    fn scroll_into_view(&self, el: &Self::Element);
}

/// Scrolls to the element with `id` if there is one. Returns whether a scroll
/// was started; a missing element is not an error.
pub fn scroll_to_section<V: Viewport>(viewport: &V, id: &str) -> bool {
    match viewport.element_by_id(id) {
        Some(el) => {
            viewport.scroll_into_view(&el);
            true
        }
        None => {
            log::debug!("no element with id `{id}`, not scrolling");
            false
        }
    }
}

/// The browser document. Only usable in the hydrated client.
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    type Element = web_sys::Element;

    fn element_by_id(&self, id: &str) -> Option<web_sys::Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }

    fn scroll_into_view(&self, el: &web_sys::Element) {
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakeViewport {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeViewport {
        fn with_sections() -> Self {
            Self {
                ids: Section::ALL.iter().map(|s| s.id()).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl Viewport for FakeViewport {
        type Element = String;

        fn element_by_id(&self, id: &str) -> Option<String> {
            self.ids.iter().find(|i| **i == id).map(|i| i.to_string())
        }

        fn scroll_into_view(&self, el: &String) {
            self.scrolled.borrow_mut().push(el.clone());
        }
    }

    #[test]
    fn test_scroll_to_known_section() {
        let viewport = FakeViewport::with_sections();
        assert!(scroll_to_section(&viewport, "projects"));
        assert_eq!(*viewport.scrolled.borrow(), vec!["projects".to_string()]);
    }

    #[test]
    fn test_scroll_to_unknown_section_is_noop() {
        let viewport = FakeViewport::with_sections();
        assert!(!scroll_to_section(&viewport, "blog"));
        assert!(!scroll_to_section(&viewport, ""));
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_missing_element_is_noop() {
        // markup without the anchor
        let viewport = FakeViewport {
            ids: vec!["about"],
            scrolled: RefCell::new(Vec::new()),
        };
        assert!(!scroll_to_section(&viewport, Section::Contact.id()));
        assert!(viewport.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_section_ids() {
        let ids: Vec<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["about", "skills", "experience", "projects", "contact"]);
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
            assert_eq!(section.label().to_lowercase(), section.id());
        }
        assert_eq!(Section::from_id("services"), None);
    }
}
