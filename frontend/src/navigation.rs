use crate::content::SectionId;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

/// Something that can bring an element into view.
pub trait Scroller {
    /// Starts a smooth scroll to the element with `element_id`. Returns false
    /// when no such element exists; nothing happens in that case.
    fn smooth_scroll_to(&self, element_id: &str) -> bool;
}

/// Scrolls the real document via `Element::scrollIntoView`.
pub struct WindowScroller;

impl Scroller for WindowScroller {
    fn smooth_scroll_to(&self, element_id: &str) -> bool {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(element_id));
        match element {
            Some(element) => {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Start);
                element.scroll_into_view_with_scroll_into_view_options(&options);
                true
            }
            None => {
                log::debug!("No element #{} to scroll to", element_id);
                false
            }
        }
    }
}

/// Mobile menu state plus the link-activation rules.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavController {
    menu_open: bool,
}

impl NavController {
    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Nav link click: the menu is closed first so it does not cover the
    /// destination, whether or not the target exists.
    pub fn activate<S: Scroller + ?Sized>(&mut self, target: &str, scroller: &S) -> bool {
        self.menu_open = false;
        scroller.smooth_scroll_to(target)
    }

    /// Call-to-action links inside sections scroll without touching the menu.
    pub fn jump<S: Scroller + ?Sized>(&self, target: &str, scroller: &S) -> bool {
        scroller.smooth_scroll_to(target)
    }

    pub fn activate_section<S: Scroller + ?Sized>(&mut self, section: SectionId, scroller: &S) -> bool {
        self.activate(section.as_str(), scroller)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::nav_items;
    use std::cell::RefCell;

    /// Records scroll requests against a fixed set of element ids.
    struct FakeScroller {
        present: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakeScroller {
        fn with_sections() -> Self {
            FakeScroller {
                present: SectionId::ALL.iter().map(|s| s.as_str()).collect(),
                scrolled: RefCell::new(Vec::new()),
            }
        }
    }

    impl Scroller for FakeScroller {
        fn smooth_scroll_to(&self, element_id: &str) -> bool {
            if self.present.contains(&element_id) {
                self.scrolled.borrow_mut().push(element_id.to_string());
                true
            } else {
                false
            }
        }
    }

    #[test]
    fn services_link_scrolls_and_closes_menu() {
        let scroller = FakeScroller::with_sections();
        let mut nav = NavController::default();
        nav.toggle_menu();
        assert!(nav.is_menu_open());

        assert!(nav.activate_section(SectionId::Services, &scroller));
        assert!(!nav.is_menu_open());
        assert_eq!(*scroller.scrolled.borrow(), vec!["services".to_string()]);
    }

    #[test]
    fn every_nav_item_scrolls_to_its_target() {
        let scroller = FakeScroller::with_sections();
        let mut nav = NavController::default();
        for item in nav_items() {
            assert!(nav.activate_section(item.target, &scroller));
            let last = scroller.scrolled.borrow().last().cloned();
            assert_eq!(last.as_deref(), Some(item.target.as_str()));
        }
    }

    #[test]
    fn unknown_target_is_silent_but_still_closes_menu() {
        let scroller = FakeScroller::with_sections();
        let mut nav = NavController::default();
        nav.toggle_menu();

        assert!(!nav.activate("pricing", &scroller));
        assert!(!nav.is_menu_open());
        assert!(scroller.scrolled.borrow().is_empty());
    }

    #[test]
    fn activating_with_menu_closed_leaves_it_closed() {
        let scroller = FakeScroller::with_sections();
        let mut nav = NavController::default();
        nav.activate("home", &scroller);
        assert!(!nav.is_menu_open());
    }

    #[test]
    fn jump_does_not_touch_the_menu() {
        let scroller = FakeScroller::with_sections();
        let mut nav = NavController::default();
        nav.toggle_menu();
        assert!(nav.jump("contact", &scroller));
        assert!(nav.is_menu_open());
    }

    #[test]
    fn toggle_flips_the_flag() {
        let mut nav = NavController::default();
        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.is_menu_open());
    }
}
