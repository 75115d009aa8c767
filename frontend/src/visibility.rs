//! One-way `hidden -> visible` flags for the fade-in animations, plus the
//! registration lifecycle for whatever reports viewport intersections.

use crate::content::SectionId;
use crate::error::DomError;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;
use yew::Reducible;

pub type OnCrossed = Rc<dyn Fn(SectionId)>;
pub type Handlers = RefCell<HashMap<SectionId, OnCrossed>>;

/// Capability for watching elements enter the viewport.
pub trait ViewportObserver {
    /// Start watching `section`; `on_crossed` runs whenever more than the
    /// configured fraction of it is in view.
    fn observe(&mut self, section: SectionId, on_crossed: OnCrossed) -> Result<(), DomError>;

    fn unobserve(&mut self, section: SectionId);
}

pub fn crosses_threshold(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Delivers one intersection entry to the handler registered for its
/// target. Returns whether a handler ran.
pub fn route_entry(handlers: &Handlers, target_id: &str, is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    if !crosses_threshold(is_intersecting, ratio, threshold) {
        return false;
    }
    let Some(section) = SectionId::from_id(target_id) else {
        return false;
    };
    // clone out so the handler can re-enter observe/unobserve
    let handler = handlers.borrow().get(&section).cloned();
    match handler {
        Some(handler) => {
            handler(section);
            true
        }
        None => false,
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct VisibilityState {
    visible: HashSet<SectionId>,
}

impl VisibilityState {
    pub fn is_visible(&self, section: SectionId) -> bool {
        self.visible.contains(&section)
    }

    /// Returns true only for the first call per section.
    pub fn mark_visible(&mut self, section: SectionId) -> bool {
        self.visible.insert(section)
    }
}

pub enum VisibilityAction {
    Seen(SectionId),
}

impl Reducible for VisibilityState {
    type Action = VisibilityAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            VisibilityAction::Seen(section) => {
                if self.is_visible(section) {
                    // unchanged state skips the re-render
                    return self;
                }
                let mut next = (*self).clone();
                next.mark_visible(section);
                log::debug!("Section #{} is now visible", section.as_str());
                Rc::new(next)
            }
        }
    }
}

/// Sections registered with an observer. Everything registered here is
/// unregistered again on `stop` or drop.
pub struct SectionWatch<O: ViewportObserver> {
    observer: O,
    watched: Vec<SectionId>,
}

impl<O: ViewportObserver> SectionWatch<O> {
    pub fn start(mut observer: O, sections: &[SectionId], on_visible: OnCrossed) -> Self {
        let mut watched = Vec::with_capacity(sections.len());
        for &section in sections {
            match observer.observe(section, on_visible.clone()) {
                Ok(()) => watched.push(section),
                Err(e) => log::warn!("Not animating #{}: {}", section.as_str(), e),
            }
        }
        SectionWatch { observer, watched }
    }

    pub fn watched(&self) -> &[SectionId] {
        &self.watched
    }

    pub fn stop(self) {}

    fn release(&mut self) {
        for section in self.watched.drain(..) {
            self.observer.unobserve(section);
        }
    }
}

impl<O: ViewportObserver> Drop for SectionWatch<O> {
    fn drop(&mut self) {
        self.release();
    }
}
