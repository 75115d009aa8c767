use crate::content::SectionId;
use crate::error::DomError;
use crate::visibility::{route_entry, Handlers, OnCrossed, ViewportObserver};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// `ViewportObserver` backed by the browser's `IntersectionObserver`. The
/// observer is disconnected when this is dropped.
pub struct IntersectionViewport {
    observer: IntersectionObserver,
    handlers: Rc<Handlers>,
    _callback: EntriesCallback,
}

impl IntersectionViewport {
    pub fn new(threshold: f64) -> Result<Self, DomError> {
        let handlers: Rc<Handlers> = Rc::default();

        let callback = {
            let handlers = handlers.clone();
            Closure::wrap(Box::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    route_entry(
                        &handlers,
                        &entry.target().id(),
                        entry.is_intersecting(),
                        entry.intersection_ratio(),
                        threshold,
                    );
                }
            }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>)
        };

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
            .map_err(DomError::from_js)?;

        Ok(IntersectionViewport {
            observer,
            handlers,
            _callback: callback,
        })
    }
}

fn find_element(id: &str) -> Result<Element, DomError> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))
}

impl ViewportObserver for IntersectionViewport {
    fn observe(&mut self, section: SectionId, on_crossed: OnCrossed) -> Result<(), DomError> {
        let element = find_element(section.as_str())?;
        self.handlers.borrow_mut().insert(section, on_crossed);
        self.observer.observe(&element);
        Ok(())
    }

    fn unobserve(&mut self, section: SectionId) {
        self.handlers.borrow_mut().remove(&section);
        // The element may already be gone during teardown; disconnect on drop
        // covers that case.
        if let Ok(element) = find_element(section.as_str()) {
            self.observer.unobserve(&element);
        }
    }
}

impl Drop for IntersectionViewport {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
