use folio_core::Document;
use folio_protocol::{Bounds, SectionId};
use tracing::warn;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use crate::storage::js_error;

/// The live page, read through the DOM.
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: web_sys::Window,
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(window: web_sys::Window, document: web_sys::Document) -> Self {
        Self { window, document }
    }

    pub fn window(&self) -> &web_sys::Window {
        &self.window
    }

    pub fn document(&self) -> &web_sys::Document {
        &self.document
    }

    fn section(&self, id: SectionId) -> Option<web_sys::Element> {
        self.document.get_element_by_id(id.as_str())
    }
}

impl Document for WebDocument {
    fn section_bounds(&self, id: SectionId) -> Option<Bounds> {
        let rect = self.section(id)?.get_bounding_client_rect();
        Some(Bounds::new(rect.top(), rect.bottom()))
    }

    fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn scroll_to_top(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn scroll_into_view(&mut self, id: SectionId) -> bool {
        let Some(element) = self.section(id) else {
            return false;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }
}

/// Look up an element that the page skeleton is expected to provide.
/// Missing elements are logged and skipped by the callers.
pub(crate) fn element(document: &web_sys::Document, id: &str) -> Option<web_sys::Element> {
    let found = document.get_element_by_id(id);
    if found.is_none() {
        warn!("page has no #{id} element");
    }
    found
}

/// Every element matching `selector`, skipping non-element nodes.
pub(crate) fn query_all(document: &web_sys::Document, selector: &str) -> Vec<web_sys::Element> {
    use wasm_bindgen::JsCast;

    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            warn!("bad selector {selector:?}: {}", js_error(&e));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::Element>().ok())
        .collect()
}
