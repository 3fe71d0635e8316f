//! DOM access for the scroll spy.
//!
//! Thin wrappers over the web-sys query and mutation surface. Everything the
//! engine knows about the page flows through this module: navigation links
//! and sections in, class toggles and text content out.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use waypoint_core::SpyError;

/// Handle to the hosting page.
///
/// Acquired once at mount and held for the rest of the page session.
pub struct Page {
    window: Window,
    document: Document,
}

impl Page {
    /// Acquire the window and document, failing if the module runs outside
    /// a browsing context.
    pub fn acquire() -> Result<Self, SpyError> {
        let window = web_sys::window()
            .ok_or_else(|| SpyError::Environment("No window object available".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| SpyError::Environment("No document available".to_string()))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, SpyError> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|e| SpyError::Dom(format!("Invalid selector '{}': {:?}", selector, e)))?;

        let mut elements = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            if let Some(node) = list.item(i)
                && let Ok(element) = node.dyn_into::<Element>()
            {
                elements.push(element);
            }
        }
        Ok(elements)
    }

    /// First element matching `selector`, if any.
    pub fn query_first(&self, selector: &str) -> Result<Option<Element>, SpyError> {
        self.document
            .query_selector(selector)
            .map_err(|e| SpyError::Dom(format!("Invalid selector '{}': {:?}", selector, e)))
    }

    /// Element with the given id, if any.
    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    /// Current vertical scroll offset of the viewport.
    pub fn scroll_offset(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }
}

/// Top offset of a section element.
///
/// Read fresh on every evaluation so page reflow is picked up. Returns
/// `None` for elements that are not rendered boxes.
pub fn section_top(element: &Element) -> Option<f64> {
    element
        .dyn_ref::<HtmlElement>()
        .map(|html| f64::from(html.offset_top()))
}

/// Add or remove `class` on `element` according to `on`.
pub fn set_class(element: &Element, class: &str, on: bool) {
    let list = element.class_list();
    let result = if on {
        list.add_1(class)
    } else {
        list.remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("classList update for '{}' failed: {:?}", class, e);
    }
}
