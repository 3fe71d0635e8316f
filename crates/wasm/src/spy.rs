//! ScrollSpy builder API and the mount/evaluation loop.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use waypoint_core::{NavIndex, SpyConfig, SpyError, Target, Tracker, fragment_of};

use crate::dom::{self, Page};
use crate::error::WaypointError;
use crate::stamp;

/// The main entry point for scroll-spy setup in JavaScript.
///
/// # Example
///
/// ```javascript
/// const spy = new ScrollSpy()
///   .withNavSelector('.nav-link')
///   .withActiveClass('active')
///   .withMargin(120)
///   .withYearSelector('.year');
///
/// spy.mount();
/// console.log(spy.activeIndex);
/// ```
#[wasm_bindgen]
pub struct ScrollSpy {
    config: SpyConfig,
    state: Option<Rc<SpyState>>,
}

/// Page-lifetime context built once by `mount`.
struct SpyState {
    page: Page,
    index: NavIndex<Element, Element>,
    tracker: Tracker,
    active_class: String,
    active: Cell<usize>,
}

#[wasm_bindgen]
impl ScrollSpy {
    /// Create a new ScrollSpy builder with the default configuration.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        // Panic hook is set in lib.rs init()
        Self {
            config: SpyConfig::default(),
            state: None,
        }
    }

    /// Set the CSS selector matching the navigation links.
    #[wasm_bindgen(js_name = withNavSelector)]
    pub fn with_nav_selector(mut self, selector: &str) -> Self {
        self.config.nav_selector = selector.to_string();
        self
    }

    /// Set the CSS selector matching the footer year placeholder.
    #[wasm_bindgen(js_name = withYearSelector)]
    pub fn with_year_selector(mut self, selector: &str) -> Self {
        self.config.year_selector = selector.to_string();
        self
    }

    /// Set the class token applied to the active navigation link.
    #[wasm_bindgen(js_name = withActiveClass)]
    pub fn with_active_class(mut self, class: &str) -> Self {
        self.config.active_class = class.to_string();
        self
    }

    /// Set the lookahead added to the scroll offset before comparison.
    #[wasm_bindgen(js_name = withMargin)]
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.config.margin = margin;
        self
    }

    /// Replace the whole configuration from a JavaScript object.
    ///
    /// Unspecified keys keep their defaults:
    ///
    /// ```javascript
    /// const spy = new ScrollSpy().withConfigObject({ navSelector: 'nav a', margin: 64 });
    /// ```
    #[wasm_bindgen(js_name = withConfigObject)]
    pub fn with_config_object(mut self, config: JsValue) -> Result<ScrollSpy, JsValue> {
        self.config = serde_wasm_bindgen::from_value(config)
            .map_err(|e| WaypointError::config(format!("Invalid config object: {}", e)))?;
        Ok(self)
    }

    /// The current configuration, as a JavaScript object.
    #[wasm_bindgen(getter)]
    pub fn config(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.config)
            .map_err(|e| WaypointError::config(format!("Failed to serialize config: {}", e)).into())
    }

    /// Build the navigation index, stamp the year, run one evaluation, and
    /// register the window listeners.
    ///
    /// The index is fixed at mount time; section offsets are re-read on
    /// every evaluation. Listeners stay registered for the rest of the page
    /// session.
    #[wasm_bindgen]
    pub fn mount(&mut self) -> Result<(), JsValue> {
        if self.state.is_some() {
            return Err(WaypointError::config("ScrollSpy is already mounted").into());
        }

        let page = Page::acquire().map_err(WaypointError::from)?;

        let links = page
            .query_all(&self.config.nav_selector)
            .map_err(WaypointError::from)?;
        let index = NavIndex::build(
            links.into_iter().map(|link| {
                let fragment = link
                    .get_attribute("href")
                    .and_then(|href| fragment_of(&href).map(String::from));
                (link, fragment)
            }),
            |fragment| page.by_id(fragment),
        );
        log::debug!(
            "scroll spy mounted: {} links, {} resolved",
            index.len(),
            index.resolved_count()
        );

        stamp::stamp_year(&page, &self.config.year_selector).map_err(WaypointError::from)?;

        let state = Rc::new(SpyState {
            page,
            index,
            tracker: Tracker::new(self.config.margin),
            active_class: self.config.active_class.clone(),
            active: Cell::new(0),
        });

        // WASM init usually completes after `load` has fired, so the first
        // evaluation runs here instead of waiting for the event.
        evaluate(&state);
        register_listeners(&state).map_err(WaypointError::from)?;

        self.state = Some(state);
        Ok(())
    }

    /// Re-run the evaluation on demand, e.g. after a programmatic layout
    /// change. A no-op before `mount`.
    #[wasm_bindgen]
    pub fn refresh(&self) {
        if let Some(state) = &self.state {
            evaluate(state);
        }
    }

    /// Whether `mount` has run.
    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.state.is_some()
    }

    /// Index of the entry chosen by the most recent evaluation, or
    /// `undefined` before `mount`.
    #[wasm_bindgen(getter, js_name = activeIndex)]
    pub fn active_index(&self) -> Option<usize> {
        self.state.as_ref().map(|state| state.active.get())
    }

    /// Number of navigation links in the index.
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.state.as_ref().map_or(0, |state| state.index.len())
    }
}

impl Default for ScrollSpy {
    fn default() -> Self {
        Self::new()
    }
}

/// One synchronous evaluation: read the scroll offset and fresh section
/// tops, pick the active entry, and move the marker class.
///
/// Runs on every scroll event without throttling; the scan is linear over a
/// handful of entries.
fn evaluate(state: &SpyState) {
    if state.index.is_empty() {
        return;
    }

    let tops = state.index.entries().iter().map(|entry| match &entry.target {
        Target::Resolved(section) => dom::section_top(section),
        Target::Unresolved => None,
    });
    let active = state
        .tracker
        .active_index(state.page.scroll_offset(), tops);

    for (i, entry) in state.index.entries().iter().enumerate() {
        dom::set_class(&entry.link, &state.active_class, i == active);
    }
    state.active.set(active);
}

/// Register the `scroll` and `load` listeners on the window.
///
/// The spy lives for the rest of the page session; the closures are
/// intentionally leaked rather than torn down.
fn register_listeners(state: &Rc<SpyState>) -> Result<(), SpyError> {
    for event in ["scroll", "load"] {
        let handler_state = Rc::clone(state);
        let closure = Closure::<dyn FnMut()>::new(move || evaluate(&handler_state));
        state
            .page
            .window()
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(|e| {
                SpyError::Environment(format!("Failed to register '{}' listener: {:?}", event, e))
            })?;
        closure.forget();
    }
    Ok(())
}
