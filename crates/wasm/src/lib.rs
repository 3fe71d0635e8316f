//! WebAssembly bindings for the Waypoint scroll spy.
//!
//! This crate wires the platform-agnostic `waypoint-core` engine to a real
//! page: it queries the navigation links, keeps the active link highlighted
//! while the page scrolls, and stamps the current year into the footer.
//!
//! # Architecture
//!
//! All decision logic lives in `waypoint-core`; this crate only reads from
//! and writes to the DOM. Every evaluation runs synchronously on the browser
//! UI thread, directly at scroll-event frequency. There is no throttling:
//! each run is a linear scan over a handful of navigation entries, cheap
//! enough to execute on every event.
//!
//! ## Module Structure
//!
//! - [`spy`] - `ScrollSpy` builder API and the mount/evaluation loop
//! - [`dom`] - window/document access, queries, offsets, class toggling
//! - [`stamp`] - footer year stamping
//! - [`error`] - error types with JavaScript interop
//!
//! # Example
//!
//! ```javascript
//! import init, { ScrollSpy } from '@waypoint/wasm';
//!
//! await init();
//!
//! const spy = new ScrollSpy()
//!   .withNavSelector('.nav-link')
//!   .withActiveClass('active')
//!   .withMargin(120)
//!   .withYearSelector('.year');
//!
//! spy.mount();
//! ```
//!
//! Mounting builds the navigation index once, stamps the year, runs one
//! immediate evaluation, and registers `scroll` and `load` listeners for the
//! rest of the page session. There is no unmount: the hosting session ends
//! the lifecycle.
//!
//! # Browser Support
//!
//! Requires:
//! - WebAssembly support (all modern browsers)
//! - JavaScript ES6+ (for wasm-bindgen glue code)

mod dom;
mod error;
mod spy;
mod stamp;

pub use error::WaypointError;
pub use spy::ScrollSpy;

use wasm_bindgen::prelude::*;

/// Initialize the WASM module.
///
/// This function sets up panic hooks for better error messages in the browser
/// console. It is called automatically when using wasm-pack's generated
/// JavaScript.
#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages
    console_error_panic_hook::set_once();

    #[cfg(feature = "console-logging")]
    {
        // Initialize console logging if the feature is enabled
        console_log::init_with_level(log::Level::Debug).ok();
    }
}

/// Get the version of the waypoint-wasm library.
#[wasm_bindgen(js_name = getVersion)]
pub fn get_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Stamp the current calendar year into the first element matching
/// `selector` (default `.year`).
///
/// Standalone entry point for pages that only want the footer stamp.
/// Returns `true` if an element was updated, `false` if none matched.
#[wasm_bindgen(js_name = stampYear)]
pub fn stamp_year(selector: Option<String>) -> Result<bool, JsValue> {
    let page = dom::Page::acquire().map_err(WaypointError::from)?;
    let selector = selector.unwrap_or_else(|| waypoint_core::SpyConfig::default().year_selector);
    Ok(stamp::stamp_year(&page, &selector).map_err(WaypointError::from)?)
}
