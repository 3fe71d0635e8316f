//! # waypoint-core
//!
//! Platform-agnostic scroll-spy core library.
//!
//! This crate provides the decision logic behind Waypoint's navigation
//! highlighting:
//! - **nav**: the navigation index pairing links with their resolved sections
//! - **tracker**: active-section selection from the current scroll offset
//! - **year**: calendar-year stamping for the footer
//! - **config**: runtime configuration shared with the JS boundary
//! - **error**: error types for mount and evaluation
//!
//! ## Design Principle
//!
//! This crate has **no platform dependencies**:
//! - No DOM access (`web-sys`)
//! - No JS interop (`wasm-bindgen`)
//! - No event loop assumptions
//!
//! All browser-specific functionality lives in the `waypoint-wasm` bindings
//! crate, which feeds DOM measurements into this crate and applies its
//! decisions back to the page. Everything here runs under plain `cargo test`.

pub mod config;
pub mod error;
pub mod nav;
pub mod tracker;
pub mod year;

// Re-export commonly used types
pub use config::SpyConfig;
pub use error::SpyError;
pub use nav::{NavEntry, NavIndex, Target, fragment_of};
pub use tracker::{LOOKAHEAD_MARGIN, Tracker};
