//! Error handling for WASM bindings.
//!
//! Converts Waypoint's error types into JavaScript-friendly errors.

use wasm_bindgen::prelude::*;
use waypoint_core::SpyError;

/// Error codes for TypeScript consumption.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Configuration error (invalid config object, double mount)
    Config,
    /// Host environment error (no window, listener registration failed)
    Environment,
    /// DOM access error (invalid selector)
    Dom,
    /// Unknown error
    Unknown,
}

/// A JavaScript-friendly error type.
///
/// Note: This is NOT a wasm_bindgen struct because we need custom
/// conversion to JavaScript Error objects.
#[derive(Debug)]
pub struct WaypointError {
    code: ErrorCode,
    message: String,
}

impl WaypointError {
    /// Create a new error with the given code and message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Config, message)
    }

    /// Create a host environment error.
    pub fn environment(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Environment, message)
    }

    /// Create a DOM access error.
    pub fn dom(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Dom, message)
    }

    /// Get the error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Get the error message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<SpyError> for WaypointError {
    fn from(err: SpyError) -> Self {
        let (code, message) = match &err {
            SpyError::Config(msg) => (ErrorCode::Config, msg.clone()),
            SpyError::Environment(msg) => (ErrorCode::Environment, msg.clone()),
            SpyError::Dom(msg) => (ErrorCode::Dom, msg.clone()),
        };

        Self { code, message }
    }
}

impl From<WaypointError> for JsValue {
    fn from(err: WaypointError) -> Self {
        let js_error = js_sys::Error::new(&err.message);

        // Add the error code as a property
        let code_str = match err.code {
            ErrorCode::Config => "CONFIG_ERROR",
            ErrorCode::Environment => "ENVIRONMENT_ERROR",
            ErrorCode::Dom => "DOM_ERROR",
            ErrorCode::Unknown => "UNKNOWN_ERROR",
        };

        js_sys::Reflect::set(&js_error, &"code".into(), &JsValue::from_str(code_str)).ok();

        js_error.into()
    }
}
