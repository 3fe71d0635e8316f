//! Error types for scroll-spy mount and evaluation.

use thiserror::Error;

/// The main error enum for scroll-spy operations.
///
/// Expected absences (no nav links, unresolved fragments, no year element)
/// are not errors; they are silent no-ops. These variants cover genuine
/// environment failures.
#[derive(Error, Debug, Clone)]
pub enum SpyError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Host environment error: {0}")]
    Environment(String),
    #[error("DOM access error: {0}")]
    Dom(String),
}
