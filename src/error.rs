//! Unified error handling for slirc-paginator.
//!
//! Configuration failures live in [`crate::config::ConfigError`]; this module
//! wraps them together with render-time and collaborator failures so a
//! session run has a single error type.

use slirc_components::ComponentError;
use thiserror::Error;

use crate::config::ConfigError;
use crate::messenger::MessengerError;

// ============================================================================
// Paginator Errors
// ============================================================================

/// Errors that end a paginator session abnormally.
#[derive(Debug, Error)]
pub enum PaginatorError {
    /// Construction rejected the configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An auxiliary control does not fit in the navigation row and the
    /// overflow row is disabled.
    #[error("too many buttons: {control} button does not fit and use_overflow is disabled")]
    TooManyButtons {
        /// Which auxiliary control could not be placed.
        control: &'static str,
    },

    #[error("component error: {0}")]
    Component(#[from] ComponentError),

    /// Failure reported by the messaging collaborator, passed through unchanged.
    #[error("messenger error: {0}")]
    Messenger(#[from] MessengerError),
}

impl PaginatorError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(err) => err.error_code(),
            Self::TooManyButtons { .. } => "too_many_buttons",
            Self::Component(_) => "component_error",
            Self::Messenger(_) => "messenger_error",
        }
    }
}

/// Result type for paginator operations.
pub type PaginatorResult<T> = Result<T, PaginatorError>;
