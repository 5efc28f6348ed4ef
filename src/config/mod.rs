//! Paginator configuration loading and validation.
//!
//! This module is split into logical submodules:
//! - [`types`]: The typed option set (`PaginatorConfig`) and its value types
//! - [`defaults`]: Default values for every option
//! - [`options`]: Per-option type checking of raw TOML tables
//! - [`validation`]: Cross-field rules applied at session construction

mod defaults;
mod options;
mod types;
mod validation;

pub use options::OPTION_NAMES;
pub use types::{
    ConfigError, DEFAULT_TIMEOUT_SECS, NavEmojis, NavLabels, NavStyles, OnlyFor, PaginatorConfig,
    TextOption, TimeoutAction,
};
pub use validation::{ConfigWarning, check_page_lengths, normalize, validate};
