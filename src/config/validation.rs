//! Configuration validation.
//!
//! Cross-field rules run once the page count is known. Length mismatches are
//! hard errors; contradictory toggles are auto-corrected and reported as
//! warnings so session construction still succeeds.

use slirc_components::MAX_SELECT_OPTIONS;
use thiserror::Error;
use tracing::warn;

use super::types::{ConfigError, PaginatorConfig};

/// Non-fatal configuration problems that were corrected automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
    /// Index button requested without navigation buttons; it was turned off.
    #[error("index button cannot be used with use_buttons = false")]
    BadButtons,
    /// `author_only` combined with `only_for`; `author_only` was turned off.
    #[error("author_only cannot be combined with only_for, only_for takes precedence")]
    BadOnly,
    /// Too many pages for the selector; it was turned off.
    #[error("select menu supports at most 25 pages, got {pages}; selector disabled")]
    SelectOverCapacity { pages: usize },
}

/// Reject per-page lists that do not line up with the pages.
pub fn check_page_lengths(config: &PaginatorConfig, page_count: usize) -> Result<(), ConfigError> {
    if page_count == 0 {
        return Err(ConfigError::EmptyPages);
    }

    let lists = [
        ("content", config.content.as_ref()),
        ("link_label", Some(&config.link_label)),
        ("link_url", Some(&config.link_url)),
    ];
    for (field, option) in lists {
        if let Some(actual) = option.and_then(|text| text.per_page_len())
            && actual != page_count
        {
            return Err(ConfigError::LengthMismatch {
                field,
                expected: page_count,
                actual,
            });
        }
    }
    Ok(())
}

/// Apply the cross-field rules in place, returning what was corrected.
pub fn normalize(config: &mut PaginatorConfig, page_count: usize) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if config.index_button_enabled() && !config.use_buttons {
        config.use_index_button = Some(false);
        warnings.push(ConfigWarning::BadButtons);
    }

    if config.author_only && config.only_for.as_ref().is_some_and(|only| !only.is_empty()) {
        config.author_only = false;
        warnings.push(ConfigWarning::BadOnly);
    }

    if config.use_select && page_count > MAX_SELECT_OPTIONS {
        config.use_select = false;
        if config.use_index_button.is_none() && config.use_buttons {
            config.use_index_button = Some(true);
        }
        warnings.push(ConfigWarning::SelectOverCapacity { pages: page_count });
    }

    for warning in &warnings {
        warn!(%warning, "paginator configuration corrected");
    }
    warnings
}

/// Run every construction-time check.
pub fn validate(
    config: &mut PaginatorConfig,
    page_count: usize,
) -> Result<Vec<ConfigWarning>, ConfigError> {
    check_page_lengths(config, page_count)?;
    Ok(normalize(config, page_count))
}
