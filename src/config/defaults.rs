//! Default value functions for configuration.
//!
//! Separated into its own module for clarity and reuse.

use slirc_components::{ButtonStyle, Emoji};

// =============================================================================
// Label Defaults
// =============================================================================

pub fn default_index_label() -> String {
    "Page".to_string()
}

// =============================================================================
// Emoji Defaults
// =============================================================================

pub fn default_first_emoji() -> Emoji {
    Emoji::unicode("⏮️")
}

pub fn default_prev_emoji() -> Emoji {
    Emoji::unicode("◀")
}

pub fn default_next_emoji() -> Emoji {
    Emoji::unicode("▶")
}

pub fn default_last_emoji() -> Emoji {
    Emoji::unicode("⏭️")
}

// =============================================================================
// Style Defaults
// =============================================================================

/// Style of the first/previous/next/last buttons.
pub fn default_nav_style() -> ButtonStyle {
    ButtonStyle::Primary
}

/// Style of the index and custom display buttons.
pub fn default_display_style() -> ButtonStyle {
    ButtonStyle::Secondary
}
