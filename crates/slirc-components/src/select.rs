//! Select menus (dropdowns).

use crate::emoji::Emoji;
use crate::error::ComponentError;

/// Maximum number of options a select menu may carry.
pub const MAX_SELECT_OPTIONS: usize = 25;

/// One entry of a select menu.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectOption {
    /// Text shown for the option.
    pub label: String,
    /// Value reported back when the option is chosen.
    pub value: String,
    /// Secondary text under the label.
    pub description: Option<String>,
    /// Emoji shown before the label.
    pub emoji: Option<Emoji>,
    /// Pre-selected option.
    pub default: bool,
}

impl SelectOption {
    /// Create an option with a label and value.
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            description: None,
            emoji: None,
            default: false,
        }
    }
}

/// A dropdown selector. Occupies a full action row.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SelectMenu {
    /// Identifier echoed back in activations.
    pub custom_id: String,
    /// Choices, at most [`MAX_SELECT_OPTIONS`].
    pub options: Vec<SelectOption>,
    /// Text shown when nothing is selected.
    pub placeholder: Option<String>,
    /// Minimum number of choices.
    pub min_values: u8,
    /// Maximum number of choices.
    pub max_values: u8,
    /// Greyed out and not clickable.
    pub disabled: bool,
}

impl SelectMenu {
    /// Create a single-choice select menu.
    pub fn new(
        custom_id: impl Into<String>,
        options: Vec<SelectOption>,
    ) -> Result<Self, ComponentError> {
        if options.len() > MAX_SELECT_OPTIONS {
            return Err(ComponentError::TooManyOptions {
                max: MAX_SELECT_OPTIONS,
                got: options.len(),
            });
        }
        Ok(Self {
            custom_id: custom_id.into(),
            options,
            placeholder: None,
            min_values: 1,
            max_values: 1,
            disabled: false,
        })
    }

    /// Set the placeholder text.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}
