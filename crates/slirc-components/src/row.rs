//! Action rows.
//!
//! A message carries up to five rows. A row holds either up to
//! [`MAX_ROW_WIDTH`] buttons or exactly one select menu.

use crate::button::Button;
use crate::error::ComponentError;
use crate::select::SelectMenu;

/// Maximum number of interactive elements in one row.
pub const MAX_ROW_WIDTH: usize = 5;

/// A single interactive element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum Component {
    /// A button.
    Button(Button),
    /// A select menu.
    Select(SelectMenu),
}

impl Component {
    /// Custom id, if the element reports activations.
    pub fn custom_id(&self) -> Option<&str> {
        match self {
            Self::Button(button) => button.custom_id.as_deref(),
            Self::Select(menu) => Some(&menu.custom_id),
        }
    }

    /// Whether the element is disabled.
    pub fn is_disabled(&self) -> bool {
        match self {
            Self::Button(button) => button.disabled,
            Self::Select(menu) => menu.disabled,
        }
    }

    fn set_disabled(&mut self, disabled: bool) {
        match self {
            Self::Button(button) => button.disabled = disabled,
            Self::Select(menu) => menu.disabled = disabled,
        }
    }
}

/// A horizontal group of components.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRow {
    components: Vec<Component>,
}

impl ActionRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row holding a single select menu.
    pub fn select(menu: SelectMenu) -> Self {
        Self {
            components: vec![Component::Select(menu)],
        }
    }

    /// Append a button.
    pub fn push(&mut self, button: Button) -> Result<(), ComponentError> {
        if self.has_select() {
            return Err(ComponentError::MixedRow);
        }
        if self.is_full() {
            return Err(ComponentError::RowFull {
                capacity: MAX_ROW_WIDTH,
            });
        }
        self.components.push(Component::Button(button));
        Ok(())
    }

    /// Components in display order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the row is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Whether no more buttons fit.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.has_select() || self.components.len() >= MAX_ROW_WIDTH
    }

    fn has_select(&self) -> bool {
        self.components
            .iter()
            .any(|c| matches!(c, Component::Select(_)))
    }

    /// Disable every element in the row.
    pub fn disable_all(&mut self) {
        for component in &mut self.components {
            component.set_disabled(true);
        }
    }

    /// Custom ids of every element that reports activations.
    pub fn custom_ids(&self) -> impl Iterator<Item = &str> {
        self.components.iter().filter_map(Component::custom_id)
    }
}
