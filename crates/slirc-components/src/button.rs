//! Buttons.

use crate::emoji::Emoji;
use crate::style::ButtonStyle;

/// An interactive (or display-only) button.
///
/// Regular buttons emit an activation carrying their `custom_id`. Link
/// buttons carry a `url` instead and never reach the bot.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Button {
    /// Visual style.
    pub style: ButtonStyle,
    /// Text shown on the button.
    pub label: Option<String>,
    /// Emoji shown before the label.
    pub emoji: Option<Emoji>,
    /// Identifier echoed back in activations.
    pub custom_id: Option<String>,
    /// Target of a link button.
    pub url: Option<String>,
    /// Greyed out and not clickable.
    pub disabled: bool,
}

impl Button {
    /// Create an enabled button with the given style and nothing else.
    pub fn new(style: ButtonStyle) -> Self {
        Self {
            style,
            ..Self::default()
        }
    }

    /// Create a link button.
    pub fn link(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(ButtonStyle::Link)
            .with_label(label)
            .with_url(url)
    }

    /// Set the label. Empty labels are dropped so emoji-only buttons stay clean.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        let label = label.into();
        self.label = (!label.is_empty()).then_some(label);
        self
    }

    /// Set the emoji.
    pub fn with_emoji(mut self, emoji: Emoji) -> Self {
        self.emoji = Some(emoji);
        self
    }

    /// Set the emoji if one is given.
    pub fn with_optional_emoji(mut self, emoji: Option<Emoji>) -> Self {
        self.emoji = emoji;
        self
    }

    /// Set the custom id.
    pub fn with_custom_id(mut self, custom_id: impl Into<String>) -> Self {
        self.custom_id = Some(custom_id.into());
        self
    }

    /// Set the url.
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the disabled flag.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Whether this is a link button.
    #[inline]
    pub fn is_link(&self) -> bool {
        self.style == ButtonStyle::Link
    }
}
