//! Emoji references attached to buttons and select options.
//!
//! An emoji is either a plain unicode grapheme (`"▶"`) or a custom guild
//! emoji referenced by id. Custom emoji arrive in mention form:
//! `<:name:id>` or `<a:name:id>` for animated ones.

use std::fmt;

use crate::error::ComponentError;

/// A reference to an emoji.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Emoji {
    /// A unicode emoji, stored as its text.
    Unicode(String),
    /// A custom emoji uploaded to a guild.
    Custom {
        /// Snowflake id of the emoji.
        id: u64,
        /// Emoji name without colons.
        name: String,
        /// Whether the emoji is animated.
        #[cfg_attr(feature = "serde", serde(default))]
        animated: bool,
    },
}

impl Emoji {
    /// Create a unicode emoji reference.
    pub fn unicode(text: impl Into<String>) -> Self {
        Self::Unicode(text.into())
    }

    /// Create a custom emoji reference.
    pub fn custom(id: u64, name: impl Into<String>, animated: bool) -> Self {
        Self::Custom {
            id,
            name: name.into(),
            animated,
        }
    }

    /// Parse raw text into an emoji reference.
    ///
    /// Mention syntax yields [`Emoji::Custom`]; anything else that is not
    /// blank is treated as unicode.
    pub fn parse(raw: &str) -> Result<Self, ComponentError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ComponentError::EmptyEmoji);
        }
        Ok(parse_mention(trimmed).unwrap_or_else(|| Self::Unicode(trimmed.to_string())))
    }
}

/// Parse `<:name:id>` / `<a:name:id>`.
fn parse_mention(s: &str) -> Option<Emoji> {
    let inner = s.strip_prefix('<')?.strip_suffix('>')?;
    let (animated, rest) = match inner.strip_prefix("a:") {
        Some(rest) => (true, rest),
        None => (false, inner.strip_prefix(':')?),
    };
    let (name, id) = rest.split_once(':')?;
    if name.is_empty() {
        return None;
    }
    let id = id.parse().ok()?;
    Some(Emoji::custom(id, name, animated))
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode(text) => f.write_str(text),
            Self::Custom {
                id,
                name,
                animated: true,
            } => write!(f, "<a:{name}:{id}>"),
            Self::Custom { id, name, .. } => write!(f, "<:{name}:{id}>"),
        }
    }
}
