//! Core configuration types and loading.

use serde::Deserialize;
use slirc_components::{Actor, ButtonStyle, Emoji, RoleId, UserId};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use super::defaults::{
    default_display_style, default_first_emoji, default_index_label, default_last_emoji,
    default_nav_style, default_next_emoji, default_prev_emoji,
};

/// Timeout applied when `timeout` is unset.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A value is not one of the kinds its option accepts.
    #[error("{field} must be {expected}, got {actual}")]
    IncorrectDataType {
        field: &'static str,
        expected: &'static str,
        actual: String,
    },
    #[error("unknown paginator option: {0}")]
    UnknownOption(String),
    /// A per-page list does not line up with the pages.
    #[error("{field} has {actual} entries but there are {expected} pages")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("a paginator needs at least one page")]
    EmptyPages,
}

impl ConfigError {
    /// Build an [`ConfigError::IncorrectDataType`] from anything printable.
    pub fn incorrect(
        field: &'static str,
        expected: &'static str,
        actual: impl std::fmt::Display,
    ) -> Self {
        Self::IncorrectDataType {
            field,
            expected,
            actual: actual.to_string(),
        }
    }

    /// Get a static error code string for log labeling.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "config_io",
            Self::Parse(_) => "config_parse",
            Self::IncorrectDataType { .. } => "incorrect_data_type",
            Self::UnknownOption(_) => "unknown_option",
            Self::LengthMismatch { .. } => "length_mismatch",
            Self::EmptyPages => "empty_pages",
        }
    }
}

// =============================================================================
// Value types
// =============================================================================

/// Text that is either shared by every page or given per page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextOption {
    /// Same text on every page.
    Shared(String),
    /// One entry per page, aligned with the page sequence.
    PerPage(Vec<String>),
}

impl TextOption {
    /// Text for the 1-based page `index`.
    pub fn for_page(&self, index: usize) -> Option<&str> {
        match self {
            Self::Shared(text) => Some(text),
            Self::PerPage(texts) => index.checked_sub(1).and_then(|i| texts.get(i)).map(String::as_str),
        }
    }

    /// Number of entries if this is a per-page list.
    pub fn per_page_len(&self) -> Option<usize> {
        match self {
            Self::Shared(_) => None,
            Self::PerPage(texts) => Some(texts.len()),
        }
    }
}

impl Default for TextOption {
    fn default() -> Self {
        Self::Shared(String::new())
    }
}

impl From<&str> for TextOption {
    fn from(text: &str) -> Self {
        Self::Shared(text.to_string())
    }
}

impl From<String> for TextOption {
    fn from(text: String) -> Self {
        Self::Shared(text)
    }
}

impl From<Vec<String>> for TextOption {
    fn from(texts: Vec<String>) -> Self {
        Self::PerPage(texts)
    }
}

/// Explicit allow-list of users and roles that may drive a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnlyFor {
    pub users: Vec<UserId>,
    pub roles: Vec<RoleId>,
}

impl OnlyFor {
    /// Allow-list with a single user.
    pub fn user(id: impl Into<UserId>) -> Self {
        Self {
            users: vec![id.into()],
            roles: Vec::new(),
        }
    }

    /// Allow-list with a single role.
    pub fn role(id: impl Into<RoleId>) -> Self {
        Self {
            users: Vec::new(),
            roles: vec![id.into()],
        }
    }

    /// Add a user.
    pub fn and_user(mut self, id: impl Into<UserId>) -> Self {
        self.users.push(id.into());
        self
    }

    /// Add a role.
    pub fn and_role(mut self, id: impl Into<RoleId>) -> Self {
        self.roles.push(id.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.roles.is_empty()
    }

    /// Whether `actor` is listed by identity or holds a listed role.
    pub fn admits(&self, actor: &Actor) -> bool {
        self.users.contains(&actor.id) || self.roles.iter().any(|role| actor.has_role(*role))
    }
}

/// Labels of the navigation buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLabels {
    pub first: String,
    pub prev: String,
    /// Prefix of the `current/top` counter on the index button and selector.
    pub index: String,
    pub next: String,
    pub last: String,
}

impl Default for NavLabels {
    fn default() -> Self {
        Self {
            first: String::new(),
            prev: String::new(),
            index: default_index_label(),
            next: String::new(),
            last: String::new(),
        }
    }
}

/// Emojis of the navigation buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEmojis {
    pub first: Emoji,
    pub prev: Emoji,
    pub next: Emoji,
    pub last: Emoji,
}

impl Default for NavEmojis {
    fn default() -> Self {
        Self {
            first: default_first_emoji(),
            prev: default_prev_emoji(),
            next: default_next_emoji(),
            last: default_last_emoji(),
        }
    }
}

/// Styles of the navigation buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStyles {
    pub first: ButtonStyle,
    pub prev: ButtonStyle,
    pub index: ButtonStyle,
    pub next: ButtonStyle,
    pub last: ButtonStyle,
}

impl Default for NavStyles {
    fn default() -> Self {
        Self {
            first: default_nav_style(),
            prev: default_nav_style(),
            index: default_display_style(),
            next: default_nav_style(),
            last: default_nav_style(),
        }
    }
}

/// What happens to the controls when the session times out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutAction {
    /// Remove every control row.
    Delete,
    /// Keep the rows but disable every element.
    Disable,
    /// Leave the message as it is.
    Leave,
}

// =============================================================================
// PaginatorConfig
// =============================================================================

/// The full option set of a paginator session.
///
/// Build it programmatically (struct update syntax over `Default`) or from
/// TOML via [`PaginatorConfig::load`] / [`PaginatorConfig::from_toml_str`].
/// It also deserializes from a nested table of a host configuration:
///
/// ```toml
/// [paginator]
/// author_only = true
/// prev_emoji = "<:left:1234>"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "toml::Table")]
pub struct PaginatorConfig {
    /// Plain text shown above the embed.
    pub content: Option<TextOption>,
    /// Ephemeral (only visible to the invoker).
    pub hidden: bool,
    /// Only the invoking user may drive the session.
    pub author_only: bool,
    /// Explicit allow-list of users and roles.
    pub only_for: Option<OnlyFor>,
    /// Deliver as a direct message to the invoking user.
    pub dm: bool,
    /// Place auxiliary buttons that do not fit in a second row.
    pub use_overflow: bool,
    /// Seconds of inactivity before the session ends (unset: 60).
    pub timeout: Option<u64>,
    pub disable_after_timeout: bool,
    pub delete_after_timeout: bool,
    pub use_select: bool,
    pub use_buttons: bool,
    /// Unset means "not decided", which lets the selector capacity rule enable it.
    pub use_index_button: Option<bool>,
    pub use_link_button: bool,
    pub use_first_last: bool,
    pub labels: NavLabels,
    pub link_label: TextOption,
    pub link_url: TextOption,
    /// Setting a label enables the display-only custom button.
    pub custom_button_label: Option<String>,
    pub emojis: NavEmojis,
    pub custom_button_emoji: Option<Emoji>,
    pub styles: NavStyles,
    pub custom_button_style: ButtonStyle,
}

impl Default for PaginatorConfig {
    fn default() -> Self {
        Self {
            content: None,
            hidden: false,
            author_only: false,
            only_for: None,
            dm: false,
            use_overflow: true,
            timeout: None,
            disable_after_timeout: true,
            delete_after_timeout: false,
            use_select: true,
            use_buttons: true,
            use_index_button: None,
            use_link_button: false,
            use_first_last: true,
            labels: NavLabels::default(),
            link_label: TextOption::default(),
            link_url: TextOption::default(),
            custom_button_label: None,
            emojis: NavEmojis::default(),
            custom_button_emoji: None,
            styles: NavStyles::default(),
            custom_button_style: default_display_style(),
        }
    }
}

impl PaginatorConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and type-check configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let table: toml::Table = toml::from_str(content)?;
        Self::from_table(&table)
    }

    /// Effective await timeout.
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }

    /// Post-timeout behaviour. Deleting wins over disabling.
    pub fn timeout_action(&self) -> TimeoutAction {
        if self.delete_after_timeout {
            TimeoutAction::Delete
        } else if self.disable_after_timeout {
            TimeoutAction::Disable
        } else {
            TimeoutAction::Leave
        }
    }

    /// Whether the index counter button is rendered.
    #[inline]
    pub fn index_button_enabled(&self) -> bool {
        self.use_index_button.unwrap_or(false)
    }
}
