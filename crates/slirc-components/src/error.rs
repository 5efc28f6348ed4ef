//! Error types for the component model.

use thiserror::Error;

/// Convenience type alias for Results using [`ComponentError`].
pub type Result<T, E = ComponentError> = std::result::Result<T, E>;

/// Errors raised while building or parsing components.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ComponentError {
    /// Numeric style code outside the 1..=5 range.
    #[error("invalid button style code: {0}")]
    InvalidStyle(i64),

    /// Style name that does not map to any known style.
    #[error("unknown button style: {0:?}")]
    UnknownStyle(String),

    /// Emoji reference with no content.
    #[error("emoji reference is empty")]
    EmptyEmoji,

    /// Action row has no room for another element.
    #[error("action row is full ({capacity} elements)")]
    RowFull {
        /// Maximum number of elements the row accepts.
        capacity: usize,
    },

    /// Select menus occupy a whole row and cannot share it with buttons.
    #[error("select menus cannot share an action row with other components")]
    MixedRow,

    /// Select menu with more options than the surface allows.
    #[error("select menu has {got} options, maximum is {max}")]
    TooManyOptions {
        /// Maximum option count.
        max: usize,
        /// Requested option count.
        got: usize,
    },
}
