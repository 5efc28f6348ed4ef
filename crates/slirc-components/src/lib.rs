//! # slirc-components
//!
//! The message-component model used by Straylight chat bots: buttons,
//! select menus, the action rows that group them, and the embeds they are
//! attached to.
//!
//! ## Features
//!
//! - Button styles with numeric wire codes and human-readable names
//! - Unicode and custom (`<:name:id>`) emoji references
//! - Action rows that enforce the 5-element width limit
//! - Select menus capped at 25 options
//! - Identity newtypes for users, roles, channels and messages
//! - Optional `serde` support for every wire type
//!
//! ## Quick Start
//!
//! ```rust
//! use slirc_components::{ActionRow, Button, ButtonStyle, Emoji};
//!
//! let mut row = ActionRow::new();
//! row.push(
//!     Button::new(ButtonStyle::Primary)
//!         .with_emoji(Emoji::unicode("▶"))
//!         .with_custom_id("next42"),
//! )
//! .expect("row has room");
//!
//! assert_eq!(row.len(), 1);
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod button;
pub mod embed;
pub mod emoji;
pub mod error;
pub mod identity;
pub mod row;
pub mod select;
pub mod style;

pub use self::button::Button;
pub use self::embed::{Embed, EmbedField};
pub use self::emoji::Emoji;
pub use self::error::ComponentError;
pub use self::identity::{Actor, ChannelId, MessageId, RoleId, UserId};
pub use self::row::{ActionRow, Component, MAX_ROW_WIDTH};
pub use self::select::{SelectMenu, SelectOption, MAX_SELECT_OPTIONS};
pub use self::style::ButtonStyle;
