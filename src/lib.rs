//! slirc-paginator - Straylight Paginator
//!
//! Interactive pagination for chat bot messages. A [`Paginator`] renders one
//! page of a pre-rendered embed sequence together with navigation controls
//! (first/previous/index/next/last buttons, a page selector and optional
//! link/custom buttons), applies the activations of permitted users, and
//! finalizes the controls once nobody has touched them for the configured
//! timeout.
//!
//! The host bot supplies a [`Messenger`] that knows how to send and edit
//! messages and how to wait for component activations.
//!
//! ```ignore
//! let config = PaginatorConfig::from_toml_str(r#"
//!     author_only = true
//!     timeout = 120
//! "#)?;
//! let report = Paginator::new(messenger, ctx, pages, config)?.run().await?;
//! info!(elapsed = report.elapsed_secs(), "paginator finished");
//! ```

pub mod access;
pub mod config;
pub mod context;
pub mod controls;
pub mod error;
pub mod hooks;
pub mod messenger;
pub mod session;
pub mod telemetry;

pub use crate::access::{AccessFilter, ActorLedger, Admission};
pub use crate::config::{ConfigError, ConfigWarning, OnlyFor, PaginatorConfig, TextOption};
pub use crate::context::{ClientKind, InvocationContext};
pub use crate::controls::{ControlKind, ControlSet};
pub use crate::error::{PaginatorError, PaginatorResult};
pub use crate::hooks::{EditHooks, HookFlow, NoHooks, SessionView};
pub use crate::messenger::{
    ActivationEvent, ActivationFilter, AwaitOutcome, DeliveryTarget, MessageHandle, Messenger,
    MessengerError, Reply,
};
pub use crate::session::{EndReason, Paginator, TerminationReport};

pub use slirc_components as components;
