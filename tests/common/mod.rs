//! Integration test common infrastructure.
//!
//! Provides in-memory messengers that record what a session sends and
//! edits, plus fixtures for pages, actors and contexts.

#![allow(dead_code)]

pub mod broadcast;
pub mod fixtures;
pub mod scripted;

#[allow(unused_imports)]
pub use broadcast::BroadcastMessenger;
#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use scripted::{Script, ScriptedMessenger};

use tracing_subscriber::EnvFilter;

/// Install a test-friendly subscriber once per test binary.
///
/// Honours `RUST_LOG`; silent by default.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("off")))
        .with_test_writer()
        .try_init();
}
