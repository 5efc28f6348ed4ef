//! Telemetry utilities for session tracing.

/// Standardized span constructors for paginator observability.
pub mod spans {
    use slirc_components::Actor;
    use tracing::{Span, info_span};

    /// Create a span covering one paginator session.
    pub fn session(session_id: u32, pages: usize, context: &str) -> Span {
        info_span!("session", session_id, pages, context = %context)
    }

    /// Create a span for one admitted activation.
    pub fn activation(control: &str, actor: &Actor, index: usize) -> Span {
        info_span!("activation", control = %control, actor = %actor, index)
    }
}
