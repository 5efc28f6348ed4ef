//! Edit hooks.
//!
//! Hosts can observe (and veto) each admitted activation. `before_edit` runs
//! before the index changes, `after_edit` after the message was re-rendered.

use async_trait::async_trait;

use crate::messenger::ActivationEvent;

/// What the session does after a hook returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HookFlow {
    /// Carry on.
    #[default]
    Proceed,
    /// Drop this activation and wait for the next one.
    Skip,
    /// End the session now, leaving the controls as they are.
    Stop,
}

/// Read-only snapshot handed to hooks.
#[derive(Debug, Clone, Copy)]
pub struct SessionView<'a> {
    pub session_id: u32,
    /// Current page (1-based).
    pub index: usize,
    /// Page shown before the last applied activation.
    pub previous_index: usize,
    pub top: usize,
    pub event: &'a ActivationEvent,
}

/// Callbacks around each admitted activation.
#[async_trait]
pub trait EditHooks: Send + Sync {
    async fn before_edit(&self, _view: SessionView<'_>) -> HookFlow {
        HookFlow::Proceed
    }

    /// `Skip` here only stops further processing of this activation; the
    /// page has already changed.
    async fn after_edit(&self, _view: SessionView<'_>) -> HookFlow {
        HookFlow::Proceed
    }
}

/// Hooks that never intervene.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

#[async_trait]
impl EditHooks for NoHooks {}

#[cfg(test)]
mod tests {
    use super::*;
    use slirc_components::{Actor, MessageId, UserId};

    #[tokio::test]
    async fn test_no_hooks_always_proceed() {
        let event = ActivationEvent {
            message: MessageId(1),
            actor: Actor::new(UserId(1), "alice"),
            custom_id: "next9".into(),
            values: Vec::new(),
        };
        let view = SessionView {
            session_id: 9,
            index: 1,
            previous_index: 1,
            top: 3,
            event: &event,
        };
        assert_eq!(NoHooks.before_edit(view).await, HookFlow::Proceed);
        assert_eq!(NoHooks.after_edit(view).await, HookFlow::Proceed);
    }
}
