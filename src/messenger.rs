//! The messaging collaborator.
//!
//! The paginator never talks to the chat network itself. Everything that
//! leaves the process (sending, editing, waiting for clicks) goes through a
//! host-provided [`Messenger`].

use async_trait::async_trait;
use slirc_components::{ActionRow, Actor, ChannelId, Embed, MessageId, UserId};
use std::time::Duration;
use thiserror::Error;
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::time::Instant;
use tracing::debug;

use crate::context::{ClientKind, InvocationContext};

/// Failures reported by the messaging collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MessengerError {
    /// The network or API refused the request.
    #[error("delivery failed: {0}")]
    Delivery(String),
    /// The event stream ended.
    #[error("event stream closed")]
    Closed,
}

/// Where a message is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryTarget {
    /// Respond to an interaction.
    Interaction { channel: ChannelId, interaction_id: u64 },
    /// Post in a channel.
    Channel(ChannelId),
    /// Direct message to a user.
    Direct(UserId),
}

impl DeliveryTarget {
    /// The surface the context was invoked from.
    ///
    /// Users and members are only reachable by direct message.
    pub fn origin(ctx: &InvocationContext) -> Self {
        match ctx {
            InvocationContext::Interaction {
                channel,
                interaction_id,
                ..
            } => Self::Interaction {
                channel: *channel,
                interaction_id: *interaction_id,
            },
            InvocationContext::Command { channel, .. } => Self::Channel(*channel),
            InvocationContext::Channel(channel) => Self::Channel(*channel),
            InvocationContext::User(actor) | InvocationContext::Member(actor) => {
                Self::Direct(actor.id)
            }
        }
    }
}

/// A sent message the paginator keeps editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageHandle {
    pub channel: ChannelId,
    pub message: MessageId,
}

/// Full message body: text, embed and control rows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Reply {
    pub content: Option<String>,
    pub embed: Option<Embed>,
    /// Empty means "no components".
    pub rows: Vec<ActionRow>,
}

impl Reply {
    /// Text-only reply.
    pub fn notice(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
            ..Self::default()
        }
    }
}

/// A user clicked a button or picked a select option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationEvent {
    /// Message the control belongs to.
    pub message: MessageId,
    pub actor: Actor,
    pub custom_id: String,
    /// Chosen select values. Empty for buttons.
    pub values: Vec<String>,
}

/// Which activations a session is waiting for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationFilter {
    pub message: MessageId,
    pub custom_ids: Vec<String>,
}

impl ActivationFilter {
    /// Whether `event` targets this session's message and controls.
    pub fn matches(&self, event: &ActivationEvent) -> bool {
        event.message == self.message && self.custom_ids.iter().any(|id| *id == event.custom_id)
    }
}

/// Result of a bounded wait for an activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AwaitOutcome {
    Activated(ActivationEvent),
    TimedOut,
}

/// Host-side messaging services the paginator needs.
#[async_trait]
pub trait Messenger: Send + Sync {
    /// What kind of client backs this messenger.
    fn kind(&self) -> ClientKind;

    /// Send a new message.
    async fn send_message(
        &self,
        target: DeliveryTarget,
        reply: &Reply,
        ephemeral: bool,
    ) -> Result<MessageHandle, MessengerError>;

    /// Replace the body of a sent message.
    async fn edit_message(&self, handle: &MessageHandle, reply: &Reply)
    -> Result<(), MessengerError>;

    /// Wait for the next activation accepted by `filter`, at most `timeout`.
    async fn await_activation(
        &self,
        handle: &MessageHandle,
        filter: &ActivationFilter,
        timeout: Duration,
    ) -> Result<AwaitOutcome, MessengerError>;
}

/// Wait on a shared activation stream for the next event matching `filter`.
///
/// Building block for [`Messenger::await_activation`] implementations that
/// fan gateway events out over a broadcast channel. Events for other
/// sessions are skipped without extending the deadline.
pub async fn await_matching(
    events: &mut broadcast::Receiver<ActivationEvent>,
    filter: &ActivationFilter,
    timeout: Duration,
) -> Result<AwaitOutcome, MessengerError> {
    let deadline = Instant::now() + timeout;
    loop {
        match tokio::time::timeout_at(deadline, events.recv()).await {
            Err(_) => return Ok(AwaitOutcome::TimedOut),
            Ok(Ok(event)) if filter.matches(&event) => return Ok(AwaitOutcome::Activated(event)),
            Ok(Ok(_)) => continue,
            Ok(Err(RecvError::Lagged(skipped))) => {
                debug!(skipped, "activation stream lagged");
            }
            Ok(Err(RecvError::Closed)) => return Err(MessengerError::Closed),
        }
    }
}
