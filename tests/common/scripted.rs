//! A messenger that replays a fixed script of activations.

use async_trait::async_trait;
use parking_lot::Mutex;
use slirc_paginator::components::{Actor, ChannelId, MessageId};
use slirc_paginator::{
    ActivationEvent, ActivationFilter, AwaitOutcome, ClientKind, DeliveryTarget, MessageHandle,
    Messenger, MessengerError, Reply,
};
use std::collections::VecDeque;
use std::time::Duration;
use tokio::time::Instant;

/// One step of a script.
#[derive(Debug, Clone)]
pub enum Script {
    /// Someone activates a control on the paginated message.
    Click {
        actor: Actor,
        custom_id: String,
        values: Vec<String>,
    },
    /// Nothing happens for a while. A quiet stretch that outlasts the
    /// current wait ends it.
    Idle(Duration),
    /// Nothing happens until the wait expires.
    Timeout,
    /// The messenger fails the wait.
    Fail,
}

impl Script {
    pub fn click(actor: Actor, custom_id: impl Into<String>) -> Self {
        Self::Click {
            actor,
            custom_id: custom_id.into(),
            values: Vec::new(),
        }
    }

    pub fn select(actor: Actor, custom_id: impl Into<String>, page: usize) -> Self {
        Self::Click {
            actor,
            custom_id: custom_id.into(),
            values: vec![page.to_string()],
        }
    }
}

/// A recorded `send_message` call.
#[derive(Debug, Clone)]
pub struct Sent {
    pub target: DeliveryTarget,
    pub reply: Reply,
    pub ephemeral: bool,
    pub handle: MessageHandle,
}

/// Replays scripted activations and records every outgoing call.
///
/// Clicks are delivered as-is, without applying the activation filter, so
/// the session's own checks are exercised. An exhausted script times out.
/// Waits honour the timeout they are given, so idle stretches add up.
pub struct ScriptedMessenger {
    kind: ClientKind,
    script: Mutex<VecDeque<Script>>,
    sent: Mutex<Vec<Sent>>,
    edits: Mutex<Vec<(MessageHandle, Reply)>>,
    waits: Mutex<Vec<(ActivationFilter, Duration)>>,
}

impl ScriptedMessenger {
    pub fn new(script: impl IntoIterator<Item = Script>) -> Self {
        Self::with_kind(ClientKind::Bot, script)
    }

    pub fn with_kind(kind: ClientKind, script: impl IntoIterator<Item = Script>) -> Self {
        Self {
            kind,
            script: Mutex::new(script.into_iter().collect()),
            sent: Mutex::new(Vec::new()),
            edits: Mutex::new(Vec::new()),
            waits: Mutex::new(Vec::new()),
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().clone()
    }

    pub fn edits(&self) -> Vec<Reply> {
        self.edits.lock().iter().map(|(_, reply)| reply.clone()).collect()
    }

    pub fn last_edit(&self) -> Option<Reply> {
        self.edits.lock().last().map(|(_, reply)| reply.clone())
    }

    /// Timeouts passed to each wait, in order.
    pub fn wait_timeouts(&self) -> Vec<Duration> {
        self.waits.lock().iter().map(|(_, timeout)| *timeout).collect()
    }

    pub fn filters(&self) -> Vec<ActivationFilter> {
        self.waits.lock().iter().map(|(filter, _)| filter.clone()).collect()
    }

    /// Whether anything at all went out.
    pub fn is_untouched(&self) -> bool {
        self.sent.lock().is_empty() && self.edits.lock().is_empty()
    }
}

#[async_trait]
impl Messenger for ScriptedMessenger {
    fn kind(&self) -> ClientKind {
        self.kind
    }

    async fn send_message(
        &self,
        target: DeliveryTarget,
        reply: &Reply,
        ephemeral: bool,
    ) -> Result<MessageHandle, MessengerError> {
        let mut sent = self.sent.lock();
        let channel = match target {
            DeliveryTarget::Interaction { channel, .. } | DeliveryTarget::Channel(channel) => {
                channel
            }
            DeliveryTarget::Direct(user) => ChannelId(user.get()),
        };
        let handle = MessageHandle {
            channel,
            message: MessageId(1000 + sent.len() as u64),
        };
        sent.push(Sent {
            target,
            reply: reply.clone(),
            ephemeral,
            handle,
        });
        Ok(handle)
    }

    async fn edit_message(
        &self,
        handle: &MessageHandle,
        reply: &Reply,
    ) -> Result<(), MessengerError> {
        self.edits.lock().push((*handle, reply.clone()));
        Ok(())
    }

    async fn await_activation(
        &self,
        handle: &MessageHandle,
        filter: &ActivationFilter,
        timeout: Duration,
    ) -> Result<AwaitOutcome, MessengerError> {
        self.waits.lock().push((filter.clone(), timeout));
        let deadline = Instant::now() + timeout;
        loop {
            let step = self.script.lock().pop_front();
            match step {
                Some(Script::Click {
                    actor,
                    custom_id,
                    values,
                }) => {
                    return Ok(AwaitOutcome::Activated(ActivationEvent {
                        message: handle.message,
                        actor,
                        custom_id,
                        values,
                    }));
                }
                Some(Script::Idle(quiet)) if Instant::now() + quiet < deadline => {
                    tokio::time::sleep(quiet).await;
                }
                Some(Script::Fail) => {
                    return Err(MessengerError::Delivery("gateway went away".into()));
                }
                Some(Script::Idle(_) | Script::Timeout) | None => {
                    tokio::time::sleep_until(deadline).await;
                    return Ok(AwaitOutcome::TimedOut);
                }
            }
        }
    }
}
