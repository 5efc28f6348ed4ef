//! A messenger backed by one shared broadcast stream of activations.

use async_trait::async_trait;
use parking_lot::Mutex;
use slirc_paginator::components::{ChannelId, MessageId};
use slirc_paginator::messenger::await_matching;
use slirc_paginator::{
    ActivationEvent, ActivationFilter, AwaitOutcome, ClientKind, DeliveryTarget, MessageHandle,
    Messenger, MessengerError, Reply,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::broadcast;

/// Every session shares one event stream, the way a gateway fans out
/// component interactions.
pub struct BroadcastMessenger {
    events: broadcast::Sender<ActivationEvent>,
    next_message: AtomicU64,
    /// Receivers are subscribed at send time so nothing published after the
    /// message exists is missed.
    receivers: Mutex<HashMap<MessageId, broadcast::Receiver<ActivationEvent>>>,
    sent: Mutex<Vec<(DeliveryTarget, MessageHandle)>>,
    edits: Mutex<Vec<(MessageHandle, Reply)>>,
}

impl BroadcastMessenger {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(64);
        Self {
            events,
            next_message: AtomicU64::new(1),
            receivers: Mutex::new(HashMap::new()),
            sent: Mutex::new(Vec::new()),
            edits: Mutex::new(Vec::new()),
        }
    }

    /// Publish an activation to every subscribed session.
    pub fn publish(&self, event: ActivationEvent) -> usize {
        self.events.send(event).unwrap_or(0)
    }

    pub fn sent(&self) -> Vec<(DeliveryTarget, MessageHandle)> {
        self.sent.lock().clone()
    }

    /// Message sent to `target`, if any.
    pub fn message_for(&self, target: DeliveryTarget) -> Option<MessageId> {
        self.sent
            .lock()
            .iter()
            .find(|(sent_to, _)| *sent_to == target)
            .map(|(_, handle)| handle.message)
    }

    pub fn edits_of(&self, message: MessageId) -> Vec<Reply> {
        self.edits
            .lock()
            .iter()
            .filter(|(handle, _)| handle.message == message)
            .map(|(_, reply)| reply.clone())
            .collect()
    }
}

#[async_trait]
impl Messenger for BroadcastMessenger {
    fn kind(&self) -> ClientKind {
        ClientKind::ShardedBot
    }

    async fn send_message(
        &self,
        target: DeliveryTarget,
        _reply: &Reply,
        _ephemeral: bool,
    ) -> Result<MessageHandle, MessengerError> {
        let channel = match target {
            DeliveryTarget::Interaction { channel, .. } | DeliveryTarget::Channel(channel) => {
                channel
            }
            DeliveryTarget::Direct(user) => ChannelId(user.get()),
        };
        let handle = MessageHandle {
            channel,
            message: MessageId(self.next_message.fetch_add(1, Ordering::Relaxed)),
        };
        self.receivers
            .lock()
            .insert(handle.message, self.events.subscribe());
        self.sent.lock().push((target, handle));
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
        let taken = self.receivers.lock().remove(&handle.message);
        let mut receiver = taken.ok_or(MessengerError::Closed)?;
        let outcome = await_matching(&mut receiver, filter, timeout).await;
        self.receivers.lock().insert(handle.message, receiver);
        outcome
    }
}
