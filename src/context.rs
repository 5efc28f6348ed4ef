//! Invocation context and client classification.
//!
//! The context says where a paginator was invoked from and by whom. It
//! decides the delivery target, whether ephemeral messages are possible and
//! who the "author" is for `author_only` sessions.

use slirc_components::{Actor, ChannelId};
use std::fmt;

/// Kind of client the messenger is backed by.
///
/// Only bot clients can send interactive components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    /// A single-connection bot.
    Bot,
    /// A bot spread over several gateway shards.
    ShardedBot,
    /// A user account client. Cannot attach components.
    User,
    /// An incoming webhook. Cannot receive activations.
    Webhook,
}

impl ClientKind {
    /// Whether this client may run a paginator.
    #[inline]
    pub fn is_bot(self) -> bool {
        matches!(self, Self::Bot | Self::ShardedBot)
    }
}

impl fmt::Display for ClientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Bot => "Bot",
            Self::ShardedBot => "ShardedBot",
            Self::User => "User",
            Self::Webhook => "Webhook",
        })
    }
}

/// Where the paginator was invoked from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvocationContext {
    /// A slash command or component interaction.
    Interaction {
        channel: ChannelId,
        author: Actor,
        interaction_id: u64,
    },
    /// A prefix (text) command.
    Command { channel: ChannelId, author: Actor },
    /// A bare channel, with nobody invoking.
    Channel(ChannelId),
    /// A user reached outside any guild.
    User(Actor),
    /// A guild member.
    Member(Actor),
}

impl InvocationContext {
    /// The user who invoked the paginator, if there is one.
    pub fn invoker(&self) -> Option<&Actor> {
        match self {
            Self::Interaction { author, .. } | Self::Command { author, .. } => Some(author),
            Self::User(actor) | Self::Member(actor) => Some(actor),
            Self::Channel(_) => None,
        }
    }

    /// Whether the origin surface can show ephemeral messages.
    #[inline]
    pub fn supports_ephemeral(&self) -> bool {
        matches!(self, Self::Interaction { .. })
    }

    /// Whether a direct message can be delivered from this context.
    #[inline]
    pub fn can_direct_message(&self) -> bool {
        !matches!(self, Self::Channel(_))
    }

    /// Whether `dm` delivery should be acknowledged at the origin.
    ///
    /// Commands and interactions were typed somewhere visible, so the
    /// invoker is told to look in their DMs.
    #[inline]
    pub fn acknowledges_dm(&self) -> bool {
        matches!(self, Self::Interaction { .. } | Self::Command { .. })
    }

    /// Short label for logs and error values.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Interaction { .. } => "interaction",
            Self::Command { .. } => "command",
            Self::Channel(_) => "channel",
            Self::User(_) => "user",
            Self::Member(_) => "member",
        }
    }
}

impl fmt::Display for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Channel(channel) => write!(f, "channel {channel}"),
            other => match other.invoker() {
                Some(actor) => write!(f, "{} by {actor}", other.kind()),
                None => f.write_str(other.kind()),
            },
        }
    }
}
