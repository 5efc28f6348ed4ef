//! Pages, actors and contexts shared by the integration tests.

use slirc_paginator::InvocationContext;
use slirc_paginator::components::{Actor, ChannelId, Component, Embed, RoleId, UserId};
use slirc_paginator::Reply;

pub const CHANNEL: ChannelId = ChannelId(500);

pub fn alice() -> Actor {
    Actor::new(UserId(1), "alice")
}

pub fn bob() -> Actor {
    Actor::new(UserId(2), "bob")
}

/// Holds role 77.
pub fn moderator() -> Actor {
    Actor::new(UserId(3), "mod").with_roles([RoleId(77)])
}

pub fn pages(n: usize) -> Vec<Embed> {
    (1..=n)
        .map(|i| {
            Embed::new()
                .with_title(format!("Page title {i}"))
                .with_description(format!("body {i}"))
        })
        .collect()
}

pub fn interaction() -> InvocationContext {
    InvocationContext::Interaction {
        channel: CHANNEL,
        author: alice(),
        interaction_id: 9000,
    }
}

pub fn command() -> InvocationContext {
    InvocationContext::Command {
        channel: CHANNEL,
        author: alice(),
    }
}

/// Page number shown by a rendered reply, read from its embed title.
pub fn shown_page(reply: &Reply) -> Option<usize> {
    reply
        .embed
        .as_ref()?
        .title()?
        .strip_prefix("Page title ")?
        .parse()
        .ok()
}

/// Whether every control in the reply is disabled.
pub fn all_disabled(reply: &Reply) -> bool {
    reply
        .rows
        .iter()
        .flat_map(|row| row.components())
        .all(Component::is_disabled)
}
