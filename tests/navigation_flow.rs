//! Integration tests for page navigation through a full session.

mod common;

use common::*;
use slirc_paginator::components::{ActionRow, Component, UserId};
use slirc_paginator::session::DM_NOTICE;
use slirc_paginator::{
    DeliveryTarget, EndReason, InvocationContext, MessengerError, Paginator, PaginatorConfig,
    PaginatorError, TextOption,
};
use std::sync::Arc;
use std::time::Duration;

const SID: u32 = 7;

fn paginator(
    messenger: &Arc<ScriptedMessenger>,
    ctx: InvocationContext,
    n: usize,
    config: PaginatorConfig,
) -> Paginator {
    Paginator::new(messenger.clone(), ctx, pages(n), config)
        .expect("valid paginator")
        .with_session_id(SID)
}

fn select_placeholder(rows: &[ActionRow]) -> Option<String> {
    rows.iter()
        .flat_map(|row| row.components())
        .find_map(|component| match component {
            Component::Select(menu) => menu.placeholder.clone(),
            Component::Button(_) => None,
        })
}

#[tokio::test(start_paused = true)]
async fn test_full_navigation_sequence() {
    init_tracing();
    let messenger = Arc::new(ScriptedMessenger::new([
        Script::click(bob(), "next7"),
        Script::click(bob(), "next7"),
        Script::click(bob(), "last7"),
        Script::click(bob(), "prev7"),
        Script::click(bob(), "first7"),
        Script::select(bob(), "select7", 4),
    ]));

    let report = paginator(&messenger, interaction(), 5, PaginatorConfig::default())
        .run()
        .await
        .unwrap();

    let sent = messenger.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(
        sent[0].target,
        DeliveryTarget::Interaction {
            channel: CHANNEL,
            interaction_id: 9000
        }
    );
    assert!(!sent[0].ephemeral);
    assert_eq!(shown_page(&sent[0].reply), Some(1));
    assert_eq!(select_placeholder(&sent[0].reply.rows).as_deref(), Some("Page 1/5"));

    let shown: Vec<Option<usize>> = messenger.edits().iter().map(shown_page).collect();
    // six navigations, then the timeout finalization on the same page
    assert_eq!(
        shown,
        vec![Some(2), Some(3), Some(5), Some(4), Some(1), Some(4), Some(4)]
    );

    assert_eq!(report.end_reason, EndReason::TimedOut);
    assert_eq!(report.final_index, 4);
    assert_eq!(report.previous_index, 1);
    assert_eq!(report.last_embed, pages(5)[3]);
    assert_eq!(
        report.last_activation.as_ref().map(|event| event.custom_id.as_str()),
        Some("select7")
    );
    assert_eq!(report.elapsed_secs(), 60);
    assert_eq!(report.context, interaction());
}

#[tokio::test(start_paused = true)]
async fn test_boundary_moves_are_noops() {
    let messenger = Arc::new(ScriptedMessenger::new([
        Script::click(alice(), "prev7"),
        Script::click(alice(), "next7"),
        Script::click(alice(), "next7"),
    ]));
    let report = paginator(&messenger, interaction(), 2, PaginatorConfig::default())
        .run()
        .await
        .unwrap();

    let shown: Vec<Option<usize>> = messenger.edits().iter().map(shown_page).collect();
    assert_eq!(shown, vec![Some(1), Some(2), Some(2), Some(2)]);
    assert_eq!(report.final_index, 2);
}

#[tokio::test(start_paused = true)]
async fn test_per_page_content_follows_index() {
    let config = PaginatorConfig {
        content: Some(TextOption::PerPage(vec!["first".into(), "second".into()])),
        ..Default::default()
    };
    let messenger = Arc::new(ScriptedMessenger::new([Script::click(alice(), "next7")]));
    let report = paginator(&messenger, interaction(), 2, config)
        .run()
        .await
        .unwrap();

    assert_eq!(messenger.sent()[0].reply.content.as_deref(), Some("first"));
    assert_eq!(messenger.edits()[0].content.as_deref(), Some("second"));
    assert_eq!(report.last_content.as_deref(), Some("second"));
}

#[tokio::test(start_paused = true)]
async fn test_shared_content_on_every_page() {
    let config = PaginatorConfig {
        content: Some("Manual".into()),
        ..Default::default()
    };
    let messenger = Arc::new(ScriptedMessenger::new([Script::click(alice(), "last7")]));
    let report = paginator(&messenger, interaction(), 3, config)
        .run()
        .await
        .unwrap();
    assert!(
        messenger
            .edits()
            .iter()
            .all(|reply| reply.content.as_deref() == Some("Manual"))
    );
    assert_eq!(report.last_content.as_deref(), Some("Manual"));
}

#[tokio::test(start_paused = true)]
async fn test_unknown_controls_are_ignored() {
    let messenger = Arc::new(ScriptedMessenger::new([
        Script::click(alice(), "next8"),
        Script::click(alice(), "index7"),
        Script::click(alice(), "next7"),
    ]));
    let report = paginator(&messenger, interaction(), 3, PaginatorConfig::default())
        .run()
        .await
        .unwrap();

    assert_eq!(report.final_index, 2);
    assert_eq!(messenger.edits().len(), 2);
    assert_eq!(messenger.wait_timeouts(), vec![Duration::from_secs(60); 4]);
}

#[tokio::test(start_paused = true)]
async fn test_controls_that_were_not_rendered_are_ignored() {
    let messenger = Arc::new(ScriptedMessenger::new([
        Script::click(alice(), "last7"),
        Script::select(alice(), "select7", 3),
        Script::click(alice(), "next7"),
    ]));
    let config = PaginatorConfig {
        use_first_last: false,
        use_select: false,
        ..Default::default()
    };
    let report = paginator(&messenger, interaction(), 4, config)
        .run()
        .await
        .unwrap();

    assert_eq!(report.final_index, 2);
    assert_eq!(report.last_activation.unwrap().custom_id, "next7");
    // next, then the timeout finalization
    assert_eq!(messenger.edits().len(), 2);
    assert_eq!(messenger.filters()[0].custom_ids, vec!["prev7", "next7"]);
}

#[tokio::test(start_paused = true)]
async fn test_filter_scopes_wait_to_session() {
    let messenger = Arc::new(ScriptedMessenger::new([]));
    paginator(&messenger, interaction(), 3, PaginatorConfig::default())
        .run()
        .await
        .unwrap();

    let filters = messenger.filters();
    assert_eq!(filters.len(), 1);
    assert_eq!(filters[0].message, messenger.sent()[0].handle.message);
    assert_eq!(
        filters[0].custom_ids,
        vec!["select7", "first7", "prev7", "next7", "last7"]
    );
}

#[tokio::test(start_paused = true)]
async fn test_dm_from_interaction_acknowledges_at_origin() {
    let config = PaginatorConfig {
        dm: true,
        ..Default::default()
    };
    let messenger = Arc::new(ScriptedMessenger::new([]));
    paginator(&messenger, interaction(), 2, config)
        .run()
        .await
        .unwrap();

    let sent = messenger.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[0].target, DeliveryTarget::Direct(UserId(1)));
    assert!(!sent[0].ephemeral);
    assert_eq!(sent[1].reply.content.as_deref(), Some(DM_NOTICE));
    assert!(sent[1].reply.rows.is_empty());
    assert!(sent[1].ephemeral);
}

#[tokio::test(start_paused = true)]
async fn test_dm_from_command_notice_is_public() {
    let config = PaginatorConfig {
        dm: true,
        ..Default::default()
    };
    let messenger = Arc::new(ScriptedMessenger::new([]));
    paginator(&messenger, command(), 2, config)
        .run()
        .await
        .unwrap();

    let sent = messenger.sent();
    assert_eq!(sent[1].target, DeliveryTarget::Channel(CHANNEL));
    assert!(!sent[1].ephemeral);
}

#[tokio::test(start_paused = true)]
async fn test_member_context_goes_to_direct_message() {
    let config = PaginatorConfig {
        dm: true,
        ..Default::default()
    };
    let messenger = Arc::new(ScriptedMessenger::new([]));
    paginator(&messenger, InvocationContext::Member(bob()), 2, config)
        .run()
        .await
        .unwrap();

    let sent = messenger.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].target, DeliveryTarget::Direct(UserId(2)));
}

#[tokio::test(start_paused = true)]
async fn test_messenger_failure_propagates() {
    let messenger = Arc::new(ScriptedMessenger::new([
        Script::click(alice(), "next7"),
        Script::Fail,
    ]));
    let err = paginator(&messenger, interaction(), 3, PaginatorConfig::default())
        .run()
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        PaginatorError::Messenger(MessengerError::Delivery(_))
    ));
    assert_eq!(messenger.edits().len(), 1);
}
