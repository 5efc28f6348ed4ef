//! Paginator sessions.
//!
//! A [`Paginator`] owns one paginated message for its whole life:
//!
//! ```text
//! Rendering -> AwaitingActivation -> Applying -> Rendering -> ...
//!                     |
//!                     +-> TimedOut (finalize controls, report)
//! ```
//!
//! The await is the only point where a session suspends. Denied and foreign
//! activations go back to waiting on what is left of the current window; only
//! an admitted activation starts a new one.

mod navigation;
mod report;

pub use navigation::Navigator;
pub use report::{EndReason, TerminationReport};

use chrono::Utc;
use rand::Rng;
use slirc_components::{ActionRow, Embed};
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::Arc;
use tokio::time::Instant;
use tracing::{Instrument, debug, info};

use crate::access::{AccessFilter, ActorLedger};
use crate::config::{ConfigError, ConfigWarning, PaginatorConfig, TimeoutAction, validate};
use crate::context::InvocationContext;
use crate::controls::{ControlKind, ControlSet};
use crate::error::PaginatorResult;
use crate::hooks::{EditHooks, HookFlow, NoHooks, SessionView};
use crate::messenger::{
    ActivationEvent, ActivationFilter, AwaitOutcome, DeliveryTarget, MessageHandle, Messenger,
    Reply,
};
use crate::telemetry::spans;

/// Acknowledgement posted at the origin when the pages went to a DM.
pub const DM_NOTICE: &str = "Check your DMs!";

/// Range random session ids are drawn from.
pub const SESSION_ID_RANGE: RangeInclusive<u32> = 1..=999_999;

/// What became of one admitted activation.
enum Step {
    /// `before_edit` did not proceed; the page is unchanged.
    Vetoed(HookFlow),
    /// The page was re-rendered; carries the `after_edit` answer.
    Rendered(HookFlow),
}

// ============================================================================
// Paginator
// ============================================================================

/// One interactive pagination session.
pub struct Paginator {
    messenger: Arc<dyn Messenger>,
    ctx: InvocationContext,
    pages: Vec<Embed>,
    config: PaginatorConfig,
    warnings: Vec<ConfigWarning>,
    session_id: u32,
    hooks: Box<dyn EditHooks>,
}

impl fmt::Debug for Paginator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Paginator")
            .field("session_id", &self.session_id)
            .field("ctx", &self.ctx)
            .field("pages", &self.pages.len())
            .field("config", &self.config)
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}

impl Paginator {
    /// Validate everything and prepare a session. Nothing is sent yet.
    ///
    /// Checks run in this order: client kind, page/option consistency
    /// (which also applies the auto-corrections), context suitability.
    pub fn new(
        messenger: Arc<dyn Messenger>,
        ctx: InvocationContext,
        pages: Vec<Embed>,
        mut config: PaginatorConfig,
    ) -> PaginatorResult<Self> {
        let kind = messenger.kind();
        if !kind.is_bot() {
            return Err(ConfigError::incorrect("bot", "Bot or ShardedBot", kind).into());
        }

        let warnings = validate(&mut config, pages.len())?;

        if config.dm && !ctx.can_direct_message() {
            return Err(ConfigError::incorrect(
                "ctx",
                "interaction, command, user or member context for dm = true",
                &ctx,
            )
            .into());
        }
        if config.author_only && ctx.invoker().is_none() {
            return Err(ConfigError::incorrect(
                "ctx",
                "a context with an invoking user for author_only = true",
                &ctx,
            )
            .into());
        }

        Ok(Self {
            messenger,
            ctx,
            pages,
            config,
            warnings,
            session_id: rand::thread_rng().gen_range(SESSION_ID_RANGE),
            hooks: Box::new(NoHooks),
        })
    }

    /// Use a caller-chosen session id instead of a random one.
    pub fn with_session_id(mut self, session_id: u32) -> Self {
        self.session_id = session_id;
        self
    }

    pub fn with_hooks(mut self, hooks: impl EditHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    #[inline]
    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    /// The configuration after auto-corrections.
    pub fn config(&self) -> &PaginatorConfig {
        &self.config
    }

    /// What construction corrected.
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    pub fn pages(&self) -> &[Embed] {
        &self.pages
    }

    /// Where the pages go and whether they are sent ephemeral.
    pub fn delivery(&self) -> (DeliveryTarget, bool) {
        if self.config.dm
            && let Some(author) = self.ctx.invoker()
        {
            return (DeliveryTarget::Direct(author.id), false);
        }
        (
            DeliveryTarget::origin(&self.ctx),
            self.config.hidden && self.ctx.supports_ephemeral(),
        )
    }

    /// Run the session to completion.
    pub async fn run(self) -> PaginatorResult<TerminationReport> {
        let span = spans::session(self.session_id, self.pages.len(), self.ctx.kind());
        self.drive().instrument(span).await
    }

    async fn drive(self) -> PaginatorResult<TerminationReport> {
        let started_at = Utc::now();
        let start = Instant::now();

        let controls = ControlSet::new(&self.config, &self.pages, self.session_id);
        let access = AccessFilter::from_config(&self.config, self.ctx.invoker());
        let mut ledger = ActorLedger::new(self.ctx.invoker());
        let mut nav = Navigator::new(controls.top());

        let (target, ephemeral) = self.delivery();
        let reply = self.render(&controls, nav.index())?;
        let handle = self.messenger.send_message(target, &reply, ephemeral).await?;
        info!(message = %handle.message, ephemeral, "paginator started");

        if self.config.dm && self.ctx.acknowledges_dm() {
            self.messenger
                .send_message(
                    DeliveryTarget::origin(&self.ctx),
                    &Reply::notice(DM_NOTICE),
                    self.ctx.supports_ephemeral(),
                )
                .await?;
        }

        let filter = ActivationFilter {
            message: handle.message,
            custom_ids: controls.custom_ids(),
        };
        let timeout = self.config.timeout_duration();
        let mut last_activation = None;
        // Only admitted activations restart the inactivity window.
        let mut window = Instant::now();

        let end_reason = loop {
            let remaining = timeout.saturating_sub(window.elapsed());
            if remaining.is_zero() {
                break EndReason::TimedOut;
            }
            debug!(
                index = nav.index(),
                remaining_secs = remaining.as_secs(),
                "awaiting activation"
            );
            let event = match self.messenger.await_activation(&handle, &filter, remaining).await? {
                AwaitOutcome::Activated(event) => event,
                AwaitOutcome::TimedOut => break EndReason::TimedOut,
            };

            let kind = filter
                .matches(&event)
                .then(|| ControlKind::parse(&event.custom_id, self.session_id))
                .flatten();
            let Some(kind) = kind else {
                debug!(custom_id = %event.custom_id, "ignoring activation for unknown control");
                continue;
            };
            if !access.admit(&event.actor, &mut ledger).is_admitted() {
                continue;
            }
            window = Instant::now();

            let span = spans::activation(kind.as_str(), &event.actor, nav.index());
            let step = self
                .apply(&controls, &handle, &mut nav, kind, &event)
                .instrument(span)
                .await?;
            match step {
                Step::Vetoed(HookFlow::Stop) => break EndReason::Stopped,
                Step::Vetoed(_) => {}
                Step::Rendered(flow) => {
                    last_activation = Some(event);
                    if flow == HookFlow::Stop {
                        break EndReason::Stopped;
                    }
                }
            }
        };

        let elapsed = start.elapsed();
        let ended_at = Utc::now();
        let index = nav.index();

        if end_reason == EndReason::TimedOut && !ephemeral {
            self.finalize(&controls, &handle, index).await?;
        }

        let (authorized, rejected) = ledger.into_parts();
        let report = TerminationReport {
            last_activation,
            elapsed,
            last_content: self.content_for(index),
            last_embed: self.page(index),
            authorized,
            rejected,
            final_index: index,
            previous_index: nav.previous(),
            started_at,
            ended_at,
            end_reason,
            context: self.ctx,
        };
        info!(
            reason = %report.end_reason,
            index,
            elapsed_secs = report.elapsed_secs(),
            authorized = report.authorized.len(),
            rejected = report.rejected.len(),
            "paginator finished"
        );
        Ok(report)
    }

    /// Handle one admitted activation: hooks, index update, re-render.
    async fn apply(
        &self,
        controls: &ControlSet<'_>,
        handle: &MessageHandle,
        nav: &mut Navigator,
        kind: ControlKind,
        event: &ActivationEvent,
    ) -> PaginatorResult<Step> {
        let flow = self.hooks.before_edit(self.view(nav, event)).await;
        if flow != HookFlow::Proceed {
            debug!(?flow, "before_edit hook intervened");
            return Ok(Step::Vetoed(flow));
        }

        let index = nav.apply(kind, event.values.first().map(String::as_str));
        let reply = self.render(controls, index)?;
        self.messenger.edit_message(handle, &reply).await?;
        debug!(index, previous = nav.previous(), "page rendered");

        Ok(Step::Rendered(self.hooks.after_edit(self.view(nav, event)).await))
    }

    /// Disable or remove the controls after a timeout.
    async fn finalize(
        &self,
        controls: &ControlSet<'_>,
        handle: &MessageHandle,
        index: usize,
    ) -> PaginatorResult<()> {
        let action = self.config.timeout_action();
        let rows = match action {
            TimeoutAction::Leave => return Ok(()),
            TimeoutAction::Delete => Vec::new(),
            TimeoutAction::Disable => {
                let mut rows = controls.build(index)?;
                rows.iter_mut().for_each(ActionRow::disable_all);
                rows
            }
        };
        let reply = Reply {
            content: self.content_for(index),
            embed: Some(self.page(index)),
            rows,
        };
        self.messenger.edit_message(handle, &reply).await?;
        debug!(?action, "controls finalized");
        Ok(())
    }

    fn render(&self, controls: &ControlSet<'_>, index: usize) -> PaginatorResult<Reply> {
        Ok(Reply {
            content: self.content_for(index),
            embed: Some(self.page(index)),
            rows: controls.build(index)?,
        })
    }

    fn view<'a>(&self, nav: &Navigator, event: &'a ActivationEvent) -> SessionView<'a> {
        SessionView {
            session_id: self.session_id,
            index: nav.index(),
            previous_index: nav.previous(),
            top: nav.top(),
            event,
        }
    }

    fn page(&self, index: usize) -> Embed {
        index
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .cloned()
            .unwrap_or_default()
    }

    fn content_for(&self, index: usize) -> Option<String> {
        self.config
            .content
            .as_ref()
            .and_then(|content| content.for_page(index))
            .map(str::to_string)
    }
}
