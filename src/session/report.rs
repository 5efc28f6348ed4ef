//! Termination report.

use chrono::{DateTime, Utc};
use slirc_components::{Actor, Embed};
use std::fmt;
use std::time::Duration;

use crate::context::InvocationContext;
use crate::messenger::ActivationEvent;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Nobody activated a control within the timeout.
    TimedOut,
    /// An edit hook stopped the session.
    Stopped,
}

impl EndReason {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TimedOut => "timed_out",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for EndReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminationReport {
    pub context: InvocationContext,
    /// The last activation that re-rendered the page. Denied, skipped and
    /// vetoed activations never land here.
    pub last_activation: Option<ActivationEvent>,
    pub elapsed: Duration,
    pub last_content: Option<String>,
    pub last_embed: Embed,
    /// Users who drove the session, starting with the invoker.
    pub authorized: Vec<Actor>,
    pub rejected: Vec<Actor>,
    pub final_index: usize,
    pub previous_index: usize,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub end_reason: EndReason,
}

impl TerminationReport {
    /// Elapsed time in whole seconds, rounded to nearest.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.as_secs_f64().round() as u64
    }

    #[inline]
    pub fn timed_out(&self) -> bool {
        self.end_reason == EndReason::TimedOut
    }
}
