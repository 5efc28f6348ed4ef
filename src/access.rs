//! Access control for session activations.
//!
//! Restrictions are checked in a fixed order: `author_only` first, then the
//! explicit `only_for` allow-list, otherwise everybody is admitted. Every
//! decision is recorded in the session's [`ActorLedger`].

use slirc_components::{Actor, UserId};
use tracing::warn;

use crate::config::{OnlyFor, PaginatorConfig};

/// Outcome of an access check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    Admitted,
    Denied,
}

impl Admission {
    #[inline]
    pub fn is_admitted(self) -> bool {
        matches!(self, Self::Admitted)
    }
}

/// Users who drove the session and users who were turned away.
///
/// Both lists are append-only. `authorized` never holds the same user twice.
/// `rejected` is deduplicated only for `author_only` denials; repeated
/// allow-list denials are recorded every time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActorLedger {
    authorized: Vec<Actor>,
    rejected: Vec<Actor>,
}

impl ActorLedger {
    /// Ledger seeded with the invoking user, if any.
    pub fn new(invoker: Option<&Actor>) -> Self {
        Self {
            authorized: invoker.cloned().into_iter().collect(),
            rejected: Vec::new(),
        }
    }

    pub fn authorized(&self) -> &[Actor] {
        &self.authorized
    }

    pub fn rejected(&self) -> &[Actor] {
        &self.rejected
    }

    /// Split into `(authorized, rejected)`.
    pub fn into_parts(self) -> (Vec<Actor>, Vec<Actor>) {
        (self.authorized, self.rejected)
    }

    fn record_admitted(&mut self, actor: &Actor) {
        if !self.authorized.iter().any(|known| known.id == actor.id) {
            self.authorized.push(actor.clone());
        }
    }

    fn record_rejected(&mut self, actor: &Actor, dedup: bool) {
        if dedup && self.rejected.iter().any(|known| known.id == actor.id) {
            return;
        }
        self.rejected.push(actor.clone());
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Restriction {
    Author(UserId),
    AllowList(OnlyFor),
    Open,
}

/// Decides who may drive a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessFilter {
    restriction: Restriction,
}

impl AccessFilter {
    /// Nobody is turned away.
    pub fn open() -> Self {
        Self {
            restriction: Restriction::Open,
        }
    }

    /// Only `author` is admitted.
    pub fn author_only(author: impl Into<UserId>) -> Self {
        Self {
            restriction: Restriction::Author(author.into()),
        }
    }

    /// Listed users and holders of listed roles are admitted.
    pub fn only_for(only: OnlyFor) -> Self {
        Self {
            restriction: Restriction::AllowList(only),
        }
    }

    /// Build the filter for a normalized configuration.
    ///
    /// `author_only` without an invoker falls through to the allow-list;
    /// session construction rejects that combination before it gets here.
    pub fn from_config(config: &PaginatorConfig, invoker: Option<&Actor>) -> Self {
        match (config.author_only, invoker, &config.only_for) {
            (true, Some(author), _) => Self::author_only(author.id),
            (_, _, Some(only)) if !only.is_empty() => Self::only_for(only.clone()),
            _ => Self::open(),
        }
    }

    /// Pure admission decision.
    pub fn check(&self, actor: &Actor) -> Admission {
        let admitted = match &self.restriction {
            Restriction::Author(author) => actor.id == *author,
            Restriction::AllowList(only) => only.admits(actor),
            Restriction::Open => true,
        };
        if admitted {
            Admission::Admitted
        } else {
            Admission::Denied
        }
    }

    /// Decide and record the decision in `ledger`.
    pub fn admit(&self, actor: &Actor, ledger: &mut ActorLedger) -> Admission {
        let admission = self.check(actor);
        match admission {
            Admission::Admitted => ledger.record_admitted(actor),
            Admission::Denied => {
                let dedup = matches!(self.restriction, Restriction::Author(_));
                ledger.record_rejected(actor, dedup);
                warn!(actor = %actor, "activation denied");
            }
        }
        admission
    }
}

impl Default for AccessFilter {
    fn default() -> Self {
        Self::open()
    }
}
