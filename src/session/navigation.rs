//! Page index arithmetic.

use crate::controls::ControlKind;

/// Current page of a session, always within `1..=top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Navigator {
    index: usize,
    previous: usize,
    top: usize,
}

impl Navigator {
    /// Start on page 1 of `top` pages. `top` must be at least 1.
    pub fn new(top: usize) -> Self {
        let top = top.max(1);
        Self {
            index: 1,
            previous: 1,
            top,
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Page shown before the last applied move.
    #[inline]
    pub fn previous(&self) -> usize {
        self.previous
    }

    #[inline]
    pub fn top(&self) -> usize {
        self.top
    }

    /// Move according to an activated control.
    ///
    /// `selected` is the select menu value and is only read for
    /// [`ControlKind::Select`]. Values that are not a page number leave the
    /// index unchanged. Returns the new index.
    pub fn apply(&mut self, kind: ControlKind, selected: Option<&str>) -> usize {
        let target = match kind {
            ControlKind::First => 1,
            ControlKind::Prev => self.index.saturating_sub(1).max(1),
            ControlKind::Next => (self.index + 1).min(self.top),
            ControlKind::Last => self.top,
            ControlKind::Select => selected
                .and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|page| (1..=self.top).contains(page))
                .unwrap_or(self.index),
        };
        self.previous = self.index;
        self.index = target;
        target
    }
}
