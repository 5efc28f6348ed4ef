//! Control-set building.
//!
//! Computes the rows of controls for a given page. Nothing here holds state:
//! the rows are rebuilt from the configuration and the current index on
//! every render, so two calls with the same inputs give identical output.
//!
//! Row layout:
//!
//! ```text
//! [ select: "Page 3/12"                          ]   use_select
//! [ ⏮️ ][ ◀ ][ Page 3/12 ][ ▶ ][ ⏭️ ]                use_buttons (+ index, first/last)
//! [ link ][ custom ]                                 overflow (only what did not fit)
//! ```

use slirc_components::{ActionRow, Button, ButtonStyle, Embed, Emoji, SelectMenu, SelectOption};

use crate::config::PaginatorConfig;
use crate::error::{PaginatorError, PaginatorResult};

/// Longest page title shown in a select option.
const MAX_TITLE_CHARS: usize = 96;
/// Characters kept when a title is cut.
const TRUNCATED_TITLE_CHARS: usize = 93;
const MISSING_TITLE: &str = "Title not found";

// ============================================================================
// Control identifiers
// ============================================================================

/// The interactive controls a session reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    First,
    Prev,
    Next,
    Last,
    Select,
}

impl ControlKind {
    /// Every kind, in row order.
    pub const ALL: [ControlKind; 5] = [
        ControlKind::Select,
        ControlKind::First,
        ControlKind::Prev,
        ControlKind::Next,
        ControlKind::Last,
    ];

    /// Identifier prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Last => "last",
            Self::Select => "select",
        }
    }

    /// The control's identifier within session `session_id`.
    pub fn custom_id(self, session_id: u32) -> String {
        format!("{}{}", self.as_str(), session_id)
    }

    /// Decode an identifier, returning `None` if it belongs to another session.
    pub fn parse(custom_id: &str, session_id: u32) -> Option<Self> {
        let suffix = session_id.to_string();
        Self::ALL.into_iter().find(|kind| {
            custom_id
                .strip_prefix(kind.as_str())
                .is_some_and(|rest| rest == suffix)
        })
    }
}

/// Select option label for a page: `"{n}: {title}"`.
pub fn page_option_label(page_num: usize, page: &Embed) -> String {
    match page.title() {
        Some(title) if title.chars().count() > MAX_TITLE_CHARS => {
            let cut: String = title.chars().take(TRUNCATED_TITLE_CHARS).collect();
            format!("{page_num}: {cut}...")
        }
        Some(title) => format!("{page_num}: {title}"),
        None => format!("{page_num}: {MISSING_TITLE}"),
    }
}

// ============================================================================
// ControlSet
// ============================================================================

/// Builds control rows for one session.
#[derive(Debug, Clone, Copy)]
pub struct ControlSet<'a> {
    config: &'a PaginatorConfig,
    pages: &'a [Embed],
    session_id: u32,
}

impl<'a> ControlSet<'a> {
    pub fn new(config: &'a PaginatorConfig, pages: &'a [Embed], session_id: u32) -> Self {
        Self {
            config,
            pages,
            session_id,
        }
    }

    /// Highest page number.
    #[inline]
    pub fn top(&self) -> usize {
        self.pages.len()
    }

    /// Identifiers of every control that can report an activation.
    pub fn custom_ids(&self) -> Vec<String> {
        let config = self.config;
        ControlKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                ControlKind::Select => config.use_select,
                ControlKind::Prev | ControlKind::Next => config.use_buttons,
                ControlKind::First | ControlKind::Last => {
                    config.use_buttons && config.use_first_last
                }
            })
            .map(|kind| kind.custom_id(self.session_id))
            .collect()
    }

    /// All rows for page `current` (1-based).
    pub fn build(&self, current: usize) -> PaginatorResult<Vec<ActionRow>> {
        let mut rows = Vec::with_capacity(3);

        if self.config.use_select {
            rows.push(self.select_row(current)?);
        }

        let auxiliary = self.auxiliary_buttons(current);
        let leftover = if self.config.use_buttons {
            let mut row = self.buttons_row(current)?;
            let mut leftover = Vec::new();
            for (name, button) in auxiliary {
                if row.is_full() {
                    leftover.push((name, button));
                } else {
                    row.push(button)?;
                }
            }
            rows.push(row);
            leftover
        } else {
            auxiliary
        };

        if let Some(row) = self.overflow_row(leftover)? {
            rows.push(row);
        }
        Ok(rows)
    }

    /// The page selector.
    pub fn select_row(&self, current: usize) -> PaginatorResult<ActionRow> {
        let options = self
            .pages
            .iter()
            .enumerate()
            .map(|(i, page)| {
                let page_num = i + 1;
                SelectOption::new(page_option_label(page_num, page), page_num.to_string())
            })
            .collect();
        let menu = SelectMenu::new(ControlKind::Select.custom_id(self.session_id), options)?
            .with_placeholder(self.counter(current));
        Ok(ActionRow::select(menu))
    }

    /// Previous/next buttons, with the optional index counter and first/last shortcuts.
    pub fn buttons_row(&self, current: usize) -> PaginatorResult<ActionRow> {
        let config = self.config;
        let disable_left = current == 1;
        let disable_right = current == self.top();

        let mut row = ActionRow::new();
        if config.use_first_last {
            row.push(self.nav_button(
                ControlKind::First,
                config.styles.first,
                &config.labels.first,
                &config.emojis.first,
                disable_left,
            ))?;
        }
        row.push(self.nav_button(
            ControlKind::Prev,
            config.styles.prev,
            &config.labels.prev,
            &config.emojis.prev,
            disable_left,
        ))?;
        if config.index_button_enabled() {
            row.push(
                Button::new(config.styles.index)
                    .with_label(self.counter(current))
                    .disabled(true),
            )?;
        }
        row.push(self.nav_button(
            ControlKind::Next,
            config.styles.next,
            &config.labels.next,
            &config.emojis.next,
            disable_right,
        ))?;
        if config.use_first_last {
            row.push(self.nav_button(
                ControlKind::Last,
                config.styles.last,
                &config.labels.last,
                &config.emojis.last,
                disable_right,
            ))?;
        }
        Ok(row)
    }

    fn nav_button(
        &self,
        kind: ControlKind,
        style: ButtonStyle,
        label: &str,
        emoji: &Emoji,
        disabled: bool,
    ) -> Button {
        Button::new(style)
            .with_label(label)
            .with_emoji(emoji.clone())
            .with_custom_id(kind.custom_id(self.session_id))
            .disabled(disabled)
    }

    /// Link and custom buttons, tagged with their option name.
    fn auxiliary_buttons(&self, current: usize) -> Vec<(&'static str, Button)> {
        let config = self.config;
        let mut buttons = Vec::new();
        if config.use_link_button {
            let label = config.link_label.for_page(current).unwrap_or_default();
            let url = config.link_url.for_page(current).unwrap_or_default();
            buttons.push(("link", Button::link(label, url)));
        }
        if let Some(label) = &config.custom_button_label {
            buttons.push((
                "custom",
                Button::new(config.custom_button_style)
                    .with_label(label.clone())
                    .with_optional_emoji(config.custom_button_emoji.clone())
                    .disabled(true),
            ));
        }
        buttons
    }

    /// Row for auxiliary buttons that found no room in the navigation row.
    fn overflow_row(
        &self,
        leftover: Vec<(&'static str, Button)>,
    ) -> PaginatorResult<Option<ActionRow>> {
        let Some((first, _)) = leftover.first() else {
            return Ok(None);
        };
        if !self.config.use_overflow {
            return Err(PaginatorError::TooManyButtons { control: *first });
        }
        let mut row = ActionRow::new();
        for (_, button) in leftover {
            row.push(button)?;
        }
        Ok(Some(row))
    }

    fn counter(&self, current: usize) -> String {
        format!("{} {}/{}", self.config.labels.index, current, self.top())
    }
}
