//! Per-option type checking of raw TOML tables.
//!
//! Every option accepts a fixed set of value kinds. The table is checked in
//! declaration order and the first mismatch aborts with
//! [`ConfigError::IncorrectDataType`]; errors are not accumulated.

use slirc_components::{ButtonStyle, Emoji, RoleId, UserId};
use toml::{Table, Value};

use super::types::{ConfigError, OnlyFor, PaginatorConfig, TextOption};

/// Every recognised option, in the order they are checked.
pub const OPTION_NAMES: &[&str] = &[
    "content",
    "hidden",
    "author_only",
    "only_for",
    "dm",
    "use_overflow",
    "timeout",
    "disable_after_timeout",
    "delete_after_timeout",
    "use_select",
    "use_buttons",
    "use_index_button",
    "use_link_button",
    "use_first_last",
    "first_label",
    "prev_label",
    "index_label",
    "next_label",
    "last_label",
    "link_label",
    "link_url",
    "custom_button_label",
    "first_emoji",
    "prev_emoji",
    "next_emoji",
    "last_emoji",
    "custom_button_emoji",
    "first_style",
    "prev_style",
    "index_style",
    "next_style",
    "last_style",
    "custom_button_style",
];

const KIND_BOOL: &str = "bool";
const KIND_INT: &str = "non-negative int";
const KIND_STR: &str = "str";
const KIND_TEXT: &str = "str or list(str)";
const KIND_EMOJI: &str = "emoji str or {id, name, animated} table";
const KIND_STYLE: &str = "ButtonStyle name or int 1-5";
const KIND_ONLY_FOR: &str = "{user = id} / {role = id} table, or list of them";

impl PaginatorConfig {
    /// Type-check a raw option table and build the typed config.
    ///
    /// Missing options keep their defaults. Cross-field rules are not applied
    /// here; they need the page count and run at session construction.
    pub fn from_table(table: &Table) -> Result<Self, ConfigError> {
        if let Some(unknown) = table.keys().find(|k| !OPTION_NAMES.contains(&k.as_str())) {
            return Err(ConfigError::UnknownOption(unknown.clone()));
        }

        let mut config = Self::default();
        let opts = Options(table);

        if let Some(content) = opts.text("content")? {
            config.content = Some(content);
        }
        opts.bool_into("hidden", &mut config.hidden)?;
        opts.bool_into("author_only", &mut config.author_only)?;
        if let Some(value) = table.get("only_for") {
            config.only_for = Some(parse_only_for(value)?);
        }
        opts.bool_into("dm", &mut config.dm)?;
        opts.bool_into("use_overflow", &mut config.use_overflow)?;
        if let Some(value) = table.get("timeout") {
            let secs = value
                .as_integer()
                .and_then(|v| u64::try_from(v).ok())
                .ok_or_else(|| ConfigError::incorrect("timeout", KIND_INT, value))?;
            config.timeout = Some(secs);
        }
        opts.bool_into("disable_after_timeout", &mut config.disable_after_timeout)?;
        opts.bool_into("delete_after_timeout", &mut config.delete_after_timeout)?;
        opts.bool_into("use_select", &mut config.use_select)?;
        opts.bool_into("use_buttons", &mut config.use_buttons)?;
        if let Some(flag) = opts.bool("use_index_button")? {
            config.use_index_button = Some(flag);
        }
        opts.bool_into("use_link_button", &mut config.use_link_button)?;
        opts.bool_into("use_first_last", &mut config.use_first_last)?;

        opts.str_into("first_label", &mut config.labels.first)?;
        opts.str_into("prev_label", &mut config.labels.prev)?;
        opts.str_into("index_label", &mut config.labels.index)?;
        opts.str_into("next_label", &mut config.labels.next)?;
        opts.str_into("last_label", &mut config.labels.last)?;
        if let Some(label) = opts.text("link_label")? {
            config.link_label = label;
        }
        if let Some(url) = opts.text("link_url")? {
            config.link_url = url;
        }
        if let Some(label) = opts.str("custom_button_label")? {
            config.custom_button_label = Some(label);
        }

        opts.emoji_into("first_emoji", &mut config.emojis.first)?;
        opts.emoji_into("prev_emoji", &mut config.emojis.prev)?;
        opts.emoji_into("next_emoji", &mut config.emojis.next)?;
        opts.emoji_into("last_emoji", &mut config.emojis.last)?;
        if let Some(emoji) = opts.emoji("custom_button_emoji")? {
            config.custom_button_emoji = Some(emoji);
        }

        opts.style_into("first_style", &mut config.styles.first)?;
        opts.style_into("prev_style", &mut config.styles.prev)?;
        opts.style_into("index_style", &mut config.styles.index)?;
        opts.style_into("next_style", &mut config.styles.next)?;
        opts.style_into("last_style", &mut config.styles.last)?;
        opts.style_into("custom_button_style", &mut config.custom_button_style)?;

        Ok(config)
    }
}

impl TryFrom<Table> for PaginatorConfig {
    type Error = ConfigError;

    fn try_from(table: Table) -> Result<Self, Self::Error> {
        Self::from_table(&table)
    }
}

/// Typed accessors over the raw table.
struct Options<'a>(&'a Table);

impl Options<'_> {
    fn bool(&self, field: &'static str) -> Result<Option<bool>, ConfigError> {
        self.0
            .get(field)
            .map(|v| v.as_bool().ok_or_else(|| ConfigError::incorrect(field, KIND_BOOL, v)))
            .transpose()
    }

    fn bool_into(&self, field: &'static str, slot: &mut bool) -> Result<(), ConfigError> {
        if let Some(flag) = self.bool(field)? {
            *slot = flag;
        }
        Ok(())
    }

    fn str(&self, field: &'static str) -> Result<Option<String>, ConfigError> {
        self.0
            .get(field)
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ConfigError::incorrect(field, KIND_STR, v))
            })
            .transpose()
    }

    fn str_into(&self, field: &'static str, slot: &mut String) -> Result<(), ConfigError> {
        if let Some(text) = self.str(field)? {
            *slot = text;
        }
        Ok(())
    }

    fn text(&self, field: &'static str) -> Result<Option<TextOption>, ConfigError> {
        self.0.get(field).map(|v| parse_text(field, v)).transpose()
    }

    fn emoji(&self, field: &'static str) -> Result<Option<Emoji>, ConfigError> {
        self.0.get(field).map(|v| parse_emoji(field, v)).transpose()
    }

    fn emoji_into(&self, field: &'static str, slot: &mut Emoji) -> Result<(), ConfigError> {
        if let Some(emoji) = self.emoji(field)? {
            *slot = emoji;
        }
        Ok(())
    }

    fn style_into(&self, field: &'static str, slot: &mut ButtonStyle) -> Result<(), ConfigError> {
        if let Some(value) = self.0.get(field) {
            *slot = parse_style(field, value)?;
        }
        Ok(())
    }
}

fn parse_text(field: &'static str, value: &Value) -> Result<TextOption, ConfigError> {
    match value {
        Value::String(text) => Ok(TextOption::Shared(text.clone())),
        Value::Array(items) => items
            .iter()
            .map(|item| {
                item.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ConfigError::incorrect(field, KIND_TEXT, item))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(TextOption::PerPage),
        other => Err(ConfigError::incorrect(field, KIND_TEXT, other)),
    }
}

fn parse_emoji(field: &'static str, value: &Value) -> Result<Emoji, ConfigError> {
    let incorrect = || ConfigError::incorrect(field, KIND_EMOJI, value);
    match value {
        Value::String(raw) => Emoji::parse(raw).map_err(|_| incorrect()),
        Value::Table(table) => {
            let id = table
                .get("id")
                .and_then(Value::as_integer)
                .and_then(|id| u64::try_from(id).ok())
                .ok_or_else(incorrect)?;
            let name = table
                .get("name")
                .and_then(Value::as_str)
                .filter(|name| !name.is_empty())
                .ok_or_else(incorrect)?;
            let animated = match table.get("animated") {
                None => false,
                Some(flag) => flag.as_bool().ok_or_else(incorrect)?,
            };
            Ok(Emoji::custom(id, name, animated))
        }
        _ => Err(incorrect()),
    }
}

fn parse_style(field: &'static str, value: &Value) -> Result<ButtonStyle, ConfigError> {
    let parsed = match value {
        Value::Integer(code) => ButtonStyle::from_code(*code).ok(),
        Value::String(name) => name.parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| ConfigError::incorrect(field, KIND_STYLE, value))
}

fn parse_only_for(value: &Value) -> Result<OnlyFor, ConfigError> {
    let mut only = OnlyFor::default();
    match value {
        Value::Table(entry) => push_only_for_entry(&mut only, entry, value)?,
        Value::Array(entries) => {
            for item in entries {
                let entry = item
                    .as_table()
                    .ok_or_else(|| ConfigError::incorrect("only_for", KIND_ONLY_FOR, item))?;
                push_only_for_entry(&mut only, entry, item)?;
            }
        }
        other => return Err(ConfigError::incorrect("only_for", KIND_ONLY_FOR, other)),
    }
    Ok(only)
}

fn push_only_for_entry(only: &mut OnlyFor, entry: &Table, raw: &Value) -> Result<(), ConfigError> {
    let incorrect = || ConfigError::incorrect("only_for", KIND_ONLY_FOR, raw);
    let id_of = |v: &Value| v.as_integer().and_then(|id| u64::try_from(id).ok());

    match (entry.get("user"), entry.get("role")) {
        (Some(user), None) if entry.len() == 1 => {
            only.users.push(UserId(id_of(user).ok_or_else(incorrect)?));
        }
        (None, Some(role)) if entry.len() == 1 => {
            only.roles.push(RoleId(id_of(role).ok_or_else(incorrect)?));
        }
        _ => return Err(incorrect()),
    }
    Ok(())
}
