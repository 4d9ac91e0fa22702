//! Styles for the guestlist CLI.
//!
//! Templates never name colors. They refer to semantic style names (`arrived`,
//! `list-index`, ...) through the `style` filter and this module decides what
//! those names look like. Changing the look of the CLI means editing the
//! theme below, not the templates.
//!
//! When stdout does not support colors (pipes, `TERM=dumb`) the filter leaves
//! the text untouched. An unknown style name is prefixed with `(!?)` so typos
//! in templates show up in tests.

use console::Style;
use once_cell::sync::Lazy;
use std::collections::HashMap;

pub const MISSING_STYLE_INDICATOR: &str = "(!?)";

/// Style identifiers shared between templates and renderers.
pub mod names {
    pub const MUTED: &str = "muted";
    pub const FAINT: &str = "faint";
    pub const ERROR: &str = "error";
    pub const WARNING: &str = "warning";
    pub const SUCCESS: &str = "success";
    pub const INFO: &str = "info";
    pub const TITLE: &str = "title";
    // Attendee status
    pub const ARRIVED: &str = "arrived";
    pub const MISSING: &str = "missing";
    pub const PENDING: &str = "pending";
    // List columns
    pub const LIST_INDEX: &str = "list-index";
    pub const LIST_NAME: &str = "list-name";
    pub const LIST_TABLE: &str = "list-table";
    pub const PRINCIPAL: &str = "principal";
}

/// Named `console::Style`s applied by the template `style` filter.
#[derive(Clone, Default)]
pub struct Theme {
    styles: HashMap<String, Style>,
}

impl Theme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: &str, style: Style) -> Self {
        self.styles.insert(name.to_string(), style);
        self
    }

    pub fn apply(&self, name: &str, text: &str, use_color: bool) -> String {
        match self.styles.get(name) {
            Some(style) if use_color => style.apply_to(text).force_styling(true).to_string(),
            Some(_) => text.to_string(),
            None => format!("{} {}", MISSING_STYLE_INDICATOR, text),
        }
    }
}

pub static GUEST_THEME: Lazy<Theme> = Lazy::new(|| {
    let muted = Style::new().color256(245);
    let success = Style::new().green();

    Theme::new()
        .add(names::MUTED, muted.clone())
        .add(names::FAINT, Style::new().color256(241))
        .add(names::ERROR, Style::new().red().bold())
        .add(names::WARNING, Style::new().yellow().bold())
        .add(names::SUCCESS, success.clone())
        .add(names::INFO, muted.clone())
        .add(names::TITLE, Style::new().bold())
        .add(names::ARRIVED, success)
        .add(names::MISSING, Style::new().red())
        .add(names::PENDING, muted.clone())
        .add(names::LIST_INDEX, Style::new().yellow())
        .add(names::LIST_NAME, Style::new())
        .add(names::LIST_TABLE, Style::new().cyan())
        .add(names::PRINCIPAL, Style::new().magenta().bold())
});
