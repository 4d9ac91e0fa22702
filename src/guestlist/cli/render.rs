//! # Rendering Module
//!
//! Turns `CmdResult` data into styled terminal text through the templates in
//! [`super::templates`].
//!
//! Layout calculations (width, truncation, padding) stay in Rust because they
//! need Unicode-aware processing. Templates handle presentation: which style
//! a value gets and how the pieces are arranged on a line.
//!
//! Every public `render_*` function detects color support on stdout. The
//! `*_internal` variants take an explicit color flag so tests can compare
//! plain text.

use super::styles::{names, GUEST_THEME};
use super::templates::{LIST_TEMPLATE, MESSAGES_TEMPLATE, STATS_TEMPLATE, TEXT_LIST_TEMPLATE};
use console::Term;
use guestlist::commands::{CmdMessage, MessageLevel, PageInfo};
use guestlist::filter::{DisplayAttendee, Stats};
use guestlist::model::{AttendeeStatus, Table};
use minijinja::{Environment, Value};
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width reserved for the attendee name column.
pub const NAME_WIDTH: usize = 36;
pub const TABLE_WIDTH: usize = 9;

pub const ICON_ARRIVED: &str = "✔";
pub const ICON_MISSING: &str = "✘";
pub const ICON_PENDING: &str = "·";

#[derive(Serialize)]
struct RowData {
    index: String,
    icon: &'static str,
    status_style: &'static str,
    name: String,
    padding: String,
    table: String,
    table_style: &'static str,
    guests: String,
}

#[derive(Serialize)]
struct ListData {
    rows: Vec<RowData>,
    empty: bool,
    show_footer: bool,
    footer: String,
}

#[derive(Serialize)]
struct MessageData {
    content: String,
    style: &'static str,
}

#[derive(Serialize)]
struct MessagesData {
    messages: Vec<MessageData>,
}

#[derive(Serialize)]
struct TextListData {
    lines: Vec<String>,
    empty_message: String,
}

fn render_template<T: Serialize>(
    template: &'static str,
    data: &T,
    use_color: Option<bool>,
) -> Result<String, minijinja::Error> {
    let use_color = use_color.unwrap_or_else(|| Term::stdout().features().colors_supported());

    let mut env = Environment::new();
    env.add_filter("style", move |value: Value, name: String| -> String {
        GUEST_THEME.apply(&name, &value.to_string(), use_color)
    });
    env.add_template("view", template)?;
    env.get_template("view")?.render(data)
}

/// Renders one page of attendees.
pub fn render_attendee_list(listed: &[DisplayAttendee], page: Option<PageInfo>) -> String {
    render_attendee_list_internal(listed, page, None)
}

fn render_attendee_list_internal(
    listed: &[DisplayAttendee],
    page: Option<PageInfo>,
    use_color: Option<bool>,
) -> String {
    let index_width = listed
        .iter()
        .map(|d| d.position.to_string().len())
        .max()
        .unwrap_or(1);

    let rows = listed
        .iter()
        .map(|d| row_data(d, index_width))
        .collect::<Vec<_>>();

    let (show_footer, footer) = match page {
        Some(p) if p.total_pages > 1 => (true, page_footer(&p)),
        _ => (false, String::new()),
    };

    let data = ListData {
        empty: rows.is_empty(),
        rows,
        show_footer,
        footer,
    };

    render_template(LIST_TEMPLATE, &data, use_color)
        .unwrap_or_else(|e| format!("Render error: {}\n", e))
}

fn page_footer(p: &PageInfo) -> String {
    let mut footer = format!(
        "page {} / {} ({} attendees)",
        p.page, p.total_pages, p.total_items
    );
    if let Some(prev) = p.prev {
        footer.push_str(&format!("  prev: -p {}", prev));
    }
    if let Some(next) = p.next {
        footer.push_str(&format!("  next: -p {}", next));
    }
    footer
}

fn row_data(d: &DisplayAttendee, index_width: usize) -> RowData {
    let a = &d.attendee;
    let (icon, status_style) = match a.status() {
        AttendeeStatus::Arrived => (ICON_ARRIVED, names::ARRIVED),
        AttendeeStatus::Missing => (ICON_MISSING, names::MISSING),
        AttendeeStatus::Pending => (ICON_PENDING, names::PENDING),
    };

    let name = truncate_to_width(&a.full_name(), NAME_WIDTH);
    let padding = " ".repeat(NAME_WIDTH.saturating_sub(name.width()));

    let (table, table_style) = match a.table {
        Table::Principal => (a.table.to_string(), names::PRINCIPAL),
        Table::Numbered(n) => (format!("table {}", n), names::LIST_TABLE),
    };

    let guests = match a.guest_count {
        1 => "1 guest".to_string(),
        n => format!("{} guests", n),
    };

    RowData {
        index: format!("{:>width$}.", d.position, width = index_width),
        icon,
        status_style,
        name,
        padding,
        table: format!("{:<width$}", table, width = TABLE_WIDTH),
        table_style,
        guests,
    }
}

pub fn render_stats(stats: &Stats) -> String {
    render_stats_internal(stats, None)
}

fn render_stats_internal(stats: &Stats, use_color: Option<bool>) -> String {
    match render_template(STATS_TEMPLATE, stats, use_color) {
        Ok(out) => format!("{}\n", out),
        Err(_) => format!(
            "Total {}  Arrived {}  Missing {}  Pending {}\n",
            stats.total, stats.arrived, stats.missing, stats.pending
        ),
    }
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    let data = TextListData {
        lines: lines.to_vec(),
        empty_message: empty_message.to_string(),
    };
    render_template(TEXT_LIST_TEMPLATE, &data, None)
        .unwrap_or_else(|_| format!("{}\n", empty_message))
}

/// Renders command messages, one per line, styled by level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    render_messages_internal(messages, None)
}

fn render_messages_internal(messages: &[CmdMessage], use_color: Option<bool>) -> String {
    if messages.is_empty() {
        return String::new();
    }

    let data = MessagesData {
        messages: messages
            .iter()
            .map(|msg| MessageData {
                content: msg.content.clone(),
                style: match msg.level {
                    MessageLevel::Info => names::INFO,
                    MessageLevel::Success => names::SUCCESS,
                    MessageLevel::Warning => names::WARNING,
                    MessageLevel::Error => names::ERROR,
                },
            })
            .collect(),
    };

    render_template(MESSAGES_TEMPLATE, &data, use_color).unwrap_or_else(|_| {
        messages
            .iter()
            .map(|m| format!("{}\n", m.content))
            .collect()
    })
}

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
