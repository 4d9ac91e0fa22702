use crate::config::GuestConfig;
use crate::filter::{DisplayAttendee, Stats};
use crate::model::Attendee;

pub mod add;
pub mod clear;
pub mod config;
pub mod delete;
pub mod helpers;
pub mod import;
pub mod list;
pub mod stats;
pub mod toggle;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Where the listed page sits within the filtered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    /// The page to request for the previous/next view, when there is one.
    pub prev: Option<usize>,
    pub next: Option<usize>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Attendee>,
    pub listed: Vec<DisplayAttendee>,
    pub page: Option<PageInfo>,
    pub stats: Option<Stats>,
    pub config: Option<GuestConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, attendees: Vec<Attendee>) -> Self {
        self.affected = attendees;
        self
    }

    pub fn with_listed(mut self, listed: Vec<DisplayAttendee>, page: PageInfo) -> Self {
        self.listed = listed;
        self.page = Some(page);
        self
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_config(mut self, config: GuestConfig) -> Self {
        self.config = Some(config);
        self
    }
}
