//! # CLI Templates
//!
//! Terminal output is rendered from minijinja templates kept as standalone
//! files under `templates/` and embedded here at compile time.
//!
//! Line breaks in the templates are explicit: every template ends with a
//! newline and loops emit one line per item. Layout math (widths, padding,
//! truncation) is done in Rust before the data reaches a template; templates
//! only choose styles and arrange pre-computed strings.
pub const LIST_TEMPLATE: &str = include_str!("templates/list.tmp");
pub const STATS_TEMPLATE: &str = include_str!("templates/stats.tmp");
pub const MESSAGES_TEMPLATE: &str = include_str!("templates/messages.tmp");
pub const TEXT_LIST_TEMPLATE: &str = include_str!("templates/text_list.tmp");
