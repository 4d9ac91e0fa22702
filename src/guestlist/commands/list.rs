use crate::commands::{CmdResult, PageInfo};
use crate::error::Result;
use crate::filter::{self, Stats};
use crate::model::Attendee;
use crate::pagination::{paginate, ViewState};
use tracing::debug;

/// Filters, paginates and counts. Stats cover the whole list, not just the
/// filtered rows.
pub fn run(attendees: &[Attendee], view: &ViewState, page_size: usize) -> Result<CmdResult> {
    let filtered = filter::apply(attendees, view.filter());
    let page = paginate(&filtered, page_size, view.page());
    debug!(
        matched = filtered.len(),
        page = page.page,
        total_pages = page.total_pages,
        "derived list view"
    );

    let mut shown = view.clone();
    shown.set_page(page.page);
    let prev = page.has_prev().then(|| {
        let mut v = shown.clone();
        v.prev_page();
        v.page()
    });
    let next = page.has_next().then(|| {
        let mut v = shown.clone();
        v.next_page(page.total_pages);
        v.page()
    });

    let info = PageInfo {
        page: page.page,
        total_pages: page.total_pages,
        total_items: page.total_items,
        prev,
        next,
    };
    Ok(CmdResult::default()
        .with_listed(page.items, info)
        .with_stats(Stats::compute(attendees)))
}
