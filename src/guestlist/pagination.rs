use crate::filter::{Filter, StatusFilter, TableFilter};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// One page of a (usually filtered) list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The page actually shown, after clamping the request.
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
}

impl<T> Page<T> {
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Never less than one: an empty list still has a (blank) first page.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a requested page into `[1, total_pages]`.
pub fn safe_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

pub fn paginate<T: Clone>(items: &[T], page_size: usize, requested: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);
    let page = safe_page(requested, total_pages);

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    let slice = items.get(start..end).unwrap_or_default();

    Page {
        items: slice.to_vec(),
        page,
        total_pages,
        total_items: items.len(),
        page_size,
    }
}

/// The criteria behind the displayed list plus the requested page.
///
/// Any change to a criterion sends the user back to page 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    filter: Filter,
    page: usize,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            filter: Filter::default(),
            page: 1,
        }
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        if search != self.filter.search {
            self.filter.search = search;
            self.page = 1;
        }
    }

    pub fn set_table(&mut self, table: TableFilter) {
        if table != self.filter.table {
            self.filter.table = table;
            self.page = 1;
        }
    }

    pub fn set_status(&mut self, status: StatusFilter) {
        if status != self.filter.status {
            self.filter.status = status;
            self.page = 1;
        }
    }

    /// Requests a page. Out of range values are clamped when paginating.
    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn next_page(&mut self, total_pages: usize) {
        self.page = safe_page(self.page + 1, total_pages);
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Table;

    #[test]
    fn empty_list_has_one_page() {
        assert_eq!(total_pages(0, 10), 1);
        let page = paginate::<u32>(&[], 10, 1);
        assert!(page.items.is_empty());
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(25, 10), 3);
    }

    #[test]
    fn slices_the_requested_page() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 10, 3);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.page, 3);
        assert!(page.has_prev());
        assert!(!page.has_next());
    }

    #[test]
    fn page_zero_is_page_one() {
        let items: Vec<u32> = (1..=25).collect();
        assert_eq!(paginate(&items, 10, 0), paginate(&items, 10, 1));
    }

    #[test]
    fn page_past_the_end_is_the_last_page() {
        let items: Vec<u32> = (1..=25).collect();
        let last = paginate(&items, 10, 3);
        assert_eq!(paginate(&items, 10, 99), last);
    }

    #[test]
    fn changing_a_criterion_resets_the_page() {
        let mut view = ViewState::new();
        view.set_page(4);
        view.set_search("ana");
        assert_eq!(view.page(), 1);

        view.set_page(2);
        view.set_table(TableFilter::Only(Table::Principal));
        assert_eq!(view.page(), 1);

        view.set_page(3);
        view.set_status(StatusFilter::Missing);
        assert_eq!(view.page(), 1);
    }

    #[test]
    fn unchanged_criterion_keeps_the_page() {
        let mut view = ViewState::new();
        view.set_search("ana");
        view.set_page(2);
        view.set_search("ana");
        assert_eq!(view.page(), 2);
    }

    #[test]
    fn next_and_prev_stay_in_bounds() {
        let mut view = ViewState::new();
        view.prev_page();
        assert_eq!(view.page(), 1);
        view.next_page(2);
        view.next_page(2);
        assert_eq!(view.page(), 2);
    }
}
