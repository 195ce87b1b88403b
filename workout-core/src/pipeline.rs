//! Derived list view: filter, paginate, then attach per-user totals.
//!
//! Nothing here is cached. [`ListView`] only remembers the criteria, the page
//! number and the page length; every call to [`ListView::render`] recomputes
//! the visible rows from the full entry slice.

use crate::entry::WorkoutEntry;
use crate::users::{user_aggregate, UserAggregate};

/// Page lengths offered by the list view.
pub const PAGE_LENGTHS: [usize; 3] = [5, 10, 20];
pub const DEFAULT_PAGE_LENGTH: usize = 5;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the user name. Empty matches everything.
    pub search: String,
    /// Exact, case-sensitive workout type. `None` or empty matches everything.
    pub workout_type: Option<String>,
}

impl FilterCriteria {
    pub fn matches(&self, entry: &WorkoutEntry) -> bool {
        let name_match = entry
            .user_name
            .to_lowercase()
            .contains(&self.search.to_lowercase());
        let type_match = match self.workout_type.as_deref() {
            Some(filter) if !filter.is_empty() => entry.workout_type == filter,
            _ => true,
        };
        name_match && type_match
    }
}

/// Entries matching `criteria`, in their original order.
pub fn filter_entries<'a>(
    entries: &'a [WorkoutEntry],
    criteria: &FilterCriteria,
) -> Vec<&'a WorkoutEntry> {
    entries.iter().filter(|e| criteria.matches(e)).collect()
}

/// Number of pages needed for `count` items; never less than one.
pub fn total_pages(count: usize, page_length: usize) -> usize {
    count.div_ceil(page_length.max(1)).max(1)
}

/// The 1-based `page` of `items`. Pages outside the range give an empty slice.
pub fn page_slice<T>(items: &[T], page: i64, page_length: usize) -> &[T] {
    if page < 1 {
        return &[];
    }
    let start = match usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(page_length))
    {
        Some(start) if start < items.len() => start,
        _ => return &[],
    };
    let end = start.saturating_add(page_length).min(items.len());
    &items[start..end]
}

/// One visible row. The totals cover the user's entries across the whole
/// store, not just the filtered ones.
#[derive(Debug, Clone, PartialEq)]
pub struct PageRow<'a> {
    pub entry: &'a WorkoutEntry,
    pub aggregate: UserAggregate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    pub rows: Vec<PageRow<'a>>,
    pub page: i64,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListView {
    criteria: FilterCriteria,
    page: i64,
    page_length: usize,
}

impl Default for ListView {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_LENGTH)
    }
}

impl ListView {
    pub fn new(page_length: usize) -> Self {
        Self {
            criteria: FilterCriteria::default(),
            page: 1,
            page_length: page_length.max(1),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn page_length(&self) -> usize {
        self.page_length
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.criteria.search = search.into();
        self.reset_page();
    }

    pub fn set_type_filter(&mut self, workout_type: Option<String>) {
        self.criteria.workout_type = workout_type;
        self.reset_page();
    }

    pub fn set_page_length(&mut self, page_length: usize) {
        self.page_length = page_length.max(1);
        self.reset_page();
    }

    pub fn reset_page(&mut self) {
        self.page = 1;
    }

    /// Move by `delta` pages. Not clamped: callers check
    /// [`PageView::can_go_previous`] / [`PageView::can_go_next`] first.
    pub fn change_page(&mut self, delta: i64) {
        self.page = self.page.saturating_add(delta);
    }

    pub fn render<'a>(&self, entries: &'a [WorkoutEntry]) -> PageView<'a> {
        let filtered = filter_entries(entries, &self.criteria);
        let total_pages = total_pages(filtered.len(), self.page_length);
        let rows = page_slice(&filtered, self.page, self.page_length)
            .iter()
            .copied()
            .map(|entry| PageRow {
                entry,
                aggregate: user_aggregate(entries, &entry.user_name),
            })
            .collect();

        PageView {
            rows,
            page: self.page,
            total_pages,
            filtered_count: filtered.len(),
            can_go_previous: self.page > 1,
            can_go_next: self.page < total_pages as i64,
        }
    }
}
