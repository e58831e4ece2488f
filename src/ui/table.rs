//! Selection, pagination, sorting and filter-cycling shared by the list pages

use std::ops::Range;

/// Direction of an active column sort
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn indicator(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }
}

/// Advance the page's sort state one step through
/// `unsorted → col1 ↑ → col1 ↓ → col2 ↑ → … → unsorted`
pub fn cycle_sort<C: Copy + PartialEq>(current: &mut Option<(C, SortOrder)>, columns: &[C]) {
    *current = match *current {
        None => columns.first().map(|c| (*c, SortOrder::Ascending)),
        Some((column, SortOrder::Ascending)) => Some((column, SortOrder::Descending)),
        Some((column, SortOrder::Descending)) => match columns.iter().position(|c| *c == column) {
            Some(i) if i + 1 < columns.len() => Some((columns[i + 1], SortOrder::Ascending)),
            _ => None,
        },
    };
}

/// Advance a column filter one step through `All → <each option> → All`
pub fn cycle_filter<T: Clone + PartialEq>(current: &mut Option<T>, options: &[T]) {
    *current = match current {
        None => options.first().cloned(),
        Some(value) => match options.iter().position(|o| o == value) {
            Some(i) if i + 1 < options.len() => Some(options[i + 1].clone()),
            _ => None,
        },
    };
}

/// Cursor over a filtered list, paginated in fixed-size pages
///
/// The selection is an index into the filtered rows; the visible page is
/// derived from it, so moving the cursor past a page edge turns the page.
#[derive(Debug, Clone, Copy)]
pub struct TableNav {
    pub selected: usize,
    pub page_size: usize,
}

impl TableNav {
    pub fn new(page_size: usize) -> Self {
        Self {
            selected: 0,
            page_size,
        }
    }

    /// Pull the selection back in range after the row set changed
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn next_page(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + self.page_size).min(len - 1);
        }
    }

    pub fn previous_page(&mut self) {
        self.selected = self.selected.saturating_sub(self.page_size);
    }

    pub fn page_index(&self) -> usize {
        self.selected / self.page_size
    }

    pub fn page_count(&self, len: usize) -> usize {
        if len == 0 {
            1
        } else {
            len.div_ceil(self.page_size)
        }
    }

    /// Row range of the currently visible page
    pub fn page_range(&self, len: usize) -> Range<usize> {
        let start = (self.page_index() * self.page_size).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// Selection position within the visible page
    pub fn selected_on_page(&self) -> usize {
        self.selected % self.page_size
    }
}
