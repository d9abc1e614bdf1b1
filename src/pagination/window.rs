use std::ops::Range;

/// Fixed-size page window over an ordered result set.
///
/// Pages are 1-indexed; a requested page outside `1..=total_pages` is clamped
/// to the nearest bound. An empty result set has no pages and sits on page 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    page: usize,
    page_size: usize,
    total_items: usize,
}

impl PageWindow {
    pub fn new(requested_page: usize, page_size: usize, total_items: usize) -> Self {
        let page_size = page_size.max(1);
        let last_page = total_items.div_ceil(page_size).max(1);
        Self {
            page: requested_page.clamp(1, last_page),
            page_size,
            total_items,
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.total_items.div_ceil(self.page_size)
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    pub fn range(&self) -> Range<usize> {
        let start = self.offset().min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.range();
        &items[range.start.min(items.len())..range.end.min(items.len())]
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn previous(&self) -> Self {
        Self::new(self.page.saturating_sub(1), self.page_size, self.total_items)
    }

    pub fn next(&self) -> Self {
        Self::new(self.page + 1, self.page_size, self.total_items)
    }
}
