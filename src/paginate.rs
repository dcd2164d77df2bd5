// Windowing over a filtered list. Pages are 1-based.

#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page: usize,
    page_size: usize,
}

impl<T> Paginator<T> {
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Paginator {
            items,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Replaces the backing list. The current page is kept; callers that
    /// want to jump back to the start call `go_to_page(1)`.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages()
    }

    pub fn has_previous_page(&self) -> bool {
        self.page > 1
    }

    /// The window of items on the current page.
    pub fn page_items(&self) -> &[T] {
        let start = (self.page - 1) * self.page_size;
        if start >= self.items.len() {
            return &[];
        }
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Advances one page; a no-op on the last page.
    pub fn next_page(&mut self) {
        if self.has_next_page() {
            self.page += 1;
        }
    }

    /// Goes back one page; a no-op on the first page.
    pub fn previous_page(&mut self) {
        if self.has_previous_page() {
            self.page -= 1;
        }
    }

    /// Jumps to a page; out-of-range targets are ignored.
    pub fn go_to_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.page = page;
        }
    }

    /// Changes the page size and resets to the first page, so the reader
    /// never lands past the end of the re-windowed list.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }
}
