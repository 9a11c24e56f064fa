/// Recipes shown per page of the result grid
pub const RECIPES_PER_PAGE: usize = 6;

/// 1-based page cursor over a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: usize,
    page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: RECIPES_PER_PAGE,
        }
    }
}

impl PageState {
    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Highest valid page for `total` items; never below 1
    pub fn max_page(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    /// Move to `page` clamped into `[1, max_page(total)]`.
    ///
    /// Returns `false` when the clamped page equals the current one.
    pub fn set(&mut self, page: usize, total: usize) -> bool {
        let clamped = page.clamp(1, self.max_page(total));
        if clamped == self.page {
            return false;
        }
        self.page = clamped;
        true
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    /// Items of the current page, `[(page-1)*size, page*size)`; empty when out of range
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= items.len() {
            return &[];
        }
        let end = start.saturating_add(self.page_size).min(items.len());
        &items[start..end]
    }
}
