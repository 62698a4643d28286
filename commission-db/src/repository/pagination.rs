/// Offset-based page selection for record listings
///
/// # Example
/// ```
/// use commission_db::repository::pagination::PageRequest;
///
/// let first = PageRequest::new(10, 0);
/// let third = PageRequest::for_page(10, 3);
/// assert_eq!(third.offset, 20);
/// assert_eq!(first.bounds(25), 0..10);
/// assert_eq!(third.bounds(25), 20..25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Maximum number of items to return
    pub limit: usize,
    /// Number of items to skip
    pub offset: usize,
}

impl PageRequest {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// Page number is 1-based; 0 is treated as 1.
    pub fn for_page(page_size: usize, page_number: usize) -> Self {
        let page_number = page_number.max(1);
        Self {
            limit: page_size,
            offset: (page_number - 1) * page_size,
        }
    }

    /// Index range of this page within a collection of `total` items.
    pub fn bounds(&self, total: usize) -> std::ops::Range<usize> {
        let start = self.offset.min(total);
        let end = self.offset.saturating_add(self.limit).min(total);
        start..end
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
        }
    }
}

/// One page of a listing together with the size of the whole listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Total number of items across all pages
    pub total: usize,
    pub limit: usize,
    pub offset: usize,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: usize, request: PageRequest) -> Self {
        Self {
            items,
            total,
            limit: request.limit,
            offset: request.offset,
        }
    }

    pub fn has_more(&self) -> bool {
        self.offset + self.items.len() < self.total
    }

    /// Current page number (1-based)
    pub fn page_number(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            (self.offset / self.limit) + 1
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.limit == 0 {
            1
        } else {
            self.total.div_ceil(self.limit)
        }
    }

    /// Converts the items, keeping the paging metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            limit: self.limit,
            offset: self.offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_clamp_to_total() {
        assert_eq!(PageRequest::new(10, 40).bounds(25), 25..25);
        assert_eq!(PageRequest::new(usize::MAX, 5).bounds(25), 5..25);
        assert_eq!(PageRequest::for_page(10, 0).offset, 0);
    }

    #[test]
    fn test_page_metadata() {
        let page = Page::new(vec![1, 2, 3], 23, PageRequest::for_page(10, 3));
        assert!(!page.has_more());
        assert_eq!(page.page_number(), 3);
        assert_eq!(page.total_pages(), 3);

        let doubled = page.map(|n| n * 2);
        assert_eq!(doubled.items, vec![2, 4, 6]);
        assert_eq!(doubled.total, 23);
    }
}
