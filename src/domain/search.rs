//! Search query and pagination types shared by repositories and services.

/// Number of documents per result page.
pub const PAGE_SIZE: u32 = 25;

/// What a document listing should return.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentQuery {
    /// Every document, ordered by id ascending.
    FullListing,
    /// Documents whose text fields match the query, most relevant first.
    /// Equal scores are ordered by id ascending.
    RankedSearch(String),
}

impl DocumentQuery {
    /// Builds a query from an optional `q` parameter.
    ///
    /// Absent or blank input lists everything.
    pub fn from_param(q: Option<&str>) -> Self {
        match q.map(str::trim) {
            Some(text) if !text.is_empty() => DocumentQuery::RankedSearch(text.to_string()),
            _ => DocumentQuery::FullListing,
        }
    }

    /// The search text, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            DocumentQuery::FullListing => None,
            DocumentQuery::RankedSearch(text) => Some(text),
        }
    }
}

/// A 1-based page number resolved to `offset`/`limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub page_size: u32,
}

impl PageRequest {
    /// Returns `None` for page 0.
    pub fn new(page: u32) -> Option<Self> {
        (page > 0).then_some(Self {
            page,
            page_size: PAGE_SIZE,
        })
    }

    pub fn first() -> Self {
        Self {
            page: 1,
            page_size: PAGE_SIZE,
        }
    }

    pub fn offset(&self) -> i64 {
        (i64::from(self.page) - 1) * i64::from(self.page_size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.page_size)
    }
}

/// One page of results plus the totals needed to render pagination.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: i64) -> Self {
        Self {
            items,
            page: request.page,
            page_size: request.page_size,
            total_items,
        }
    }

    /// True when this page holds no items: either nothing matched or the page
    /// lies beyond the last one.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn total_pages(&self) -> u32 {
        if self.page_size == 0 || self.total_items <= 0 {
            return 0;
        }
        let size = i64::from(self.page_size);
        u32::try_from((self.total_items + size - 1) / size).unwrap_or(u32::MAX)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }
}
