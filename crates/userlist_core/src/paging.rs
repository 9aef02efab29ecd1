use crate::consts::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use serde::{Deserialize, Serialize};

/// Bounds used to normalize requested page sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLimits {
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

impl PageLimits {
    /// Clamp a raw request into a usable page. Out-of-range values are
    /// normalized, never rejected.
    pub fn normalize(&self, page: i64, size: i64) -> Page {
        let max = self.max_size.max(1);
        let size = if size <= 0 {
            self.default_size.clamp(1, max)
        } else {
            usize::try_from(size).unwrap_or(usize::MAX).min(max)
        };
        Page {
            page: usize::try_from(page.max(0)).unwrap_or(usize::MAX),
            size,
        }
    }
}

/// A normalized page: `size` is always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub page: usize,
    pub size: usize,
}

impl Page {
    pub fn offset(&self) -> usize {
        self.page.saturating_mul(self.size)
    }

    /// Positions `[start, end)` of this page within a sequence of `len`
    /// items, or `None` when the page starts past the end.
    pub fn window(&self, len: usize) -> Option<std::ops::Range<usize>> {
        let start = self.offset();
        if start >= len {
            return None;
        }
        Some(start..start.saturating_add(self.size).min(len))
    }
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE as i64
}

/// Raw `{page, size}` parameters as received from a caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: default_size(),
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }
}

/// Raw `{query, page, size}` parameters. The query travels as `q` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRequest {
    #[serde(default, rename = "q")]
    pub query: String,
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, page: i64, size: i64) -> Self {
        Self {
            query: query.into(),
            page,
            size,
        }
    }

    /// Query with surrounding whitespace removed.
    pub fn trimmed_query(&self) -> &str {
        self.query.trim()
    }

    pub fn paging(&self) -> PageRequest {
        PageRequest::new(self.page, self.size)
    }
}

/// A slice of results plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total_count: usize, page: Page) -> Self {
        let total_pages = total_count.div_ceil(page.size);
        Self {
            items,
            total_count,
            page: page.page,
            page_size: page.size,
            total_pages,
            // page < total_pages - 1, without underflow on empty results
            has_next: page.page.saturating_add(1) < total_pages,
            has_previous: page.page > 0,
        }
    }

    pub fn empty(total_count: usize, page: Page) -> Self {
        Self::new(Vec::new(), total_count, page)
    }
}
