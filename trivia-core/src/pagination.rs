//! Page slicing for question listings

use serde::Deserialize;

/// Questions shown per page on every listing endpoint
pub const QUESTIONS_PER_PAGE: usize = 10;

/// 1-indexed page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u64);

impl Page {
    /// Create a page, clamping to a minimum of 1.
    pub fn new(page: u64) -> Self {
        Self(page.max(1))
    }

    /// Parse a raw `?page=` value.
    ///
    /// Absent, non-numeric and non-positive values fall back to page 1.
    /// Positive integers too large for `u64` saturate, so they still land
    /// past the end of any listing.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw.map(str::trim) else {
            return Self::default();
        };
        let digits = raw.strip_prefix('+').unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Self::default();
        }
        Self::new(digits.parse::<u64>().unwrap_or(u64::MAX))
    }

    pub fn number(&self) -> u64 {
        self.0
    }

    /// Half-open index range `[start, end)` covered by this page.
    pub fn bounds(&self, per_page: usize) -> (usize, usize) {
        let skipped = usize::try_from(self.0 - 1).unwrap_or(usize::MAX);
        let start = skipped.saturating_mul(per_page);
        (start, start.saturating_add(per_page))
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

/// Query parameters for pagination.
///
/// Kept as a string so a non-numeric value degrades to page 1
/// instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Page::parse(params.page.as_deref())
    }
}

/// Slice `items` down to the requested page.
///
/// A page past the end yields an empty slice, not an error.
pub fn paginate<T>(page: Page, per_page: usize, items: &[T]) -> &[T] {
    let (start, end) = page.bounds(per_page);
    if start >= items.len() {
        return &[];
    }
    &items[start..end.min(items.len())]
}
