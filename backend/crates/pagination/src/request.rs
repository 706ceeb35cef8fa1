//! Offset-based page requests.

use serde::{Deserialize, Serialize};

/// Page size used when callers do not ask for one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page a caller may request; larger sizes are clamped.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Ordering applied to the listing's sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Oldest or smallest key first.
    #[default]
    Ascending,
    /// Newest or largest key first.
    Descending,
}

/// A zero-based page index paired with a page size and sort direction.
///
/// ## Invariants
/// - `size` is always within `1..=MAX_PAGE_SIZE`.
///
/// # Examples
/// ```
/// use pagination::{PageRequest, SortDirection};
///
/// let request = PageRequest::first(20);
/// assert_eq!(request.page(), 0);
/// assert_eq!(request.offset(), 0);
/// assert_eq!(request.direction(), SortDirection::Ascending);
///
/// let next = request.next();
/// assert_eq!(next.offset(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "PageRequestDto", into = "PageRequestDto")]
pub struct PageRequest {
    page: u32,
    size: u32,
    direction: SortDirection,
}

/// Wire form of [`PageRequest`]; sizes are clamped on the way in.
#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PageRequestDto {
    page: u32,
    size: u32,
    #[serde(default)]
    direction: SortDirection,
}

impl From<PageRequestDto> for PageRequest {
    fn from(value: PageRequestDto) -> Self {
        Self::new(value.page, value.size).with_direction(value.direction)
    }
}

impl From<PageRequest> for PageRequestDto {
    fn from(value: PageRequest) -> Self {
        Self {
            page: value.page,
            size: value.size,
            direction: value.direction,
        }
    }
}

impl PageRequest {
    /// Build a request, clamping `size` into `1..=MAX_PAGE_SIZE`.
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            direction: SortDirection::Ascending,
        }
    }

    /// Request the first page with the given size.
    #[must_use]
    pub fn first(size: u32) -> Self {
        Self::new(0, size)
    }

    /// Replace the sort direction.
    #[must_use]
    pub const fn with_direction(mut self, direction: SortDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of items in the page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Requested sort direction.
    #[must_use]
    pub const fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Number of items to skip before this page starts.
    #[must_use]
    pub fn offset(&self) -> usize {
        let offset = u64::from(self.page).saturating_mul(u64::from(self.size));
        usize::try_from(offset).unwrap_or(usize::MAX)
    }

    /// Page size as a `usize` for slicing and `take`.
    #[must_use]
    pub fn limit(&self) -> usize {
        usize::try_from(self.size).unwrap_or(usize::MAX)
    }

    /// Rows a repository should fetch to detect whether a further page exists.
    #[must_use]
    pub fn window(&self) -> usize {
        self.limit().saturating_add(1)
    }

    /// The request for the following page, keeping size and direction.
    #[must_use]
    pub const fn next(&self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            size: self.size,
            direction: self.direction,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for page request arithmetic.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 1)]
    #[case(20, 20)]
    #[case(500, MAX_PAGE_SIZE)]
    fn size_is_clamped(#[case] requested: u32, #[case] expected: u32) {
        assert_eq!(PageRequest::new(0, requested).size(), expected);
    }

    #[rstest]
    #[case(r#"{"page":0,"size":0}"#, 1)]
    #[case(r#"{"page":3,"size":500}"#, MAX_PAGE_SIZE)]
    #[case(r#"{"page":3,"size":7}"#, 7)]
    fn deserialised_size_is_clamped(#[case] payload: &str, #[case] expected: u32) {
        let request: PageRequest = serde_json::from_str(payload).expect("deserialise");
        assert_eq!(request.size(), expected);
        assert_eq!(request.direction(), SortDirection::Ascending);
    }

    #[rstest]
    fn serialised_form_keeps_direction() {
        let request = PageRequest::new(2, 10).with_direction(SortDirection::Descending);
        let json = serde_json::to_string(&request).expect("serialise");
        let decoded: PageRequest = serde_json::from_str(&json).expect("deserialise");
        assert_eq!(decoded, request);
    }

    #[rstest]
    fn offset_saturates_instead_of_overflowing() {
        let request = PageRequest::new(u32::MAX, MAX_PAGE_SIZE);
        assert!(request.offset() > 0);
    }

    #[rstest]
    fn next_keeps_direction() {
        let request = PageRequest::first(5).with_direction(SortDirection::Descending);
        let next = request.next();
        assert_eq!(next.page(), 1);
        assert_eq!(next.direction(), SortDirection::Descending);
    }

    #[rstest]
    fn default_is_first_page_of_default_size() {
        let request = PageRequest::default();
        assert_eq!(request.page(), 0);
        assert_eq!(request.size(), DEFAULT_PAGE_SIZE);
        assert_eq!(request.window(), 21);
    }
}
